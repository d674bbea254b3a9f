mod api;
mod engine;
mod rules;

pub use api::{
    Category, CategoryOverride, ClassifyDetails, ClassifyResultVerbose, ConfigError, Engine,
    EngineConfig, ResponseRecord, classify, classify_verbose_with, classify_with,
};

// --- Internal types ---------------------------------------------------------

/// Static table backing one emotional category: the phrases that trigger it
/// and the pools the composer draws from.
///
/// The four emotional tables (anxiety, depression, anger, loneliness) live in
/// `src/rules/` and are compiled into matchers at engine construction; crisis,
/// medical-advice and the general fallback have their own shapes (fixed payload,
/// fixed disclaimer, opener/follow-up pools) and are kept as separate constants.
#[derive(Debug, Clone, Copy)]
pub(crate) struct EmotionData {
    pub category: Category,
    /// Lowercase trigger phrases, matched by substring containment.
    pub keywords: &'static [&'static str],
    /// Empathetic opening lines; one is chosen uniformly per call.
    pub openers: &'static [&'static str],
    /// Actionable suggestions; one is chosen uniformly per call, and the whole
    /// pool is exposed to the caller as candidate actions.
    pub suggestions: &'static [&'static str],
    /// Prefix placed before the chosen suggestion ("" for most categories).
    pub lead_in: &'static str,
    /// Fixed open-ended closing question.
    pub prompt: &'static str,
}
