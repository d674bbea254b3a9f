//! Table compilation and validation.
//!
//! This module holds the *static* side of the engine: everything derived from
//! the rule tables before any input is seen. Compilation does three things:
//!
//! 1. Merge the built-in tables from `src/rules/` with any
//!    [`CategoryOverride`]s from the configuration.
//! 2. Validate the result: every keyword list and every response pool must be
//!    non-empty, and overrides must apply to their category. Violations are
//!    `ConfigError`s, surfaced before the engine exists, so runtime selection
//!    from an empty pool is unreachable.
//! 3. Compile each keyword list into a single `Regex` alternation of escaped
//!    literals over the lowercased input. Searching with it is exactly
//!    case-insensitive substring containment, including inside longer words.

use crate::api::{Category, CategoryOverride, ConfigError, EngineConfig};
use crate::rules;
use regex::Regex;

bitflags::bitflags! {
    /// One bit per keyword-matchable category that hit the input.
    ///
    /// The general fallback has no keywords and therefore no bit.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CategoryMask: u8 {
        const CRISIS     = 1 << 0;
        const ANXIETY    = 1 << 1;
        const DEPRESSION = 1 << 2;
        const ANGER      = 1 << 3;
        const LONELINESS = 1 << 4;
        const MEDICAL    = 1 << 5;
    }
}

impl CategoryMask {
    /// The bit for `category`; empty for `General`, which never matches.
    pub(crate) fn of(category: Category) -> CategoryMask {
        match category {
            Category::Crisis => CategoryMask::CRISIS,
            Category::Anxiety => CategoryMask::ANXIETY,
            Category::Depression => CategoryMask::DEPRESSION,
            Category::Anger => CategoryMask::ANGER,
            Category::Loneliness => CategoryMask::LONELINESS,
            Category::MedicalAdvice => CategoryMask::MEDICAL,
            Category::General => CategoryMask::empty(),
        }
    }
}

/// A category's compiled keyword set.
#[derive(Debug)]
pub(crate) struct Matcher {
    category: Category,
    /// Lowercased phrases, kept for reporting which ones hit.
    phrases: Vec<String>,
    /// Alternation of the escaped phrases, searched against lowercased input.
    pattern: Regex,
}

impl Matcher {
    pub fn new(category: Category, phrases: Vec<String>) -> Result<Self, ConfigError> {
        if phrases.is_empty() {
            return Err(ConfigError::EmptyKeywords(category));
        }
        if phrases.iter().any(|p| p.trim().is_empty()) {
            // A blank phrase would match every input.
            return Err(ConfigError::BlankKeyword(category));
        }

        let phrases: Vec<String> = phrases.iter().map(|p| p.to_lowercase()).collect();
        let alternation =
            phrases.iter().map(|p| regex::escape(p)).collect::<Vec<_>>().join("|");
        let pattern = Regex::new(&alternation)
            .map_err(|source| ConfigError::Matcher { category, source })?;

        Ok(Self { category, phrases, pattern })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Does any phrase appear anywhere in the (already lowercased) input?
    pub fn is_match(&self, lower: &str) -> bool {
        self.pattern.is_match(lower)
    }

    /// All phrases contained in the input, in table order.
    pub fn hits(&self, lower: &str) -> Vec<String> {
        self.phrases.iter().filter(|p| lower.contains(p.as_str())).cloned().collect()
    }
}

/// One emotional category's compiled matcher and response pools.
#[derive(Debug)]
pub(crate) struct EmotionSet {
    pub matcher: Matcher,
    pub openers: Vec<String>,
    pub suggestions: Vec<String>,
    pub lead_in: &'static str,
    pub prompt: &'static str,
}

impl EmotionSet {
    pub fn category(&self) -> Category {
        self.matcher.category()
    }
}

/// The fully compiled, immutable rule tables an engine runs against.
#[derive(Debug)]
pub(crate) struct CompiledCategories {
    pub crisis: Matcher,
    /// The four emotional categories in dispatch order: anxiety, depression,
    /// anger, loneliness. `respond` relies on this ordering.
    pub emotions: Vec<EmotionSet>,
    pub medical: Matcher,
    pub general_openers: Vec<String>,
    pub general_follow_ups: Vec<String>,
}

impl CompiledCategories {
    pub fn new(config: &EngineConfig) -> Result<Self, ConfigError> {
        for overridden in &config.overrides {
            validate_override(overridden)?;
        }

        let crisis_override = override_for(config, Category::Crisis);
        let crisis = Matcher::new(
            Category::Crisis,
            replace_or(
                crisis_override.and_then(|o| o.keywords.as_deref()),
                rules::crisis::KEYWORDS,
            ),
        )?;

        let emotions = [
            rules::anxiety::DATA,
            rules::depression::DATA,
            rules::anger::DATA,
            rules::loneliness::DATA,
        ]
        .into_iter()
        .map(|data| compile_emotion(config, data))
        .collect::<Result<Vec<_>, _>>()?;

        let medical_override = override_for(config, Category::MedicalAdvice);
        let medical = Matcher::new(
            Category::MedicalAdvice,
            replace_or(
                medical_override.and_then(|o| o.keywords.as_deref()),
                rules::medical::KEYWORDS,
            ),
        )?;

        let general = override_for(config, Category::General);
        let general_openers = pool(
            Category::General,
            general.and_then(|o| o.openers.as_deref()),
            rules::general::OPENERS,
        )?;
        let general_follow_ups = pool(
            Category::General,
            general.and_then(|o| o.suggestions.as_deref()),
            rules::general::FOLLOW_UPS,
        )?;

        Ok(Self { crisis, emotions, medical, general_openers, general_follow_ups })
    }
}

fn compile_emotion(
    config: &EngineConfig,
    data: crate::EmotionData,
) -> Result<EmotionSet, ConfigError> {
    let overridden = override_for(config, data.category);
    let matcher = Matcher::new(
        data.category,
        replace_or(overridden.and_then(|o| o.keywords.as_deref()), data.keywords),
    )?;
    let openers = pool(data.category, overridden.and_then(|o| o.openers.as_deref()), data.openers)?;
    let suggestions =
        pool(data.category, overridden.and_then(|o| o.suggestions.as_deref()), data.suggestions)?;

    Ok(EmotionSet { matcher, openers, suggestions, lead_in: data.lead_in, prompt: data.prompt })
}

fn validate_override(overridden: &CategoryOverride) -> Result<(), ConfigError> {
    match overridden.category {
        Category::Crisis | Category::MedicalAdvice => {
            // Fixed payloads: only the trigger phrases may change.
            if overridden.openers.is_some() {
                return Err(ConfigError::UnsupportedOverride(overridden.category, "openers"));
            }
            if overridden.suggestions.is_some() {
                return Err(ConfigError::UnsupportedOverride(overridden.category, "suggestions"));
            }
        }
        Category::General => {
            if overridden.keywords.is_some() {
                return Err(ConfigError::UnsupportedOverride(overridden.category, "keywords"));
            }
        }
        Category::Anxiety | Category::Depression | Category::Anger | Category::Loneliness => {}
    }
    Ok(())
}

/// Last override for `category` wins; `None` keeps the built-in table.
fn override_for(config: &EngineConfig, category: Category) -> Option<&CategoryOverride> {
    config.overrides.iter().rev().find(|o| o.category == category)
}

fn replace_or(replacement: Option<&[String]>, defaults: &[&str]) -> Vec<String> {
    match replacement {
        Some(replacement) => replacement.to_vec(),
        None => defaults.iter().map(|s| s.to_string()).collect(),
    }
}

fn pool(
    category: Category,
    replacement: Option<&[String]>,
    defaults: &[&str],
) -> Result<Vec<String>, ConfigError> {
    let pool = replace_or(replacement, defaults);
    if pool.is_empty() {
        return Err(ConfigError::EmptyPool(category));
    }
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matcher_is_substring_containment() {
        let matcher = Matcher::new(
            Category::Crisis,
            vec!["die".to_string(), "kill myself".to_string()],
        )
        .unwrap();

        assert!(matcher.is_match("the plant dies in winter"));
        assert!(matcher.is_match("i want to kill myself"));
        assert!(!matcher.is_match("a quiet afternoon"));
    }

    #[test]
    fn matcher_reports_hits_in_table_order() {
        let matcher = Matcher::new(
            Category::Anxiety,
            vec!["worried".to_string(), "panic".to_string(), "stress".to_string()],
        )
        .unwrap();

        let hits = matcher.hits("stressed and worried");
        assert_eq!(hits, vec!["worried".to_string(), "stress".to_string()]);
    }

    #[test]
    fn blank_keyword_is_rejected() {
        match Matcher::new(Category::Anger, vec!["mad".to_string(), "  ".to_string()]) {
            Err(ConfigError::BlankKeyword(Category::Anger)) => {}
            other => panic!("expected BlankKeyword, got {other:?}"),
        }
    }

    #[test]
    fn emotions_compile_in_dispatch_order() {
        let compiled = CompiledCategories::new(&EngineConfig::default()).unwrap();
        let order: Vec<Category> = compiled.emotions.iter().map(|e| e.category()).collect();
        assert_eq!(
            order,
            vec![Category::Anxiety, Category::Depression, Category::Anger, Category::Loneliness]
        );
    }

    #[test]
    fn later_override_shadows_earlier_one() {
        let mut first = CategoryOverride::new(Category::Anger);
        first.keywords = Some(vec!["grr".to_string()]);
        let mut second = CategoryOverride::new(Category::Anger);
        second.keywords = Some(vec!["argh".to_string()]);

        let config = EngineConfig { overrides: vec![first, second] };
        let compiled = CompiledCategories::new(&config).unwrap();
        let anger = &compiled.emotions[2];

        assert!(anger.matcher.is_match("argh, not again"));
        assert!(!anger.matcher.is_match("grr"));
    }
}
