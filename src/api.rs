use crate::engine::{self, CompiledCategories};
use once_cell::sync::Lazy;
use rand::Rng;
use std::fmt;
use std::time::{Duration, Instant};

static DEFAULT_ENGINE: Lazy<Engine> = Lazy::new(Engine::new);

/// Classification bucket for one input, in descending match priority.
///
/// Buckets are mutually exclusive: the first one whose keyword set matches
/// wins, and `Crisis` is always checked first. `General` is the fallback and
/// has no keyword set of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Crisis,
    Anxiety,
    Depression,
    Anger,
    Loneliness,
    MedicalAdvice,
    General,
}

impl Category {
    /// The keyword-matchable categories in dispatch order. `General` is not
    /// listed because it never matches; it is what remains when nothing does.
    pub(crate) const MATCHABLE: [Category; 6] = [
        Category::Crisis,
        Category::Anxiety,
        Category::Depression,
        Category::Anger,
        Category::Loneliness,
        Category::MedicalAdvice,
    ];

    /// Stable lowercase name, e.g. `"anxiety"` or `"medical-advice"`.
    pub fn name(self) -> &'static str {
        match self {
            Category::Crisis => "crisis",
            Category::Anxiety => "anxiety",
            Category::Depression => "depression",
            Category::Anger => "anger",
            Category::Loneliness => "loneliness",
            Category::MedicalAdvice => "medical-advice",
            Category::General => "general",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Structured result of one classification, ready for rendering.
///
/// Shape invariants (upheld by the engine, asserted in tests):
/// - `is_crisis == true` implies `resources` is populated and
///   `suggested_actions` is `None`.
/// - Non-crisis emotional responses populate `suggested_actions` (the whole
///   candidate pool, not just the chosen line) and never `resources`.
/// - The medical-advice disclaimer and the general fallback populate neither.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseRecord {
    /// Composed message text.
    pub content: String,
    /// True only for the fixed crisis safety payload.
    pub is_crisis: bool,
    /// Candidate actions for the matched emotional category, if any.
    pub suggested_actions: Option<Vec<String>>,
    /// Crisis resource lines, if any; rendered as a literal bulleted list.
    pub resources: Option<Vec<String>>,
}

/// Extra diagnostics returned by [`classify_verbose_with`].
///
/// This is intentionally compact: it exists for debugging and for the CLI
/// report, not for callers that just render responses.
#[derive(Debug, Clone)]
pub struct ClassifyDetails {
    /// The winning bucket.
    pub category: Category,
    /// Every bucket whose keyword set hit the input, in priority order.
    /// Shows what the tie-break policy discarded.
    pub triggered: Vec<Category>,
    /// Phrases of the winning keyword set found in the input. Empty for the
    /// general fallback.
    pub matched_keywords: Vec<String>,
    /// Wall-clock time spent scanning and composing.
    pub elapsed: Duration,
}

/// Result from [`classify_verbose_with`].
#[derive(Debug, Clone)]
pub struct ClassifyResultVerbose {
    pub record: ResponseRecord,
    pub details: ClassifyDetails,
}

/// Per-category table replacement, applied at engine construction.
///
/// A field left as `None` keeps the built-in table. Replacements are validated
/// by [`Engine::from_config`]: empty lists are rejected, as are fields that do
/// not apply to the category (keywords for `General`; openers or suggestions
/// for `Crisis` and `MedicalAdvice`, whose payloads are fixed).
#[derive(Debug, Clone)]
pub struct CategoryOverride {
    pub category: Category,
    /// Replacement trigger phrases (lowercased at compilation).
    pub keywords: Option<Vec<String>>,
    /// Replacement opening-line pool.
    pub openers: Option<Vec<String>>,
    /// Replacement suggestion pool; for `General` this replaces the follow-up
    /// question pool.
    pub suggestions: Option<Vec<String>>,
}

impl CategoryOverride {
    /// An override for `category` that changes nothing yet.
    pub fn new(category: Category) -> Self {
        Self { category, keywords: None, openers: None, suggestions: None }
    }
}

/// Engine configuration: a list of table overrides.
///
/// The default configuration is the built-in rule tables unchanged.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Applied in order; a later override of the same category shadows an
    /// earlier one.
    pub overrides: Vec<CategoryOverride>,
}

/// Construction-time configuration defect.
///
/// Classification itself never fails; the only failures are invalid tables,
/// rejected before the engine exists so that selection from an empty pool is
/// unreachable at runtime.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("category `{0}` has an empty keyword list")]
    EmptyKeywords(Category),
    #[error("category `{0}` has a blank keyword")]
    BlankKeyword(Category),
    #[error("category `{0}` has an empty response pool")]
    EmptyPool(Category),
    #[error("category `{0}` does not accept {1} overrides")]
    UnsupportedOverride(Category, &'static str),
    #[error("failed to compile keyword matcher for `{category}`")]
    Matcher {
        category: Category,
        #[source]
        source: regex::Error,
    },
}

/// A compiled classification engine: immutable keyword matchers and response
/// pools, safe to share across threads.
///
/// Most callers can use the free functions ([`classify`], [`classify_with`]),
/// which go through a lazily-initialized default engine. Construct an `Engine`
/// directly to supply custom tables.
#[derive(Debug)]
pub struct Engine {
    compiled: CompiledCategories,
}

impl Engine {
    /// Engine with the built-in rule tables.
    pub fn new() -> Self {
        // The built-in tables are statically non-empty, so this cannot fail.
        Self::from_config(&EngineConfig::default()).expect("built-in tables are valid")
    }

    /// Engine with the built-in tables plus the given overrides.
    ///
    /// Fails fast on any configuration defect; see [`ConfigError`].
    pub fn from_config(config: &EngineConfig) -> Result<Self, ConfigError> {
        Ok(Self { compiled: CompiledCategories::new(config)? })
    }

    /// Classify `input` using thread-local randomness for pool selection.
    ///
    /// `history` is the caller's prior utterances in chronological order. It is
    /// accepted for API stability and passed through only; matching never
    /// consults it.
    pub fn classify(&self, input: &str, history: &[String]) -> ResponseRecord {
        self.classify_with(input, history, &mut rand::thread_rng())
    }

    /// Classify `input` selecting from pools via the supplied random source.
    ///
    /// Supplying a seeded or mock `Rng` makes pool selection reproducible;
    /// the crisis and medical-advice paths never consult `rng` at all.
    pub fn classify_with<R: Rng>(&self, input: &str, _history: &[String], rng: &mut R) -> ResponseRecord {
        engine::respond(&self.compiled, input, rng).record
    }

    /// Classify `input` and return compact diagnostics alongside the record.
    pub fn classify_verbose_with<R: Rng>(
        &self,
        input: &str,
        _history: &[String],
        rng: &mut R,
    ) -> ClassifyResultVerbose {
        let started = Instant::now();
        let outcome = engine::respond(&self.compiled, input, rng);
        let elapsed = started.elapsed();

        ClassifyResultVerbose {
            record: outcome.record,
            details: ClassifyDetails {
                category: outcome.category,
                triggered: outcome.triggered,
                matched_keywords: outcome.matched,
                elapsed,
            },
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// Classify `input` with the default engine and thread-local randomness.
///
/// Total over all inputs: anything that matches no keyword set falls through
/// to the general supportive response.
///
/// # Example
/// ```
/// use solace::classify;
///
/// let out = classify("I feel so anxious about everything", &[]);
/// assert!(!out.is_crisis);
/// assert!(out.suggested_actions.is_some());
/// ```
pub fn classify(input: &str, history: &[String]) -> ResponseRecord {
    DEFAULT_ENGINE.classify(input, history)
}

/// Classify `input` with the default engine and the supplied random source.
///
/// Use this when you need reproducible pool selection.
///
/// # Example
/// ```
/// use rand::rngs::mock::StepRng;
/// use solace::classify_with;
///
/// let mut rng = StepRng::new(0, 0);
/// let a = classify_with("feeling lonely tonight", &[], &mut rng);
/// let b = classify_with("feeling lonely tonight", &[], &mut StepRng::new(0, 0));
/// assert_eq!(a, b);
/// ```
pub fn classify_with<R: Rng>(input: &str, history: &[String], rng: &mut R) -> ResponseRecord {
    DEFAULT_ENGINE.classify_with(input, history, rng)
}

/// Classify `input` with the default engine and return diagnostics.
pub fn classify_verbose_with<R: Rng>(
    input: &str,
    history: &[String],
    rng: &mut R,
) -> ClassifyResultVerbose {
    DEFAULT_ENGINE.classify_verbose_with(input, history, rng)
}
