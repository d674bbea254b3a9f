//! Classification and response engine.
//!
//! This module is the decision pipeline behind the public API in `src/api.rs`.
//! Classifying one input is a strictly ordered, single-pass dispatch:
//!
//! ```text
//! tables (rules/**) ──┐
//!                     │  CompiledCategories::new      (compiled.rs)
//!                     └───────────────┬──────────────
//!                                     │
//! input ── to_lowercase ──────────────┼─ TriggerInfo::scan   (trigger.rs)
//!                                     │    one CategoryMask bit per keyword hit
//!                                     v
//!                           respond (respond.rs)
//!                             - crisis first, always
//!                             - then anxiety > depression > anger > loneliness
//!                             - then medical-advice, then general fallback
//!                             - compose from pools via caller-supplied Rng
//!                                     │
//!                                     v
//!                              ResponseRecord
//! ```
//!
//! There is no saturation or backtracking here: categories are mutually
//! exclusive and the first matching bucket wins. The whole pipeline is pure
//! apart from pool selection, which draws on an `Rng` owned by the caller;
//! the crisis and medical-advice paths are fully deterministic.
//!
//! ## Responsibilities by module
//!
//! - `compiled.rs`: compiles the static tables (plus any configuration
//!   overrides) into validated matchers and owned pools, and defines
//!   `CategoryMask`.
//! - `trigger.rs`: scans the lowercased input against every matcher to build
//!   the mask of candidate buckets.
//! - `respond.rs`: priority dispatch over the mask and message composition.
//!
//! Matching is plain substring containment, deliberately not word-boundary
//! aware: "die" matches inside "dies". Changing that would change
//! classification behavior, so it stays.

#[path = "engine/compiled.rs"]
mod compiled;
#[path = "engine/respond.rs"]
mod respond;
#[path = "engine/trigger.rs"]
mod trigger;

pub(crate) use compiled::CompiledCategories;
#[allow(unused_imports)]
pub(crate) use compiled::{CategoryMask, EmotionSet, Matcher};
pub(crate) use respond::respond;
#[allow(unused_imports)]
pub(crate) use respond::Outcome;
#[allow(unused_imports)]
pub(crate) use trigger::TriggerInfo;
