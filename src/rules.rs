//! Static keyword and response tables, one module per category.
//!
//! These tables are data, not logic: the engine under `src/engine/` decides
//! how they are matched and composed. Keyword phrases are lowercase and are
//! matched by substring containment, so a phrase can hit inside a longer word.
//! All pools must stay non-empty; `CompiledCategories::new` enforces that for
//! overrides, and the classification tests exercise every built-in phrase.

#[path = "rules/anger.rs"]
pub(crate) mod anger;
#[path = "rules/anxiety.rs"]
pub(crate) mod anxiety;
#[path = "rules/crisis.rs"]
pub(crate) mod crisis;
#[path = "rules/depression.rs"]
pub(crate) mod depression;
#[path = "rules/general.rs"]
pub(crate) mod general;
#[path = "rules/loneliness.rs"]
pub(crate) mod loneliness;
#[path = "rules/medical.rs"]
pub(crate) mod medical;

#[cfg(test)]
#[path = "rules/tests.rs"]
mod tests;
