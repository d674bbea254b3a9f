//! Trigger scanning (input pre-classification).
//!
//! One pass over the lowercased input produces a [`CategoryMask`] with a bit
//! for every keyword set that hit. Dispatch in `respond.rs` then walks the
//! mask in priority order, so the scan itself carries no tie-break logic.
//!
//! Unlike a heuristic pre-filter, this scan *is* the match: a set bit means
//! the category's keyword test passed, not merely that it is worth trying.

use super::compiled::{CategoryMask, CompiledCategories};
use crate::api::Category;

/// Which keyword sets matched the input.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TriggerInfo {
    pub mask: CategoryMask,
}

impl TriggerInfo {
    /// Scan `lower` (already lowercased) against every compiled matcher.
    pub fn scan(compiled: &CompiledCategories, lower: &str) -> Self {
        let mut mask = CategoryMask::empty();

        if compiled.crisis.is_match(lower) {
            mask |= CategoryMask::CRISIS;
        }
        for set in &compiled.emotions {
            if set.matcher.is_match(lower) {
                mask |= CategoryMask::of(set.category());
            }
        }
        if compiled.medical.is_match(lower) {
            mask |= CategoryMask::MEDICAL;
        }

        TriggerInfo { mask }
    }

    /// The matched categories in priority order.
    pub fn triggered(&self) -> Vec<Category> {
        Category::MATCHABLE
            .into_iter()
            .filter(|c| self.mask.contains(CategoryMask::of(*c)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EngineConfig;

    fn compiled() -> CompiledCategories {
        CompiledCategories::new(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn scan_sets_one_bit_per_matching_set() {
        let compiled = compiled();
        let info = TriggerInfo::scan(&compiled, "sad, worried, and so angry");

        assert_eq!(
            info.mask,
            CategoryMask::ANXIETY | CategoryMask::DEPRESSION | CategoryMask::ANGER
        );
        assert_eq!(
            info.triggered(),
            vec![Category::Anxiety, Category::Depression, Category::Anger]
        );
    }

    #[test]
    fn scan_of_neutral_input_is_empty() {
        let compiled = compiled();
        let info = TriggerInfo::scan(&compiled, "the weather is nice today");

        assert!(info.mask.is_empty());
        assert!(info.triggered().is_empty());
    }

    #[test]
    fn crisis_bit_coexists_with_others() {
        let compiled = compiled();
        let info = TriggerInfo::scan(&compiled, "anxious and no point living");

        assert!(info.mask.contains(CategoryMask::CRISIS));
        assert!(info.mask.contains(CategoryMask::ANXIETY));
        assert_eq!(info.triggered().first(), Some(&Category::Crisis));
    }
}
