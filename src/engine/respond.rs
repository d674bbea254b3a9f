//! Priority dispatch and message composition.
//!
//! `respond` is the operational core: lowercase the input, scan it, then walk
//! the buckets strictly in priority order and build the record for the first
//! one that matched. Crisis and medical-advice return fixed payloads; the
//! emotional categories and the general fallback compose their text from
//! pools via the caller's `Rng`.
//!
//! The priority order is a deliberate safety choice (crisis absolutely first,
//! then the emotional buckets, medical-advice only when no emotion matched)
//! and must not be reordered.

use super::compiled::{CategoryMask, CompiledCategories, EmotionSet};
use super::trigger::TriggerInfo;
use crate::api::{Category, ResponseRecord};
use crate::rules;
use rand::Rng;
use rand::seq::SliceRandom;

/// A classification plus the diagnostics the verbose API exposes.
#[derive(Debug, Clone)]
pub(crate) struct Outcome {
    pub record: ResponseRecord,
    pub category: Category,
    /// Every bucket that matched, in priority order.
    pub triggered: Vec<Category>,
    /// Phrases of the winning keyword set found in the input.
    pub matched: Vec<String>,
}

/// Classify `input` against `compiled` tables; total over all strings.
pub(crate) fn respond<R: Rng>(
    compiled: &CompiledCategories,
    input: &str,
    rng: &mut R,
) -> Outcome {
    let lower = input.to_lowercase();
    let trigger = TriggerInfo::scan(compiled, &lower);
    let triggered = trigger.triggered();

    // Crisis short-circuits everything, with no randomness involved.
    if trigger.mask.contains(CategoryMask::CRISIS) {
        return Outcome {
            record: crisis_record(),
            category: Category::Crisis,
            triggered,
            matched: compiled.crisis.hits(&lower),
        };
    }

    // Emotional buckets in dispatch order (anxiety > depression > anger >
    // loneliness); first match wins even when several bits are set.
    for set in &compiled.emotions {
        if trigger.mask.contains(CategoryMask::of(set.category())) {
            return Outcome {
                record: emotion_record(set, rng),
                category: set.category(),
                triggered,
                matched: set.matcher.hits(&lower),
            };
        }
    }

    if trigger.mask.contains(CategoryMask::MEDICAL) {
        return Outcome {
            record: ResponseRecord {
                content: rules::medical::MESSAGE.to_string(),
                is_crisis: false,
                suggested_actions: None,
                resources: None,
            },
            category: Category::MedicalAdvice,
            triggered,
            matched: compiled.medical.hits(&lower),
        };
    }

    Outcome {
        record: general_record(compiled, rng),
        category: Category::General,
        triggered,
        matched: Vec::new(),
    }
}

fn crisis_record() -> ResponseRecord {
    ResponseRecord {
        content: rules::crisis::MESSAGE.to_string(),
        is_crisis: true,
        suggested_actions: None,
        resources: Some(rules::crisis::RESOURCES.iter().map(|s| s.to_string()).collect()),
    }
}

fn emotion_record<R: Rng>(set: &EmotionSet, rng: &mut R) -> ResponseRecord {
    let opener = pick(&set.openers, rng);
    let suggestion = pick(&set.suggestions, rng);
    let content = format!("{opener}\n\n{}{suggestion}\n\n{}", set.lead_in, set.prompt);

    ResponseRecord {
        content,
        is_crisis: false,
        // The entire pool, not just the chosen line.
        suggested_actions: Some(set.suggestions.clone()),
        resources: None,
    }
}

fn general_record<R: Rng>(compiled: &CompiledCategories, rng: &mut R) -> ResponseRecord {
    let opener = pick(&compiled.general_openers, rng);
    let follow_up = pick(&compiled.general_follow_ups, rng);

    ResponseRecord {
        content: format!("{opener}\n\n{follow_up}"),
        is_crisis: false,
        suggested_actions: None,
        resources: None,
    }
}

/// Uniform selection; pools are validated non-empty at construction.
fn pick<'a, R: Rng>(pool: &'a [String], rng: &mut R) -> &'a str {
    pool.choose(rng).map(String::as_str).expect("pools are non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::EngineConfig;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use rand::rngs::mock::StepRng;

    fn compiled() -> CompiledCategories {
        CompiledCategories::new(&EngineConfig::default()).unwrap()
    }

    #[test]
    fn crisis_wins_over_every_other_bucket() {
        let compiled = compiled();
        let mut rng = StepRng::new(0, 0);

        let out = respond(&compiled, "anxious, sad, furious, lonely, and no point living", &mut rng);
        assert_eq!(out.category, Category::Crisis);
        assert!(out.record.is_crisis);
        assert_eq!(out.triggered.first(), Some(&Category::Crisis));
        assert!(out.matched.contains(&"no point living".to_string()));
    }

    #[test]
    fn emotion_outranks_medical_advice() {
        let compiled = compiled();
        let mut rng = StepRng::new(0, 0);

        let out = respond(&compiled, "worried about my medication", &mut rng);
        assert_eq!(out.category, Category::Anxiety);
        assert_eq!(out.triggered, vec![Category::Anxiety, Category::MedicalAdvice]);
    }

    #[test]
    fn mock_rng_selects_pool_index_zero() {
        let compiled = compiled();
        let mut rng = StepRng::new(0, 0);

        let out = respond(&compiled, "i feel so alone", &mut rng);
        assert_eq!(out.category, Category::Loneliness);

        let set = &compiled.emotions[3];
        assert!(out.record.content.starts_with(&set.openers[0]));
        assert!(out.record.content.contains(&set.suggestions[0]));
    }

    #[test]
    fn identical_input_may_compose_differently() {
        let compiled = compiled();
        let mut rng = StdRng::seed_from_u64(3);

        // With 3 openers x 4 suggestions, 200 draws collapsing to one
        // composition would mean selection depends on the input text.
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            let out = respond(&compiled, "i am so frustrated", &mut rng);
            assert_eq!(out.category, Category::Anger);
            seen.insert(out.record.content);
        }
        assert!(seen.len() > 1);
    }

    #[test]
    fn empty_input_falls_through_to_general() {
        let compiled = compiled();
        let mut rng = StepRng::new(0, 0);

        let out = respond(&compiled, "", &mut rng);
        assert_eq!(out.category, Category::General);
        assert!(!out.record.content.is_empty());
        assert!(out.matched.is_empty());
    }
}
