//! Loneliness table: last of the emotional categories.

use crate::{Category, EmotionData};

pub(crate) const DATA: EmotionData = EmotionData {
    category: Category::Loneliness,
    keywords: &[
        "lonely",
        "alone",
        "isolated",
        "abandoned",
        "rejected",
        "disconnected",
        "nobody cares",
        "no friends",
    ],
    openers: &[
        "Loneliness can feel really heavy and isolating. Thank you for sharing that with me - it shows courage to reach out.",
        "I hear that you're feeling alone, and I want you to know that your feelings matter. Even though I'm an AI, I'm here with you right now.",
        "Feeling disconnected from others is one of the most difficult human experiences. You're not alone in feeling this way.",
    ],
    suggestions: &[
        "Consider reaching out to someone, even with a simple text or call - sometimes small connections help",
        "Try engaging in a community activity, even briefly - like a walk in a public space or visiting a library",
        "Remember that loneliness is temporary, even when it doesn't feel that way",
        "Practice self-compassion - treat yourself with the same kindness you'd show a good friend",
    ],
    lead_in: "",
    prompt: "What's one small way you might connect with the world around you today?",
};
