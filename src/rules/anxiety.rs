//! Anxiety table: checked first among the emotional categories.

use crate::{Category, EmotionData};

pub(crate) const DATA: EmotionData = EmotionData {
    category: Category::Anxiety,
    keywords: &[
        "anxious",
        "anxiety",
        "worried",
        "panic",
        "nervous",
        "scared",
        "fear",
        "terrified",
        "overwhelmed",
        "stress",
        "stressed",
    ],
    openers: &[
        "I hear that you're feeling anxious, and I want you to know that's a completely normal human experience. Anxiety can feel overwhelming, but you're not alone in this.",
        "It sounds like anxiety is weighing on you right now. That takes courage to share, and I'm glad you did.",
        "Anxiety can make everything feel more intense. Thank you for trusting me with how you're feeling.",
    ],
    suggestions: &[
        "Try the 4-4-6 breathing technique: breathe in for 4 counts, hold for 4, breathe out for 6",
        "Ground yourself by naming 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, 1 you can taste",
        "Focus on what you can control in this moment, rather than what you can't",
        "Consider writing down your worries - sometimes getting them out of your head helps",
    ],
    lead_in: "Here's something that might help: ",
    prompt: "What usually helps you feel a bit more grounded?",
};
