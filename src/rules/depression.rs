//! Depression table.

use crate::{Category, EmotionData};

pub(crate) const DATA: EmotionData = EmotionData {
    category: Category::Depression,
    keywords: &[
        "sad",
        "depressed",
        "down",
        "hopeless",
        "empty",
        "numb",
        "worthless",
        "useless",
        "tired",
        "exhausted",
        "dark",
    ],
    openers: &[
        "I'm sorry you're feeling this way. Depression can make everything feel heavy and difficult, but your feelings are valid and you matter.",
        "It takes strength to reach out when you're feeling down. I'm glad you're here, and I want you to know that you're not alone.",
        "I hear the pain in your words, and I want you to know that what you're experiencing is real and important.",
    ],
    suggestions: &[
        "Try one small act of self-care today - maybe a warm shower, listening to a favorite song, or stepping outside",
        "Consider writing down one thing you're grateful for, no matter how small",
        "Reach out to someone you trust, even if it's just to say hello",
        "Be gentle with yourself - healing isn't linear, and it's okay to have difficult days",
    ],
    lead_in: "",
    prompt: "What's one small thing that sometimes brings you a tiny bit of comfort?",
};
