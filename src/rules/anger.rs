//! Anger table.

use crate::{Category, EmotionData};

pub(crate) const DATA: EmotionData = EmotionData {
    category: Category::Anger,
    keywords: &[
        "angry",
        "mad",
        "furious",
        "rage",
        "hate",
        "frustrated",
        "irritated",
        "annoyed",
        "pissed",
        "livid",
    ],
    openers: &[
        "It sounds like you're feeling really frustrated or angry. Those are valid emotions, and it's okay to feel them.",
        "I can sense the intensity of what you're feeling. Anger often tells us that something important to us isn't being honored.",
        "Thank you for sharing these difficult feelings with me. It takes courage to express anger in a healthy way.",
    ],
    suggestions: &[
        "Try taking some deep breaths or counting to ten before responding to the situation",
        "Consider what's underneath the anger - sometimes it's hurt, fear, or feeling unheard",
        "Physical movement like walking or stretching can help release some of that intense energy",
        "Write down what's bothering you - sometimes getting it out helps clarify your feelings",
    ],
    lead_in: "",
    prompt: "What do you think is at the heart of these feelings?",
};
