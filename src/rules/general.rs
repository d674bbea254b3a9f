//! General fallback pools: an opening line plus a follow-up question.
//!
//! No keywords; this is what every input gets when nothing else matched.
//! The composed record carries no suggested actions and no resources.

pub(crate) const OPENERS: &[&str] = &[
    "Thank you for sharing that with me. It takes courage to open up about how you're feeling. I'm here to listen.",
    "I appreciate you trusting me with your thoughts. Your feelings are important and valid.",
    "It sounds like you're going through something. I'm glad you're reaching out, and I want you to know that I'm here to support you.",
    "I'm here to listen without judgment. Sometimes it helps just to have someone hear what you're experiencing.",
    "Your wellbeing matters. It's okay to take things one moment at a time, and I'm here to walk through this with you.",
];

pub(crate) const FOLLOW_UPS: &[&str] = &[
    "What's been on your mind lately?",
    "How can I best support you right now?",
    "Would you like to tell me more about what you're experiencing?",
    "What would be most helpful for you today?",
    "How are you taking care of yourself through this?",
];
