//! Medical-advice request table and the fixed disclaimer.
//!
//! Checked only after every emotional category has missed: someone who is
//! anxious *about* their medication gets the anxiety response, not this.

pub(crate) const KEYWORDS: &[&str] = &[
    "diagnose",
    "medication",
    "prescription",
    "treatment",
    "therapy recommendation",
    "what should i take",
    "medical advice",
    "doctor says",
    "symptoms",
];

pub(crate) const MESSAGE: &str = "I understand you're looking for guidance, but I'm not qualified to provide medical advice or diagnoses. For health-related concerns, it's important to speak with a healthcare professional, therapist, or counselor who can give you proper care. I'm here to listen and provide emotional support though. How are you feeling about this situation?";
