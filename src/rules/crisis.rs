//! Crisis keyword table and the fixed safety payload.
//!
//! Any hit here overrides every other category and returns `MESSAGE` and
//! `RESOURCES` verbatim, with no randomness. The phrase list errs on the side
//! of matching: "die" hits inside "dies", "hanging" inside "hanging out".
//! False positives are the accepted cost of never missing a real signal.

/// Phrases indicating possible self-harm risk.
pub(crate) const KEYWORDS: &[&str] = &[
    "suicide",
    "kill myself",
    "end it all",
    "hurt myself",
    "self harm",
    "die",
    "death",
    "want to die",
    "better off dead",
    "no point living",
    "cutting",
    "overdose",
    "jump",
    "hanging",
    "pills",
];

/// The safety message, identical on every crisis-matching call.
pub(crate) const MESSAGE: &str = "I'm hearing some serious distress, and I'm genuinely concerned about you. Please know there's help available right now:\n\n🆘 **National Suicide Prevention Lifeline: 988**\n🆘 **Crisis Text Line: Text HOME to 741741**\n\nYour life has value, and there are people trained to help you through this moment. This bot is not a substitute for professional help, but real people are standing by to support you. Please reach out to them.";

/// Resource lines rendered as a literal bulleted list, in this order.
pub(crate) const RESOURCES: &[&str] = &[
    "National Suicide Prevention Lifeline: 988",
    "Crisis Text Line: Text HOME to 741741",
    "Emergency Services: 911",
];
