//! Summary messages for strength levels and classifier labels.

use crate::types::{ModelLabel, StrengthLevel};

pub const AFFIRMATIVE_MESSAGE: &str = "All the main conditions are satisfied, nicely done!";

const UNKNOWN_LEVEL_MESSAGE: &str = "Unknown result.";
const ABNORMAL_LABEL_MESSAGE: &str = "Abnormal input, the password could not be classified.";

/// Summary message for a rule-based strength level.
pub fn strength_message(level: StrengthLevel) -> &'static str {
    match level {
        StrengthLevel::VeryWeak => {
            "Very weak: a password like this will be cracked right away!"
        }
        StrengthLevel::Weak => {
            "Weak: length or character mix is lacking, check the hints below and fix it!"
        }
        StrengthLevel::Fair => {
            "Fair: a little more care and this becomes a properly safe password."
        }
        StrengthLevel::Safe => "Safe: this looks like a decent password.",
        StrengthLevel::VerySafe => {
            "Very safe: a perfect password, keep building them like this!"
        }
    }
}

/// Summary message for a raw level, falling back outside `1..=5`.
pub fn strength_message_for(level: u8) -> &'static str {
    StrengthLevel::from_value(level)
        .map(strength_message)
        .unwrap_or(UNKNOWN_LEVEL_MESSAGE)
}

/// Summary message for a classifier label.
pub fn label_message(label: ModelLabel) -> &'static str {
    match label {
        ModelLabel::Weak => "Weak password: add length and more kinds of characters.",
        ModelLabel::Medium => "Medium password: decent, but it could be stronger.",
        ModelLabel::Strong => "Strong password: well done!",
    }
}

/// Summary message for a raw classifier output, falling back outside `0..=2`.
pub fn label_message_for(label: i64) -> &'static str {
    match ModelLabel::from_label(label) {
        Some(label) => label_message(label),
        None => {
            #[cfg(feature = "tracing")]
            tracing::warn!("Classifier returned an unexpected label: {}", label);
            ABNORMAL_LABEL_MESSAGE
        }
    }
}
