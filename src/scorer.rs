//! Rule-based scorer - weighted step-function score and 5-level classification.

use secrecy::{ExposeSecret, SecretString};

use crate::features::{FeatureSet, extract_features};
use crate::feedback::{AFFIRMATIVE_MESSAGE, strength_message};
use crate::sections::{
    SectionResult, capital_section, digit_section, length_section, lowercase_section,
    special_section,
};
use crate::types::{RuleVerdict, StrengthLevel};

type Section = fn(&FeatureSet) -> SectionResult;

// Summation and advice order both follow this table.
const SECTIONS: [(&str, Section); 5] = [
    ("length", length_section),
    ("capital", capital_section),
    ("lowercase", lowercase_section),
    ("digit", digit_section),
    ("special", special_section),
];

/// Upper bound of [`calculate_score`].
pub const MAX_SCORE: f64 = 10.62;

/// Sums the contribution of every section.
///
/// The result lies in `0.0..=10.62`.
pub fn calculate_score(features: &FeatureSet) -> f64 {
    SECTIONS.iter().fold(0.0, |score, (_section_name, section_fn)| {
        let result = section_fn(features);

        #[cfg(feature = "tracing")]
        tracing::debug!("Section {} scored {:.2}", _section_name, result.score);

        score + result.score
    })
}

/// Maps a total score to a strength level.
///
/// Thresholds are inclusive upper bounds: 1, 3, 5, 7; anything above 7 is very safe.
pub fn classify_strength(score: f64) -> StrengthLevel {
    if score <= 1.0 {
        StrengthLevel::VeryWeak
    } else if score <= 3.0 {
        StrengthLevel::Weak
    } else if score <= 5.0 {
        StrengthLevel::Fair
    } else if score <= 7.0 {
        StrengthLevel::Safe
    } else {
        StrengthLevel::VerySafe
    }
}

/// Collects the advice of every section, in section order.
///
/// Advice is derived from the raw features, not from the score, so a password
/// can be rated safe and still receive a hint. Returns a single affirmative
/// message when no section has advice.
pub fn get_detailed_feedback(features: &FeatureSet) -> Vec<String> {
    let mut messages: Vec<String> = SECTIONS
        .iter()
        .filter_map(|(_, section_fn)| section_fn(features).advice)
        .collect();

    if messages.is_empty() {
        messages.push(AFFIRMATIVE_MESSAGE.to_string());
    }
    messages
}

/// Runs the full rule-based pipeline for one password.
pub fn evaluate_rules(password: &SecretString) -> RuleVerdict {
    let features = extract_features(password);
    let score = calculate_score(&features);
    let strength_level = classify_strength(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Rule evaluation: score {:.2}, level {}",
        score,
        strength_level.value()
    );

    RuleVerdict {
        password: SecretString::new(password.expose_secret().to_string().into()),
        score,
        strength_level,
        summary_message: strength_message(strength_level).to_string(),
        detail_messages: get_detailed_feedback(&features),
    }
}
