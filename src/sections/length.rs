//! Length section - scores the password length.

use super::SectionResult;
use crate::features::FeatureSet;

const MIN_ADVISED_LENGTH: usize = 9;

/// Scores the length: `<5` -> 0, `5..=8` -> 1, `9..=12` -> 2, `>12` -> 3.
///
/// Advises when shorter than 9 characters.
pub fn length_section(features: &FeatureSet) -> SectionResult {
    let score = match features.length {
        0..=4 => 0.0,
        5..=8 => 1.0,
        9..=12 => 2.0,
        _ => 3.0,
    };

    let advice = (features.length < MIN_ADVISED_LENGTH).then(|| {
        format!(
            "Password is a little short, make it at least {} characters",
            MIN_ADVISED_LENGTH
        )
    });

    SectionResult { score, advice }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_length(length: usize) -> FeatureSet {
        FeatureSet {
            length,
            ..FeatureSet::default()
        }
    }

    #[test]
    fn test_length_section_bins() {
        let cases = [
            (0, 0.0),
            (4, 0.0),
            (5, 1.0),
            (8, 1.0),
            (9, 2.0),
            (12, 2.0),
            (13, 3.0),
            (64, 3.0),
        ];
        for (length, expected) in cases {
            assert_eq!(
                length_section(&with_length(length)).score,
                expected,
                "length {}",
                length
            );
        }
    }

    #[test]
    fn test_length_section_too_short() {
        let result = length_section(&with_length(8));
        assert_eq!(
            result.advice,
            Some("Password is a little short, make it at least 9 characters".to_string())
        );
    }

    #[test]
    fn test_length_section_exactly_advised() {
        let result = length_section(&with_length(9));
        assert_eq!(result.advice, None);
    }
}
