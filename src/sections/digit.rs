//! Digit section - scores numeric characters.

use super::SectionResult;
use crate::features::FeatureSet;

/// Scores digits: `<=1` -> 0, `2..=3` -> 0.38, `>3` -> 0.76.
///
/// Advises when there is at most one digit.
pub fn digit_section(features: &FeatureSet) -> SectionResult {
    let score = match features.digit {
        0..=1 => 0.0,
        2..=3 => 0.38,
        _ => 0.76,
    };

    let advice = (features.digit <= 1)
        .then(|| "Not enough digits, how about including at least 2?".to_string());

    SectionResult { score, advice }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_digit(digit: usize) -> FeatureSet {
        FeatureSet {
            length: digit,
            digit,
            ..FeatureSet::default()
        }
    }

    #[test]
    fn test_digit_section_bins() {
        let cases = [(0, 0.0), (1, 0.0), (2, 0.38), (3, 0.38), (4, 0.76), (12, 0.76)];
        for (digit, expected) in cases {
            assert_eq!(
                digit_section(&with_digit(digit)).score,
                expected,
                "digit {}",
                digit
            );
        }
    }

    #[test]
    fn test_digit_section_advice_edge() {
        let result = digit_section(&with_digit(1));
        assert!(matches!(result.advice, Some(ref a) if a.contains("digits")));
        assert_eq!(digit_section(&with_digit(2)).advice, None);
    }
}
