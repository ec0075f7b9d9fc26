//! Lowercase section - scores lowercase letters.

use super::SectionResult;
use crate::features::FeatureSet;

const MIN_ADVISED_LOWERCASE: usize = 4;

/// Scores lowercase letters: `<=1` -> 0, `2..=3` -> 0.8, `4..=5` -> 1.6, `>5` -> 2.4.
pub fn lowercase_section(features: &FeatureSet) -> SectionResult {
    let score = match features.small {
        0..=1 => 0.0,
        2..=3 => 0.8,
        4..=5 => 1.6,
        _ => 2.4,
    };

    let advice = (features.small < MIN_ADVISED_LOWERCASE).then(|| {
        format!(
            "Not enough lowercase letters, {} or more would be safer",
            MIN_ADVISED_LOWERCASE
        )
    });

    SectionResult { score, advice }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_small(small: usize) -> FeatureSet {
        FeatureSet {
            length: small,
            small,
            ..FeatureSet::default()
        }
    }

    #[test]
    fn test_lowercase_section_bins() {
        let cases = [
            (0, 0.0),
            (1, 0.0),
            (2, 0.8),
            (3, 0.8),
            (4, 1.6),
            (5, 1.6),
            (6, 2.4),
            (30, 2.4),
        ];
        for (small, expected) in cases {
            assert_eq!(
                lowercase_section(&with_small(small)).score,
                expected,
                "small {}",
                small
            );
        }
    }

    #[test]
    fn test_lowercase_section_advice_edge() {
        assert!(lowercase_section(&with_small(3)).advice.is_some());
        assert_eq!(lowercase_section(&with_small(4)).advice, None);
    }
}
