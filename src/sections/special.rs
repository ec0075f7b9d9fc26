//! Special section - scores characters outside `[A-Za-z0-9]`.

use super::SectionResult;
use crate::features::FeatureSet;

/// Scores special characters: `0` -> 0, `1..=2` -> 1.23, `>2` -> 2.46.
///
/// Advises when there are none.
pub fn special_section(features: &FeatureSet) -> SectionResult {
    let score = match features.special {
        0 => 0.0,
        1..=2 => 1.23,
        _ => 2.46,
    };

    let advice = (features.special == 0)
        .then(|| "No special characters, try adding some like @, ! or #".to_string());

    SectionResult { score, advice }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_special(special: usize) -> FeatureSet {
        FeatureSet {
            length: special,
            special,
            ..FeatureSet::default()
        }
    }

    #[test]
    fn test_special_section_bins() {
        let cases = [(0, 0.0), (1, 1.23), (2, 1.23), (3, 2.46), (9, 2.46)];
        for (special, expected) in cases {
            assert_eq!(
                special_section(&with_special(special)).score,
                expected,
                "special {}",
                special
            );
        }
    }

    #[test]
    fn test_special_section_missing() {
        let result = special_section(&with_special(0));
        assert!(matches!(result.advice, Some(ref a) if a.contains("special")));
    }

    #[test]
    fn test_special_section_present() {
        assert_eq!(special_section(&with_special(1)).advice, None);
    }
}
