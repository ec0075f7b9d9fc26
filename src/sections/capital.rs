//! Capital section - scores uppercase letters.

use super::SectionResult;
use crate::features::FeatureSet;

/// Scores uppercase letters: `0` -> 0, `1..=3` -> 1, `>3` -> 2.
///
/// Advises when there are none.
pub fn capital_section(features: &FeatureSet) -> SectionResult {
    let score = match features.capital {
        0 => 0.0,
        1..=3 => 1.0,
        _ => 2.0,
    };

    let advice = (features.capital == 0)
        .then(|| "No uppercase letters, include at least 1".to_string());

    SectionResult { score, advice }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_capital(capital: usize) -> FeatureSet {
        FeatureSet {
            length: capital,
            capital,
            ..FeatureSet::default()
        }
    }

    #[test]
    fn test_capital_section_bins() {
        let cases = [(0, 0.0), (1, 1.0), (3, 1.0), (4, 2.0), (20, 2.0)];
        for (capital, expected) in cases {
            assert_eq!(
                capital_section(&with_capital(capital)).score,
                expected,
                "capital {}",
                capital
            );
        }
    }

    #[test]
    fn test_capital_section_missing() {
        let result = capital_section(&with_capital(0));
        assert!(matches!(result.advice, Some(ref a) if a.contains("uppercase")));
    }

    #[test]
    fn test_capital_section_present() {
        assert_eq!(capital_section(&with_capital(1)).advice, None);
    }
}
