//! Feature extraction - turns a password into character-class features.
//!
//! Two encodings are produced from the same character predicates:
//! - [`FeatureSet`]: per-class counts, consumed by the rule-based scorer
//! - [`FeatureVector`]: length plus presence flags, consumed by the classifier

use std::sync::LazyLock;

use regex::Regex;
use secrecy::{ExposeSecret, SecretString};

static SPECIAL_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9]").expect("special character pattern is valid"));

/// Per-class character counts of a password.
///
/// `length` counts chars, so multi-byte characters count once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FeatureSet {
    pub length: usize,
    pub capital: usize,
    pub small: usize,
    pub digit: usize,
    pub special: usize,
}

const FEATURE_COUNT: usize = 5;

/// Fixed-order classifier input: `[length, has_upper, has_lower, has_digit, has_special]`.
///
/// The order matches the one the classifier artifact was trained on and must not change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FeatureVector([usize; FEATURE_COUNT]);

impl FeatureVector {
    pub const LEN: usize = FEATURE_COUNT;

    pub const LENGTH: usize = 0;
    pub const HAS_UPPER: usize = 1;
    pub const HAS_LOWER: usize = 2;
    pub const HAS_DIGIT: usize = 3;
    pub const HAS_SPECIAL: usize = 4;

    pub fn as_array(&self) -> &[usize; FEATURE_COUNT] {
        &self.0
    }

    /// Value of one feature as the classifier sees it, `None` for an unknown index.
    pub fn get(&self, index: usize) -> Option<f64> {
        self.0.get(index).map(|&v| v as f64)
    }
}

impl From<&FeatureSet> for FeatureVector {
    fn from(features: &FeatureSet) -> Self {
        FeatureVector([
            features.length,
            usize::from(features.capital > 0),
            usize::from(features.small > 0),
            usize::from(features.digit > 0),
            usize::from(features.special > 0),
        ])
    }
}

/// Counts the characters of each class in `password`.
///
/// Upper/lower/digit follow Unicode character properties. `special` counts every
/// character outside `[A-Za-z0-9]`, so a non-ASCII letter counts both as a letter
/// and as special.
pub fn extract_features(password: &SecretString) -> FeatureSet {
    count_classes(password.expose_secret())
}

/// Builds the classifier input for `password`.
pub fn extract_feature_vector(password: &SecretString) -> FeatureVector {
    FeatureVector::from(&count_classes(password.expose_secret()))
}

fn count_classes(pwd: &str) -> FeatureSet {
    let mut features = FeatureSet::default();

    for c in pwd.chars() {
        features.length += 1;
        if c.is_uppercase() {
            features.capital += 1;
        } else if c.is_lowercase() {
            features.small += 1;
        } else if c.is_numeric() {
            features.digit += 1;
        }
    }

    features.special = SPECIAL_CHARS.find_iter(pwd).count();
    features
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_extract_features_empty() {
        let features = extract_features(&secret(""));
        assert_eq!(features, FeatureSet::default());
    }

    #[test]
    fn test_extract_features_mixed() {
        let features = extract_features(&secret("Password1!"));
        assert_eq!(
            features,
            FeatureSet {
                length: 10,
                capital: 1,
                small: 7,
                digit: 1,
                special: 1,
            }
        );
    }

    #[test]
    fn test_extract_features_whitespace_is_special() {
        let features = extract_features(&secret("ab cd"));
        assert_eq!(features.length, 5);
        assert_eq!(features.small, 4);
        assert_eq!(features.special, 1);
    }

    #[test]
    fn test_extract_features_unicode() {
        // 'É' is uppercase and outside [A-Za-z0-9]; '한' has no case
        let features = extract_features(&secret("Éa한"));
        assert_eq!(features.length, 3);
        assert_eq!(features.capital, 1);
        assert_eq!(features.small, 1);
        assert_eq!(features.digit, 0);
        assert_eq!(features.special, 2);
    }

    #[test]
    fn test_extract_features_numeric_is_broader_than_decimal() {
        // Vulgar fractions and superscripts are Unicode numeric
        assert_eq!(extract_features(&secret("½")).digit, 1);
        assert_eq!(extract_features(&secret("¾¼")).digit, 2);
        assert_eq!(extract_features(&secret("²٣")).digit, 2);
        assert_eq!(extract_features(&secret("½")).special, 1);
    }

    #[test]
    fn test_extract_features_class_counts_bounded_by_length() {
        for pwd in ["", "abc", "ABC123", "a b\tc", "P@ss w0rd!!"] {
            let f = extract_features(&secret(pwd));
            assert!(
                f.capital + f.small + f.digit <= f.length,
                "class counts exceed length for '{}'",
                pwd
            );
            assert!(f.special <= f.length);
        }
    }

    #[test]
    fn test_feature_vector_order() {
        let vector = extract_feature_vector(&secret("Password1!"));
        assert_eq!(vector.as_array(), &[10, 1, 1, 1, 1]);
        assert_eq!(vector.as_array().len(), FeatureVector::LEN);
    }

    #[test]
    fn test_feature_vector_flags_not_counts() {
        let vector = extract_feature_vector(&secret("AAAA1111"));
        assert_eq!(vector.get(FeatureVector::LENGTH), Some(8.0));
        assert_eq!(vector.get(FeatureVector::HAS_UPPER), Some(1.0));
        assert_eq!(vector.get(FeatureVector::HAS_LOWER), Some(0.0));
        assert_eq!(vector.get(FeatureVector::HAS_DIGIT), Some(1.0));
        assert_eq!(vector.get(FeatureVector::HAS_SPECIAL), Some(0.0));
        assert_eq!(vector.get(FeatureVector::LEN), None);
    }

    #[test]
    fn test_feature_vector_empty() {
        let vector = extract_feature_vector(&secret(""));
        assert_eq!(vector.as_array(), &[0, 0, 0, 0, 0]);
    }
}
