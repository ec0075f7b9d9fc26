//! Rule scoring sections
//!
//! Each section scores one feature of a [`FeatureSet`](crate::FeatureSet) with a
//! step function and, independently, decides whether that feature deserves advice.

mod capital;
mod digit;
mod length;
mod lowercase;
mod special;

pub use capital::capital_section;
pub use digit::digit_section;
pub use length::length_section;
pub use lowercase::lowercase_section;
pub use special::special_section;

/// Outcome of a single section.
/// - `score` - contribution to the total score
/// - `advice` - improvement hint, `None` when the feature is good enough
#[derive(Debug, Clone, PartialEq)]
pub struct SectionResult {
    pub score: f64,
    pub advice: Option<String>,
}
