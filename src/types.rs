//! Verdict types shared by both pipelines.

use secrecy::SecretString;

use crate::features::FeatureVector;

/// Strength level produced by the rule-based scorer (1 = very weak, 5 = very safe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    VeryWeak = 1,
    Weak = 2,
    Fair = 3,
    Safe = 4,
    VerySafe = 5,
}

impl StrengthLevel {
    /// Numeric level in `1..=5`.
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Maps a raw level back to the enum. `None` outside `1..=5`.
    pub fn from_value(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::VeryWeak),
            2 => Some(Self::Weak),
            3 => Some(Self::Fair),
            4 => Some(Self::Safe),
            5 => Some(Self::VerySafe),
            _ => None,
        }
    }
}

/// Label produced by the classifier (0 = weak, 2 = strong).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ModelLabel {
    Weak = 0,
    Medium = 1,
    Strong = 2,
}

impl ModelLabel {
    pub fn value(self) -> i64 {
        self as i64
    }

    /// Maps a raw classifier output to a label. `None` outside `0..=2`.
    pub fn from_label(label: i64) -> Option<Self> {
        match label {
            0 => Some(Self::Weak),
            1 => Some(Self::Medium),
            2 => Some(Self::Strong),
            _ => None,
        }
    }
}

/// Result of the rule-based pipeline.
#[derive(Debug)]
pub struct RuleVerdict {
    pub password: SecretString,
    pub score: f64,
    pub strength_level: StrengthLevel,
    pub summary_message: String,
    pub detail_messages: Vec<String>,
}

/// Result of the model-based pipeline.
///
/// `label` keeps the raw classifier output, which may fall outside `0..=2`
/// when the artifact was trained on a different label set.
#[derive(Debug)]
pub struct ModelVerdict {
    pub password: SecretString,
    pub features: FeatureVector,
    pub label: i64,
    pub summary_message: String,
}

impl ModelVerdict {
    pub fn strength(&self) -> Option<ModelLabel> {
        ModelLabel::from_label(self.label)
    }
}

/// Verdict of whichever pipeline the estimator runs.
#[derive(Debug)]
pub enum Verdict {
    Rule(RuleVerdict),
    Model(ModelVerdict),
}

impl Verdict {
    pub fn password(&self) -> &SecretString {
        match self {
            Verdict::Rule(v) => &v.password,
            Verdict::Model(v) => &v.password,
        }
    }

    pub fn summary_message(&self) -> &str {
        match self {
            Verdict::Rule(v) => &v.summary_message,
            Verdict::Model(v) => &v.summary_message,
        }
    }

    /// Advisory messages. Always empty for model verdicts.
    pub fn detail_messages(&self) -> &[String] {
        match self {
            Verdict::Rule(v) => &v.detail_messages,
            Verdict::Model(_) => &[],
        }
    }
}
