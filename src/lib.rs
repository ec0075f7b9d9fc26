//! Password strength verdict library
//!
//! This library turns a password into character-class features and scores them
//! with either weighted step functions (5 levels plus advice) or a pretrained
//! classifier (3 labels).
//!
//! # Features
//!
//! - `async` (default): Enables delivering verdicts through a tokio channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_PIPELINE`: `rules` (default) or `model`
//! - `PWD_MODEL_PATH`: Custom path to the classifier artifact
//!   (default: `./assets/classifier.json`)
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_verdict::Estimator;
//! use secrecy::SecretString;
//!
//! // Build the configured pipeline (call once at startup)
//! let estimator = Estimator::from_env().expect("Failed to set up pipeline");
//!
//! // Evaluate a password
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let verdict = estimator.evaluate(&password);
//!
//! println!("Summary: {}", verdict.summary_message());
//! for detail in verdict.detail_messages() {
//!     println!("  {}", detail);
//! }
//! ```

// Internal modules
mod config;
mod evaluator;
mod features;
mod feedback;
mod model;
mod scorer;
mod sections;
mod types;

// Public API
pub use config::{ConfigError, PipelineKind, get_pipeline_kind};
pub use evaluator::Estimator;
pub use features::{FeatureSet, FeatureVector, extract_feature_vector, extract_features};
pub use feedback::{label_message, label_message_for, strength_message, strength_message_for};
pub use model::{
    Classifier, ClassifierArtifact, DecisionTree, ModelClassifier, ModelError, NO_LABEL, Node,
    RandomForest, get_model_path, load_classifier, load_classifier_from_path,
};
pub use scorer::{MAX_SCORE, calculate_score, classify_strength, evaluate_rules, get_detailed_feedback};
pub use types::{ModelLabel, ModelVerdict, RuleVerdict, StrengthLevel, Verdict};

#[cfg(feature = "async")]
pub use evaluator::evaluate_tx;
