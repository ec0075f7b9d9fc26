//! Classifier module
//!
//! Loads the pretrained classifier artifact and runs inference on feature vectors.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::features::{FeatureVector, extract_feature_vector};
use crate::feedback::label_message_for;
use crate::types::ModelVerdict;

/// Label returned when a classifier cannot reach a decision.
pub const NO_LABEL: i64 = -1;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Classifier file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read classifier file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Classifier file is empty")]
    EmptyFile,
    #[error("Failed to parse classifier file: {0}")]
    ParseError(#[from] serde_json::Error),
    #[error("Invalid classifier: {0}")]
    InvalidModel(String),
}

/// Inference contract of a pretrained classifier.
///
/// Implementations receive the fixed-order [`FeatureVector`] and return a label,
/// expected in `0..=2`. Anything else is rendered with a fallback message.
pub trait Classifier: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> i64;
}

/// A node of a [`DecisionTree`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Goes to `left` when `features[feature] <= threshold`, otherwise to `right`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        label: i64,
    },
}

/// Binary decision tree stored as a flat node list, root at index 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    nodes: Vec<Node>,
}

impl DecisionTree {
    pub fn new(nodes: Vec<Node>) -> Result<Self, ModelError> {
        let tree = DecisionTree { nodes };
        tree.validate()?;
        Ok(tree)
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Checks that every traversal ends on a leaf.
    ///
    /// Children must point forward in the node list, which rules out cycles.
    pub fn validate(&self) -> Result<(), ModelError> {
        if self.nodes.is_empty() {
            return Err(ModelError::InvalidModel("tree has no nodes".to_string()));
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if let Node::Split {
                feature,
                threshold,
                left,
                right,
            } = node
            {
                if *feature >= FeatureVector::LEN {
                    return Err(ModelError::InvalidModel(format!(
                        "node {} splits on unknown feature {}",
                        index, feature
                    )));
                }
                if threshold.is_nan() {
                    return Err(ModelError::InvalidModel(format!(
                        "node {} has a NaN threshold",
                        index
                    )));
                }
                for child in [*left, *right] {
                    if child <= index || child >= self.nodes.len() {
                        return Err(ModelError::InvalidModel(format!(
                            "node {} has invalid child {}",
                            index, child
                        )));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Classifier for DecisionTree {
    fn predict(&self, features: &FeatureVector) -> i64 {
        let mut index = 0;
        // A valid tree reaches a leaf in fewer steps than it has nodes
        for _ in 0..self.nodes.len() {
            match self.nodes.get(index) {
                Some(Node::Leaf { label }) => return *label,
                Some(Node::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let Some(value) = features.get(*feature) else {
                        return NO_LABEL;
                    };
                    index = if value <= *threshold { *left } else { *right };
                }
                None => return NO_LABEL,
            }
        }
        NO_LABEL
    }
}

/// Majority vote over decision trees. Ties go to the smallest label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomForest {
    trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn new(trees: Vec<DecisionTree>) -> Result<Self, ModelError> {
        let forest = RandomForest { trees };
        forest.validate()?;
        Ok(forest)
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    pub fn validate(&self) -> Result<(), ModelError> {
        if self.trees.is_empty() {
            return Err(ModelError::InvalidModel("forest has no trees".to_string()));
        }
        self.trees.iter().try_for_each(DecisionTree::validate)
    }
}

impl Classifier for RandomForest {
    fn predict(&self, features: &FeatureVector) -> i64 {
        let mut votes: BTreeMap<i64, usize> = BTreeMap::new();
        for tree in &self.trees {
            *votes.entry(tree.predict(features)).or_insert(0) += 1;
        }

        let mut winner = (NO_LABEL, 0);
        for (label, count) in votes {
            if count > winner.1 {
                winner = (label, count);
            }
        }
        winner.0
    }
}

/// Serialized classifier, tagged by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClassifierArtifact {
    DecisionTree(DecisionTree),
    RandomForest(RandomForest),
}

impl ClassifierArtifact {
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            ClassifierArtifact::DecisionTree(tree) => tree.validate(),
            ClassifierArtifact::RandomForest(forest) => forest.validate(),
        }
    }
}

impl Classifier for ClassifierArtifact {
    fn predict(&self, features: &FeatureVector) -> i64 {
        match self {
            ClassifierArtifact::DecisionTree(tree) => tree.predict(features),
            ClassifierArtifact::RandomForest(forest) => forest.predict(features),
        }
    }
}

/// Returns the classifier artifact path.
///
/// Priority:
/// 1. Environment variable `PWD_MODEL_PATH`
/// 2. Default path `./assets/classifier.json`
pub fn get_model_path() -> PathBuf {
    std::env::var("PWD_MODEL_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/classifier.json"))
}

/// Loads the classifier from the configured path.
///
/// Call once at startup; a failure here must stop the service.
///
/// # Errors
///
/// Returns error if the file does not exist, cannot be read, is empty,
/// is not valid JSON, or describes an invalid classifier.
pub fn load_classifier() -> Result<ClassifierArtifact, ModelError> {
    let path = get_model_path();
    load_classifier_from_path(&path)
}

/// Loads the classifier from a specific file path.
pub fn load_classifier_from_path<P: AsRef<Path>>(path: P) -> Result<ClassifierArtifact, ModelError> {
    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Classifier loading FAILED: FileNotFound {:?}", path);
        return Err(ModelError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Classifier loading FAILED: Empty file {:?}", path);
        return Err(ModelError::EmptyFile);
    }

    let artifact: ClassifierArtifact = serde_json::from_str(&content)?;
    artifact.validate()?;

    #[cfg(feature = "tracing")]
    match &artifact {
        ClassifierArtifact::DecisionTree(tree) => {
            tracing::info!("Classifier loaded: decision tree with {} nodes from {:?}", tree.nodes().len(), path)
        }
        ClassifierArtifact::RandomForest(forest) => {
            tracing::info!("Classifier loaded: random forest with {} trees from {:?}", forest.trees().len(), path)
        }
    }

    Ok(artifact)
}

/// Shared, read-only handle to a loaded classifier.
#[derive(Clone)]
pub struct ModelClassifier {
    classifier: Arc<dyn Classifier>,
}

impl ModelClassifier {
    pub fn new(classifier: Arc<dyn Classifier>) -> Self {
        ModelClassifier { classifier }
    }

    pub fn from_artifact(artifact: ClassifierArtifact) -> Self {
        ModelClassifier::new(Arc::new(artifact))
    }

    pub fn predict(&self, features: &FeatureVector) -> i64 {
        self.classifier.predict(features)
    }

    /// Runs the model-based pipeline for one password.
    pub fn classify(&self, password: &SecretString) -> ModelVerdict {
        let features = extract_feature_vector(password);
        let label = self.predict(&features);

        #[cfg(feature = "tracing")]
        tracing::debug!("Model evaluation: label {}", label);

        ModelVerdict {
            password: SecretString::new(password.expose_secret().to_string().into()),
            features,
            label,
            summary_message: label_message_for(label).to_string(),
        }
    }
}

impl fmt::Debug for ModelClassifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelClassifier").finish_non_exhaustive()
    }
}
