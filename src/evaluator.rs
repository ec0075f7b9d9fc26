//! Password strength estimator - dispatches to the configured pipeline.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

use crate::config::{ConfigError, PipelineKind, get_pipeline_kind};
use crate::model::{ModelClassifier, load_classifier};
use crate::scorer::evaluate_rules;
use crate::types::Verdict;

/// Password -> verdict, through either the rule-based or the model-based pipeline.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub enum Estimator {
    Rules,
    Model(ModelClassifier),
}

impl Estimator {
    /// Builds the estimator selected by `PWD_PIPELINE`.
    ///
    /// The model pipeline loads its classifier here, so a missing or broken
    /// artifact fails startup instead of the first request.
    pub fn from_env() -> Result<Self, ConfigError> {
        let kind = get_pipeline_kind()?;

        #[cfg(feature = "tracing")]
        tracing::info!("Password pipeline selected: {:?}", kind);

        match kind {
            PipelineKind::Rules => Ok(Estimator::Rules),
            PipelineKind::Model => {
                let artifact = load_classifier()?;
                Ok(Estimator::Model(ModelClassifier::from_artifact(artifact)))
            }
        }
    }

    pub fn kind(&self) -> PipelineKind {
        match self {
            Estimator::Rules => PipelineKind::Rules,
            Estimator::Model(_) => PipelineKind::Model,
        }
    }

    /// Evaluates one password.
    ///
    /// # Arguments
    /// * `password` - The password to evaluate, any content including empty
    ///
    /// # Returns
    /// A `Verdict` carrying the level, summary and (rules only) advice.
    pub fn evaluate(&self, password: &SecretString) -> Verdict {
        match self {
            Estimator::Rules => Verdict::Rule(evaluate_rules(password)),
            Estimator::Model(model) => Verdict::Model(model.classify(password)),
        }
    }
}

/// Async version that sends the verdict via channel.
#[cfg(feature = "async")]
pub async fn evaluate_tx(
    estimator: &Estimator,
    password: &SecretString,
    tx: mpsc::Sender<Verdict>,
) {
    let verdict = estimator.evaluate(password);

    if let Err(_e) = tx.send(verdict).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password verdict: receiver dropped");
    }
}
