//! Pipeline selection from the environment.

use std::str::FromStr;

use thiserror::Error;

use crate::model::ModelError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown pipeline '{0}', expected 'rules' or 'model'")]
    UnknownPipeline(String),
    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Which scoring back end answers requests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PipelineKind {
    /// Weighted step functions, 5 levels.
    #[default]
    Rules,
    /// Pretrained classifier, 3 labels.
    Model,
}

impl FromStr for PipelineKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "rules" | "rule" => Ok(PipelineKind::Rules),
            "model" => Ok(PipelineKind::Model),
            other => Err(ConfigError::UnknownPipeline(other.to_string())),
        }
    }
}

/// Returns the configured pipeline.
///
/// Reads `PWD_PIPELINE`; defaults to [`PipelineKind::Rules`] when unset.
pub fn get_pipeline_kind() -> Result<PipelineKind, ConfigError> {
    match std::env::var("PWD_PIPELINE") {
        Ok(value) => value.parse(),
        Err(_) => Ok(PipelineKind::default()),
    }
}
