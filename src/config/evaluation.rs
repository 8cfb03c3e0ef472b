//! Evaluation configuration

use std::path::PathBuf;

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::foundation::OptimismDegree;

/// Evaluation configuration
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationConfig {
    /// Hurwitz optimism degree used when none is given on the command line
    #[serde(default = "default_hurwitz_degree")]
    pub hurwitz_degree: f64,

    /// Base directories tried for relative table paths (comma-separated)
    pub fallback_dirs: Option<String>,

    /// Also try the executable's directory and its parent
    #[serde(default = "default_search_executable_dirs")]
    pub search_executable_dirs: bool,
}

impl EvaluationConfig {
    /// Get the configured degree as a validated value object
    pub fn degree(&self) -> Result<OptimismDegree, ValidationError> {
        OptimismDegree::try_new(self.hurwitz_degree)
            .map_err(|_| ValidationError::InvalidHurwitzDegree(self.hurwitz_degree))
    }

    /// Get fallback directories as a vector
    pub fn fallback_dirs_list(&self) -> Vec<PathBuf> {
        self.fallback_dirs
            .as_ref()
            .map(|s| {
                s.split(',')
                    .map(str::trim)
                    .filter(|dir| !dir.is_empty())
                    .map(PathBuf::from)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Validate evaluation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.degree().map(|_| ())
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self {
            hurwitz_degree: default_hurwitz_degree(),
            fallback_dirs: None,
            search_executable_dirs: default_search_executable_dirs(),
        }
    }
}

fn default_hurwitz_degree() -> f64 {
    0.5
}

fn default_search_executable_dirs() -> bool {
    true
}
