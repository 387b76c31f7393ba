use serde::{Deserialize, Serialize};

use crate::core::{DEFAULT_EDGE_TOLERANCE, DEFAULT_MIN_DIMENSION};
use crate::error::{SurfaceError, SurfaceResult};

use super::InteractionInputBehavior;

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can persist/load engine
/// setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceEngineConfig {
    /// Minimum element width/height enforced on every commit.
    #[serde(default = "default_min_dimension")]
    pub min_dimension: f64,
    /// Width of the resize handle zones along element edges.
    #[serde(default = "default_edge_tolerance")]
    pub edge_tolerance: f64,
    #[serde(default)]
    pub input_behavior: InteractionInputBehavior,
}

fn default_min_dimension() -> f64 {
    DEFAULT_MIN_DIMENSION
}

fn default_edge_tolerance() -> f64 {
    DEFAULT_EDGE_TOLERANCE
}

impl Default for SurfaceEngineConfig {
    fn default() -> Self {
        Self {
            min_dimension: DEFAULT_MIN_DIMENSION,
            edge_tolerance: DEFAULT_EDGE_TOLERANCE,
            input_behavior: InteractionInputBehavior::default(),
        }
    }
}

impl SurfaceEngineConfig {
    pub(crate) fn validate(self) -> SurfaceResult<()> {
        if !self.min_dimension.is_finite() || self.min_dimension <= 0.0 {
            return Err(SurfaceError::InvalidData(
                "min dimension must be finite and > 0".to_owned(),
            ));
        }
        if !self.edge_tolerance.is_finite() || self.edge_tolerance < 0.0 {
            return Err(SurfaceError::InvalidData(
                "edge tolerance must be finite and >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}
