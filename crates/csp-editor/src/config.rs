use csp_core::{Result, SplineError, Validate};
use serde::{Deserialize, Serialize};

use crate::viewport::Viewport;

/// Tunables for an editing session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Control points generated on reset
    pub initial_points: usize,
    pub initial_order: usize,
    /// Parameter step used when sampling the curve for display
    pub sample_step: f64,
    /// World distance a nudge command moves the grabbed point
    pub nudge_speed: f64,
    pub viewport: Viewport,
}

impl EditorConfig {
    pub const DEFAULT_INITIAL_POINTS: usize = 10;
    pub const DEFAULT_SAMPLE_STEP: f64 = 0.001;
    pub const DEFAULT_NUDGE_SPEED: f64 = 0.02;

    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| SplineError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            initial_points: Self::DEFAULT_INITIAL_POINTS,
            initial_order: 1,
            sample_step: Self::DEFAULT_SAMPLE_STEP,
            nudge_speed: Self::DEFAULT_NUDGE_SPEED,
            viewport: Viewport::default(),
        }
    }
}

impl Validate for EditorConfig {
    fn validate(&self) -> Result<()> {
        if self.initial_points == 0 {
            return Err(SplineError::Config(
                "initial_points must be at least 1".into(),
            ));
        }
        if !(self.sample_step.is_finite() && self.sample_step > 0.0) {
            return Err(SplineError::Config(format!(
                "sample_step must be positive, got {}",
                self.sample_step
            )));
        }
        if !self.nudge_speed.is_finite() {
            return Err(SplineError::Config(format!(
                "nudge_speed must be finite, got {}",
                self.nudge_speed
            )));
        }
        self.viewport.validate()
    }
}
