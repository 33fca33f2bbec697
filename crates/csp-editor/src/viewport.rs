use csp_core::{Result, SplineError, Validate};
use csp_math::{dvec3, Point3};
use serde::{Deserialize, Serialize};

/// Mapping between world coordinates and integer screen pixels.
///
/// World origin sits at the screen centre; `z` is dropped on the way out and
/// zero on the way back.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
    /// Pixels per world unit
    pub scale: f64,
}

impl Viewport {
    pub const DEFAULT_WIDTH: i32 = 640;
    pub const DEFAULT_HEIGHT: i32 = 480;
    pub const DEFAULT_SCALE: f64 = 150.0;

    pub fn new(width: i32, height: i32, scale: f64) -> Self {
        Self {
            width,
            height,
            scale,
        }
    }

    pub fn to_screen(&self, p: Point3) -> (i32, i32) {
        let x = self.width / 2 + (p.x * self.scale) as i32;
        let y = self.height / 2 + (p.y * self.scale) as i32;
        (x, y)
    }

    pub fn to_world(&self, x: i32, y: i32) -> Point3 {
        let wx = f64::from(x - self.width / 2) / self.scale;
        let wy = f64::from(y - self.height / 2) / self.scale;
        dvec3(wx, wy, 0.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT, Self::DEFAULT_SCALE)
    }
}

impl Validate for Viewport {
    fn validate(&self) -> Result<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(SplineError::Config(format!(
                "viewport size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.scale.is_finite() && self.scale > 0.0) {
            return Err(SplineError::Config(format!(
                "viewport scale must be positive, got {}",
                self.scale
            )));
        }
        Ok(())
    }
}
