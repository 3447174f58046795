//! Grid resolution and base plane dimensions.

use super::ConfigError;

/// Output grid resolution (samples per axis)
///
/// Independent of the plane's world-space size; a 128x128 grid over a 10m
/// plane and over a 2m plane produce the same sample layout in uv space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridResolution {
    pub width: u32,
    pub height: u32,
}

impl GridResolution {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of samples (width * height)
    pub fn sample_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroResolution {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for GridResolution {
    fn default() -> Self {
        Self {
            width: 128,
            height: 128,
        }
    }
}

/// World-space extent of the flat base plane (meters)
///
/// The rest surface is a rectangle centered at the origin in the local XY
/// plane, with +Z as the rest normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneDimensions {
    pub width_m: f32,
    pub height_m: f32,
}

impl PlaneDimensions {
    pub fn new(width_m: f32, height_m: f32) -> Self {
        Self { width_m, height_m }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = |v: f32| v.is_finite() && v > 0.0;
        if !ok(self.width_m) || !ok(self.height_m) {
            return Err(ConfigError::BadPlane {
                width_m: self.width_m,
                height_m: self.height_m,
            });
        }
        Ok(())
    }
}

impl Default for PlaneDimensions {
    fn default() -> Self {
        Self {
            width_m: 10.0,
            height_m: 10.0,
        }
    }
}
