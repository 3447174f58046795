//! Parameter definitions with physical units and documented semantics.
//!
//! All magic numbers are extracted here with:
//! - Physical units (meters, seconds, radians)
//! - Documented ranges and meanings
//! - Validation at config-assembly time (evaluation itself never fails)

mod grid;
mod peel;
mod warp;

// Re-export all types
pub use grid::{GridResolution, PlaneDimensions};
pub use peel::{PeelAnimation, PeelAudioSource, PeelConfig};
pub use warp::{
    BendAxis, BendParams, CylinderAxis, CylinderParams, DroopParams, FoldParams, SagParams,
    WarpMode,
};

use thiserror::Error;

/// Configuration errors reported when a frame config is assembled
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid resolution must be positive, got {width}x{height}")]
    ZeroResolution { width: u32, height: u32 },

    #[error("plane dimensions must be finite and positive, got {width_m}x{height_m}")]
    BadPlane { width_m: f32, height_m: f32 },

    #[error("deformation strength must be finite and >= 0, got {0}")]
    BadStrength(f32),

    #[error("{name} out of range, got {value}")]
    FactorOutOfRange { name: &'static str, value: f32 },

    #[error("{name} must be finite and > 0, got {value}")]
    NonPositive { name: &'static str, value: f32 },
}

/// Per-frame deformation configuration
///
/// Assembled by the caller each frame and passed to the evaluator by
/// reference; nothing in it survives between frames. All five mode-param
/// blocks are always present, but only the one selected by `warp_mode` is
/// read in a given frame.
#[derive(Debug, Clone)]
pub struct DeformationConfig {
    /// Active warp mode
    pub warp_mode: WarpMode,
    /// Global deformation strength multiplier (dimensionless, >= 0)
    pub strength: f32,
    /// Monotonic time (seconds)
    pub time_s: f32,
    /// World-space extent of the flat base plane
    pub plane: PlaneDimensions,
    pub sag: SagParams,
    pub droop: DroopParams,
    pub cylinder: CylinderParams,
    pub bend: BendParams,
    pub fold: FoldParams,
    pub peel: PeelConfig,
}

impl Default for DeformationConfig {
    fn default() -> Self {
        Self {
            warp_mode: WarpMode::default(),
            strength: 1.0,
            time_s: 0.0,
            plane: PlaneDimensions::default(),
            sag: SagParams::default(),
            droop: DroopParams::default(),
            cylinder: CylinderParams::default(),
            bend: BendParams::default(),
            fold: FoldParams::default(),
            peel: PeelConfig::default(),
        }
    }
}

impl DeformationConfig {
    /// Validate the whole config, including the inert mode blocks, so a bad
    /// value surfaces when it is set rather than when its mode is selected.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.strength.is_finite() || self.strength < 0.0 {
            return Err(ConfigError::BadStrength(self.strength));
        }
        self.plane.validate()?;
        self.sag.validate()?;
        self.droop.validate()?;
        self.cylinder.validate()?;
        self.bend.validate()?;
        self.fold.validate()?;
        self.peel.validate()?;
        Ok(())
    }
}
