//! Warp mode selection and per-mode parameters.
//!
//! A UI/config collaborator translates user-facing units (degrees, percent)
//! into the radians and normalized ranges used here.

use std::f32::consts::{FRAC_PI_2, TAU};

use super::ConfigError;

/// Top-level deformation algorithm applied to the base plane
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarpMode {
    /// Flat base plane, no displacement
    None,
    /// Corner fold with hinge rotation, tuck and crease
    Fold,
    /// Radial depression from the plane center
    Sag,
    /// Anisotropic droop outside a rectangular supported region
    Droop,
    /// Wrap onto a cylinder section
    Cylinder,
    /// Roll the plane around a circular arc
    Bend,
}

impl Default for WarpMode {
    fn default() -> Self {
        Self::None
    }
}

/// World axis hosting the cylinder's axial component
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CylinderAxis {
    X,
    Y,
    Z,
}

/// In-plane direction that rolls around the bend arc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BendAxis {
    X,
    Y,
}

/// Sag: radial falloff depression, always pushes -Z
#[derive(Debug, Clone)]
pub struct SagParams {
    /// Depression depth at the plane center (meters, before audio modulation)
    pub amount_m: f32,
    /// Exponent shaping the radial mask (higher = flatter center, sharper rim)
    pub falloff_sharpness: f32,
    /// Low-band audio gain: amount *= 1 + low * this
    pub audio_mod: f32,
}

impl Default for SagParams {
    fn default() -> Self {
        Self {
            amount_m: 1.0,
            falloff_sharpness: 1.5,
            audio_mod: 0.5,
        }
    }
}

impl SagParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("sag falloff_sharpness", self.falloff_sharpness)
    }
}

/// Droop: edges sag outside a rectangular supported region
#[derive(Debug, Clone)]
pub struct DroopParams {
    /// Droop depth at the plane edge (meters, before audio modulation)
    pub amount_m: f32,
    /// Supported width as a fraction of the plane width, [0, 1]
    /// (1.0 = the whole axis is supported and never droops)
    pub width_factor: f32,
    /// Supported depth as a fraction of the plane height, [0, 1]
    pub depth_factor: f32,
    /// Exponent applied to the combined per-axis mask
    pub falloff_sharpness: f32,
    /// Mid-band audio gain: amount *= 1 + mid * this
    pub audio_mod: f32,
}

impl Default for DroopParams {
    fn default() -> Self {
        Self {
            amount_m: 1.0,
            width_factor: 0.5,
            depth_factor: 0.5,
            falloff_sharpness: 2.0,
            audio_mod: 0.5,
        }
    }
}

impl DroopParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        unit_factor("droop width_factor", self.width_factor)?;
        unit_factor("droop depth_factor", self.depth_factor)?;
        positive("droop falloff_sharpness", self.falloff_sharpness)
    }
}

/// Cylinder: wrap u onto an arc, v along the cylinder axis
#[derive(Debug, Clone)]
pub struct CylinderParams {
    /// Cylinder radius (meters)
    pub radius_m: f32,
    /// Arc swept by u in [0, 1] (radians; TAU = full wrap)
    pub arc_angle_rad: f32,
    /// Angle at u = 0 (radians)
    pub angle_offset_rad: f32,
    /// Axial extent as a multiple of the plane height
    pub height_scale: f32,
    /// World axis hosting the axial component
    pub axis: CylinderAxis,
}

impl Default for CylinderParams {
    fn default() -> Self {
        Self {
            radius_m: 3.0,
            arc_angle_rad: TAU,
            angle_offset_rad: 0.0,
            height_scale: 1.0,
            axis: CylinderAxis::Y,
        }
    }
}

impl CylinderParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("cylinder radius_m", self.radius_m)?;
        // The evaluator floors this at epsilon; that guard is for values that
        // underflow toward zero, not a license for negative scales
        positive("cylinder height_scale", self.height_scale)
    }
}

/// Bend: roll the plane around a circular arc
#[derive(Debug, Clone)]
pub struct BendParams {
    /// Full bend angle (radians, before audio and falloff scaling; sign picks
    /// the bend direction)
    pub angle_rad: f32,
    /// In-plane direction that rolls; falloff is driven by the orthogonal
    /// coordinate
    pub axis: BendAxis,
    /// Exponent shaping the falloff coordinate
    pub falloff_sharpness: f32,
    /// Overall-band audio gain: angle *= 1 + overall * this
    pub audio_mod: f32,
}

impl Default for BendParams {
    fn default() -> Self {
        Self {
            angle_rad: FRAC_PI_2,
            axis: BendAxis::X,
            falloff_sharpness: 1.0,
            audio_mod: 0.5,
        }
    }
}

impl BendParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("bend falloff_sharpness", self.falloff_sharpness)
    }
}

/// Fold: per-corner hinge rotation with optional tuck and crease
#[derive(Debug, Clone)]
pub struct FoldParams {
    /// Primary fold angle about the hinge (radians)
    pub angle_rad: f32,
    /// Hinge inset from the corner along each uv axis, (0, 0.5].
    /// `depth + roundness` must stay <= 0.5 so the folded region never
    /// reaches a quadrant boundary (keeps the surface continuous there).
    pub depth: f32,
    /// Half-width of the smoothstep band gating the fold (uv units)
    pub roundness: f32,
    /// Secondary tilt about the axis orthogonal to hinge and rest normal
    /// (radians)
    pub nudge_rad: f32,
    /// Overall-band audio gain: angle *= 1 + overall * this
    pub audio_mod: f32,
    /// Push toward the corner near the folded tip (meters; 0 disables)
    pub tuck: f32,
    /// uv radius over which the tuck fades out
    pub tuck_reach: f32,
    /// Lift along the folded normal near the hinge diagonal (meters; 0
    /// disables)
    pub crease: f32,
    /// Exponent sharpening the crease falloff
    pub crease_sharpness: f32,
}

impl Default for FoldParams {
    fn default() -> Self {
        Self {
            angle_rad: 1.0,
            depth: 0.25,
            roundness: 0.1,
            nudge_rad: 0.1,
            audio_mod: 0.5,
            tuck: 0.0,
            tuck_reach: 0.15,
            crease: 0.0,
            crease_sharpness: 2.0,
        }
    }
}

impl FoldParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("fold depth", self.depth)?;
        positive("fold crease_sharpness", self.crease_sharpness)?;
        if !self.roundness.is_finite() || self.roundness < 0.0 {
            return Err(ConfigError::FactorOutOfRange {
                name: "fold roundness",
                value: self.roundness,
            });
        }
        if self.depth + self.roundness > 0.5 {
            return Err(ConfigError::FactorOutOfRange {
                name: "fold depth + roundness",
                value: self.depth + self.roundness,
            });
        }
        Ok(())
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NonPositive { name, value });
    }
    Ok(())
}

fn unit_factor(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::FactorOutOfRange { name, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_validate() {
        assert!(SagParams::default().validate().is_ok());
        assert!(DroopParams::default().validate().is_ok());
        assert!(CylinderParams::default().validate().is_ok());
        assert!(BendParams::default().validate().is_ok());
        assert!(FoldParams::default().validate().is_ok());
    }

    #[test]
    fn test_droop_factor_range() {
        let mut droop = DroopParams::default();
        droop.width_factor = 1.2;
        assert!(droop.validate().is_err());
        droop.width_factor = 1.0;
        assert!(droop.validate().is_ok());
    }

    #[test]
    fn test_cylinder_height_scale_must_be_positive() {
        let mut cylinder = CylinderParams::default();
        cylinder.height_scale = -1.0;
        assert!(cylinder.validate().is_err());
        cylinder.height_scale = 0.0;
        assert!(cylinder.validate().is_err());
        cylinder.height_scale = 0.5;
        assert!(cylinder.validate().is_ok());
    }

    #[test]
    fn test_fold_region_must_stay_inside_quadrant() {
        let mut fold = FoldParams::default();
        fold.depth = 0.45;
        fold.roundness = 0.1;
        assert!(fold.validate().is_err());
        fold.roundness = 0.05;
        assert!(fold.validate().is_ok());
    }
}
