//! Sag, droop, cylinder, and bend warp algorithms.
//!
//! Each is a pure function of the uv sample, its param block, the plane
//! dimensions, and the frame's audio snapshot.

use glam::{Vec2, Vec3};

use crate::audio::AudioSnapshot;
use crate::params::{
    BendAxis, BendParams, CylinderAxis, CylinderParams, DroopParams, PlaneDimensions, SagParams,
};

use super::EPS;

/// Flat base mapping: uv to the centered rest plane, +Z rest normal
pub(crate) fn base_position(uv: Vec2, plane: &PlaneDimensions) -> Vec3 {
    Vec3::new(
        (uv.x - 0.5) * plane.width_m,
        (uv.y - 0.5) * plane.height_m,
        0.0,
    )
}

/// Radial depression from the plane center; always pushes -Z, never lifts
pub(crate) fn sag(
    uv: Vec2,
    params: &SagParams,
    plane: &PlaneDimensions,
    audio: &AudioSnapshot,
) -> Vec3 {
    let mut pos = base_position(uv, plane);

    // Distance from center, normalized so the corners land at 1
    let d = ((uv - Vec2::splat(0.5)).length() / std::f32::consts::FRAC_1_SQRT_2).clamp(0.0, 1.0);
    let mask = 1.0 - d.powf(params.falloff_sharpness);
    let amount = params.amount_m * (1.0 + audio.low * params.audio_mod);

    pos.z -= amount * mask;
    pos
}

/// Anisotropic droop outside a rectangular supported region
pub(crate) fn droop(
    uv: Vec2,
    params: &DroopParams,
    plane: &PlaneDimensions,
    audio: &AudioSnapshot,
) -> Vec3 {
    let mut pos = base_position(uv, plane);

    let across = axis_droop(uv.x, params.width_factor);
    let along = axis_droop(uv.y, params.depth_factor);
    let mask = across.max(along).powf(params.falloff_sharpness);
    let amount = params.amount_m * (1.0 + audio.mid * params.audio_mod);

    pos.z -= amount * mask;
    pos
}

/// Per-axis droop response: 0 inside the supported half-extent, easing to 1
/// at the plane edge via `1 - (1 - x)^2`
fn axis_droop(coord: f32, supported_factor: f32) -> f32 {
    let half_supported = supported_factor * 0.5;
    let outside = ((coord - 0.5).abs() - half_supported).max(0.0);
    let unsupported = 0.5 - half_supported;
    // Fully supported axis never droops
    if unsupported < EPS {
        return 0.0;
    }
    let x = (outside / unsupported).clamp(0.0, 1.0);
    1.0 - (1.0 - x) * (1.0 - x)
}

/// Wrap the plane onto a cylinder section
///
/// u sweeps the arc, v runs along the cylinder axis. The outward radial
/// direction doubles as the local normal and carries the audio-reactive
/// displacement.
pub(crate) fn cylinder(
    uv: Vec2,
    params: &CylinderParams,
    plane: &PlaneDimensions,
    audio: &AudioSnapshot,
    strength: f32,
) -> Vec3 {
    let angle = params.angle_offset_rad + uv.x * params.arc_angle_rad;
    let axial = (uv.y - 0.5) * params.height_scale.max(EPS) * plane.height_m;
    let (sin_a, cos_a) = angle.sin_cos();
    let r = params.radius_m;

    let (pos, radial) = match params.axis {
        CylinderAxis::X => (
            Vec3::new(axial, r * cos_a, r * sin_a),
            Vec3::new(0.0, cos_a, sin_a),
        ),
        CylinderAxis::Y => (
            Vec3::new(r * cos_a, axial, r * sin_a),
            Vec3::new(cos_a, 0.0, sin_a),
        ),
        CylinderAxis::Z => (
            Vec3::new(r * cos_a, r * sin_a, axial),
            Vec3::new(cos_a, sin_a, 0.0),
        ),
    };

    pos + radial * (audio.low * strength)
}

/// Roll the plane around a circular arc
///
/// The coordinate along the bend axis becomes arc length on a circle whose
/// radius keeps the plane's half-extent chord-consistent with the bend angle;
/// the orthogonal coordinate rides along unchanged.
pub(crate) fn bend(
    uv: Vec2,
    params: &BendParams,
    plane: &PlaneDimensions,
    audio: &AudioSnapshot,
) -> Vec3 {
    let flat = base_position(uv, plane);

    // Falloff driven by the coordinate orthogonal to the rolling direction
    let falloff_coord = match params.axis {
        BendAxis::X => uv.y,
        BendAxis::Y => uv.x,
    };
    let falloff = ((falloff_coord - 0.5).abs() * 2.0).powf(params.falloff_sharpness);
    let total_angle = params.angle_rad * (1.0 + audio.overall * params.audio_mod) * falloff;

    if total_angle.abs() < EPS {
        return flat;
    }

    let (half_extent, along, ortho) = match params.axis {
        BendAxis::X => (plane.width_m * 0.5, flat.x, flat.y),
        BendAxis::Y => (plane.height_m * 0.5, flat.y, flat.x),
    };

    // sin floor preserves the bend direction while guarding the division
    let mut denom = (total_angle * 0.5).sin();
    if denom.abs() < EPS {
        denom = EPS.copysign(total_angle);
    }
    let radius = half_extent / denom;

    let theta = along / radius;
    let bent = radius * theta.sin();
    let lift = radius * (1.0 - theta.cos());

    match params.axis {
        BendAxis::X => Vec3::new(bent, ortho, lift),
        BendAxis::Y => Vec3::new(ortho, bent, lift),
    }
}
