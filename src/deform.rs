//! Surface deformation core: warp modes, peel overlay, and finite-difference
//! normal reconstruction.
//!
//! One deformation function serves both the position pass and the normal
//! pass, so the normal field can never diverge from the displacement formula.

mod fold;
mod peel;
mod warp;

use glam::{Vec2, Vec3};
use noise::Perlin;

use crate::audio::AudioSnapshot;
use crate::field::SurfaceFields;
use crate::params::{DeformationConfig, GridResolution, WarpMode};

/// Epsilon floor for denominators, angle thresholds, and normalization guards
pub(crate) const EPS: f32 = 1e-5;

/// Normalize, returning the zero vector instead of NaN for tiny inputs
pub(crate) fn safe_normalize(v: Vec3) -> Vec3 {
    if v.length_squared() < EPS * EPS {
        Vec3::ZERO
    } else {
        v.normalize()
    }
}

/// 2D variant of [`safe_normalize`]
pub(crate) fn safe_normalize2(v: Vec2) -> Vec2 {
    if v.length_squared() < EPS * EPS {
        Vec2::ZERO
    } else {
        v.normalize()
    }
}

/// Hermite smoothstep; degenerate edges collapse to a hard step
pub(crate) fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    if (edge1 - edge0).abs() < EPS {
        return if x < edge0 { 0.0 } else { 1.0 };
    }
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Pure surface evaluator
///
/// Owns only the seeded noise generator for the peel texture term; every
/// output is a deterministic function of the per-frame config and audio
/// snapshot, so re-evaluating the same frame is bit-identical.
pub struct SurfaceEvaluator {
    noise: Perlin,
}

impl SurfaceEvaluator {
    /// Create an evaluator with the given noise seed
    pub fn new(noise_seed: u32) -> Self {
        log::debug!("surface evaluator ready (noise seed {noise_seed})");
        Self {
            noise: Perlin::new(noise_seed),
        }
    }

    /// Displaced world position for one uv sample
    ///
    /// Dispatches to the active warp mode, then composes the peel overlay if
    /// enabled. uv outside [0, 1] is accepted (the normal pass samples one
    /// cell past the far edges).
    pub fn displace(&self, uv: Vec2, config: &DeformationConfig, audio: &AudioSnapshot) -> Vec3 {
        let mut pos = match config.warp_mode {
            WarpMode::None => warp::base_position(uv, &config.plane),
            WarpMode::Sag => warp::sag(uv, &config.sag, &config.plane, audio),
            WarpMode::Droop => warp::droop(uv, &config.droop, &config.plane, audio),
            WarpMode::Cylinder => {
                warp::cylinder(uv, &config.cylinder, &config.plane, audio, config.strength)
            }
            WarpMode::Bend => warp::bend(uv, &config.bend, &config.plane, audio),
            WarpMode::Fold => fold::fold(uv, &config.fold, &config.plane, audio, config.strength),
        };
        if config.peel.enabled {
            pos += peel::peel_offset(uv, &config.peel, config.time_s, audio, &self.noise);
        }
        pos
    }

    /// Unit surface normal at a uv sample
    ///
    /// Forward-differences `displace` by one grid cell (`delta` in uv units)
    /// and normalizes the tangent cross product. When the tangents are
    /// parallel or zero-length the cross product is degenerate; the normal
    /// falls back to the rest normal (0, 0, 1) rather than going NaN.
    pub fn normal_at(
        &self,
        uv: Vec2,
        config: &DeformationConfig,
        audio: &AudioSnapshot,
        delta: Vec2,
    ) -> Vec3 {
        let origin = self.displace(uv, config, audio);
        self.normal_from(origin, uv, config, audio, delta)
    }

    fn normal_from(
        &self,
        origin: Vec3,
        uv: Vec2,
        config: &DeformationConfig,
        audio: &AudioSnapshot,
        delta: Vec2,
    ) -> Vec3 {
        let tangent_u = self.displace(uv + Vec2::new(delta.x, 0.0), config, audio) - origin;
        let tangent_v = self.displace(uv + Vec2::new(0.0, delta.y), config, audio) - origin;
        let normal = tangent_u.cross(tangent_v);
        if normal.length_squared() < EPS * EPS {
            Vec3::Z
        } else {
            normal.normalize()
        }
    }

    /// Evaluate the full grid: one position and one normal per sample
    ///
    /// Samples span [0, 1] inclusive on both axes. Cells are independent (no
    /// cross-cell reads, no per-frame state), so the row-major order here is
    /// a choice, not a requirement; the whole output is rebuilt from nothing
    /// every frame.
    pub fn evaluate(
        &self,
        config: &DeformationConfig,
        audio: &AudioSnapshot,
        resolution: GridResolution,
    ) -> SurfaceFields {
        log::trace!(
            "evaluating {}x{} grid, mode {:?}",
            resolution.width,
            resolution.height,
            config.warp_mode
        );

        let mut fields = SurfaceFields::new(resolution);
        let delta = Vec2::new(
            1.0 / resolution.width as f32,
            1.0 / resolution.height as f32,
        );
        let step = |n: u32| if n > 1 { 1.0 / (n - 1) as f32 } else { 0.0 };
        let (u_step, v_step) = (step(resolution.width), step(resolution.height));

        for y in 0..resolution.height {
            for x in 0..resolution.width {
                let uv = Vec2::new(x as f32 * u_step, y as f32 * v_step);
                let position = self.displace(uv, config, audio);
                let normal = self.normal_from(position, uv, config, audio, delta);
                let idx = fields.index(x, y);
                fields.positions[idx] = position.to_array();
                fields.normals[idx] = normal.to_array();
            }
        }
        fields
    }
}
