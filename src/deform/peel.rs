//! Corner peel overlay: oscillating lift toward the nearest uv corner, with
//! an in-plane curl pull and a coherent-noise texture term.

use glam::{Vec2, Vec3};
use noise::{NoiseFn, Perlin};
use std::f32::consts::{FRAC_PI_2, SQRT_2};

use crate::audio::AudioSnapshot;
use crate::params::{PeelAnimation, PeelConfig};

use super::safe_normalize2;

/// The four uv corners in index order
const CORNERS: [Vec2; 4] = [
    Vec2::new(0.0, 0.0),
    Vec2::new(1.0, 0.0),
    Vec2::new(0.0, 1.0),
    Vec2::new(1.0, 1.0),
];

/// Index of the uv corner nearest to the sample (Euclidean distance)
pub(crate) fn nearest_corner(uv: Vec2) -> usize {
    let mut best = 0;
    let mut best_dist = f32::MAX;
    for (index, corner) in CORNERS.iter().enumerate() {
        let dist = uv.distance_squared(*corner);
        if dist < best_dist {
            best_dist = dist;
            best = index;
        }
    }
    best
}

/// Peel displacement for one uv sample, composed after the warp mode
///
/// The lift grows as the fourth power of distance from the plane center (zero
/// at center, maximal at the corners) and oscillates over time, with the
/// phase either shared or staggered a quarter cycle per corner.
pub(crate) fn peel_offset(
    uv: Vec2,
    config: &PeelConfig,
    time_s: f32,
    audio: &AudioSnapshot,
    noise: &Perlin,
) -> Vec3 {
    let corner = nearest_corner(uv);
    let centered = uv - Vec2::splat(0.5);
    let corner_strength = (centered.length() * SQRT_2).powi(4);

    let phase = match config.animation {
        PeelAnimation::Synced => 0.0,
        PeelAnimation::PerCorner => FRAC_PI_2 * corner as f32,
    };
    let amplitude = ((time_s * 0.5 + phase).sin() + 1.0) * 0.5;
    let drive = audio.peel_drive(config.audio_source);
    let total = config.amount * amplitude * (1.0 + drive * 3.0);
    let mut displacement = corner_strength * total * 10.0;

    // Coherent texture term perturbs the lift multiplicatively
    if config.texture_amount != 0.0 {
        let n = noise.get([
            uv.x as f64 * 4.0,
            uv.y as f64 * 4.0,
            time_s as f64 * 0.25,
        ]) as f32;
        displacement *= 1.0 + config.texture_amount * n;
    }

    // In-plane curl pulls toward the plane center; safe_normalize keeps the
    // exact center well-defined (zero offset, never NaN)
    let drift_osc = config.drift * (time_s * 0.8 + phase).sin();
    let in_plane = safe_normalize2(centered) * (-displacement * (config.curl + drift_osc));

    Vec3::new(in_plane.x, in_plane.y, displacement)
}
