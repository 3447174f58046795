//! Corner fold: quadrant mirroring, hinge rotation, tuck and crease.
//!
//! Every uv sample is mirrored into its nearest corner's quadrant; a diagonal
//! hinge inset from that corner carries a primary fold rotation plus a
//! secondary nudge tilt, both smoothly gated so the effect dies out before the
//! quadrant boundaries.

use glam::{Mat3, Vec2, Vec3};

use crate::audio::AudioSnapshot;
use crate::params::{FoldParams, PlaneDimensions};

use super::warp::base_position;
use super::{safe_normalize, smoothstep, EPS};

/// A uv sample decomposed into its nearest quadrant
struct Quadrant {
    /// Distance from the nearest vertical/horizontal plane edge, each in
    /// [0, 0.5]; the corner sits at (0, 0)
    local: Vec2,
    /// +1 for the high half of an axis, -1 for the low half; maps local
    /// coordinates back to world space
    sign: Vec2,
}

/// Mirror uv into its nearest corner quadrant
///
/// Samples exactly on 0.5 go to the high quadrant; the mirror map sends 0.5
/// to 0.5 either way, so the choice does not create a seam.
fn quadrant(uv: Vec2) -> Quadrant {
    let (lu, su) = if uv.x >= 0.5 {
        (1.0 - uv.x, 1.0)
    } else {
        (uv.x, -1.0)
    };
    let (lv, sv) = if uv.y >= 0.5 {
        (1.0 - uv.y, 1.0)
    } else {
        (uv.y, -1.0)
    };
    Quadrant {
        local: Vec2::new(lu, lv),
        sign: Vec2::new(su, sv),
    }
}

/// Fold displacement for one uv sample
///
/// Points past the fold threshold stay on the flat base plus the shared
/// audio-driven normal offset, so the surface is continuous at the gate.
pub(crate) fn fold(
    uv: Vec2,
    params: &FoldParams,
    plane: &PlaneDimensions,
    audio: &AudioSnapshot,
    strength: f32,
) -> Vec3 {
    let breathing = Vec3::Z * (audio.low * strength);
    let flat = base_position(uv, plane);

    let q = quadrant(uv);
    let sum = q.local.x + q.local.y;
    let blend = 1.0
        - smoothstep(
            params.depth - params.roundness,
            params.depth + params.roundness,
            sum,
        );
    if blend <= 0.0 {
        return flat + breathing;
    }

    // Hinge: the diagonal segment inset by `depth` along each uv axis,
    // expressed in world space for this corner
    let hinge_start = Vec3::new(
        q.sign.x * (0.5 - params.depth) * plane.width_m,
        q.sign.y * 0.5 * plane.height_m,
        0.0,
    );
    let hinge_end = Vec3::new(
        q.sign.x * 0.5 * plane.width_m,
        q.sign.y * (0.5 - params.depth) * plane.height_m,
        0.0,
    );
    let hinge_axis = safe_normalize(hinge_end - hinge_start);
    if hinge_axis == Vec3::ZERO {
        return flat + breathing;
    }

    // Corner sign keeps all four corners folding the same way out of the
    // plane despite the mirrored hinge directions
    let corner_sign = q.sign.x * q.sign.y;
    let fold_angle =
        params.angle_rad * (1.0 + audio.overall * params.audio_mod) * blend * corner_sign;
    let fold_rot = Mat3::from_axis_angle(hinge_axis, fold_angle);

    // Secondary tilt about the axis orthogonal to both hinge and rest normal
    let nudge_axis = hinge_axis.cross(Vec3::Z);
    let rot = if nudge_axis.length_squared() > EPS * EPS {
        Mat3::from_axis_angle(nudge_axis.normalize(), params.nudge_rad * blend * 2.0) * fold_rot
    } else {
        fold_rot
    };

    let mut pos = hinge_start + rot * (flat - hinge_start);

    // Tuck: push the tip outward along the corner diagonal
    if params.tuck != 0.0 {
        let reach = params.tuck_reach.max(EPS);
        let tip_falloff = 1.0 - smoothstep(0.0, reach, q.local.length());
        if tip_falloff > 0.0 {
            let diagonal = safe_normalize(Vec3::new(
                q.sign.x * plane.width_m,
                q.sign.y * plane.height_m,
                0.0,
            ));
            pos += diagonal * (params.tuck * tip_falloff * blend);
        }
    }

    // Crease: lift along the folded normal near the hinge diagonal itself
    if params.crease != 0.0 {
        let dist = (sum - params.depth).abs();
        let falloff = (1.0 - (dist / params.depth.max(EPS)).clamp(0.0, 1.0))
            .powf(params.crease_sharpness);
        if falloff > 0.0 {
            pos += (rot * Vec3::Z) * (params.crease * falloff * blend);
        }
    }

    pos + breathing
}

#[cfg(test)]
mod tests {
    use super::*;

    fn silent() -> AudioSnapshot {
        AudioSnapshot::default()
    }

    fn plane() -> PlaneDimensions {
        PlaneDimensions::default()
    }

    fn active_params() -> FoldParams {
        FoldParams {
            angle_rad: 0.8,
            depth: 0.25,
            roundness: 0.1,
            nudge_rad: 0.15,
            audio_mod: 0.0,
            tuck: 0.2,
            tuck_reach: 0.15,
            crease: 0.1,
            crease_sharpness: 2.0,
        }
    }

    #[test]
    fn test_quadrant_mirror_at_exact_half() {
        // Exactly 0.5 picks the high quadrant but mirrors onto itself
        let q = quadrant(Vec2::new(0.5, 0.5));
        assert_eq!(q.local, Vec2::new(0.5, 0.5));
        assert_eq!(q.sign, Vec2::new(1.0, 1.0));
    }

    #[test]
    fn test_quadrant_mirror_is_symmetric() {
        let a = quadrant(Vec2::new(0.1, 0.8));
        assert_eq!(a.local, Vec2::new(0.1, 0.2));
        assert_eq!(a.sign, Vec2::new(-1.0, 1.0));

        let b = quadrant(Vec2::new(0.9, 0.2));
        assert_eq!(b.local, Vec2::new(0.1, 0.2));
        assert_eq!(b.sign, Vec2::new(1.0, -1.0));
    }

    #[test]
    fn test_center_region_left_flat() {
        let params = active_params();
        // local sum at the center is 1.0, far past depth + roundness
        let pos = fold(Vec2::new(0.5, 0.5), &params, &plane(), &silent(), 1.0);
        assert_eq!(pos, base_position(Vec2::new(0.5, 0.5), &plane()));
    }

    #[test]
    fn test_corner_tip_is_displaced() {
        let params = active_params();
        let tip = fold(Vec2::new(1.0, 1.0), &params, &plane(), &silent(), 1.0);
        let flat = base_position(Vec2::new(1.0, 1.0), &plane());
        assert!((tip - flat).length() > 0.1);
        assert!(tip.z > 0.0, "positive fold angle lifts the corner");
    }

    #[test]
    fn test_all_corners_fold_the_same_way() {
        let params = active_params();
        let corners = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0), (1.0, 1.0)];
        for &(u, v) in &corners {
            let pos = fold(Vec2::new(u, v), &params, &plane(), &silent(), 1.0);
            assert!(pos.z > 0.0, "corner ({u}, {v}) folded to z = {}", pos.z);
        }
    }

    #[test]
    fn test_mirror_symmetry_across_quadrants() {
        let params = active_params();
        let a = fold(Vec2::new(0.05, 0.1), &params, &plane(), &silent(), 1.0);
        let b = fold(Vec2::new(0.95, 0.1), &params, &plane(), &silent(), 1.0);
        // Mirrored uv folds to the x-mirrored position
        assert!((a.x + b.x).abs() < 1e-4);
        assert!((a.y - b.y).abs() < 1e-4);
        assert!((a.z - b.z).abs() < 1e-4);
    }

    #[test]
    fn test_continuity_across_quadrant_boundary() {
        // Widest legal fold region; the gate still zeroes the effect before
        // local sum reaches 0.5, so crossing u = 0.5 must be seamless
        let mut params = active_params();
        params.depth = 0.4;
        params.roundness = 0.1;

        // Compare displacements rather than positions so the inherent uv
        // separation of the two samples drops out
        let displacement = |u: f32, v: f32| {
            let uv = Vec2::new(u, v);
            fold(uv, &params, &plane(), &silent(), 1.0) - base_position(uv, &plane())
        };

        for &v in &[0.02, 0.1, 0.3] {
            let mut last_gap = f32::MAX;
            for &eps in &[1e-2f32, 1e-3, 1e-4] {
                let gap = (displacement(0.5 - eps, v) - displacement(0.5 + eps, v)).length();
                assert!(gap < last_gap + 1e-6, "gap should shrink with eps");
                last_gap = gap;
            }
            assert!(last_gap < 1e-3, "discontinuity at v = {v}: gap {last_gap}");
        }
    }

    #[test]
    fn test_boundary_sample_matches_one_sided_limit() {
        let mut params = active_params();
        params.depth = 0.4;
        params.roundness = 0.1;
        let v = 0.05;
        let at = fold(Vec2::new(0.5, v), &params, &plane(), &silent(), 1.0);
        let near = fold(Vec2::new(0.5 - 1e-5, v), &params, &plane(), &silent(), 1.0);
        assert!((at - near).length() < 1e-3);
    }

    #[test]
    fn test_blend_gate_is_smooth() {
        let params = active_params();
        // March along the diagonal through the gate band; steps must be small
        let mut previous = fold(Vec2::new(1.0, 1.0), &params, &plane(), &silent(), 1.0);
        let mut step = 0.0;
        while step < 0.4 {
            step += 0.005;
            let uv = Vec2::new(1.0 - step * 0.5, 1.0 - step * 0.5);
            let pos = fold(uv, &params, &plane(), &silent(), 1.0);
            assert!((pos - previous).length() < 0.2, "jump at local sum {step}");
            previous = pos;
        }
    }

    #[test]
    fn test_unfolded_region_keeps_audio_offset() {
        let params = active_params();
        let audio = AudioSnapshot {
            low: 0.5,
            ..Default::default()
        };
        let pos = fold(Vec2::new(0.5, 0.5), &params, &plane(), &audio, 2.0);
        let flat = base_position(Vec2::new(0.5, 0.5), &plane());
        assert_eq!(pos, flat + Vec3::Z);
    }

    #[test]
    fn test_tuck_pulls_tip_outward() {
        let mut with = active_params();
        with.tuck = 0.5;
        let mut without = active_params();
        without.tuck = 0.0;

        let uv = Vec2::new(0.98, 0.98);
        let tucked = fold(uv, &with, &plane(), &silent(), 1.0);
        let plain = fold(uv, &without, &plane(), &silent(), 1.0);
        let delta = tucked - plain;
        // Outward along the (+, +) corner diagonal
        assert!(delta.x > 0.0 && delta.y > 0.0);
    }

    #[test]
    fn test_crease_lifts_near_hinge_diagonal() {
        let mut with = active_params();
        with.crease = 0.3;
        let mut without = active_params();
        without.crease = 0.0;

        // Sample on the hinge diagonal: local sum == depth
        let uv = Vec2::new(1.0 - 0.125, 1.0 - 0.125);
        let creased = fold(uv, &with, &plane(), &silent(), 1.0);
        let plain = fold(uv, &without, &plane(), &silent(), 1.0);
        assert!((creased - plain).length() > 1e-3);
    }
}
