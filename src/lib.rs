//! Warpfield - audio-reactive deformable surface evaluator
//!
//! A flat grid is displaced every frame by a selectable warp mode (sag, droop,
//! cylinder, bend, fold), optionally overlaid with a corner-localized peel
//! effect, and shaded from a finite-difference normal field. Evaluation is
//! pure per sample: each cell depends only on its own uv, the per-frame
//! config, and the per-frame audio snapshot.

pub mod audio;
pub mod deform;
pub mod field;
pub mod params;
