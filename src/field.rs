//! Dense per-frame output fields for the mesh/shading collaborator.
//!
//! Positions and normals are row-major `width * height` arrays, rebuilt in
//! full every frame; nothing here survives between frames. The byte views and
//! the interleaved vertex layout are what a GPU mesh collaborator uploads.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;

use crate::params::GridResolution;

/// Interleaved vertex for mesh upload (position + normal + uv)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct SurfaceVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

/// Position and normal fields for one evaluated frame
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceFields {
    resolution: GridResolution,
    /// Displaced world positions, row-major
    pub positions: Vec<[f32; 3]>,
    /// Unit normals (rest normal where reconstruction was degenerate)
    pub normals: Vec<[f32; 3]>,
}

impl SurfaceFields {
    pub(crate) fn new(resolution: GridResolution) -> Self {
        let count = resolution.sample_count();
        Self {
            resolution,
            positions: vec![[0.0; 3]; count],
            normals: vec![[0.0; 3]; count],
        }
    }

    pub fn resolution(&self) -> GridResolution {
        self.resolution
    }

    /// Flat index of grid sample (x, y)
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.resolution.width && y < self.resolution.height);
        (y * self.resolution.width + x) as usize
    }

    pub fn position(&self, x: u32, y: u32) -> [f32; 3] {
        self.positions[self.index(x, y)]
    }

    pub fn normal(&self, x: u32, y: u32) -> [f32; 3] {
        self.normals[self.index(x, y)]
    }

    /// Raw bytes of the position field, ready for buffer upload
    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    /// Raw bytes of the normal field
    pub fn normal_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.normals)
    }

    /// Interleave positions, normals, and uv into upload-ready vertices
    pub fn vertices(&self) -> Vec<SurfaceVertex> {
        let step = |n: u32| if n > 1 { 1.0 / (n - 1) as f32 } else { 0.0 };
        let (u_step, v_step) = (step(self.resolution.width), step(self.resolution.height));

        let mut vertices = Vec::with_capacity(self.positions.len());
        for y in 0..self.resolution.height {
            for x in 0..self.resolution.width {
                let idx = self.index(x, y);
                vertices.push(SurfaceVertex {
                    position: self.positions[idx],
                    normal: self.normals[idx],
                    uv: Vec2::new(x as f32 * u_step, y as f32 * v_step).to_array(),
                });
            }
        }
        vertices
    }

    /// Triangle indices for a grid of this resolution (counter-clockwise
    /// winding, two triangles per cell)
    ///
    /// The topology never changes between frames, so consumers build this
    /// once per resolution and reuse it.
    pub fn triangle_indices(resolution: GridResolution) -> Vec<u32> {
        if resolution.width < 2 || resolution.height < 2 {
            return Vec::new();
        }

        let mut indices = Vec::new();
        for y in 0..resolution.height - 1 {
            for x in 0..resolution.width - 1 {
                let top_left = y * resolution.width + x;
                let top_right = top_left + 1;
                let bottom_left = (y + 1) * resolution.width + x;
                let bottom_right = bottom_left + 1;

                indices.extend_from_slice(&[
                    top_left,
                    bottom_left,
                    top_right,
                    top_right,
                    bottom_left,
                    bottom_right,
                ]);
            }
        }
        indices
    }
}
