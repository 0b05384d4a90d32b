//! Point-cloud terrain built from layered simplex noise.

mod generator;
mod system;

use bytemuck::{Pod, Zeroable};

pub use generator::{height_to_color, NoiseFieldGenerator};
pub use system::{FieldSystem, RegenerationPolicy};

/// Vertex data for the point cloud (position + color), as uploaded to the GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

/// One generation pass: index-aligned positions and colors
///
/// Points are stored row-major with `z` outer and `x` inner, so the point
/// for cell `(x, z)` lives at `z * width + x`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloudFrame {
    pub positions: Vec<[f32; 3]>,
    pub colors: Vec<[f32; 3]>,
}

impl PointCloudFrame {
    pub fn with_capacity(points: usize) -> Self {
        Self {
            positions: Vec::with_capacity(points),
            colors: Vec::with_capacity(points),
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Drop all points, keeping the allocations
    pub fn clear(&mut self) {
        self.positions.clear();
        self.colors.clear();
    }

    pub fn push(&mut self, position: [f32; 3], color: [f32; 3]) {
        self.positions.push(position);
        self.colors.push(color);
    }

    /// Interleave positions and colors into a vertex buffer, reusing `out`
    pub fn write_vertices(&self, out: &mut Vec<PointVertex>) {
        out.clear();
        out.extend(
            self.positions
                .iter()
                .zip(&self.colors)
                .map(|(&position, &color)| PointVertex { position, color }),
        );
    }

    pub fn vertices(&self) -> Vec<PointVertex> {
        let mut out = Vec::with_capacity(self.len());
        self.write_vertices(&mut out);
        out
    }
}
