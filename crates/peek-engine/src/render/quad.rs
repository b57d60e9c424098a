//! Static unit quad and the transform uniform layout.

use bytemuck::{Pod, Zeroable};

/// Interleaved position + texture coordinate.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct QuadVertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
}

impl QuadVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2  // uv
    ];

    pub(super) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<QuadVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// Quad spanning `[-1, 1]²`. Texture row 0 is the top of the image, so `v`
/// runs opposite to `y`.
pub(super) const QUAD_VERTICES: [QuadVertex; 4] = [
    QuadVertex { pos: [-1.0, -1.0], uv: [0.0, 1.0] },
    QuadVertex { pos: [1.0, -1.0], uv: [1.0, 1.0] },
    QuadVertex { pos: [1.0, 1.0], uv: [1.0, 0.0] },
    QuadVertex { pos: [-1.0, 1.0], uv: [0.0, 0.0] },
];

pub(super) const QUAD_INDICES: [u16; 6] = [0, 2, 3, 0, 1, 2];

/// WGSL `mat3x3<f32>` uniform: three columns, each padded to 16 bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct TransformUniform {
    pub cols: [[f32; 4]; 3],
}

impl Default for TransformUniform {
    fn default() -> Self {
        Self::from_cols([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }
}

impl TransformUniform {
    pub(super) fn from_cols(cols: [[f32; 3]; 3]) -> Self {
        let pad = |c: [f32; 3]| [c[0], c[1], c[2], 0.0];
        Self { cols: [pad(cols[0]), pad(cols[1]), pad(cols[2])] }
    }

    pub(super) fn min_binding_size() -> Option<wgpu::BufferSize> {
        wgpu::BufferSize::new(std::mem::size_of::<TransformUniform>() as u64)
    }
}
