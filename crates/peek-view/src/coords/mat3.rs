use core::ops::Mul;

use super::Vec2;

/// 3×3 matrix for 2D affine transforms, stored column-major.
///
/// `cols[c][r]` is row `r` of column `c`, which matches the memory layout of a
/// WGSL `mat3x3<f32>` once each column is padded to 16 bytes.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Mat3 {
    pub cols: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 {
        cols: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    #[inline]
    pub const fn from_cols(c0: [f32; 3], c1: [f32; 3], c2: [f32; 3]) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Non-uniform scale about the origin.
    #[inline]
    pub const fn scale(s: Vec2) -> Self {
        Self::from_cols([s.x, 0.0, 0.0], [0.0, s.y, 0.0], [0.0, 0.0, 1.0])
    }

    #[inline]
    pub const fn translate(t: Vec2) -> Self {
        Self::from_cols([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [t.x, t.y, 1.0])
    }

    #[inline]
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        let [c0, c1, c2] = self.cols;
        Vec2::new(
            c0[0] * p.x + c1[0] * p.y + c2[0],
            c0[1] * p.x + c1[1] * p.y + c2[1],
        )
    }

    #[inline]
    pub fn to_cols_array(self) -> [[f32; 3]; 3] {
        self.cols
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Mat3 {
    type Output = Mat3;

    fn mul(self, rhs: Mat3) -> Mat3 {
        let mut out = [[0.0f32; 3]; 3];
        for (c, out_col) in out.iter_mut().enumerate() {
            for (r, cell) in out_col.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.cols[k][r] * rhs.cols[c][k]).sum();
            }
        }
        Mat3 { cols: out }
    }
}
