/// 4x4 transformation matrices
///
/// Storage is column-major, `m[column][row]`, the layout OpenGL and WebGL
/// expect from `uniformMatrix4fv` with `transpose = false`. Translation lives
/// in `m[3][0..3]`.
use std::ops::Mul;

use crate::vector::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    pub m: [[f32; 4]; 4],
}

impl Matrix4 {
    pub const IDENTITY: Self = Self {
        m: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    pub const ZERO: Self = Self { m: [[0.0; 4]; 4] };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn from_cols(m: [[f32; 4]; 4]) -> Self {
        Self { m }
    }

    /// Pure translation by `v`
    pub fn translation(v: Vector3) -> Self {
        let mut out = Self::IDENTITY;
        out.m[3][0] = v.x;
        out.m[3][1] = v.y;
        out.m[3][2] = v.z;
        out
    }

    /// `self · translation(v)`: the translation is applied to points first.
    pub fn translated(&self, v: Vector3) -> Self {
        self.multiply(&Self::translation(v))
    }

    /// In-place form of [`Matrix4::translated`]
    pub fn translate(&mut self, v: Vector3) {
        *self = self.translated(v);
    }

    /// Standard product `self · rhs`. Not commutative.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let mut out = Self::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                out.m[c][r] = (0..4).map(|k| self.m[k][r] * rhs.m[c][k]).sum();
            }
        }
        out
    }

    /// Transform a homogeneous point `(p, 1)`, returning `[x, y, z, w]`
    /// without the perspective divide.
    pub fn transform_point(&self, p: Vector3) -> [f32; 4] {
        let v = [p.x, p.y, p.z, 1.0];
        let mut out = [0.0; 4];
        for (r, slot) in out.iter_mut().enumerate() {
            *slot = (0..4).map(|c| self.m[c][r] * v[c]).sum();
        }
        out
    }

    fn basis_row(&self, row: usize) -> Vector3 {
        Vector3::new(self.m[0][row], self.m[1][row], self.m[2][row])
    }

    /// Camera right axis in world space: row 0 of the rotation block.
    pub fn right_vector(&self) -> Vector3 {
        self.basis_row(0)
    }

    /// Camera up axis in world space: row 1 of the rotation block.
    pub fn up_vector(&self) -> Vector3 {
        self.basis_row(1)
    }

    /// Camera forward axis in world space: row 2 of the rotation block.
    pub fn forward_vector(&self) -> Vector3 {
        self.basis_row(2)
    }

    /// Flattened columns, ready for a uniform upload with `transpose = false`
    pub fn to_cols_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (c, column) in self.m.iter().enumerate() {
            out[c * 4..c * 4 + 4].copy_from_slice(column);
        }
        out
    }

    /// Largest absolute element-wise difference, for tolerance checks
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        let mut max = 0.0_f32;
        for c in 0..4 {
            for r in 0..4 {
                max = max.max((self.m[c][r] - other.m[c][r]).abs());
            }
        }
        max
    }
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Matrix4 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl From<nalgebra::Matrix4<f32>> for Matrix4 {
    fn from(n: nalgebra::Matrix4<f32>) -> Self {
        let mut out = Self::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                out.m[c][r] = n[(r, c)];
            }
        }
        out
    }
}

impl From<Matrix4> for nalgebra::Matrix4<f32> {
    fn from(m: Matrix4) -> Self {
        nalgebra::Matrix4::from_fn(|r, c| m.m[c][r])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(seed: f32) -> Matrix4 {
        let mut out = Matrix4::ZERO;
        for c in 0..4 {
            for r in 0..4 {
                out.m[c][r] = ((c * 4 + r) as f32 * 0.37 + seed).sin() * 2.0;
            }
        }
        out
    }

    #[test]
    fn test_identity_layout() {
        let id = Matrix4::identity();
        for c in 0..4 {
            for r in 0..4 {
                assert_eq!(id.m[c][r], if c == r { 1.0 } else { 0.0 });
            }
        }
        let a = sample(0.5);
        assert_eq!(a * Matrix4::IDENTITY, a);
        assert_eq!(Matrix4::IDENTITY * a, a);
    }

    #[test]
    fn test_multiply_associative() {
        let (a, b, c) = (sample(0.1), sample(1.7), sample(-2.3));
        let left = (a * b) * c;
        let right = a * (b * c);
        assert!(left.max_abs_diff(&right) < 1e-4);
    }

    #[test]
    fn test_multiply_not_commutative() {
        let t = Matrix4::translation(Vector3::new(1.0, 0.0, 0.0));
        let s = Matrix4::from_cols([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        assert_ne!(t * s, s * t);
        assert_eq!((s * t).m[3][0], 2.0);
        assert_eq!((t * s).m[3][0], 1.0);
    }

    #[test]
    fn test_multiply_matches_nalgebra() {
        let (a, b) = (sample(0.9), sample(3.1));
        let expected: Matrix4 =
            (nalgebra::Matrix4::from(a) * nalgebra::Matrix4::from(b)).into();
        assert!((a * b).max_abs_diff(&expected) < 1e-5);
    }

    #[test]
    fn test_translate_composes() {
        let mut m = Matrix4::identity();
        m.translate(Vector3::new(0.0, 2.0, 0.0));
        m.translate(Vector3::new(0.0, 0.0, 0.5));
        assert_eq!(m, Matrix4::translation(Vector3::new(0.0, 2.0, 0.5)));

        let p = m.transform_point(Vector3::new(1.0, 1.0, 1.0));
        assert_eq!(p, [1.0, 3.0, 1.5, 1.0]);
    }

    #[test]
    fn test_translated_is_pure() {
        let m = Matrix4::identity();
        let moved = m.translated(Vector3::new(4.0, 5.0, 6.0));
        assert_eq!(m, Matrix4::IDENTITY);
        assert_eq!(moved.m[3], [4.0, 5.0, 6.0, 1.0]);
    }

    #[test]
    fn test_basis_extraction_reads_rows() {
        assert_eq!(Matrix4::IDENTITY.right_vector(), Vector3::X);
        assert_eq!(Matrix4::IDENTITY.up_vector(), Vector3::Y);
        assert_eq!(Matrix4::IDENTITY.forward_vector(), Vector3::Z);

        // Translation does not leak into the basis
        let t = Matrix4::translation(Vector3::new(9.0, 8.0, 7.0));
        assert_eq!(t.forward_vector(), Vector3::Z);

        let m = sample(0.0);
        assert_eq!(m.up_vector(), Vector3::new(m.m[0][1], m.m[1][1], m.m[2][1]));
    }

    #[test]
    fn test_cols_array_layout() {
        let t = Matrix4::translation(Vector3::new(1.0, 2.0, 3.0));
        let flat = t.to_cols_array();
        assert_eq!(&flat[12..16], &[1.0, 2.0, 3.0, 1.0]);
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[3], 0.0);
    }
}
