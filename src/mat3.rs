//! 3×3 column-major matrix.
//!
//! `Mat3` is a plain value: nine `f32`s stored as three [`Vec3`] columns,
//! indexed `m[col][row]`. All arithmetic goes through [`crate::kernels`],
//! so the accelerated/scalar choice made at build time applies everywhere.
//!
//! Operations that write into caller storage come in two shapes:
//!
//! - `*_into` / `*_to` write a full result into a separate `dest`;
//! - `*_in_place` / `*=` overwrite `self` (or the vector argument).
//!
//! In both cases the result is computed from a copy of the inputs and then
//! stored in one assignment, so `a *= a` and `m.mul_vec_in_place(&mut v)`
//! give the same values as their out-of-place forms.

use std::fmt;
use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::error::{Error, Result};
use crate::kernels;
use crate::vec3::Vec3;

/// A 3×3 single-precision matrix, column-major (`cols[col][row]`).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat3 {
    /// The three columns.
    pub cols: [Vec3; 3],
}

impl Mat3 {
    /// Ones on the diagonal, zeros elsewhere.
    pub const IDENTITY: Self = Self::from_cols_array([
        [1.0, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ]);

    /// All entries zero.
    pub const ZERO: Self = Self::from_cols(Vec3::ZERO, Vec3::ZERO, Vec3::ZERO);

    /// Create a matrix from its three columns.
    #[must_use]
    pub const fn from_cols(c0: Vec3, c1: Vec3, c2: Vec3) -> Self {
        Self { cols: [c0, c1, c2] }
    }

    /// Create a matrix from `[[f32; 3]; 3]` laid out as `a[col][row]`.
    #[must_use]
    pub const fn from_cols_array(a: [[f32; 3]; 3]) -> Self {
        Self::from_cols(
            Vec3::from_array(a[0]),
            Vec3::from_array(a[1]),
            Vec3::from_array(a[2]),
        )
    }

    /// Entries as `[[f32; 3]; 3]` laid out as `a[col][row]`.
    #[must_use]
    pub const fn to_cols_array(&self) -> [[f32; 3]; 3] {
        [
            self.cols[0].to_array(),
            self.cols[1].to_array(),
            self.cols[2].to_array(),
        ]
    }

    /// Row `row` as a vector.
    #[must_use]
    pub fn row(&self, row: usize) -> Vec3 {
        Vec3::new(self.cols[0][row], self.cols[1][row], self.cols[2][row])
    }

    /// Copies every entry of `self` into `dest`. `dest` is not read.
    #[inline]
    pub fn duplicate_into(&self, dest: &mut Self) {
        *dest = kernels::duplicate(*self);
    }

    /// Matrix product `self · rhs`.
    #[inline]
    #[must_use]
    pub fn mul_mat(self, rhs: Self) -> Self {
        kernels::multiply(self, rhs)
    }

    /// Writes `self · rhs` into `dest`.
    #[inline]
    pub fn mul_into(&self, rhs: &Self, dest: &mut Self) {
        *dest = kernels::multiply(*self, *rhs);
    }

    /// Replaces `self` with `self · self`.
    #[inline]
    pub fn square_in_place(&mut self) {
        *self = kernels::multiply(*self, *self);
    }

    /// Transpose of `self`. `self` is left unchanged.
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Self {
        kernels::transpose(self)
    }

    /// Writes the transpose of `self` into `dest`.
    #[inline]
    pub fn transpose_to(&self, dest: &mut Self) {
        *dest = kernels::transpose(*self);
    }

    /// Transposes `self` in place.
    #[inline]
    pub fn transpose_in_place(&mut self) {
        kernels::transpose_in_place(self);
    }

    /// `self · v` with `v` as a column vector.
    #[inline]
    #[must_use]
    pub fn mul_vec(self, v: Vec3) -> Vec3 {
        kernels::multiply_vector(self, v)
    }

    /// Writes `self · v` into `dest`.
    #[inline]
    pub fn mul_vec_into(&self, v: &Vec3, dest: &mut Vec3) {
        *dest = kernels::multiply_vector(*self, *v);
    }

    /// Replaces `v` with `self · v`.
    #[inline]
    pub fn mul_vec_in_place(&self, v: &mut Vec3) {
        *v = kernels::multiply_vector(*self, *v);
    }

    /// Every entry multiplied by `s`.
    #[inline]
    #[must_use]
    pub fn scale(self, s: f32) -> Self {
        kernels::scale(self, s)
    }

    /// Sum of the diagonal.
    #[inline]
    #[must_use]
    pub fn trace(self) -> f32 {
        kernels::trace(self)
    }

    /// Determinant.
    #[inline]
    #[must_use]
    pub fn determinant(self) -> f32 {
        kernels::determinant(self)
    }

    /// True if every entry equals the identity exactly.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f32; 3]; 3]> for Mat3 {
    fn from(a: [[f32; 3]; 3]) -> Self {
        Self::from_cols_array(a)
    }
}

impl From<Mat3> for [[f32; 3]; 3] {
    fn from(m: Mat3) -> Self {
        m.to_cols_array()
    }
}

/// Nine scalars, column-major.
impl TryFrom<&[f32]> for Mat3 {
    type Error = Error;

    fn try_from(data: &[f32]) -> Result<Self> {
        match *data {
            [a00, a01, a02, a10, a11, a12, a20, a21, a22] => Ok(Self::from_cols_array([
                [a00, a01, a02],
                [a10, a11, a12],
                [a20, a21, a22],
            ])),
            _ => Err(Error::DataLengthMismatch {
                expected: 9,
                actual: data.len(),
            }),
        }
    }
}

impl Index<usize> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn index(&self, col: usize) -> &Vec3 {
        &self.cols[col]
    }
}

impl IndexMut<usize> for Mat3 {
    #[inline]
    fn index_mut(&mut self, col: usize) -> &mut Vec3 {
        &mut self.cols[col]
    }
}

impl Mul for Mat3 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        kernels::multiply(self, rhs)
    }
}

impl MulAssign for Mat3 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = kernels::multiply(*self, rhs);
    }
}

impl Mul<Vec3> for Mat3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, v: Vec3) -> Vec3 {
        kernels::multiply_vector(self, v)
    }
}

/// Prints three rows, one per line.
impl fmt::Display for Mat3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", self.row(row))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Mat3 {
        Mat3::from_cols_array([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]])
    }

    #[test]
    fn test_identity_layout() {
        let id = Mat3::IDENTITY;
        for col in 0..3 {
            for row in 0..3 {
                let expected = if col == row { 1.0 } else { 0.0 };
                assert_eq!(id[col][row], expected);
            }
        }
        assert!(id.is_identity());
        assert_eq!(Mat3::default(), id);
    }

    #[test]
    fn test_identity_is_a_fresh_copy() {
        let mut a = Mat3::IDENTITY;
        a[0][0] = 5.0;
        assert_eq!(Mat3::IDENTITY[0][0], 1.0);
    }

    #[test]
    fn test_duplicate_into_overwrites_dest() {
        let mut dest = Mat3::from_cols_array([[f32::NAN; 3]; 3]);
        sample().duplicate_into(&mut dest);
        assert_eq!(dest, sample());
    }

    #[test]
    fn test_mul_into_and_operator_agree() {
        let a = sample();
        let b = sample().transpose();
        let mut dest = Mat3::ZERO;
        a.mul_into(&b, &mut dest);
        assert_eq!(dest, a * b);
        assert_eq!(dest, a.mul_mat(b));
    }

    #[test]
    fn test_mul_assign_self() {
        let mut a = sample();
        let expected = sample() * sample();
        a *= a;
        assert_eq!(a, expected);
    }

    #[test]
    fn test_square_in_place() {
        let mut a = sample();
        a.square_in_place();
        assert_eq!(a, sample() * sample());
        assert_eq!(a.cols[0], Vec3::new(30.0, 36.0, 42.0));
    }

    #[test]
    fn test_transpose_to_leaves_source() {
        let src = sample();
        let mut dest = Mat3::ZERO;
        src.transpose_to(&mut dest);
        assert_eq!(src, sample());
        assert_eq!(
            dest.to_cols_array(),
            [[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]
        );
    }

    #[test]
    fn test_transpose_in_place_twice() {
        let mut m = sample();
        m.transpose_in_place();
        assert_ne!(m, sample());
        m.transpose_in_place();
        assert_eq!(m, sample());
    }

    #[test]
    fn test_mul_vec_forms_agree() {
        let m = sample();
        let v = Vec3::new(1.0, -2.0, 0.5);
        let mut out = Vec3::ZERO;
        m.mul_vec_into(&v, &mut out);
        let mut in_place = v;
        m.mul_vec_in_place(&mut in_place);
        assert_eq!(out, m * v);
        assert_eq!(in_place, out);
        assert_eq!(out, Vec3::new(-3.5, -4.0, -4.5));
    }

    #[test]
    fn test_row() {
        assert_eq!(sample().row(1), Vec3::new(2.0, 5.0, 8.0));
    }

    #[test]
    fn test_scale_trace_determinant() {
        let m = Mat3::from_cols_array([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
        assert_eq!(m.trace(), 9.0);
        assert_eq!(m.determinant(), 24.0);
        assert_eq!(m.scale(0.5).determinant(), 3.0);
    }

    #[test]
    fn test_try_from_slice() {
        let data: Vec<f32> = (1..=9).map(|i| i as f32).collect();
        let m = Mat3::try_from(data.as_slice()).unwrap();
        assert_eq!(m, sample());
    }

    #[test]
    fn test_try_from_slice_wrong_length() {
        let data = [0.0f32; 8];
        let err = Mat3::try_from(&data[..]).unwrap_err();
        assert_eq!(
            err,
            Error::DataLengthMismatch {
                expected: 9,
                actual: 8
            }
        );
    }

    #[test]
    fn test_array_round_trip() {
        let a: [[f32; 3]; 3] = sample().into();
        assert_eq!(Mat3::from(a), sample());
    }

    #[test]
    fn test_display_rows() {
        let s = sample().to_string();
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines, vec!["[1, 4, 7]", "[2, 5, 8]", "[3, 6, 9]"]);
    }
}
