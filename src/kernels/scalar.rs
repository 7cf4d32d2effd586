//! Portable scalar kernels.
//!
//! Reference implementation of every [`Mat3`] operation using plain `f32`
//! arithmetic. Always compiled, on every target, so the accelerated kernels
//! have something to be checked against.
//!
//! Every kernel takes its operands by value. The caller's storage is copied
//! into locals before any output exists, so writing the result back over one
//! of the inputs can never observe a half-written matrix.

use crate::mat3::Mat3;
use crate::vec3::Vec3;

/// Copies all nine entries of `m`.
#[inline]
#[must_use]
pub fn duplicate(m: Mat3) -> Mat3 {
    Mat3::from_cols(m.cols[0], m.cols[1], m.cols[2])
}

/// `m1 · m2` in column-major order: `dest[c][r] = Σ_k m1[k][r] * m2[c][k]`.
#[inline]
#[must_use]
pub fn multiply(m1: Mat3, m2: Mat3) -> Mat3 {
    let [a0, a1, a2] = m1.cols;
    let [b0, b1, b2] = m2.cols;

    let (a00, a01, a02) = (a0.x, a0.y, a0.z);
    let (a10, a11, a12) = (a1.x, a1.y, a1.z);
    let (a20, a21, a22) = (a2.x, a2.y, a2.z);

    let (b00, b01, b02) = (b0.x, b0.y, b0.z);
    let (b10, b11, b12) = (b1.x, b1.y, b1.z);
    let (b20, b21, b22) = (b2.x, b2.y, b2.z);

    Mat3::from_cols(
        Vec3::new(
            a00 * b00 + a10 * b01 + a20 * b02,
            a01 * b00 + a11 * b01 + a21 * b02,
            a02 * b00 + a12 * b01 + a22 * b02,
        ),
        Vec3::new(
            a00 * b10 + a10 * b11 + a20 * b12,
            a01 * b10 + a11 * b11 + a21 * b12,
            a02 * b10 + a12 * b11 + a22 * b12,
        ),
        Vec3::new(
            a00 * b20 + a10 * b21 + a20 * b22,
            a01 * b20 + a11 * b21 + a21 * b22,
            a02 * b20 + a12 * b21 + a22 * b22,
        ),
    )
}

/// `dest[c][r] = m[r][c]`.
#[inline]
#[must_use]
pub fn transpose(m: Mat3) -> Mat3 {
    let [c0, c1, c2] = m.cols;
    Mat3::from_cols(
        Vec3::new(c0.x, c1.x, c2.x),
        Vec3::new(c0.y, c1.y, c2.y),
        Vec3::new(c0.z, c1.z, c2.z),
    )
}

/// Transposes `m` in its own storage.
///
/// The six off-diagonal entries are read into temporaries before any of them
/// is written. The diagonal stays where it is.
#[inline]
pub fn transpose_in_place(m: &mut Mat3) {
    let t01 = m.cols[1].x;
    let t02 = m.cols[2].x;
    let t10 = m.cols[0].y;
    let t12 = m.cols[2].y;
    let t20 = m.cols[0].z;
    let t21 = m.cols[1].z;

    m.cols[0].y = t01;
    m.cols[0].z = t02;
    m.cols[1].x = t10;
    m.cols[1].z = t12;
    m.cols[2].x = t20;
    m.cols[2].y = t21;
}

/// `m · v` with `v` as a column vector: `dest[r] = Σ_k m[k][r] * v[k]`.
#[inline]
#[must_use]
pub fn multiply_vector(m: Mat3, v: Vec3) -> Vec3 {
    let [c0, c1, c2] = m.cols;
    let Vec3 { x, y, z } = v;
    Vec3::new(
        c0.x * x + c1.x * y + c2.x * z,
        c0.y * x + c1.y * y + c2.y * z,
        c0.z * x + c1.z * y + c2.z * z,
    )
}

/// Every entry of `m` multiplied by `s`.
#[inline]
#[must_use]
pub fn scale(m: Mat3, s: f32) -> Mat3 {
    let [c0, c1, c2] = m.cols;
    Mat3::from_cols(
        Vec3::new(c0.x * s, c0.y * s, c0.z * s),
        Vec3::new(c1.x * s, c1.y * s, c1.z * s),
        Vec3::new(c2.x * s, c2.y * s, c2.z * s),
    )
}

/// Sum of the diagonal.
#[inline]
#[must_use]
pub fn trace(m: Mat3) -> f32 {
    m.cols[0].x + m.cols[1].y + m.cols[2].z
}

/// Determinant by cofactor expansion along the first column.
#[inline]
#[must_use]
pub fn determinant(m: Mat3) -> f32 {
    let [c0, c1, c2] = m.cols;
    c0.x * (c1.y * c2.z - c2.y * c1.z) - c1.x * (c0.y * c2.z - c2.y * c0.z)
        + c2.x * (c0.y * c1.z - c1.y * c0.z)
}
