//! SSE2 kernels for x86 / x86_64.
//!
//! # Safety
//!
//! This module is only compiled when `sse2` is enabled for the whole build
//! (`cfg(target_feature = "sse2")`), so the intrinsics are always available.
//! Every load and store goes through a local `[f32; 4]`, never through the
//! caller's 3-wide columns.
#![allow(unsafe_code)]

#[cfg(target_arch = "x86")]
use std::arch::x86::*;

#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

use super::{from_lanes, to_lanes};
use crate::mat3::Mat3;

/// `m1 · m2`, one output column per SSE register.
///
/// Each output column is `m1.col0 * b.x + m1.col1 * b.y + m1.col2 * b.z`
/// for the matching column `b` of `m2`, accumulated in the same order as
/// [`scalar::multiply`](super::scalar::multiply). The three columns of `m1`
/// are loaded before anything is stored.
#[inline]
#[must_use]
pub fn multiply(m1: Mat3, m2: Mat3) -> Mat3 {
    let mut out = [[0.0f32; 4]; 3];

    // SAFETY: sse2 is enabled at compile time; pointers come from local
    // 4-lane arrays that outlive each load/store.
    unsafe {
        let l0 = _mm_loadu_ps(to_lanes(m1.cols[0]).as_ptr());
        let l1 = _mm_loadu_ps(to_lanes(m1.cols[1]).as_ptr());
        let l2 = _mm_loadu_ps(to_lanes(m1.cols[2]).as_ptr());

        for (dst, b) in out.iter_mut().zip(m2.cols) {
            let col = _mm_add_ps(
                _mm_add_ps(
                    _mm_mul_ps(l0, _mm_set1_ps(b.x)),
                    _mm_mul_ps(l1, _mm_set1_ps(b.y)),
                ),
                _mm_mul_ps(l2, _mm_set1_ps(b.z)),
            );
            _mm_storeu_ps(dst.as_mut_ptr(), col);
        }
    }

    Mat3::from_cols(from_lanes(out[0]), from_lanes(out[1]), from_lanes(out[2]))
}
