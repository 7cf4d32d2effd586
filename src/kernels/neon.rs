//! NEON kernels for aarch64.
//!
//! # Safety
//!
//! Compiled only with `cfg(target_feature = "neon")`, which every standard
//! aarch64 target enables. Loads and stores use local `[f32; 4]` buffers.
#![allow(unsafe_code)]

use std::arch::aarch64::*;

use super::{from_lanes, to_lanes};
use crate::mat3::Mat3;

/// `m1 · m2`, one output column per NEON register.
///
/// Same accumulation order as [`scalar::multiply`](super::scalar::multiply):
/// `(col0 * b.x + col1 * b.y) + col2 * b.z`. No fused multiply-add, so the
/// rounding matches the scalar kernel.
#[inline]
#[must_use]
pub fn multiply(m1: Mat3, m2: Mat3) -> Mat3 {
    let mut out = [[0.0f32; 4]; 3];

    // SAFETY: neon is enabled at compile time; pointers come from local
    // 4-lane arrays that outlive each load/store.
    unsafe {
        let l0 = vld1q_f32(to_lanes(m1.cols[0]).as_ptr());
        let l1 = vld1q_f32(to_lanes(m1.cols[1]).as_ptr());
        let l2 = vld1q_f32(to_lanes(m1.cols[2]).as_ptr());

        for (dst, b) in out.iter_mut().zip(m2.cols) {
            let col = vaddq_f32(
                vaddq_f32(vmulq_n_f32(l0, b.x), vmulq_n_f32(l1, b.y)),
                vmulq_n_f32(l2, b.z),
            );
            vst1q_f32(dst.as_mut_ptr(), col);
        }
    }

    Mat3::from_cols(from_lanes(out[0]), from_lanes(out[1]), from_lanes(out[2]))
}
