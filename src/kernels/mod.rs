//! Kernel dispatch for [`Mat3`] operations.
//!
//! Each public function here is the single entry point for one operation.
//! The backing kernel is chosen when the crate is compiled, from the target
//! features of the build:
//!
//! | Target | Feature | `multiply` kernel |
//! |---|---|---|
//! | x86 / x86_64 | `sse2` | `sse2::multiply` |
//! | aarch64 | `neon` | `neon::multiply` |
//! | anything else | - | [`scalar::multiply`] |
//!
//! There is no runtime detection and no per-call selection. Operations
//! without an accelerated kernel always go to [`scalar`], which is compiled
//! on every target so the two paths can be compared.
//!
//! Accelerated kernels accumulate in the same order as the scalar ones.
//! Results are expected to agree bit for bit; callers should still only
//! rely on agreement within a few ULP.

pub mod scalar;

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
pub mod sse2;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub mod neon;

#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
use self::sse2 as accelerated;

#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
use self::neon as accelerated;

#[cfg(not(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
use self::scalar as accelerated;

use crate::mat3::Mat3;
use crate::vec3::Vec3;

/// Kernel family backing the accelerated operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimdBackend {
    /// Portable scalar arithmetic.
    Scalar,
    /// SSE2 (128-bit, x86 / x86_64).
    Sse2,
    /// ARM NEON (128-bit, aarch64).
    Neon,
}

impl SimdBackend {
    /// Short lowercase name, e.g. for benchmark labels.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scalar => "scalar",
            Self::Sse2 => "sse2",
            Self::Neon => "neon",
        }
    }

    /// Whether this backend uses vector instructions.
    #[must_use]
    pub const fn is_accelerated(&self) -> bool {
        !matches!(self, Self::Scalar)
    }

    /// Returns the register width in bits.
    #[must_use]
    pub const fn register_width_bits(&self) -> usize {
        match self {
            Self::Scalar => 32,
            Self::Sse2 | Self::Neon => 128,
        }
    }

    /// Returns the number of f32 values processed per operation.
    #[must_use]
    pub const fn f32_lanes(&self) -> usize {
        self.register_width_bits() / 32
    }
}

impl std::fmt::Display for SimdBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend selected for this build.
#[cfg(all(
    any(target_arch = "x86", target_arch = "x86_64"),
    target_feature = "sse2"
))]
pub const ACTIVE_BACKEND: SimdBackend = SimdBackend::Sse2;

/// Backend selected for this build.
#[cfg(all(target_arch = "aarch64", target_feature = "neon"))]
pub const ACTIVE_BACKEND: SimdBackend = SimdBackend::Neon;

/// Backend selected for this build.
#[cfg(not(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
)))]
pub const ACTIVE_BACKEND: SimdBackend = SimdBackend::Scalar;

/// Pads a column to a full 4-lane register image. Lane 3 is zero.
#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
))]
#[inline]
fn to_lanes(v: Vec3) -> [f32; 4] {
    [v.x, v.y, v.z, 0.0]
}

/// Drops lane 3 of a stored register.
#[cfg(any(
    all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2"
    ),
    all(target_arch = "aarch64", target_feature = "neon")
))]
#[inline]
fn from_lanes(lanes: [f32; 4]) -> Vec3 {
    Vec3::new(lanes[0], lanes[1], lanes[2])
}

// ============================================================================
// Dispatch
// ============================================================================

/// Copy of `m`. Scalar only.
#[inline]
#[must_use]
pub fn duplicate(m: Mat3) -> Mat3 {
    scalar::duplicate(m)
}

/// `m1 · m2` on [`ACTIVE_BACKEND`].
#[inline]
#[must_use]
pub fn multiply(m1: Mat3, m2: Mat3) -> Mat3 {
    accelerated::multiply(m1, m2)
}

/// Transpose of `m`. Scalar only.
#[inline]
#[must_use]
pub fn transpose(m: Mat3) -> Mat3 {
    scalar::transpose(m)
}

/// Transposes `m` in its own storage. Scalar only.
#[inline]
pub fn transpose_in_place(m: &mut Mat3) {
    scalar::transpose_in_place(m);
}

/// `m · v`. Scalar only.
#[inline]
#[must_use]
pub fn multiply_vector(m: Mat3, v: Vec3) -> Vec3 {
    scalar::multiply_vector(m, v)
}

/// Every entry of `m` times `s`. Scalar only.
#[inline]
#[must_use]
pub fn scale(m: Mat3, s: f32) -> Mat3 {
    scalar::scale(m, s)
}

/// Sum of the diagonal. Scalar only.
#[inline]
#[must_use]
pub fn trace(m: Mat3) -> f32 {
    scalar::trace(m)
}

/// Determinant. Scalar only.
#[inline]
#[must_use]
pub fn determinant(m: Mat3) -> f32 {
    scalar::determinant(m)
}


// ============================================================================
// Property-based tests with proptest
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn mat3_in(range: std::ops::Range<f32>) -> impl Strategy<Value = Mat3> {
        prop::array::uniform9(range).prop_map(|e| {
            Mat3::from_cols_array([[e[0], e[1], e[2]], [e[3], e[4], e[5]], [e[6], e[7], e[8]]])
        })
    }

    /// Per-entry bound: |dispatched - scalar| <= 1e-6 * Σ|terms|.
    fn assert_close(m1: Mat3, m2: Mat3, got: Mat3, want: Mat3) -> Result<(), TestCaseError> {
        for c in 0..3 {
            for r in 0..3 {
                let magnitude: f32 = (0..3).map(|k| (m1[k][r] * m2[c][k]).abs()).sum();
                let diff = (got[c][r] - want[c][r]).abs();
                prop_assert!(
                    diff <= 1e-6 * magnitude.max(f32::MIN_POSITIVE),
                    "entry [{}][{}]: dispatched {} vs scalar {}",
                    c,
                    r,
                    got[c][r],
                    want[c][r]
                );
            }
        }
        Ok(())
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(1000))]

        /// Dispatched multiply agrees with the scalar kernel on ordinary inputs
        #[test]
        fn prop_multiply_matches_scalar(a in mat3_in(-1e3..1e3), b in mat3_in(-1e3..1e3)) {
            assert_close(a, b, multiply(a, b), scalar::multiply(a, b))?;
        }

        /// Large magnitudes (products near 1e36, below f32::MAX)
        #[test]
        fn prop_multiply_matches_scalar_large(a in mat3_in(-1e18..1e18), b in mat3_in(-1e18..1e18)) {
            assert_close(a, b, multiply(a, b), scalar::multiply(a, b))?;
        }

        /// Near-zero magnitudes, including subnormal products
        #[test]
        fn prop_multiply_matches_scalar_tiny(a in mat3_in(-1e-20..1e-20), b in mat3_in(-1e-20..1e-20)) {
            let got = multiply(a, b);
            let want = scalar::multiply(a, b);
            for c in 0..3 {
                for r in 0..3 {
                    prop_assert!((got[c][r] - want[c][r]).abs() <= f32::MIN_POSITIVE);
                }
            }
        }
    }
}
