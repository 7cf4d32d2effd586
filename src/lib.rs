//! # cglm-mat3
//!
//! 3×3 column-major matrix kernels with compile-time SIMD/scalar dispatch.
//!
//! Every operation has a portable scalar kernel. Matrix multiplication also
//! has a vector kernel (SSE2 on x86/x86_64, NEON on aarch64) that is picked
//! when the build enables the matching target feature. Both kernels produce
//! the same results, including when the output overwrites an input.
//!
//! ## Quick Start
//!
//! ```rust
//! use cglm_mat3::prelude::*;
//!
//! let m = Mat3::from_cols_array([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
//!
//! assert_eq!(m * Vec3::ONE, Vec3::new(2.0, 3.0, 4.0));
//!
//! let mut sq = m;
//! sq *= sq;
//! assert_eq!(sq.cols[2].z, 16.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Mat3`] and [`Vec3`]
//!
//! Kernel selection is not a cargo feature; see [`kernels`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Three-component column vector.
pub mod vec3;

/// 3×3 column-major matrix.
pub mod mat3;

/// Scalar and accelerated kernels, selected at compile time.
pub mod kernels;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for conversions.
pub mod error;

pub use error::{Error, Result};
pub use kernels::{SimdBackend, ACTIVE_BACKEND};
pub use mat3::Mat3;
pub use vec3::Vec3;

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types for convenient imports.
///
/// ```rust
/// use cglm_mat3::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::kernels::{SimdBackend, ACTIVE_BACKEND};
    pub use crate::mat3::Mat3;
    pub use crate::vec3::Vec3;
}
