//! rp-core: stable foundation for relaxpath.
//!
//! Contains:
//! - ids (dense solver indices)
//! - numeric (edge weights, path distances, saturating relaxation)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RpError, RpResult};
pub use ids::*;
pub use numeric::*;
