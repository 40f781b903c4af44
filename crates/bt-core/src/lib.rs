//! bt-core: shared foundation for the benchtools utilities.
//!
//! Contains:
//! - units (uom SI types + constructors, thermal resistance)
//! - numeric (Real + finite checks)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{CoreError, CoreResult, error_chain};
pub use numeric::*;
pub use units::*;
