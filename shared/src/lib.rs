//! Grain grading core
//!
//! Computes weight discounts and assigns type, class and (for corn) group to
//! corn and soybean samples, following the official threshold tables. Every
//! operation is a pure computation over validated values.

pub mod error;
pub mod models;
pub mod types;
pub mod validation;

pub use error::*;
pub use models::*;
pub use types::*;
pub use validation::*;
