//! Grain grader - command line surface for the grading core
//!
//! Loads threshold tables from layered configuration, reads grading requests
//! and reports type, class, group and weight discounts.

pub mod config;
pub mod error;
pub mod services;

pub use config::Config;
pub use error::{AppError, AppResult};
pub use services::GradingService;
