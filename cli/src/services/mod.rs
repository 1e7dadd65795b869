//! Service layer for the grain grader

pub mod grading;

pub use grading::GradingService;
