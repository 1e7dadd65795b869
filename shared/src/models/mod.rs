//! Domain models for grain grading

mod corn;
mod defects;
mod measurement;
mod request;
mod sample;
mod soybean;
mod tables;

pub use corn::*;
pub use defects::*;
pub use measurement::*;
pub use request::*;
pub use sample::*;
pub use soybean::*;
pub use tables::*;
