//! Application layer: orchestration over the domain via ports.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{FragmentService, GenerateService};
