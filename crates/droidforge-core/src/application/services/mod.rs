//! Application services.

pub mod fragment_service;
pub mod generate_service;

pub use fragment_service::FragmentService;
pub use generate_service::GenerateService;
