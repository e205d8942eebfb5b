//! Archive assembly adapters.

pub mod zip;

pub use zip::ZipArchiver;
