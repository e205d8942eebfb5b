//! Template rendering adapters.

pub mod strict;

pub use strict::StrictRenderer;
