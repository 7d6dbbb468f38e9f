//! Configuration management module

pub mod loader;
pub mod validation;

pub use loader::{AnnotateConfig, BatchConfig, Config, ExtractConfig};
pub use validation::ConfigValidator;
