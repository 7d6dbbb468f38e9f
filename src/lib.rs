//! sample-meta - reshape tab-separated sample metadata files

pub mod commands;
pub mod config;
pub mod constants;
pub mod metadata;
pub mod tags;
pub mod tsv;
pub mod utils;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Command, CommandContext};
pub use config::Config;
pub use metadata::{CancerStatus, MetadataRow, MetadataTable};
pub use tags::{TagList, TagLookupError};
