//! Command implementations

pub mod annotate;
pub mod append;
pub mod base;
pub mod batch;
pub mod extract;
pub mod init;
pub mod strip;
pub mod validators;

pub use annotate::AnnotateCommand;
pub use append::AppendCommand;
pub use base::{Command, CommandContext};
pub use extract::ExtractCommand;
pub use init::InitCommand;
pub use strip::StripCommand;
