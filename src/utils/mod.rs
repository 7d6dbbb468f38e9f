//! Utility modules for common functionality

pub mod filesystem;
pub mod samples;
pub mod validators;

// Re-export commonly used functions
pub use filesystem::ensure_directory_exists;
pub use samples::{list_sample_files, sample_file_path, sample_id_from_path};
