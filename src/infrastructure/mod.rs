//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod repository;
pub mod text_format;

pub use config::Config;
pub use repository::{ContactRepository, LoadOutcome, SaveOutcome, TextFileRepository};
