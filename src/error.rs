//! Error types for contactbook

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the contact book
#[derive(Debug, Error)]
pub enum ContactBookError {
    #[error("Contact not found: {0}")]
    NotFound(String),

    #[error("Cannot open {} for writing: {source}", path.display())]
    FileUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ContactBookError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ContactBookError::NotFound(_) => 3,
            ContactBookError::Config(_) | ContactBookError::TomlDeserialize(_) => 2,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ContactBookError::NotFound(name) => {
                format!(
                    "No contact named '{}'\n\n\
                    Suggestions:\n\
                    • Names are matched exactly and case-sensitively\n\
                    • Use 'contactbook list' to see stored names",
                    name
                )
            }
            ContactBookError::FileUnwritable { path, .. } => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the directory {} exists\n\
                    • Check write permissions on the contacts file\n\
                    • Point to another file with --file or CONTACTBOOK_FILE",
                    self,
                    path.parent()
                        .map(|p| p.display().to_string())
                        .unwrap_or_else(|| ".".to_string())
                )
            }
            ContactBookError::Config(_) | ContactBookError::TomlDeserialize(_) => {
                format!(
                    "{}\n\n\
                    Expected format (contactbook.toml):\n\
                    data_file = \"contacts.txt\"",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ContactBookError
pub type Result<T> = std::result::Result<T, ContactBookError>;
