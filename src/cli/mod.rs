//! CLI layer - Command-line interface

pub mod commands;
pub mod menu;
pub mod output;
pub mod shell;

pub use commands::{Cli, Commands};
pub use menu::MenuChoice;
pub use output::{format_contact_list, format_search_result};
pub use shell::Shell;
