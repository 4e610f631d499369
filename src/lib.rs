//! contactbook - Terminal contact book
//!
//! Keeps name/phone/email records sorted by name and mirrors them to a flat
//! text file after every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::ContactBookError;
