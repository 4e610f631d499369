//! Application layer - Use cases and orchestration

pub mod contact_book;

pub use contact_book::ContactBook;
