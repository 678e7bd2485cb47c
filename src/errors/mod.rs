//! Error types and error handling for the front end.
//!
//! This module defines the errors a parse can end with. It includes:
//!
//! - Error structures with source position information
//! - Lexical and grammar error variants
//! - Error formatting and display functionality
//! - Helpful error messages and suggestions

pub mod errors;

#[cfg(test)]
mod tests;
