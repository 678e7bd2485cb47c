//! Lexical analysis module.
//!
//! This module contains the scanner that converts a character stream
//! into tokens for the parser, one token per request. It handles:
//!
//! - Whitespace skipping
//! - Recognition of keywords, identifiers, integer literals and punctuation
//! - Single-character pushback at the end of digit and letter runs
//! - Token position tracking for error reporting

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
