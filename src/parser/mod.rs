//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that turns the scanner's
//! tokens into a [`Program`](crate::ast::statements::Program). It handles:
//!
//! - Declarations and the declaration table
//! - Statement parsing (`print`, `set`, `if`, `calc`)
//! - Right-nested `+` chains
//! - First-error-wins reporting, with no recovery
//!
//! One token of lookahead is kept at all times; no production backtracks.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod symbols;
