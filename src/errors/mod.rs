//! Error types and error handling for the front end.
//!
//! This module defines the error types raised while tokenizing and parsing.
//! It includes:
//!
//! - An error structure carrying the character offset of the failure
//! - Lexical and parse error variants
//! - Error names and helpful suggestions for display

pub mod errors;

#[cfg(test)]
mod tests;
