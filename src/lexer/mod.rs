//! Lexical analysis module for the front end.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source text using anchored regex patterns
//! - Recognition of keywords, identifiers, integers and operators
//! - Character offsets on every token for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
