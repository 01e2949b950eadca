//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms a
//! stream of tokens into a program. Operator precedence comes from the
//! layering of the grammar rules rather than a precedence table:
//!
//! - Statement parsing (assignments, calls, `if`/`else`, `while`, blocks)
//! - Expression parsing (comparisons, `+`/`-`, `*`/`/`, factors, calls)
//!
//! Statement dispatch uses one token of lookahead to tell an assignment
//! from a call; nothing is ever backtracked.

pub mod expr;
pub mod parser;
pub mod stmt;
