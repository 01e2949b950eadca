use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Number,
    Identifier,

    OpenParen,
    CloseParen,

    Assignment, // =
    Equals,     // ==
    NotEquals,  // !=

    Less,
    Greater,

    Colon,
    Comma,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    If,
    Else,
    While,
}

impl TokenKind {
    /// Block terminators. Blocks have no closing delimiter and end at the
    /// next control keyword or at end of input.
    pub fn ends_block(&self) -> bool {
        matches!(
            self,
            TokenKind::EOF | TokenKind::Else | TokenKind::While | TokenKind::If
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Payload carried by a token.
///
/// Identifiers, keywords and operators carry their source text, numbers
/// carry the parsed integer and EOF carries nothing.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum TokenValue {
    Symbol(String),
    Number(i64),
    None,
}

impl TokenValue {
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            TokenValue::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            TokenValue::Number(number) => Some(*number),
            _ => None,
        }
    }
}

impl Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Symbol(symbol) => write!(f, "{}", symbol),
            TokenValue::Number(number) => write!(f, "{}", number),
            TokenValue::None => write!(f, ""),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: TokenValue,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::Identifier | TokenKind::Number => write!(f, "{} ({})", self.kind, self.value),
            _ => write!(f, "{} ()", self.kind),
        }
    }
}

impl Token {
    pub fn debug(&self) {
        println!("{:>4}..{:<4} {}", self.span.start.0, self.span.end.0, self);
    }
}
