use std::fmt::Display;

use thiserror::Error;

use crate::{
    lexer::tokens::{TokenKind, TokenValue},
    Position,
};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{internal_error} at offset {position}")]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// The phase an error was raised in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Lexical,
    Parse,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } | ErrorImpl::NumberParseError { .. } => {
                ErrorKind::Lexical
            }
            ErrorImpl::UnexpectedToken { .. } | ErrorImpl::UnexpectedTokenDetailed { .. } => {
                ErrorKind::Parse
            }
        }
    }

    pub fn is_lexical(&self) -> bool {
        self.kind() == ErrorKind::Lexical
    }

    pub fn is_parse(&self) -> bool {
        self.kind() == ErrorKind::Parse
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { .. } => "UnrecognisedToken",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnrecognisedToken { character: '!' } => {
                ErrorTip::Suggestion(String::from("`!` is only valid as part of `!=`"))
            }
            ErrorImpl::UnrecognisedToken { .. } => ErrorTip::None,
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::UnexpectedToken {
                expected: Some(expected),
                found,
                ..
            } => ErrorTip::Suggestion(format!("Expected {}, found {}", expected, found)),
            ErrorImpl::UnexpectedToken {
                expected: None,
                found: TokenKind::EOF,
                ..
            } => ErrorTip::Suggestion(String::from("Unexpected end of input")),
            ErrorImpl::UnexpectedToken {
                expected: None,
                found,
                value,
            } => ErrorTip::Suggestion(format!("Unexpected token: {} `{}`", found, value)),
            ErrorImpl::UnexpectedTokenDetailed {
                found,
                value,
                message,
            } => ErrorTip::Suggestion(format!("Unexpected token: {} `{}`, {}", found, value, message)),
        }
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

fn expected_clause(expected: &Option<TokenKind>) -> String {
    match expected {
        Some(kind) => format!("expected {}, ", kind),
        None => String::new(),
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unrecognised character: {character:?}")]
    UnrecognisedToken { character: char },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("unexpected token: {}found {found} `{value}`", expected_clause(.expected))]
    UnexpectedToken {
        expected: Option<TokenKind>,
        found: TokenKind,
        value: TokenValue,
    },
    #[error("unexpected token ({message}): found {found} `{value}`")]
    UnexpectedTokenDetailed {
        found: TokenKind,
        value: TokenValue,
        message: String,
    },
}
