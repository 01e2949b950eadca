//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorKind, ErrorTip};
use crate::lexer::tokens::{TokenKind, TokenValue};
use crate::Position;

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedToken { character: '@' },
        Position(10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedToken");
    assert_eq!(error.kind(), ErrorKind::Lexical);
}

#[test]
fn test_error_position() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: None,
            found: TokenKind::Colon,
            value: TokenValue::Symbol(":".to_string()),
        },
        Position(42),
    );

    assert_eq!(error.get_position().0, 42);
    assert!(error.is_parse());
    assert!(!error.is_lexical());
}

#[test]
fn test_number_parse_error_is_lexical() {
    let error = Error::new(
        ErrorImpl::NumberParseError {
            token: "99999999999999999999".to_string(),
        },
        Position(0),
    );

    assert!(error.is_lexical());
    assert!(matches!(error.get_tip(), ErrorTip::Suggestion(_)));
}

#[test]
fn test_unrecognised_token_has_no_tip() {
    let error = Error::new(ErrorImpl::UnrecognisedToken { character: '#' }, Position(3));

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_bare_bang_tip() {
    let error = Error::new(ErrorImpl::UnrecognisedToken { character: '!' }, Position(3));

    assert_eq!(error.get_tip().to_string(), "`!` is only valid as part of `!=`");
}

#[test]
fn test_expected_token_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: Some(TokenKind::Colon),
            found: TokenKind::Identifier,
            value: TokenValue::Symbol("y".to_string()),
        },
        Position(7),
    );

    assert_eq!(error.get_tip().to_string(), "Expected Colon, found Identifier");
}

#[test]
fn test_end_of_input_tip() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: None,
            found: TokenKind::EOF,
            value: TokenValue::None,
        },
        Position(4),
    );

    assert_eq!(error.get_tip().to_string(), "Unexpected end of input");
}

#[test]
fn test_error_display() {
    let error = Error::new(
        ErrorImpl::UnexpectedToken {
            expected: Some(TokenKind::CloseParen),
            found: TokenKind::Number,
            value: TokenValue::Number(3),
        },
        Position(5),
    );

    assert_eq!(
        error.to_string(),
        "unexpected token: expected CloseParen, found Number `3` at offset 5"
    );

    let error = Error::new(
        ErrorImpl::UnexpectedTokenDetailed {
            found: TokenKind::EOF,
            value: TokenValue::None,
            message: "expected a number, identifier or `(`".to_string(),
        },
        Position(4),
    );

    assert_eq!(
        error.to_string(),
        "unexpected token (expected a number, identifier or `(`): found EOF `` at offset 4"
    );
}

#[test]
fn test_error_is_std_error() {
    fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}

    let error = Error::new(ErrorImpl::UnrecognisedToken { character: '@' }, Position(0));
    assert_std_error(&error);
}
