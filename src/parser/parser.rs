//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the Parser struct and the parsing entry points.
//! The parser is a plain recursive descent over the token stream with a
//! single token of lookahead; each grammar rule is one function in either
//! `stmt` (statements and control flow) or `expr` (expressions and
//! operator precedence).

use crate::{
    ast::ast::{Expr, Program},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenValue},
    Position, Span, MK_TOKEN,
};

use super::{expr::parse_expr, stmt::parse_program};

/// The parser structure that maintains parsing state.
///
/// Holds the token stream for one source unit and tracks the current
/// position in it. The stream always ends in an EOF token and the position
/// never moves past it.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the current (next unconsumed) token
    pos: usize,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// An EOF token is appended if `tokens` does not already end with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let end = tokens
                .last()
                .map(|token| token.span.end)
                .unwrap_or_else(Position::null);
            tokens.push(MK_TOKEN!(TokenKind::EOF, TokenValue::None, Span { start: end, end }));
        }

        Parser { tokens, pos: 0 }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the consumed one.
    ///
    /// At EOF this is a no-op that keeps returning the EOF token.
    pub fn advance(&mut self) -> &Token {
        let consumed = self.pos;
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        &self.tokens[consumed]
    }

    /// Returns the kind of the token after the current one, if any.
    ///
    /// Never consumes and never exposes the token's value.
    pub fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.pos + 1).map(|token| token.kind)
    }

    /// Consumes the current token if it has the given kind.
    ///
    /// # Returns
    ///
    /// Returns Ok(Token) if the current token matches, otherwise an
    /// `UnexpectedToken` error naming the expected kind.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            return Ok(self.advance().clone());
        }

        Err(self.unexpected(Some(expected_kind)))
    }

    /// Builds an error naming the current token.
    pub fn unexpected(&self, expected: Option<TokenKind>) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedToken {
                expected,
                found: token.kind,
                value: token.value.clone(),
            },
            token.span.start,
        )
    }

    /// Like `unexpected`, with a message describing what was wanted instead.
    pub fn unexpected_detailed(&self, message: &str) -> Error {
        let token = self.current_token();
        Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                found: token.kind,
                value: token.value.clone(),
                message: String::from(message),
            },
            token.span.start,
        )
    }

    /// Checks if there are more tokens to parse.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }
}

/// Parses a stream of tokens into a program.
///
/// This is the main entry point for parsing. Parsing is all or nothing: the
/// first grammar violation is returned and no partial tree is produced.
///
/// Recursion depth follows the nesting depth of the input and is not
/// capped, so pathologically deep parenthesisation can exhaust the stack.
pub fn parse(tokens: Vec<Token>) -> Result<Program, Error> {
    let mut parser = Parser::new(tokens);
    parse_program(&mut parser)
}

/// Parses a single arithmetic expression that must span the whole stream.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expr, Error> {
    let mut parser = Parser::new(tokens);
    let expr = parse_expr(&mut parser)?;
    parser.expect(TokenKind::EOF)?;
    Ok(expr)
}
