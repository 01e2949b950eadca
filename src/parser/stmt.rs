use crate::{
    ast::{
        ast::{Program, Stmt},
        statements::{Assignment, Block, IfStatement, WhileStatement},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::expr::{parse_boolean_expr, parse_expr, parse_function_call},
};

use super::parser::Parser;

pub fn parse_program(parser: &mut Parser) -> Result<Program, Error> {
    let mut statements = vec![];

    while parser.has_tokens() {
        statements.push(parse_stmt(parser)?);
    }

    Ok(Program::new(statements))
}

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    match parser.current_token_kind() {
        TokenKind::Identifier => match parser.peek() {
            Some(TokenKind::Assignment) => parse_assignment_stmt(parser),
            Some(TokenKind::OpenParen) => Ok(Stmt::Call(parse_function_call(parser)?)),
            _ => Err(parser.unexpected_detailed("expected `=` or `(` after identifier")),
        },
        TokenKind::If => parse_if_stmt(parser),
        TokenKind::While => parse_while_stmt(parser),
        _ => Err(parser.unexpected(None)),
    }
}

pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let target = parser.expect(TokenKind::Identifier)?.value.to_string();
    parser.expect(TokenKind::Assignment)?;
    let value = parse_expr(parser)?;

    Ok(Assignment::new(target, value).into())
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::If)?;

    let condition = parse_boolean_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let then_block = parse_block(parser)?;

    let else_block = if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parser.expect(TokenKind::Colon)?;
        Some(parse_block(parser)?)
    } else {
        None
    };

    Ok(IfStatement::new(condition, then_block, else_block).into())
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.expect(TokenKind::While)?;

    let condition = parse_boolean_expr(parser)?;
    parser.expect(TokenKind::Colon)?;
    let body = parse_block(parser)?;

    Ok(WhileStatement::new(condition, body).into())
}

/// Blocks have no closing delimiter. They run until the next `if`, `else`,
/// `while` or end of input, so a block never contains an `if` or `while`.
/// Those always start a statement at the enclosing level.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    let mut statements = Vec::new();

    while !parser.current_token_kind().ends_block() {
        statements.push(parse_stmt(parser)?);
    }

    Ok(Block::new(statements))
}
