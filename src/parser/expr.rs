use crate::{
    ast::{
        ast::Expr,
        expressions::{
            BinaryOperation, BinaryOperator, BooleanExpression, ComparisonOperator, FunctionCall,
            IdentifierReference, NumberLiteral,
        },
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// `term ((== | != | < | >) term)*`
///
/// The operands are terms, not full expressions, so `a + 1 < b` does not
/// parse as a condition.
pub fn parse_boolean_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    while let Some(operator) = ComparisonOperator::from_token_kind(parser.current_token_kind()) {
        parser.advance();
        let right = parse_term(parser)?;
        left = BooleanExpression::new(left, operator, right).into();
    }

    Ok(left)
}

/// `term ((+ | -) term)*`
pub fn parse_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_term(parser)?;

    while let Some(operator) = additive_operator(parser.current_token_kind()) {
        parser.advance();
        let right = parse_term(parser)?;
        left = BinaryOperation::new(left, operator, right).into();
    }

    Ok(left)
}

/// `factor ((* | /) factor)*`
pub fn parse_term(parser: &mut Parser) -> Result<Expr, Error> {
    let mut left = parse_factor(parser)?;

    while let Some(operator) = multiplicative_operator(parser.current_token_kind()) {
        parser.advance();
        let right = parse_factor(parser)?;
        left = BinaryOperation::new(left, operator, right).into();
    }

    Ok(left)
}

fn additive_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus | TokenKind::Dash => BinaryOperator::from_token_kind(kind),
        _ => None,
    }
}

fn multiplicative_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Star | TokenKind::Slash => BinaryOperator::from_token_kind(kind),
        _ => None,
    }
}

/// A number, a variable, a call or a parenthesised expression.
pub fn parse_factor(parser: &mut Parser) -> Result<Expr, Error> {
    match parser.current_token_kind() {
        TokenKind::Number => {
            let Some(value) = parser.current_token().value.as_number() else {
                return Err(parser.unexpected_detailed("number token without an integer value"));
            };
            parser.advance();
            Ok(NumberLiteral::new(value).into())
        }
        TokenKind::Identifier if parser.peek() == Some(TokenKind::OpenParen) => {
            Ok(Expr::Call(parse_function_call(parser)?))
        }
        TokenKind::Identifier => {
            let name = parser.advance().value.to_string();
            Ok(IdentifierReference::new(name).into())
        }
        TokenKind::OpenParen => {
            parser.advance();
            let expr = parse_expr(parser)?;
            parser.expect(TokenKind::CloseParen)?;
            Ok(expr)
        }
        _ => Err(parser.unexpected_detailed("expected a number, identifier or `(`")),
    }
}

/// `IDENTIFIER ( arg-list )`
pub fn parse_function_call(parser: &mut Parser) -> Result<FunctionCall, Error> {
    let name = parser.expect(TokenKind::Identifier)?.value.to_string();
    parser.expect(TokenKind::OpenParen)?;
    let arguments = parse_arg_list(parser)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(FunctionCall::new(name, arguments))
}

/// Zero or more comma separated expressions, empty only when `)` follows
/// immediately.
pub fn parse_arg_list(parser: &mut Parser) -> Result<Vec<Expr>, Error> {
    let mut arguments = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        arguments.push(parse_expr(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            arguments.push(parse_expr(parser)?);
        }
    }

    Ok(arguments)
}
