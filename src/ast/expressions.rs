use std::fmt::Display;

use crate::lexer::tokens::TokenKind;

use super::ast::Expr;

// LITERALS

/// Number Literal
/// Represents a non-negative integer literal in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberLiteral {
    pub value: i64,
}

impl NumberLiteral {
    pub fn new(value: i64) -> Self {
        NumberLiteral { value }
    }
}

/// Identifier Reference
/// Represents a variable read in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierReference {
    pub name: String,
}

impl IdentifierReference {
    pub fn new(name: String) -> Self {
        IdentifierReference { name }
    }
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Plus => Some(BinaryOperator::Plus),
            TokenKind::Dash => Some(BinaryOperator::Minus),
            TokenKind::Star => Some(BinaryOperator::Multiply),
            TokenKind::Slash => Some(BinaryOperator::Divide),
            _ => None,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
        };
        write!(f, "{}", symbol)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonOperator {
    Equal,
    NotEqual,
    Less,
    Greater,
}

impl ComparisonOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Equals => Some(ComparisonOperator::Equal),
            TokenKind::NotEquals => Some(ComparisonOperator::NotEqual),
            TokenKind::Less => Some(ComparisonOperator::Less),
            TokenKind::Greater => Some(ComparisonOperator::Greater),
            _ => None,
        }
    }
}

impl Display for ComparisonOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let symbol = match self {
            ComparisonOperator::Equal => "==",
            ComparisonOperator::NotEqual => "!=",
            ComparisonOperator::Less => "<",
            ComparisonOperator::Greater => ">",
        };
        write!(f, "{}", symbol)
    }
}

// COMPOUND

/// Binary Operation
/// Arithmetic on two sub-expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOperation {
    pub left: Box<Expr>,
    pub operator: BinaryOperator,
    pub right: Box<Expr>,
}

impl BinaryOperation {
    pub fn new(left: Expr, operator: BinaryOperator, right: Expr) -> Self {
        BinaryOperation {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

/// Boolean Expression
/// A comparison between two sub-expressions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanExpression {
    pub left: Box<Expr>,
    pub operator: ComparisonOperator,
    pub right: Box<Expr>,
}

impl BooleanExpression {
    pub fn new(left: Expr, operator: ComparisonOperator, right: Expr) -> Self {
        BooleanExpression {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }
}

/// Function Call
/// Used both as an expression and as a statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionCall {
    pub name: String,
    pub arguments: Vec<Expr>,
}

impl FunctionCall {
    pub fn new(name: String, arguments: Vec<Expr>) -> Self {
        FunctionCall { name, arguments }
    }
}

impl Display for FunctionCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, argument) in self.arguments.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", argument)?;
        }
        write!(f, ")")
    }
}
