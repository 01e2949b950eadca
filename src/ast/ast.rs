use std::{fmt::Display, slice::Iter};

use super::{
    expressions::{BinaryOperation, BooleanExpression, FunctionCall, IdentifierReference, NumberLiteral},
    statements::{Assignment, Block, IfStatement, WhileStatement},
};

/// Statement
///
/// Every statement the grammar can produce. A function call appears both
/// here and in `Expr`, with the same node type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Assignment(Assignment),
    If(IfStatement),
    While(WhileStatement),
    Call(FunctionCall),
}

/// Expression
///
/// Parenthesised sub-expressions have no node of their own; they collapse
/// into whichever expression they contain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Number(NumberLiteral),
    Identifier(IdentifierReference),
    Binary(BinaryOperation),
    Boolean(BooleanExpression),
    Call(FunctionCall),
}

impl From<Assignment> for Stmt {
    fn from(stmt: Assignment) -> Self {
        Stmt::Assignment(stmt)
    }
}

impl From<IfStatement> for Stmt {
    fn from(stmt: IfStatement) -> Self {
        Stmt::If(stmt)
    }
}

impl From<WhileStatement> for Stmt {
    fn from(stmt: WhileStatement) -> Self {
        Stmt::While(stmt)
    }
}

impl From<NumberLiteral> for Expr {
    fn from(expr: NumberLiteral) -> Self {
        Expr::Number(expr)
    }
}

impl From<IdentifierReference> for Expr {
    fn from(expr: IdentifierReference) -> Self {
        Expr::Identifier(expr)
    }
}

impl From<BinaryOperation> for Expr {
    fn from(expr: BinaryOperation) -> Self {
        Expr::Binary(expr)
    }
}

impl From<BooleanExpression> for Expr {
    fn from(expr: BooleanExpression) -> Self {
        Expr::Boolean(expr)
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Number(number) => write!(f, "{}", number.value),
            Expr::Identifier(identifier) => write!(f, "{}", identifier.name),
            Expr::Binary(binary) => {
                write!(f, "({} {} {})", binary.left, binary.operator, binary.right)
            }
            Expr::Boolean(boolean) => {
                write!(f, "({} {} {})", boolean.left, boolean.operator, boolean.right)
            }
            Expr::Call(call) => write!(f, "{}", call),
        }
    }
}

/// Writes a condition with no parentheses around its comparisons. Parentheses
/// may only hold arithmetic, and comparisons chain to the left, so the left
/// operand of a chain is written bare as well.
fn write_condition(f: &mut std::fmt::Formatter<'_>, condition: &Expr) -> std::fmt::Result {
    match condition {
        Expr::Boolean(boolean) => {
            write_condition(f, &boolean.left)?;
            write!(f, " {} {}", boolean.operator, boolean.right)
        }
        _ => write!(f, "{}", condition),
    }
}

impl Stmt {
    fn write_indented(&self, f: &mut std::fmt::Formatter<'_>, indent: usize) -> std::fmt::Result {
        let pad = "  ".repeat(indent);
        match self {
            Stmt::Assignment(assignment) => {
                writeln!(f, "{}{} = {}", pad, assignment.target, assignment.value)
            }
            Stmt::Call(call) => writeln!(f, "{}{}", pad, call),
            Stmt::If(if_stmt) => {
                write!(f, "{}if ", pad)?;
                write_condition(f, &if_stmt.condition)?;
                writeln!(f, " :")?;
                if_stmt.then_block.write_indented(f, indent + 1)?;
                if let Some(else_block) = &if_stmt.else_block {
                    writeln!(f, "{}else :", pad)?;
                    else_block.write_indented(f, indent + 1)?;
                }
                Ok(())
            }
            Stmt::While(while_stmt) => {
                write!(f, "{}while ", pad)?;
                write_condition(f, &while_stmt.condition)?;
                writeln!(f, " :")?;
                while_stmt.body.write_indented(f, indent + 1)
            }
        }
    }
}

impl Block {
    pub(crate) fn write_indented(&self, f: &mut std::fmt::Formatter<'_>, indent: usize) -> std::fmt::Result {
        for stmt in self.iter() {
            stmt.write_indented(f, indent)?;
        }
        Ok(())
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}

/// Program
///
/// The ordered top-level statements of one source unit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Program { statements }
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in self.iter() {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
