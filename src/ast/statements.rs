use std::slice::Iter;

use super::ast::{Expr, Stmt};

/// Block
///
/// A run of statements ended by the next control keyword or end of input.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    pub statements: Vec<Stmt>,
}

impl Block {
    pub fn new(statements: Vec<Stmt>) -> Self {
        Block { statements }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub target: String,
    pub value: Expr,
}

impl Assignment {
    pub fn new(target: String, value: Expr) -> Self {
        Assignment { target, value }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStatement {
    pub condition: Expr,
    pub then_block: Block,
    pub else_block: Option<Block>,
}

impl IfStatement {
    pub fn new(condition: Expr, then_block: Block, else_block: Option<Block>) -> Self {
        IfStatement {
            condition,
            then_block,
            else_block,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhileStatement {
    pub condition: Expr,
    pub body: Block,
}

impl WhileStatement {
    pub fn new(condition: Expr, body: Block) -> Self {
        WhileStatement { condition, body }
    }
}
