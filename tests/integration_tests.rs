//! Integration tests for the front end.
//!
//! These tests run complete programs through tokenization and parsing and
//! check the resulting tree and the error surface.

use minilang::{
    ast::{
        ast::{Expr, Program, Stmt},
        expressions::{BinaryOperator, ComparisonOperator},
    },
    errors::errors::{Error, ErrorKind},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::parse,
};

fn compile_front(source: &str) -> Result<Program, Error> {
    parse(tokenize(source)?)
}

#[test]
fn test_parse_countdown_program() {
    let source = "\
n = 10
total = 0
while n > 0 :
    total = total + n * 2
    n = n - 1
";
    let program = compile_front(source).unwrap();

    assert_eq!(program.len(), 3);

    let Stmt::While(while_stmt) = &program.statements[2] else {
        panic!("expected a while loop, got {:?}", program.statements[2]);
    };
    let Expr::Boolean(condition) = &while_stmt.condition else {
        panic!("expected a comparison");
    };
    assert_eq!(condition.operator, ComparisonOperator::Greater);
    assert_eq!(while_stmt.body.len(), 2);

    let Stmt::Assignment(assignment) = &while_stmt.body.statements[0] else {
        panic!("expected an assignment");
    };
    assert_eq!(assignment.target, "total");
    let Expr::Binary(sum) = &assignment.value else {
        panic!("expected a binary operation");
    };
    assert_eq!(sum.operator, BinaryOperator::Plus);
    assert_eq!(sum.right.to_string(), "(n * 2)");
}

#[test]
fn test_parse_branching_program() {
    let source = "\
if score > 90 :
    grade = 1
    report(score, grade)
else :
    grade = 2
";
    let program = compile_front(source).unwrap();

    assert_eq!(program.len(), 1);
    let Stmt::If(if_stmt) = &program.statements[0] else {
        panic!("expected an if statement");
    };
    assert_eq!(if_stmt.then_block.len(), 2);
    assert_eq!(if_stmt.else_block.as_ref().map(|block| block.len()), Some(1));
}

#[test]
fn test_program_display() {
    let program = compile_front("x = 1 + 2 * y if x == 3 : f(x) else : g()").unwrap();

    assert_eq!(
        program.to_string(),
        "x = (1 + (2 * y))\nif x == 3 :\n  f(x)\nelse :\n  g()\n"
    );
}

#[test]
fn test_display_output_parses_back() {
    let program = compile_front("while a < 3 : a = (a + 1) * 2 log(a)").unwrap();
    let reparsed = compile_front(&program.to_string()).unwrap();

    assert_eq!(program, reparsed);

    let chained = compile_front("if a < b == c : d = 1 while x > (y - 1) != z : x = x - 1").unwrap();
    let printed = chained.to_string();
    assert_eq!(
        printed,
        "if a < b == c :\n  d = 1\nwhile x > (y - 1) != z :\n  x = (x - 1)\n"
    );
    assert_eq!(compile_front(&printed).unwrap(), chained);
}

#[test]
fn test_lexical_error_surfaces() {
    let error = compile_front("x = 1\ny = @").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_position().0, 10);
}

#[test]
fn test_parse_error_surfaces() {
    let error = compile_front("x = ").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Parse);
}

#[test]
fn test_values_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}

    assert_send_sync::<Token>();
    assert_send_sync::<Program>();
    assert_send_sync::<Expr>();
    assert_send_sync::<Error>();
}

#[test]
fn test_parallel_parses_are_independent() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let source = format!("v{} = {} * {}", i, i, i + 1);
                compile_front(&source).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let program = handle.join().unwrap();
        let Stmt::Assignment(assignment) = &program.statements[0] else {
            panic!("expected an assignment");
        };
        assert_eq!(assignment.target, format!("v{}", i));
        assert_eq!(assignment.value.to_string(), format!("({} * {})", i, i + 1));
    }
}
