use std::{env, fs::read_to_string, path::PathBuf, process::exit, time::Instant};

use minilang::{display_error, lexer::lexer::tokenize, parser::parser::parse};

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    let dump_tokens = args.iter().any(|arg| arg == "--tokens");
    let dump_tree = args.iter().any(|arg| arg == "--tree");
    let files: Vec<&String> = args.iter().filter(|arg| !arg.starts_with("--")).collect();

    if files.len() != 1 {
        eprintln!("Usage: minilang <file> [--tokens] [--tree]");
        exit(2);
    }

    let file_path = PathBuf::from(files[0]);
    let file_name = file_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| files[0].clone());

    let source = match read_to_string(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Failed to read {}: {}", file_path.display(), error);
            exit(2);
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source, &file_name);
            exit(1);
        }
    };

    println!("Tokenized {} tokens in {:?}", tokens.len(), start.elapsed());

    if dump_tokens {
        for token in &tokens {
            token.debug();
        }
    }

    let parse_start = Instant::now();
    let program = match parse(tokens) {
        Ok(program) => program,
        Err(error) => {
            display_error(&error, &source, &file_name);
            exit(1);
        }
    };

    println!("Parsed {} statements in {:?}", program.len(), parse_start.elapsed());
    println!("Total time: {:?}", start.elapsed());
    println!();

    if dump_tree {
        println!("{}", pretty_print(format!("{:?}", program)));
    } else {
        print!("{}", program);
    }
}

/// Indents a single-line `Debug` rendering of the tree.
fn pretty_print(string: String) -> String {
    let mut result = String::new();
    let mut indent: usize = 0;
    let mut ignore_next_space = false;

    for c in string.chars() {
        match c {
            '{' | '(' | '[' => {
                indent += 1;
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            '}' | ')' | ']' => {
                indent = indent.saturating_sub(1);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                result.push(c);
            }
            ',' => {
                result.push(c);
                result.push('\n');
                result.push_str(&"  ".repeat(indent));
                ignore_next_space = true;
            }
            ' ' if ignore_next_space => {
                ignore_next_space = false;
            }
            _ => {
                ignore_next_space = false;
                result.push(c);
            }
        }
    }

    result
}
