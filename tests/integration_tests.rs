//! Integration tests for end-to-end scanning.
//!
//! These tests drive the public API the way a parser would: scan whole
//! programs, consume the token stream and inspect the reported errors.

use lexer::lexer::{
    lexer::{tokenize, Lexer},
    tokens::{Token, TokenKind, TokenValue},
};
use std::thread;

const PROGRAM: &str = "
[25/(3*40) + {300-20} -16.5]
{(300-250)<(400-500)}
20 & 30 | 50
# This is a comment
";

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|token| token.kind).collect()
}

#[test]
fn test_mixed_expression() {
    let (tokens, errors) = tokenize("25/(3*40) + {300-20} -16.5");

    assert!(errors.is_empty(), "Expression should scan without errors");
    assert_eq!(
        kinds(&tokens),
        vec![
            TokenKind::Integer,
            TokenKind::Divide,
            TokenKind::LParen,
            TokenKind::Integer,
            TokenKind::Multiply,
            TokenKind::Integer,
            TokenKind::RParen,
            TokenKind::Plus,
            TokenKind::BlockStart,
            TokenKind::Integer,
            TokenKind::Minus,
            TokenKind::Integer,
            TokenKind::BlockEnd,
            TokenKind::Minus,
            TokenKind::Float,
        ]
    );

    let values = tokens
        .iter()
        .filter(|token| token.is_literal())
        .map(|token| token.value.clone())
        .collect::<Vec<TokenValue>>();
    assert_eq!(
        values,
        vec![
            TokenValue::Integer(25),
            TokenValue::Integer(3),
            TokenValue::Integer(40),
            TokenValue::Integer(300),
            TokenValue::Integer(20),
            TokenValue::Float(16.5),
        ]
    );
}

#[test]
fn test_sample_program() {
    let (tokens, errors) = tokenize(PROGRAM);

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 36);

    assert_eq!(tokens[0].kind, TokenKind::LBracket);
    assert_eq!(tokens[0].line, 2);
    assert_eq!(tokens[16].kind, TokenKind::RBracket);

    assert_eq!(tokens[17].kind, TokenKind::BlockStart);
    assert_eq!(tokens[17].line, 3);
    assert_eq!(tokens[23].kind, TokenKind::LessThan);

    let last = tokens.last().unwrap();
    assert_eq!(last.kind, TokenKind::Comment);
    assert_eq!(last.value, TokenValue::Text("# This is a comment".to_string()));
    assert_eq!(last.line, 5);
}

#[test]
fn test_lines_never_decrease() {
    let lines = Lexer::new(PROGRAM)
        .map(|scanned| scanned.unwrap().line)
        .collect::<Vec<u32>>();

    assert!(lines.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_final_line_count() {
    let mut lexer = Lexer::new(PROGRAM);
    lexer.by_ref().for_each(drop);

    assert_eq!(lexer.line(), 6);
    assert!(lexer.at_eof());
}

#[test]
fn test_recovery_keeps_order() {
    let scanned = Lexer::new("1 @ 2\n$ 3").collect::<Vec<_>>();

    let summary = scanned
        .iter()
        .map(|item| match item {
            Ok(token) => format!("{}", token.kind),
            Err(error) => format!("!{}", error.illegal_character().unwrap()),
        })
        .collect::<Vec<String>>();
    assert_eq!(summary, vec!["Integer", "!@", "Integer", "!$", "Integer"]);
}

#[test]
fn test_scanning_is_repeatable() {
    let source = "1.5 <= {x} # note\n!= 7";

    assert_eq!(Lexer::new(source).collect::<Vec<_>>(), Lexer::new(source).collect::<Vec<_>>());
}

#[test]
fn test_independent_scanners_across_threads() {
    let sources = vec!["1 + 2", "3.5 * {4}", "# comment\n5 @ 6"];

    let handles = sources
        .into_iter()
        .map(|source| thread::spawn(move || tokenize(source)))
        .collect::<Vec<_>>();

    let results = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .collect::<Vec<_>>();

    assert_eq!(results[0].0.len(), 3);
    assert_eq!(results[1].0.len(), 5);
    assert_eq!(results[2].0.len(), 3);
    assert_eq!(results[2].1.len(), 1);
    assert_eq!(results[2], tokenize("# comment\n5 @ 6"));
}
