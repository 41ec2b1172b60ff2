//! Integration tests for lexing and parsing

use tmplkit_foundation::ErrorKind;
use tmplkit_language::lexer::Lexer;
use tmplkit_language::token::TokenKind;
use tmplkit_language::{Ast, parse};

// =============================================================================
// Tokens
// =============================================================================

#[test]
fn tokenizes_a_filter() {
    let kinds: Vec<TokenKind> = Lexer::tokenize_all(r#"(and .one (eq .name "x"))"#)
        .into_iter()
        .map(|t| t.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::LParen,
            TokenKind::Identifier("and".into()),
            TokenKind::Field(vec!["one".into()]),
            TokenKind::LParen,
            TokenKind::Identifier("eq".into()),
            TokenKind::Field(vec!["name".into()]),
            TokenKind::String("x".into()),
            TokenKind::RParen,
            TokenKind::RParen,
            TokenKind::Eof,
        ]
    );
}

// =============================================================================
// Parsing
// =============================================================================

#[test]
fn bare_and_parenthesized_calls_agree() {
    let bare = parse("add 1 1").expect("parses");
    let wrapped = parse("(add 1 1)").expect("parses");
    assert_eq!(bare.to_string(), wrapped.to_string());
    assert_eq!(bare.call_name(), Some("add"));
}

#[test]
fn pipelines_parse_in_order() {
    let ast = parse(".title | english_title | slug").expect("parses");
    assert_eq!(ast.to_string(), "(.title | (english_title) | (slug))");
}

#[test]
fn collects_called_functions() {
    let ast = parse("(gt (int .cnt2014) 2)").expect("parses");
    let mut names = Vec::new();
    ast.for_each_call(&mut |name, _| names.push(name.to_string()));
    names.sort();
    assert_eq!(names, vec!["gt", "int"]);
    assert!(matches!(parse("(false)").expect("parses"), Ast::Bool(false, _)));
}

#[test]
fn parse_errors_report_position() {
    let err = parse("(gt 1\n  (int 2)").expect_err("unclosed");
    match err.kind {
        ErrorKind::Parse { line, column, .. } => assert_eq!((line, column), (1, 1)),
        other => panic!("expected parse error, got {other:?}"),
    }
    assert!(parse("1 2").is_err());
    assert!(parse(".a | .b").is_err());
}
