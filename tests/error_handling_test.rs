//! エラーハンドリングのテスト
//!
//! 解析エラーがどのように報告されるかを確認する。

use codespan_reporting::diagnostic::Severity;
use jformat::error::{DiagnosticError, ErrorCollector, JformatError, LexerError, ParserError};
use jformat::parse;
use pretty_assertions::assert_eq;

fn diagnostic_for(source: &str) -> DiagnosticError {
    let error = parse(source).expect_err("source should be rejected");
    DiagnosticError::new(error, 0)
}

#[test]
fn test_unknown_character_is_lexical() {
    let error = parse("class A{ # }").unwrap_err();
    assert!(matches!(
        error,
        JformatError::Lexer(LexerError::UnknownToken { ch: '#', .. })
    ));
    assert!(error.to_string().starts_with("lexical error: unknown token '#' at 1:10"));
}

#[test]
fn test_unterminated_comment_is_lexical() {
    assert!(matches!(
        parse("class A{} /* trailing"),
        Err(JformatError::Lexer(LexerError::UnterminatedComment { .. }))
    ));
}

#[test]
fn test_lexical_errors_win_over_syntax_errors() {
    // `}{` alone would be a syntax error, but the stray `$` is found first
    assert!(matches!(
        parse("class A}{ $"),
        Err(JformatError::Lexer(_))
    ));
}

#[test]
fn test_syntax_error_message() {
    let error = parse("class A}{").unwrap_err();
    assert_eq!(
        error.to_string(),
        "syntax error: expected '{' but '}' was found at 1:8"
    );
}

#[test]
fn test_unexpected_token_label() {
    let diagnostic = diagnostic_for("class A}{").to_diagnostic();

    assert_eq!(diagnostic.severity, Severity::Error);
    assert_eq!(diagnostic.labels.len(), 1);
    assert_eq!(diagnostic.labels[0].range, 7..8);
    assert_eq!(diagnostic.labels[0].file_id, 0);
}

#[test]
fn test_unknown_token_label() {
    let diagnostic = diagnostic_for("class A{ # }").to_diagnostic();
    assert_eq!(diagnostic.labels[0].range, 9..10);
    assert_eq!(diagnostic.labels[0].message, "this character starts no token");
}

#[test]
fn test_ambiguous_statement_label() {
    let source = "class A{ void f(){ counter; } }";
    let diagnostic = diagnostic_for(source).to_diagnostic();
    let range = diagnostic.labels[0].range.clone();
    assert_eq!(&source[range], "counter");
}

#[test]
fn test_too_few_tokens_points_at_end() {
    let source = "class A{ int x";
    let error = parse(source).unwrap_err();
    match &error {
        JformatError::Parser(e @ ParserError::TooFewTokens { .. }) => {
            assert_eq!(e.span().end, source.len());
        }
        other => panic!("unexpected error {:?}", other),
    }
    assert!(error.to_string().contains("expected any of"));
}

#[test]
fn test_io_error_has_no_label() {
    let diagnostic = DiagnosticError::new(JformatError::Io("missing.java: not found".into()), 3)
        .to_diagnostic();
    assert!(diagnostic.labels.is_empty());
    assert_eq!(diagnostic.message, "I/O error: missing.java: not found");
}

#[test]
fn test_error_collector() {
    let mut collector = ErrorCollector::new();
    assert!(!collector.has_errors());

    for (file_id, source) in ["class", "class A{}", "class A{ x; }"].iter().enumerate() {
        if let Err(e) = parse(source) {
            collector.add_error(e, file_id);
        }
    }

    assert!(collector.has_errors());
    assert_eq!(collector.error_count(), 2);
    let file_ids: Vec<usize> = collector.errors().iter().map(|e| e.file_id).collect();
    assert_eq!(file_ids, vec![0, 2]);
}
