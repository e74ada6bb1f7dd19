//! Integration tests for end-to-end highlighting.
//!
//! These tests go through the public API the way the command line front end
//! does: pick a lexer from the registry, preprocess, tokenize, and format.

use std::path::Path;

use nulex::{
    format::formatter::{format, RawFormatter, TerminalFormatter},
    lexer::{
        lexer::{Lexer, LexerOptions},
        rules::{Entry, NextState},
        tokens::TokenType,
    },
    lexers::{get_lexer_by_name, get_lexer_for_filename},
    MK_RULE,
};

const SCRIPT: &str = r#"# list big files
def big-files [dir: string] {
    ls $dir | where size > 10mb | sort-by size
}

let limit = 3.5
polars group-by "name" 'x'
"#;

#[test]
fn test_highlight_script_round_trips() {
    let lexer = get_lexer_for_filename(Path::new("tools/big.nu"), LexerOptions::default()).unwrap();
    let text = lexer.preprocess(SCRIPT);

    let rebuilt: String = lexer.tokenize(&text).map(|token| token.value).collect();
    assert_eq!(rebuilt, text);
}

#[test]
fn test_highlight_script_categories() {
    let lexer = get_lexer_by_name("nu", LexerOptions::default()).unwrap();
    let tokens: Vec<_> = lexer
        .tokenize(SCRIPT)
        .filter(|token| token.kind != TokenType::Whitespace)
        .map(|token| (token.kind, token.value))
        .collect();

    assert_eq!(tokens[0], (TokenType::CommentSingle, "# list big files"));
    assert_eq!(tokens[1], (TokenType::Keyword, "def"));
    assert_eq!(tokens[2], (TokenType::NameFunction, "big"));
    assert_eq!(tokens[3], (TokenType::Operator, "-"));
    assert_eq!(tokens[4], (TokenType::Name, "files"));

    assert!(tokens.contains(&(TokenType::KeywordType, "string")));
    assert!(tokens.contains(&(TokenType::Keyword, "sort-by")));
    assert!(tokens.contains(&(TokenType::NumberFloat, "3.5")));
    assert!(tokens.contains(&(TokenType::Keyword, "polars group-by")));
    assert!(tokens.contains(&(TokenType::StringDouble, "\"name\"")));
    assert!(tokens.contains(&(TokenType::StringSingle, "'x'")));
    assert!(tokens.contains(&(TokenType::Error, "$")));
}

#[test]
fn test_raw_output_lists_every_token() {
    let lexer = get_lexer_by_name("nushell", LexerOptions::default()).unwrap();
    let source = "let x = 1\n";
    let mut out = vec![];

    format(lexer.tokenize(source), &RawFormatter, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(output.lines().count(), lexer.tokenize(source).count());
    assert!(output.starts_with("Token.Keyword\t\"let\"\n"));
    assert!(output.ends_with("Token.Number.Integer\t\"1\"\nToken.Text.Whitespace\t\"\\n\"\n"));
}

#[test]
fn test_terminal_output_without_styles_is_input() {
    let lexer = get_lexer_by_name("nu", LexerOptions::default()).unwrap();
    let mut out = vec![];

    format(lexer.tokenize(SCRIPT), &TerminalFormatter::plain(), &mut out).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), SCRIPT);
}

#[test]
fn test_custom_multi_state_lexer() {
    let interpolation: Vec<Entry> = vec![
        MK_RULE!(r"\)", TokenType::Punctuation, NextState::Pop),
        MK_RULE!(r"\w+", TokenType::Name),
    ];
    let string: Vec<Entry> = vec![
        MK_RULE!(r"\(", TokenType::Punctuation, NextState::Push("interpolation".into())),
        MK_RULE!(r#"[^"(]+"#, TokenType::StringDouble),
        MK_RULE!("\"", TokenType::StringDouble, NextState::Pop),
    ];
    let root: Vec<Entry> = vec![
        MK_RULE!(r#"\$""#, TokenType::StringDouble, NextState::Push("string".into())),
        MK_RULE!(r"\s+", TokenType::Whitespace),
    ];

    let lexer = Lexer::new(
        vec![("root", root), ("string", string), ("interpolation", interpolation)],
        "root",
    )
    .unwrap();

    let tokens: Vec<_> = lexer
        .tokenize(r#"$"hi (name)!""#)
        .map(|token| (token.kind, token.value))
        .collect();

    assert_eq!(
        tokens,
        vec![
            (TokenType::StringDouble, "$\""),
            (TokenType::StringDouble, "hi "),
            (TokenType::Punctuation, "("),
            (TokenType::Name, "name"),
            (TokenType::Punctuation, ")"),
            (TokenType::StringDouble, "!"),
            (TokenType::StringDouble, "\""),
        ]
    );
}
