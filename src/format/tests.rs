use pretty_assertions::assert_eq;

use crate::{
    lexer::{lexer::tokenize, tokens::TokenType},
    lexers::nushell,
};

use super::formatter::{format, RawFormatter, TerminalFormatter};

fn render(source: &str, formatter: &dyn super::formatter::Formatter) -> String {
    let lexer = nushell::lexer().unwrap();
    let mut out = vec![];

    format(tokenize(&lexer, source), formatter, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn test_raw_formatter() {
    assert_eq!(
        render("let x = \"a\"\n", &RawFormatter),
        "Token.Keyword\t\"let\"\n\
         Token.Text.Whitespace\t\" \"\n\
         Token.Name\t\"x\"\n\
         Token.Text.Whitespace\t\" \"\n\
         Token.Operator\t\"=\"\n\
         Token.Text.Whitespace\t\" \"\n\
         Token.String.Double\t\"\\\"a\\\"\"\n\
         Token.Text.Whitespace\t\"\\n\"\n"
    );
}

#[test]
fn test_plain_terminal_formatter_is_lossless() {
    let source = "def f [] {\n  # nothing\n  @\n}\n";

    assert_eq!(render(source, &TerminalFormatter::plain()), source);
}

#[test]
fn test_terminal_formatter_colors_keywords() {
    let output = render("let x", &TerminalFormatter::default());

    assert_eq!(output, "\x1b[34mlet\x1b[39;49;00m x");
}

#[test]
fn test_terminal_style_falls_back_to_parent() {
    let formatter = TerminalFormatter::default();

    assert_eq!(formatter.style_for(TokenType::KeywordConstant), Some("34"));
    assert_eq!(formatter.style_for(TokenType::KeywordType), Some("36"));
    assert_eq!(formatter.style_for(TokenType::CommentSingle), Some("90"));
    assert_eq!(formatter.style_for(TokenType::Whitespace), None);

    let formatter = formatter.with_style(TokenType::KeywordConstant, "35");
    assert_eq!(formatter.style_for(TokenType::KeywordConstant), Some("35"));

    let formatter = formatter.with_style(TokenType::Keyword, "");
    assert_eq!(formatter.style_for(TokenType::Keyword), None);
}

#[test]
fn test_terminal_formatter_keeps_newlines_outside_colors() {
    let formatter = TerminalFormatter::plain().with_style(TokenType::String, "33");
    let output = render("\"a\nb\"", &formatter);

    assert_eq!(output, "\x1b[33m\"a\x1b[39;49;00m\n\x1b[33mb\"\x1b[39;49;00m");
}
