use std::{collections::HashMap, io::Write};

use crate::lexer::tokens::{Token, TokenType};

pub trait Formatter {
    fn write_token(&self, token: &Token<'_>, out: &mut dyn Write) -> std::io::Result<()>;

    fn finish(&self, _out: &mut dyn Write) -> std::io::Result<()> {
        Ok(())
    }
}

/// Writes every token of `tokens` through `formatter`, then flushes `out`.
pub fn format<'s, I>(tokens: I, formatter: &dyn Formatter, out: &mut dyn Write) -> std::io::Result<()>
where
    I: IntoIterator<Item = Token<'s>>,
{
    for token in tokens {
        formatter.write_token(&token, out)?;
    }

    formatter.finish(out)?;
    out.flush()
}

/// One line per token: the dotted category, a tab, then the quoted text.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn write_token(&self, token: &Token<'_>, out: &mut dyn Write) -> std::io::Result<()> {
        writeln!(out, "Token.{}\t{:?}", token.kind, token.value)
    }
}

const RESET: &str = "\x1b[39;49;00m";

/// Colors tokens with ANSI SGR sequences.
///
/// A category without its own style uses the style of its nearest styled
/// ancestor, so `KeywordConstant` is drawn like `Keyword` unless overridden.
#[derive(Debug, Clone)]
pub struct TerminalFormatter {
    styles: HashMap<TokenType, String>,
}

impl Default for TerminalFormatter {
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert(TokenType::Comment, String::from("90"));
        styles.insert(TokenType::Keyword, String::from("34"));
        styles.insert(TokenType::KeywordType, String::from("36"));
        styles.insert(TokenType::NameFunction, String::from("32"));
        styles.insert(TokenType::String, String::from("33"));
        styles.insert(TokenType::Number, String::from("34"));
        styles.insert(TokenType::Operator, String::from("35"));
        styles.insert(TokenType::Error, String::from("91;4"));

        TerminalFormatter { styles }
    }
}

impl TerminalFormatter {
    /// A formatter with no styles at all; output equals input.
    pub fn plain() -> Self {
        TerminalFormatter {
            styles: HashMap::new(),
        }
    }

    pub fn with_style(mut self, kind: TokenType, sgr: &str) -> Self {
        if sgr.is_empty() {
            self.styles.remove(&kind);
        } else {
            self.styles.insert(kind, sgr.to_string());
        }
        self
    }

    pub fn style_for(&self, kind: TokenType) -> Option<&str> {
        let mut current = Some(kind);

        while let Some(kind) = current {
            if let Some(style) = self.styles.get(&kind) {
                return Some(style);
            }
            current = kind.parent();
        }

        None
    }
}

impl Formatter for TerminalFormatter {
    fn write_token(&self, token: &Token<'_>, out: &mut dyn Write) -> std::io::Result<()> {
        let Some(style) = self.style_for(token.kind) else {
            return out.write_all(token.value.as_bytes());
        };

        // Color each line on its own so a newline never sits inside a sequence.
        for line in token.value.split_inclusive('\n') {
            let (text, newline) = match line.strip_suffix('\n') {
                Some(text) => (text, "\n"),
                None => (line, ""),
            };

            if !text.is_empty() {
                write!(out, "\x1b[{}m{}{}", style, text, RESET)?;
            }
            out.write_all(newline.as_bytes())?;
        }

        Ok(())
    }
}
