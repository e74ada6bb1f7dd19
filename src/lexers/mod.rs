//! Built-in rule tables and the registry used to pick one.
//!
//! Lexers are looked up either by alias (`nu`, `nushell`) or by matching a
//! file name against their glob patterns (`*.nu`).

use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{Error, ErrorImpl, RuleLocation},
    lexer::lexer::{Lexer, LexerOptions},
};

pub mod nushell;


/// Registration metadata. Only used to select a lexer, never by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerInfo {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub mimetypes: &'static [&'static str],
    pub url: &'static str,
    pub version_added: &'static str,
}

type Constructor = fn() -> Result<Lexer, Error>;

const LEXERS: &[(&LexerInfo, Constructor)] = &[(&nushell::INFO, nushell::lexer)];

lazy_static! {
    static ref FILENAME_PATTERNS: Vec<(Regex, usize)> = {
        let mut patterns = vec![];
        for (index, (info, _)) in LEXERS.iter().enumerate() {
            for glob in info.filenames {
                match glob_to_regex(glob) {
                    Ok(regex) => patterns.push((regex, index)),
                    Err(err) => debug!(%err, "skipping filename pattern"),
                }
            }
        }
        patterns
    };
}

pub fn all_lexers() -> impl Iterator<Item = &'static LexerInfo> {
    LEXERS.iter().map(|(info, _)| *info)
}

/// Finds a lexer by one of its aliases, ignoring case.
pub fn get_lexer_by_name(alias: &str, options: LexerOptions) -> Result<Lexer, Error> {
    let alias = alias.to_lowercase();

    for (info, constructor) in LEXERS {
        if info.aliases.contains(&alias.as_str()) {
            debug!(lexer = info.name, %alias, "selected lexer by alias");
            return Ok(constructor()?.with_options(options));
        }
    }

    Err(Error::new(
        ErrorImpl::UnknownLexer { name: alias },
        RuleLocation::null(),
    ))
}

/// Finds a lexer whose filename patterns match the final component of `path`.
pub fn get_lexer_for_filename(path: &Path, options: LexerOptions) -> Result<Lexer, Error> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    for (regex, index) in FILENAME_PATTERNS.iter() {
        if regex.is_match(&file_name) {
            let (info, constructor) = LEXERS[*index];
            debug!(lexer = info.name, file = %file_name, "selected lexer by filename");
            return Ok(constructor()?.with_options(options));
        }
    }

    Err(Error::new(
        ErrorImpl::UnknownLexer { name: file_name },
        RuleLocation::null(),
    ))
}

/// Translates a shell glob (`*`, `?`, `[...]`) into an anchored regex.
pub fn glob_to_regex(glob: &str) -> Result<Regex, Error> {
    let mut pattern = String::from("^");
    let mut chars = glob.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '*' => pattern.push_str(".*"),
            '?' => pattern.push('.'),
            '[' => {
                let mut class = String::new();
                let mut closed = false;

                if chars.peek() == Some(&'!') {
                    chars.next();
                    class.push('^');
                }

                for ch in chars.by_ref() {
                    if ch == ']' && !class.is_empty() && class != "^" {
                        closed = true;
                        break;
                    }
                    if matches!(ch, '\\' | '[' | ']' | '&' | '~') {
                        class.push('\\');
                    }
                    class.push(ch);
                }

                if !closed {
                    return Err(Error::new(
                        ErrorImpl::InvalidFilenamePattern {
                            pattern: glob.to_string(),
                            message: String::from("unterminated `[`"),
                        },
                        RuleLocation::null(),
                    ));
                }

                pattern.push('[');
                pattern.push_str(&class);
                pattern.push(']');
            }
            _ => pattern.push_str(&regex::escape(ch.encode_utf8(&mut [0; 4]))),
        }
    }

    pattern.push('$');

    Regex::new(&pattern).map_err(|err| {
        Error::new(
            ErrorImpl::InvalidFilenamePattern {
                pattern: glob.to_string(),
                message: err.to_string(),
            },
            RuleLocation::null(),
        )
    })
}
