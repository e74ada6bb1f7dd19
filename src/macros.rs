//! Utility macros for writing lexers.
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_RULE!` - Creates a rule table entry
//!
//! These macros keep rule tables readable as plain data.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenType
/// * `$value` - The slice of the source the token covers
/// * `$span` - The byte span of that slice
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenType::NumberInteger, "42", Span { start: 0, end: 2 });
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $value:expr, $span:expr) => {
        $crate::lexer::tokens::Token {
            kind: $kind,
            value: $value,
            span: $span,
        }
    };
}

/// Creates an `Entry::Rule` for a rule table.
///
/// The second argument is either a single `TokenType`, or
/// `bygroups(...)` with one `TokenType` per capture group. An optional third
/// argument is the `NextState` to apply after the match.
///
/// # Example
///
/// ```ignore
/// MK_RULE!(r"#.*$", TokenType::CommentSingle)
/// MK_RULE!(r"(def)(\s+)(\w+)", bygroups(TokenType::Keyword, TokenType::Whitespace, TokenType::NameFunction))
/// MK_RULE!(r#"""#, TokenType::StringDouble, NextState::Push("string".into()))
/// ```
#[macro_export]
macro_rules! MK_RULE {
    (@next) => {
        None
    };
    (@next $next:expr) => {
        Some($next)
    };
    ($pattern:expr, bygroups($($kind:expr),+ $(,)?) $(, $next:expr)?) => {
        $crate::lexer::rules::Entry::Rule($crate::lexer::rules::RuleDef {
            pattern: String::from($pattern),
            action: $crate::lexer::rules::Action::ByGroups(vec![$($kind),+]),
            next: $crate::MK_RULE!(@next $($next)?),
        })
    };
    ($pattern:expr, $kind:expr $(, $next:expr)?) => {
        $crate::lexer::rules::Entry::Rule($crate::lexer::rules::RuleDef {
            pattern: String::from($pattern),
            action: $crate::lexer::rules::Action::Token($kind),
            next: $crate::MK_RULE!(@next $($next)?),
        })
    };
}
