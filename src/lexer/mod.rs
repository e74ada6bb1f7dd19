//! The regex-table tokenizer engine.
//!
//! A lexer is a set of named states, each an ordered list of rules. At every
//! position the rules of the current state are tried in order and the first
//! one that matches right at the cursor wins:
//!
//! - `rules` - rule table building blocks (`RuleDef`, `Entry`, `words`)
//! - `lexer` - compiles a table and runs it over text
//! - `tokens` - token categories and the emitted `Token`

pub mod lexer;
pub mod rules;
pub mod tokens;
