//! Error types raised while building a lexer.
//!
//! Tokenization itself never fails; everything in here is reported when a
//! rule table is compiled or a lexer is looked up:
//!
//! - `Error`, which pairs an `ErrorImpl` with the rule it came from
//! - `ErrorTip` suggestions shown by the command line front end

pub mod errors;

#[cfg(test)]
mod tests;
