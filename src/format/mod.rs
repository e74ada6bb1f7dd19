//! Renderers for token streams.
//!
//! - `RawFormatter` - one `Token.<Category>\t<text>` line per token
//! - `TerminalFormatter` - ANSI colored output for a terminal

pub mod formatter;

#[cfg(test)]
mod tests;
