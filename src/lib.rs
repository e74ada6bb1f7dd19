#![allow(clippy::module_inception)]

pub mod errors;
pub mod format;
pub mod lexer;
pub mod lexers;
pub mod macros;

/// Byte range of a token in the text it was cut from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Returns the 1-based line number, the line's text and the column of the
/// byte offset `position` in `content`.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, &str, usize)> {
    let mut start = 0;

    for (index, line) in content.split_inclusive('\n').enumerate() {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((index + 1, line, position - start));
        }

        start = end;
    }

    None
}
