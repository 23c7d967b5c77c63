#![allow(clippy::module_inception)]

pub mod errors;
pub mod lexer;
pub mod macros;

extern crate regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: u32,
    pub offset: usize,
}

impl Position {
    pub fn start() -> Self {
        Position { line: 1, offset: 0 }
    }
}

/// Byte range of a lexeme within the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

/// Returns `(line_number, line_text, column)` for a byte offset into `source`.
///
/// Offsets at or past the end of the source resolve to the last line.
pub fn get_line_at_position(source: &str, offset: usize) -> (usize, String, usize) {
    let mut start = 0;
    let mut line_number = 1;

    for line in source.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&offset) {
            return (line_number, line.to_string(), offset - start);
        }

        start = end;
        line_number += 1;
    }

    // Offset sits at EOF (or the source is empty); point just past the final line.
    match source.split_inclusive('\n').last() {
        Some(line) if !line.ends_with('\n') => {
            (line_number - 1, line.to_string(), line.len())
        }
        _ => (line_number, String::new(), 0),
    }
}
