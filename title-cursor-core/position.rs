use std::fmt;

use ropey::RopeSlice;

/// This is a single point in a note's line/column grid.
/// 0-indexed as all things should be. Columns count `char`s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

impl Position {
  pub const fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  pub const fn zero() -> Self {
    Self { row: 0, col: 0 }
  }

  pub const fn is_zero(&self) -> bool {
    self.row == 0 && self.col == 0
  }
}

impl From<(usize, usize)> for Position {
  fn from(value: (usize, usize)) -> Self {
    Position::new(value.0, value.1)
  }
}

impl fmt::Display for Position {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}:{}", self.row, self.col)
  }
}

/// Index of the last line in `text`, i.e. the number of line breaks.
///
/// An empty text still has one (empty) line, so this is never out of range.
pub fn last_line(text: RopeSlice) -> usize {
  text.len_lines().saturating_sub(1)
}

/// The position right after the last character of `text`.
///
/// The last line never carries a line ending, so its char length is the
/// column just past its final character.
pub fn end_of(text: RopeSlice) -> Position {
  let row = last_line(text);
  Position::new(row, text.line(row).len_chars())
}

/// Clamp `pos` onto the grid of `text`.
///
/// Rows past the last line land at the end of the document. Columns past
/// the end of their line land at the end of that line, before its line
/// ending.
pub fn clamp(text: RopeSlice, pos: Position) -> Position {
  if pos.row > last_line(text) {
    return end_of(text);
  }

  let line = text.line(pos.row);
  let mut len = line.len_chars();
  if pos.row < last_line(text) {
    // Exclude the line ending; "\r\n" counts as a single break.
    len = len.saturating_sub(1);
    if len > 0 && line.char(len) == '\n' && line.char(len - 1) == '\r' {
      len -= 1;
    }
  }

  Position::new(pos.row, pos.col.min(len))
}
