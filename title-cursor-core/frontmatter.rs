//! Leading frontmatter detection.
//!
//! The scan is deliberately loose: a note "has frontmatter" when `---`
//! appears again at or after char offset 3. Neither marker has to sit on a
//! line of its own, and the note does not even have to start with `---`.

use ropey::RopeSlice;

pub const DELIMITER: &str = "---";

/// Char offset the closing search starts from, past a leading opening marker.
const SCAN_START: usize = DELIMITER.len();

/// Char index of the closing delimiter, if any.
pub fn closing_delimiter(text: &str) -> Option<usize> {
  let (start, _) = text.char_indices().nth(SCAN_START)?;
  let found = text[start..].find(DELIMITER)?;
  Some(SCAN_START + text[start..start + found].chars().count())
}

/// Index of the first line after the one holding the closing delimiter.
///
/// This may be one past the last line when the closing delimiter sits on the
/// final line of the note.
pub fn body_start_line(text: &str) -> Option<usize> {
  let close = closing_delimiter(text)?;
  Some(RopeSlice::from(text).char_to_line(close) + 1)
}
