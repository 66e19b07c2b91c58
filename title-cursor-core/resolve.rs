use ropey::RopeSlice;

use crate::{
  frontmatter,
  policy::Policy,
  position::{
    self,
    Position,
  },
};

/// What the host should do with the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
  /// Leave the cursor where it is.
  Keep,
  /// Move the cursor here.
  Move(Position),
}

impl Placement {
  pub const fn position(self) -> Option<Position> {
    match self {
      Self::Keep => None,
      Self::Move(pos) => Some(pos),
    }
  }

  pub const fn is_keep(self) -> bool {
    matches!(self, Self::Keep)
  }
}

/// Compute where the cursor goes after the user confirms the note title.
///
/// Never fails: every text, including an empty or malformed one, yields a
/// position on the text's grid or [`Placement::Keep`].
pub fn resolve(text: &str, policy: Policy) -> Placement {
  let placement = match policy {
    Policy::Default => Placement::Keep,
    Policy::Beginning => Placement::Move(beginning(text)),
    Policy::End => Placement::Move(position::end_of(RopeSlice::from(text))),
  };
  tracing::debug!(%policy, ?placement, "resolved title cursor placement");
  placement
}

fn beginning(text: &str) -> Position {
  match frontmatter::body_start_line(text) {
    Some(row) => position::clamp(RopeSlice::from(text), Position::new(row, 0)),
    None => Position::zero(),
  }
}
