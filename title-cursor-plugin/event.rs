//! Which key events the plugin reacts to.

/// CSS class the host puts on the editable note title.
pub const INLINE_TITLE_CLASS: &str = "inline-title";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
  Enter,
  Other(String),
}

impl Key {
  /// Decode a host key name, e.g. a DOM `KeyboardEvent.key`.
  pub fn from_name(name: &str) -> Self {
    match name {
      "Enter" => Self::Enter,
      other => Self::Other(other.to_string()),
    }
  }
}

/// Element that had focus when the key was pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
  InlineTitle,
  Other,
}

impl FocusTarget {
  /// Decode from the focused element's class list.
  pub fn from_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> Self {
    if classes.into_iter().any(|class| class == INLINE_TITLE_CLASS) {
      Self::InlineTitle
    } else {
      Self::Other
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
  pub key:    Key,
  pub target: FocusTarget,
}

impl KeyEvent {
  pub fn new(key: Key, target: FocusTarget) -> Self {
    Self { key, target }
  }

  /// Enter pressed while editing the note title.
  pub fn is_title_enter(&self) -> bool {
    self.key == Key::Enter && self.target == FocusTarget::InlineTitle
  }
}
