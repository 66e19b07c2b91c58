//! The editor host seen from the plugin.
//!
//! The plugin never holds on to a live editor. Each key event borrows one
//! through [`Workspace::active_editor`] for the duration of the call.

use std::borrow::Cow;

use title_cursor_core::{
  Placement,
  Policy,
  Position,
  resolve,
};

/// The capabilities the plugin needs from an open note's editor.
pub trait EditorHost {
  /// Full current text of the note.
  fn text(&self) -> Cow<'_, str>;

  /// Move the cursor. Rows and columns are 0-based, columns in chars.
  fn set_cursor(&mut self, pos: Position);
}

/// Where the host keeps its open editors.
pub trait Workspace {
  /// The editor of the focused note, if there is one with a source editor.
  fn active_editor(&mut self) -> Option<&mut dyn EditorHost>;
}

impl<E: EditorHost> Workspace for Option<E> {
  fn active_editor(&mut self) -> Option<&mut dyn EditorHost> {
    self.as_mut().map(|editor| editor as &mut dyn EditorHost)
  }
}

/// Resolve the placement for `editor`'s text and apply it.
///
/// `set_cursor` is called only for [`Placement::Move`].
pub fn apply_placement(editor: &mut dyn EditorHost, policy: Policy) -> Placement {
  let placement = resolve(&editor.text(), policy);
  if let Placement::Move(pos) = placement {
    editor.set_cursor(pos);
  }
  placement
}
