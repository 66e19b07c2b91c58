//! # title-cursor-plugin
//!
//! Host glue around [`title_cursor_core::resolve`].
//!
//! An editor host plugs in through two capability traits:
//!
//! - [`EditorHost`]: read the note text, move the cursor.
//! - [`SettingsStore`]: load and save the raw settings JSON.
//!
//! and forwards its key events to [`TitleCursorPlugin`], which decides
//! whether the event is an Enter on the inline title, resolves the target
//! position and applies it.
//!
//! ```
//! use std::borrow::Cow;
//!
//! use title_cursor_plugin::{
//!   DispatchResult,
//!   EditorHost,
//!   FocusTarget,
//!   Key,
//!   KeyEvent,
//!   MemoryStore,
//!   Placement,
//!   Policy,
//!   Position,
//!   TitleCursorPlugin,
//! };
//!
//! struct Note {
//!   text:   String,
//!   cursor: Position,
//! }
//!
//! impl EditorHost for Note {
//!   fn text(&self) -> Cow<'_, str> {
//!     Cow::Borrowed(&self.text)
//!   }
//!
//!   fn set_cursor(&mut self, pos: Position) {
//!     self.cursor = pos;
//!   }
//! }
//!
//! let store = MemoryStore::new(Some(r#"{"cursorPosition":"end"}"#));
//! let plugin = TitleCursorPlugin::load(store).unwrap();
//! assert_eq!(plugin.policy(), Policy::End);
//!
//! let mut note = Some(Note {
//!   text:   "a\nbb".to_string(),
//!   cursor: Position::zero(),
//! });
//! let event = KeyEvent::new(Key::Enter, FocusTarget::InlineTitle);
//!
//! let result = plugin.handle_key(&mut note, &event);
//! assert_eq!(result, DispatchResult::Emit(Placement::Move(Position::new(1, 2))));
//! assert_eq!(note.unwrap().cursor, Position::new(1, 2));
//! ```

mod dispatch;
pub mod event;
pub mod host;
pub mod plugin;
pub mod settings;

pub use dispatch::{
  DispatchPlugin,
  DispatchResult,
};
pub use event::{
  FocusTarget,
  Key,
  KeyEvent,
};
pub use host::{
  EditorHost,
  Workspace,
  apply_placement,
};
pub use plugin::TitleCursorPlugin;
pub use settings::{
  JsonFileStore,
  MemoryStore,
  Settings,
  SettingsError,
  SettingsStore,
};
pub use title_cursor_core::{
  Placement,
  Policy,
  Position,
};
