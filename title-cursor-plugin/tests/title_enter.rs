//! End-to-end flow: settings on disk, key events from the host, cursor moves
//! on the active note.

use std::borrow::Cow;

use title_cursor_plugin::{
  DispatchPlugin,
  DispatchResult,
  EditorHost,
  FocusTarget,
  JsonFileStore,
  Key,
  KeyEvent,
  MemoryStore,
  Placement,
  Policy,
  Position,
  Settings,
  SettingsError,
  TitleCursorPlugin,
  Workspace,
};

struct Note {
  text:   String,
  cursor: Position,
  moves:  usize,
}

impl Note {
  fn new(text: &str) -> Self {
    Self {
      text:   text.to_string(),
      cursor: Position::new(1, 1),
      moves:  0,
    }
  }
}

impl EditorHost for Note {
  fn text(&self) -> Cow<'_, str> {
    Cow::Borrowed(&self.text)
  }

  fn set_cursor(&mut self, pos: Position) {
    self.cursor = pos;
    self.moves += 1;
  }
}

/// A host with several open notes, one of them focused.
struct Vault {
  notes:  Vec<Note>,
  active: Option<usize>,
}

impl Workspace for Vault {
  fn active_editor(&mut self) -> Option<&mut dyn EditorHost> {
    let index = self.active?;
    self
      .notes
      .get_mut(index)
      .map(|note| note as &mut dyn EditorHost)
  }
}

fn title_enter() -> KeyEvent {
  KeyEvent::new(Key::Enter, FocusTarget::InlineTitle)
}

fn plugin_with(policy: &str) -> TitleCursorPlugin<MemoryStore> {
  let json = format!(r#"{{"cursorPosition":"{policy}"}}"#);
  TitleCursorPlugin::load(MemoryStore::new(Some(&json))).unwrap()
}

const NOTE: &str = "---\ntags: [rust]\n---\n# Heading\nlast line";

#[test]
fn beginning_lands_after_frontmatter() {
  let plugin = plugin_with("beginning");
  let mut note = Some(Note::new(NOTE));

  let result = plugin.handle_key(&mut note, &title_enter());

  assert_eq!(result, DispatchResult::Emit(Placement::Move(Position::new(3, 0))));
  let note = note.unwrap();
  assert_eq!(note.cursor, Position::new(3, 0));
  assert_eq!(note.moves, 1);
}

#[test]
fn end_lands_after_last_char() {
  let plugin = plugin_with("end");
  let mut note = Some(Note::new(NOTE));

  plugin.handle_key(&mut note, &title_enter());

  assert_eq!(note.unwrap().cursor, Position::new(4, 9));
}

#[test]
fn default_leaves_cursor_alone() {
  for policy in ["default", "unknown", ""] {
    let plugin = plugin_with(policy);
    let mut note = Some(Note::new(NOTE));

    let result = plugin.handle_key(&mut note, &title_enter());

    assert_eq!(result, DispatchResult::Emit(Placement::Keep));
    let note = note.unwrap();
    assert_eq!(note.cursor, Position::new(1, 1));
    assert_eq!(note.moves, 0);
  }
}

#[test]
fn other_keys_pass_through() {
  let plugin = plugin_with("end");
  let mut note = Some(Note::new(NOTE));

  for event in [
    KeyEvent::new(Key::Enter, FocusTarget::Other),
    KeyEvent::new(Key::from_name("Escape"), FocusTarget::InlineTitle),
    KeyEvent::new(
      Key::from_name("Enter"),
      FocusTarget::from_classes("cm-line".split(' ')),
    ),
  ] {
    assert_eq!(plugin.handle_key(&mut note, &event), DispatchResult::Continue);
  }
  assert_eq!(note.unwrap().moves, 0);
}

#[test]
fn no_active_editor_is_handled_quietly() {
  let plugin = plugin_with("end");
  let mut vault = Vault {
    notes:  vec![Note::new("a")],
    active: None,
  };

  assert_eq!(plugin.handle_key(&mut vault, &title_enter()), DispatchResult::Handled);
  assert_eq!(vault.notes[0].moves, 0);
}

#[test]
fn only_the_active_note_moves() {
  let mut plugin = plugin_with("end");
  let mut vault = Vault {
    notes:  vec![Note::new("first"), Note::new("second\nnote")],
    active: Some(1),
  };

  let result = plugin.dispatch(&mut vault, title_enter());

  assert_eq!(result.emitted(), Some(Placement::Move(Position::new(1, 4))));
  assert_eq!(vault.notes[0].moves, 0);
  assert_eq!(vault.notes[1].cursor, Position::new(1, 4));
}

#[test]
fn chain_stops_at_title_plugin() {
  struct Fallback {
    calls: usize,
  }

  impl DispatchPlugin<Option<Note>, KeyEvent, Placement> for Fallback {
    fn dispatch(&mut self, _: &mut Option<Note>, _: KeyEvent) -> DispatchResult<Placement> {
      self.calls += 1;
      DispatchResult::Handled
    }
  }

  let mut title = plugin_with("beginning");
  let mut fallback = Fallback { calls: 0 };
  let mut note = Some(Note::new("body"));

  for event in [title_enter(), KeyEvent::new(Key::from_name("x"), FocusTarget::Other)] {
    let chain: [&mut dyn DispatchPlugin<Option<Note>, KeyEvent, Placement>; 2] =
      [&mut title, &mut fallback];
    for plugin in chain {
      if plugin.dispatch(&mut note, event.clone()).is_handled() {
        break;
      }
    }
  }

  assert_eq!(fallback.calls, 1);
  assert_eq!(note.unwrap().cursor, Position::zero());
}

#[test]
fn settings_file_round_trip() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("plugins").join("title-cursor").join("data.json");

  let mut plugin = TitleCursorPlugin::load(JsonFileStore::new(&path)).unwrap();
  assert_eq!(plugin.policy(), Policy::Default);
  assert!(!path.exists());

  plugin.set_policy(Policy::Beginning).unwrap();
  let store = plugin.unload();
  assert_eq!(store.path(), path);
  assert_eq!(
    Settings::from_json(Some(&std::fs::read_to_string(&path).unwrap())).unwrap(),
    Settings::new(Policy::Beginning)
  );

  let plugin = TitleCursorPlugin::load(store).unwrap();
  assert_eq!(plugin.policy(), Policy::Beginning);
}

#[test]
fn settings_file_with_foreign_fields() {
  let dir = tempfile::tempdir().unwrap();
  let path = dir.path().join("data.json");
  std::fs::write(&path, r#"{"cursorPosition": "end", "legacy": [1, 2]}"#).unwrap();

  let plugin = TitleCursorPlugin::load(JsonFileStore::new(&path)).unwrap();
  assert_eq!(plugin.policy(), Policy::End);
}

#[test]
fn unreadable_settings_path_is_an_error() {
  let dir = tempfile::tempdir().unwrap();
  // A directory cannot be read as a settings file.
  let err = TitleCursorPlugin::load(JsonFileStore::new(dir.path())).unwrap_err();
  assert!(matches!(err, SettingsError::Io(_)));
}
