//! Persisted plugin settings.
//!
//! The host stores one JSON object per plugin. Only `cursorPosition` is ours;
//! missing fields fall back to defaults and unknown ones are ignored, so old
//! or hand-edited data always loads.

use std::{
  io,
  path::{
    Path,
    PathBuf,
  },
};

use serde::{
  Deserialize,
  Serialize,
};
use thiserror::Error;
use title_cursor_core::Policy;

#[derive(Debug, Error)]
pub enum SettingsError {
  #[error(transparent)]
  Io(#[from] io::Error),
  #[error("invalid settings data: {0}")]
  Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
  pub cursor_position: Policy,
}

impl Settings {
  pub fn new(cursor_position: Policy) -> Self {
    Self { cursor_position }
  }

  /// Parse stored settings. `None` and a JSON `null` both mean nothing was
  /// saved yet.
  pub fn from_json(raw: Option<&str>) -> Result<Self> {
    let Some(raw) = raw else {
      return Ok(Self::default());
    };
    let stored: Option<Settings> = serde_json::from_str(raw)?;
    Ok(stored.unwrap_or_default())
  }

  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self)?)
  }

  pub fn load_from(store: &impl SettingsStore) -> Result<Self> {
    let raw = store.load()?;
    Self::from_json(raw.as_deref())
  }

  pub fn save_to(&self, store: &mut impl SettingsStore) -> Result<()> {
    store.save(&self.to_json()?)
  }
}

/// Host-side storage for the raw settings JSON.
pub trait SettingsStore {
  /// The saved JSON, or `None` if nothing was saved yet.
  fn load(&self) -> Result<Option<String>>;

  fn save(&mut self, json: &str) -> Result<()>;
}

/// Settings kept in a JSON file, e.g. the plugin's `data.json`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
  path: PathBuf,
}

impl JsonFileStore {
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  pub fn path(&self) -> &Path {
    &self.path
  }
}

impl SettingsStore for JsonFileStore {
  fn load(&self) -> Result<Option<String>> {
    match std::fs::read_to_string(&self.path) {
      Ok(raw) => Ok(Some(raw)),
      Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
      Err(err) => Err(err.into()),
    }
  }

  fn save(&mut self, json: &str) -> Result<()> {
    if let Some(parent) = self.path.parent() {
      std::fs::create_dir_all(parent)?;
    }
    std::fs::write(&self.path, json)?;
    tracing::debug!(path = %self.path.display(), "saved settings");
    Ok(())
  }
}

/// Settings kept in memory, for hosts that persist elsewhere.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MemoryStore {
  data: Option<String>,
}

impl MemoryStore {
  pub fn new(data: Option<&str>) -> Self {
    Self {
      data: data.map(str::to_string),
    }
  }

  pub fn data(&self) -> Option<&str> {
    self.data.as_deref()
  }
}

impl SettingsStore for MemoryStore {
  fn load(&self) -> Result<Option<String>> {
    Ok(self.data.clone())
  }

  fn save(&mut self, json: &str) -> Result<()> {
    self.data = Some(json.to_string());
    Ok(())
  }
}

/// Description of a dropdown in the host's settings tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownSetting {
  pub name:        &'static str,
  pub description: &'static str,
}

impl DropdownSetting {
  /// `(stored value, label)` pairs in menu order.
  pub fn options(&self) -> impl Iterator<Item = (&'static str, &'static str)> {
    Policy::ALL
      .into_iter()
      .map(|policy| (policy.as_str(), policy.label()))
  }
}

pub const CURSOR_POSITION_SETTING: DropdownSetting = DropdownSetting {
  name:        "Cursor position on title enter",
  description: "Choose the cursor behavior when you press enter on the note title.",
};
