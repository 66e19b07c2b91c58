//! The user-selected cursor placement mode.
//!
//! Hosts persist the mode as a plain string. Decoding is total: anything
//! that is not one of the three known names reads back as
//! [`Policy::Default`].

use std::fmt;

use serde::{
  Deserialize,
  Serialize,
  de::IgnoredAny,
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Policy {
  /// Leave the cursor wherever the editor last had it.
  #[default]
  Default,
  /// First line of the body, after any leading frontmatter.
  Beginning,
  /// After the last character of the note.
  End,
}

impl Policy {
  /// Every policy, in the order a settings menu lists them.
  pub const ALL: [Policy; 3] = [Policy::Default, Policy::Beginning, Policy::End];

  /// Decode a stored setting. Matching is exact and case-sensitive.
  pub fn from_setting(value: &str) -> Self {
    match value {
      "default" => Self::Default,
      "beginning" => Self::Beginning,
      "end" => Self::End,
      other => {
        tracing::debug!(value = other, "unknown cursor policy, using default");
        Self::Default
      },
    }
  }

  /// Decode a setting that may not have been stored yet.
  pub fn from_stored(value: Option<&str>) -> Self {
    value.map_or(Self::Default, Self::from_setting)
  }

  /// The stored form of this policy.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Default => "default",
      Self::Beginning => "beginning",
      Self::End => "end",
    }
  }

  /// Human readable label for settings menus.
  pub const fn label(self) -> &'static str {
    match self {
      Self::Default => "Last known cursor (default)",
      Self::Beginning => "Beginning of note",
      Self::End => "Last line of note",
    }
  }
}

impl fmt::Display for Policy {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl From<&str> for Policy {
  fn from(value: &str) -> Self {
    Self::from_setting(value)
  }
}

impl Serialize for Policy {
  fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
  where
    S: serde::Serializer,
  {
    self.as_str().serialize(serializer)
  }
}

impl<'de> Deserialize<'de> for Policy {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: serde::Deserializer<'de>,
  {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Stored {
      Name(String),
      Other(IgnoredAny),
    }

    Ok(match Stored::deserialize(deserializer)? {
      Stored::Name(name) => Self::from_setting(&name),
      Stored::Other(_) => Self::Default,
    })
  }
}
