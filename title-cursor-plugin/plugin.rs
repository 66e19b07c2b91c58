use title_cursor_core::{
  Placement,
  Policy,
};

use crate::{
  dispatch::{
    DispatchPlugin,
    DispatchResult,
  },
  event::KeyEvent,
  host::{
    Workspace,
    apply_placement,
  },
  settings::{
    Result,
    Settings,
    SettingsError,
    SettingsStore,
  },
};

/// Moves the cursor into the note body when the user presses Enter on the
/// note title.
#[derive(Debug)]
pub struct TitleCursorPlugin<S> {
  settings: Settings,
  store:    S,
}

impl<S: SettingsStore> TitleCursorPlugin<S> {
  /// Load settings from `store` and start the plugin.
  ///
  /// Unreadable settings data is logged and replaced by defaults; only a
  /// failing store is an error.
  pub fn load(store: S) -> Result<Self> {
    let settings = match Settings::load_from(&store) {
      Ok(settings) => settings,
      Err(SettingsError::Json(err)) => {
        tracing::warn!(%err, "ignoring unreadable settings, using defaults");
        Settings::default()
      },
      Err(err) => return Err(err),
    };
    tracing::info!(policy = %settings.cursor_position, "title cursor plugin loaded");
    Ok(Self { settings, store })
  }

  /// Stop the plugin, handing the store back to the host.
  pub fn unload(self) -> S {
    tracing::info!("title cursor plugin unloaded");
    self.store
  }

  pub fn settings(&self) -> &Settings {
    &self.settings
  }

  pub fn policy(&self) -> Policy {
    self.settings.cursor_position
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Change the policy and persist it right away.
  ///
  /// The new policy is in effect even if saving fails.
  pub fn set_policy(&mut self, policy: Policy) -> Result<()> {
    self.settings.cursor_position = policy;
    self.settings.save_to(&mut self.store)
  }

  /// Change the policy from a settings-menu value.
  pub fn set_policy_value(&mut self, value: &str) -> Result<()> {
    self.set_policy(Policy::from_setting(value))
  }

  /// React to a key event.
  ///
  /// Anything but Enter on the note title is passed on. With no active
  /// editor the event is swallowed without effect.
  pub fn handle_key<W>(&self, workspace: &mut W, event: &KeyEvent) -> DispatchResult<Placement>
  where
    W: Workspace + ?Sized,
  {
    if !event.is_title_enter() {
      return DispatchResult::Continue;
    }

    let Some(editor) = workspace.active_editor() else {
      tracing::debug!("title enter without an active editor");
      return DispatchResult::Handled;
    };

    DispatchResult::Emit(apply_placement(editor, self.policy()))
  }
}

impl<S, W> DispatchPlugin<W, KeyEvent, Placement> for TitleCursorPlugin<S>
where
  S: SettingsStore,
  W: Workspace + ?Sized,
{
  fn dispatch(&mut self, ctx: &mut W, input: KeyEvent) -> DispatchResult<Placement> {
    self.handle_key(ctx, &input)
  }
}
