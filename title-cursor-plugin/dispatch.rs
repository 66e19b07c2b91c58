//! Minimal plugin API for chaining key handlers.
//!
//! Hosts run their handlers in order (user plugin, then default behavior)
//! and stop at the first one that does not return
//! [`DispatchResult::Continue`].

/// Result of a dispatch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchResult<T = ()> {
  /// Pass the input to the next handler.
  Continue,
  /// Input was handled; stop the chain.
  Handled,
  /// Input was handled and produced a value.
  Emit(T),
}

impl<T> DispatchResult<T> {
  /// Whether the chain should stop here.
  pub const fn is_handled(&self) -> bool {
    !matches!(self, Self::Continue)
  }

  pub fn emitted(self) -> Option<T> {
    match self {
      Self::Emit(value) => Some(value),
      Self::Continue | Self::Handled => None,
    }
  }
}

/// A handler in a dispatch chain.
///
/// Generic over the context it runs against and the input it reacts to, so it
/// does not know about any particular host's event types.
pub trait DispatchPlugin<Ctx: ?Sized, Input, Output = ()> {
  fn dispatch(&mut self, ctx: &mut Ctx, input: Input) -> DispatchResult<Output>;
}
