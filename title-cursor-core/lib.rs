//! Cursor placement for the "enter on note title" key event.
//!
//! When the user confirms a note title, the host asks [`resolve`] where the
//! cursor should go in the note body. The answer depends only on the note
//! text and the configured [`Policy`]:
//!
//! ```
//! use title_cursor_core::{
//!   Placement,
//!   Policy,
//!   Position,
//!   resolve,
//! };
//!
//! let text = "---\ntags: rust\n---\nbody";
//!
//! assert_eq!(resolve(text, Policy::Default), Placement::Keep);
//! assert_eq!(
//!   resolve(text, Policy::Beginning),
//!   Placement::Move(Position::new(3, 0))
//! );
//! assert_eq!(
//!   resolve(text, Policy::End),
//!   Placement::Move(Position::new(3, 4))
//! );
//! ```

pub mod frontmatter;
pub mod policy;
pub mod position;
pub mod resolve;

pub use policy::Policy;
pub use position::Position;
pub use resolve::{
  Placement,
  resolve,
};
