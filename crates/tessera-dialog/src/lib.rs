#![forbid(unsafe_code)]

//! Modal dialog for the tessera node tree.
//!
//! [`show_dialog`] builds the dialog (title, close icon, body, one button per
//! [`ButtonSpec`]), appends it to a host node, focuses the first button, and
//! returns a [`DialogHandle`] that resolves exactly once:
//!
//! - button click → `Some(spec)` (the spec's enabled command runs first)
//! - close icon or Escape → `None`
//!
//! The dialog is detached from its host when it settles; later triggers are
//! ignored.
//!
//! # Example
//!
//! ```
//! use std::task::Poll;
//! use tessera_core::Document;
//! use tessera_dialog::{DialogOptions, cancel_button, ok_button, show_dialog};
//!
//! let doc = Document::new();
//! let mut handle = show_dialog(
//!     &doc,
//!     DialogOptions::new()
//!         .title("Confirm")
//!         .body_text("Delete file?")
//!         .buttons([ok_button(), cancel_button()]),
//! )
//! .unwrap();
//!
//! let cancel = handle.tree().buttons[1].clone();
//! doc.click(&cancel);
//!
//! assert_eq!(handle.poll_result(), Poll::Ready(Some(cancel_button())));
//! assert_eq!(doc.root().child_count(), 0);
//! ```

pub mod builder;
pub mod button;
pub mod class;
pub mod controller;
pub mod handle;
pub mod options;

pub use builder::{DialogTree, build_dialog, create_button};
pub use button::{ButtonSpec, cancel_button, default_buttons, ok_button};
pub use controller::{DialogPhase, show_dialog, show_dialog_with};
pub use handle::DialogHandle;
pub use options::{DialogBody, DialogConfig, DialogOptions};
