#![forbid(unsafe_code)]

//! Core primitives for tessera: a retained node tree, input events with
//! bubbling dispatch, a document with focus tracking, and the command
//! capability that interactive widgets invoke.
//!
//! Everything here is single-threaded (`Rc`/`RefCell`). Event handling runs
//! synchronously on the caller's thread; there is no background work.

pub mod command;
pub mod document;
pub mod error;
pub mod event;
pub mod markup;
pub mod node;

pub use command::{Command, CommandArgs, FnCommand};
pub use document::Document;
pub use error::NodeError;
pub use event::{
    Event, EventType, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
pub use node::{DispatchOutcome, EventCx, ListenerFn, ListenerId, Node, WeakNode};
