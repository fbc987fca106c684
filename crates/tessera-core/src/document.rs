#![forbid(unsafe_code)]

//! Application document: the root node plus keyboard focus.
//!
//! The document is the default attachment point for overlays and the
//! router for keyboard input: key events go to the focused node (or the
//! root when nothing is focused) and bubble from there.
//!
//! # Invariants
//!
//! 1. Only nodes connected to the root can hold focus. A focused node that
//!    is later detached is reported as unfocused.
//! 2. `Enter`/`Space` on a focused `button` element synthesizes a click
//!    unless a key listener called `prevent_default`.

use std::cell::RefCell;

use crate::event::{Event, KeyEvent};
use crate::node::{DispatchOutcome, Node, WeakNode};

/// Tag name of the root node.
pub const ROOT_TAG: &str = "body";

/// A document with a root node and focus tracking.
#[derive(Debug)]
pub struct Document {
    root: Node,
    focused: RefCell<WeakNode>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: Node::element(ROOT_TAG),
            focused: RefCell::new(WeakNode::default()),
        }
    }

    /// The application root node.
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Whether `node` is attached beneath (or is) the root.
    #[must_use]
    pub fn is_connected(&self, node: &Node) -> bool {
        self.root.contains(node)
    }

    /// The focused node, if it is still connected.
    #[must_use]
    pub fn focused(&self) -> Option<Node> {
        self.focused
            .borrow()
            .upgrade()
            .filter(|n| self.is_connected(n))
    }

    /// Move focus to `node`. Returns `false` if the node is not connected.
    ///
    /// The previously focused node receives `Blur`, then `node` receives
    /// `Focus`. Focusing the already-focused node is a no-op.
    pub fn focus(&self, node: &Node) -> bool {
        if !self.is_connected(node) {
            return false;
        }
        let previous = self.focused();
        if previous.as_ref().is_some_and(|p| p.ptr_eq(node)) {
            return true;
        }

        *self.focused.borrow_mut() = node.downgrade();

        #[cfg(feature = "tracing")]
        tracing::trace!(node = ?node, "focus");

        if let Some(prev) = previous {
            prev.dispatch(&Event::Blur);
        }
        node.dispatch(&Event::Focus);
        true
    }

    /// Clear focus.
    pub fn blur(&self) {
        let previous = self.focused();
        *self.focused.borrow_mut() = WeakNode::default();
        if let Some(prev) = previous {
            prev.dispatch(&Event::Blur);
        }
    }

    /// Route a key event to the focused node (or the root).
    pub fn dispatch_key(&self, key: KeyEvent) -> DispatchOutcome {
        let target = self.focused().unwrap_or_else(|| self.root.clone());
        let outcome = target.dispatch(&Event::Key(key));

        if !outcome.default_prevented
            && key.is_activation()
            && target.tag() == Some("button")
            && self.is_connected(&target)
        {
            let click = target.dispatch(&Event::click());
            return DispatchOutcome {
                delivered: outcome.delivered + click.delivered,
                default_prevented: click.default_prevented,
            };
        }
        outcome
    }

    /// Dispatch a left click to `node`.
    pub fn click(&self, node: &Node) -> DispatchOutcome {
        node.dispatch(&Event::click())
    }
}
