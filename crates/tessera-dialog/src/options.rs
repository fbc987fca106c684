#![forbid(unsafe_code)]

//! Dialog options and configuration.
//!
//! Absent values are substituted, never validated: an empty title renders
//! an empty title node, a missing host means the document root, and a
//! missing button list means [OK, Cancel]. An explicitly empty button list
//! is kept as-is (the footer is then empty).

use tessera_core::node::Node;

use crate::button::{ButtonSpec, default_buttons};

/// Dialog body content.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum DialogBody {
    /// Nothing in the body region.
    #[default]
    Empty,
    /// Plain text, wrapped in a span. Never interpreted as markup; an empty
    /// string leaves the body region empty.
    Text(String),
    /// A caller-built node, inserted by reference.
    Node(Node),
}

impl From<&str> for DialogBody {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for DialogBody {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Node> for DialogBody {
    fn from(node: Node) -> Self {
        Self::Node(node)
    }
}

impl From<&Node> for DialogBody {
    fn from(node: &Node) -> Self {
        Self::Node(node.clone())
    }
}

impl<T: Into<DialogBody>> From<Option<T>> for DialogBody {
    fn from(body: Option<T>) -> Self {
        body.map_or(Self::Empty, Into::into)
    }
}

/// Behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DialogConfig {
    /// Settle with no selection when Escape is pressed inside the dialog.
    pub close_on_escape: bool,
    /// Focus the first button when the dialog opens.
    pub auto_focus: bool,
}

impl Default for DialogConfig {
    fn default() -> Self {
        Self {
            close_on_escape: true,
            auto_focus: true,
        }
    }
}

impl DialogConfig {
    /// Set whether Escape dismisses the dialog.
    #[must_use]
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }

    /// Set whether the first button is focused on open.
    #[must_use]
    pub fn auto_focus(mut self, focus: bool) -> Self {
        self.auto_focus = focus;
        self
    }
}

/// Everything needed to show a dialog.
#[derive(Debug, Clone, Default)]
pub struct DialogOptions {
    /// Title text.
    pub title: String,
    /// Body content.
    pub body: DialogBody,
    /// Attachment point; the document root when `None`.
    pub host: Option<Node>,
    /// Buttons in footer order; [OK, Cancel] when `None`.
    pub buttons: Option<Vec<ButtonSpec>>,
    /// Behavior switches.
    pub config: DialogConfig,
}

impl DialogOptions {
    /// Options with every field defaulted.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body.
    #[must_use]
    pub fn body(mut self, body: impl Into<DialogBody>) -> Self {
        self.body = body.into();
        self
    }

    /// Set a plain-text body.
    #[must_use]
    pub fn body_text(self, text: impl Into<String>) -> Self {
        self.body(DialogBody::Text(text.into()))
    }

    /// Set a node body.
    #[must_use]
    pub fn body_node(self, node: &Node) -> Self {
        self.body(DialogBody::Node(node.clone()))
    }

    /// Set the host node.
    #[must_use]
    pub fn host(mut self, host: &Node) -> Self {
        self.host = Some(host.clone());
        self
    }

    /// Replace the button list.
    #[must_use]
    pub fn buttons(mut self, buttons: impl IntoIterator<Item = ButtonSpec>) -> Self {
        self.buttons = Some(buttons.into_iter().collect());
        self
    }

    /// Append one button, starting from an empty list.
    #[must_use]
    pub fn button(mut self, button: ButtonSpec) -> Self {
        self.buttons.get_or_insert_with(Vec::new).push(button);
        self
    }

    /// Set the behavior switches.
    #[must_use]
    pub fn config(mut self, config: DialogConfig) -> Self {
        self.config = config;
        self
    }

    /// The button list after default substitution.
    #[must_use]
    pub fn resolved_buttons(&self) -> Vec<ButtonSpec> {
        self.buttons.clone().unwrap_or_else(default_buttons)
    }
}
