#![forbid(unsafe_code)]

//! Dialog lifecycle: attach, wire dismissal triggers, settle exactly once.
//!
//! # State machine
//!
//! ```text
//! Unopened ──show_dialog──▶ Open ──first trigger──▶ Settled(value)
//! ```
//!
//! Every trigger (a button click, the close icon, Escape inside the dialog)
//! funnels into [`SettleSlot::settle`]. The slot holds the open-dialog
//! state in an `Option`; the first settle `take`s it, so every later call
//! finds `None` and returns without effect.
//!
//! # Invariants
//!
//! 1. The result handle is fulfilled at most once (the oneshot sender is
//!    consumed by `send`).
//! 2. The host is asked to remove the dialog root at most once.
//! 3. After settling, every listener the controller registered is removed.
//! 4. A selected button's command runs after the slot is claimed, so a
//!    trigger fired from inside the command is a no-op.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Build error | Body node rejected by `append_child` | `Err` from `show_dialog`, host untouched |
//! | Root moved away | Caller re-parented the dialog root | `warn!`, handle still fulfilled |
//! | Host dropped | Host freed while open | Detach skipped, handle still fulfilled |

use std::cell::RefCell;
use std::rc::Rc;

use tessera_core::document::Document;
use tessera_core::error::NodeError;
use tessera_core::event::{Event, EventType};
use tessera_core::node::{ListenerId, Node, WeakNode};
use tokio::sync::oneshot;

use crate::builder::{DialogTree, build_dialog};
use crate::button::ButtonSpec;
use crate::handle::DialogHandle;
use crate::options::{DialogBody, DialogOptions};

/// Lifecycle phase of a shown dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogPhase {
    /// Attached and accepting dismissal triggers.
    Open,
    /// Detached and resolved. Terminal.
    Settled,
}

/// State that exists only while the dialog is open.
struct OpenDialog {
    host: WeakNode,
    root: WeakNode,
    sender: oneshot::Sender<Option<ButtonSpec>>,
    listeners: Vec<(WeakNode, ListenerId)>,
}

/// The single resolution point shared by every trigger.
pub(crate) struct SettleSlot {
    open: RefCell<Option<OpenDialog>>,
}

impl SettleSlot {
    fn new(host: &Node, root: &Node, sender: oneshot::Sender<Option<ButtonSpec>>) -> Self {
        Self {
            open: RefCell::new(Some(OpenDialog {
                host: host.downgrade(),
                root: root.downgrade(),
                sender,
                listeners: Vec::new(),
            })),
        }
    }

    pub(crate) fn phase(&self) -> DialogPhase {
        if self.open.borrow().is_some() {
            DialogPhase::Open
        } else {
            DialogPhase::Settled
        }
    }

    fn track(&self, node: &Node, id: ListenerId) {
        if let Some(open) = self.open.borrow_mut().as_mut() {
            open.listeners.push((node.downgrade(), id));
        }
    }

    /// Detach, run the selected command, and fulfil the handle.
    ///
    /// Returns `false` when the dialog had already settled.
    pub(crate) fn settle(&self, selection: Option<&ButtonSpec>) -> bool {
        let claimed = self.open.borrow_mut().take();
        let Some(open) = claimed else {
            tracing::trace!(
                selection = selection.map(|s| s.label.as_str()),
                "dialog already settled; trigger ignored"
            );
            return false;
        };

        for (node, id) in &open.listeners {
            if let Some(node) = node.upgrade() {
                node.remove_listener(*id);
            }
        }

        if let (Some(host), Some(root)) = (open.host.upgrade(), open.root.upgrade())
            && let Err(err) = host.remove_child(&root)
        {
            tracing::warn!(%err, "dialog root was no longer a child of its host");
        }

        if let Some(spec) = selection {
            let ran = spec.invoke();
            tracing::trace!(label = %spec.label, ran, "button command");
        }

        tracing::debug!(
            selection = selection.map(|s| s.label.as_str()),
            "dialog settled"
        );

        if open.sender.send(selection.cloned()).is_err() {
            tracing::trace!("dialog handle dropped before settling");
        }
        true
    }
}

/// Show a dialog and return its single-resolution handle.
///
/// The dialog root is appended to the host (the document root when
/// `options.host` is `None`) before this returns, and the first button
/// receives focus.
pub fn show_dialog(doc: &Document, options: DialogOptions) -> Result<DialogHandle, NodeError> {
    let host = options.host.clone().unwrap_or_else(|| doc.root().clone());
    let buttons = options.resolved_buttons();
    let tree = build_dialog(&options.title, &options.body, &buttons)?;
    host.append_child(&tree.root)?;

    let (sender, receiver) = oneshot::channel();
    let slot = Rc::new(SettleSlot::new(&host, &tree.root, sender));
    wire(&slot, &tree, &buttons, options.config.close_on_escape);

    if options.config.auto_focus
        && let Some(first) = tree.buttons.first()
    {
        doc.focus(first);
    }

    tracing::debug!(
        title = %options.title,
        buttons = buttons.len(),
        "dialog opened"
    );
    Ok(DialogHandle::new(receiver, tree, slot))
}

/// Positional form of [`show_dialog`].
pub fn show_dialog_with(
    doc: &Document,
    title: &str,
    host: Option<&Node>,
    body: impl Into<DialogBody>,
    buttons: Option<Vec<ButtonSpec>>,
) -> Result<DialogHandle, NodeError> {
    let options = DialogOptions {
        title: title.to_owned(),
        body: body.into(),
        host: host.cloned(),
        buttons,
        ..Default::default()
    };
    show_dialog(doc, options)
}

fn wire(slot: &Rc<SettleSlot>, tree: &DialogTree, buttons: &[ButtonSpec], close_on_escape: bool) {
    for (node, spec) in tree.buttons.iter().zip(buttons) {
        let slot_ref = Rc::clone(slot);
        let spec = spec.clone();
        let id = node.add_listener(EventType::Click, move |_| {
            slot_ref.settle(Some(&spec));
        });
        slot.track(node, id);
    }

    let slot_ref = Rc::clone(slot);
    let id = tree.close.add_listener(EventType::Click, move |cx| {
        cx.stop_propagation();
        slot_ref.settle(None);
    });
    slot.track(&tree.close, id);

    if close_on_escape {
        let slot_ref = Rc::clone(slot);
        let id = tree.root.add_listener(EventType::KeyDown, move |cx| {
            if let Event::Key(key) = cx.event()
                && key.is_escape()
            {
                cx.stop_propagation();
                cx.prevent_default();
                slot_ref.settle(None);
            }
        });
        slot.track(&tree.root, id);
    }
}
