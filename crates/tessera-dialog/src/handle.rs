#![forbid(unsafe_code)]

//! The single-resolution result of a shown dialog.

use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll};

use tessera_core::node::Node;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::builder::DialogTree;
use crate::button::ButtonSpec;
use crate::controller::{DialogPhase, SettleSlot};

/// Resolves to the selected button, or `None` when the dialog was dismissed
/// through Escape or the close icon.
///
/// The handle is also a [`Future`]; awaiting it suspends until the first
/// dismissal trigger fires. There is no timeout and no way to cancel an
/// open dialog other than its own triggers. Once received, the value is
/// cached, so polling again returns the same value.
pub struct DialogHandle {
    receiver: oneshot::Receiver<Option<ButtonSpec>>,
    outcome: Option<Option<ButtonSpec>>,
    tree: DialogTree,
    slot: Rc<SettleSlot>,
}

impl DialogHandle {
    pub(crate) fn new(
        receiver: oneshot::Receiver<Option<ButtonSpec>>,
        tree: DialogTree,
        slot: Rc<SettleSlot>,
    ) -> Self {
        Self {
            receiver,
            outcome: None,
            tree,
            slot,
        }
    }

    /// The dialog root node.
    #[must_use]
    pub fn node(&self) -> &Node {
        &self.tree.root
    }

    /// Every region of the dialog.
    #[must_use]
    pub fn tree(&self) -> &DialogTree {
        &self.tree
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> DialogPhase {
        self.slot.phase()
    }

    /// Whether the dialog has settled.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase() == DialogPhase::Settled
    }

    /// Check for the result without an async context.
    pub fn poll_result(&mut self) -> Poll<Option<ButtonSpec>> {
        if let Some(outcome) = &self.outcome {
            return Poll::Ready(outcome.clone());
        }
        match self.receiver.try_recv() {
            Ok(selection) => Poll::Ready(self.store(selection)),
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Closed) => Poll::Ready(self.store(None)),
        }
    }

    fn store(&mut self, selection: Option<ButtonSpec>) -> Option<ButtonSpec> {
        self.outcome = Some(selection.clone());
        selection
    }

    #[cfg(test)]
    pub(crate) fn slot(&self) -> &SettleSlot {
        &self.slot
    }
}

impl Future for DialogHandle {
    type Output = Option<ButtonSpec>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let this = self.get_mut();
        if let Some(outcome) = &this.outcome {
            return Poll::Ready(outcome.clone());
        }
        match Pin::new(&mut this.receiver).poll(cx) {
            Poll::Ready(Ok(selection)) => Poll::Ready(this.store(selection)),
            Poll::Ready(Err(_)) => Poll::Ready(this.store(None)),
            Poll::Pending => Poll::Pending,
        }
    }
}

impl std::fmt::Debug for DialogHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DialogHandle")
            .field("phase", &self.phase())
            .field("outcome", &self.outcome)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::button::ok_button;
    use crate::controller::show_dialog;
    use crate::options::DialogOptions;
    use tessera_core::document::Document;

    #[test]
    fn pending_until_a_trigger_fires() {
        let doc = Document::new();
        let mut handle = show_dialog(&doc, DialogOptions::new()).unwrap();
        assert_eq!(handle.poll_result(), Poll::Pending);
        assert!(!handle.is_settled());
    }

    #[test]
    fn result_is_cached_after_first_read() {
        let doc = Document::new();
        let mut handle = show_dialog(&doc, DialogOptions::new()).unwrap();
        let ok = handle.tree().buttons[0].clone();
        doc.click(&ok);
        assert_eq!(handle.poll_result(), Poll::Ready(Some(ok_button())));
        assert_eq!(handle.poll_result(), Poll::Ready(Some(ok_button())));
        assert!(handle.is_settled());
    }

    #[test]
    fn awaiting_yields_the_selection() {
        let doc = Document::new();
        let handle = show_dialog(&doc, DialogOptions::new()).unwrap();
        let cancel = handle.tree().buttons[1].clone();
        doc.click(&cancel);
        let selection = pollster::block_on(handle);
        assert_eq!(selection.map(|s| s.label), Some("Cancel".to_owned()));
    }

    #[test]
    fn await_after_poll_result_reuses_cache() {
        let doc = Document::new();
        let mut handle = show_dialog(&doc, DialogOptions::new()).unwrap();
        let close = handle.tree().close.clone();
        doc.click(&close);
        assert_eq!(handle.poll_result(), Poll::Ready(None));
        assert_eq!(pollster::block_on(handle), None);
    }
}
