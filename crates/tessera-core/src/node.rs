#![forbid(unsafe_code)]

//! Retained node tree with class lists, attributes, and event listeners.
//!
//! A [`Node`] is a cheap, clonable handle (`Rc`) to either an element (with a
//! tag name) or a text node. Cloning a `Node` never copies the subtree; two
//! handles compare equal only when they refer to the same node.
//!
//! # Invariants
//!
//! 1. A node has at most one parent. Appending a node that already has a
//!    parent moves it.
//! 2. A node is never its own ancestor (`append_child` rejects cycles).
//! 3. Parent links are weak; children links are strong. Dropping the last
//!    handle to a detached subtree frees it.
//! 4. Dispatch computes the propagation path once, at dispatch start. A
//!    listener removed during dispatch is not invoked afterwards, even if it
//!    was part of the snapshot.
//!
//! # Failure Modes
//!
//! | Failure | Cause | Behavior |
//! |---------|-------|----------|
//! | Remove a non-child | `remove_child` with foreign node | `Err(NodeError::NotAChild)` |
//! | Cycle | Append an ancestor into a descendant | `Err(NodeError::HierarchyCycle)` |
//! | Text parent | Append into a text node | `Err(NodeError::TextNodeParent)` |
//! | Listener panic | Callback panics | Propagates to the dispatcher's caller |

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::NodeError;
use crate::event::{Event, EventType};
use crate::markup::escape;

/// Global counter for unique listener IDs.
static LISTENER_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Handle returned by [`Node::add_listener`], used to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

impl ListenerId {
    fn new() -> Self {
        Self(LISTENER_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

/// Shared listener callback.
pub type ListenerFn = Rc<dyn Fn(&mut EventCx<'_>)>;

struct Listener {
    id: ListenerId,
    event_type: EventType,
    callback: ListenerFn,
}

enum NodeKind {
    Element(String),
    Text,
}

struct NodeData {
    kind: NodeKind,
    text: RefCell<String>,
    classes: RefCell<Vec<String>>,
    attributes: RefCell<BTreeMap<String, String>>,
    parent: RefCell<Weak<NodeData>>,
    children: RefCell<Vec<Node>>,
    listeners: RefCell<Vec<Listener>>,
}

impl NodeData {
    fn new(kind: NodeKind, text: String) -> Self {
        Self {
            kind,
            text: RefCell::new(text),
            classes: RefCell::new(Vec::new()),
            attributes: RefCell::new(BTreeMap::new()),
            parent: RefCell::new(Weak::new()),
            children: RefCell::new(Vec::new()),
            listeners: RefCell::new(Vec::new()),
        }
    }
}

/// A handle to a node in the retained tree.
#[derive(Clone)]
pub struct Node(Rc<NodeData>);

/// A non-owning node handle.
#[derive(Clone, Default)]
pub struct WeakNode(Weak<NodeData>);

impl WeakNode {
    /// Upgrade to a strong handle if the node is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<Node> {
        self.0.upgrade().map(Node)
    }
}

impl fmt::Debug for WeakNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(node) => f.debug_tuple("WeakNode").field(&node).finish(),
            None => f.write_str("WeakNode(<dropped>)"),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.kind {
            NodeKind::Element(tag) => f
                .debug_struct("Element")
                .field("tag", tag)
                .field("classes", &*self.0.classes.borrow())
                .field("children", &self.child_count())
                .finish(),
            NodeKind::Text => f
                .debug_tuple("Text")
                .field(&*self.0.text.borrow())
                .finish(),
        }
    }
}

impl Node {
    // --- Construction ---

    /// Create a detached element with the given tag name.
    #[must_use]
    pub fn element(tag: impl Into<String>) -> Self {
        Self(Rc::new(NodeData::new(
            NodeKind::Element(tag.into()),
            String::new(),
        )))
    }

    /// Create a detached element carrying a single class.
    #[must_use]
    pub fn element_with_class(tag: impl Into<String>, class: &str) -> Self {
        let node = Self::element(tag);
        node.add_class(class);
        node
    }

    /// Create a detached text node.
    ///
    /// The content is stored raw; it is escaped only on serialization.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self(Rc::new(NodeData::new(NodeKind::Text, content.into())))
    }

    // --- Identity ---

    /// Whether both handles refer to the same node.
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Create a weak handle.
    #[must_use]
    pub fn downgrade(&self) -> WeakNode {
        WeakNode(Rc::downgrade(&self.0))
    }

    /// Tag name for elements, `None` for text nodes.
    #[must_use]
    pub fn tag(&self) -> Option<&str> {
        match &self.0.kind {
            NodeKind::Element(tag) => Some(tag),
            NodeKind::Text => None,
        }
    }

    /// Whether this is a text node.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.0.kind, NodeKind::Text)
    }

    // --- Tree structure ---

    /// The parent node, if attached.
    #[must_use]
    pub fn parent(&self) -> Option<Node> {
        self.0.parent.borrow().upgrade().map(Node)
    }

    /// A snapshot of the children, in order.
    #[must_use]
    pub fn children(&self) -> Vec<Node> {
        self.0.children.borrow().clone()
    }

    /// Number of direct children.
    #[must_use]
    pub fn child_count(&self) -> usize {
        self.0.children.borrow().len()
    }

    /// The child at `index`, if any.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<Node> {
        self.0.children.borrow().get(index).cloned()
    }

    /// Position of `child` among this node's children.
    #[must_use]
    pub fn index_of(&self, child: &Node) -> Option<usize> {
        self.0
            .children
            .borrow()
            .iter()
            .position(|c| c.ptr_eq(child))
    }

    /// The topmost ancestor (the node itself when detached).
    #[must_use]
    pub fn root(&self) -> Node {
        let mut current = self.clone();
        while let Some(parent) = current.parent() {
            current = parent;
        }
        current
    }

    /// Whether `other` is this node or one of its descendants.
    #[must_use]
    pub fn contains(&self, other: &Node) -> bool {
        let mut current = Some(other.clone());
        while let Some(node) = current {
            if node.ptr_eq(self) {
                return true;
            }
            current = node.parent();
        }
        false
    }

    /// Append `child` as the last child, moving it from any previous parent.
    pub fn append_child(&self, child: &Node) -> Result<(), NodeError> {
        if self.is_text() {
            return Err(NodeError::TextNodeParent);
        }
        if child.contains(self) {
            return Err(NodeError::HierarchyCycle);
        }

        child.detach();
        *child.0.parent.borrow_mut() = Rc::downgrade(&self.0);
        self.0.children.borrow_mut().push(child.clone());

        #[cfg(feature = "tracing")]
        tracing::trace!(parent = ?self, child = ?child, "append_child");
        Ok(())
    }

    /// Remove `child` from this node's children.
    pub fn remove_child(&self, child: &Node) -> Result<Node, NodeError> {
        let index = self.index_of(child).ok_or(NodeError::NotAChild)?;
        let removed = self.0.children.borrow_mut().remove(index);
        *removed.0.parent.borrow_mut() = Weak::new();

        #[cfg(feature = "tracing")]
        tracing::trace!(parent = ?self, child = ?removed, "remove_child");
        Ok(removed)
    }

    /// Detach this node from its parent. Returns `false` if it had none.
    pub fn detach(&self) -> bool {
        match self.parent() {
            Some(parent) => parent.remove_child(self).is_ok(),
            None => false,
        }
    }

    /// Remove every child.
    pub fn clear_children(&self) {
        let children = std::mem::take(&mut *self.0.children.borrow_mut());
        for child in &children {
            *child.0.parent.borrow_mut() = Weak::new();
        }
    }

    /// All descendants in document (pre-)order, excluding `self`.
    #[must_use]
    pub fn descendants(&self) -> Vec<Node> {
        let mut out = Vec::new();
        let mut stack: Vec<Node> = self.children().into_iter().rev().collect();
        while let Some(node) = stack.pop() {
            stack.extend(node.children().into_iter().rev());
            out.push(node);
        }
        out
    }

    /// Descendants carrying `class`, in document order.
    #[must_use]
    pub fn query_class(&self, class: &str) -> Vec<Node> {
        self.descendants()
            .into_iter()
            .filter(|n| n.has_class(class))
            .collect()
    }

    /// First descendant carrying `class`.
    #[must_use]
    pub fn find_class(&self, class: &str) -> Option<Node> {
        self.descendants().into_iter().find(|n| n.has_class(class))
    }

    // --- Text ---

    /// Concatenated text of this node and its descendants.
    #[must_use]
    pub fn text_content(&self) -> String {
        match self.0.kind {
            NodeKind::Text => self.0.text.borrow().clone(),
            NodeKind::Element(_) => self
                .descendants()
                .iter()
                .filter(|n| n.is_text())
                .map(|n| n.0.text.borrow().clone())
                .collect(),
        }
    }

    /// Replace the content with `text`.
    ///
    /// For elements this drops all children and inserts a single text node
    /// (none if `text` is empty).
    pub fn set_text_content(&self, text: impl Into<String>) {
        let text = text.into();
        match self.0.kind {
            NodeKind::Text => *self.0.text.borrow_mut() = text,
            NodeKind::Element(_) => {
                self.clear_children();
                if !text.is_empty() {
                    let node = Node::text(text);
                    *node.0.parent.borrow_mut() = Rc::downgrade(&self.0);
                    self.0.children.borrow_mut().push(node);
                }
            }
        }
    }

    // --- Classes & attributes ---

    /// Add a class. Empty names and duplicates are ignored.
    pub fn add_class(&self, class: &str) {
        if class.is_empty() || self.has_class(class) {
            return;
        }
        self.0.classes.borrow_mut().push(class.to_owned());
    }

    /// Remove a class. Returns whether it was present.
    pub fn remove_class(&self, class: &str) -> bool {
        let mut classes = self.0.classes.borrow_mut();
        let before = classes.len();
        classes.retain(|c| c != class);
        classes.len() != before
    }

    /// Whether the node carries `class`.
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.0.classes.borrow().iter().any(|c| c == class)
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn classes(&self) -> Vec<String> {
        self.0.classes.borrow().clone()
    }

    /// Space-separated class list.
    #[must_use]
    pub fn class_name(&self) -> String {
        self.0.classes.borrow().join(" ")
    }

    /// Set an attribute value.
    pub fn set_attribute(&self, name: impl Into<String>, value: impl Into<String>) {
        self.0
            .attributes
            .borrow_mut()
            .insert(name.into(), value.into());
    }

    /// Get an attribute value.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow().get(name).cloned()
    }

    /// Remove an attribute, returning its previous value.
    pub fn remove_attribute(&self, name: &str) -> Option<String> {
        self.0.attributes.borrow_mut().remove(name)
    }

    // --- Events ---

    /// Register a listener for `event_type`.
    pub fn add_listener(
        &self,
        event_type: EventType,
        callback: impl Fn(&mut EventCx<'_>) + 'static,
    ) -> ListenerId {
        let id = ListenerId::new();
        self.0.listeners.borrow_mut().push(Listener {
            id,
            event_type,
            callback: Rc::new(callback),
        });
        id
    }

    /// Remove a listener. Returns whether it was registered on this node.
    pub fn remove_listener(&self, id: ListenerId) -> bool {
        let mut listeners = self.0.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|l| l.id != id);
        listeners.len() != before
    }

    /// Whether `id` is currently registered on this node.
    #[must_use]
    pub fn has_listener(&self, id: ListenerId) -> bool {
        self.0.listeners.borrow().iter().any(|l| l.id == id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.0.listeners.borrow().len()
    }

    /// Dispatch `event` with this node as the target.
    ///
    /// Listeners on the target run first, then (for bubbling events) each
    /// ancestor up to the root, unless a listener stops propagation.
    pub fn dispatch(&self, event: &Event) -> DispatchOutcome {
        let event_type = event.event_type();
        let mut path = vec![self.clone()];
        if event.bubbles() {
            let mut current = self.parent();
            while let Some(node) = current {
                current = node.parent();
                path.push(node);
            }
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dispatch",
            event = ?event_type,
            target = ?self,
            depth = path.len()
        )
        .entered();

        let mut cx = EventCx {
            event,
            target: self,
            current: self,
            propagation_stopped: false,
            default_prevented: false,
        };
        let mut delivered = 0;

        for node in &path {
            let snapshot: Vec<(ListenerId, ListenerFn)> = node
                .0
                .listeners
                .borrow()
                .iter()
                .filter(|l| l.event_type == event_type)
                .map(|l| (l.id, Rc::clone(&l.callback)))
                .collect();

            cx.current = node;
            for (id, callback) in snapshot {
                if !node.has_listener(id) {
                    continue;
                }
                callback(&mut cx);
                delivered += 1;
            }
            if cx.propagation_stopped {
                break;
            }
        }

        DispatchOutcome {
            delivered,
            default_prevented: cx.default_prevented,
        }
    }

    // --- Serialization ---

    /// Serialize the subtree as escaped markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        self.write_markup(&mut out);
        out
    }

    fn write_markup(&self, out: &mut String) {
        match &self.0.kind {
            NodeKind::Text => out.push_str(&escape(&self.0.text.borrow())),
            NodeKind::Element(tag) => {
                out.push('<');
                out.push_str(tag);
                let classes = self.0.classes.borrow();
                if !classes.is_empty() {
                    out.push_str(" class=\"");
                    out.push_str(&escape(&classes.join(" ")));
                    out.push('"');
                }
                for (name, value) in self.0.attributes.borrow().iter() {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape(value));
                    out.push('"');
                }
                out.push('>');
                for child in self.0.children.borrow().iter() {
                    child.write_markup(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

/// Context handed to listeners during dispatch.
pub struct EventCx<'a> {
    event: &'a Event,
    target: &'a Node,
    current: &'a Node,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl<'a> EventCx<'a> {
    /// The event being dispatched.
    #[must_use]
    pub fn event(&self) -> &'a Event {
        self.event
    }

    /// The node the event was dispatched to.
    #[must_use]
    pub fn target(&self) -> &'a Node {
        self.target
    }

    /// The node whose listener is currently running.
    #[must_use]
    pub fn current_target(&self) -> &'a Node {
        self.current
    }

    /// Stop the event after the current node's listeners have run.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    /// Suppress the dispatcher's default action (e.g. key activation).
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    /// Whether a listener has called [`prevent_default`](Self::prevent_default).
    #[must_use]
    pub fn is_default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Summary of a dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DispatchOutcome {
    /// Number of listener invocations.
    pub delivered: usize,
    /// Whether a listener called [`EventCx::prevent_default`].
    pub default_prevented: bool,
}
