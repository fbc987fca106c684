#![forbid(unsafe_code)]

//! Errors raised by node tree primitives.

/// Errors from structural node operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeError {
    /// `remove_child` was given a node that is not a child of the receiver.
    NotAChild,
    /// The insertion would make a node its own ancestor.
    HierarchyCycle,
    /// Text nodes cannot hold children.
    TextNodeParent,
}

impl std::fmt::Display for NodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotAChild => write!(f, "node is not a child of this parent"),
            Self::HierarchyCycle => write!(f, "node cannot be inserted into its own subtree"),
            Self::TextNodeParent => write!(f, "text nodes cannot have children"),
        }
    }
}

impl std::error::Error for NodeError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_distinct() {
        let msgs = [
            NodeError::NotAChild.to_string(),
            NodeError::HierarchyCycle.to_string(),
            NodeError::TextNodeParent.to_string(),
        ];
        assert_ne!(msgs[0], msgs[1]);
        assert_ne!(msgs[1], msgs[2]);
        assert!(msgs[2].contains("text"));
    }
}
