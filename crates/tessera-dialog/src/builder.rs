#![forbid(unsafe_code)]

//! Structural construction of the dialog node tree.
//!
//! The builder attaches no listeners; the result can be checked by shape
//! alone. The tree is detached: nothing is inserted into a host here.
//!
//! ```text
//! div.ts-Dialog
//! └── div.ts-Dialog-content
//!     ├── div.ts-Dialog-header
//!     │   ├── span.ts-Dialog-title      (title text)
//!     │   └── span.ts-Dialog-close
//!     ├── div.ts-Dialog-body
//!     │   └── span.ts-Dialog-bodyText   (text body) | caller node | nothing
//!     └── div.ts-Dialog-footer
//!         └── button.ts-Dialog-button   (one per spec, in order)
//!             ├── i.ts-Dialog-buttonIcon [icon class]
//!             └── span.ts-Dialog-buttonText (label)
//! ```

use tessera_core::error::NodeError;
use tessera_core::node::Node;

use crate::button::ButtonSpec;
use crate::class;
use crate::options::DialogBody;

/// Handles to every region of a built dialog.
#[derive(Debug, Clone)]
pub struct DialogTree {
    /// Root node (`ts-Dialog`).
    pub root: Node,
    /// Content wrapper.
    pub content: Node,
    /// Header region.
    pub header: Node,
    /// Title node inside the header.
    pub title: Node,
    /// Close icon inside the header.
    pub close: Node,
    /// Body region.
    pub body: Node,
    /// Footer region.
    pub footer: Node,
    /// Button nodes, index-aligned with the specs they were built from.
    pub buttons: Vec<Node>,
}

/// Build a detached dialog tree.
///
/// Node primitive errors are passed through unchanged. A caller-supplied
/// body node is moved out of its previous parent, as `append_child` does.
pub fn build_dialog(
    title: &str,
    body: &DialogBody,
    buttons: &[ButtonSpec],
) -> Result<DialogTree, NodeError> {
    let root = Node::element_with_class("div", class::DIALOG);
    let content = Node::element_with_class("div", class::CONTENT);
    let header = Node::element_with_class("div", class::HEADER);
    let title_node = Node::element_with_class("span", class::TITLE);
    let close = Node::element_with_class("span", class::CLOSE);
    let body_node = Node::element_with_class("div", class::BODY);
    let footer = Node::element_with_class("div", class::FOOTER);

    root.append_child(&content)?;
    content.append_child(&header)?;
    content.append_child(&body_node)?;
    content.append_child(&footer)?;

    title_node.set_text_content(title);
    header.append_child(&title_node)?;
    header.append_child(&close)?;

    match body {
        DialogBody::Empty => {}
        DialogBody::Text(text) if text.is_empty() => {}
        DialogBody::Text(text) => {
            let span = Node::element_with_class("span", class::BODY_TEXT);
            span.set_text_content(text.as_str());
            body_node.append_child(&span)?;
        }
        DialogBody::Node(node) => body_node.append_child(node)?,
    }

    let button_nodes = buttons
        .iter()
        .map(create_button)
        .collect::<Result<Vec<_>, _>>()?;
    for node in &button_nodes {
        footer.append_child(node)?;
    }

    Ok(DialogTree {
        root,
        content,
        header,
        title: title_node,
        close,
        body: body_node,
        footer,
        buttons: button_nodes,
    })
}

/// Build the node for one button.
pub fn create_button(spec: &ButtonSpec) -> Result<Node, NodeError> {
    let button = Node::element_with_class("button", class::BUTTON);
    if let Some(extra) = &spec.class_name {
        button.add_class(extra);
    }

    let icon = Node::element_with_class("i", class::BUTTON_ICON);
    if let Some(icon_class) = &spec.icon {
        icon.add_class(icon_class);
    }

    let text = Node::element_with_class("span", class::BUTTON_TEXT);
    text.set_text_content(spec.label.as_str());

    button.append_child(&icon)?;
    button.append_child(&text)?;
    Ok(button)
}
