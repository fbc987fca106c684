#![no_main]

//! Drive an open dialog with arbitrary trigger sequences and check that it
//! settles at most once and leaves the host consistent.

use std::cell::Cell;
use std::rc::Rc;
use std::task::Poll;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tessera_core::{Document, Event, FnCommand, KeyCode, KeyEvent, Node};
use tessera_dialog::{ButtonSpec, DialogOptions, show_dialog};

#[derive(Debug, Arbitrary)]
enum Action {
    Click(u8),
    Close,
    KeyAt(u8, FuzzKey),
    FocusedKey(FuzzKey),
    Focus(u8),
}

#[derive(Debug, Clone, Copy, Arbitrary)]
enum FuzzKey {
    Escape,
    Enter,
    Space,
    Tab,
    Char(char),
}

impl FuzzKey {
    fn code(self) -> KeyCode {
        match self {
            Self::Escape => KeyCode::Escape,
            Self::Enter => KeyCode::Enter,
            Self::Space => KeyCode::Char(' '),
            Self::Tab => KeyCode::Tab,
            Self::Char(c) => KeyCode::Char(c),
        }
    }
}

#[derive(Debug, Arbitrary)]
struct Input {
    labels: Vec<String>,
    title: String,
    body: String,
    actions: Vec<Action>,
}

fuzz_target!(|input: Input| {
    let doc = Document::new();
    let runs = Rc::new(Cell::new(0_u32));
    let specs: Vec<ButtonSpec> = input
        .labels
        .into_iter()
        .take(8)
        .map(|label| {
            let runs = Rc::clone(&runs);
            ButtonSpec::new(label).command(FnCommand::new(move |_| runs.set(runs.get() + 1)))
        })
        .collect();

    let Ok(mut handle) = show_dialog(
        &doc,
        DialogOptions::new()
            .title(input.title)
            .body_text(input.body)
            .buttons(specs),
    ) else {
        return;
    };
    let tree = handle.tree().clone();
    let nodes: Vec<Node> = std::iter::once(tree.root.clone())
        .chain(tree.root.descendants())
        .collect();

    for action in input.actions.into_iter().take(64) {
        match action {
            Action::Click(i) => {
                if let Some(node) = nodes.get(usize::from(i)) {
                    doc.click(node);
                }
            }
            Action::Close => {
                doc.click(&tree.close);
            }
            Action::KeyAt(i, key) => {
                if let Some(node) = nodes.get(usize::from(i)) {
                    node.dispatch(&Event::key(key.code()));
                }
            }
            Action::FocusedKey(key) => {
                doc.dispatch_key(KeyEvent::new(key.code()));
            }
            Action::Focus(i) => {
                if let Some(node) = nodes.get(usize::from(i)) {
                    doc.focus(node);
                }
            }
        }
    }

    let attached = doc.root().child_count();
    assert!(attached <= 1);
    assert!(runs.get() <= 1);
    match handle.poll_result() {
        Poll::Pending => {
            assert_eq!(attached, 1);
            assert_eq!(runs.get(), 0);
        }
        Poll::Ready(_) => assert_eq!(attached, 0),
    }
});
