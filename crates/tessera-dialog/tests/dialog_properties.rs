#![forbid(unsafe_code)]

//! Property tests for the dialog contract.
//!
//! - Any trigger sequence settles the handle once, with the first effective
//!   trigger's value.
//! - Any button list produces index-aligned button nodes.

use std::cell::Cell;
use std::rc::Rc;
use std::task::Poll;

use proptest::prelude::*;
use tessera_core::{Document, Event, FnCommand, KeyCode, KeyEvent};
use tessera_dialog::{ButtonSpec, DialogBody, DialogOptions, build_dialog, class, show_dialog};

#[derive(Debug, Clone)]
enum Trigger {
    /// Click the button at this index (ignored when out of range).
    Click(usize),
    /// Click the label span inside the button at this index.
    ClickLabel(usize),
    Close,
    /// Escape dispatched at the dialog body.
    Escape,
    /// Enter routed through document focus.
    Enter,
}

fn trigger() -> impl Strategy<Value = Trigger> {
    prop_oneof![
        (0usize..6).prop_map(Trigger::Click),
        (0usize..6).prop_map(Trigger::ClickLabel),
        Just(Trigger::Close),
        Just(Trigger::Escape),
        Just(Trigger::Enter),
    ]
}

/// The first trigger that can settle an open dialog with `n` buttons.
fn expected(triggers: &[Trigger], n: usize) -> Option<Option<usize>> {
    triggers.iter().find_map(|t| match *t {
        Trigger::Click(i) | Trigger::ClickLabel(i) => (i < n).then_some(Some(i)),
        Trigger::Close | Trigger::Escape => Some(None),
        Trigger::Enter => (n > 0).then_some(Some(0)),
    })
}

proptest! {
    #[test]
    fn settles_once_with_first_trigger(
        n in 0usize..5,
        triggers in prop::collection::vec(trigger(), 0..12),
    ) {
        let doc = Document::new();
        let runs: Vec<Rc<Cell<u32>>> = (0..n).map(|_| Rc::new(Cell::new(0))).collect();
        let specs: Vec<ButtonSpec> = runs
            .iter()
            .enumerate()
            .map(|(i, count)| {
                let count = Rc::clone(count);
                ButtonSpec::new(format!("b{i}"))
                    .command(FnCommand::new(move |_| count.set(count.get() + 1)))
            })
            .collect();

        let mut handle = show_dialog(&doc, DialogOptions::new().buttons(specs.clone())).unwrap();
        let tree = handle.tree().clone();

        for t in &triggers {
            match *t {
                Trigger::Click(i) => {
                    if let Some(b) = tree.buttons.get(i) {
                        doc.click(b);
                    }
                }
                Trigger::ClickLabel(i) => {
                    if let Some(label) = tree.buttons.get(i).and_then(|b| b.find_class(class::BUTTON_TEXT)) {
                        doc.click(&label);
                    }
                }
                Trigger::Close => {
                    doc.click(&tree.close);
                }
                Trigger::Escape => {
                    tree.body.dispatch(&Event::key(KeyCode::Escape));
                }
                Trigger::Enter => {
                    doc.dispatch_key(KeyEvent::new(KeyCode::Enter));
                }
            }
        }

        match expected(&triggers, n) {
            None => {
                prop_assert_eq!(handle.poll_result(), Poll::Pending);
                prop_assert_eq!(doc.root().child_count(), 1);
                prop_assert!(runs.iter().all(|r| r.get() == 0));
            }
            Some(selection) => {
                let want = selection.map(|i| specs[i].clone());
                prop_assert_eq!(handle.poll_result(), Poll::Ready(want));
                prop_assert_eq!(doc.root().child_count(), 0);
                for (i, r) in runs.iter().enumerate() {
                    let expected_runs = u32::from(selection == Some(i));
                    prop_assert_eq!(r.get(), expected_runs);
                }
            }
        }
    }

    #[test]
    fn buttons_mirror_specs(
        specs in prop::collection::vec(
            (".{0,12}", prop::option::of("[a-z]{1,8}")),
            0..8,
        ),
    ) {
        let specs: Vec<ButtonSpec> = specs
            .into_iter()
            .map(|(label, icon)| {
                let spec = ButtonSpec::new(label);
                match icon {
                    Some(icon) => spec.icon(icon),
                    None => spec,
                }
            })
            .collect();

        let tree = build_dialog("t", &DialogBody::Empty, &specs).unwrap();
        prop_assert_eq!(tree.buttons.len(), specs.len());
        prop_assert_eq!(tree.footer.children(), tree.buttons.clone());

        for (node, spec) in tree.buttons.iter().zip(&specs) {
            prop_assert_eq!(node.text_content(), spec.label.clone());
            let icon = node.find_class(class::BUTTON_ICON).unwrap();
            if let Some(icon_class) = &spec.icon {
                prop_assert!(icon.has_class(icon_class));
            } else {
                prop_assert_eq!(icon.classes().len(), 1);
            }
        }
    }
}
