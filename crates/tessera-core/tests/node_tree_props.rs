#![forbid(unsafe_code)]

//! Property tests: structural invariants of the node tree under arbitrary
//! append/remove/detach sequences.
//!
//! # Invariants
//!
//! 1. **Single parent**: a node appears in exactly one child list, and only
//!    in the list of the node its parent link names.
//! 2. **Acyclic**: following parent links terminates within the pool size.
//! 3. **Errors leave no trace**: a rejected operation changes nothing.

use proptest::prelude::*;
use tessera_core::{Node, NodeError};

const POOL: usize = 6;

#[derive(Debug, Clone)]
enum Op {
    Append(usize, usize),
    Remove(usize, usize),
    Detach(usize),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0..POOL, 0..POOL).prop_map(|(p, c)| Op::Append(p, c)),
        (0..POOL, 0..POOL).prop_map(|(p, c)| Op::Remove(p, c)),
        (0..POOL).prop_map(Op::Detach),
    ]
}

fn snapshot(pool: &[Node]) -> Vec<Vec<usize>> {
    pool.iter()
        .map(|n| {
            n.children()
                .iter()
                .map(|c| pool.iter().position(|p| p.ptr_eq(c)).unwrap())
                .collect()
        })
        .collect()
}

fn check_invariants(pool: &[Node]) -> Result<(), TestCaseError> {
    for node in pool {
        let listings = pool
            .iter()
            .map(|p| p.children().iter().filter(|c| c.ptr_eq(node)).count())
            .sum::<usize>();
        match node.parent() {
            Some(parent) => {
                prop_assert_eq!(listings, 1);
                prop_assert!(parent.index_of(node).is_some());
            }
            None => prop_assert_eq!(listings, 0),
        }

        let mut steps = 0;
        let mut current = node.parent();
        while let Some(p) = current {
            steps += 1;
            prop_assert!(steps <= POOL, "parent chain does not terminate");
            current = p.parent();
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn tree_stays_consistent(ops in prop::collection::vec(op(), 0..40)) {
        let pool: Vec<Node> = (0..POOL)
            .map(|i| Node::element_with_class("div", &format!("n{i}")))
            .collect();

        for op in ops {
            let before = snapshot(&pool);
            let result = match op {
                Op::Append(p, c) => pool[p].append_child(&pool[c]),
                Op::Remove(p, c) => pool[p].remove_child(&pool[c]).map(|_| ()),
                Op::Detach(n) => {
                    pool[n].detach();
                    Ok(())
                }
            };
            if let Err(err) = result {
                prop_assert!(matches!(err, NodeError::HierarchyCycle | NodeError::NotAChild));
                prop_assert_eq!(snapshot(&pool), before);
            }
            check_invariants(&pool)?;
        }
    }
}
