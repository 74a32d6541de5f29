use search_trees::splay::Tree;
use search_trees::{Inspect, SearchTree};

use crate::Op;

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op>) -> bool {
    crate::agrees_with_model::<Tree>(&ops)
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    crate::contains::<Tree>(&xs)
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    crate::contains_not::<Tree>(&xs, &nots)
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    crate::with_deletions::<Tree>(&xs, &deletes)
}

#[quickcheck]
fn accessed_key_is_root(xs: Vec<i8>, probe: i8) -> bool {
    let mut tree: Tree = crate::tree_of(&xs);
    if let Some(&last) = xs.last() {
        if tree.root_key() != Some(last.into()) {
            return false;
        }
    }
    let present = xs.contains(&probe);
    tree.search(probe.into()) == present && (!present || tree.root_key() == Some(probe.into()))
}
