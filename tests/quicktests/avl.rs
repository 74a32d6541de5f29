use search_trees::avl::Tree;
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
fn height_is_logarithmic(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for &x in &xs {
        tree.insert(x.into());
    }
    // An AVL tree with n nodes is at most ~1.44 lg(n + 2) tall.
    let bound = 1.45 * ((tree.len() + 2) as f64).log2();
    tree.height() as f64 <= bound
}
