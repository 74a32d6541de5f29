use search_trees::red_black::Tree;
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
    // A red/black tree with n nodes is at most 2 lg(n + 1) tall.
    let bound = 2.0 * ((tree.len() + 1) as f64).log2();
    tree.height() as f64 <= bound
}
