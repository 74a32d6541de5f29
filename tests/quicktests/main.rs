//! Property tests driving each tree alongside a `BTreeMap` model of the keys it should hold.

#[macro_use]
extern crate quickcheck_macros;

use std::collections::BTreeMap;

use quickcheck::{Arbitrary, Gen};

use search_trees::{Inspect, Key, SearchTree};

mod avl;
mod red_black;
mod splay;

/// An enum for the various kinds of "things" to do to
/// binary search trees in a quicktest.
#[derive(Copy, Clone, Debug)]
pub enum Op {
    /// Insert the key into the tree
    Insert(i8),
    /// Look the key up
    Search(i8),
    /// Delete the key from the tree
    Delete(i8),
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1, 2]).unwrap() {
            0 => Op::Insert(i8::arbitrary(g)),
            1 => Op::Search(i8::arbitrary(g)),
            2 => Op::Delete(i8::arbitrary(g)),
            _ => unreachable!(),
        }
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Self>> {
        match *self {
            Op::Insert(k) => Box::new(k.shrink().map(Op::Insert)),
            Op::Search(k) => Box::new(k.shrink().map(Op::Search)),
            Op::Delete(k) => Box::new(k.shrink().map(Op::Delete)),
        }
    }
}

/// The keys a tree should hold, with how many nodes hold each.
#[derive(Default)]
pub struct Model {
    counts: BTreeMap<Key, usize>,
}

impl Model {
    fn insert(&mut self, key: Key, keeps_duplicates: bool) {
        let count = self.counts.entry(key).or_default();
        if *count == 0 || keeps_duplicates {
            *count += 1;
        }
    }

    fn contains(&self, key: Key) -> bool {
        self.counts.contains_key(&key)
    }

    fn delete(&mut self, key: Key) -> bool {
        match self.counts.get_mut(&key) {
            Some(count) if *count > 1 => *count -= 1,
            Some(_) => {
                self.counts.remove(&key);
            }
            None => return false,
        }
        true
    }

    fn keys(&self) -> Vec<Key> {
        self.counts
            .iter()
            .flat_map(|(&key, &count)| std::iter::repeat(key).take(count))
            .collect()
    }
}

/// Applies `ops` to a new tree and to a model of it. Fails as soon as a lookup or a delete
/// disagrees with the model, or the tree stops validating.
pub fn agrees_with_model<T>(ops: &[Op]) -> bool
where
    T: SearchTree + Inspect + Default,
{
    let mut tree = T::default();
    let mut model = Model::default();

    for &op in ops {
        match op {
            Op::Insert(k) => {
                tree.insert(k.into());
                model.insert(k.into(), T::KEEPS_DUPLICATES);
            }
            Op::Search(k) => {
                if tree.search(k.into()) != model.contains(k.into()) {
                    return false;
                }
            }
            Op::Delete(k) => {
                if tree.delete(k.into()) != model.delete(k.into()) {
                    return false;
                }
            }
        }
        if tree.validate().is_err() {
            return false;
        }
    }

    tree.keys() == model.keys() && tree.len() == model.keys().len()
}

/// Inserts every key of `xs` into a new tree.
pub fn tree_of<T>(xs: &[i8]) -> T
where
    T: SearchTree + Default,
{
    let mut tree = T::default();
    for &x in xs {
        tree.insert(x.into());
    }
    tree
}

/// Every inserted key can be found.
pub fn contains<T>(xs: &[i8]) -> bool
where
    T: SearchTree + Default,
{
    let mut tree: T = tree_of(xs);
    xs.iter().all(|&x| tree.search(x.into()))
}

/// No key that wasn't inserted can be found.
pub fn contains_not<T>(xs: &[i8], nots: &[i8]) -> bool
where
    T: SearchTree + Default,
{
    let mut tree: T = tree_of(xs);
    nots.iter()
        .filter(|not| !xs.contains(not))
        .all(|&x| !tree.search(x.into()))
}

/// Deleting a key as many times as it was inserted removes it and leaves every other key.
pub fn with_deletions<T>(xs: &[i8], deletes: &[i8]) -> bool
where
    T: SearchTree + Inspect + Default,
{
    let mut tree: T = tree_of(xs);
    let mut deleted = Vec::new();
    for &delete in deletes {
        if deleted.contains(&delete) {
            continue;
        }
        // We may have inserted the same key multiple times - delete each one.
        while tree.delete(delete.into()) {}
        deleted.push(delete);
    }

    deletes.iter().all(|&x| !tree.search(x.into()))
        && xs
            .iter()
            .filter(|x| !deleted.contains(x))
            .all(|&x| tree.search(x.into()))
        && tree.validate().is_ok()
}
