//! Seeded key sets shared by the benches.

// Each bench uses a different part of this.
#![allow(dead_code)]

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use search_trees::{avl, red_black, splay, unbalanced, Key, SearchTree};

/// Tree sizes the timing benches run at.
pub const SIZES: [usize; 2] = [100, 1200];

const INSERT_SEED: u64 = 20250924;
const QUERY_SEED: u64 = 20250925;

fn boxed<T: SearchTree + Default + 'static>() -> Box<dyn SearchTree> {
    Box::new(T::default())
}

/// A constructor for an empty instance of each tree, paired with its name.
pub fn all_trees() -> [(&'static str, fn() -> Box<dyn SearchTree>); 4] {
    [
        ("unbalanced", boxed::<unbalanced::Tree>),
        ("avl", boxed::<avl::Tree>),
        ("red_black", boxed::<red_black::Tree>),
        ("splay", boxed::<splay::Tree>),
    ]
}

/// The keys one round of a bench inserts, searches for and deletes.
#[derive(Clone, Debug)]
pub struct Workload {
    /// Distinct keys in ascending order, the order they are inserted in.
    pub ascending: Vec<Key>,
    /// The same keys in descending order, the order they are deleted in.
    pub descending: Vec<Key>,
    /// As many lookups as there are keys, half of them for inserted keys, in random order.
    pub queries: Vec<Key>,
}

impl Workload {
    /// Builds the workload for `len` keys with the default seeds.
    pub fn new(len: usize) -> Self {
        Self::with_seeds(len, INSERT_SEED, QUERY_SEED)
    }

    /// Builds the workload for `len` keys, drawing keys from `insert_seed` and lookups from
    /// `query_seed`.
    pub fn with_seeds(len: usize, insert_seed: u64, query_seed: u64) -> Self {
        let mut ascending = unique_keys(len, &mut StdRng::seed_from_u64(insert_seed));
        ascending.sort_unstable();
        let descending = ascending.iter().rev().copied().collect();
        let queries = queries(&ascending, &mut StdRng::seed_from_u64(query_seed));

        Self {
            ascending,
            descending,
            queries,
        }
    }
}

/// A random key of 7 to 10 decimal digits.
fn random_key(rng: &mut StdRng) -> Key {
    let digits = rng.gen_range(7..=10);
    let low = 10i64.pow(digits - 1);
    rng.gen_range(low..low * 10)
}

/// `len` distinct random keys, in no particular order.
pub fn unique_keys(len: usize, rng: &mut StdRng) -> Vec<Key> {
    let mut seen = HashSet::with_capacity(len * 2);
    let mut keys = Vec::with_capacity(len);
    while keys.len() < len {
        let key = random_key(rng);
        if seen.insert(key) {
            keys.push(key);
        }
    }
    keys
}

fn queries(inserted: &[Key], rng: &mut StdRng) -> Vec<Key> {
    let len = inserted.len();
    let mut queries: Vec<Key> = inserted
        .choose_multiple(rng, len / 2)
        .copied()
        .collect();

    let present: HashSet<Key> = inserted.iter().copied().collect();
    while queries.len() < len {
        let key = random_key(rng);
        if !present.contains(&key) {
            queries.push(key);
        }
    }

    queries.shuffle(rng);
    queries
}
