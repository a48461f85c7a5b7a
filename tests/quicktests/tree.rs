use arena_bst::{Config, Duplicates, Error, Tree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::Op;

/// Inserts into a sorted list the way a tree keeping duplicates orders them: after every
/// existing entry with an equal key.
fn model_insert(model: &mut Vec<(i8, i8)>, key: i8, value: i8) {
    let at = model.partition_point(|(k, _)| *k <= key);
    model.insert(at, (key, value));
}

/// Removes the first entry with the key, which is the one a lookup reaches first.
fn model_remove(model: &mut Vec<(i8, i8)>, key: i8) -> Option<i8> {
    let at = model.iter().position(|(k, _)| *k == key)?;
    Some(model.remove(at).1)
}

fn tree_of(xs: &[i8]) -> Tree<i8, i8> {
    let mut tree = Tree::new();
    for x in xs {
        tree.insert(*x, *x);
    }
    tree
}

#[quickcheck]
fn matches_sorted_model(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    for op in ops {
        match op {
            Op::Insert(k, v) => {
                tree.insert(k, v);
                model_insert(&mut model, k, v);
            }
            Op::Remove(k) => {
                if tree.remove(&k).ok() != model_remove(&mut model, k) {
                    return false;
                }
            }
        }
    }

    tree.is_bst()
        && tree.len() == model.len()
        && tree.iter().map(|(k, v)| (*k, *v)).eq(model.iter().copied())
}

#[quickcheck]
fn finds_first_inserted_value(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    for op in ops {
        match op {
            Op::Insert(k, v) => {
                tree.insert(k, v);
                model_insert(&mut model, k, v);
            }
            Op::Remove(k) => {
                let _ = tree.remove(&k);
                model_remove(&mut model, k);
            }
        }
    }

    model.iter().all(|(key, _)| {
        let first = model.iter().find(|(k, _)| k == key).map(|(_, v)| v);
        tree.find(key).ok() == first
    })
}

#[quickcheck]
fn replacing_matches_btreemap(ops: Vec<Op<i8, i8>>) -> bool {
    let mut tree = Tree::with_config(Config::default().duplicates(Duplicates::Replace));
    let mut map = BTreeMap::new();

    for op in ops {
        match op {
            Op::Insert(k, v) => {
                tree.insert(k, v);
                map.insert(k, v);
            }
            Op::Remove(k) => {
                if tree.remove(&k).ok() != map.remove(&k) {
                    return false;
                }
            }
        }
    }

    tree.is_bst() && tree.len() == map.len() && tree.iter().eq(map.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);

    xs.iter().all(|x| tree.find(x) == Ok(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == Err(Error::KeyNotFound))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while tree.remove(delete).is_ok() {}
    }

    let deleted: HashSet<_> = deletes.iter().collect();
    let still_present = xs.iter().filter(|x| !deleted.contains(x));

    tree.is_bst()
        && deletes
            .iter()
            .all(|x| tree.find(x) == Err(Error::KeyNotFound))
        && still_present.clone().all(|x| tree.find(x).is_ok())
        && tree.len() == still_present.count()
}

#[quickcheck]
fn remove_missing_changes_nothing(xs: Vec<i8>, missing: i8) -> bool {
    if xs.contains(&missing) {
        return true;
    }
    let mut tree = tree_of(&xs);
    let before: Vec<_> = tree.iter().map(|(k, v)| (*k, *v)).collect();

    tree.remove(&missing) == Err(Error::KeyNotFound)
        && tree.iter().map(|(k, v)| (*k, *v)).eq(before)
}

#[quickcheck]
fn height_is_between_balanced_and_degenerate(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let height = tree.height();

    // A tree of height h holds fewer than 2^h nodes.
    let fits = 1u128
        .checked_shl(height as u32)
        .map_or(true, |capacity| (tree.len() as u128) < capacity);
    height <= tree.len() && fits
}

#[quickcheck]
fn nth_largest_walks_backwards(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let ascending: Vec<_> = tree.iter().collect();

    ascending
        .iter()
        .rev()
        .enumerate()
        .all(|(n, entry)| tree.nth_largest(n) == Some(*entry))
        && tree.nth_largest(ascending.len()).is_none()
}
