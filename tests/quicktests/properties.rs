use ordered_tree::{Error, OrderedTree};

use std::collections::BTreeSet;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same set of values in both.
fn do_ops<T>(ops: &[Op<T>], tree: &mut OrderedTree<T>, set: &mut BTreeSet<T>)
where
    T: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Add(x) => {
                tree.add(x.clone());
                set.insert(x.clone());
            }
            Op::Remove(x) => {
                tree.remove(x);
                set.remove(x);
            }
        }
    }
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = OrderedTree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && tree.iter().eq(set.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    for x in &xs {
        tree.add(*x);
    }
    let distinct: BTreeSet<_> = xs.iter().collect();

    xs.iter().all(|x| tree.contains(x)) && tree.len() == distinct.len()
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs.iter().copied());
    let added: BTreeSet<_> = xs.into_iter().collect();
    let nots: BTreeSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn adding_twice_changes_nothing(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs.iter().copied());
    let before = tree.clone();

    xs.iter().all(|x| !tree.add(*x)) && tree == before
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs.iter().copied());

    let mut still_present: BTreeSet<_> = xs.into_iter().collect();
    for x in &removes {
        let expected = still_present.remove(x);
        let size = tree.len();
        if tree.remove(x) != expected || tree.contains(x) {
            return false;
        }
        // Removing an absent value leaves the size alone.
        if !expected && tree.len() != size {
            return false;
        }
    }

    still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn get_round_trips_with_iteration(xs: Vec<i16>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs);

    let size = tree.len();
    let by_rank: Vec<_> = (0..size).filter_map(|i| tree.get(i).ok()).collect();
    by_rank.into_iter().eq(tree.iter())
        && tree.get(size) == Err(Error::IndexOutOfRange { index: size, size })
}

#[quickcheck]
fn bounds_bracket_present_values(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs.iter().copied());

    xs.iter().all(|x| {
        tree.floor(x) == Some(x)
            && tree.ceiling(x) == Some(x)
            && tree.lower(x).map_or(true, |lower| lower < x)
            && tree.higher(x).map_or(true, |higher| higher > x)
    })
}

#[quickcheck]
fn bounds_bracket_any_value(xs: Vec<i8>, probe: i8) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs);

    tree.floor(&probe).map_or(true, |floor| *floor <= probe)
        && tree.ceiling(&probe).map_or(true, |ceiling| *ceiling >= probe)
        && tree.lower(&probe).map_or(true, |lower| *lower < probe)
        && tree.higher(&probe).map_or(true, |higher| *higher > probe)
}

#[quickcheck]
fn bulk_build_is_minimal_and_sorted(xs: Vec<i16>) -> bool {
    let distinct: BTreeSet<_> = xs.iter().copied().collect();
    match OrderedTree::from_collection(xs) {
        Ok(tree) => {
            let n = distinct.len();
            // ⌈lg (n + 1)⌉
            let expected_height = (usize::BITS - n.leading_zeros()) as usize;
            tree.height() == expected_height && tree.iter().eq(distinct.iter())
        }
        Err(error) => error == Error::EmptyInput && distinct.is_empty(),
    }
}

#[quickcheck]
fn first_and_last_are_extremes(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs.iter().copied());

    match (xs.iter().min(), xs.iter().max()) {
        (Some(min), Some(max)) => tree.first() == Ok(min) && tree.last() == Ok(max),
        _ => {
            tree.first() == Err(Error::EmptyCollection)
                && tree.last() == Err(Error::EmptyCollection)
        }
    }
}
