use binary_search_tree::BinarySearchTree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of values in both.
fn do_ops<V>(ops: &[Op<V>], bst: &mut BinarySearchTree<V>, set: &mut HashSet<V>)
where
    V: std::hash::Hash + Eq + Clone + Ord,
{
    for op in ops {
        match op {
            Op::Insert(v) => {
                bst.insert(v.clone());
                set.insert(v.clone());
            }
            Op::Remove(v) => {
                bst.remove(v);
                set.remove(v);
            }
        }
    }
}

fn tree_of(xs: &[i8]) -> BinarySearchTree<i8> {
    let mut tree = BinarySearchTree::new();
    for x in xs {
        tree.insert(*x);
    }
    tree
}

quickcheck::quickcheck! {
    fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
        let mut tree = BinarySearchTree::new();
        let mut set = HashSet::new();

        do_ops(&ops, &mut tree, &mut set);
        tree.len() == set.len()
            && set.iter().all(|v| tree.find(v).is_some())
            && tree.validate().is_ok()
    }

    fn contains(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);

        xs.iter().all(|x| tree.find(x).map(|n| n.value()) == Some(x))
            && xs.iter().all(|x| tree.find_recursively(x).map(|n| n.value()) == Some(x))
    }

    fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let added: HashSet<_> = xs.into_iter().collect();
        let nots: HashSet<_> = nots.into_iter().collect();
        let mut nots = nots.difference(&added);

        nots.all(|x| tree.find(x).is_none() && tree.find_recursively(x).is_none())
    }

    fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
        let mut tree = tree_of(&xs);
        for delete in &deletes {
            tree.remove(delete);
        }

        let mut still_present = xs;
        for delete in &deletes {
            // We may have inserted the same value multiple times - delete each one.
            while let Some(pos) = still_present.iter().position(|x| x == delete) {
                still_present.swap_remove(pos);
            }
        }

        deletes.iter().all(|x| tree.find(x).is_none())
            && still_present.iter().all(|x| tree.find(x).is_some())
            && tree.dfs_in_order().windows(2).all(|pair| pair[0] < pair[1])
    }

    fn duplicate_insert_changes_nothing(xs: Vec<i8>, again: i8) -> bool {
        let mut tree = tree_of(&xs);
        tree.insert(again);
        let before = tree.dfs_in_order().into_iter().copied().collect::<Vec<_>>();

        tree.insert(again);
        tree.insert_recursively(again);
        tree.dfs_in_order().into_iter().copied().eq(before)
    }

    fn iterative_and_recursive_insert_agree(xs: Vec<i8>) -> bool {
        let mut recursed = BinarySearchTree::new();
        for x in &xs {
            recursed.insert_recursively(*x);
        }

        tree_of(&xs) == recursed
    }

    fn second_highest_is_second_largest(xs: Vec<i8>) -> bool {
        let tree = tree_of(&xs);
        let mut distinct = xs;
        distinct.sort_unstable();
        distinct.dedup();

        tree.find_second_highest() == distinct.iter().rev().nth(1)
    }
}

#[test]
fn documented_example() {
    let mut tree = BinarySearchTree::new();
    tree.insert(10).insert(5).insert(15).insert(3).insert(7);

    assert_eq!(tree.dfs_in_order(), [&3, &5, &7, &10, &15]);
    assert_eq!(tree.bfs(), [&10, &5, &15, &3, &7]);
    assert_eq!(tree.find_second_highest(), Some(&10));
    assert!(tree.is_balanced());
}

#[test]
fn ascending_chain() {
    let mut tree = BinarySearchTree::new();
    tree.insert(1).insert(2).insert(3).insert(4);

    assert!(!tree.is_balanced());
    assert_eq!(tree.find_second_highest(), Some(&3));
    assert_eq!(tree.height(), Some(3));
}

#[test]
fn removing_root_with_two_children() {
    let mut tree = BinarySearchTree::new();
    tree.insert(10).insert(5).insert(15).insert(12).insert(20);

    assert_eq!(tree.remove(&10), Some(10));
    assert_eq!(tree.root().map(|n| n.value()), Some(&12));
    assert!(tree.find(&10).is_none());
    assert_eq!(tree.dfs_in_order(), [&5, &12, &15, &20]);
    assert_eq!(tree.validate(), Ok(()));
}
