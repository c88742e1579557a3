use plain_bst::unbalanced::Tree;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and to a list of the keys it should hold.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys, duplicates included.
fn do_ops<K>(ops: &[Op<K>], bst: &mut Tree<K>, model: &mut Vec<K>)
where
    K: Ord + Clone,
{
    for op in ops {
        match op {
            Op::Insert(k) => {
                bst.insert(k.clone());
                model.push(k.clone());
            }
            Op::Remove(k) => {
                if bst.delete(k).is_some() {
                    let pos = model.iter().position(|x| x == k).unwrap();
                    model.swap_remove(pos);
                }
            }
        }
    }
}

/// Whether each key in the slice is `<=` the next.
fn is_sorted<K: Ord>(keys: &[&K]) -> bool {
    keys.windows(2).all(|pair| pair[0] <= pair[1])
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = Vec::new();

    do_ops(&ops, &mut tree, &mut model);
    model.sort_unstable();
    tree.len() == model.len() && tree.in_order_traversal().eq(model.iter())
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.search(x).map(|node| node.key()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none() && tree.parent_of(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let mut still_present = xs;
    for delete in &deletes {
        // Each delete removes exactly one copy of a duplicated key.
        let deleted = tree.delete(delete).map(|deletion| *deletion.removed());
        match still_present.iter().position(|x| x == delete) {
            Some(pos) => {
                still_present.swap_remove(pos);
                if deleted != Some(*delete) {
                    return false;
                }
            }
            None => {
                if deleted.is_some() {
                    return false;
                }
            }
        }
    }

    let in_order: Vec<_> = tree.in_order_traversal().collect();
    tree.len() == still_present.len()
        && is_sorted(&in_order)
        && still_present.iter().all(|x| tree.search(x).is_some())
}

#[quickcheck]
fn traversals_are_permutations(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let in_order: Vec<_> = tree.in_order_traversal().collect();
    let mut pre_order: Vec<_> = tree.pre_order_traversal().collect();
    let mut post_order: Vec<_> = tree.post_order_traversal().collect();
    pre_order.sort_unstable();
    post_order.sort_unstable();

    in_order.len() == xs.len()
        && is_sorted(&in_order)
        && pre_order == in_order
        && post_order == in_order
}

#[quickcheck]
fn pre_order_starts_at_root_and_post_order_ends_there(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    let root = tree.root().map(|root| root.key());
    tree.pre_order_traversal().next() == root && tree.post_order_traversal().last() == root
}
