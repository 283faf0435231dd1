use ordered_tree::OrderedTree;

use std::collections::BTreeSet;

/// Rebuilds the tree's shape from its pre-order listing and walks it recursively to get the
/// post-order listing it should produce.
fn expected_post_order(tree: &OrderedTree<i8>) -> Vec<i8> {
    fn walk(pre_order: &[i8], out: &mut Vec<i8>) {
        let (root, rest) = match pre_order.split_first() {
            Some(split) => split,
            None => return,
        };
        // In a BST's pre-order listing, the left subtree is every following value below the root.
        let left_len = rest.iter().take_while(|x| *x < root).count();
        walk(&rest[..left_len], out);
        walk(&rest[left_len..], out);
        out.push(*root);
    }

    let pre_order: Vec<i8> = tree.preorder_iter().copied().collect();
    let mut out = Vec::new();
    walk(&pre_order, &mut out);
    out
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs.iter().copied());

    let in_order: Vec<_> = tree.iter().collect();
    in_order.windows(2).all(|w| w[0] < w[1]) && in_order.len() == tree.len()
}

#[quickcheck]
fn traversals_visit_the_same_values(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs);

    let in_order: BTreeSet<_> = tree.iter().collect();
    let pre_order: BTreeSet<_> = tree.preorder_iter().collect();
    let post_order: BTreeSet<_> = tree.postorder_iter().collect();

    tree.preorder_iter().count() == tree.len()
        && tree.postorder_iter().count() == tree.len()
        && in_order == pre_order
        && in_order == post_order
}

#[quickcheck]
fn post_order_follows_the_shape(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs);

    tree.postorder_iter().copied().eq(expected_post_order(&tree))
}

#[quickcheck]
fn pre_order_puts_parents_first(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs);

    // Every node's depth is at most one more than the node listed just before it.
    let depths: Vec<_> = tree.preorder_iter().filter_map(|x| tree.depth(x)).collect();
    depths.first().map_or(true, |root| *root == 0) && depths.windows(2).all(|w| w[1] <= w[0] + 1)
}

#[quickcheck]
fn post_order_ends_at_the_root(xs: Vec<i8>) -> bool {
    let mut tree = OrderedTree::new();
    tree.extend(xs);

    tree.postorder_iter().last() == tree.preorder_iter().next()
}

#[quickcheck]
fn structural_equality_tracks_insertion_order(xs: Vec<i8>) -> bool {
    let mut a = OrderedTree::new();
    let mut b = OrderedTree::new();
    a.extend(xs.iter().copied());
    b.extend(xs.iter().copied());

    let mut reversed = OrderedTree::new();
    reversed.extend(xs.iter().rev().copied());
    let same_shape = reversed.preorder_iter().eq(a.preorder_iter());

    a == b && (reversed == a) == same_shape
}
