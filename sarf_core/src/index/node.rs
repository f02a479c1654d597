use std::cmp::Ordering;

use crate::derived::DerivedWordList;
use crate::root::{Root, RootKey};

pub(super) type Link = Option<Box<Node>>;

#[derive(Debug)]
pub(super) struct Node {
    pub(super) root: Root,
    pub(super) derived: DerivedWordList,
    pub(super) height: u32,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl Node {
    pub(super) fn new(root: Root) -> Box<Self> {
        Box::new(Self {
            root,
            derived: DerivedWordList::new(),
            height: 1,
            left: None,
            right: None,
        })
    }

    pub(super) const fn key(&self) -> RootKey {
        self.root.key()
    }

    pub(super) fn update_height(&mut self) {
        self.height = 1 + height(&self.left).max(height(&self.right));
    }

    /// Left height minus right height.
    pub(super) fn balance_factor(&self) -> i64 {
        i64::from(height(&self.left)) - i64::from(height(&self.right))
    }
}

pub(super) fn height(link: &Link) -> u32 {
    link.as_ref().map_or(0, |node| node.height)
}

fn rotate_right(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.update_height();
    pivot.right = Some(node);
    pivot.update_height();
    pivot
}

fn rotate_left(mut node: Box<Node>) -> Box<Node> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.update_height();
    pivot.left = Some(node);
    pivot.update_height();
    pivot
}

/// Restore the height and AVL balance of `node`, whose subtrees are
/// themselves balanced.
pub(super) fn rebalance(mut node: Box<Node>) -> Box<Node> {
    node.update_height();
    let balance = node.balance_factor();

    if balance > 1 {
        // LR: the left child leans right
        if node.left.as_ref().is_some_and(|left| left.balance_factor() < 0) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        // RL: the right child leans left
        if node.right.as_ref().is_some_and(|right| right.balance_factor() > 0) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Insert `root` below `link`. `inserted` is set when a new node was created.
pub(super) fn insert(link: Link, root: Root, inserted: &mut bool) -> Box<Node> {
    let Some(mut node) = link else {
        *inserted = true;
        return Node::new(root);
    };
    match root.key().cmp(&node.key()) {
        Ordering::Less => node.left = Some(insert(node.left.take(), root, inserted)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), root, inserted)),
        Ordering::Equal => return node,
    }
    rebalance(node)
}

/// Remove the node holding `key` below `link`, returning the new subtree and
/// the removed root with its derived words.
pub(super) fn remove(link: Link, key: RootKey) -> (Link, Option<(Root, DerivedWordList)>) {
    let Some(mut node) = link else {
        return (None, None);
    };
    match key.cmp(&node.key()) {
        Ordering::Less => {
            let (left, removed) = remove(node.left.take(), key);
            node.left = left;
            (Some(rebalance(node)), removed)
        }
        Ordering::Greater => {
            let (right, removed) = remove(node.right.take(), key);
            node.right = right;
            (Some(rebalance(node)), removed)
        }
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                let Node { root, derived, .. } = *node;
                (None, Some((root, derived)))
            }
            (Some(child), None) | (None, Some(child)) => {
                let Node { root, derived, .. } = *node;
                (Some(child), Some((root, derived)))
            }
            (Some(left), Some(right)) => {
                let (right, successor) = take_min(right);
                let Node {
                    root: successor_root,
                    derived: successor_derived,
                    ..
                } = *successor;
                let removed_root = std::mem::replace(&mut node.root, successor_root);
                let removed_derived = std::mem::replace(&mut node.derived, successor_derived);
                node.left = Some(left);
                node.right = right;
                (Some(rebalance(node)), Some((removed_root, removed_derived)))
            }
        },
    }
}

/// Detach the leftmost node of the subtree rooted at `node`.
fn take_min(mut node: Box<Node>) -> (Link, Box<Node>) {
    match node.left.take() {
        None => {
            let right = node.right.take();
            (right, node)
        }
        Some(left) => {
            let (left, min) = take_min(left);
            node.left = left;
            (Some(rebalance(node)), min)
        }
    }
}

/// Build a minimal-height tree from roots sorted by key, splitting at the
/// lower median.
pub(super) fn build_sorted(mut roots: Vec<Root>) -> Link {
    if roots.is_empty() {
        return None;
    }
    let mid = (roots.len() - 1) / 2;
    let right = roots.split_off(mid + 1);
    let root = roots.pop()?;

    let mut node = Node::new(root);
    node.left = build_sorted(roots);
    node.right = build_sorted(right);
    node.update_height();
    Some(node)
}

/// Height of a subtree if every node is balanced, ordered, and carries the
/// correct cached height.
pub(super) fn checked_height(
    link: &Link,
    lower: Option<RootKey>,
    upper: Option<RootKey>,
) -> Option<u32> {
    let Some(node) = link else {
        return Some(0);
    };
    let key = node.key();
    if lower.is_some_and(|lo| key <= lo) || upper.is_some_and(|hi| key >= hi) {
        return None;
    }
    let left = checked_height(&node.left, lower, Some(key))?;
    let right = checked_height(&node.right, Some(key), upper)?;
    let expected = 1 + left.max(right);
    (left.abs_diff(right) <= 1 && node.height == expected).then_some(expected)
}
