//! An unbalanced BST. Every child slot owns its subtree outright so there are no parent pointers
//! and no `unsafe`. A node's parent is recovered by descending from the root again.
//!
//! Duplicate keys are allowed. A new key is routed left of any equal key it meets, so the node
//! with a given key that sits closest to the root is the one every lookup (and every deletion)
//! talks about.
//!
//! # Examples
//!
//! ```
//! use plain_bst::unbalanced::{Deletion, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! for key in [2, 1, 3] {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.search(&1).map(|node| *node.key()), Some(1));
//!
//! // Deleting a node with children overwrites it with its in-order successor.
//! match tree.delete(&2) {
//!     Some(Deletion::Replaced { removed, node }) => {
//!         assert_eq!(removed, 2);
//!         assert_eq!(*node.key(), 3);
//!     }
//!     other => panic!("unexpected deletion {:?}", other),
//! }
//!
//! assert_eq!(tree.in_order_traversal().copied().collect::<Vec<_>>(), [1, 3]);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use tracing::{debug, trace};

use crate::traversal::{InOrder, PostOrder, PreOrder};

/// A child slot. `None` is the empty position at the bottom of a subtree.
type Link<K> = Option<Box<Node<K>>>;

/// One of the two child slots of a [`Node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The slot holding keys less than or equal to the parent's key.
    Left,
    /// The slot holding keys greater than the parent's key.
    Right,
}

/// An unbalanced Binary Search Tree over keys of type `K`. It supports inserting, searching and
/// deleting keys as well as the three depth first traversals.
pub struct Tree<K> {
    root: Link<K>,
    len: usize,
}

/// A `Node` holds a key and up to two children. Every key in the left subtree is `<=` this
/// node's key and every key in the right subtree is `>` it.
pub struct Node<K> {
    key: K,
    left: Link<K>,
    right: Link<K>,
}

/// Where the node holding a key hangs in the tree, as reported by [`Tree::parent_of`].
#[derive(Debug)]
pub enum Parent<'a, K> {
    /// The key lives at the root, which has no parent.
    Root,
    /// The key lives in the `side` slot of `node`.
    Node {
        /// The parent node.
        node: &'a Node<K>,
        /// Which of the parent's slots holds the child.
        side: Side,
    },
}

/// The outcome of a successful [`Tree::delete`].
#[derive(Debug)]
pub enum Deletion<'a, K> {
    /// The victim was a leaf. It has been unlinked and released and its key is handed back.
    Released(K),
    /// The victim had children so it stays where it is. It now holds the key of the node that
    /// was spliced out in its place.
    Replaced {
        /// The key that was deleted.
        removed: K,
        /// The victim node, now holding its donor's key.
        node: &'a Node<K>,
    },
}

impl<'a, K> Deletion<'a, K> {
    /// The key that left the tree.
    pub fn removed(&self) -> &K {
        match self {
            Self::Released(key) | Self::Replaced { removed: key, .. } => key,
        }
    }

    /// The victim node, if it survived the deletion.
    pub fn node(&self) -> Option<&'a Node<K>> {
        match self {
            Self::Released(_) => None,
            Self::Replaced { node, .. } => Some(*node),
        }
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Drop for Tree<K> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Rebuilds the tree by inserting the keys in pre-order. Every key follows the same comparisons
/// it met in this tree so the copy has exactly the same shape.
impl<K> Clone for Tree<K>
where
    K: Clone + Ord,
{
    fn clone(&self) -> Self {
        self.pre_order_traversal().cloned().collect()
    }
}

impl<K> fmt::Debug for Tree<K>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.in_order_traversal()).finish()
    }
}

impl<K> FromIterator<K> for Tree<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K> Extend<K> for Tree<K>
where
    K: Ord,
{
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = InOrder<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.in_order_traversal()
    }
}

impl<K> Tree<K> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// The number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The root node, if there is one.
    pub fn root(&self) -> Option<&Node<K>> {
        self.root.as_deref()
    }

    /// How many levels are on the longest path from the root to a leaf. An empty tree has a
    /// height of 0 and a single node has a height of 1.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::Tree;
    ///
    /// // Sorted input degenerates into a list.
    /// let tree: Tree<_> = (0..5).collect();
    /// assert_eq!(tree.height(), 5);
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.height(), 2);
    /// ```
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut pending: Vec<(&Node<K>, usize)> =
            self.root().map(|root| (root, 1)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|left| (left, depth + 1)));
            pending.extend(node.right().map(|right| (right, depth + 1)));
        }
        height
    }

    /// The smallest key in the tree.
    pub fn min(&self) -> Option<&K> {
        self.root().map(|root| root.leftmost().key())
    }

    /// The largest key in the tree.
    pub fn max(&self) -> Option<&K> {
        self.root().map(|root| root.rightmost().key())
    }

    /// Releases every node in the tree.
    pub fn clear(&mut self) {
        // Dropping a `Box<Node>` drops its children recursively which would overflow the stack on
        // a degenerate tree, so detach the children before each node goes.
        let mut pending: Vec<Box<Node<K>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }
        self.len = 0;
    }

    /// Visits the left subtree, then the node, then the right subtree. The keys come out in
    /// ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3, 2].into_iter().collect();
    /// assert_eq!(tree.in_order_traversal().copied().collect::<Vec<_>>(), [1, 2, 2, 3]);
    /// ```
    pub fn in_order_traversal(&self) -> InOrder<'_, K> {
        InOrder::new(self.root(), self.len)
    }

    /// Visits the node, then the left subtree, then the right subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.pre_order_traversal().copied().collect::<Vec<_>>(), [2, 1, 3]);
    /// ```
    pub fn pre_order_traversal(&self) -> PreOrder<'_, K> {
        PreOrder::new(self.root(), self.len)
    }

    /// Visits the left subtree, then the right subtree, then the node.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    /// assert_eq!(tree.post_order_traversal().copied().collect::<Vec<_>>(), [1, 3, 2]);
    /// ```
    pub fn post_order_traversal(&self) -> PostOrder<'_, K> {
        PostOrder::new(self.root(), self.len)
    }

    /// Inserts the key as a new leaf and returns that leaf. Keys equal to an existing key go to
    /// its left.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    ///
    /// let root = tree.insert(5);
    /// assert_eq!(*root.key(), 5);
    ///
    /// let leaf = tree.insert(7);
    /// assert!(leaf.is_leaf());
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn insert(&mut self, key: K) -> &Node<K>
    where
        K: Ord,
    {
        self.len += 1;

        let mut link = &mut self.root;
        let mut depth = 0;
        let mut side = None;
        while let Some(node) = link {
            depth += 1;
            if key <= node.key {
                side = Some(Side::Left);
                link = &mut node.left;
            } else {
                side = Some(Side::Right);
                link = &mut node.right;
            }
        }

        match side {
            Some(side) => trace!(depth, ?side, "inserted key as a leaf"),
            None => trace!("inserted key as the root"),
        }

        &**link.insert(Box::new(Node::new(key)))
    }

    /// Finds the node holding the given key. If several nodes hold it, the one closest to the
    /// root is returned. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).map(|node| *node.key()), Some(1));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, key: &K) -> Option<&Node<K>>
    where
        K: Ord,
    {
        let mut link = self.root();
        while let Some(node) = link {
            link = match key.cmp(&node.key) {
                Ordering::Less => node.left(),
                Ordering::Equal => return Some(node),
                Ordering::Greater => node.right(),
            };
        }
        None
    }

    /// Whether any node holds the given key.
    pub fn contains(&self, key: &K) -> bool
    where
        K: Ord,
    {
        self.search(key).is_some()
    }

    /// Finds the parent of the node [`search`][Tree::search] would return for the given key. A
    /// key at the root reports [`Parent::Root`]. If no node has the key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::{Parent, Side, Tree};
    ///
    /// let tree: Tree<_> = [2, 1, 3].into_iter().collect();
    ///
    /// assert!(matches!(tree.parent_of(&2), Some(Parent::Root)));
    /// match tree.parent_of(&3) {
    ///     Some(Parent::Node { node, side }) => {
    ///         assert_eq!(*node.key(), 2);
    ///         assert_eq!(side, Side::Right);
    ///     }
    ///     other => panic!("unexpected parent {:?}", other),
    /// }
    /// assert!(tree.parent_of(&42).is_none());
    /// ```
    pub fn parent_of(&self, key: &K) -> Option<Parent<'_, K>>
    where
        K: Ord,
    {
        let mut node = self.root()?;
        if *key == node.key {
            return Some(Parent::Root);
        }

        loop {
            if let Some(side) = node.side_holding(key) {
                return Some(Parent::Node { node, side });
            }
            node = match key.cmp(&node.key) {
                Ordering::Less => node.left()?,
                Ordering::Greater => node.right()?,
                // Below the root a node is always matched as its parent's child first.
                Ordering::Equal => unreachable!("descended onto a node holding the key"),
            };
        }
    }

    /// Deletes the node [`search`][Tree::search] would return for the given key. If the tree
    /// does not contain the key, nothing happens and `None` is returned.
    ///
    /// A leaf is simply released. Otherwise the node stays in place and takes over the key of its
    /// in-order successor (or, without a right child, its in-order predecessor), which is
    /// spliced out of the tree instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::{Deletion, Tree};
    ///
    /// let mut tree: Tree<_> = [5, 3, 7].into_iter().collect();
    ///
    /// assert!(matches!(tree.delete(&7), Some(Deletion::Released(7))));
    /// assert_eq!(tree.delete(&5).map(|deletion| *deletion.removed()), Some(5));
    /// assert!(tree.delete(&42).is_none());
    ///
    /// assert_eq!(tree.in_order_traversal().copied().collect::<Vec<_>>(), [3]);
    /// ```
    pub fn delete(&mut self, key: &K) -> Option<Deletion<'_, K>>
    where
        K: Ord,
    {
        let link = find_link(&mut self.root, key);
        let (has_left, has_right) = match link.as_deref() {
            Some(victim) => (victim.left.is_some(), victim.right.is_some()),
            None => return None,
        };
        self.len -= 1;

        if !has_left && !has_right {
            debug!("releasing leaf");
            let victim = link.take()?;
            return Some(Deletion::Released(victim.key));
        }

        let victim = link.as_mut()?;
        let donor = if has_right {
            debug!("replacing key with its in-order successor");
            detach_leftmost(&mut victim.right)
        } else {
            debug!("replacing key with its in-order predecessor");
            detach_rightmost(&mut victim.left)
        };
        let donor = match donor {
            Some(donor) => donor,
            None => unreachable!("victim lost the child its donor was taken from"),
        };

        let removed = mem::replace(&mut victim.key, donor.key);
        Some(Deletion::Replaced {
            removed,
            node: &**victim,
        })
    }
}

impl<K> fmt::Debug for Node<K>
where
    K: fmt::Debug,
{
    // Only the children's keys, a full subtree dump is what `Tree`'s `Debug` is for.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("key", &self.key)
            .field("left", &self.left().map(Node::key))
            .field("right", &self.right().map(Node::key))
            .finish()
    }
}

impl<K> Node<K> {
    fn new(key: K) -> Self {
        Self {
            key,
            left: None,
            right: None,
        }
    }

    /// The key stored in this node.
    pub fn key(&self) -> &K {
        &self.key
    }

    /// The left child.
    pub fn left(&self) -> Option<&Self> {
        self.left.as_deref()
    }

    /// The right child.
    pub fn right(&self) -> Option<&Self> {
        self.right.as_deref()
    }

    /// The child in the given slot.
    pub fn child(&self, side: Side) -> Option<&Self> {
        match side {
            Side::Left => self.left(),
            Side::Right => self.right(),
        }
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The node holding the largest key in this node's left subtree, or `None` without a left
    /// child.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [8, 3, 5, 4, 9].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.in_order_predecessor().map(|node| *node.key()), Some(5));
    /// assert!(tree.search(&3).unwrap().in_order_predecessor().is_none());
    /// ```
    pub fn in_order_predecessor(&self) -> Option<&Self> {
        self.left().map(Node::rightmost)
    }

    /// The node holding the smallest key in this node's right subtree, or `None` without a
    /// right child.
    ///
    /// # Examples
    ///
    /// ```
    /// use plain_bst::unbalanced::Tree;
    ///
    /// let tree: Tree<_> = [2, 1, 6, 4, 5].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(root.in_order_successor().map(|node| *node.key()), Some(4));
    /// assert!(tree.search(&1).unwrap().in_order_successor().is_none());
    /// ```
    pub fn in_order_successor(&self) -> Option<&Self> {
        self.right().map(Node::leftmost)
    }

    fn leftmost(&self) -> &Self {
        let mut node = self;
        while let Some(left) = node.left() {
            node = left;
        }
        node
    }

    fn rightmost(&self) -> &Self {
        let mut node = self;
        while let Some(right) = node.right() {
            node = right;
        }
        node
    }

    /// Which of this node's slots holds a child with the given key, if any. Both can't: the
    /// left child is `<=` this key and the right child is `>` it.
    fn side_holding(&self, key: &K) -> Option<Side>
    where
        K: Ord,
    {
        [Side::Left, Side::Right]
            .into_iter()
            .find(|&side| self.child(side).map_or(false, |child| child.key == *key))
    }
}

/// Finds the slot holding the node `Tree::search` would return for `key`. If there is no such
/// node this is the empty slot the search ended on.
fn find_link<'a, K>(mut link: &'a mut Link<K>, key: &K) -> &'a mut Link<K>
where
    K: Ord,
{
    loop {
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => return link,
        };
        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
}

/// Splices the leftmost node out of the subtree in `link`. Its right child, if any, is promoted
/// into the slot that held it.
fn detach_leftmost<K>(mut link: &mut Link<K>) -> Option<Box<Node<K>>> {
    while link.as_ref().map_or(false, |node| node.left.is_some()) {
        if let Some(node) = link {
            link = &mut node.left;
        }
    }
    let mut node = link.take()?;
    *link = node.right.take();
    Some(node)
}

/// Splices the rightmost node out of the subtree in `link`. Its left child, if any, is promoted
/// into the slot that held it.
fn detach_rightmost<K>(mut link: &mut Link<K>) -> Option<Box<Node<K>>> {
    while link.as_ref().map_or(false, |node| node.right.is_some()) {
        if let Some(node) = link {
            link = &mut node.right;
        }
    }
    let mut node = link.take()?;
    *link = node.left.take();
    Some(node)
}
