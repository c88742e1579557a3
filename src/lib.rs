//! This crate exposes an unbalanced Binary Search Tree of keys together with its
//! depth first traversals.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored keys. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and
//! sometimes has child `Node`s. The invariant of this BST is:
//!
//! 1. For every `Node`, all the `Node`s in its left subtree have a key
//!    less than or equal to its own key.
//! 2. For every `Node`, all the `Node`s in its right subtree have a key
//!    greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching for a key takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Nothing here rebalances the tree,
//! so inserting sorted keys builds a tree whose height is the number of keys.
//! Visiting the left subtree, then the subtree root, then the right subtree
//! yields the keys in sorted order.
//!
//! ## Logging
//!
//! Insertions emit `trace` events describing where each key was placed and
//! deletions emit `debug` events naming how the victim was removed, through
//! [`tracing`](https://docs.rs/tracing). Install a subscriber to see them.

#![deny(missing_docs)]

pub mod traversal;
pub mod unbalanced;

#[cfg(test)]
mod test;
