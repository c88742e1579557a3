//! Depth first traversals over a [`Tree`][crate::unbalanced::Tree]. Each one walks the tree with
//! an explicit stack rather than recursion so a degenerate tree can be as deep as memory allows.
//!
//! A traversal borrows the tree, so the tree can't change underneath it. Asking the tree for a
//! new traversal starts over from the root.

use std::iter::FusedIterator;

use crate::unbalanced::Node;

/// Yields keys in ascending order: left subtree, node, right subtree.
#[derive(Debug)]
pub struct InOrder<'a, K> {
    /// Nodes whose left subtree has been scheduled but whose own key hasn't been yielded yet.
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> InOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        let mut traversal = Self {
            stack: Vec::new(),
            remaining: len,
        };
        traversal.push_left_spine(root);
        traversal
    }

    fn push_left_spine(&mut self, mut link: Option<&'a Node<K>>) {
        while let Some(node) = link {
            self.stack.push(node);
            link = node.left();
        }
    }
}

impl<'a, K> Iterator for InOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for InOrder<'_, K> {}
impl<K> FusedIterator for InOrder<'_, K> {}

/// Yields each node's key before either of its subtrees, left subtree first.
#[derive(Debug)]
pub struct PreOrder<'a, K> {
    stack: Vec<&'a Node<K>>,
    remaining: usize,
}

impl<'a, K> PreOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            stack: root.into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for PreOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Right goes on first so the left subtree comes off the stack first.
        self.stack.extend(node.right());
        self.stack.extend(node.left());
        self.remaining -= 1;
        Some(node.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for PreOrder<'_, K> {}
impl<K> FusedIterator for PreOrder<'_, K> {}

/// Yields each node's key after both of its subtrees, left subtree first.
#[derive(Debug)]
pub struct PostOrder<'a, K> {
    /// Each node is paired with whether its children have already been pushed above it.
    stack: Vec<(&'a Node<K>, bool)>,
    remaining: usize,
}

impl<'a, K> PostOrder<'a, K> {
    pub(crate) fn new(root: Option<&'a Node<K>>, len: usize) -> Self {
        Self {
            stack: root.map(|root| (root, false)).into_iter().collect(),
            remaining: len,
        }
    }
}

impl<'a, K> Iterator for PostOrder<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node, expanded) = self.stack.pop()?;
            if expanded {
                self.remaining -= 1;
                return Some(node.key());
            }

            self.stack.push((node, true));
            self.stack.extend(node.right().map(|right| (right, false)));
            self.stack.extend(node.left().map(|left| (left, false)));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K> ExactSizeIterator for PostOrder<'_, K> {}
impl<K> FusedIterator for PostOrder<'_, K> {}
