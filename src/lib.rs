//! This crate exposes a plain, unbalanced Binary Search Tree (BST) whose
//! nodes know their parents, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored elements. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was inserted, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Together these mean no two `Node`s may hold equal values, so inserting a
//! value that is already present is an [`Error`].
//!
//! Searching for values in the tree takes `O(height)`. This tree never
//! rebalances itself, so its height depends entirely on insertion order:
//! inserting already sorted values gives a tree as tall as it is long. All
//! operations here (including dropping the tree) are iterative so such trees
//! don't overflow the stack.
//!
//! ## Parent links
//!
//! Every [`Node`] can reach its parent as well as its children, which makes
//! structural questions like [`depth`][Tree::depth],
//! [`sibling`][Tree::sibling] or [`uncle`][Tree::uncle] cheap. Nodes are only
//! handed out as shared borrows of their [`Tree`], so they can't be
//! rearranged from the outside.
//!
//! ## Traversals
//!
//! [`preorder`][Tree::preorder], [`inorder`][Tree::inorder],
//! [`postorder`][Tree::postorder] and [`breadth_first`][Tree::breadth_first]
//! each return every node exactly once, in a `Vec`.
//!
//! ```
//! use linked_bst::Tree;
//!
//! let mut tree: Tree<_> = vec![56, 45, 65, 25, 49, 61, 73].into_iter().collect();
//!
//! let sorted: Vec<_> = tree.inorder().into_iter().map(|n| *n.element()).collect();
//! assert_eq!(sorted, vec![25, 45, 49, 56, 61, 65, 73]);
//!
//! // The root has two children, so the largest element on its left moves up into it.
//! tree.delete(&56);
//! assert_eq!(tree.root().map(|n| *n.element()), Some(49));
//! ```

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

mod error;
mod node;
mod print;
mod traverse;
mod tree;


pub use error::{Error, Result};
pub use node::Node;
pub use tree::Tree;
