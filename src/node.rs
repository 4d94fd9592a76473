//! The cell a [`Tree`][crate::Tree] is built from.

use std::fmt;
use std::mem;
use std::ptr::NonNull;

/// A possibly-empty pointer to a heap allocated [`Node`].
///
/// A `Link` stored in a node's `left`/`right` (or the tree's `root`) owns the node it points to.
/// A `Link` stored in a node's `parent` never does, it is only a way back up.
pub(crate) struct Link<T>(pub(crate) Option<NonNull<Node<T>>>);

impl<T> Clone for Link<T> {
    fn clone(&self) -> Self {
        Self(self.0)
    }
}
impl<T> Copy for Link<T> {}

impl<T> Link<T> {
    pub(crate) const fn none() -> Self {
        Link(None)
    }

    pub(crate) fn get(&self) -> Option<&Node<T>> {
        // SAFETY: A non-empty link always points at a live node allocated by `Node::new_leaked`
        // that is owned by the same tree as `self`. Nodes are only freed through `&mut Tree`, so
        // while this shared borrow (which is ultimately borrowed from the tree) lives, nothing can
        // free or mutate the target.
        unsafe { self.0.as_ref().map(|ptr| ptr.as_ref()) }
    }

    /// Is this link pointing at exactly `node`?
    pub(crate) fn is(&self, node: NonNull<Node<T>>) -> bool {
        self.0 == Some(node)
    }
}

/// A single element of a [`Tree`][crate::Tree] together with its links to the rest of the tree.
///
/// Nodes are only ever handed out as shared references borrowed from their tree, so they can be
/// inspected and navigated but never rearranged from the outside.
pub struct Node<T> {
    pub(crate) element: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    pub(crate) parent: Link<T>,
}

impl<T> Node<T> {
    /// Allocates a childless, parentless node and gives up ownership of the allocation. Whoever
    /// stores the returned pointer in a child/root link becomes responsible for freeing it with
    /// `Box::from_raw`.
    pub(crate) fn new_leaked(element: T) -> NonNull<Self> {
        NonNull::from(Box::leak(Box::new(Node {
            element,
            left: Link::none(),
            right: Link::none(),
            parent: Link::none(),
        })))
    }

    /// The element stored in this node.
    pub fn element(&self) -> &T {
        &self.element
    }

    /// Overwrites the element in place and returns the previous one. The node itself, and so every
    /// link to it, stays the same.
    pub(crate) fn set_element(&mut self, element: T) -> T {
        mem::replace(&mut self.element, element)
    }

    /// The node this one hangs from, or `None` for the root.
    pub fn parent(&self) -> Option<&Self> {
        self.parent.get()
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Self> {
        self.left.get()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Self> {
        self.right.get()
    }
}

impl<T> fmt::Debug for Node<T>
where
    T: fmt::Debug,
{
    // Only neighbouring elements are printed so this stays flat on degenerate trees.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("element", &self.element)
            .field("parent", &self.parent().map(Node::element))
            .field("left", &self.left().map(Node::element))
            .field("right", &self.right().map(Node::element))
            .finish()
    }
}
