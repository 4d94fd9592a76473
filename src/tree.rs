//! A mutable, unbalanced BST whose nodes point back at their parents.
//!
//! # Examples
//!
//! ```
//! use linked_bst::{Error, Tree};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.find(&1));
//!
//! tree.insert(1).unwrap();
//! assert!(tree.find(&1));
//!
//! // Elements are unique.
//! assert_eq!(tree.insert(1), Err(Error::DuplicateElement));
//!
//! // Deleting an element hands it back.
//! assert_eq!(tree.delete(&1), Some(1));
//! assert!(!tree.find(&1));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::iter::{self, FromIterator};
use std::ptr::{self, NonNull};

use crate::error::{Error, Result};
use crate::node::{Link, Node};

/// Which child link of a parent a node hangs from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// An unbalanced Binary Search Tree holding unique, totally ordered elements.
///
/// Insertion never reshapes existing nodes, so the shape of the tree is entirely decided by the
/// order elements arrive in. Sorted input therefore produces a tree that is as deep as it is long;
/// every operation here is written without recursion so such trees are still safe to use.
pub struct Tree<T> {
    // A `Link` rather than an `Option<Box<Node>>` so that moving the `Tree` around never moves
    // the root node out from under its children's parent pointers.
    root: Link<T>,
    len: usize,
}

// SAFETY: A `Tree` uniquely owns all of its nodes and has no interior mutability, so it is exactly
// as thread safe as the elements it holds (the same reasoning as `std::collections::LinkedList`).
unsafe impl<T: Send> Send for Tree<T> {}
unsafe impl<T: Sync> Sync for Tree<T> {}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        let mut pending: Vec<NonNull<Node<T>>> = self.root.0.take().into_iter().collect();
        while let Some(ptr) = pending.pop() {
            // SAFETY: Every pointer reaches `pending` exactly once, through the single owning link
            // that pointed at it, and was allocated by `Node::new_leaked`. Parent links are never
            // followed so nothing freed here is touched again.
            let node = unsafe { Box::from_raw(ptr.as_ptr()) };
            pending.extend(node.left.0);
            pending.extend(node.right.0);
        }
    }
}

impl<T> Clone for Tree<T>
where
    T: Clone + Ord,
{
    /// Re-inserting a tree's preorder sequence rebuilds exactly the same shape.
    fn clone(&self) -> Self {
        self.preorder()
            .into_iter()
            .map(|node| node.element().clone())
            .collect()
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set()
            .entries(self.inorder().into_iter().map(Node::element))
            .finish()
    }
}

/// Builds a tree by inserting every element in order, quietly skipping any element that is
/// already present. Use [`Tree::try_from_iter`] to treat duplicates as an error instead.
impl<T> FromIterator<T> for Tree<T>
where
    T: Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(elements: I) -> Self {
        let mut tree = Self::new();
        tree.extend(elements);
        tree
    }
}

/// Inserts every element in order, skipping duplicates.
impl<T> Extend<T> for Tree<T>
where
    T: Ord,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, elements: I) {
        for element in elements {
            if self.insert(element).is_err() {
                log::debug!("skipping duplicate element during bulk insertion");
            }
        }
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: Link::none(),
            len: 0,
        }
    }

    /// Builds a tree by inserting every element in iteration order. The first element that is
    /// already present aborts the whole construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::{Error, Tree};
    ///
    /// let tree = Tree::try_from_iter(vec![2, 1, 3]).unwrap();
    /// assert_eq!(tree.len(), 3);
    ///
    /// assert_eq!(Tree::try_from_iter(vec![2, 1, 2]).err(), Some(Error::DuplicateElement));
    /// ```
    pub fn try_from_iter<I>(elements: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Ord,
    {
        let mut tree = Self::new();
        for element in elements {
            tree.insert(element)?;
        }
        Ok(tree)
    }

    /// The topmost node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.get()
    }

    /// How many elements the tree holds.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Checks whether the tree has no nodes at all.
    pub fn is_empty(&self) -> bool {
        self.root.0.is_none()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Inserts `element` as a new leaf. Smaller elements go left and larger ones go right at
    /// every node on the way down.
    ///
    /// # Errors
    ///
    /// [`Error::DuplicateElement`] if an equal element is already stored. The tree is untouched
    /// in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert(2).unwrap();
    /// tree.insert(1).unwrap();
    ///
    /// let root = tree.root().unwrap();
    /// assert_eq!(root.element(), &2);
    /// assert_eq!(root.left().map(|n| *n.element()), Some(1));
    /// ```
    pub fn insert(&mut self, element: T) -> Result<()>
    where
        T: Ord,
    {
        let point = self.insertion_point(&element)?;

        // Only allocate once we know the element is going in.
        let mut child = Node::new_leaked(element);
        match point {
            None => self.root = Link(Some(child)),
            Some((mut parent, side)) => {
                log::trace!("attaching new node as {:?} child", side);
                // SAFETY: `parent` is a live node of this tree (we hold `&mut self`) and `child`
                // was just allocated, so neither is borrowed anywhere else.
                unsafe {
                    child.as_mut().parent = Link(Some(parent));
                    let parent = parent.as_mut();
                    match side {
                        Side::Left => parent.left = Link(Some(child)),
                        Side::Right => parent.right = Link(Some(child)),
                    }
                }
            }
        }
        self.len += 1;

        if cfg!(debug_assertions) {
            // SAFETY: `child` is now owned by this tree and nothing else borrows it.
            self.assert_local_invariants(unsafe { child.as_ref() });
        }
        Ok(())
    }

    /// Walks down to where `element` would be attached. `None` means the tree is empty and the
    /// element becomes the root.
    fn insertion_point(&self, element: &T) -> Result<Option<(NonNull<Node<T>>, Side)>>
    where
        T: Ord,
    {
        let mut point = None;
        let mut current = self.root.0;
        while let Some(ptr) = current {
            // SAFETY: `ptr` came from an owning link of this tree, which `&self` keeps alive.
            let node = unsafe { ptr.as_ref() };
            current = match element.cmp(&node.element) {
                Ordering::Less => {
                    point = Some((ptr, Side::Left));
                    node.left.0
                }
                Ordering::Equal => {
                    log::debug!("rejecting duplicate element");
                    return Err(Error::DuplicateElement);
                }
                Ordering::Greater => {
                    point = Some((ptr, Side::Right));
                    node.right.0
                }
            };
        }
        Ok(point)
    }

    /// Checks whether an equal element is stored in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![56, 45, 65].into_iter().collect();
    ///
    /// assert!(tree.find(&45));
    /// assert!(!tree.find(&100));
    /// ```
    pub fn find(&self, element: &T) -> bool
    where
        T: Ord,
    {
        self.find_node(element).is_some()
    }

    /// Like [`find`][Tree::find] but returns the node holding the element, which can then be
    /// given to the structural queries.
    pub fn find_node(&self, element: &T) -> Option<&Node<T>>
    where
        T: Ord,
    {
        // SAFETY: `locate` only returns live nodes of this tree and the result borrows `self`.
        self.locate(element).map(|ptr| unsafe { &*ptr.as_ptr() })
    }

    fn locate(&self, element: &T) -> Option<NonNull<Node<T>>>
    where
        T: Ord,
    {
        let mut current = self.root.0;
        while let Some(ptr) = current {
            // SAFETY: `ptr` came from an owning link of this tree, which `&self` keeps alive.
            let node = unsafe { ptr.as_ref() };
            current = match element.cmp(&node.element) {
                Ordering::Less => node.left.0,
                Ordering::Equal => return Some(ptr),
                Ordering::Greater => node.right.0,
            };
        }
        None
    }

    /// Removes the element equal to `element` and returns it. Nothing happens if there is no such
    /// element.
    ///
    /// A node with two children is not unlinked itself: the largest element of its left subtree
    /// is moved into it and that element's old node is unlinked instead.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let mut tree: Tree<_> = vec![56, 45, 65, 25, 49].into_iter().collect();
    ///
    /// assert_eq!(tree.delete(&56), Some(56));
    /// assert_eq!(tree.root().map(|n| *n.element()), Some(49));
    ///
    /// assert_eq!(tree.delete(&56), None);
    /// ```
    pub fn delete(&mut self, element: &T) -> Option<T>
    where
        T: Ord,
    {
        let mut target = self.locate(element)?;

        // SAFETY: `target` is a live node of this tree and `&mut self` means nothing else borrows
        // any node. Each raw dereference below ends before the next one begins.
        let removed = unsafe {
            let node = target.as_ref();
            match (node.left.0, node.right.0) {
                (Some(left), Some(_)) => {
                    log::trace!("deleting node with two children");
                    let predecessor = Self::rightmost(left);
                    let promoted = self.unlink(predecessor);
                    target.as_mut().set_element(promoted)
                }
                _ => self.unlink(target),
            }
        };
        self.len -= 1;

        if cfg!(debug_assertions) {
            if let Some(root) = self.root() {
                self.assert_local_invariants(root);
            }
        }
        Some(removed)
    }

    /// The last node reached by following right links from `ptr`.
    ///
    /// # Safety
    ///
    /// `ptr` must be a live node of this tree.
    unsafe fn rightmost(mut ptr: NonNull<Node<T>>) -> NonNull<Node<T>> {
        while let Some(right) = ptr.as_ref().right.0 {
            ptr = right;
        }
        ptr
    }

    /// Removes a node that has at most one child from the tree, splicing that child into its
    /// place, and frees it.
    ///
    /// # Safety
    ///
    /// `ptr` must be a live node of this tree with at most one child, and no reference to it may
    /// outlive this call.
    unsafe fn unlink(&mut self, ptr: NonNull<Node<T>>) -> T {
        let node = Box::from_raw(ptr.as_ptr());
        debug_assert!(node.left.0.is_none() || node.right.0.is_none());
        log::trace!(
            "unlinking node with {} child(ren)",
            node.left.0.iter().chain(node.right.0.iter()).count()
        );

        let child = if node.left.0.is_some() {
            node.left
        } else {
            node.right
        };
        if let Some(mut child) = child.0 {
            child.as_mut().parent = node.parent;
        }

        match node.parent.0 {
            None => self.root = child,
            Some(mut parent) => {
                let parent = parent.as_mut();
                if parent.left.is(ptr) {
                    parent.left = child;
                } else {
                    parent.right = child;
                }
            }
        }

        let Node { element, .. } = *node;
        element
    }

    /// Number of links from `node` up to the root. The root has depth 0.
    ///
    /// `node` is expected to belong to this tree; for a node of another tree this is its depth
    /// there.
    pub fn depth(&self, node: &Node<T>) -> usize {
        let ancestors = iter::successors(node.parent(), |n| n.parent());
        if cfg!(debug_assertions) {
            let top = ancestors.clone().last().unwrap_or(node);
            debug_assert!(
                self.root().map_or(false, |root| ptr::eq(root, top)),
                "node does not belong to this tree"
            );
        }
        ancestors.count()
    }

    /// Number of links on the longest downward path from `node` to a leaf. A leaf has height 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3, 4].into_iter().collect();
    /// let root = tree.root().unwrap();
    ///
    /// assert_eq!(tree.height(root), 2);
    /// assert_eq!(tree.height(root.left().unwrap()), 0);
    /// ```
    pub fn height(&self, node: &Node<T>) -> usize {
        let mut height = 0;
        let mut pending = vec![(node, 0)];
        while let Some((node, level)) = pending.pop() {
            height = height.max(level);
            pending.extend(node.left().map(|child| (child, level + 1)));
            pending.extend(node.right().map(|child| (child, level + 1)));
        }
        height
    }

    /// Checks whether `node` has no children.
    pub fn is_leaf(&self, node: &Node<T>) -> bool {
        self.child_count(node) == 0
    }

    /// How many children `node` has (0, 1 or 2).
    pub fn child_count(&self, node: &Node<T>) -> usize {
        node.left().iter().chain(node.right().iter()).count()
    }

    /// Checks whether `node` is the left child of its parent.
    pub fn is_left_child(&self, node: &Node<T>) -> bool {
        Self::side_of(node) == Some(Side::Left)
    }

    /// Checks whether `node` is the right child of its parent.
    pub fn is_right_child(&self, node: &Node<T>) -> bool {
        Self::side_of(node) == Some(Side::Right)
    }

    /// Which of its parent's links points at `node`, decided by identity.
    fn side_of(node: &Node<T>) -> Option<Side> {
        let parent = node.parent()?;
        if parent.left().map_or(false, |left| ptr::eq(left, node)) {
            Some(Side::Left)
        } else if parent.right().map_or(false, |right| ptr::eq(right, node)) {
            Some(Side::Right)
        } else {
            unreachable!("a node's parent always links back to it")
        }
    }

    /// The other child of `node`'s parent. `None` for the root or an only child.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![2, 1, 3].into_iter().collect();
    /// let left = tree.find_node(&1).unwrap();
    ///
    /// assert_eq!(tree.sibling(left).map(|n| *n.element()), Some(3));
    /// assert!(tree.sibling(tree.root().unwrap()).is_none());
    /// ```
    pub fn sibling<'a>(&self, node: &'a Node<T>) -> Option<&'a Node<T>> {
        let parent = node.parent()?;
        match Self::side_of(node)? {
            Side::Left => parent.right(),
            Side::Right => parent.left(),
        }
    }

    /// The sibling of `node`'s parent.
    pub fn uncle<'a>(&self, node: &'a Node<T>) -> Option<&'a Node<T>> {
        self.sibling(node.parent()?)
    }

    /// The parent of `node`'s parent.
    pub fn grandparent<'a>(&self, node: &'a Node<T>) -> Option<&'a Node<T>> {
        node.parent()?.parent()
    }

    /// Checks ordering and parent links around `node`: against its parent and its children.
    fn assert_local_invariants(&self, node: &Node<T>)
    where
        T: Ord,
    {
        if let Some(parent) = node.parent() {
            match Self::side_of(node) {
                Some(Side::Left) => assert!(node.element < parent.element),
                Some(Side::Right) => assert!(node.element > parent.element),
                None => unreachable!(),
            }
        } else {
            assert!(self.root().map_or(false, |root| ptr::eq(root, node)));
        }
        if let Some(left) = node.left() {
            assert!(left.element < node.element);
            assert!(left.parent().map_or(false, |p| ptr::eq(p, node)));
        }
        if let Some(right) = node.right() {
            assert!(right.element > node.element);
            assert!(right.parent().map_or(false, |p| ptr::eq(p, node)));
        }
    }
}
