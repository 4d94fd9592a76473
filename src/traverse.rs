//! Depth-first and breadth-first traversals.
//!
//! Every traversal runs to completion before returning and hands back an ordinary `Vec` of node
//! references, so the result is a snapshot rather than a live view. They use an explicit stack
//! (`Vec`) or queue (`VecDeque`) instead of recursion, which keeps them safe on degenerate trees.

use std::collections::VecDeque;

use crate::node::Node;
use crate::tree::Tree;

impl<T> Tree<T> {
    /// Each node before its left subtree, then its right subtree. The first node is the root.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![56, 45, 65, 25, 49, 61, 73].into_iter().collect();
    /// let order: Vec<_> = tree.preorder().into_iter().map(|n| *n.element()).collect();
    ///
    /// assert_eq!(order, vec![56, 45, 25, 49, 65, 61, 73]);
    /// ```
    pub fn preorder(&self) -> Vec<&Node<T>> {
        let mut visited = Vec::with_capacity(self.len());
        let mut stack: Vec<_> = self.root().into_iter().collect();

        while let Some(node) = stack.pop() {
            visited.push(node);
            // Right goes on first so left comes off first.
            stack.extend(node.right());
            stack.extend(node.left());
        }
        visited
    }

    /// Left subtree, then the node, then right subtree. For a BST this is ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_bst::Tree;
    ///
    /// let tree: Tree<_> = vec![56, 45, 65, 25, 49, 61, 73].into_iter().collect();
    /// let order: Vec<_> = tree.inorder().into_iter().map(|n| *n.element()).collect();
    ///
    /// assert_eq!(order, vec![25, 45, 49, 56, 61, 65, 73]);
    /// ```
    pub fn inorder(&self) -> Vec<&Node<T>> {
        let mut visited = Vec::with_capacity(self.len());
        let mut stack = Vec::new();
        let mut current = self.root();

        loop {
            if let Some(node) = current {
                stack.push(node);
                current = node.left();
            } else if let Some(node) = stack.pop() {
                visited.push(node);
                current = node.right();
            } else {
                break;
            }
        }
        visited
    }

    /// Left subtree, then right subtree, then the node. The last node is the root.
    ///
    /// Nodes are first collected in node-right-left order on a second stack, which is then read
    /// back to front.
    pub fn postorder(&self) -> Vec<&Node<T>> {
        let mut pending: Vec<_> = self.root().into_iter().collect();
        let mut reversed = Vec::with_capacity(self.len());

        while let Some(node) = pending.pop() {
            reversed.push(node);
            pending.extend(node.left());
            pending.extend(node.right());
        }
        reversed.into_iter().rev().collect()
    }

    /// Level by level from the root down, left to right within a level.
    pub fn breadth_first(&self) -> Vec<&Node<T>> {
        let mut visited = Vec::with_capacity(self.len());
        let mut queue: VecDeque<_> = self.root().into_iter().collect();

        while let Some(node) = queue.pop_front() {
            visited.push(node);
            queue.extend(node.left());
            queue.extend(node.right());
        }
        visited
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    /// Four full levels and a partial fifth.
    const DEMO: [i32; 23] = [
        56, 45, 65, 25, 49, 61, 73, 14, 30, 48, 55, 60, 62, 68, 75, 5, 15, 33, 50, 58, 64, 66, 70,
    ];

    fn demo_tree() -> Tree<i32> {
        Tree::try_from_iter(DEMO.iter().copied()).unwrap()
    }

    fn elements(nodes: Vec<&Node<i32>>) -> Vec<i32> {
        nodes.into_iter().map(|n| *n.element()).collect()
    }

    #[test]
    fn preorder() {
        assert_eq!(
            elements(demo_tree().preorder()),
            vec![
                56, 45, 25, 14, 5, 15, 30, 33, 49, 48, 55, 50, 65, 61, 60, 58, 62, 64, 73, 68, 66,
                70, 75
            ]
        );
    }

    #[test]
    fn inorder() {
        let mut sorted = DEMO.to_vec();
        sorted.sort_unstable();

        assert_eq!(elements(demo_tree().inorder()), sorted);
    }

    #[test]
    fn postorder() {
        assert_eq!(
            elements(demo_tree().postorder()),
            vec![
                5, 15, 14, 33, 30, 25, 48, 50, 55, 49, 45, 58, 60, 64, 62, 61, 66, 70, 68, 75, 73,
                65, 56
            ]
        );
    }

    #[test]
    fn breadth_first() {
        assert_eq!(
            elements(demo_tree().breadth_first()),
            vec![
                56, 45, 65, 25, 49, 61, 73, 14, 30, 48, 55, 60, 62, 68, 75, 5, 15, 33, 50, 58, 64,
                66, 70
            ]
        );
    }

    #[test]
    fn empty_tree_traversals_are_empty() {
        let tree: Tree<i32> = Tree::new();

        assert!(tree.preorder().is_empty());
        assert!(tree.inorder().is_empty());
        assert!(tree.postorder().is_empty());
        assert!(tree.breadth_first().is_empty());
    }

    #[test]
    fn single_node() {
        let tree: Tree<_> = Some(1).into_iter().collect();

        assert_eq!(elements(tree.preorder()), vec![1]);
        assert_eq!(elements(tree.inorder()), vec![1]);
        assert_eq!(elements(tree.postorder()), vec![1]);
        assert_eq!(elements(tree.breadth_first()), vec![1]);
    }

    quickcheck::quickcheck! {
        fn every_traversal_visits_each_node_once(xs: Vec<i16>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();

            [tree.preorder(), tree.inorder(), tree.postorder(), tree.breadth_first()]
                .iter()
                .all(|order| {
                    let unique: HashSet<*const Node<i16>> =
                        order.iter().map(|n| *n as *const Node<i16>).collect();
                    order.len() == tree.len() && unique.len() == tree.len()
                })
        }
    }

    quickcheck::quickcheck! {
        fn inorder_is_strictly_ascending(xs: Vec<i16>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let order: Vec<_> = tree.inorder().into_iter().map(Node::element).collect();

            order.windows(2).all(|w| w[0] < w[1])
        }
    }

    quickcheck::quickcheck! {
        fn root_bookends_pre_and_postorder(xs: Vec<i16>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let root = tree.root().map(Node::element);

            tree.preorder().first().map(|n| n.element()) == root
                && tree.postorder().last().map(|n| n.element()) == root
        }
    }

    quickcheck::quickcheck! {
        fn breadth_first_depth_never_decreases(xs: Vec<i16>) -> bool {
            let tree: Tree<_> = xs.into_iter().collect();
            let depths: Vec<_> = tree
                .breadth_first()
                .into_iter()
                .map(|n| tree.depth(n))
                .collect();

            depths.windows(2).all(|w| w[0] <= w[1])
        }
    }
}
