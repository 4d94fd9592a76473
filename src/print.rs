//! A sideways drawing of a tree for eyeballing its shape.
//!
//! The tree is drawn rotated a quarter turn counter-clockwise: right subtrees above their parent,
//! left subtrees below. For `[2, 1, 3, 4]` this gives:
//!
//! ```text
//!          /----- 4
//!  /----- 3
//! 2
//!  \----- 1
//! ```

use std::fmt;

use crate::node::Node;
use crate::tree::{Side, Tree};

/// Indent added when stepping down through a node on the outside of its parent's line.
const BLANK: &str = "        ";
/// Indent added when stepping down through a node whose parent's line continues past it.
const BAR: &str = " |      ";

enum Step<'a, T> {
    /// Write the root's bare element.
    Root(&'a Node<T>),
    /// Draw this subtree, rooted at a child on the given side, below `indent`.
    Subtree(&'a Node<T>, Side, String),
    /// Write a single node's line.
    Line(&'a Node<T>, Side, String),
}

/// Renders the tree with one node per line. An empty tree renders as `<null>`.
impl<T> fmt::Display for Tree<T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = match self.root() {
            Some(root) => root,
            None => return writeln!(f, "<null>"),
        };

        // Steps come off the stack in drawing order, so everything is pushed bottom to top.
        let mut steps = Vec::new();
        steps.extend(root.left().map(|n| Step::Subtree(n, Side::Left, String::new())));
        steps.push(Step::Root(root));
        steps.extend(root.right().map(|n| Step::Subtree(n, Side::Right, String::new())));

        while let Some(step) = steps.pop() {
            match step {
                Step::Root(node) => writeln!(f, "{}", node.element())?,
                Step::Line(node, side, indent) => {
                    let branch = match side {
                        Side::Right => " /",
                        Side::Left => " \\",
                    };
                    writeln!(f, "{}{}----- {}", indent, branch, node.element())?;
                }
                Step::Subtree(node, side, indent) => {
                    let (above, below) = match side {
                        Side::Right => (BLANK, BAR),
                        Side::Left => (BAR, BLANK),
                    };
                    let left_indent = format!("{}{}", indent, below);
                    let right_indent = format!("{}{}", indent, above);
                    if let Some(left) = node.left() {
                        steps.push(Step::Subtree(left, Side::Left, left_indent));
                    }
                    steps.push(Step::Line(node, side, indent));
                    if let Some(right) = node.right() {
                        steps.push(Step::Subtree(right, Side::Right, right_indent));
                    }
                }
            }
        }
        Ok(())
    }
}
