//! Tree walker
//!
//! Pre-order traversal that hands every structural node to a visitor.
//! Scalar leaves (identifiers, literals) are never visited, and a node
//! without a child relation simply ends its branch.

use crate::features::parsing::domain::SyntaxNode;

/// A node the walker can descend into
pub trait TreeNode: Sized {
    /// Child relation, `None` when the node has none
    fn children(&self) -> Option<&[Self]>;

    /// Primitive leaf value that is neither visited nor descended into
    fn is_scalar(&self) -> bool;

    /// Label used when logging a degraded branch
    fn describe(&self) -> &str;
}

impl TreeNode for SyntaxNode {
    fn children(&self) -> Option<&[Self]> {
        if self.is_scalar() {
            None
        } else {
            Some(&self.children)
        }
    }

    fn is_scalar(&self) -> bool {
        SyntaxNode::is_scalar(self)
    }

    fn describe(&self) -> &str {
        self.kind.label()
    }
}

/// Visitor callback applied to every structural node
///
/// `'t` is the tree lifetime, so visitors may keep references to the nodes
/// they are handed.
pub trait Visitor<'t, N> {
    fn visit(&mut self, node: &'t N);
}

impl<'t, N: 't, F> Visitor<'t, N> for F
where
    F: FnMut(&'t N),
{
    fn visit(&mut self, node: &'t N) {
        self(node)
    }
}

/// Visit `node`, then every node reachable through its children
///
/// Each node is visited exactly once, in declaration order. The walk keeps
/// its own stack, so nesting depth is bounded by memory only.
pub fn traverse<'t, N, V>(node: &'t N, visitor: &mut V)
where
    N: TreeNode,
    V: Visitor<'t, N> + ?Sized,
{
    let mut pending = vec![node];

    while let Some(current) = pending.pop() {
        visitor.visit(current);

        let Some(children) = current.children() else {
            tracing::trace!("{} has no child relation, skipping", current.describe());
            continue;
        };

        // Reversed so the first child is popped first
        pending.extend(children.iter().rev().filter(|child| !child.is_scalar()));
    }
}
