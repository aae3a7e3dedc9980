//! Route tree construction and validation.
//!
//! # Responsibilities
//! - Declarative construction of nested route nodes
//! - Reject ambiguous trees (duplicate sibling patterns)
//! - Freeze the validated tree as an immutable table
//!
//! # Design Decisions
//! - Builder-style `child()` chaining mirrors the nesting of the table
//! - Validation runs once at construction; resolution never re-checks
//! - All errors are construction errors; matching itself cannot fail

use thiserror::Error;

use crate::routing::pattern::Pattern;
use crate::views::View;

/// Errors detected while validating a route tree.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TreeError {
    /// Two siblings would match the same segments.
    #[error("duplicate sibling pattern: {0}")]
    DuplicateSibling(String),

    /// An index pattern is a leaf by definition.
    #[error("index route cannot have children")]
    IndexWithChildren,

    /// A pathless layout exists only to wrap children.
    #[error("layout route has no children")]
    EmptyLayout,
}

/// One node of the declarative route tree.
#[derive(Debug, Clone)]
pub struct RouteNode {
    pattern: Pattern,
    view: View,
    children: Vec<RouteNode>,
}

impl RouteNode {
    /// A node matching path notation: a literal segment, `:name` for a
    /// param, or `*` for the catch-all.
    pub fn path(pattern: &str, view: View) -> Self {
        Self {
            pattern: Pattern::parse(pattern),
            view,
            children: Vec::new(),
        }
    }

    /// An index node: renders when the parent's path is matched exactly.
    pub fn index(view: View) -> Self {
        Self {
            pattern: Pattern::Index,
            view,
            children: Vec::new(),
        }
    }

    /// A pathless layout node wrapping its children.
    pub fn layout(view: View) -> Self {
        Self {
            pattern: Pattern::Layout,
            view,
            children: Vec::new(),
        }
    }

    /// Nest a child route under this node.
    pub fn child(mut self, node: RouteNode) -> Self {
        self.children.push(node);
        self
    }

    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn children(&self) -> &[RouteNode] {
        &self.children
    }
}

/// A validated, immutable route table.
///
/// Construction is the only fallible step; afterwards the table is
/// shared read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct RouteTable {
    roots: Vec<RouteNode>,
}

impl RouteTable {
    /// Validate and freeze a set of top-level routes.
    pub fn new(roots: Vec<RouteNode>) -> Result<Self, TreeError> {
        validate_siblings(&roots)?;
        for root in &roots {
            validate_node(root)?;
        }
        Ok(Self { roots })
    }

    pub fn roots(&self) -> &[RouteNode] {
        &self.roots
    }
}

fn validate_node(node: &RouteNode) -> Result<(), TreeError> {
    match node.pattern() {
        Pattern::Index if !node.children().is_empty() => {
            return Err(TreeError::IndexWithChildren);
        }
        Pattern::Layout if node.children().is_empty() => {
            return Err(TreeError::EmptyLayout);
        }
        _ => {}
    }

    validate_siblings(node.children())?;
    for child in node.children() {
        validate_node(child)?;
    }
    Ok(())
}

fn validate_siblings(nodes: &[RouteNode]) -> Result<(), TreeError> {
    for (i, node) in nodes.iter().enumerate() {
        for other in &nodes[i + 1..] {
            if node.pattern().conflicts_with(other.pattern()) {
                return Err(TreeError::DuplicateSibling(other.pattern().to_string()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_table_builds() {
        let table = RouteTable::new(vec![RouteNode::layout(View::Layout)
            .child(RouteNode::index(View::Home))
            .child(
                RouteNode::path("users", View::Users)
                    .child(RouteNode::path(":userId", View::User)),
            )]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_duplicate_static_siblings_rejected() {
        let result = RouteTable::new(vec![RouteNode::layout(View::Layout)
            .child(RouteNode::path("users", View::Users))
            .child(RouteNode::path("users", View::Home))]);
        assert_eq!(
            result.err(),
            Some(TreeError::DuplicateSibling("users".to_string()))
        );
    }

    #[test]
    fn test_param_siblings_rejected() {
        let result = RouteTable::new(vec![RouteNode::path("users", View::Users)
            .child(RouteNode::path(":userId", View::User))
            .child(RouteNode::path(":other", View::User))]);
        assert!(matches!(result, Err(TreeError::DuplicateSibling(_))));
    }

    #[test]
    fn test_index_with_children_rejected() {
        let result = RouteTable::new(vec![
            RouteNode::index(View::Home).child(RouteNode::path("x", View::About))
        ]);
        assert_eq!(result.err(), Some(TreeError::IndexWithChildren));
    }

    #[test]
    fn test_empty_layout_rejected() {
        let result = RouteTable::new(vec![RouteNode::layout(View::Layout)]);
        assert_eq!(result.err(), Some(TreeError::EmptyLayout));
    }
}
