//! Tree-sitter Utility Functions
//!
//! Common helpers for reading tree-sitter Java nodes during conversion to
//! the domain tree.

use crate::shared::models::Span;
use tree_sitter::Node;

// ═══════════════════════════════════════════════════════════════════════════
// Node Traversal Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Find a direct named child node by kind
#[inline]
pub fn find_child_by_kind<'a>(node: &Node<'a>, kind: &str) -> Option<Node<'a>> {
    let mut cursor = node.walk();
    let found = node.named_children(&mut cursor).find(|c| c.kind() == kind);
    found
}

/// Named children in declaration order
pub fn named_children<'a>(node: &Node<'a>) -> Vec<Node<'a>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Text Extraction Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Extract text content from a node
///
/// Returns an empty string when the node range does not fall on char
/// boundaries (only possible for ERROR nodes).
#[inline]
pub fn extract_node_text<'a>(node: &Node, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or("")
}

/// Extract text content from a node as owned String
#[inline]
pub fn extract_node_text_owned(node: &Node, source: &str) -> String {
    extract_node_text(node, source).to_string()
}

/// Text of a named field child (`name`, `object`, ...)
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| extract_node_text_owned(&child, source))
}

/// Written name of a Java type reference, type arguments removed
///
/// `Handler<Order>` → `Handler`. Qualification is kept as written:
/// `com.ibm.commerce.command.ControllerCommand` stays qualified, so it never
/// equals the bare `ControllerCommand`.
pub fn written_type_name(node: &Node, source: &str) -> String {
    let text = extract_node_text(node, source);
    let raw = text.split('<').next().unwrap_or(text);
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

// ═══════════════════════════════════════════════════════════════════════════
// Span Conversion Utilities
// ═══════════════════════════════════════════════════════════════════════════

/// Convert tree-sitter node to Span (1-indexed lines)
#[inline]
pub fn node_to_span(node: &Node) -> Span {
    let start_pos = node.start_position();
    let end_pos = node.end_position();

    Span::new(
        start_pos.row as u32 + 1, // 1-indexed
        start_pos.column as u32,
        end_pos.row as u32 + 1, // 1-indexed
        end_pos.column as u32,
    )
}

// ═══════════════════════════════════════════════════════════════════════════
// Tests
// ═══════════════════════════════════════════════════════════════════════════
