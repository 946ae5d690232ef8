//! Tree-sitter Java parser implementation
//!
//! This is where the tree-sitter dependency lives. The concrete tree is
//! converted once into the owned `SyntaxNode` tree; only named nodes survive
//! the conversion.

use tree_sitter::{Node, Parser as TSParser, Tree};

use crate::features::parsing::domain::{ParseError, ParsedTree, SyntaxKind, SyntaxNode};
use crate::features::parsing::ports::Parser;
use crate::shared::constants::output::SOURCE_EXTENSION;
use crate::shared::models::Location;
use crate::shared::utils::tree_sitter::{
    extract_node_text, extract_node_text_owned, field_text, find_child_by_kind, named_children,
    node_to_span, written_type_name,
};

/// Tree-sitter based Java parser
#[derive(Debug, Default, Clone, Copy)]
pub struct JavaParser;

/// A tree-sitter node whose children are still being converted
struct PendingNode<'tree> {
    node: Node<'tree>,
    remaining: std::vec::IntoIter<Node<'tree>>,
    converted: Vec<SyntaxNode>,
}

impl<'tree> PendingNode<'tree> {
    fn open(node: Node<'tree>) -> Self {
        let children: Vec<Node<'tree>> = named_children(&node)
            .into_iter()
            .filter(|c| !c.is_extra()) // Skip comments
            .collect();
        Self {
            node,
            remaining: children.into_iter(),
            converted: Vec::new(),
        }
    }
}

impl JavaParser {
    pub fn new() -> Self {
        Self
    }

    /// Convert tree-sitter tree to our domain model
    fn convert_tree(&self, tree: &Tree, source: &str, file_path: &str) -> ParsedTree {
        let root = tree.root_node();
        let converted = self
            .convert_subtree(root, source)
            .unwrap_or_else(|| SyntaxNode::new(SyntaxKind::CompilationUnit, node_to_span(&root)));
        ParsedTree::new(converted, file_path)
    }

    /// Convert a tree-sitter subtree to SyntaxNode, post-order on an explicit
    /// stack so expression nesting cannot exhaust the thread stack
    fn convert_subtree(&self, root: Node, source: &str) -> Option<SyntaxNode> {
        let mut stack = vec![PendingNode::open(root)];

        while let Some(top) = stack.last_mut() {
            if let Some(child) = top.remaining.next() {
                stack.push(PendingNode::open(child));
                continue;
            }

            let finished = stack.pop()?;
            let converted = self.finish_node(finished, source);
            match stack.last_mut() {
                Some(parent) => parent.converted.push(converted),
                None => return Some(converted),
            }
        }
        None
    }

    /// Build the SyntaxNode once all children are converted
    ///
    /// Only lexical tokens (no children at all in the concrete tree) carry
    /// text; an empty block keeps an empty child list instead.
    fn finish_node(&self, pending: PendingNode<'_>, source: &str) -> SyntaxNode {
        let node = pending.node;
        let converted = SyntaxNode::new(self.map_node_kind(&node, source), node_to_span(&node));
        if node.child_count() == 0 {
            converted.with_text(extract_node_text_owned(&node, source))
        } else {
            converted.with_children(pending.converted)
        }
    }

    /// Map a tree-sitter node to our SyntaxKind
    fn map_node_kind(&self, node: &Node, source: &str) -> SyntaxKind {
        match node.kind() {
            "program" => SyntaxKind::CompilationUnit,
            "class_declaration" => SyntaxKind::ClassDecl {
                name: field_text(node, "name", source).unwrap_or_default(),
                superclass: node
                    .child_by_field_name("superclass")
                    .and_then(|clause| clause.named_child(0))
                    .map(|ty| written_type_name(&ty, source)),
                interfaces: self.interface_names(node, source),
            },
            "method_declaration" => SyntaxKind::MethodDecl {
                name: field_text(node, "name", source).unwrap_or_default(),
            },
            "field_declaration" => SyntaxKind::FieldDecl {
                names: self.declarator_names(node, source),
            },
            "if_statement" => SyntaxKind::IfStmt,
            "method_invocation" => SyntaxKind::MethodCall {
                receiver: self.receiver_name(node, source),
                member: field_text(node, "name", source).unwrap_or_default(),
            },
            other => SyntaxKind::Other(other.to_string()),
        }
    }

    /// Type names listed in `implements`, as written
    fn interface_names(&self, class_node: &Node, source: &str) -> Vec<String> {
        let Some(clause) = class_node.child_by_field_name("interfaces") else {
            return Vec::new();
        };
        // super_interfaces -> type_list -> types
        let list = find_child_by_kind(&clause, "type_list").unwrap_or(clause);
        named_children(&list)
            .iter()
            .map(|ty| written_type_name(ty, source))
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// One name per `variable_declarator`, in declaration order
    fn declarator_names(&self, field_node: &Node, source: &str) -> Vec<String> {
        let mut cursor = field_node.walk();
        let names: Vec<String> = field_node
            .children_by_field_name("declarator", &mut cursor)
            .filter_map(|declarator| field_text(&declarator, "name", source))
            .filter(|name| !name.is_empty())
            .collect();
        names
    }

    /// Literal receiver of a call when it is a plain name path
    ///
    /// `resp.put(..)` → `resp`, `ctx.resp.put(..)` → `ctx.resp`,
    /// `getResp().put(..)` → none.
    fn receiver_name(&self, call_node: &Node, source: &str) -> Option<String> {
        let object = call_node.child_by_field_name("object")?;
        match object.kind() {
            "identifier" | "field_access" => {
                let text: String = extract_node_text(&object, source)
                    .chars()
                    .filter(|c| !c.is_whitespace())
                    .collect();
                Some(text)
            }
            _ => None,
        }
    }

    /// Locate the first ERROR or MISSING node in pre-order
    ///
    /// Only subtrees that report an error are entered.
    fn first_error(&self, root: Node, source: &str) -> Option<ParseError> {
        let mut pending = vec![root];

        while let Some(node) = pending.pop() {
            if node.is_missing() {
                return Some(ParseError::new(
                    format!("missing \"{}\"", node.kind()),
                    node_to_span(&node).start(),
                ));
            }
            if node.is_error() {
                let snippet: String = extract_node_text(&node, source)
                    .lines()
                    .next()
                    .unwrap_or("")
                    .chars()
                    .take(40)
                    .collect();
                return Some(ParseError::new(
                    format!("unexpected syntax `{}`", snippet.trim()),
                    node_to_span(&node).start(),
                ));
            }
            if !node.has_error() {
                continue;
            }

            pending.extend((0..node.child_count()).rev().filter_map(|i| node.child(i)));
        }
        None
    }
}

impl Parser for JavaParser {
    fn parse(&self, source: &str, file_path: &str) -> Result<ParsedTree, ParseError> {
        let mut parser = TSParser::new();
        parser
            .set_language(&tree_sitter_java::language())
            .map_err(|e| {
                ParseError::new(format!("Failed to set language: {}", e), Location::new(0, 0))
            })?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| ParseError::new("Failed to parse source code", Location::new(0, 0)))?;

        let root = tree.root_node();
        if root.has_error() {
            let err = self.first_error(root, source).unwrap_or_else(|| {
                ParseError::new("syntax error", node_to_span(&root).start())
            });
            tracing::debug!("{}: {}", file_path, err);
            return Err(err);
        }

        Ok(self.convert_tree(&tree, source, file_path))
    }

    fn supports_extension(&self, ext: &str) -> bool {
        ext.eq_ignore_ascii_case(SOURCE_EXTENSION)
    }

    fn language_name(&self) -> &'static str {
        "java"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::visitor::traverse;

    fn parse(source: &str) -> Result<ParsedTree, ParseError> {
        JavaParser::new().parse(source, "Test.java")
    }

    fn class_kind(tree: &ParsedTree) -> &SyntaxKind {
        &tree
            .root
            .find_child(|k| matches!(k, SyntaxKind::ClassDecl { .. }))
            .unwrap()
            .kind
    }

    #[test]
    fn test_parse_class_header() {
        let tree = parse(
            "public class OrderCmd extends com.acme.BaseCmd implements ControllerCommand, java.io.Serializable {}",
        )
        .unwrap();

        assert_eq!(tree.root.kind, SyntaxKind::CompilationUnit);
        assert_eq!(
            class_kind(&tree),
            &SyntaxKind::ClassDecl {
                name: "OrderCmd".into(),
                superclass: Some("com.acme.BaseCmd".into()),
                interfaces: vec!["ControllerCommand".into(), "java.io.Serializable".into()],
            }
        );
    }

    #[test]
    fn test_parse_generic_interface() {
        let tree = parse("class A implements Handler<Order> {}").unwrap();
        match class_kind(&tree) {
            SyntaxKind::ClassDecl { interfaces, .. } => assert_eq!(interfaces, &vec!["Handler".to_string()]),
            other => panic!("unexpected kind {:?}", other),
        }
    }

    #[test]
    fn test_parse_field_declarators() {
        let tree = parse("class A { private String orderId, userId; int count = 1; }").unwrap();
        let class = tree
            .root
            .find_child(|k| matches!(k, SyntaxKind::ClassDecl { .. }))
            .unwrap();
        let body = class
            .find_child(|k| matches!(k, SyntaxKind::Other(raw) if raw == "class_body"))
            .unwrap();
        let fields: Vec<_> = body
            .children
            .iter()
            .filter_map(|c| match &c.kind {
                SyntaxKind::FieldDecl { names } => Some(names.clone()),
                _ => None,
            })
            .collect();

        assert_eq!(
            fields,
            vec![
                vec!["orderId".to_string(), "userId".to_string()],
                vec!["count".to_string()]
            ]
        );
    }

    #[test]
    fn test_parse_receivers() {
        let source = r#"
class A {
    void f() {
        resp.put("a", 1);
        this.resp.put("b", 2);
        helper().put("c", 3);
        log("d");
    }
}
"#;
        let tree = parse(source).unwrap();
        let mut calls = Vec::new();
        collect_calls(&tree.root, &mut calls);

        assert_eq!(
            calls,
            vec![
                (Some("resp".to_string()), "put".to_string()),
                (Some("this.resp".to_string()), "put".to_string()),
                (None, "put".to_string()),
                (None, "helper".to_string()),
                (None, "log".to_string()),
            ]
        );
    }

    fn collect_calls(node: &SyntaxNode, out: &mut Vec<(Option<String>, String)>) {
        if let SyntaxKind::MethodCall { receiver, member } = &node.kind {
            out.push((receiver.clone(), member.clone()));
        }
        for child in &node.children {
            collect_calls(child, out);
        }
    }

    #[test]
    fn test_unbalanced_braces_report_location() {
        let err = parse("public class Broken {\n    void f() {\n        int x = 1;\n").unwrap_err();
        assert!(err.location.line >= 1);
        assert!(err.to_string().contains(" at "));
    }

    #[test]
    fn test_empty_body_is_structural() {
        let tree = parse("class A {}").unwrap();
        let class = tree
            .root
            .find_child(|k| matches!(k, SyntaxKind::ClassDecl { .. }))
            .unwrap();

        let body = class
            .find_child(|k| matches!(k, SyntaxKind::Other(raw) if raw == "class_body"))
            .unwrap();
        assert!(body.children.is_empty());
        assert!(body.text.is_none());
        assert!(!body.is_scalar());

        let name = class
            .find_child(|k| matches!(k, SyntaxKind::Other(raw) if raw == "identifier"))
            .unwrap();
        assert!(name.is_scalar());
        assert_eq!(name.text.as_deref(), Some("A"));
    }

    #[test]
    fn test_deep_concatenation_converts() {
        let operands = vec!["\"a\""; 20_000].join(" + ");
        let source = format!("class A {{ void f() {{ String s = {operands}; }} }}");
        let tree = parse(&source).unwrap();

        let mut binary = 0usize;
        traverse(&tree.root, &mut |n: &SyntaxNode| {
            if matches!(&n.kind, SyntaxKind::Other(raw) if raw == "binary_expression") {
                binary += 1;
            }
        });
        assert_eq!(binary, 19_999);
    }

    #[test]
    fn test_deep_concatenation_with_error_is_located() {
        let operands = vec!["\"a\""; 20_000].join(" + ");
        let source = format!("class A {{ void f() {{ String s = {operands} + ; }} }}");
        let err = parse(&source).unwrap_err();
        assert_eq!(err.location.line, 1);
    }

    #[test]
    fn test_comments_are_dropped() {
        let tree = parse("// header\nclass A { /* note */ }").unwrap();
        assert!(tree
            .root
            .find_child(|k| matches!(k, SyntaxKind::Other(raw) if raw.contains("comment")))
            .is_none());
    }

    #[test]
    fn test_supports_extension_case_insensitive() {
        let parser = JavaParser::new();
        assert!(parser.supports_extension("java"));
        assert!(parser.supports_extension("JAVA"));
        assert!(!parser.supports_extension("jsp"));
    }
}
