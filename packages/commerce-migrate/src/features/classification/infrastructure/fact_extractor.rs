//! Class fact extraction
//!
//! The primary class is the first class declaration in pre-order. Its
//! methods and fields are collected from its whole subtree, nested classes
//! included.

use super::command_rule::classify;
use crate::features::classification::domain::{ClassFacts, MethodFacts};
use crate::features::parsing::domain::{ParsedTree, SyntaxKind, SyntaxNode};
use crate::features::parsing::visitor::{traverse, Visitor};

/// Finds the first class declaration
#[derive(Default)]
struct FirstClass<'t> {
    found: Option<&'t SyntaxNode>,
}

impl<'t> Visitor<'t, SyntaxNode> for FirstClass<'t> {
    fn visit(&mut self, node: &'t SyntaxNode) {
        if self.found.is_none() && matches!(node.kind, SyntaxKind::ClassDecl { .. }) {
            self.found = Some(node);
        }
    }
}

/// Collects method and field declarations
#[derive(Default)]
struct MemberCollector<'t> {
    methods: Vec<MethodFacts<'t>>,
    field_names: Vec<String>,
}

impl<'t> Visitor<'t, SyntaxNode> for MemberCollector<'t> {
    fn visit(&mut self, node: &'t SyntaxNode) {
        match &node.kind {
            SyntaxKind::MethodDecl { name } => self.methods.push(MethodFacts::new(name, node)),
            SyntaxKind::FieldDecl { names } => self.field_names.extend(names.iter().cloned()),
            _ => {}
        }
    }
}

/// Extract facts for the primary class, `None` when the unit has no class
pub fn extract_facts(tree: &ParsedTree) -> Option<ClassFacts<'_>> {
    let mut first = FirstClass::default();
    traverse(&tree.root, &mut first);
    let class_node = first.found?;

    let class_name = class_node.kind.declared_name()?.to_string();
    if class_name.is_empty() {
        return None;
    }

    let mut members = MemberCollector::default();
    traverse(class_node, &mut members);

    let is_command_family = classify(&class_node.kind);
    tracing::debug!(
        "{}: class {} ({} methods, {} fields, command={})",
        tree.file_path,
        class_name,
        members.methods.len(),
        members.field_names.len(),
        is_command_family
    );

    Some(ClassFacts {
        class_name,
        methods: members.methods,
        field_names: members.field_names,
        is_command_family,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::parsing::infrastructure::JavaParser;
    use crate::features::parsing::ports::Parser;

    fn parse(source: &str) -> ParsedTree {
        JavaParser::new().parse(source, "Test.java").unwrap()
    }

    #[test]
    fn test_extract_members_in_declaration_order() {
        let tree = parse(
            r#"
package com.acme.commands;

import com.ibm.commerce.command.ControllerCommandImpl;

public class OrderCmd extends ControllerCommandImpl {
    private String orderId;
    private String userId, paymentMethod;

    public void validateParameters() {}

    public void performExecute() {
        String local = "x";
    }
}
"#,
        );
        let facts = extract_facts(&tree).unwrap();

        assert_eq!(facts.class_name, "OrderCmd");
        assert!(facts.is_command_family);
        assert_eq!(facts.field_names, vec!["orderId", "userId", "paymentMethod"]);
        assert_eq!(facts.method_names(), vec!["validateParameters", "performExecute"]);
    }

    #[test]
    fn test_duplicate_field_names_preserved() {
        let tree = parse(
            r#"
class Dup implements ControllerCommand {
    String orderId;
    class Inner { String orderId; }
}
"#,
        );
        let facts = extract_facts(&tree).unwrap();
        assert_eq!(facts.field_names, vec!["orderId", "orderId"]);
    }

    #[test]
    fn test_first_class_is_primary() {
        let tree = parse(
            r#"
class First implements Runnable { public void run() {} }
class Second extends ControllerCommandImpl {}
"#,
        );
        let facts = extract_facts(&tree).unwrap();
        assert_eq!(facts.class_name, "First");
        assert!(!facts.is_command_family);
    }

    #[test]
    fn test_interface_only_unit_has_no_class() {
        let tree = parse("public interface ControllerCommand { void performExecute(); }");
        assert!(extract_facts(&tree).is_none());
    }

    #[test]
    fn test_constructor_is_not_a_method() {
        let tree = parse("class A extends ControllerCommandImpl { A() {} void performExecute() {} }");
        let facts = extract_facts(&tree).unwrap();
        assert_eq!(facts.method_names(), vec!["performExecute"]);
    }
}
