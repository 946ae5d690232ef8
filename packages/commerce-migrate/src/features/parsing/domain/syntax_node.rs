//! Java syntax node representation
//!
//! Owned view of the tree-sitter tree restricted to the node kinds the
//! classifier cares about. Everything else is `Other` and only matters as a
//! path to deeper nodes.

use crate::shared::models::Span;

/// Syntax node kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyntaxKind {
    /// Root of a parsed file
    CompilationUnit,

    /// `class Name extends Base implements A, B`
    ///
    /// Type references hold the written name without type arguments.
    ClassDecl {
        name: String,
        superclass: Option<String>,
        interfaces: Vec<String>,
    },

    /// Method declaration (constructors are `Other`)
    MethodDecl { name: String },

    /// Field declaration, one name per declarator
    FieldDecl { names: Vec<String> },

    /// `if` statement
    IfStmt,

    /// `receiver.member(..)` or `member(..)`
    MethodCall {
        receiver: Option<String>,
        member: String,
    },

    /// Any other named node, tagged with its grammar kind
    Other(String),
}

impl SyntaxKind {
    /// Declared name of a class or method
    pub fn declared_name(&self) -> Option<&str> {
        match self {
            SyntaxKind::ClassDecl { name, .. } | SyntaxKind::MethodDecl { name } => Some(name),
            _ => None,
        }
    }

    /// Short label for log output
    pub fn label(&self) -> &str {
        match self {
            SyntaxKind::CompilationUnit => "compilation_unit",
            SyntaxKind::ClassDecl { .. } => "class_declaration",
            SyntaxKind::MethodDecl { .. } => "method_declaration",
            SyntaxKind::FieldDecl { .. } => "field_declaration",
            SyntaxKind::IfStmt => "if_statement",
            SyntaxKind::MethodCall { .. } => "method_invocation",
            SyntaxKind::Other(raw) => raw,
        }
    }
}

/// Java syntax node
///
/// Trees can be very deep (a long `"a" + "b" + ...` chain nests once per
/// operand), so teardown walks the children iteratively.
#[derive(Debug)]
pub struct SyntaxNode {
    pub kind: SyntaxKind,
    pub span: Span,

    /// Token text, set only on lexical tokens (identifiers, literals,
    /// keywords like `this`)
    pub text: Option<String>,

    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    pub fn new(kind: SyntaxKind, span: Span) -> Self {
        Self {
            kind,
            span,
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        self.children = children;
        self
    }

    /// Lexical token without a child relation
    ///
    /// A structural node that happens to be empty (`{}`) is not a scalar.
    pub fn is_scalar(&self) -> bool {
        self.text.is_some() && self.children.is_empty()
    }

    /// Find first child matching the predicate
    pub fn find_child(&self, pred: impl Fn(&SyntaxKind) -> bool) -> Option<&SyntaxNode> {
        self.children.iter().find(|c| pred(&c.kind))
    }
}

impl Drop for SyntaxNode {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
