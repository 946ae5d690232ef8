//! Facts extracted from one class declaration
//!
//! The only hand-off between classification and emission. Built once per
//! class, never mutated afterwards.

use crate::features::parsing::domain::SyntaxNode;
use crate::shared::constants::command;

/// A method declaration, borrowed from the parsed tree
#[derive(Debug, Clone, Copy)]
pub struct MethodFacts<'t> {
    pub name: &'t str,
    pub node: &'t SyntaxNode,
}

impl<'t> MethodFacts<'t> {
    pub fn new(name: &'t str, node: &'t SyntaxNode) -> Self {
        Self { name, node }
    }

    /// Whether this is the legacy request-handling entry method
    pub fn is_entry(&self) -> bool {
        self.name == command::ENTRY_METHOD
    }
}

/// Summary of the primary class of a source unit
#[derive(Debug, Clone)]
pub struct ClassFacts<'t> {
    pub class_name: String,

    /// Declaration order
    pub methods: Vec<MethodFacts<'t>>,

    /// Declaration order, duplicates preserved
    pub field_names: Vec<String>,

    pub is_command_family: bool,
}

impl<'t> ClassFacts<'t> {
    /// Every `performExecute` overload
    pub fn entry_methods(&self) -> impl Iterator<Item = &MethodFacts<'t>> {
        self.methods.iter().filter(|m| m.is_entry())
    }

    pub fn method_names(&self) -> Vec<&'t str> {
        self.methods.iter().map(|m| m.name).collect()
    }
}
