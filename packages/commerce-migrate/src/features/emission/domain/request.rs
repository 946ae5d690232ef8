//! Emission input

use crate::features::classification::domain::ClassFacts;
use crate::shared::constants::{command, output};

/// The four template inputs plus the target package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmitRequest {
    pub class_name: String,

    /// Method names in declaration order
    pub method_names: Vec<String>,

    /// Declaration order, duplicates preserved
    pub field_names: Vec<String>,

    /// Insert a facade between controller and service
    pub use_orchestration: bool,

    /// Package of generated components, used in imports and bean classes
    pub base_package: String,
}

impl EmitRequest {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            method_names: Vec::new(),
            field_names: Vec::new(),
            use_orchestration: false,
            base_package: output::DEFAULT_BASE_PACKAGE.to_string(),
        }
    }

    pub fn from_facts(facts: &ClassFacts<'_>, use_orchestration: bool) -> Self {
        Self {
            class_name: facts.class_name.clone(),
            method_names: facts.method_names().into_iter().map(String::from).collect(),
            field_names: facts.field_names.clone(),
            use_orchestration,
            base_package: output::DEFAULT_BASE_PACKAGE.to_string(),
        }
    }

    pub fn with_methods<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.method_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_orchestration(mut self, enabled: bool) -> Self {
        self.use_orchestration = enabled;
        self
    }

    pub fn with_base_package(mut self, package: impl Into<String>) -> Self {
        self.base_package = package.into();
        self
    }

    /// Lower-cased class name, used for routes, bean ids and variables
    pub fn lower_name(&self) -> String {
        self.class_name.to_lowercase()
    }

    /// Number of controller handlers to emit
    pub fn entry_count(&self) -> usize {
        self.method_names
            .iter()
            .filter(|m| m.as_str() == command::ENTRY_METHOD)
            .count()
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field_names.iter().any(|f| f == name)
    }
}
