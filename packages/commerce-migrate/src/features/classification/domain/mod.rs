//! Classification domain models

mod class_facts;
mod use_pattern;

pub use class_facts::{ClassFacts, MethodFacts};
pub use use_pattern::UsePattern;
