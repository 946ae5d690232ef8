//! Classification Feature
//!
//! Decides whether a parsed class is a legacy command and whether its entry
//! method warrants a facade.
//!
//! ## Structure
//! - `domain/` - ClassFacts, MethodFacts, UsePattern
//! - `infrastructure/` - fact extraction, command-family rule, orchestration probes

pub mod domain;
pub mod infrastructure;

pub use domain::{ClassFacts, MethodFacts, UsePattern};
pub use infrastructure::{
    classify, detect_entry_pattern, detect_use_pattern, extract_facts, needs_orchestration,
};
