//! Classification infrastructure - tree inspection rules

mod command_rule;
mod fact_extractor;
mod orchestration;

pub use command_rule::{classify, is_command_family};
pub use fact_extractor::extract_facts;
pub use orchestration::{detect_entry_pattern, detect_use_pattern, needs_orchestration};
