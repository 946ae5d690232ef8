//! Orchestration need detection
//!
//! Heuristic proxy for "the entry method branches or assembles its
//! response in several steps". Errs towards adding the facade.

use crate::features::classification::domain::{ClassFacts, UsePattern};
use crate::features::parsing::domain::{SyntaxKind, SyntaxNode};
use crate::features::parsing::visitor::{traverse, Visitor};
use crate::shared::constants::usage;

/// Accumulates flags over one method subtree
#[derive(Default)]
struct UsePatternVisitor {
    pattern: UsePattern,
}

impl<'t> Visitor<'t, SyntaxNode> for UsePatternVisitor {
    fn visit(&mut self, node: &'t SyntaxNode) {
        match &node.kind {
            SyntaxKind::IfStmt => {
                tracing::debug!("if statement at line {}", node.span.start_line);
                self.pattern.has_conditional = true;
            }
            SyntaxKind::MethodCall { receiver, member } => {
                let receiver = receiver.as_deref();
                if member == usage::RESPONSE_WRITE_METHOD && receiver == Some(usage::RESPONSE_RECEIVER)
                {
                    self.pattern.response_write_count += 1;
                    tracing::debug!(
                        "response write at line {}, total {}",
                        node.span.start_line,
                        self.pattern.response_write_count
                    );
                }
                if receiver == Some(usage::CONTEXT_RECEIVER) {
                    tracing::debug!("command context call at line {}", node.span.start_line);
                    self.pattern.uses_execution_context = true;
                }
            }
            _ => {}
        }
    }
}

/// Flags for a single method subtree
pub fn detect_use_pattern(method: &SyntaxNode) -> UsePattern {
    let mut visitor = UsePatternVisitor::default();
    traverse(method, &mut visitor);
    visitor.pattern
}

/// Flags over every entry method of the class
///
/// A class without `performExecute` yields the empty pattern.
pub fn detect_entry_pattern(facts: &ClassFacts<'_>) -> UsePattern {
    facts
        .entry_methods()
        .map(|m| detect_use_pattern(m.node))
        .fold(UsePattern::default(), UsePattern::merge)
}

pub fn needs_orchestration(facts: &ClassFacts<'_>) -> bool {
    detect_entry_pattern(facts).needs_orchestration()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::classification::infrastructure::extract_facts;
    use crate::features::parsing::infrastructure::JavaParser;
    use crate::features::parsing::ports::Parser;

    fn pattern_of(body: &str) -> UsePattern {
        let source = format!(
            "class Cmd extends ControllerCommandImpl {{\n    public void performExecute() throws ECException {{\n{}\n    }}\n}}",
            body
        );
        let tree = JavaParser::new().parse(&source, "Cmd.java").unwrap();
        let facts = extract_facts(&tree).unwrap();
        detect_entry_pattern(&facts)
    }

    #[test]
    fn test_nested_if_detected() {
        let pattern = pattern_of(
            r#"
        try {
            for (int i = 0; i < 3; i++) {
                if (i > 1) { break; }
            }
        } catch (Exception e) {}
"#,
        );
        assert!(pattern.has_conditional);
        assert!(pattern.needs_orchestration());
    }

    #[test]
    fn test_single_response_write_is_direct() {
        let pattern = pattern_of(r#"        resp.put("status", "ok");"#);
        assert_eq!(pattern.response_write_count, 1);
        assert!(!pattern.needs_orchestration());
    }

    #[test]
    fn test_two_response_writes_need_facade() {
        let pattern = pattern_of(
            r#"
        resp.put("status", "ok");
        resp.put("orderId", orderId);
"#,
        );
        assert_eq!(pattern.response_write_count, 2);
        assert!(pattern.needs_orchestration());
    }

    #[test]
    fn test_put_on_other_receiver_ignored() {
        let pattern = pattern_of(
            r#"
        cache.put("a", 1);
        this.resp.put("b", 2);
        response.put("c", 3);
"#,
        );
        assert_eq!(pattern.response_write_count, 0);
        assert!(!pattern.needs_orchestration());
    }

    #[test]
    fn test_command_context_call_detected() {
        let pattern = pattern_of(r#"        Integer storeId = commandContext.getStoreId();"#);
        assert!(pattern.uses_execution_context);
        assert!(pattern.needs_orchestration());
    }

    #[test]
    fn test_getter_for_context_not_detected() {
        let pattern = pattern_of(r#"        Integer storeId = getCommandContext().getStoreId();"#);
        assert!(!pattern.uses_execution_context);
    }

    #[test]
    fn test_other_methods_are_not_inspected() {
        let source = r#"
class Cmd extends ControllerCommandImpl {
    public void validateParameters() {
        if (orderId == null) { throw new IllegalArgumentException(); }
    }
    public void performExecute() {}
}
"#;
        let tree = JavaParser::new().parse(source, "Cmd.java").unwrap();
        let facts = extract_facts(&tree).unwrap();
        assert!(!needs_orchestration(&facts));
    }

    #[test]
    fn test_missing_entry_method_is_vacuously_direct() {
        let source = "class Cmd implements ControllerCommand { public void run() { if (true) {} } }";
        let tree = JavaParser::new().parse(source, "Cmd.java").unwrap();
        let facts = extract_facts(&tree).unwrap();
        assert_eq!(detect_entry_pattern(&facts), UsePattern::default());
    }
}
