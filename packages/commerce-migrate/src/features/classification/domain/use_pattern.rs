//! Usage flags computed from the entry method

use serde::Serialize;

use crate::shared::constants::usage::MAX_DIRECT_RESPONSE_WRITES;

/// What the entry method does, as seen by three structural probes
///
/// Recomputed for every class; never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct UsePattern {
    /// An `if` statement appears anywhere in the method
    pub has_conditional: bool,

    /// Number of `resp.put(..)` calls
    pub response_write_count: usize,

    /// A call is made on `commandContext`
    pub uses_execution_context: bool,
}

impl UsePattern {
    pub fn multiple_response_writes(&self) -> bool {
        self.response_write_count > MAX_DIRECT_RESPONSE_WRITES
    }

    /// Whether a facade should sit between controller and service
    pub fn needs_orchestration(&self) -> bool {
        self.has_conditional || self.multiple_response_writes() || self.uses_execution_context
    }

    /// Combine the findings of two methods
    pub fn merge(self, other: UsePattern) -> UsePattern {
        UsePattern {
            has_conditional: self.has_conditional || other.has_conditional,
            response_write_count: self.response_write_count + other.response_write_count,
            uses_execution_context: self.uses_execution_context || other.uses_execution_context,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_needs_nothing() {
        assert!(!UsePattern::default().needs_orchestration());
    }

    #[test]
    fn test_single_write_is_direct() {
        let pattern = UsePattern {
            response_write_count: 1,
            ..Default::default()
        };
        assert!(!pattern.needs_orchestration());
    }

    #[test]
    fn test_each_flag_alone_triggers_orchestration() {
        let conditional = UsePattern {
            has_conditional: true,
            ..Default::default()
        };
        let writes = UsePattern {
            response_write_count: 2,
            ..Default::default()
        };
        let context = UsePattern {
            uses_execution_context: true,
            ..Default::default()
        };
        assert!(conditional.needs_orchestration());
        assert!(writes.needs_orchestration());
        assert!(context.needs_orchestration());
    }

    #[test]
    fn test_merge_accumulates_writes() {
        let one = UsePattern {
            response_write_count: 1,
            ..Default::default()
        };
        let merged = one.merge(one);
        assert_eq!(merged.response_write_count, 2);
        assert!(merged.needs_orchestration());
    }
}
