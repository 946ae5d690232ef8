//! Per-unit state machine
//!
//! ```text
//! Start -> Rejected                                     (unreadable input)
//! Start -> ParseFailed -> Rejected
//! Start -> ParseOk -> NoClass -> Rejected
//! Start -> ParseOk -> ClassFound -> Rejected            (not a command)
//! Start -> ParseOk -> ClassFound -> Classified -> Emitted -> Written
//! ```
//!
//! A unit passes through once; there are no retries. `Classified` and
//! `Emitted` may also end in `Rejected` on generation or write faults.

use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineState {
    Start,
    ParseFailed,
    ParseOk,
    NoClass,
    ClassFound,
    Classified,
    Emitted,
    Written,
    Rejected,
}

impl PipelineState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, PipelineState::Rejected | PipelineState::Written)
    }

    pub fn can_transition_to(&self, next: PipelineState) -> bool {
        use PipelineState::*;
        matches!(
            (self, next),
            (Start, ParseFailed)
                | (Start, ParseOk)
                | (Start, Rejected)
                | (ParseFailed, Rejected)
                | (ParseOk, NoClass)
                | (ParseOk, ClassFound)
                | (NoClass, Rejected)
                | (ClassFound, Rejected)
                | (ClassFound, Classified)
                | (Classified, Emitted)
                | (Classified, Rejected)
                | (Emitted, Written)
                | (Emitted, Rejected)
        )
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// States visited by one unit, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateTrace {
    unit: String,
    states: Vec<PipelineState>,
}

impl StateTrace {
    pub fn new(unit: impl Into<String>) -> Self {
        Self {
            unit: unit.into(),
            states: vec![PipelineState::Start],
        }
    }

    pub fn current(&self) -> PipelineState {
        self.states
            .last()
            .copied()
            .unwrap_or(PipelineState::Start)
    }

    /// Record the next state; illegal moves are logged and ignored
    pub fn advance(&mut self, next: PipelineState) -> bool {
        let current = self.current();
        if !current.can_transition_to(next) {
            tracing::warn!("{}: ignored transition {} -> {}", self.unit, current, next);
            return false;
        }
        tracing::trace!("{}: {} -> {}", self.unit, current, next);
        self.states.push(next);
        true
    }

    /// Move to `Rejected` unless already terminal
    pub fn reject(&mut self) {
        if !self.current().is_terminal() {
            self.advance(PipelineState::Rejected);
        }
    }

    pub fn states(&self) -> &[PipelineState] {
        &self.states
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PipelineState::*;

    #[test]
    fn test_happy_path() {
        let mut trace = StateTrace::new("A.java");
        for s in [ParseOk, ClassFound, Classified, Emitted, Written] {
            assert!(trace.advance(s));
        }
        assert!(trace.current().is_terminal());
        assert_eq!(trace.states().len(), 6);
    }

    #[test]
    fn test_no_skipping() {
        let mut trace = StateTrace::new("A.java");
        assert!(!trace.advance(Classified));
        assert_eq!(trace.current(), Start);
    }

    #[test]
    fn test_unreadable_unit_rejected_from_start() {
        let mut trace = StateTrace::new("Gone.java");
        trace.reject();
        assert_eq!(trace.states(), &[Start, Rejected]);
    }

    #[test]
    fn test_terminal_states_are_final() {
        for terminal in [Rejected, Written] {
            for next in [Start, ParseOk, Rejected, Written] {
                assert!(!terminal.can_transition_to(next));
            }
        }
    }

    #[test]
    fn test_reject_from_parse_failure() {
        let mut trace = StateTrace::new("Bad.java");
        trace.advance(ParseFailed);
        trace.reject();
        trace.reject();
        assert_eq!(trace.states(), &[Start, ParseFailed, Rejected]);
    }
}
