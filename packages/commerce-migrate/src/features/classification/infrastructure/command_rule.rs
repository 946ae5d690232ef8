//! Command-family rule
//!
//! Pure name equality on the immediate declaration as written: no
//! superclass chain, no import resolution. A bare `ControllerCommand`
//! imported from another package is accepted as well, while a qualified
//! `a.b.ControllerCommand` is not.

use crate::features::parsing::domain::SyntaxKind;
use crate::shared::constants::command;

/// Whether a class declaration belongs to the legacy command family
///
/// Non-class kinds are never commands.
pub fn classify(class_decl: &SyntaxKind) -> bool {
    match class_decl {
        SyntaxKind::ClassDecl {
            superclass,
            interfaces,
            ..
        } => is_command_family(superclass.as_deref(), interfaces),
        _ => false,
    }
}

pub fn is_command_family(superclass: Option<&str>, interfaces: &[String]) -> bool {
    interfaces.iter().any(|i| i == command::INTERFACE) || superclass == Some(command::BASE_CLASS)
}
