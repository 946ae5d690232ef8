//! Pre-emission checks on the request

use crate::features::emission::domain::{EmitRequest, GenerationError};
use crate::shared::utils::is_java_identifier;

pub fn class_name(req: &EmitRequest) -> Result<(), GenerationError> {
    if is_java_identifier(&req.class_name) {
        Ok(())
    } else {
        Err(GenerationError::InvalidClassName(req.class_name.clone()))
    }
}

pub fn field_names(req: &EmitRequest) -> Result<(), GenerationError> {
    match req
        .field_names
        .iter()
        .enumerate()
        .find(|(_, name)| !is_java_identifier(name))
    {
        Some((index, name)) => Err(GenerationError::InvalidFieldName {
            index,
            name: name.clone(),
        }),
        None => Ok(()),
    }
}

/// Dotted sequence of identifiers
pub fn base_package(req: &EmitRequest) -> Result<(), GenerationError> {
    if req.base_package.split('.').all(is_java_identifier) {
        Ok(())
    } else {
        Err(GenerationError::InvalidPackage(req.base_package.clone()))
    }
}
