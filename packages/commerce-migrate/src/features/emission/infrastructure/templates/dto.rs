//! Request DTO
//!
//! Every field is a `String`. Duplicated names produce duplicated members;
//! nothing is de-duplicated.

use super::super::source_writer::SourceWriter;
use super::super::validate;
use crate::features::emission::domain::{EmitRequest, GenerationError};
use crate::shared::utils::capitalize_first;

pub fn build(req: &EmitRequest) -> Result<String, GenerationError> {
    validate::class_name(req)?;
    validate::field_names(req)?;

    let mut w = SourceWriter::new();
    w.open(&format!("public class {}DTO {{", req.class_name));
    for field in &req.field_names {
        w.line(&format!("private String {field};"));
    }
    w.blank();
    for field in &req.field_names {
        accessors(&mut w, field);
    }
    w.close("}");
    Ok(w.finish())
}

/// One-line getter and setter for a `String` property
pub(crate) fn accessors(w: &mut SourceWriter, field: &str) {
    let property = capitalize_first(field);
    w.line(&format!("public String get{property}() {{ return {field}; }}"));
    w.line(&format!(
        "public void set{property}(String {field}) {{ this.{field} = {field}; }}"
    ));
}
