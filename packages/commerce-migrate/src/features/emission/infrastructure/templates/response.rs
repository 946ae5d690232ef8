//! Shared response object, same four fields for every class

use super::super::source_writer::SourceWriter;
use super::dto::accessors;

pub const RESPONSE_FIELDS: [&str; 4] = ["status", "orderId", "message", "error"];

pub fn build() -> String {
    let mut w = SourceWriter::new();
    w.open("public class ResponseDTO {");
    for field in RESPONSE_FIELDS {
        w.line(&format!("private String {field};"));
    }
    w.blank();
    for field in RESPONSE_FIELDS {
        accessors(&mut w, field);
    }
    w.close("}");
    w.finish()
}
