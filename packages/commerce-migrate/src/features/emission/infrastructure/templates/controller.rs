//! REST controller

use super::super::source_writer::SourceWriter;
use super::super::validate;
use crate::features::emission::domain::{EmitRequest, GenerationError};

/// `@RestController` with one POST handler per entry method
///
/// Delegates to the facade when orchestration is used, to the service
/// otherwise.
pub fn build(req: &EmitRequest) -> Result<String, GenerationError> {
    validate::class_name(req)?;
    validate::base_package(req)?;

    let class = &req.class_name;
    let lower = req.lower_name();
    let role = if req.use_orchestration { "Facade" } else { "Service" };
    let delegate_type = format!("{class}{role}");
    let delegate = format!("{lower}{role}");

    let mut w = SourceWriter::new();
    w.lines([
        "import org.springframework.web.bind.annotation.RestController;",
        "import org.springframework.web.bind.annotation.PostMapping;",
        "import org.springframework.web.bind.annotation.RequestBody;",
    ]);
    w.line(&format!("import {}.ResponseDTO;", req.base_package));
    w.blank();
    w.line("@RestController");
    w.open(&format!("public class {class}Controller {{"));
    w.line(&format!("private final {delegate_type} {delegate};"));
    w.blank();
    w.open(&format!("public {class}Controller({delegate_type} {delegate}) {{"));
    w.line(&format!("this.{delegate} = {delegate};"));
    w.close("}");

    for _ in 0..req.entry_count() {
        w.blank();
        w.line(&format!("@PostMapping(\"/api/{lower}\")"));
        w.open(&format!(
            "public ResponseDTO execute(@RequestBody {class}DTO request) {{"
        ));
        w.line(&format!("return {delegate}.execute(request);"));
        w.close("}");
    }
    w.close("}");
    Ok(w.finish())
}
