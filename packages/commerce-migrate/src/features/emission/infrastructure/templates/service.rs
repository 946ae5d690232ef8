//! Pass-through service

use super::super::source_writer::SourceWriter;
use super::super::validate;
use crate::features::emission::domain::{EmitRequest, GenerationError};

pub fn build(req: &EmitRequest) -> Result<String, GenerationError> {
    validate::class_name(req)?;
    validate::base_package(req)?;
    let class = &req.class_name;

    let mut w = SourceWriter::new();
    w.line("import org.springframework.stereotype.Service;");
    w.line(&format!("import {}.ResponseDTO;", req.base_package));
    w.lines([
        "import de.hybris.platform.core.model.order.OrderModel;",
        "import de.hybris.platform.order.OrderService;",
    ]);
    w.blank();
    w.line("@Service");
    w.open(&format!("public class {class}Service {{"));
    w.line("private final OrderService orderService;");
    w.blank();
    w.open(&format!("public {class}Service(OrderService orderService) {{"));
    w.line("this.orderService = orderService;");
    w.close("}");
    w.blank();
    w.open(&format!("public ResponseDTO execute({class}DTO request) {{"));
    w.line("ResponseDTO response = new ResponseDTO();");
    w.open("try {");
    w.line("OrderModel order = orderService.getOrderForCode(request.getOrderId());");
    w.line("response.setStatus(\"success\");");
    w.reopen("} catch (Exception e) {");
    w.line("response.setStatus(\"failure\");");
    w.line("response.setError(\"Service error: \" + e.getMessage());");
    w.close("}");
    w.line("return response;");
    w.close("}");
    w.close("}");
    Ok(w.finish())
}
