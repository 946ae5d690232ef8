//! Orchestration facade
//!
//! Checks the three order fields, then applies the payment/status rule.

use super::super::source_writer::SourceWriter;
use super::super::validate;
use crate::features::emission::domain::{EmitRequest, GenerationError};
use crate::shared::constants::fields;
use crate::shared::utils::capitalize_first;

const PAYMENT_METHOD: &str = "CREDIT_CARD";
const ORDER_STATUS: &str = "PENDING";

pub fn build(req: &EmitRequest) -> Result<String, GenerationError> {
    validate::class_name(req)?;
    validate::base_package(req)?;
    let class = &req.class_name;
    let service = format!("{}Service", req.lower_name());

    let required = [fields::ORDER_ID, fields::USER_ID, fields::PAYMENT_METHOD]
        .iter()
        .map(|f| format!("request.get{}() != null", capitalize_first(f)))
        .collect::<Vec<_>>()
        .join(" && ");

    let mut w = SourceWriter::new();
    w.line("import org.springframework.stereotype.Component;");
    w.line(&format!("import {}.ResponseDTO;", req.base_package));
    w.lines([
        "import de.hybris.platform.core.model.order.OrderModel;",
        "import de.hybris.platform.order.OrderService;",
        "import de.hybris.platform.servicelayer.model.ModelService;",
    ]);
    w.blank();
    w.line("@Component");
    w.open(&format!("public class {class}Facade {{"));
    w.line(&format!("private final {class}Service {service};"));
    w.line("private final OrderService orderService;");
    w.line("private final ModelService modelService;");
    w.blank();
    w.open(&format!(
        "public {class}Facade({class}Service {service}, OrderService orderService, ModelService modelService) {{"
    ));
    w.line(&format!("this.{service} = {service};"));
    w.line("this.orderService = orderService;");
    w.line("this.modelService = modelService;");
    w.close("}");
    w.blank();
    w.open(&format!("public ResponseDTO execute({class}DTO request) {{"));
    w.line("ResponseDTO response = new ResponseDTO();");
    w.open("try {");
    w.open(&format!("if ({required}) {{"));
    w.line("OrderModel order = orderService.getOrderForCode(request.getOrderId());");
    w.open(&format!(
        "if (\"{PAYMENT_METHOD}\".equals(request.getPaymentMethod()) && \"{ORDER_STATUS}\".equals(order.getStatus().getCode())) {{"
    ));
    w.line("response.setStatus(\"success\");");
    w.line("response.setOrderId(request.getOrderId());");
    w.line("response.setMessage(\"Order processed successfully\");");
    w.reopen("} else {");
    w.line("response.setStatus(\"failure\");");
    w.line("response.setError(\"Invalid payment method or order status\");");
    w.close("}");
    w.reopen("} else {");
    w.line("response.setStatus(\"failure\");");
    w.line("response.setError(\"Missing required fields\");");
    w.close("}");
    w.reopen("} catch (Exception e) {");
    w.line("response.setStatus(\"failure\");");
    w.line("response.setError(\"Error processing order: \" + e.getMessage());");
    w.close("}");
    w.line("return response;");
    w.close("}");
    w.close("}");
    Ok(w.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_facade_body() {
        let out = build(&EmitRequest::new("ExampleCmd").with_orchestration(true)).unwrap();
        let expected = r#"import org.springframework.stereotype.Component;
import com.example.ResponseDTO;
import de.hybris.platform.core.model.order.OrderModel;
import de.hybris.platform.order.OrderService;
import de.hybris.platform.servicelayer.model.ModelService;

@Component
public class ExampleCmdFacade {
    private final ExampleCmdService examplecmdService;
    private final OrderService orderService;
    private final ModelService modelService;

    public ExampleCmdFacade(ExampleCmdService examplecmdService, OrderService orderService, ModelService modelService) {
        this.examplecmdService = examplecmdService;
        this.orderService = orderService;
        this.modelService = modelService;
    }

    public ResponseDTO execute(ExampleCmdDTO request) {
        ResponseDTO response = new ResponseDTO();
        try {
            if (request.getOrderId() != null && request.getUserId() != null && request.getPaymentMethod() != null) {
                OrderModel order = orderService.getOrderForCode(request.getOrderId());
                if ("CREDIT_CARD".equals(request.getPaymentMethod()) && "PENDING".equals(order.getStatus().getCode())) {
                    response.setStatus("success");
                    response.setOrderId(request.getOrderId());
                    response.setMessage("Order processed successfully");
                } else {
                    response.setStatus("failure");
                    response.setError("Invalid payment method or order status");
                }
            } else {
                response.setStatus("failure");
                response.setError("Missing required fields");
            }
        } catch (Exception e) {
            response.setStatus("failure");
            response.setError("Error processing order: " + e.getMessage());
        }
        return response;
    }
}
"#;
        assert_eq!(out, expected);
    }
}
