//! Bean registration lines

use super::super::validate;
use crate::features::emission::domain::{EmitRequest, GenerationError};

pub fn build(req: &EmitRequest) -> Result<String, GenerationError> {
    validate::class_name(req)?;
    validate::base_package(req)?;

    let mut out = bean(req, "Service");
    if req.use_orchestration {
        out.push_str(&bean(req, "Facade"));
    }
    Ok(out)
}

fn bean(req: &EmitRequest, role: &str) -> String {
    format!(
        "<bean id='{}{role}' class='{}.{}{role}'/>\n",
        req.lower_name(),
        req.base_package,
        req.class_name
    )
}
