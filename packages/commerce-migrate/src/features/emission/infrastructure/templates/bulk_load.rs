//! ImpEx bulk-load script

use super::super::validate;
use crate::features::emission::domain::{EmitRequest, GenerationError};
use crate::shared::constants::fields;

pub const HEADER: &str = "INSERT_UPDATE Order;code[unique=true];user(uid);paymentType(code)";
const PLACEHOLDER: &str = "default";

/// Header plus one order row
///
/// The row names the order fields when the class declares `orderId`,
/// otherwise every column holds the placeholder.
pub fn build(req: &EmitRequest) -> Result<String, GenerationError> {
    validate::class_name(req)?;
    let lower = req.lower_name();

    let row = if req.has_field(fields::ORDER_ID) {
        format!(
            ";{lower}_{};{};{}",
            fields::ORDER_ID,
            fields::USER_ID,
            fields::PAYMENT_METHOD
        )
    } else {
        format!(";{lower}_{PLACEHOLDER};{PLACEHOLDER};{PLACEHOLDER}")
    };
    Ok(format!("{HEADER}\n{row}\n"))
}
