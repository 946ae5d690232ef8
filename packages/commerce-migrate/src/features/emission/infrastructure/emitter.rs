//! Bundle assembly
//!
//! Pure text synthesis: identical requests yield byte-identical bundles.

use super::templates::{bulk_load, controller, dto, facade, response, service, wiring};
use crate::features::emission::domain::{EmissionBundle, EmitRequest, GenerationError};

pub fn emit_bundle(req: &EmitRequest) -> Result<EmissionBundle, GenerationError> {
    let facade = if req.use_orchestration {
        Some(facade::build(req)?)
    } else {
        None
    };

    let bundle = EmissionBundle {
        class_name: req.class_name.clone(),
        controller: controller::build(req)?,
        facade,
        service: service::build(req)?,
        dto: dto::build(req)?,
        response: response::build(),
        wiring: wiring::build(req)?,
        bulk_load: bulk_load::build(req)?,
    };

    tracing::debug!(
        "emitted {} (facade={}, {} fields)",
        req.class_name,
        bundle.has_facade(),
        req.field_names.len()
    );
    Ok(bundle)
}
