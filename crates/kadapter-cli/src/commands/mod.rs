pub mod completions;
pub mod inspect;
pub mod sanitize;
pub mod summary;

use kadapter_schema::{load_services, PortMapping, ServiceDescriptor, ServiceName};
use std::path::Path;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INPUT_ERROR: u8 = 2;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn load(file: &Path) -> Result<Vec<ServiceDescriptor>, String> {
    load_services(file).map_err(|e| e.to_string())
}

/// Stored fields of a service plus the derived `scale` and `minPort`.
pub fn service_report(service: &ServiceDescriptor) -> Result<serde_json::Value, String> {
    let mut value = serde_json::to_value(service)
        .map_err(|e| format!("JSON serialization failed: {e}"))?;
    if let Some(obj) = value.as_object_mut() {
        obj.insert("scale".to_owned(), service.scale().into());
        obj.insert(
            "minPort".to_owned(),
            serde_json::to_value(service.min_port())
                .map_err(|e| format!("JSON serialization failed: {e}"))?,
        );
    }
    Ok(value)
}

pub fn format_port(port: Option<PortMapping>) -> String {
    port.map_or_else(
        || "-".to_owned(),
        |p| format!("{}:{}", p.host_port, p.container_port),
    )
}

pub fn display_name(service: &ServiceDescriptor) -> &str {
    service.name().map_or("<unnamed>", ServiceName::as_str)
}
