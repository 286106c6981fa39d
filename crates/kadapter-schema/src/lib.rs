//! Service descriptor normalization for kadapter.
//!
//! This crate turns loosely-typed service attributes into a canonical
//! [`ServiceDescriptor`]: names and link names are sanitized into
//! resource-name-safe identifiers (`sanitize`), replica counts are coerced to
//! integers at load time (`Deployment::scale`), and the primary port is chosen
//! across the `expose` and `ports` sources (`min_port`). Service documents are
//! read from JSON or TOML (`parse_document_file`).

pub mod deployment;
pub mod document;
pub mod ports;
pub mod sanitize;
pub mod service;
pub mod types;

pub use deployment::{Deployment, ReplicaCount, DEFAULT_SCALE};
pub use document::{
    load_services, parse_document_file, parse_document_str, DocumentFormat, ServiceDocument,
};
pub use ports::{min_port, port_candidates, PortMapping, PortSpec};
pub use sanitize::sanitize;
pub use service::{EnvVar, ServiceAttrs, ServiceDescriptor, ServiceLink, Volume};
pub use types::ServiceName;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("failed to read service file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse service document: {0}")]
    ParseJson(#[from] serde_json::Error),
    #[error("failed to parse service document: {0}")]
    ParseToml(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
