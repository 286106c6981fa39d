use crate::service::{ServiceAttrs, ServiceDescriptor};
use crate::ServiceError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Text format of a service document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Json,
    Toml,
}

impl DocumentFormat {
    /// `.toml` files are TOML; anything else is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Json,
        }
    }
}

impl fmt::Display for DocumentFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Toml => f.write_str("toml"),
        }
    }
}

/// A document listing the services of one application.
///
/// ```json
/// { "services": [ { "name": "web", "expose": [80] } ] }
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct ServiceDocument {
    #[serde(default)]
    pub services: Vec<ServiceAttrs>,
}

impl ServiceDocument {
    /// Normalize every service in document order.
    pub fn descriptors(&self) -> Vec<ServiceDescriptor> {
        self.services
            .iter()
            .cloned()
            .map(ServiceDescriptor::new)
            .collect()
    }

    pub fn into_descriptors(self) -> Vec<ServiceDescriptor> {
        self.services.into_iter().map(ServiceDescriptor::new).collect()
    }
}

pub fn parse_document_str(
    input: &str,
    format: DocumentFormat,
) -> Result<ServiceDocument, ServiceError> {
    let document: ServiceDocument = match format {
        DocumentFormat::Json => serde_json::from_str(input)?,
        DocumentFormat::Toml => toml::from_str(input)?,
    };
    debug!(
        "parsed {format} service document with {} service(s)",
        document.services.len()
    );
    Ok(document)
}

pub fn parse_document_file(path: impl AsRef<Path>) -> Result<ServiceDocument, ServiceError> {
    let path = path.as_ref();
    let format = DocumentFormat::from_path(path);
    debug!("loading service document {} as {format}", path.display());
    let content = fs::read_to_string(path)?;
    parse_document_str(&content, format)
}

/// Load a document and normalize all of its services.
pub fn load_services(path: impl AsRef<Path>) -> Result<Vec<ServiceDescriptor>, ServiceError> {
    Ok(parse_document_file(path)?.into_descriptors())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::PortMapping;

    #[test]
    fn parses_json_document() {
        let input = r#"
{
  "services": [
    {
      "name": "WordPress_App",
      "source": "tutum/wordpress:latest",
      "ports": [{"hostPort": 8080, "containerPort": 80}],
      "links": [{"name": "My.SQL", "alias": "db"}],
      "deployment": {"count": "3"}
    },
    {
      "name": "MySQL",
      "expose": [3306],
      "environment": [{"variable": "MYSQL_ROOT_PASSWORD", "value": "secret"}]
    }
  ]
}
"#;
        let services = parse_document_str(input, DocumentFormat::Json)
            .unwrap()
            .into_descriptors();

        assert_eq!(services.len(), 2);
        let app = &services[0];
        assert_eq!(app.name().unwrap(), "wordpress-app");
        assert_eq!(app.source(), Some("tutum/wordpress:latest"));
        assert_eq!(app.links()[0].name, "my-sql");
        assert_eq!(app.links()[0].alias, "db");
        assert_eq!(app.scale(), 3);
        assert_eq!(app.min_port(), Some(PortMapping::new(8080, 80)));

        let db = &services[1];
        assert_eq!(db.scale(), 1);
        assert_eq!(db.min_port(), Some(PortMapping::same(3306)));
        assert_eq!(db.environment()[0].variable, "MYSQL_ROOT_PASSWORD");
    }

    #[test]
    fn parses_toml_document() {
        let input = r#"
[[services]]
name = "api"
expose = [2, 5, 3]
ports = [{ containerPort = 1 }]

[services.deployment]
count = 4
"#;
        let services = parse_document_str(input, DocumentFormat::Toml)
            .unwrap()
            .into_descriptors();
        assert_eq!(services.len(), 1);
        assert_eq!(services[0].scale(), 4);
        assert_eq!(services[0].min_port(), Some(PortMapping::new(1, 1)));
    }

    #[test]
    fn empty_document_has_no_services() {
        let document = parse_document_str("{}", DocumentFormat::Json).unwrap();
        assert!(document.services.is_empty());
        assert!(document.descriptors().is_empty());
    }

    #[test]
    fn descriptors_leave_document_untouched() {
        let document =
            parse_document_str(r#"{"services": [{"name": "A_B"}]}"#, DocumentFormat::Json)
                .unwrap();
        let services = document.descriptors();
        assert_eq!(services[0].name().unwrap(), "a-b");
        assert_eq!(document.services[0].name.as_deref(), Some("A_B"));
    }

    #[test]
    fn invalid_count_is_rejected_on_load() {
        let input = r#"{"services": [{"name": "x", "deployment": {"count": "many"}}]}"#;
        let err = parse_document_str(input, DocumentFormat::Json).unwrap_err();
        assert!(matches!(err, ServiceError::ParseJson(_)));
        assert!(err.to_string().contains("deployment.count"), "{err}");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse_document_str("{ not json", DocumentFormat::Json).is_err());
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            DocumentFormat::from_path(Path::new("app.toml")),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("app.TOML")),
            DocumentFormat::Toml
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("app.json")),
            DocumentFormat::Json
        );
        assert_eq!(
            DocumentFormat::from_path(Path::new("services")),
            DocumentFormat::Json
        );
    }

    #[test]
    fn loads_services_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("services.toml");
        fs::write(
            &path,
            r#"
[[services]]
name = "Cache Server"
expose = [6379]
"#,
        )
        .unwrap();

        let services = load_services(&path).unwrap();
        assert_eq!(services[0].name().unwrap(), "cache-server");
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_services(dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(err, ServiceError::Io(_)));
    }
}
