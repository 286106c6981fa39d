use crate::deployment::Deployment;
use crate::ports::{self, PortMapping, PortSpec};
use crate::sanitize::sanitize;
use crate::types::ServiceName;
use serde::{Deserialize, Serialize};

/// Raw attributes for one service, as produced by a document loader.
///
/// Every key is optional and unknown keys are ignored. Feed this into
/// [`ServiceDescriptor::new`] to get the normalized form.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ServiceAttrs {
    pub name: Option<String>,
    pub source: Option<String>,
    pub command: Option<String>,
    pub ports: Vec<PortSpec>,
    pub expose: Vec<u32>,
    pub environment: Vec<EnvVar>,
    pub volumes: Vec<Volume>,
    pub links: Vec<ServiceLink>,
    pub deployment: Deployment,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EnvVar {
    pub variable: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Volume {
    pub path: String,
}

/// A dependency on another service, reachable under `alias`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ServiceLink {
    pub name: String,
    pub alias: String,
}

/// Normalized, immutable description of one deployable service.
///
/// The service name and every link name are sanitized on construction. All
/// collections are owned copies; accessors hand out shared borrows only.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct ServiceDescriptor {
    name: Option<ServiceName>,
    source: Option<String>,
    command: Option<String>,
    ports: Vec<PortSpec>,
    expose: Vec<u32>,
    environment: Vec<EnvVar>,
    volumes: Vec<Volume>,
    links: Vec<ServiceLink>,
    deployment: Deployment,
}

impl ServiceDescriptor {
    pub fn new(attrs: ServiceAttrs) -> Self {
        let links = attrs
            .links
            .into_iter()
            .map(|link| ServiceLink {
                name: sanitize(&link.name),
                alias: link.alias,
            })
            .collect();

        Self {
            name: attrs.name.map(ServiceName::new),
            source: attrs.source,
            command: attrs.command,
            ports: attrs.ports,
            expose: attrs.expose,
            environment: attrs.environment,
            volumes: attrs.volumes,
            links,
            deployment: attrs.deployment,
        }
    }

    pub fn name(&self) -> Option<&ServiceName> {
        self.name.as_ref()
    }

    /// Image reference or other opaque source identifier.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn command(&self) -> Option<&str> {
        self.command.as_deref()
    }

    pub fn ports(&self) -> &[PortSpec] {
        &self.ports
    }

    pub fn expose(&self) -> &[u32] {
        &self.expose
    }

    pub fn environment(&self) -> &[EnvVar] {
        &self.environment
    }

    pub fn volumes(&self) -> &[Volume] {
        &self.volumes
    }

    pub fn links(&self) -> &[ServiceLink] {
        &self.links
    }

    pub fn deployment(&self) -> &Deployment {
        &self.deployment
    }

    /// Desired replica count; `1` unless the deployment sets `count`.
    pub fn scale(&self) -> u32 {
        self.deployment.scale()
    }

    /// The port mapping with the lowest container port across `expose` and
    /// `ports`, or `None` if no port is configured. Recomputed on every call.
    pub fn min_port(&self) -> Option<PortMapping> {
        ports::min_port(&self.expose, &self.ports)
    }
}

impl From<ServiceAttrs> for ServiceDescriptor {
    fn from(attrs: ServiceAttrs) -> Self {
        Self::new(attrs)
    }
}
