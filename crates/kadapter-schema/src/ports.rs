use serde::{Deserialize, Serialize};
use tracing::trace;

/// A port record exactly as it appeared in the input.
///
/// Accepts both `{hostPort?, containerPort}` and the `{port}` shorthand.
/// Records carrying neither `containerPort` nor `port` are kept here but never
/// resolve to a [`PortMapping`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PortSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_port: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_port: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u32>,
}

impl PortSpec {
    /// `{hostPort, containerPort}` record.
    pub fn mapped(host_port: u32, container_port: u32) -> Self {
        Self {
            host_port: Some(host_port),
            container_port: Some(container_port),
            port: None,
        }
    }

    /// `{containerPort}` record with no host side.
    pub fn container(container_port: u32) -> Self {
        Self {
            container_port: Some(container_port),
            ..Self::default()
        }
    }

    /// `{port}` shorthand record.
    pub fn shorthand(port: u32) -> Self {
        Self {
            port: Some(port),
            ..Self::default()
        }
    }

    /// Resolve to a concrete mapping.
    ///
    /// `containerPort` wins over `port`; a missing `hostPort` defaults to the
    /// container side. The shorthand ignores any `hostPort`.
    pub fn resolve(&self) -> Option<PortMapping> {
        if let Some(container_port) = self.container_port {
            return Some(PortMapping {
                host_port: self.host_port.unwrap_or(container_port),
                container_port,
            });
        }
        self.port.map(PortMapping::same)
    }
}

/// A resolved `{hostPort, containerPort}` pair.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct PortMapping {
    pub host_port: u32,
    pub container_port: u32,
}

impl PortMapping {
    pub fn new(host_port: u32, container_port: u32) -> Self {
        Self {
            host_port,
            container_port,
        }
    }

    /// Mapping with identical host and container sides, as for an exposed port.
    pub fn same(port: u32) -> Self {
        Self::new(port, port)
    }
}

/// Merge both port sources into one candidate list.
///
/// Exposed ports come first, then resolvable `ports` records, each source in
/// its original order.
pub fn port_candidates(expose: &[u32], ports: &[PortSpec]) -> Vec<PortMapping> {
    let mut candidates = Vec::with_capacity(expose.len() + ports.len());
    candidates.extend(expose.iter().copied().map(PortMapping::same));
    for (idx, spec) in ports.iter().enumerate() {
        match spec.resolve() {
            Some(mapping) => candidates.push(mapping),
            None => trace!("skipping port record {idx}: no containerPort or port"),
        }
    }
    candidates
}

/// Pick the candidate with the lowest container port.
///
/// Ties go to the earliest candidate in [`port_candidates`] order. Returns
/// `None` when neither source yields a candidate.
pub fn min_port(expose: &[u32], ports: &[PortSpec]) -> Option<PortMapping> {
    port_candidates(expose, ports)
        .into_iter()
        .reduce(|best, next| {
            if next.container_port < best.container_port {
                next
            } else {
                best
            }
        })
}
