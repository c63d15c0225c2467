/*!
This module contains the upstream record shown in the upstreams table of a service instance.

Field names follow the proxy configuration the records are read from, so sort keys name fields like
`DestinationName`.
*/

use crate::sortable::{FieldValue, Sortable};

/// The kind of destination an upstream points at.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum DestinationType {
    /// The upstream targets a service.
    Service,
    /// The upstream targets a prepared query.
    PreparedQuery,
}

/// Public methods
impl DestinationType {
    /// Get the name of the destination type as it appears in proxy configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationType::Service => "service",
            DestinationType::PreparedQuery => "prepared_query",
        }
    }
}

/// An upstream of a service instance's proxy.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UpstreamInstance {
    /// The name of the service or prepared query the upstream targets.
    pub destination_name: String,

    /// The namespace of the destination, if namespaces are in use.
    pub destination_namespace: Option<String>,

    /// The admin partition of the destination, if partitions are in use.
    pub destination_partition: Option<String>,

    /// The kind of destination.
    pub destination_type: DestinationType,

    /// The datacenter of the destination. Unset means the local datacenter.
    pub datacenter: Option<String>,

    /// The address the proxy listens on for this upstream.
    pub local_bind_address: Option<String>,

    /// The port the proxy listens on for this upstream.
    pub local_bind_port: Option<u16>,
}

/// Public methods
impl UpstreamInstance {
    /// Create an upstream targeting the named service in the local datacenter.
    pub fn new<N: Into<String>>(destination_name: N) -> Self {
        UpstreamInstance {
            destination_name: destination_name.into(),
            destination_namespace: None,
            destination_partition: None,
            destination_type: DestinationType::Service,
            datacenter: None,
            local_bind_address: None,
            local_bind_port: None,
        }
    }
}

impl Sortable for UpstreamInstance {
    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        match name {
            "DestinationName" => Some(self.destination_name.as_str().into()),
            "DestinationNamespace" => self.destination_namespace.as_deref().map(FieldValue::from),
            "DestinationPartition" => self.destination_partition.as_deref().map(FieldValue::from),
            "DestinationType" => Some(self.destination_type.as_str().into()),
            "Datacenter" => self.datacenter.as_deref().map(FieldValue::from),
            "LocalBindAddress" => self.local_bind_address.as_deref().map(FieldValue::from),
            "LocalBindPort" => self
                .local_bind_port
                .map(|port| FieldValue::Int(i64::from(port))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod upstream_tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn fields_are_exposed_by_their_configuration_names() {
        let mut upstream = UpstreamInstance::new("billing");
        upstream.datacenter = Some("dc2".to_string());
        upstream.local_bind_port = Some(9191);
        upstream.destination_type = DestinationType::PreparedQuery;

        assert_eq!(upstream.field("DestinationName"), Some(FieldValue::Str("billing")));
        assert_eq!(upstream.field("Datacenter"), Some(FieldValue::Str("dc2")));
        assert_eq!(upstream.field("LocalBindPort"), Some(FieldValue::Int(9191)));
        assert_eq!(
            upstream.field("DestinationType"),
            Some(FieldValue::Str("prepared_query"))
        );
        assert_eq!(upstream.field("DestinationNamespace"), None);
        assert_eq!(upstream.field("destination_name"), None);
    }
}
