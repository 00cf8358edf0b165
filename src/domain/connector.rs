//! Connector catalog exposed by the listing endpoint.

use serde::Serialize;

/// A connector grouping and the protocols reachable through it.
#[derive(Debug, Clone, Serialize)]
pub struct Connector {
    /// Connector group name (e.g. "yield").
    pub name: String,
    /// Protocols served under this connector.
    pub protocols: Vec<String>,
}

/// The connectors this gateway currently exposes.
///
/// The catalog is static: connectors are compiled in, not discovered. Adding
/// one means adding its adapter and listing it here.
pub fn connectors() -> Vec<Connector> {
    vec![Connector {
        name: "yield".to_string(),
        protocols: vec!["pendle".to_string()],
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lists_pendle_under_yield() {
        let catalog = connectors();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "yield");
        assert_eq!(catalog[0].protocols, vec!["pendle".to_string()]);
    }

    #[test]
    fn test_connector_serializes_with_stable_field_names() {
        let json = serde_json::to_value(&connectors()[0]).unwrap();
        assert_eq!(json["name"], "yield");
        assert_eq!(json["protocols"][0], "pendle");
    }
}
