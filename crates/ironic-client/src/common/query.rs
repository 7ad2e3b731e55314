//! Query utilities for the Ironic API
//!
//! Builds filter and projection query strings for list endpoints.

/// Filters and projection for `GET /v1/ports`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PortListOpts {
    /// Only ports with this MAC address
    pub address: Option<String>,
    /// Only ports belonging to this node
    pub node_uuid: Option<String>,
    /// Fields to return; empty means all
    pub fields: Vec<String>,
    /// Page size hint
    pub limit: Option<u32>,
}

impl PortListOpts {
    pub fn by_address(address: &str) -> Self {
        Self {
            address: Some(address.to_string()),
            ..Default::default()
        }
    }

    pub fn by_node(node_uuid: &str) -> Self {
        Self {
            node_uuid: Some(node_uuid.to_string()),
            ..Default::default()
        }
    }

    /// Project only the given fields
    pub fn fields(mut self, fields: &[&str]) -> Self {
        self.fields = fields.iter().map(|f| f.to_string()).collect();
        self
    }

    /// Render as a query string (without the leading `?`)
    pub fn to_query_string(&self) -> String {
        let mut filters: Vec<(&str, String)> = Vec::new();
        if let Some(address) = &self.address {
            filters.push(("address", address.clone()));
        }
        if let Some(node_uuid) = &self.node_uuid {
            filters.push(("node_uuid", node_uuid.clone()));
        }
        if !self.fields.is_empty() {
            filters.push(("fields", self.fields.join(",")));
        }
        if let Some(limit) = self.limit {
            filters.push(("limit", limit.to_string()));
        }

        build_query_string(&filters)
    }
}

/// Build query string from filters
pub fn build_query_string(filters: &[(&str, String)]) -> String {
    filters
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Append a query string to a path when it is non-empty
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
