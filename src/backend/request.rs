/// Token request descriptor. The two addressing schemes ask the backend
/// for the same thing and differ only in the form field it branches on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenRequest {
    Resource { name: String, resource: String },
    Scope { name: String, scope: String },
}

impl TokenRequest {
    pub fn resource(name: String, resource: String) -> Self {
        TokenRequest::Resource { name, resource }
    }

    pub fn scope(name: String, scope: String) -> Self {
        TokenRequest::Scope { name, scope }
    }

    /// Logical name the resulting record is cached under.
    pub fn name(&self) -> &str {
        match self {
            TokenRequest::Resource { name, .. } => name,
            TokenRequest::Scope { name, .. } => name,
        }
    }

    /// Form field the backend expects for this request kind.
    pub fn wire_field(&self) -> &'static str {
        match self {
            TokenRequest::Resource { .. } => "resource",
            TokenRequest::Scope { .. } => "scope",
        }
    }

    /// Wire value: record name and addressing parameter, comma-joined.
    pub fn wire_value(&self) -> String {
        match self {
            TokenRequest::Resource { name, resource } => format!("{},{}", name, resource),
            TokenRequest::Scope { name, scope } => format!("{},{}", name, scope),
        }
    }
}

/// Per-call security token and endpoint, supplied by the hosting
/// environment for every request.
#[derive(Debug, Clone)]
pub struct TokenRequestOptions {
    pub nonce: String,
    pub ajax_url: String,
}
