use serde::{Deserialize, Serialize};

/// Cached bearer token record. `expires` is a UNIX timestamp in
/// milliseconds; the backend reports epoch seconds and the cache scales
/// them on ingest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub expires: i64, // UNIX TIMESTAMP, milliseconds
    pub bearer: String,
}

impl Token {
    pub fn new(name: String, expires: i64, bearer: String) -> Self {
        Self { name, expires, bearer }
    }

    /// A token is usable strictly before its expiration instant.
    pub fn is_fresh(&self, now_millis: i64) -> bool {
        self.expires > now_millis
    }
}

/// The full set of cached records, persisted as one serialized blob.
/// Uniqueness by `name` is the only invariant; order carries no meaning.
pub type TokenTable = Vec<Token>;
