/// Backend module
///
/// Wire types and the reqwest client for the WordPress AJAX token
/// endpoint. The cache owns the protocol; this module owns the transport
/// and the response envelope.

pub mod client;
pub mod error;
pub mod request;
pub mod response;
