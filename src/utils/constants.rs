//! Shared constants and invariants

/// AJAX action the backend registers for token issuance
pub const ACTION_GET_TOKENCACHE: &str = "get_tokencache";

/// Storage key the serialized token table lives under
pub const TOKEN_CACHE_STORAGE_KEY: &str = "pintraTokenCache";

/// Storage directory used when the config does not name one
pub const DEFAULT_STORAGE_DIR: &str = ".tokencache";

// Backend payload statuses
pub const STATUS_OK: &str = "OK";
pub const STATUS_NOK: &str = "NOK";

// Error detail used when the backend never answered usefully
pub const UNKNOWN_ERROR_CODES: &str = "-1";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error occurred";
pub const MALFORMED_RESULT_MESSAGE: &str = "Malformed token response";
