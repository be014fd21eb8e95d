use std::fmt;

use crate::utils::constants::{
    MALFORMED_RESULT_MESSAGE, STATUS_NOK, UNKNOWN_ERROR_CODES, UNKNOWN_ERROR_MESSAGE,
};

/// Failure reported by a token request. One shape serves every failure
/// category; transport, protocol, backend and malformed-payload errors
/// differ only in which fields carry data, never in a discriminant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenRequestError {
    pub status: String,
    pub error_codes: String,
    pub message: String,
    pub result: Option<String>,
}

impl TokenRequestError {
    /// Network-level failure: no response was received at all.
    pub fn transport(message: String) -> Self {
        Self {
            status: STATUS_NOK.to_owned(),
            error_codes: UNKNOWN_ERROR_CODES.to_owned(),
            message,
            result: None,
        }
    }

    /// Non-200 HTTP response from the AJAX endpoint.
    pub fn protocol_failure() -> Self {
        Self {
            status: STATUS_NOK.to_owned(),
            error_codes: UNKNOWN_ERROR_CODES.to_owned(),
            message: UNKNOWN_ERROR_MESSAGE.to_owned(),
            result: None,
        }
    }

    /// HTTP 200 whose payload reports a non-OK status. Fields come from
    /// the backend verbatim; absent detail falls back to the unknowns.
    pub fn backend(
        status: String,
        error_codes: Option<String>,
        message: Option<String>,
        result: Option<String>,
    ) -> Self {
        Self {
            status,
            error_codes: error_codes.unwrap_or_else(|| UNKNOWN_ERROR_CODES.to_owned()),
            message: message.unwrap_or_else(|| UNKNOWN_ERROR_MESSAGE.to_owned()),
            result,
        }
    }

    /// HTTP 200 with an OK status but a result payload that cannot be
    /// parsed into a token. The raw result is preserved for diagnosis.
    pub fn malformed(result: Option<String>) -> Self {
        Self {
            status: STATUS_NOK.to_owned(),
            error_codes: UNKNOWN_ERROR_CODES.to_owned(),
            message: MALFORMED_RESULT_MESSAGE.to_owned(),
            result,
        }
    }
}

impl fmt::Display for TokenRequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "token request failed (status '{}', error_codes '{}'): {}",
            self.status, self.error_codes, self.message
        )
    }
}

impl std::error::Error for TokenRequestError {}
