use serde::Deserialize;

use crate::backend::error::TokenRequestError;
use crate::cache::token::Token;

/// Response envelope of the `get_tokencache` AJAX action. Everything but
/// `status` is optional; failure bodies carry `error_codes`/`message`,
/// success bodies carry `result`.
#[derive(Debug, Deserialize, Clone)]
pub struct AjaxResponse {
    pub status: String,
    pub result: Option<String>,
    pub error_codes: Option<String>,
    pub message: Option<String>,
}

/// Parse the success payload `"<expiry-epoch-seconds>,<accessToken>"` into
/// a record named `name`. Expiry is scaled to milliseconds for storage.
pub fn parse_token_result(name: &str, raw: Option<&str>) -> Result<Token, TokenRequestError> {
    let raw = match raw {
        Some(raw) => raw,
        None => return Err(TokenRequestError::malformed(None)),
    };

    let mut parts = raw.splitn(2, ',');
    let expiry = parts.next().unwrap_or_default().trim();
    let bearer = match parts.next() {
        Some(bearer) if !bearer.is_empty() => bearer,
        _ => return Err(TokenRequestError::malformed(Some(raw.to_owned()))),
    };
    let expiry: i64 = expiry
        .parse()
        .map_err(|_| TokenRequestError::malformed(Some(raw.to_owned())))?;

    Ok(Token::new(name.to_owned(), expiry * 1000, bearer.to_owned()))
}
