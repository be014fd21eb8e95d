use reqwest::Client;
use tracing::debug;

use crate::backend::error::TokenRequestError;
use crate::backend::request::{TokenRequest, TokenRequestOptions};
use crate::backend::response::{parse_token_result, AjaxResponse};
use crate::cache::token::Token;
use crate::utils::constants::{ACTION_GET_TOKENCACHE, STATUS_OK};

/// Client for the WordPress `admin-ajax.php` token action.
#[derive(Debug, Clone)]
pub struct AjaxClient {
    client: Client,
}

impl AjaxClient {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Use a preconfigured reqwest client (timeouts, proxies).
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Ask the backend to issue a token. Every failure comes back as a
    /// `TokenRequestError` value; nothing escapes this boundary as a panic.
    pub async fn request_token(
        &self,
        request: &TokenRequest,
        options: &TokenRequestOptions,
    ) -> Result<Token, TokenRequestError> {
        let form = [
            ("action", ACTION_GET_TOKENCACHE.to_owned()),
            (request.wire_field(), request.wire_value()),
            ("nonce", options.nonce.clone()),
        ];

        debug!(
            "requesting token '{}' ({}) from {}",
            request.name(),
            request.wire_field(),
            options.ajax_url
        );

        let response = self
            .client
            .post(&options.ajax_url)
            .form(&form)
            .send()
            .await
            .map_err(|err| TokenRequestError::transport(err.to_string()))?;

        if !response.status().is_success() {
            debug!("token endpoint answered {}", response.status());
            return Err(TokenRequestError::protocol_failure());
        }

        let payload: AjaxResponse = response
            .json()
            .await
            .map_err(|_| TokenRequestError::malformed(None))?;

        if payload.status != STATUS_OK {
            return Err(TokenRequestError::backend(
                payload.status,
                payload.error_codes,
                payload.message,
                payload.result,
            ));
        }

        parse_token_result(request.name(), payload.result.as_deref())
    }
}

impl Default for AjaxClient {
    fn default() -> Self {
        Self::new()
    }
}
