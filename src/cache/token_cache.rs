use std::sync::Arc;

use tokio::sync::{OnceCell, RwLock};
use tracing::{debug, error, info, warn};

use crate::backend::client::AjaxClient;
use crate::backend::error::TokenRequestError;
use crate::backend::request::{TokenRequest, TokenRequestOptions};
use crate::cache::token::{Token, TokenTable};
use crate::helpers::time::now_millis;
use crate::storage::file::FileStorage;
use crate::utils::constants::TOKEN_CACHE_STORAGE_KEY;

/// Single authority for "get me a valid token named X". Holds a lazily
/// loaded in-memory mirror of the persisted table; storage remains the
/// source of truth across process restarts.
#[derive(Debug, Clone)]
pub struct TokenCache {
    storage: FileStorage,
    backend: AjaxClient,
    loaded: Arc<OnceCell<()>>,
    tokens: Arc<RwLock<TokenTable>>,
}

impl TokenCache {
    pub fn new(storage: FileStorage) -> Self {
        Self::with_backend(storage, AjaxClient::new())
    }

    pub fn with_backend(storage: FileStorage, backend: AjaxClient) -> Self {
        Self {
            storage,
            backend,
            loaded: Arc::new(OnceCell::new()),
            tokens: Arc::new(RwLock::new(TokenTable::new())),
        }
    }

    /// One-time load of the persisted table, no matter how many callers
    /// arrive first. An absent or unparsable blob means "no cache"; load
    /// problems are never fatal.
    async fn ensure_loaded(&self) {
        self.loaded
            .get_or_init(|| async {
                let table = match self.storage.read(TOKEN_CACHE_STORAGE_KEY).await {
                    Ok(Some(raw)) => match serde_json::from_str::<TokenTable>(&raw) {
                        Ok(table) => table,
                        Err(err) => {
                            warn!("discarding unparsable token cache: {}", err);
                            TokenTable::new()
                        }
                    },
                    Ok(None) => TokenTable::new(),
                    Err(err) => {
                        warn!("token cache could not be read: {}", err);
                        TokenTable::new()
                    }
                };
                info!("token cache loaded, {} record(s)", table.len());
                *self.tokens.write().await = table;
            })
            .await;
    }

    /// Resolve `request` to a valid token: a fresh cached record when one
    /// exists, otherwise a single refresh against the backend. A failed
    /// refresh leaves the table and storage untouched, so the next call
    /// starts over from lookup.
    pub async fn get_token(
        &self,
        request: &TokenRequest,
        options: &TokenRequestOptions,
    ) -> Result<Token, TokenRequestError> {
        self.ensure_loaded().await;

        // Best-effort lookup: first fresh record with the right name wins.
        // Uniqueness is enforced at write time, not here.
        {
            let table = self.tokens.read().await;
            for token in table.iter() {
                if token.name == request.name() && token.is_fresh(now_millis()) {
                    debug!("returning cached token '{}'", token.name);
                    return Ok(token.clone());
                }
            }
        }

        info!("token '{}' absent or expired, refreshing", request.name());
        let token = self.backend.request_token(request, options).await?;

        // Insert-or-replace under one write lock: dropping every record
        // with this name restores uniqueness if an earlier inconsistency
        // left duplicates behind.
        let mut table = self.tokens.write().await;
        table.retain(|t| t.name != token.name);
        table.push(token.clone());
        self.persist(&table).await;
        info!(
            "token '{}' refreshed, valid until {} (table size {})",
            token.name,
            token.expires,
            table.len()
        );

        Ok(token)
    }

    /// Drop the persisted table and the in-memory mirror. Idempotent; the
    /// next `get_token` for any name goes to the backend.
    pub async fn clear(&self) -> anyhow::Result<()> {
        self.ensure_loaded().await;
        let mut table = self.tokens.write().await;
        table.clear();
        self.storage.remove(TOKEN_CACHE_STORAGE_KEY).await?;
        info!("token cache cleared");
        Ok(())
    }

    /// Full read-modify-write of the table. A persist failure keeps the
    /// refreshed record served from memory and only costs durability
    /// across restarts, so it does not fail the call.
    async fn persist(&self, table: &TokenTable) {
        match serde_json::to_string(table) {
            Ok(blob) => {
                if let Err(err) = self.storage.write(TOKEN_CACHE_STORAGE_KEY, &blob).await {
                    error!("persisting token cache failed: {}", err);
                }
            }
            Err(err) => error!("serializing token cache failed: {}", err),
        }
    }
}
