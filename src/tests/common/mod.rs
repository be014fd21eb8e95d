// tests/common/mod.rs
pub use serde_json::json;

use httpmock::MockServer;
use tempfile::TempDir;

use crate::backend::request::TokenRequestOptions;
use crate::cache::token::{Token, TokenTable};
use crate::cache::token_cache::TokenCache;
use crate::helpers::time::now_millis;
use crate::storage::file::FileStorage;
use crate::utils::constants::TOKEN_CACHE_STORAGE_KEY;

pub const AJAX_PATH: &str = "/wp-admin/admin-ajax.php";
pub const TEST_NONCE: &str = "test-nonce";

/// Cache over a throwaway storage dir. Keep the TempDir alive for the
/// duration of the test.
pub fn cache_with_tempdir() -> (TokenCache, TempDir) {
    let dir = TempDir::new().expect("tempdir");
    let cache = TokenCache::new(FileStorage::new(dir.path()));
    (cache, dir)
}

pub fn storage_in(dir: &TempDir) -> FileStorage {
    FileStorage::new(dir.path())
}

/// Seed the persisted table directly, bypassing the cache.
pub async fn seed_table(dir: &TempDir, tokens: &[Token]) {
    let blob = serde_json::to_string(tokens).expect("serialize table");
    storage_in(dir)
        .write(TOKEN_CACHE_STORAGE_KEY, &blob)
        .await
        .expect("seed table");
}

/// Re-read the persisted table the way a later process would.
pub async fn read_table(dir: &TempDir) -> Option<TokenTable> {
    read_blob(dir)
        .await
        .map(|raw| serde_json::from_str(&raw).expect("parse table"))
}

/// Raw persisted blob, for byte-identity assertions.
pub async fn read_blob(dir: &TempDir) -> Option<String> {
    storage_in(dir)
        .read(TOKEN_CACHE_STORAGE_KEY)
        .await
        .expect("read blob")
}

pub fn fresh_token(name: &str, bearer: &str) -> Token {
    Token::new(name.to_owned(), now_millis() + 100_000, bearer.to_owned())
}

pub fn expired_token(name: &str, bearer: &str) -> Token {
    Token::new(name.to_owned(), now_millis() - 1_000, bearer.to_owned())
}

/// Options pointing a request at a mock admin-ajax.php.
pub fn options_for(server: &MockServer) -> TokenRequestOptions {
    TokenRequestOptions {
        nonce: TEST_NONCE.to_owned(),
        ajax_url: server.url(AJAX_PATH),
    }
}

/// Success body: result carries "<expiry-epoch-seconds>,<accessToken>".
pub fn ok_body(expiry_secs: i64, bearer: &str) -> serde_json::Value {
    json!({ "status": "OK", "result": format!("{},{}", expiry_secs, bearer) })
}
