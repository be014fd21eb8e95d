// Refresh semantics: empty storage bootstraps to a one-record table,
// duplicates collapse on write, and a persisted record survives a
// simulated process restart unchanged.

#[cfg(test)]
mod test {
    use httpmock::prelude::*;

    use crate::backend::request::TokenRequest;
    use crate::cache::token::Token;
    use crate::cache::token_cache::TokenCache;
    use crate::helpers::time::{now_millis, now_secs};
    use crate::tests::common::*;

    #[tokio::test]
    async fn empty_storage_bootstraps_to_single_record() {
        let expiry = now_secs() + 3600;
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(AJAX_PATH);
                then.status(200).json_body(ok_body(expiry, "abc"));
            })
            .await;

        let (cache, dir) = cache_with_tempdir();
        assert!(read_blob(&dir).await.is_none());

        let request = TokenRequest::resource("graph".to_owned(), "https://graph".to_owned());
        let token = cache
            .get_token(&request, &options_for(&server))
            .await
            .expect("token");

        assert_eq!(token, Token::new("graph".to_owned(), expiry * 1000, "abc".to_owned()));
        assert_eq!(mock.hits_async().await, 1);

        let table = read_table(&dir).await.expect("persisted table");
        assert_eq!(table.len(), 1);
        assert_eq!(table[0], token);
    }

    #[tokio::test]
    async fn duplicate_records_collapse_to_one_on_refresh() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path(AJAX_PATH);
                then.status(200).json_body(ok_body(now_secs() + 3600, "fresh"));
            })
            .await;

        // a prior inconsistency left two records for the same name behind
        let (cache, dir) = cache_with_tempdir();
        seed_table(
            &dir,
            &[
                expired_token("graph", "old-1"),
                expired_token("graph", "old-2"),
                fresh_token("yammer", "untouched"),
            ],
        )
        .await;

        let request = TokenRequest::resource("graph".to_owned(), "https://graph".to_owned());
        cache
            .get_token(&request, &options_for(&server))
            .await
            .expect("token");

        let table = read_table(&dir).await.expect("persisted table");
        let graph_records: Vec<_> = table.iter().filter(|t| t.name == "graph").collect();
        assert_eq!(graph_records.len(), 1);
        assert_eq!(graph_records[0].bearer, "fresh");
        assert!(table.iter().any(|t| t.name == "yammer"));
    }

    #[tokio::test]
    async fn persisted_record_round_trips_across_restart() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path(AJAX_PATH);
                then.status(200).json_body(ok_body(now_secs() + 3600, "durable"));
            })
            .await;

        let (cache, dir) = cache_with_tempdir();
        let request = TokenRequest::resource("graph".to_owned(), "https://graph".to_owned());
        let written = cache
            .get_token(&request, &options_for(&server))
            .await
            .expect("token");

        // a later process lifetime: new cache over the same storage dir
        let reloaded_cache = TokenCache::new(storage_in(&dir));
        let reloaded = reloaded_cache
            .get_token(&request, &options_for(&server))
            .await
            .expect("reloaded token");

        assert_eq!(written, reloaded);
        assert!(reloaded.is_fresh(now_millis()));
        assert_eq!(mock.hits_async().await, 1);
    }
}
