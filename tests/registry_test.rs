use mediascan::modules::provider::config::{ANILIST_APIKEY, THEMOVIEDB_APIKEY};
use mediascan::modules::provider::{AniList, ProviderConfig, ProviderRegistry, TheMovieDatabase};
use reqwest::Client;
use std::sync::Arc;

/// Route `log` output through the test harness (`RUST_LOG=info` to see it).
fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn test_no_credentials_means_no_providers() {
    init_logging();
    let registry = ProviderRegistry::new();
    let providers = registry.get_all(&ProviderConfig::default(), &Client::new());
    assert!(providers.is_empty());
}

#[test]
fn test_tmdb_credential_builds_exactly_one_provider() {
    init_logging();
    let config = ProviderConfig::default().with_credential(THEMOVIEDB_APIKEY, "abc123");

    let registry = ProviderRegistry::new();
    let providers = registry.get_all(&config, &Client::new());

    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].name(), "themoviedatabase");
}

#[test]
fn test_blank_credential_counts_as_unset() {
    init_logging();
    let config = ProviderConfig::from_vars(vec![(THEMOVIEDB_APIKEY.to_string(), "  ".to_string())]);

    let registry = ProviderRegistry::new();
    let providers = registry.get_all(&config, &Client::new());
    assert!(providers.is_empty());
}

#[test]
fn test_providers_follow_registration_order() {
    init_logging();
    let config = ProviderConfig::default()
        .with_credential(ANILIST_APIKEY, "anilist-token")
        .with_credential(THEMOVIEDB_APIKEY, "tmdb-key");

    let registry = ProviderRegistry::new();
    let providers = registry.get_all(&config, &Client::new());

    let names: Vec<&str> = providers.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["themoviedatabase", "anilist"]);
}

#[test]
fn test_recognized_credentials() {
    let registry = ProviderRegistry::new();
    assert_eq!(
        registry.recognized_credentials(),
        vec![THEMOVIEDB_APIKEY, ANILIST_APIKEY]
    );
}

#[test]
fn test_providers_hold_their_credential() {
    let tmdb = TheMovieDatabase::new(Client::new(), "abc123".to_string());
    assert_eq!(tmdb.api_key(), "abc123");

    let anilist = AniList::new(Client::new(), "token".to_string());
    assert_eq!(anilist.api_key(), "token");
}

#[test]
fn test_register_adds_a_backend() {
    init_logging();
    let mut registry = ProviderRegistry::new();
    registry.register("EXTRA_TMDB_APIKEY", |client, api_key| {
        Arc::new(TheMovieDatabase::new(client, api_key))
    });

    let config = ProviderConfig::default().with_credential("EXTRA_TMDB_APIKEY", "second-key");
    let providers = registry.get_all(&config, &Client::new());

    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].name(), "themoviedatabase");
}

#[test]
fn test_client_is_shared_not_owned() {
    init_logging();
    // The registry only borrows the caller's client; the caller keeps using
    // it after construction.
    let client = Client::new();
    let config = ProviderConfig::default().with_credential(THEMOVIEDB_APIKEY, "abc123");

    let providers = ProviderRegistry::new().get_all(&config, &client);
    assert_eq!(providers.len(), 1);

    // Still usable here - get_all took a reference.
    let _still_ours = client;
}
