//! Integration tests that call the real API Ninjas emoji endpoint.
//!
//! These tests require API_NINJAS_KEY to be set (via .env file or environment).
//! Run with: `cargo test -p emoji-client --test api_integration -- --ignored`

use emoji_client::{EmojiClient, Error, API_KEY_VAR};

/// Load environment variables from .env file
fn setup() {
    let _ = dotenvy::dotenv();
}

fn has_api_key() -> bool {
    std::env::var(API_KEY_VAR).is_ok()
}

#[tokio::test]
#[ignore]
async fn test_lookup_known_word() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: {API_KEY_VAR} not set");
        return;
    }

    let client = EmojiClient::from_env().expect("client should build");
    let emojis = client.lookup("cat").await.expect("lookup should succeed");

    println!("Candidates: {emojis:?}");
    assert!(!emojis.is_empty(), "'cat' should have at least one emoji");
    assert!(emojis.iter().all(|e| !e.character.is_empty()));
}

#[tokio::test]
#[ignore]
async fn test_lookup_nonsense_word_is_empty() {
    setup();
    if !has_api_key() {
        eprintln!("Skipping test: {API_KEY_VAR} not set");
        return;
    }

    let client = EmojiClient::from_env().expect("client should build");
    let emojis = client
        .lookup("xyzzynotaword")
        .await
        .expect("lookup should succeed");
    assert!(emojis.is_empty());
}

#[tokio::test]
#[ignore]
async fn test_bad_key_is_api_error() {
    let client = EmojiClient::new("definitely-not-a-key").expect("client should build");
    match client.lookup("cat").await {
        Err(Error::Api { status, .. }) => assert!(status >= 400),
        other => panic!("expected API error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    let client = EmojiClient::new("test-key")
        .expect("client should build")
        .with_base_url("http://127.0.0.1:9");
    let result = client.lookup("cat").await;
    assert!(matches!(result, Err(Error::Network(_))), "got {result:?}");
}
