//! Scenario tests for the word-to-emoji story, run against a scripted lookup.

use std::time::Duration;

use emojistory_core::session::{EMPTY_QUERY_MESSAGE, NOT_FOUND_MESSAGE};
use emojistory_core::{
    Applied, FinderConfig, HeadlessStory, LookupTrigger, MockLookup, NotFoundPolicy,
    ResolutionState, Resolver, SessionError, StorySession,
};

fn story_with(config: FinderConfig, mock: &MockLookup) -> HeadlessStory {
    HeadlessStory::new(config, Resolver::new(mock.clone()))
}

// =============================================================================
// SCENARIO 1: a single known word
// =============================================================================

#[tokio::test]
async fn test_single_word_resolves() {
    let mock = MockLookup::new().with_emojis("cat", &[("🐱", "cat face")]);
    let mut story = story_with(FinderConfig::new(), &mock);

    story.type_text("cat ").await;

    assert_eq!(mock.queries(), vec!["cat"]);
    assert_eq!(story.session().story().glyphs(), ["🐱"]);
    assert_eq!(story.session().story().names(), ["cat face"]);
}

#[tokio::test]
async fn test_no_query_mid_word() {
    let mock = MockLookup::new();
    let mut story = story_with(FinderConfig::new(), &mock);

    story.type_text("ca").await;
    story.type_text("t").await;

    assert!(mock.queries().is_empty());
    assert!(story.session().story().is_empty());
}

// =============================================================================
// SCENARIO 2: a word with no emoji
// =============================================================================

#[tokio::test]
async fn test_unknown_word_gets_sentinel() {
    let mock = MockLookup::new().with_emojis("xyzzynotaword", &[]);
    let mut story = story_with(FinderConfig::new(), &mock);

    story.type_text("xyzzynotaword ").await;

    assert_eq!(story.session().story().glyphs(), ["❓"]);
    assert_eq!(story.session().story().names(), ["unknown"]);
}

#[tokio::test]
async fn test_unknown_word_error_policy() {
    let mock = MockLookup::new().with_emojis("xyzzynotaword", &[]);
    let config = FinderConfig::new().with_not_found(NotFoundPolicy::Error);
    let mut story = story_with(config, &mock);

    let applied = story.type_text("xyzzynotaword ").await;

    assert!(matches!(applied.as_slice(), [Applied::Rejected { .. }]));
    assert!(story.session().story().is_empty());
    assert_eq!(story.session().state().error(), Some(NOT_FOUND_MESSAGE));
}

#[tokio::test]
async fn test_unknown_word_echo_policy() {
    let mock = MockLookup::new();
    let config = FinderConfig::new().with_not_found(NotFoundPolicy::EchoWord);
    let mut story = story_with(config, &mock);

    story.type_text("snarf ").await;

    assert_eq!(story.session().story().glyphs(), ["snarf"]);
}

// =============================================================================
// SCENARIO 3: overlapping lookups complete out of order
// =============================================================================

#[tokio::test]
async fn test_out_of_order_responses_keep_word_order() {
    let mock = MockLookup::new()
        .with_emojis("fire", &[("🔥", "fire")])
        .with_delay("fire", Duration::from_millis(50))
        .with_emojis("ice", &[("🧊", "ice")]);
    let mut story = story_with(FinderConfig::new(), &mock);

    let applied = story.type_text("fire ice ").await;

    assert_eq!(mock.queries(), vec!["fire", "ice"]);
    let seqs: Vec<u64> = applied
        .iter()
        .map(|a| match a {
            Applied::Appended { seq, .. } | Applied::Rejected { seq, .. } => *seq,
        })
        .collect();
    assert_eq!(seqs, vec![0, 1]);
    assert_eq!(story.session().story().glyphs(), ["🔥", "🧊"]);
    assert_eq!(story.session().story().names(), ["fire", "ice"]);
}

#[tokio::test]
async fn test_locked_input_waits_between_words() {
    let mock = MockLookup::new()
        .with_emojis("fire", &[("🔥", "fire")])
        .with_delay("fire", Duration::from_millis(20))
        .with_emojis("ice", &[("🧊", "ice")]);
    let config = FinderConfig::new().with_input_lock(true);
    let mut story = story_with(config, &mock);

    story.type_text("fire ice ").await;

    assert_eq!(story.session().story().glyphs(), ["🔥", "🧊"]);
    assert_eq!(story.session().in_flight(), 0);
}

#[tokio::test]
async fn test_pasted_words_each_resolve() {
    let mock = MockLookup::new()
        .with_emojis("sun", &[("☀️", "sun")])
        .with_emojis("moon", &[("🌙", "crescent moon")]);
    let resolver = Resolver::new(mock.clone());
    let mut session = StorySession::new(FinderConfig::new());

    // Both words complete on the same keystroke
    let pending = session.on_input("sun moon ");
    assert_eq!(pending.len(), 2);

    // Answer the second word first
    for lookup in pending.into_iter().rev() {
        let outcome = resolver.lookup(&lookup.word).await;
        session.complete(lookup, outcome);
    }

    assert_eq!(mock.queries(), vec!["moon", "sun"]);
    assert_eq!(session.story().names(), ["sun", "crescent moon"]);
}

// =============================================================================
// SCENARIO 4: network failures never wedge the session
// =============================================================================

#[tokio::test]
async fn test_network_error_sentinel_and_recovery() {
    let mock = MockLookup::new()
        .with_network_error("fire", "connection refused")
        .with_emojis("ice", &[("🧊", "ice")]);
    let config = FinderConfig::new().with_input_lock(true);
    let mut story = story_with(config, &mock);

    story.type_text("fire ").await;
    assert_eq!(story.session().story().glyphs(), ["❓"]);
    assert!(!story.session().input_locked());
    assert_eq!(story.session().state(), &ResolutionState::Idle);

    story.type_text("ice ").await;
    assert_eq!(story.session().story().glyphs(), ["❓", "🧊"]);
}

#[tokio::test]
async fn test_network_error_shown_with_error_policy() {
    let mock = MockLookup::new().with_status_error("fire", 503);
    let config = FinderConfig::new()
        .with_trigger(LookupTrigger::Explicit)
        .with_not_found(NotFoundPolicy::Error);
    let mut story = story_with(config, &mock);

    story.send("fire").await.unwrap();

    let error = story.session().state().error().unwrap_or_default();
    assert!(error.starts_with("Error: "), "got {error:?}");
    assert!(error.contains("503"));
    assert!(story.session().story().is_empty());
}

// =============================================================================
// INVARIANTS
// =============================================================================

#[tokio::test]
async fn test_empty_explicit_input_never_queries() {
    let mock = MockLookup::new();
    let config = FinderConfig::new().with_trigger(LookupTrigger::Explicit);
    let mut story = story_with(config, &mock);

    assert_eq!(story.send("").await, Err(SessionError::EmptyQuery));
    assert_eq!(story.send(" \t ").await, Err(SessionError::EmptyQuery));
    assert!(mock.queries().is_empty());
    assert_eq!(story.session().state().error(), Some(EMPTY_QUERY_MESSAGE));
}

#[tokio::test]
async fn test_story_only_grows_and_stays_parallel() {
    let mock = MockLookup::new()
        .with_emojis("a", &[("🅰️", "A button")])
        .with_network_error("b", "reset");
    let mut story = story_with(FinderConfig::new(), &mock);

    let mut previous = 0;
    for line in ["a", "b", "a b", "zzz"] {
        story.send(line).await.unwrap();
        let current = story.session().story();
        assert_eq!(current.glyphs().len(), current.names().len());
        assert!(current.len() >= previous);
        previous = current.len();
    }
    assert_eq!(previous, 5);
}
