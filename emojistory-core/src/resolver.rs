//! Word-to-emoji resolution.
//!
//! The resolver sits behind the [`EmojiLookup`] trait so sessions can run
//! against the real API Ninjas client or a scripted fake.

use std::sync::Arc;

use async_trait::async_trait;
use emoji_client::{Emoji, EmojiClient};

use crate::story::ResolvedEntry;

/// A source of emoji candidates for a word.
#[async_trait]
pub trait EmojiLookup: Send + Sync {
    /// Fetch candidates for `word`, best match first.
    async fn lookup(&self, word: &str) -> Result<Vec<Emoji>, emoji_client::Error>;
}

#[async_trait]
impl EmojiLookup for EmojiClient {
    async fn lookup(&self, word: &str) -> Result<Vec<Emoji>, emoji_client::Error> {
        EmojiClient::lookup(self, word).await
    }
}

/// Result of a single lookup, before any fallback policy is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupOutcome {
    /// The service returned at least one candidate; this is the first.
    Found(ResolvedEntry),
    /// The service answered with no candidates.
    NotFound,
    /// The request failed (status, transport, or body).
    Failed(String),
}

impl LookupOutcome {
    /// Collapse a service response into an outcome. The first candidate wins.
    pub fn from_response(response: Result<Vec<Emoji>, emoji_client::Error>) -> Self {
        match response {
            Ok(candidates) => match candidates.into_iter().next() {
                Some(first) => Self::Found(ResolvedEntry::new(first.character, first.name)),
                None => Self::NotFound,
            },
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// The entry to show, substituting the fallback for anything but a hit.
    pub fn into_entry(self) -> ResolvedEntry {
        match self {
            Self::Found(entry) => entry,
            Self::NotFound | Self::Failed(_) => ResolvedEntry::unknown(),
        }
    }
}

/// Resolves words through an injected [`EmojiLookup`].
#[derive(Clone)]
pub struct Resolver {
    lookup: Arc<dyn EmojiLookup>,
}

impl Resolver {
    pub fn new(lookup: impl EmojiLookup + 'static) -> Self {
        Self {
            lookup: Arc::new(lookup),
        }
    }

    pub fn from_arc(lookup: Arc<dyn EmojiLookup>) -> Self {
        Self { lookup }
    }

    /// Query the service once for `word` and report what came back.
    pub async fn lookup(&self, word: &str) -> LookupOutcome {
        let word = word.trim();
        if word.is_empty() {
            return LookupOutcome::Failed("empty query".to_string());
        }

        let outcome = LookupOutcome::from_response(self.lookup.lookup(word).await);
        match &outcome {
            LookupOutcome::Found(entry) => {
                tracing::debug!(%word, glyph = %entry.glyph, name = %entry.name, "resolved")
            }
            LookupOutcome::NotFound => tracing::debug!(%word, "no emoji"),
            LookupOutcome::Failed(error) => tracing::warn!(%word, %error, "lookup failed"),
        }
        outcome
    }

    /// Resolve `word` to an entry. Never fails; misses become the fallback.
    pub async fn resolve(&self, word: &str) -> ResolvedEntry {
        self.lookup(word).await.into_entry()
    }
}
