//! Testing utilities.
//!
//! `MockLookup` is a scripted stand-in for the emoji service so sessions can
//! be exercised without network access or an API key.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use async_trait::async_trait;
use emoji_client::Emoji;

use crate::resolver::EmojiLookup;

#[derive(Debug, Clone)]
enum Scripted {
    Emojis(Vec<Emoji>),
    Network(String),
    Status(u16),
}

#[derive(Debug, Default)]
struct MockState {
    scripted: HashMap<String, Scripted>,
    delays: HashMap<String, Duration>,
    queries: Vec<String>,
}

/// A lookup that returns scripted responses.
///
/// Words with no script answer with an empty candidate list. Clones share
/// the same script and query log.
#[derive(Debug, Clone, Default)]
pub struct MockLookup {
    state: Arc<Mutex<MockState>>,
}

impl MockLookup {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Answer `word` with the given `(glyph, name)` candidates, in order.
    pub fn with_emojis(self, word: &str, candidates: &[(&str, &str)]) -> Self {
        let emojis = candidates
            .iter()
            .map(|(character, name)| Emoji {
                character: character.to_string(),
                name: name.to_string(),
                code: None,
                image: None,
                group: None,
                subgroup: None,
            })
            .collect();
        self.state()
            .scripted
            .insert(word.to_string(), Scripted::Emojis(emojis));
        self
    }

    /// Fail lookups of `word` with a transport error.
    pub fn with_network_error(self, word: &str, message: &str) -> Self {
        self.state()
            .scripted
            .insert(word.to_string(), Scripted::Network(message.to_string()));
        self
    }

    /// Fail lookups of `word` with a non-success HTTP status.
    pub fn with_status_error(self, word: &str, status: u16) -> Self {
        self.state()
            .scripted
            .insert(word.to_string(), Scripted::Status(status));
        self
    }

    /// Hold the response for `word` back by `delay`.
    pub fn with_delay(self, word: &str, delay: Duration) -> Self {
        self.state().delays.insert(word.to_string(), delay);
        self
    }

    /// Every word queried so far, in call order.
    pub fn queries(&self) -> Vec<String> {
        self.state().queries.clone()
    }
}

#[async_trait]
impl EmojiLookup for MockLookup {
    async fn lookup(&self, word: &str) -> Result<Vec<Emoji>, emoji_client::Error> {
        let (scripted, delay) = {
            let mut state = self.state();
            state.queries.push(word.to_string());
            (
                state.scripted.get(word).cloned(),
                state.delays.get(word).copied(),
            )
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        match scripted {
            Some(Scripted::Emojis(emojis)) => Ok(emojis),
            Some(Scripted::Network(message)) => Err(emoji_client::Error::Network(message)),
            Some(Scripted::Status(status)) => Err(emoji_client::Error::Api {
                status,
                message: format!("scripted status {status}"),
            }),
            None => Ok(Vec::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_responses() {
        let mock = MockLookup::new()
            .with_emojis("cat", &[("🐱", "cat face")])
            .with_status_error("dog", 500);

        let cat = mock.lookup("cat").await.unwrap();
        assert_eq!(cat[0].character, "🐱");

        assert!(matches!(
            mock.lookup("dog").await,
            Err(emoji_client::Error::Api { status: 500, .. })
        ));
        assert!(mock.lookup("unscripted").await.unwrap().is_empty());
        assert_eq!(mock.queries(), vec!["cat", "dog", "unscripted"]);
    }

    #[tokio::test]
    async fn test_clones_share_log() {
        let mock = MockLookup::new();
        let clone = mock.clone();
        clone.lookup("fire").await.unwrap();
        assert_eq!(mock.queries(), vec!["fire"]);
    }
}
