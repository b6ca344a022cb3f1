//! Headless driver for story sessions.
//!
//! `HeadlessStory` plays text into a session as if it were typed, runs the
//! resulting lookups concurrently, and applies their results in word order.
//! It backs the binary's `--headless` mode and the scenario tests.

use futures::stream::{FuturesUnordered, StreamExt};

use crate::config::{FinderConfig, LookupTrigger};
use crate::resolver::Resolver;
use crate::session::{Applied, PendingLookup, SessionError, StorySession};

/// A session plus the resolver that feeds it, with no UI attached.
pub struct HeadlessStory {
    session: StorySession,
    resolver: Resolver,
    buffer: String,
}

impl HeadlessStory {
    pub fn new(config: FinderConfig, resolver: Resolver) -> Self {
        Self {
            session: StorySession::new(config),
            resolver,
            buffer: String::new(),
        }
    }

    pub fn session(&self) -> &StorySession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut StorySession {
        &mut self.session
    }

    /// Everything typed so far (implicit trigger only).
    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Send one line of input.
    ///
    /// With the implicit trigger the line is typed followed by a space, so
    /// its last word completes too. With the explicit trigger the line is
    /// submitted as a single lookup.
    pub async fn send(&mut self, line: &str) -> Result<Vec<Applied>, SessionError> {
        match self.session.config().trigger {
            LookupTrigger::Implicit => {
                let mut text = line.to_string();
                text.push(' ');
                Ok(self.type_text(&text).await)
            }
            LookupTrigger::Explicit => self.submit(line).await,
        }
    }

    /// Type `text` one character at a time.
    ///
    /// When the session locks input during lookups, typing pauses until the
    /// outstanding lookups have been applied.
    pub async fn type_text(&mut self, text: &str) -> Vec<Applied> {
        let mut applied = Vec::new();
        let mut pending = Vec::new();

        for c in text.chars() {
            if self.session.input_locked() {
                applied.extend(self.run(std::mem::take(&mut pending)).await);
            }
            self.buffer.push(c);
            pending.extend(self.session.on_input(&self.buffer));
        }

        applied.extend(self.run(pending).await);
        applied
    }

    /// Submit `query` as one explicit lookup and wait for it.
    pub async fn submit(&mut self, query: &str) -> Result<Vec<Applied>, SessionError> {
        let pending = self.session.submit(query)?;
        Ok(self.run(vec![pending]).await)
    }

    /// Run lookups concurrently, completing each as soon as it answers.
    async fn run(&mut self, pending: Vec<PendingLookup>) -> Vec<Applied> {
        let mut tasks: FuturesUnordered<_> = pending
            .into_iter()
            .map(|lookup| {
                let resolver = self.resolver.clone();
                async move {
                    let outcome = resolver.lookup(&lookup.word).await;
                    (lookup, outcome)
                }
            })
            .collect();

        let mut applied = Vec::new();
        while let Some((lookup, outcome)) = tasks.next().await {
            applied.extend(self.session.complete(lookup, outcome));
        }
        applied
    }
}
