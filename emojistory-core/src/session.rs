//! StorySession - the per-keystroke event handler.
//!
//! The session owns the story and the resolution state. It never performs
//! I/O itself: input events return the lookups to start, and the caller
//! feeds finished lookups back through [`StorySession::complete`].

use thiserror::Error;

use crate::config::{FinderConfig, LookupTrigger, NotFoundPolicy};
use crate::detect::new_words;
use crate::ordering::ReorderBuffer;
use crate::resolver::LookupOutcome;
use crate::story::{ResolvedEntry, Story};

/// Message shown when an explicit lookup is submitted with no text.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a word to search";

/// Message shown when a word has no emoji under [`NotFoundPolicy::Error`].
pub const NOT_FOUND_MESSAGE: &str = "No emoji found for that word.";

/// Errors from session input operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please enter a word to search")]
    EmptyQuery,

    #[error("Input is locked while a lookup is in flight")]
    InputLocked,

    #[error("Lookups are triggered {0}ly in this session")]
    WrongTrigger(LookupTrigger),
}

/// State of the resolution pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResolutionState {
    #[default]
    Idle,
    Resolving { in_flight: usize },
    Error(String),
}

impl ResolutionState {
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// A lookup the caller should start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingLookup {
    /// Position of the word in the input stream.
    pub seq: u64,
    pub word: String,
}

/// What happened to a finished lookup once it was applied in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Applied {
    /// An entry was appended to the story at `index`.
    Appended {
        seq: u64,
        word: String,
        index: usize,
        entry: ResolvedEntry,
    },
    /// Nothing was appended; `message` is shown instead.
    Rejected {
        seq: u64,
        word: String,
        message: String,
    },
}

/// A story session.
#[derive(Debug)]
pub struct StorySession {
    config: FinderConfig,
    story: Story,
    issued: u64,
    in_flight: usize,
    reorder: ReorderBuffer<(PendingLookup, LookupOutcome)>,
    state: ResolutionState,
    last_error: Option<String>,
    show_names: bool,
}

impl StorySession {
    pub fn new(config: FinderConfig) -> Self {
        let show_names = config.show_names;
        Self {
            config,
            story: Story::new(),
            issued: 0,
            in_flight: 0,
            reorder: ReorderBuffer::new(),
            state: ResolutionState::Idle,
            last_error: None,
            show_names,
        }
    }

    pub fn config(&self) -> &FinderConfig {
        &self.config
    }

    pub fn story(&self) -> &Story {
        &self.story
    }

    pub fn state(&self) -> &ResolutionState {
        &self.state
    }

    /// Number of lookups started but not yet applied.
    ///
    /// Results held back behind an earlier, unfinished word still count.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Number of lookups issued so far.
    pub fn issued(&self) -> u64 {
        self.issued
    }

    /// Whether typing should be rejected right now.
    pub fn input_locked(&self) -> bool {
        self.config.lock_input_while_resolving && self.in_flight > 0
    }

    pub fn show_names(&self) -> bool {
        self.show_names
    }

    pub fn toggle_names(&mut self) -> bool {
        self.show_names = !self.show_names;
        self.show_names
    }

    /// Handle a change of the input buffer.
    ///
    /// With the implicit trigger, returns one lookup per word completed since
    /// the last call. With the explicit trigger, never returns anything.
    pub fn on_input(&mut self, buffer: &str) -> Vec<PendingLookup> {
        if self.config.trigger != LookupTrigger::Implicit {
            return Vec::new();
        }

        let pending: Vec<PendingLookup> = new_words(buffer, self.issued as usize)
            .into_iter()
            .map(|(index, word)| PendingLookup {
                seq: index as u64,
                word: word.to_string(),
            })
            .collect();

        if let Some(last) = pending.last() {
            self.issued = last.seq + 1;
            self.in_flight += pending.len();
            self.refresh_state();
            tracing::debug!(count = pending.len(), issued = self.issued, "words completed");
        }

        pending
    }

    /// Submit the whole buffer as one lookup (explicit trigger).
    pub fn submit(&mut self, buffer: &str) -> Result<PendingLookup, SessionError> {
        if self.config.trigger != LookupTrigger::Explicit {
            return Err(SessionError::WrongTrigger(self.config.trigger));
        }
        if self.input_locked() {
            return Err(SessionError::InputLocked);
        }

        let query = buffer.trim();
        if query.is_empty() {
            self.last_error = Some(EMPTY_QUERY_MESSAGE.to_string());
            self.refresh_state();
            return Err(SessionError::EmptyQuery);
        }

        let pending = PendingLookup {
            seq: self.issued,
            word: query.to_string(),
        };
        self.issued += 1;
        self.in_flight += 1;
        self.refresh_state();
        Ok(pending)
    }

    /// Record a finished lookup and apply everything that is now in order.
    ///
    /// Completions for lookups this session never issued, or already
    /// completed, are ignored.
    pub fn complete(&mut self, lookup: PendingLookup, outcome: LookupOutcome) -> Vec<Applied> {
        let seq = lookup.seq;
        if seq >= self.issued || !self.reorder.push(seq, (lookup, outcome)) {
            tracing::warn!(seq, "ignoring unexpected completion");
            return Vec::new();
        }

        let applied: Vec<Applied> = self
            .reorder
            .drain_ready()
            .into_iter()
            .map(|(lookup, outcome)| self.apply(lookup, outcome))
            .collect();

        self.refresh_state();
        applied
    }

    fn apply(&mut self, lookup: PendingLookup, outcome: LookupOutcome) -> Applied {
        let PendingLookup { seq, word } = lookup;
        self.in_flight = self.in_flight.saturating_sub(1);

        let entry = match (outcome, self.config.on_not_found) {
            (LookupOutcome::Found(entry), _) => entry,
            (LookupOutcome::NotFound | LookupOutcome::Failed(_), NotFoundPolicy::Sentinel) => {
                ResolvedEntry::unknown()
            }
            (LookupOutcome::NotFound | LookupOutcome::Failed(_), NotFoundPolicy::EchoWord) => {
                ResolvedEntry::echo(&word)
            }
            (LookupOutcome::NotFound, NotFoundPolicy::Error) => {
                return self.reject(seq, word, NOT_FOUND_MESSAGE.to_string());
            }
            (LookupOutcome::Failed(detail), NotFoundPolicy::Error) => {
                return self.reject(seq, word, format!("Error: {detail}"));
            }
        };

        self.last_error = None;
        let index = self.story.append(entry.clone());
        Applied::Appended {
            seq,
            word,
            index,
            entry,
        }
    }

    fn reject(&mut self, seq: u64, word: String, message: String) -> Applied {
        self.last_error = Some(message.clone());
        Applied::Rejected { seq, word, message }
    }

    fn refresh_state(&mut self) {
        self.state = if self.in_flight > 0 {
            ResolutionState::Resolving {
                in_flight: self.in_flight,
            }
        } else if let Some(message) = &self.last_error {
            ResolutionState::Error(message.clone())
        } else {
            ResolutionState::Idle
        };
    }
}
