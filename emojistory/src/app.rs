//! Main application state and logic

use emojistory_core::{
    Applied, FinderConfig, LookupOutcome, LookupTrigger, PendingLookup, Resolver, SessionError,
    StorySession,
};
use tokio::sync::mpsc;

use crate::ui::theme::StoryTheme;
use crate::ui::Overlay;

/// A finished lookup on its way back to the UI loop
pub type Completion = (PendingLookup, LookupOutcome);

const COMPLETION_CHANNEL_SIZE: usize = 64;

/// Vim-style input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Normal mode - hotkeys and scrolling
    Normal,
    /// Insert mode - typing the story (default)
    #[default]
    Insert,
}

/// Main application state
pub struct App {
    pub session: StorySession,
    resolver: Resolver,

    // Lookup tasks report back on this channel
    completion_tx: mpsc::Sender<Completion>,
    completion_rx: mpsc::Receiver<Completion>,

    // UI state
    pub theme: StoryTheme,
    overlay: Option<Overlay>,
    pub story_scroll: usize,

    // Input state
    pub input_mode: InputMode,
    input_buffer: String,
    cursor_position: usize,

    // Status
    status_message: Option<String>,
    pub should_quit: bool,

    // Animation
    pub animation_frame: u8,
}

impl App {
    /// Create a new application around a fresh session
    pub fn new(config: FinderConfig, resolver: Resolver) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel(COMPLETION_CHANNEL_SIZE);

        Self {
            session: StorySession::new(config),
            resolver,
            completion_tx,
            completion_rx,
            theme: StoryTheme::default(),
            overlay: None,
            story_scroll: 0,
            input_mode: InputMode::Insert,
            input_buffer: String::new(),
            cursor_position: 0,
            status_message: None,
            should_quit: false,
            animation_frame: 0,
        }
    }

    pub fn trigger(&self) -> LookupTrigger {
        self.session.config().trigger
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Start one task per pending lookup.
    ///
    /// Must be called from within a tokio runtime.
    pub fn dispatch(&self, pending: Vec<PendingLookup>) {
        for lookup in pending {
            let resolver = self.resolver.clone();
            let tx = self.completion_tx.clone();
            tokio::spawn(async move {
                let outcome = resolver.lookup(&lookup.word).await;
                if tx.send((lookup, outcome)).await.is_err() {
                    tracing::debug!("UI closed before lookup finished");
                }
            });
        }
    }

    /// Apply every lookup that has finished since the last call
    pub fn drain_completions(&mut self) -> Vec<Applied> {
        let mut applied = Vec::new();
        while let Ok((lookup, outcome)) = self.completion_rx.try_recv() {
            applied.extend(self.session.complete(lookup, outcome));
        }
        if !applied.is_empty() {
            self.clear_status();
            self.scroll_to_bottom();
        }
        applied
    }

    /// Re-run word detection after the buffer changed
    fn input_changed(&mut self) -> Vec<PendingLookup> {
        self.session.on_input(&self.input_buffer)
    }

    /// Submit the buffer as an explicit lookup
    pub fn submit_input(&mut self) -> Result<PendingLookup, SessionError> {
        match self.session.submit(&self.input_buffer) {
            Ok(pending) => {
                self.clear_input();
                self.clear_status();
                Ok(pending)
            }
            // The session's error state already carries the empty-query message
            Err(SessionError::EmptyQuery) => {
                self.clear_status();
                Err(SessionError::EmptyQuery)
            }
            Err(e) => {
                self.set_status(e.to_string());
                Err(e)
            }
        }
    }

    // =========================================================================
    // Input editing
    // =========================================================================

    /// Reject edits while a lookup holds the input
    fn check_unlocked(&mut self) -> bool {
        if self.session.input_locked() {
            self.set_status("Waiting for lookup...");
            false
        } else {
            true
        }
    }

    /// Handle a typed character (unicode-safe)
    pub fn type_char(&mut self, c: char) -> Vec<PendingLookup> {
        if !self.check_unlocked() {
            return Vec::new();
        }
        let byte_pos = self.byte_index(self.cursor_position);
        self.input_buffer.insert(byte_pos, c);
        self.cursor_position += 1;
        self.input_changed()
    }

    /// Insert pasted text at the cursor
    pub fn paste(&mut self, text: &str) -> Vec<PendingLookup> {
        if !self.check_unlocked() {
            return Vec::new();
        }
        let text: String = text.chars().map(|c| if c == '\n' { ' ' } else { c }).collect();
        let byte_pos = self.byte_index(self.cursor_position);
        self.input_buffer.insert_str(byte_pos, &text);
        self.cursor_position += text.chars().count();
        self.input_changed()
    }

    /// Handle backspace (unicode-safe)
    pub fn backspace(&mut self) -> Vec<PendingLookup> {
        if !self.check_unlocked() || self.cursor_position == 0 {
            return Vec::new();
        }
        self.cursor_position -= 1;
        self.remove_char_at_cursor();
        self.input_changed()
    }

    /// Handle delete (unicode-safe)
    pub fn delete(&mut self) -> Vec<PendingLookup> {
        if !self.check_unlocked() {
            return Vec::new();
        }
        self.remove_char_at_cursor();
        self.input_changed()
    }

    fn remove_char_at_cursor(&mut self) {
        if let Some((byte_pos, ch)) = self.input_buffer.char_indices().nth(self.cursor_position) {
            self.input_buffer
                .replace_range(byte_pos..byte_pos + ch.len_utf8(), "");
        }
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.input_buffer
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.input_buffer.len())
    }

    /// Move cursor left
    pub fn cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    /// Move cursor right
    pub fn cursor_right(&mut self) {
        let char_count = self.input_buffer.chars().count();
        self.cursor_position = (self.cursor_position + 1).min(char_count);
    }

    /// Move cursor to start
    pub fn cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    /// Move cursor to end (unicode-safe)
    pub fn cursor_end(&mut self) {
        self.cursor_position = self.input_buffer.chars().count();
    }

    /// Clear the input buffer
    pub fn clear_input(&mut self) {
        self.input_buffer.clear();
        self.cursor_position = 0;
    }

    // =========================================================================
    // Display
    // =========================================================================

    /// Toggle the per-glyph name labels
    pub fn toggle_names(&mut self) {
        let shown = self.session.toggle_names();
        self.set_status(if shown { "Names shown" } else { "Names hidden" });
    }

    /// Toggle help overlay
    pub fn toggle_help(&mut self) {
        if matches!(self.overlay, Some(Overlay::Help)) {
            self.overlay = None;
        } else {
            self.overlay = Some(Overlay::Help);
        }
    }

    /// Close any open overlay
    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.story_scroll = self.story_scroll.saturating_sub(lines);
    }

    pub fn scroll_down(&mut self, lines: usize) {
        let max = self.session.story().len();
        self.story_scroll = (self.story_scroll + lines).min(max);
    }

    /// Follow the newest entry
    pub fn scroll_to_bottom(&mut self) {
        // The widget caps this to the real maximum
        self.story_scroll = self.session.story().len();
    }

    /// Tick for animations
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    /// Set status message (always overwrites)
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    // =========================================================================
    // Getters for private fields
    // =========================================================================

    pub fn overlay(&self) -> Option<&Overlay> {
        self.overlay.as_ref()
    }

    pub fn has_overlay(&self) -> bool {
        self.overlay.is_some()
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn input_buffer(&self) -> &str {
        &self.input_buffer
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }
}
