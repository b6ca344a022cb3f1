//! Word-to-emoji story engine.
//!
//! This crate provides:
//! - Word boundary detection over a live input buffer
//! - A resolver that turns each completed word into a glyph and a name
//! - An append-only story of resolved entries
//! - An ordering queue so out-of-order responses are applied in word order
//! - A session type that ties these together behind an explicit event handler
//!
//! # Quick Start
//!
//! ```ignore
//! use emoji_client::EmojiClient;
//! use emojistory_core::{FinderConfig, HeadlessStory, Resolver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let resolver = Resolver::new(EmojiClient::from_env()?);
//!     let mut story = HeadlessStory::new(FinderConfig::new(), resolver);
//!
//!     story.send("the cat sat").await?;
//!     println!("{}", story.session().story().glyphs().join(""));
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod detect;
pub mod headless;
pub mod ordering;
pub mod resolver;
pub mod session;
pub mod story;
pub mod testing;

pub use config::{FinderConfig, LookupTrigger, NotFoundPolicy, ParseConfigError};
pub use detect::{detect_new_word, new_words};
pub use headless::HeadlessStory;
pub use ordering::ReorderBuffer;
pub use resolver::{EmojiLookup, LookupOutcome, Resolver};
pub use session::{Applied, PendingLookup, ResolutionState, SessionError, StorySession};
pub use story::{ResolvedEntry, Story, FALLBACK_GLYPH, FALLBACK_NAME};
pub use testing::MockLookup;
