//! Finder configuration.
//!
//! The policies here cover the points where earlier versions of the tool
//! behaved differently: how a lookup is triggered and what a word with no
//! emoji turns into.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// When a lookup is started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LookupTrigger {
    /// Every word completed by a trailing space is looked up.
    #[default]
    Implicit,
    /// The whole input is looked up when the user presses Enter.
    Explicit,
}

/// What a word with no emoji (or a failed lookup) becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotFoundPolicy {
    /// Append the fallback glyph.
    #[default]
    Sentinel,
    /// Append the typed word itself in place of a glyph.
    EchoWord,
    /// Append nothing and surface an error message.
    Error,
}

/// Error parsing a policy name.
#[derive(Debug, Clone, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseConfigError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for LookupTrigger {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "implicit" | "word" => Ok(Self::Implicit),
            "explicit" | "enter" => Ok(Self::Explicit),
            _ => Err(ParseConfigError {
                kind: "trigger",
                value: s.to_string(),
                expected: "implicit, explicit",
            }),
        }
    }
}

impl fmt::Display for LookupTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Implicit => write!(f, "implicit"),
            Self::Explicit => write!(f, "explicit"),
        }
    }
}

impl FromStr for NotFoundPolicy {
    type Err = ParseConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sentinel" => Ok(Self::Sentinel),
            "echo-word" | "echoword" | "echo_word" | "echo" => Ok(Self::EchoWord),
            "error" => Ok(Self::Error),
            _ => Err(ParseConfigError {
                kind: "not-found policy",
                value: s.to_string(),
                expected: "sentinel, echo-word, error",
            }),
        }
    }
}

impl fmt::Display for NotFoundPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sentinel => write!(f, "sentinel"),
            Self::EchoWord => write!(f, "echo-word"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Configuration for a story session.
#[derive(Debug, Clone, Default)]
pub struct FinderConfig {
    /// How lookups are triggered.
    pub trigger: LookupTrigger,

    /// What happens when a word has no emoji or the lookup fails.
    pub on_not_found: NotFoundPolicy,

    /// Reject typing while any lookup is in flight.
    pub lock_input_while_resolving: bool,

    /// Whether glyph names start out visible.
    pub show_names: bool,
}

impl FinderConfig {
    /// Implicit trigger, sentinel fallback, unlocked input, names hidden.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the lookup trigger.
    pub fn with_trigger(mut self, trigger: LookupTrigger) -> Self {
        self.trigger = trigger;
        self
    }

    /// Set the not-found policy.
    pub fn with_not_found(mut self, policy: NotFoundPolicy) -> Self {
        self.on_not_found = policy;
        self
    }

    /// Lock input while lookups are in flight.
    pub fn with_input_lock(mut self, lock: bool) -> Self {
        self.lock_input_while_resolving = lock;
        self
    }

    /// Show glyph names from the start.
    pub fn with_names(mut self, show: bool) -> Self {
        self.show_names = show;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = FinderConfig::new();
        assert_eq!(config.trigger, LookupTrigger::Implicit);
        assert_eq!(config.on_not_found, NotFoundPolicy::Sentinel);
        assert!(!config.lock_input_while_resolving);
        assert!(!config.show_names);
    }

    #[test]
    fn test_builder() {
        let config = FinderConfig::new()
            .with_trigger(LookupTrigger::Explicit)
            .with_not_found(NotFoundPolicy::Error)
            .with_input_lock(true)
            .with_names(true);

        assert_eq!(config.trigger, LookupTrigger::Explicit);
        assert_eq!(config.on_not_found, NotFoundPolicy::Error);
        assert!(config.lock_input_while_resolving);
        assert!(config.show_names);
    }

    #[test]
    fn test_parse_policies() {
        assert_eq!("Explicit".parse::<LookupTrigger>().unwrap(), LookupTrigger::Explicit);
        assert_eq!("echo-word".parse::<NotFoundPolicy>().unwrap(), NotFoundPolicy::EchoWord);
        assert_eq!("error".parse::<NotFoundPolicy>().unwrap(), NotFoundPolicy::Error);

        let err = "sometimes".parse::<LookupTrigger>().unwrap_err();
        assert!(err.to_string().contains("sometimes"));
    }

    #[test]
    fn test_display_parses_back() {
        for policy in [NotFoundPolicy::Sentinel, NotFoundPolicy::EchoWord, NotFoundPolicy::Error] {
            assert_eq!(policy.to_string().parse::<NotFoundPolicy>().unwrap(), policy);
        }
    }
}
