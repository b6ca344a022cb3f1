//! Word boundary detection.
//!
//! A word is complete once the buffer ends in a space. Detection is pure and
//! cheap so it can run on every keystroke.

fn at_boundary(buffer: &str) -> bool {
    buffer.ends_with(' ')
}

/// Return the newest word if the buffer has just completed one.
///
/// A word is returned only when the buffer ends in a space and the trimmed
/// buffer holds more whitespace-delimited tokens than `story_len`.
pub fn detect_new_word(buffer: &str, story_len: usize) -> Option<&str> {
    if !at_boundary(buffer) {
        return None;
    }

    let tokens: Vec<&str> = buffer.split_whitespace().collect();
    if tokens.len() > story_len {
        tokens.last().copied()
    } else {
        None
    }
}

/// Return every completed word at or past index `seen`, paired with its index.
///
/// Same boundary rule as [`detect_new_word`], but a paste that completes
/// several words at once yields all of them in word order.
pub fn new_words(buffer: &str, seen: usize) -> Vec<(usize, &str)> {
    if !at_boundary(buffer) {
        return Vec::new();
    }

    buffer
        .split_whitespace()
        .enumerate()
        .skip(seen)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_word_mid_typing() {
        assert_eq!(detect_new_word("ca", 0), None);
        assert_eq!(detect_new_word("cat", 0), None);
    }

    #[test]
    fn test_word_on_space() {
        assert_eq!(detect_new_word("cat ", 0), Some("cat"));
        assert_eq!(detect_new_word("cat dog ", 1), Some("dog"));
    }

    #[test]
    fn test_no_new_token() {
        assert_eq!(detect_new_word("cat ", 1), None);
        // Extra spaces do not create tokens
        assert_eq!(detect_new_word("cat   ", 1), None);
    }

    #[test]
    fn test_shrunk_buffer() {
        assert_eq!(detect_new_word("cat ", 3), None);
        assert_eq!(detect_new_word("", 0), None);
        assert_eq!(detect_new_word("   ", 0), None);
    }

    #[test]
    fn test_tabs_count_as_separators() {
        assert_eq!(detect_new_word("fire\tice ", 1), Some("ice"));
    }

    #[test]
    fn test_new_words_after_paste() {
        assert_eq!(
            new_words("the cat sat ", 0),
            vec![(0, "the"), (1, "cat"), (2, "sat")]
        );
        assert_eq!(new_words("the cat sat ", 2), vec![(2, "sat")]);
        assert!(new_words("the cat sat ", 3).is_empty());
    }

    #[test]
    fn test_new_words_requires_boundary() {
        assert!(new_words("the cat sa", 0).is_empty());
    }

    #[test]
    fn test_unicode_words() {
        assert_eq!(detect_new_word("café ", 0), Some("café"));
    }
}
