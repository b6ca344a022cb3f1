//! Color theme and styling for the Emojistory TUI

use ratatui::style::{Color, Modifier, Style};

/// UI color theme
#[derive(Debug, Clone)]
pub struct StoryTheme {
    // Base colors
    pub foreground: Color,
    pub border: Color,
    pub border_focused: Color,

    // Story colors
    pub glyph: Color,
    pub name_text: Color,
    pub pending: Color,

    // Feedback colors
    pub input_text: Color,
    pub error_text: Color,
    pub busy_text: Color,
    pub hint_text: Color,
}

impl Default for StoryTheme {
    fn default() -> Self {
        Self {
            foreground: Color::White,
            border: Color::DarkGray,
            border_focused: Color::Cyan,

            glyph: Color::Reset,
            name_text: Color::Yellow,
            pending: Color::DarkGray,

            input_text: Color::Cyan,
            error_text: Color::LightRed,
            busy_text: Color::LightBlue,
            hint_text: Color::DarkGray,
        }
    }
}

impl StoryTheme {
    /// Get style for emoji glyphs
    pub fn glyph_style(&self) -> Style {
        Style::default().fg(self.glyph)
    }

    /// Get style for glyph names
    pub fn name_style(&self) -> Style {
        Style::default()
            .fg(self.name_text)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get style for placeholders of words still being looked up
    pub fn pending_style(&self) -> Style {
        Style::default()
            .fg(self.pending)
            .add_modifier(Modifier::DIM)
    }

    /// Get style for typed input
    pub fn input_style(&self) -> Style {
        Style::default().fg(self.input_text)
    }

    /// Get style for error messages
    pub fn error_style(&self) -> Style {
        Style::default()
            .fg(self.error_text)
            .add_modifier(Modifier::BOLD)
    }

    /// Get style for the loading indicator
    pub fn busy_style(&self) -> Style {
        Style::default().fg(self.busy_text)
    }

    /// Get style for hints and secondary text
    pub fn hint_style(&self) -> Style {
        Style::default()
            .fg(self.hint_text)
            .add_modifier(Modifier::DIM)
    }

    /// Get border style
    pub fn border_style(&self, focused: bool) -> Style {
        Style::default().fg(if focused {
            self.border_focused
        } else {
            self.border
        })
    }

    /// Get title style
    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.foreground)
            .add_modifier(Modifier::BOLD)
    }
}
