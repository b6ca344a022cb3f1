//! Input field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::ui::theme::StoryTheme;

/// Input field widget
pub struct InputWidget<'a> {
    content: &'a str,
    cursor_position: usize,
    theme: &'a StoryTheme,
    placeholder: &'a str,
    is_active: bool,
    is_locked: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(content: &'a str, theme: &'a StoryTheme) -> Self {
        Self {
            content,
            cursor_position: content.chars().count(),
            theme,
            placeholder: "Type a story (e.g. the cat sat by the fire)",
            is_active: true,
            is_locked: false,
        }
    }

    pub fn cursor_position(mut self, pos: usize) -> Self {
        self.cursor_position = pos;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.is_active = active;
        self
    }

    /// Render the field disabled while a lookup holds the input.
    pub fn locked(mut self, locked: bool) -> Self {
        self.is_locked = locked;
        self
    }
}

impl Widget for InputWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.is_active && !self.is_locked));

        let inner = block.inner(area);
        block.render(area, buf);

        let line = if self.content.is_empty() {
            Line::from(vec![
                Span::styled("> ", self.theme.input_style()),
                Span::styled(
                    self.placeholder,
                    Style::default().add_modifier(Modifier::DIM),
                ),
            ])
        } else if self.is_locked || !self.is_active {
            Line::from(vec![
                Span::styled("> ", self.theme.input_style()),
                Span::styled(self.content, Style::default().add_modifier(Modifier::DIM)),
            ])
        } else {
            // Use character-based slicing for unicode safety
            let before_cursor: String = self.content.chars().take(self.cursor_position).collect();
            let at_cursor = self
                .content
                .chars()
                .nth(self.cursor_position)
                .map(|c| c.to_string())
                .unwrap_or_else(|| " ".to_string());
            let after_cursor: String = self
                .content
                .chars()
                .skip(self.cursor_position + 1)
                .collect();

            Line::from(vec![
                Span::styled("> ", self.theme.input_style()),
                Span::raw(before_cursor),
                Span::styled(
                    at_cursor,
                    Style::default()
                        .add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
                        .fg(self.theme.input_text),
                ),
                Span::raw(after_cursor),
            ])
        };

        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_placeholder_when_empty() {
        let theme = StoryTheme::default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        InputWidget::new("", &theme)
            .placeholder("Loading...")
            .render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("> Loading..."));
    }

    #[test]
    fn test_renders_content() {
        let theme = StoryTheme::default();
        let area = Rect::new(0, 0, 40, 3);
        let mut buf = Buffer::empty(area);

        InputWidget::new("cat sat", &theme)
            .cursor_position(3)
            .render(area, &mut buf);

        assert!(row_text(&buf, 1).contains("> cat sat"));
    }
}
