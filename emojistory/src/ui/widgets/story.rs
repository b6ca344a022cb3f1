//! Story display widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use emojistory_core::Story;

use crate::ui::theme::StoryTheme;

const PENDING_GLYPH: &str = "⋯";

/// Widget showing the resolved glyphs, optionally with their names
pub struct StoryWidget<'a> {
    story: &'a Story,
    theme: &'a StoryTheme,
    show_names: bool,
    in_flight: usize,
    scroll: usize,
    focused: bool,
}

impl<'a> StoryWidget<'a> {
    pub fn new(story: &'a Story, theme: &'a StoryTheme) -> Self {
        Self {
            story,
            theme,
            show_names: false,
            in_flight: 0,
            scroll: 0,
            focused: false,
        }
    }

    pub fn show_names(mut self, show: bool) -> Self {
        self.show_names = show;
        self
    }

    /// Number of words still being looked up, drawn as placeholders.
    pub fn in_flight(mut self, count: usize) -> Self {
        self.in_flight = count;
        self
    }

    pub fn scroll(mut self, scroll: usize) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    fn glyph_line(&self) -> Line<'a> {
        let mut spans: Vec<Span> = Vec::new();
        for glyph in self.story.glyphs() {
            spans.push(Span::styled(glyph.as_str(), self.theme.glyph_style()));
            spans.push(Span::raw(" "));
        }
        for _ in 0..self.in_flight {
            spans.push(Span::styled(PENDING_GLYPH, self.theme.pending_style()));
            spans.push(Span::raw(" "));
        }
        Line::from(spans)
    }

    fn labelled_lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line> = self
            .story
            .entries()
            .map(|(glyph, name)| {
                Line::from(vec![
                    Span::styled(glyph, self.theme.glyph_style()),
                    Span::raw("  "),
                    Span::styled(name, self.theme.name_style()),
                ])
            })
            .collect();

        for _ in 0..self.in_flight {
            lines.push(Line::from(Span::styled(
                format!("{PENDING_GLYPH}  looking up..."),
                self.theme.pending_style(),
            )));
        }
        lines
    }
}

impl Widget for StoryWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.show_names {
            " Story [names] "
        } else {
            " Story "
        };

        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.theme.border_style(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        if self.story.is_empty() && self.in_flight == 0 {
            let hint = Line::from(Span::styled(
                "Finish a word with a space to see its emoji.",
                self.theme.hint_style(),
            ));
            Paragraph::new(hint).render(inner, buf);
            return;
        }

        let lines = if self.show_names {
            self.labelled_lines()
        } else {
            vec![self.glyph_line()]
        };

        let max_scroll = lines.len().saturating_sub(inner.height as usize);
        let scroll = self.scroll.min(max_scroll);

        Paragraph::new(lines)
            .scroll((scroll as u16, 0))
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojistory_core::ResolvedEntry;

    fn render_to_string(widget: StoryWidget, width: u16, height: u16) -> String {
        let area = Rect::new(0, 0, width, height);
        let mut buf = Buffer::empty(area);
        widget.render(area, &mut buf);
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_names_hidden_by_default() {
        let theme = StoryTheme::default();
        let mut story = Story::new();
        story.append(ResolvedEntry::new("*", "star"));

        let text = render_to_string(StoryWidget::new(&story, &theme), 30, 5);
        assert!(text.contains('*'));
        assert!(!text.contains("star"));
    }

    #[test]
    fn test_names_shown_when_toggled() {
        let theme = StoryTheme::default();
        let mut story = Story::new();
        story.append(ResolvedEntry::new("*", "star"));
        story.append(ResolvedEntry::new("#", "hash"));

        let text = render_to_string(StoryWidget::new(&story, &theme).show_names(true), 30, 6);
        assert!(text.contains("*  star"));
        assert!(text.contains("#  hash"));
    }

    #[test]
    fn test_empty_story_hint() {
        let theme = StoryTheme::default();
        let story = Story::new();

        let text = render_to_string(StoryWidget::new(&story, &theme), 60, 4);
        assert!(text.contains("Finish a word"));
    }

    #[test]
    fn test_pending_placeholders() {
        let theme = StoryTheme::default();
        let story = Story::new();

        let text = render_to_string(StoryWidget::new(&story, &theme).in_flight(2), 30, 4);
        assert_eq!(text.matches(PENDING_GLYPH).count(), 2);
    }
}
