//! Render orchestration for the Emojistory TUI

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use emojistory_core::LookupTrigger;

use crate::app::{App, InputMode};
use crate::ui::layout::{centered_rect_fixed, AppLayout};
use crate::ui::widgets::{HotkeyBarWidget, InputWidget, StatusBarWidget, StoryWidget};

/// Overlay types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Help,
}

/// Main render function
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let layout = AppLayout::calculate(area);

    render_title_bar(frame, app, layout.title_area);

    let story_widget = StoryWidget::new(app.session.story(), &app.theme)
        .show_names(app.session.show_names())
        .in_flight(app.session.in_flight())
        .scroll(app.story_scroll)
        .focused(app.input_mode == InputMode::Normal);
    frame.render_widget(story_widget, layout.story_area);

    let status_widget = StatusBarWidget::new(
        app.session.state(),
        app.input_mode,
        app.trigger(),
        &app.theme,
    )
    .message(app.status_message())
    .frame(app.animation_frame);
    frame.render_widget(status_widget, layout.status_bar);

    frame.render_widget(
        HotkeyBarWidget::new(app.input_mode, app.trigger()),
        layout.hotkey_bar,
    );

    render_input(frame, app, layout.input_area);

    if let Some(overlay) = app.overlay() {
        render_overlay(frame, app, *overlay, area);
    }
}

/// Render the title bar
fn render_title_bar(frame: &mut Frame, app: &App, area: Rect) {
    let story = app.session.story();
    let title = match story.last() {
        Some((glyph, name)) => format!(" 🔍 Emojistory | {} words | last: {glyph} {name} ", story.len()),
        None => " 🔍 Emojistory ".to_string(),
    };

    let line = Line::from(Span::styled(title, app.theme.title_style()));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the input area
fn render_input(frame: &mut Frame, app: &App, area: Rect) {
    let locked = app.session.input_locked();
    let placeholder = if locked {
        "Loading..."
    } else {
        match app.trigger() {
            LookupTrigger::Implicit => "Type a story (e.g. the cat sat by the fire)",
            LookupTrigger::Explicit => "Enter a word (e.g. cat, fire)",
        }
    };

    let input_widget = InputWidget::new(app.input_buffer(), &app.theme)
        .cursor_position(app.cursor_position())
        .active(app.input_mode == InputMode::Insert)
        .locked(locked)
        .placeholder(placeholder);

    frame.render_widget(input_widget, area);
}

/// Render overlay
fn render_overlay(frame: &mut Frame, app: &App, overlay: Overlay, area: Rect) {
    match overlay {
        Overlay::Help => render_help_overlay(frame, app, area),
    }
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    let popup_area = centered_rect_fixed(50, 18, area);

    // Clear the background
    frame.render_widget(Clear, popup_area);

    let trigger_help = match app.trigger() {
        LookupTrigger::Implicit => "  Space   Finish a word and look it up",
        LookupTrigger::Explicit => "  Enter   Look up the typed word",
    };

    let help_text = vec![
        Line::from(Span::styled(
            " Emojistory - Help ",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Typing (INSERT mode):",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from(trigger_help),
        Line::from("  Tab     Show/hide emoji names"),
        Line::from("  Esc     Return to NORMAL mode"),
        Line::from(""),
        Line::from(Span::styled(
            "NORMAL mode:",
            Style::default().add_modifier(Modifier::UNDERLINED),
        )),
        Line::from("  i/a     Back to typing"),
        Line::from("  n       Show/hide emoji names"),
        Line::from("  j/k     Scroll the story"),
        Line::from("  q       Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc or q to close",
            Style::default().add_modifier(Modifier::DIM),
        )),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.theme.border_style(true));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, popup_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojistory_core::{FinderConfig, MockLookup, Resolver};
    use ratatui::{backend::TestBackend, Terminal};

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let area = buffer.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buffer[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_render_empty_app() {
        let app = App::new(FinderConfig::new(), Resolver::new(MockLookup::new()));
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Emojistory"));
        assert!(text.contains("-- INSERT --"));
        assert!(text.contains("Ready"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut app = App::new(FinderConfig::new(), Resolver::new(MockLookup::new()));
        app.toggle_help();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        assert!(screen_text(&terminal).contains("Emojistory - Help"));
    }
}
