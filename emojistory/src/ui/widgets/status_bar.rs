//! Status bar and hotkey bar widgets

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use emojistory_core::{LookupTrigger, ResolutionState};

use crate::app::InputMode;
use crate::ui::theme::StoryTheme;

const SPINNER: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// Status bar showing the input mode and the resolution state
pub struct StatusBarWidget<'a> {
    state: &'a ResolutionState,
    input_mode: InputMode,
    trigger: LookupTrigger,
    theme: &'a StoryTheme,
    message: Option<&'a str>,
    frame: u8,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(
        state: &'a ResolutionState,
        input_mode: InputMode,
        trigger: LookupTrigger,
        theme: &'a StoryTheme,
    ) -> Self {
        Self {
            state,
            input_mode,
            trigger,
            theme,
            message: None,
            frame: 0,
        }
    }

    pub fn message(mut self, message: Option<&'a str>) -> Self {
        self.message = message;
        self
    }

    pub fn frame(mut self, frame: u8) -> Self {
        self.frame = frame;
        self
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (mode_text, mode_style) = match self.input_mode {
            InputMode::Normal => (
                "NORMAL",
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            ),
            InputMode::Insert => (
                "INSERT",
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            ),
        };

        let state_span = match self.state {
            ResolutionState::Idle => Span::styled("Ready", self.theme.hint_style()),
            ResolutionState::Resolving { in_flight } => {
                let spinner = SPINNER[self.frame as usize % SPINNER.len()];
                let noun = if *in_flight == 1 { "word" } else { "words" };
                Span::styled(
                    format!("{spinner} Looking up {in_flight} {noun}..."),
                    self.theme.busy_style(),
                )
            }
            ResolutionState::Error(message) => {
                Span::styled(message.as_str(), self.theme.error_style())
            }
        };

        let mut spans = vec![
            Span::styled(format!("-- {mode_text} --"), mode_style),
            Span::raw(" | "),
            Span::styled(self.trigger.to_string(), self.theme.hint_style()),
            Span::raw(" | "),
            state_span,
        ];

        if let Some(msg) = self.message {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(msg, Style::default().add_modifier(Modifier::DIM)));
        }

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}

/// Hotkey bar widget
pub struct HotkeyBarWidget {
    input_mode: InputMode,
    trigger: LookupTrigger,
}

impl HotkeyBarWidget {
    pub fn new(input_mode: InputMode, trigger: LookupTrigger) -> Self {
        Self {
            input_mode,
            trigger,
        }
    }
}

impl Widget for HotkeyBarWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hotkeys = match self.input_mode {
            InputMode::Normal => vec![
                ("i:insert", true),
                ("n:names", true),
                ("j/k:scroll", true),
                ("q:quit", true),
                ("?:help", false),
            ],
            InputMode::Insert => match self.trigger {
                LookupTrigger::Implicit => vec![
                    ("Esc:normal", true),
                    ("Space:finish word", true),
                    ("Tab:names", false),
                ],
                LookupTrigger::Explicit => vec![
                    ("Esc:normal", true),
                    ("Enter:find emoji", true),
                    ("Tab:names", false),
                ],
            },
        };

        let spans: Vec<Span> = hotkeys
            .iter()
            .flat_map(|(text, primary)| {
                let style = if *primary {
                    Style::default()
                } else {
                    Style::default().add_modifier(Modifier::DIM)
                };
                vec![Span::styled(*text, style), Span::raw("  ")]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
