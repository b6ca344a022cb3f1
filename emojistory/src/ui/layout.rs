//! Layout calculations for the Emojistory TUI

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// The main screen areas
pub struct AppLayout {
    pub title_area: Rect,
    pub story_area: Rect,
    pub status_bar: Rect,
    pub hotkey_bar: Rect,
    pub input_area: Rect,
}

impl AppLayout {
    /// Calculate layout based on terminal size
    pub fn calculate(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title bar
                Constraint::Min(5),    // Story
                Constraint::Length(1), // Status bar
                Constraint::Length(1), // Hotkey bar
                Constraint::Length(3), // Input area
            ])
            .split(area);

        Self {
            title_area: chunks[0],
            story_area: chunks[1],
            status_bar: chunks[2],
            hotkey_bar: chunks[3],
            input_area: chunks[4],
        }
    }
}

/// Calculate fixed-size centered popup
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_fills_area() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = AppLayout::calculate(area);

        assert_eq!(layout.title_area.height, 1);
        assert_eq!(layout.input_area.height, 3);
        assert_eq!(layout.story_area.height, 24 - 1 - 1 - 1 - 3);
        assert_eq!(layout.input_area.y + layout.input_area.height, 24);
    }

    #[test]
    fn test_centered_popup_clamped() {
        let area = Rect::new(0, 0, 20, 10);
        let popup = centered_rect_fixed(50, 20, area);
        assert_eq!(popup, Rect::new(0, 0, 20, 10));

        let popup = centered_rect_fixed(10, 4, area);
        assert_eq!(popup, Rect::new(5, 3, 10, 4));
    }
}
