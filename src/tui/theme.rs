//! Centralized theme module for TUI color constants and styles

use ratatui::prelude::*;

// General colors
pub const TITLE_COLOR: Color = Color::Cyan;
pub const MUTED: Color = Color::Gray;
pub const INDEX_COLOR: Color = Color::DarkGray;

// Match-quality colors (high match is good, unlike a priority queue)
pub const SCORE_HIGH: Color = Color::Green;
pub const SCORE_MID: Color = Color::Yellow;
pub const SCORE_LOW: Color = Color::Red;
pub const BAR_EMPTY: Color = Color::DarkGray;

// Styles
pub const HEADER_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);
pub const ROW_SELECTED: Style = Style::new().add_modifier(Modifier::REVERSED);
pub const FOCUSED_BORDER: Style = Style::new().fg(Color::Cyan);
pub const UNFOCUSED_BORDER: Style = Style::new().fg(Color::DarkGray);

// Status bar colors
pub const STATUS_BAR_BG: Color = Color::Indexed(236);
pub const STATUS_KEY_COLOR: Color = Color::Cyan;
pub const FLASH_SUCCESS: Color = Color::Green;
pub const FLASH_ERROR: Color = Color::Red;

// Popup overlay colors
pub const POPUP_BORDER: Color = Color::Cyan;

/// Returns the appropriate color for a match score in [0,100]
pub fn score_color(score: f64) -> Color {
    if score >= 70.0 {
        SCORE_HIGH
    } else if score >= 40.0 {
        SCORE_MID
    } else {
        SCORE_LOW
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_color_bands() {
        assert_eq!(score_color(90.0), SCORE_HIGH);
        assert_eq!(score_color(70.0), SCORE_HIGH);
        assert_eq!(score_color(55.0), SCORE_MID);
        assert_eq!(score_color(10.0), SCORE_LOW);
    }
}
