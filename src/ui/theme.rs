use ratatui::style::Color;

use crate::model::sprint::SprintState;

pub fn state_color(state: SprintState) -> Color {
    match state {
        SprintState::Active => Color::Green,
        SprintState::Closed => Color::DarkGray,
        SprintState::Future => Color::Yellow,
    }
}

pub fn border_color(focused: bool) -> Color {
    if focused {
        Color::Cyan
    } else {
        Color::DarkGray
    }
}
