use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, Flow, Panel};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();

    match app.panel {
        Panel::Teams => {
            spans.push(hint("↑↓", "navigate"));
            spans.push(hint("enter", "load sprints"));
            spans.push(hint("tab", "sprints"));
            spans.push(hint("q", "quit"));
        }
        Panel::Sprints => {
            spans.push(hint("↑↓", "navigate"));
            spans.push(hint("enter", "summarize"));
            spans.push(hint("←", "teams"));
            spans.push(hint("r", "refresh"));
            if app.flow == Flow::SummaryReady {
                spans.push(hint("pgup/pgdn", "scroll"));
                spans.push(hint("esc", "clear"));
            }
            spans.push(hint("q", "quit"));
        }
    }

    // Flash message
    if let Some((msg, _)) = &app.flash_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            msg,
            Style::default().fg(ratatui::style::Color::Yellow),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);
    f.render_widget(paragraph, area);
}

fn hint(key: &str, desc: &str) -> Span<'static> {
    Span::styled(
        format!(" {key}:{desc} "),
        Style::default().fg(ratatui::style::Color::DarkGray),
    )
}
