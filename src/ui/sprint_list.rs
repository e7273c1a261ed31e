use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{App, FailureKind, Flow, Panel};
use crate::ui::theme::{border_color, state_color};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.panel == Panel::Sprints;

    let title = if app.flow == Flow::ListingSprints {
        " Sprints (loading...) "
    } else {
        " Sprints "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(focused)))
        .title(title);

    if app.flow == Flow::Failed(FailureKind::Sprints) {
        let msg = app.last_error.as_deref().unwrap_or("Failed to fetch sprints");
        let paragraph = Paragraph::new(Line::from(Span::styled(
            msg,
            Style::default().fg(ratatui::style::Color::Red),
        )))
        .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    if app.sprints.is_empty() {
        let placeholder = match app.flow {
            Flow::Idle => "Pick a team to load its sprints.",
            Flow::ListingSprints => "",
            _ => "No Sprints found",
        };
        let paragraph = Paragraph::new(placeholder).block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .sprints
        .iter()
        .enumerate()
        .map(|(i, sprint)| {
            let selected = i == app.selected_sprint;

            // Truncate name to fit
            let max_name = area.width.saturating_sub(14) as usize;
            let name: String = sprint.name.chars().take(max_name).collect();
            let name_style = if selected {
                Style::default()
                    .fg(ratatui::style::Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            let line = Line::from(vec![
                Span::styled(name, name_style),
                Span::raw(" | "),
                Span::styled(
                    format!("({})", sprint.state.label()),
                    Style::default().fg(state_color(sprint.state)),
                ),
            ]);
            ListItem::new(line)
        })
        .collect();

    f.render_widget(List::new(items).block(block), area);
}
