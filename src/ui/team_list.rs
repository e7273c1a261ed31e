use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

use crate::app::{App, Panel};
use crate::ui::theme::border_color;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let focused = app.panel == Panel::Teams;

    let items: Vec<ListItem> = app
        .teams
        .iter()
        .enumerate()
        .map(|(i, team)| {
            let selected = i == app.selected_team;
            let style = if selected {
                Style::default()
                    .fg(ratatui::style::Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            let marker = if selected { "> " } else { "  " };
            ListItem::new(Line::from(vec![
                Span::raw(marker),
                Span::styled(team.name.clone(), style),
            ]))
        })
        .collect();

    let list = if app.teams.is_empty() {
        List::new(vec![ListItem::new(
            "No teams configured. Add [[teams]] entries to ~/.recap/config.toml",
        )])
    } else {
        List::new(items)
    };

    let list = list.block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color(focused)))
            .title(" Teams "),
    );

    f.render_widget(list, area);
}
