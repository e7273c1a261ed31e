pub mod footer;
pub mod sprint_list;
pub mod summary_panel;
pub mod team_list;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::App;

pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // main content
            Constraint::Length(1), // footer
        ])
        .split(size);

    let main_area = vertical[0];
    let footer_area = vertical[1];

    // Teams (25%) + Sprints (35%) + Summary (40%)
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(35),
            Constraint::Percentage(40),
        ])
        .split(main_area);

    team_list::render(f, horizontal[0], app);
    sprint_list::render(f, horizontal[1], app);
    summary_panel::render(f, horizontal[2], app);

    footer::render(f, footer_area, app);
}
