use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, FailureKind, Flow};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let title = if app.flow == Flow::Summarizing {
        " Summary (loading...) "
    } else {
        " Summary "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ratatui::style::Color::Cyan))
        .title(title);

    let paragraph = match app.flow {
        Flow::SummaryReady => {
            // The model output is markdown; shown as wrapped text.
            let text = app.summary.as_deref().unwrap_or_default();
            Paragraph::new(text.to_string())
                .wrap(Wrap { trim: false })
                .scroll((app.summary_scroll, 0))
        }
        Flow::Summarizing => Paragraph::new("Summarizing sprint..."),
        Flow::Failed(FailureKind::Issues) | Flow::Failed(FailureKind::Summary) => {
            let msg = app.last_error.as_deref().unwrap_or("Summarization failed");
            Paragraph::new(Line::from(Span::styled(
                msg,
                Style::default().fg(ratatui::style::Color::Red),
            )))
            .wrap(Wrap { trim: true })
        }
        _ => Paragraph::new(Span::styled(
            "Select a sprint and press enter to summarize it.",
            Style::default().fg(ratatui::style::Color::DarkGray),
        )),
    };

    f.render_widget(paragraph.block(block), area);
}
