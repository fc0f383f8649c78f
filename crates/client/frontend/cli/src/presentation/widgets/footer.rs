//! Footer widget: class name, strength of field, track, and leader laps.
use client_frontend_core::Footer;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, area: Rect, footer: &Footer) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ])
        .split(inner);

    frame.render_widget(Paragraph::new(footer.class_name.as_str()), columns[0]);
    frame.render_widget(Paragraph::new(footer.sof_label()), columns[1]);
    frame.render_widget(
        Paragraph::new(footer.track_name.as_str()).alignment(Alignment::Center),
        columns[2],
    );
    frame.render_widget(
        Paragraph::new(footer.laps_label()).alignment(Alignment::Right),
        columns[3],
    );
}
