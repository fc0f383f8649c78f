//! Table of reconciled rows for the selected class.
use client_frontend_core::{HEADER, row_cells};
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    widgets::{Block, Borders, Cell, Row, Table},
};
use standings_core::RenderRow;

use crate::presentation::theme::Theme;

const WIDTHS: [Constraint; 7] = [
    Constraint::Length(4),
    Constraint::Length(6),
    Constraint::Min(16),
    Constraint::Min(12),
    Constraint::Length(5),
    Constraint::Length(5),
    Constraint::Length(5),
];

pub fn render(frame: &mut Frame, area: Rect, rows: &[RenderRow]) {
    let header = Row::new(HEADER.iter().map(|title| Cell::from(*title))).style(Theme::header());

    let body = rows.iter().map(|row| {
        let [position, number, driver, car, prev, points, change] = row_cells(row);
        Row::new(vec![
            Cell::from(position),
            Cell::from(number),
            Cell::from(driver),
            Cell::from(car),
            Cell::from(prev),
            Cell::from(points),
            Cell::from(change).style(Theme::change(row.change.direction)),
        ])
        .style(Theme::row(row.emphasis))
    });

    let table = Table::new(body, WIDTHS)
        .header(header)
        .block(Block::default().borders(Borders::LEFT | Borders::RIGHT));

    frame.render_widget(table, area);
}
