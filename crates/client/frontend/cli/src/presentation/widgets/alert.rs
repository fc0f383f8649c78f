//! Login banner shown above the standings until dismissed.
use overlay_runtime::Alert;
use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::Theme;

pub fn render(frame: &mut Frame, area: Rect, alert: &Alert) {
    let paragraph = Paragraph::new(alert.message.as_str())
        .style(Theme::alert(alert.kind))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Login (Enter to dismiss) "),
        );

    frame.render_widget(paragraph, area);
}
