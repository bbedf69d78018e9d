use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, Borders, Gauge, Paragraph, Widget},
};

use crate::player::state::PlayerState;

const ACCENT: Color = Color::from_u32(0x00f7d44b);
const DIM: Color = Color::from_u32(0x00464646);

/// Transport status for the player pane: title line with playback
/// state, a progress gauge with timestamps, and a volume gauge.
pub struct TransportWidget<'a> {
    state: &'a PlayerState,
}

impl<'a> TransportWidget<'a> {
    pub fn new(state: &'a PlayerState) -> Self {
        Self { state }
    }

    fn title_line(&self) -> Line<'static> {
        let mut line = Line::default();
        line.push_span(if self.state.is_playing { "▶ " } else { "⏸ " });
        line.push_span(self.state.title.clone());
        line.push_span(format!(
            "  {}",
            self.state
                .rates
                .read()
                .map(|c| c.current().text.clone())
                .unwrap_or_default()
        ));
        if self.state.is_full_screen {
            line.push_span("  [fullscreen]".fg(DIM));
        }
        if self.state.is_page_full_screen {
            line.push_span("  [page]".fg(DIM));
        }
        line
    }
}

impl<'a> Widget for TransportWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new(self.title_line())
            .block(Block::default().borders(Borders::BOTTOM));
        title.render(chunks[0], buf);

        let ratio = if self.state.duration > 0.0 {
            (self.state.current_time / self.state.duration).min(1.0)
        } else {
            0.0
        };
        let progress = Gauge::default()
            .gauge_style(Style::default().fg(ACCENT).bg(DIM))
            .ratio(ratio)
            .label(format!(
                "{} / {}",
                format_timestamp(self.state.current_time),
                format_timestamp(self.state.duration)
            ));
        progress.render(chunks[1], buf);

        let volume = Gauge::default()
            .gauge_style(Style::default().fg(ACCENT).bg(DIM))
            .ratio(f64::from(self.state.volume).clamp(0.0, 1.0))
            .label(format!(
                "vol {}%",
                (self.state.volume * 100.0).round() as u32
            ));
        volume.render(chunks[2], buf);
    }
}

fn format_timestamp(seconds: f64) -> String {
    let total = seconds.max(0.0) as u64;
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let secs = total % 60;
    if hours > 0 {
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
