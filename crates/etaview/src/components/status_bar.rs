use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;

pub struct StatusBar;

impl StatusBar {
    pub fn new() -> Self {
        Self
    }

    fn help_text(state: &AppState) -> &'static str {
        if state.is_editing() {
            "type a value | Enter: confirm | Esc: cancel"
        } else {
            "j/k: select input | h/l: adjust | e: type value | p: predict | 1-3: charts | q: quit"
        }
    }
}

impl Component for StatusBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let content = if let Some(error) = &state.error_message {
            Line::from(vec![
                Span::styled("Error: ", Style::default().fg(Color::Red)),
                Span::raw(error.clone()),
                Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(Span::styled(
                Self::help_text(state),
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(content).block(Block::default().borders(Borders::TOP));
        frame.render_widget(paragraph, area);
    }
}
