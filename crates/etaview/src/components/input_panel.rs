//! Feature input panel: one slider/numeric-entry pair per feature.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use etaview_core::Feature;

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_feature_value;

/// Width of the slider track in cells
const TRACK_WIDTH: usize = 18;

pub struct InputPanel;

impl InputPanel {
    pub fn new() -> Self {
        Self
    }

    /// Slider track with the filled portion proportional to the value's
    /// position in its range.
    fn track_line(feature: Feature, value: f64) -> String {
        let range = feature.range();
        let ratio = ((value - range.min) / (range.max - range.min)).clamp(0.0, 1.0);
        let filled = (ratio * TRACK_WIDTH as f64).round() as usize;
        let mut track = String::with_capacity(TRACK_WIDTH * 3);
        for i in 0..TRACK_WIDTH {
            track.push_str(if i < filled { "█" } else { "░" });
        }
        track
    }

    fn render_feature_row(&self, state: &AppState, row: usize) -> Vec<Line<'static>> {
        let feature = Feature::ORDER[row];
        let focused = state.focused == row;
        let value = state.baseline.get(feature);

        let marker = if focused { "▶ " } else { "  " };
        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let value_text = if focused && state.is_editing() {
            // Direct numeric entry in progress
            let buffer = state.edit_buffer.as_deref().unwrap_or("");
            format!("{buffer}█")
        } else {
            format_feature_value(feature, value)
        };
        let value_style = if focused && state.is_editing() {
            Style::default().fg(Color::Cyan)
        } else {
            label_style
        };

        vec![
            Line::from(vec![
                Span::raw(marker),
                Span::styled(feature.label().to_string(), label_style),
            ]),
            Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    Self::track_line(feature, value),
                    Style::default().fg(if focused { Color::Yellow } else { Color::DarkGray }),
                ),
                Span::raw(" "),
                Span::styled(value_text, value_style),
            ]),
            Line::from(""),
        ]
    }
}

impl Component for InputPanel {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        if state.is_editing() {
            match key.code {
                KeyCode::Enter => state.commit_edit(),
                KeyCode::Esc => state.cancel_edit(),
                KeyCode::Backspace => state.backspace_edit(),
                KeyCode::Char(c) => state.push_edit_char(c),
                _ => {}
            }
            return EventResult::Handled;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => {
                state.focus_next();
                EventResult::Handled
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.focus_prev();
                EventResult::Handled
            }
            KeyCode::Char('h') | KeyCode::Left => {
                state.adjust_focused(-1);
                EventResult::Handled
            }
            KeyCode::Char('l') | KeyCode::Right => {
                state.adjust_focused(1);
                EventResult::Handled
            }
            KeyCode::PageDown => {
                state.adjust_focused(-10);
                EventResult::Handled
            }
            KeyCode::PageUp => {
                state.adjust_focused(10);
                EventResult::Handled
            }
            KeyCode::Char('e') => {
                state.begin_edit();
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let mut lines = vec![Line::from(Span::styled(
            "Delivery Features",
            Style::default().add_modifier(Modifier::BOLD),
        ))];
        lines.push(Line::from(Span::styled(
            "Adjust with h/l or type with e.",
            Style::default().fg(Color::DarkGray),
        )));
        lines.push(Line::from(""));

        for row in 0..Feature::ORDER.len() {
            lines.extend(self.render_feature_row(state, row));
        }

        lines.push(Line::from(Span::styled(
            "[p] Predict Delivery Time",
            Style::default().fg(Color::Green),
        )));

        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" INPUTS "));
        frame.render_widget(paragraph, area);
    }
}
