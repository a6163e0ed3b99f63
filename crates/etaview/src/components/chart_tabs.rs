//! Tabbed sweep charts: one line chart per feature with a marker at the
//! user's current selection.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph, Tabs},
};

use etaview_core::Feature;

use super::{Component, EventResult};
use crate::state::AppState;

pub struct ChartTabs;

impl ChartTabs {
    pub fn new() -> Self {
        Self
    }

    fn render_tab_bar(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let titles: Vec<Line> = Feature::ORDER
            .iter()
            .enumerate()
            .map(|(idx, feature)| {
                let content = format!("[{}] Time vs. {}", idx + 1, feature.label());
                if idx == state.active_chart {
                    Line::from(Span::styled(
                        content,
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    ))
                } else {
                    Line::from(Span::styled(content, Style::default().fg(Color::Gray)))
                }
            })
            .collect();

        let tabs = Tabs::new(titles)
            .block(Block::default().borders(Borders::BOTTOM))
            .select(state.active_chart);
        frame.render_widget(tabs, area);
    }

    fn render_sweep_chart(&self, frame: &mut Frame, area: Rect, state: &AppState) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" FEATURE IMPACT ");

        let Some(outcome) = &state.outcome else {
            let content = vec![
                Line::from(""),
                Line::from("No prediction yet."),
                Line::from(""),
                Line::from("Adjust the inputs and press p to predict."),
            ];
            frame.render_widget(Paragraph::new(content).block(block), area);
            return;
        };

        let feature = state.active_chart_feature();
        let result = &outcome.sweeps[state.active_chart];

        let data: Vec<(f64, f64)> = result.points.iter().map(|p| (p.value, p.predicted)).collect();
        if data.is_empty() {
            frame.render_widget(Paragraph::new("No data to display").block(block), area);
            return;
        }

        let x_min = data.first().map(|(x, _)| *x).unwrap_or(0.0);
        let x_max = data.last().map(|(x, _)| *x).unwrap_or(1.0);
        let x_padding = (x_max - x_min).abs() * 0.02;

        let y_min = result.min_predicted();
        let y_max = result.max_predicted();
        let y_padding = (y_max - y_min).abs().max(1.0) * 0.1;
        let (y_lo, y_hi) = (y_min - y_padding, y_max + y_padding);

        // Marker at the user's current selection; clamped into the sweep
        // span since the control minimum can sit below the charted range.
        let current = state.baseline.get(feature).clamp(x_min, x_max);
        let marker_data = [(current, y_lo), (current, y_hi)];

        let datasets = vec![
            Dataset::default()
                .name("predicted time")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Cyan))
                .data(&data),
            Dataset::default()
                .name("current selection")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Color::Red))
                .data(&marker_data),
        ];

        let x_labels = vec![
            Span::raw(format!("{x_min:.0}")),
            Span::raw(format!("{:.0}", (x_min + x_max) / 2.0)),
            Span::raw(format!("{x_max:.0}")),
        ];
        let y_labels = vec![
            Span::raw(format!("{y_lo:.0}")),
            Span::raw(format!("{:.0}", (y_lo + y_hi) / 2.0)),
            Span::raw(format!("{y_hi:.0}")),
        ];

        let x_axis = Axis::default()
            .title(feature.label().dark_gray())
            .bounds([x_min - x_padding, x_max + x_padding])
            .labels(x_labels);
        let y_axis = Axis::default()
            .title("Predicted Time (min)".dark_gray())
            .bounds([y_lo, y_hi])
            .labels(y_labels);

        let chart = Chart::new(datasets)
            .block(block)
            .x_axis(x_axis)
            .y_axis(y_axis);
        frame.render_widget(chart, area);
    }
}

impl Component for ChartTabs {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('1') => {
                state.active_chart = 0;
                EventResult::Handled
            }
            KeyCode::Char('2') => {
                state.active_chart = 1;
                EventResult::Handled
            }
            KeyCode::Char('3') => {
                state.active_chart = 2;
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Tab bar
                Constraint::Min(0),    // Chart
            ])
            .split(area);

        self.render_tab_bar(frame, chunks[0], state);
        self.render_sweep_chart(frame, chunks[1], state);
    }
}
