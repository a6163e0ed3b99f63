use std::io;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use etaview_core::{Feature, Regressor, SweepError, predict_one, split_duration, sweep};

use crate::components::{
    Component, EventResult, chart_tabs::ChartTabs, input_panel::InputPanel, status_bar::StatusBar,
};
use crate::state::{AppState, PredictionOutcome};
use crate::util::format::{format_duration, format_feature_value};

/// Minutes per displayed hour unit
const MINUTES_PER_HOUR: f64 = 60.0;

pub struct App {
    model: Box<dyn Regressor>,
    state: AppState,
    input_panel: InputPanel,
    chart_tabs: ChartTabs,
    status_bar: StatusBar,
}

impl App {
    pub fn new(model: Box<dyn Regressor>) -> Self {
        Self {
            model,
            state: AppState::default(),
            input_panel: InputPanel::new(),
            chart_tabs: ChartTabs::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        // Create main layout: title, content, status bar
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // Title
                Constraint::Min(0),    // Content
                Constraint::Length(2), // Status bar
            ])
            .split(frame.area());

        self.render_title(frame, chunks[0]);

        // Content: input sidebar on the left, prediction and charts on the right
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(36), Constraint::Min(0)])
            .split(chunks[1]);

        self.input_panel.render(frame, content[0], &self.state);

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Headline prediction
                Constraint::Min(0),    // Charts
            ])
            .split(content[1]);

        self.render_headline(frame, right[0]);
        self.chart_tabs.render(frame, right[1], &self.state);

        self.status_bar.render(frame, chunks[2], &self.state);
    }

    fn render_title(&self, frame: &mut Frame, area: Rect) {
        let title = Paragraph::new(Line::from(Span::styled(
            " Delivery Time Prediction ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )))
        .block(Block::default().borders(Borders::BOTTOM));
        frame.render_widget(title, area);
    }

    fn render_headline(&self, frame: &mut Frame, area: Rect) {
        let line = if let Some(outcome) = &self.state.outcome {
            Line::from(vec![
                Span::raw("Estimated Delivery Time: "),
                Span::styled(
                    format_duration(outcome.hours, outcome.minutes),
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        } else {
            Line::from(Span::styled(
                "Enter delivery details and press p for an estimated time of arrival.",
                Style::default().fg(Color::DarkGray),
            ))
        };

        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event)
            }
            _ => {}
        };
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Numeric entry captures everything until committed or cancelled
        if self.state.is_editing() {
            self.input_panel.handle_key(key_event, &mut self.state);
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('q') if key_event.modifiers.is_empty() => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Char('p') | KeyCode::Enter => {
                self.run_prediction();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                return;
            }
            _ => {}
        }

        let result = self.chart_tabs.handle_key(key_event, &mut self.state);
        if result != EventResult::NotHandled {
            return;
        }

        self.input_panel.handle_key(key_event, &mut self.state);
    }

    /// Run the full predict-and-render sequence for the current baseline.
    /// Any failure is caught here and shown inline; the session stays usable.
    fn run_prediction(&mut self) {
        self.state.clear_error();
        match self.compute_outcome() {
            Ok(outcome) => {
                tracing::info!(
                    distance = %format_feature_value(Feature::Distance, self.state.baseline.distance),
                    rating = %format_feature_value(Feature::Rating, self.state.baseline.rating),
                    age = %format_feature_value(Feature::Age, self.state.baseline.age),
                    predicted_minutes = outcome.total_minutes,
                    "prediction complete"
                );
                self.state.outcome = Some(outcome);
            }
            Err(e) => {
                tracing::warn!("prediction failed: {e}");
                self.state.set_error(format!("An error occurred: {e}"));
            }
        }
    }

    /// Single-point prediction for the headline plus one sweep per feature,
    /// all against the same baseline snapshot.
    fn compute_outcome(&self) -> Result<PredictionOutcome, SweepError> {
        let baseline = self.state.baseline;
        let model = self.model.as_ref();

        let total_minutes = predict_one(model, &Feature::ORDER, &baseline)?;
        let (hours, minutes) = split_duration(total_minutes, MINUTES_PER_HOUR);

        let mut sweeps = Vec::with_capacity(Feature::ORDER.len());
        for feature in Feature::ORDER {
            let values = feature.sweep_values();
            sweeps.push(sweep(model, &Feature::ORDER, &baseline, feature, &values)?);
        }

        Ok(PredictionOutcome {
            total_minutes,
            hours,
            minutes,
            sweeps,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use etaview_core::{FeatureTable, LinearModel, PredictError};

    fn linear_model() -> Box<dyn Regressor> {
        Box::new(LinearModel {
            columns: Feature::ORDER
                .iter()
                .map(|f| f.column_name().to_string())
                .collect(),
            intercept: 11.0,
            coefficients: vec![-3.0, 0.2, 2.5],
        })
    }

    #[derive(Debug)]
    struct FailingModel;

    impl Regressor for FailingModel {
        fn predict(&self, table: &FeatureTable) -> Result<Vec<f64>, PredictError> {
            Err(PredictError::OutputLength {
                expected: table.n_rows(),
                found: 0,
            })
        }
    }

    #[test]
    fn test_compute_outcome_builds_three_sweeps() {
        let app = App::new(linear_model());
        let outcome = app.compute_outcome().unwrap();

        assert_eq!(outcome.sweeps.len(), 3);
        for (feature, result) in Feature::ORDER.iter().zip(&outcome.sweeps) {
            assert_eq!(result.feature, *feature);
            assert_eq!(result.points.len(), feature.sweep_values().len());
        }

        // Defaults: rating 4.5, age 25, distance 10
        let expected = 11.0 - 3.0 * 4.5 + 0.2 * 25.0 + 2.5 * 10.0;
        assert!((outcome.total_minutes - expected).abs() < 1e-9);
        let (hours, minutes) = split_duration(expected, MINUTES_PER_HOUR);
        assert_eq!(outcome.hours, hours);
        assert_eq!(outcome.minutes, minutes);
    }

    #[test]
    fn test_prediction_failure_is_inline_not_fatal() {
        let mut app = App::new(Box::new(FailingModel));
        app.run_prediction();

        assert!(app.state.error_message.is_some());
        assert!(app.state.outcome.is_none());
        assert!(!app.state.exit);
    }

    #[test]
    fn test_successful_prediction_clears_prior_error() {
        let mut app = App::new(linear_model());
        app.state.set_error("stale".to_string());
        app.run_prediction();

        assert!(app.state.error_message.is_none());
        assert!(app.state.outcome.is_some());
    }
}
