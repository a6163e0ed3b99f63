use etaview_core::{Feature, FeatureVector, SweepResult};

/// Everything computed by one predict action: the headline prediction plus
/// one sweep per feature, indexed by position in [`Feature::ORDER`].
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    pub total_minutes: f64,
    pub hours: i64,
    pub minutes: i64,
    pub sweeps: Vec<SweepResult>,
}

/// Session state owned by the interaction surface.
///
/// The baseline survives across interactions; everything else is rebuilt per
/// predict action. The core never holds any of this - the baseline is passed
/// by value into `sweep`/`predict_one` on each call.
#[derive(Debug)]
pub struct AppState {
    /// The user's currently selected feature values
    pub baseline: FeatureVector,
    /// Which input row has focus, as an index into `Feature::ORDER`
    pub focused: usize,
    /// Buffer for direct numeric entry on the focused input, when active
    pub edit_buffer: Option<String>,
    /// Which sweep chart tab is shown, as an index into `Feature::ORDER`
    pub active_chart: usize,
    /// Result of the most recent predict action, if any
    pub outcome: Option<PredictionOutcome>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            baseline: FeatureVector::new(4.5, 25.0, 10.0),
            focused: 0,
            edit_buffer: None,
            active_chart: 0,
            outcome: None,
            error_message: None,
            exit: false,
        }
    }
}

impl AppState {
    pub fn focused_feature(&self) -> Feature {
        Feature::ORDER[self.focused]
    }

    pub fn active_chart_feature(&self) -> Feature {
        Feature::ORDER[self.active_chart]
    }

    pub fn focus_next(&mut self) {
        self.focused = (self.focused + 1) % Feature::ORDER.len();
    }

    pub fn focus_prev(&mut self) {
        self.focused = (self.focused + Feature::ORDER.len() - 1) % Feature::ORDER.len();
    }

    /// Nudge the focused value by a number of control steps, clamped and
    /// snapped to the feature's declared grid.
    pub fn adjust_focused(&mut self, steps: i32) {
        let feature = self.focused_feature();
        let range = feature.range();
        let value = self.baseline.get(feature) + f64::from(steps) * range.step;
        self.baseline.set(feature, range.snap(value));
    }

    pub fn is_editing(&self) -> bool {
        self.edit_buffer.is_some()
    }

    pub fn begin_edit(&mut self) {
        self.edit_buffer = Some(String::new());
    }

    pub fn push_edit_char(&mut self, c: char) {
        if let Some(buffer) = &mut self.edit_buffer
            && (c.is_ascii_digit() || c == '.')
        {
            buffer.push(c);
        }
    }

    pub fn backspace_edit(&mut self) {
        if let Some(buffer) = &mut self.edit_buffer {
            buffer.pop();
        }
    }

    pub fn cancel_edit(&mut self) {
        self.edit_buffer = None;
    }

    /// Parse and commit the edit buffer into the focused value. Out-of-range
    /// entries are clamped rather than rejected; unparseable entries surface
    /// an inline error and leave the value unchanged.
    pub fn commit_edit(&mut self) {
        let Some(buffer) = self.edit_buffer.take() else {
            return;
        };
        match buffer.trim().parse::<f64>() {
            Ok(value) => {
                let feature = self.focused_feature();
                self.baseline.set(feature, feature.range().snap(value));
            }
            Err(_) => {
                self.set_error(format!("'{buffer}' is not a number"));
            }
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjust_clamps_to_range() {
        let mut state = AppState::default();
        state.focused = Feature::Rating.index();
        state.baseline.rating = 4.9;

        state.adjust_focused(5);
        assert_eq!(state.baseline.rating, 5.0);

        state.adjust_focused(-100);
        assert_eq!(state.baseline.rating, 1.0);
    }

    #[test]
    fn test_adjust_age_stays_integral() {
        let mut state = AppState::default();
        state.focused = Feature::Age.index();

        state.adjust_focused(3);
        assert_eq!(state.baseline.age, 28.0);
        assert_eq!(state.baseline.age.fract(), 0.0);
    }

    #[test]
    fn test_commit_edit_clamps_and_snaps() {
        let mut state = AppState::default();
        state.focused = Feature::Distance.index();
        state.begin_edit();
        for c in "99.9".chars() {
            state.push_edit_char(c);
        }
        state.commit_edit();

        assert_eq!(state.baseline.distance, 50.0);
        assert!(!state.is_editing());
        assert!(state.error_message.is_none());
    }

    #[test]
    fn test_commit_unparseable_sets_error() {
        let mut state = AppState::default();
        let before = state.baseline;
        state.begin_edit();
        state.push_edit_char('.');
        state.push_edit_char('.');
        state.commit_edit();

        assert_eq!(state.baseline, before);
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_edit_buffer_rejects_non_numeric_chars() {
        let mut state = AppState::default();
        state.begin_edit();
        state.push_edit_char('x');
        state.push_edit_char('4');
        assert_eq!(state.edit_buffer.as_deref(), Some("4"));
    }

    #[test]
    fn test_focus_wraps() {
        let mut state = AppState::default();
        state.focus_prev();
        assert_eq!(state.focused_feature(), Feature::Distance);
        state.focus_next();
        assert_eq!(state.focused_feature(), Feature::Rating);
    }
}
