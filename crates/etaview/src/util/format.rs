use etaview_core::Feature;

/// Format a split duration for the headline, e.g. "2 hr 6 min"
pub fn format_duration(hours: i64, minutes: i64) -> String {
    format!("{hours} hr {minutes} min")
}

/// Format a feature value for display: one decimal for the continuous
/// features, whole numbers for age
pub fn format_feature_value(feature: Feature, value: f64) -> String {
    match feature {
        Feature::Age => format!("{value:.0}"),
        Feature::Rating | Feature::Distance => format!("{value:.1}"),
    }
}
