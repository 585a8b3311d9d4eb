use serde::Serialize;

use super::stats::SurveyAggregateStats;

/// Shown for any count, age, or average the server did not provide.
pub const NO_SURVEYS_PLACEHOLDER: &str = "No Surveys Available.";
/// Shown for a missing food percentage.
pub const NO_PERCENTAGE_PLACEHOLDER: &str = "0 %";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatRow {
    pub label: &'static str,
    pub value: String,
}

impl StatRow {
    fn new(label: &'static str, value: String) -> Self {
        Self { label, value }
    }
}

/// Results table in display order.
pub fn stat_rows(stats: &SurveyAggregateStats) -> Vec<StatRow> {
    vec![
        StatRow::new(
            "Total number of surveys",
            stats
                .total
                .map(|total| total.to_string())
                .unwrap_or_else(placeholder),
        ),
        StatRow::new("Average Age", one_decimal(stats.avg_age)),
        StatRow::new(
            "Oldest person who participated in survey",
            as_is(stats.max_age),
        ),
        StatRow::new(
            "Youngest person who participated in survey",
            as_is(stats.min_age),
        ),
        StatRow::new(
            "Percentage of people who like Pizza",
            percentage(stats.pizza_pct),
        ),
        StatRow::new(
            "Percentage of people who like Pasta",
            percentage(stats.pasta_pct),
        ),
        StatRow::new(
            "Percentage of people who like Pap and Wors",
            percentage(stats.pap_pct),
        ),
        StatRow::new("People who like to eat out", one_decimal(stats.avg_eat_out)),
        StatRow::new(
            "People who like to watch movies",
            one_decimal(stats.avg_watch_movies),
        ),
        StatRow::new("People who like to watch TV", one_decimal(stats.avg_watch_tv)),
        StatRow::new(
            "People who like to listen to radio",
            one_decimal(stats.avg_listen_radio),
        ),
    ]
}

fn placeholder() -> String {
    NO_SURVEYS_PLACEHOLDER.to_string()
}

// Whole numbers print without a fractional part.
fn as_is(value: Option<f64>) -> String {
    value.map(|number| number.to_string()).unwrap_or_else(placeholder)
}

/// One decimal place, halves rounded away from zero.
fn tenths(number: f64) -> String {
    // Only odd multiples of 0.25 land exactly on a hundredths tie.
    let on_tie = (number * 4.0).fract() == 0.0 && (number * 2.0).fract() != 0.0;
    let number = if on_tie {
        (number * 10.0).round() / 10.0
    } else {
        number
    };
    format!("{number:.1}")
}

fn one_decimal(value: Option<f64>) -> String {
    value.map(tenths).unwrap_or_else(placeholder)
}

fn percentage(value: Option<f64>) -> String {
    value
        .map(|number| format!("{} %", tenths(number)))
        .unwrap_or_else(|| NO_PERCENTAGE_PLACEHOLDER.to_string())
}
