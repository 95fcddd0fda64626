use serde::Serialize;
use tabled::builder::Builder;
use tabled::settings::Style;

use super::report::Report;

pub const TABLE_HEADERS: [&str; 6] = [
    "Total success flows",
    "Total error flows",
    "Total flows",
    "Mean time",
    "Standard deviation",
    "Total time",
];

/// Renders the report as a two-row table: headers, then values. Times are
/// seconds with two decimals.
#[must_use]
pub fn render_text(report: &Report) -> String {
    let headers = TABLE_HEADERS.iter().map(|header| (*header).to_owned()).collect();
    let values = vec![
        report.successful_flows.to_string(),
        report.failed_flows.to_string(),
        report.total_flows.to_string(),
        seconds(report.mean_time),
        seconds(report.standard_deviation),
        seconds(report.total_time),
    ];

    let mut table = Builder::from(vec![headers, values]).build();
    table.with(Style::psql());
    table.to_string()
}

/// Machine-readable report; times are seconds as two-decimal strings.
#[derive(Debug, Serialize)]
struct JsonReport {
    successful_flows: usize,
    failed_flows: usize,
    total_flows: usize,
    mean_time: String,
    standard_deviation: String,
    total_time: String,
    rounds: usize,
}

/// Renders the report as one JSON object for machine consumption.
///
/// # Errors
///
/// Returns an error if the report cannot be serialized.
pub fn render_json(report: &Report, rounds: usize) -> Result<String, serde_json::Error> {
    serde_json::to_string(&JsonReport {
        successful_flows: report.successful_flows,
        failed_flows: report.failed_flows,
        total_flows: report.total_flows,
        mean_time: seconds(report.mean_time),
        standard_deviation: seconds(report.standard_deviation),
        total_time: seconds(report.total_time),
        rounds,
    })
}

fn seconds(value: f64) -> String {
    format!("{:.2}", value)
}
