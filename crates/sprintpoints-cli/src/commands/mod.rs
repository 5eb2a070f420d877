pub mod calc;
pub mod completions;
pub mod config;
pub mod platforms;
pub mod session;

use sprintpoints_core::{OutputFormat, SprintReport};

/// Render a report the way the user asked for it.
pub fn render(
    report: &SprintReport,
    format: OutputFormat,
    show_capacity: bool,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(report),
        OutputFormat::Table => Ok(report.render_table(show_capacity)),
    }
}
