//! Text rendering of cycles for the command line.

use crate::config::OutputFormat;
use crate::domain::foundation::Cycle;

use super::CycleSummary;

/// Renders one cycle in the requested format.
pub fn render_cycle(cycle: Cycle, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Short => Ok(cycle.to_string()),
        OutputFormat::Long => Ok(cycle.long_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&CycleSummary::from(cycle)),
    }
}

/// Renders a list of cycles, one per line or as a JSON array.
pub fn render_cycles(cycles: &[Cycle], format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Json => {
            let summaries: Vec<CycleSummary> = cycles.iter().copied().map(CycleSummary::from).collect();
            serde_json::to_string_pretty(&summaries)
        }
        _ => cycles
            .iter()
            .map(|cycle| render_cycle(*cycle, format))
            .collect::<Result<Vec<_>, _>>()
            .map(|lines| lines.join("\n")),
    }
}
