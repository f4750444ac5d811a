//! Fixed-width bordered summary of a finished run.
//!
//! ```text
//! +----------------------------------------------+
//! |                Simulation Data               |
//! | Start Infected Cells:                     10 |
//! ...
//! +----------------------------------------------+
//! ```
//!
//! Every line is 48 columns wide: a 40-column left-aligned label, a
//! 6-column right-aligned value and a closing ` |`.

use std::io::Write;

use ca_sim::SimReport;

use crate::OutputResult;

const BORDER: &str = "+----------------------------------------------+";
const LABEL_WIDTH: usize = 40;
const VALUE_WIDTH: usize = 6;

fn row(out: &mut String, label: &str, value: impl std::fmt::Display) {
    let label = format!("| {label}: ");
    out.push_str(&format!(
        "{:<lw$}{:>vw$} |\n",
        label,
        value,
        lw = LABEL_WIDTH,
        vw = VALUE_WIDTH
    ));
}

/// Render the summary block, including the leading and trailing blank lines.
pub fn render_summary(report: &SimReport) -> String {
    let mut out = String::new();
    out.push('\n');
    out.push_str(BORDER);
    out.push('\n');
    out.push_str(&format!("| {:15}Simulation Data{:14} |\n", "", ""));
    row(&mut out, "Start Infected Cells",   report.initial_infected);
    row(&mut out, "Trips per day",          report.trips_per_day);
    row(&mut out, "Trips max distance",     report.travel_radius);
    row(&mut out, "Current Day",            report.day);
    row(&mut out, "Max Day",                report.max_days);
    row(&mut out, "Susceptible Population", report.counts.susceptible);
    row(&mut out, "Infected Population",    report.counts.infected);
    row(&mut out, "Detected Population",    report.counts.detected);
    row(&mut out, "Immune Population",      report.counts.immune);
    row(&mut out, "Deceased Population",    report.counts.dead);
    out.push_str(BORDER);
    out.push_str("\n\n");
    out
}

/// Write [`render_summary`] to `out`.
pub fn write_summary<W: Write>(out: &mut W, report: &SimReport) -> OutputResult<()> {
    out.write_all(render_summary(report).as_bytes())?;
    out.flush()?;
    Ok(())
}
