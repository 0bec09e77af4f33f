use crate::types::Lookup;
use colored::Colorize;

const RULE_WIDTH: usize = 56;
const LABEL_WIDTH: usize = 25;
const MISSING: &str = "N/A";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// ANSI colors, for the terminal.
    Color,
    /// No escape codes, for saved reports.
    Plain,
}

pub fn banner() -> String {
    let lines = [
        "╔══════════════════════════════════════════╗",
        "║        VEHICLEINFO - RTO LOOKUP          ║",
        "╚══════════════════════════════════════════╝",
    ];
    lines
        .iter()
        .map(|line| line.cyan().bold().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render(lookup: &Lookup, style: Style) -> String {
    let paint = |text: String, f: fn(String) -> String| match style {
        Style::Color => f(text),
        Style::Plain => text,
    };
    let rule = paint("═".repeat(RULE_WIDTH), |s| s.cyan().to_string());

    let mut lines = vec![
        rule.clone(),
        paint(
            format!("VEHICLE DETAILS [Source: {}]", lookup.source),
            |s| s.cyan().bold().to_string(),
        ),
        rule.clone(),
    ];
    for row in lookup.record.rows() {
        let label = paint(format!("{:<width$}", row.label, width = LABEL_WIDTH), |s| {
            s.bold().to_string()
        });
        let value = match row.value {
            Some(v) if row.is_plate => paint(v.to_string(), |s| s.yellow().bold().to_string()),
            Some(v) => v.to_string(),
            None => paint(MISSING.to_string(), |s| s.dimmed().to_string()),
        };
        lines.push(format!("  {}: {}", label, value));
    }
    lines.push(rule);
    lines.join("\n")
}
