use std::fmt::Write;

use colored::Colorize;
use serde::Deserialize;

use super::report::{Report, ValidationEntry, ValidationSummary};
use crate::domain::Identifier;
use crate::error::Result as LuhnixResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Terminal,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "terminal" | "term" | "tty" => Ok(Self::Terminal),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {s}. Valid options: terminal, json")),
        }
    }
}

pub fn format_output(report: &Report, format: OutputFormat) -> LuhnixResult<String> {
    match format {
        OutputFormat::Terminal => Ok(format_terminal(report)),
        OutputFormat::Json => format_json(report),
    }
}

fn format_json(report: &Report) -> LuhnixResult<String> {
    let mut output = serde_json::to_string_pretty(report)?;
    output.push('\n');
    Ok(output)
}

fn format_terminal(report: &Report) -> String {
    match report {
        Report::Validation { entries, summary } => format_validation(entries, *summary),
        Report::CheckDigit {
            partial,
            check_digit,
            identifier,
        } => format!(
            "Check digit for {}: {}\nComplete number: {}\n",
            partial,
            check_digit.to_string().green().bold(),
            identifier.as_str().bold()
        ),
        Report::Count {
            start,
            end,
            count,
            verified,
        } => format_count(start, end, *count, *verified),
        Report::Next { from, next } => {
            let mut output = String::new();
            let _ = writeln!(output, "Next valid after {from}:");
            for id in next {
                let _ = writeln!(output, "  {}", id.as_str().green());
            }
            output
        }
    }
}

fn format_validation(entries: &[ValidationEntry], summary: ValidationSummary) -> String {
    let mut output = String::new();

    for entry in entries {
        match (&entry.number, &entry.error) {
            (_, Some(error)) => {
                let _ = writeln!(output, "{} {}", "!".yellow().bold(), error.yellow());
            }
            (Some(number), None) if entry.valid => {
                let _ = writeln!(output, "{} {} valid", "✓".green().bold(), number);
            }
            (Some(number), None) => {
                let _ = writeln!(
                    output,
                    "{} {} invalid (checksum {})",
                    "✗".red().bold(),
                    number,
                    entry.checksum.unwrap_or_default()
                );
            }
            (None, None) => {}
        }
    }

    if entries.len() > 1 {
        let _ = writeln!(
            output,
            "\n{} valid, {} invalid, {} malformed",
            summary.valid.to_string().green(),
            summary.invalid.to_string().red(),
            summary.malformed.to_string().yellow()
        );
    }

    output
}

fn format_count(start: &Identifier, end: &Identifier, count: u64, verified: Option<bool>) -> String {
    let mut output = format!(
        "{} valid number(s) between {start} and {end}\n",
        count.to_string().green().bold()
    );
    match verified {
        Some(true) => {
            let _ = writeln!(output, "{}", "Verified by exhaustive scan".green());
        }
        Some(false) => {
            let _ = writeln!(
                output,
                "{}",
                "Exhaustive scan disagrees with jump count".red().bold()
            );
        }
        None => {}
    }
    output
}
