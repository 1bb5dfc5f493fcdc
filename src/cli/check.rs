use std::io::Read;

use anyhow::{Context, Result};

use luhnix::output::{build_validation_report, format_output, OutputFormat, Report};
use luhnix::Identifier;

pub fn run_validate(numbers: &[String], format: OutputFormat) -> Result<()> {
    for number in numbers {
        Identifier::parse(number)?;
    }

    let report = build_validation_report(numbers.iter().map(String::as_str));
    print_and_exit_on_failure(&report, format)
}

pub fn run_stdin(format: OutputFormat) -> Result<()> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("Failed to read from stdin")?;

    let lines = content.lines().map(str::trim).filter(|line| !line.is_empty());
    let report = build_validation_report(lines);
    print_and_exit_on_failure(&report, format)
}

fn print_and_exit_on_failure(report: &Report, format: OutputFormat) -> Result<()> {
    print!("{}", format_output(report, format)?);

    if let Report::Validation { summary, .. } = report {
        if !summary.all_valid() {
            std::process::exit(1);
        }
    }
    Ok(())
}
