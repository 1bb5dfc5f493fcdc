use anyhow::Result;

use luhnix::output::{format_output, OutputFormat, Report};
use luhnix::{complete_identifier, Identifier};

pub fn run_generate(partial: &str, format: OutputFormat) -> Result<()> {
    let partial = Identifier::parse(partial)?;
    let identifier = complete_identifier(&partial);

    let report = Report::CheckDigit {
        check_digit: identifier.check_digit(),
        partial,
        identifier,
    };
    print!("{}", format_output(&report, format)?);
    Ok(())
}
