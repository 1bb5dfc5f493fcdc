use anyhow::Result;
use tracing::warn;

use luhnix::config::LuhnixConfig;
use luhnix::output::{format_output, OutputFormat, Report};
use luhnix::{count_range_exhaustive, count_valid_in, Identifier, NumberRange, ValidAfter};

pub fn run_count(
    start: &str,
    end: &str,
    verify: bool,
    config: &LuhnixConfig,
    format: OutputFormat,
) -> Result<()> {
    let range = NumberRange::parse(start, end)?;
    let count = count_valid_in(&range);

    let verified = if verify {
        let limit = u128::from(config.range.verify_limit);
        match range.span() {
            Some(span) if span <= limit => {
                let reference = count_range_exhaustive(&range);
                if reference != count {
                    warn!(
                        start = %range.start(),
                        end = %range.end(),
                        count,
                        reference,
                        "jump count disagrees with exhaustive scan"
                    );
                }
                Some(reference == count)
            }
            _ => anyhow::bail!(
                "Range is wider than range.verify_limit ({limit}); refusing to verify exhaustively"
            ),
        }
    } else {
        None
    };

    let report = Report::Count {
        start: range.start().clone(),
        end: range.end().clone(),
        count,
        verified,
    };
    print!("{}", format_output(&report, format)?);

    if verified == Some(false) {
        std::process::exit(1);
    }
    Ok(())
}

pub fn run_next(number: &str, count: usize, format: OutputFormat) -> Result<()> {
    let from = Identifier::parse(number)?;
    let next = ValidAfter::new(from.clone()).take(count).collect();

    let report = Report::Next { from, next };
    print!("{}", format_output(&report, format)?);
    Ok(())
}
