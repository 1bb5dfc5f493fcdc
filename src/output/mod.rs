mod formatter;
mod report;

pub use formatter::{format_output, OutputFormat};
pub use report::{build_validation_report, Report, ValidationEntry, ValidationSummary};
