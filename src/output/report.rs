use serde::Serialize;

use crate::domain::Identifier;

/// Result of one CLI command, ready to be rendered.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Report {
    Validation {
        entries: Vec<ValidationEntry>,
        summary: ValidationSummary,
    },
    CheckDigit {
        partial: Identifier,
        check_digit: u8,
        identifier: Identifier,
    },
    Count {
        start: Identifier,
        end: Identifier,
        count: u64,
        #[serde(skip_serializing_if = "Option::is_none")]
        verified: Option<bool>,
    },
    Next {
        from: Identifier,
        next: Vec<Identifier>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationEntry {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<Identifier>,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ValidationSummary {
    pub valid: usize,
    pub invalid: usize,
    pub malformed: usize,
}

impl ValidationEntry {
    /// Malformed input becomes an entry with `error` set rather than a
    /// failure, so one bad line does not hide the rest of a batch.
    #[must_use]
    pub fn check(input: &str) -> Self {
        match Identifier::parse(input) {
            Ok(number) => {
                let checksum = number.checksum();
                Self {
                    input: input.to_string(),
                    number: Some(number),
                    valid: checksum == 0,
                    checksum: Some(checksum),
                    error: None,
                }
            }
            Err(e) => Self {
                input: input.to_string(),
                number: None,
                valid: false,
                checksum: None,
                error: Some(e.to_string()),
            },
        }
    }

    #[must_use]
    pub fn is_malformed(&self) -> bool {
        self.error.is_some()
    }
}

impl ValidationSummary {
    #[must_use]
    pub fn all_valid(&self) -> bool {
        self.invalid == 0 && self.malformed == 0
    }
}

#[must_use]
pub fn build_validation_report<'a, I>(inputs: I) -> Report
where
    I: IntoIterator<Item = &'a str>,
{
    let entries: Vec<ValidationEntry> = inputs.into_iter().map(ValidationEntry::check).collect();

    let mut summary = ValidationSummary::default();
    for entry in &entries {
        if entry.is_malformed() {
            summary.malformed += 1;
        } else if entry.valid {
            summary.valid += 1;
        } else {
            summary.invalid += 1;
        }
    }

    Report::Validation { entries, summary }
}
