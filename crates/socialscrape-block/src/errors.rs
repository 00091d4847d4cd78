use std::fmt;

use thiserror::Error;

use socialscrape_generate::{ClientError, GenerationError};

/// Severity level for validation issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IssueSeverity {
    Error,
    Warning,
}

/// Structured validation issue with a JSON pointer location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    pub severity: IssueSeverity,
    pub code: String,
    pub path: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn error(
        code: impl Into<String>,
        path: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity: IssueSeverity::Error,
            code: code.into(),
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Aggregated validation report with errors and warnings.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<ValidationIssue>,
}

impl ValidationReport {
    /// Returns true when there are no errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn push_error(&mut self, issue: ValidationIssue) {
        self.errors.push(issue);
    }

    pub fn push_warning(&mut self, issue: ValidationIssue) {
        self.warnings.push(issue);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for issue in &self.errors {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{} at {}: {}", issue.code, issue.path, issue.message)?;
            first = false;
        }
        Ok(())
    }
}

/// Failures inside the block run. Surfaced as the `error` output.
#[derive(Debug, Error)]
pub enum BlockError {
    #[error(transparent)]
    Client(#[from] ClientError),
    #[error(transparent)]
    Generation(#[from] GenerationError),
}

/// Failures at the host boundary, before or after the block runs.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid input: {0}")]
    InvalidInput(ValidationReport),
    #[error("credentials for provider '{expected}' required, got '{actual}'")]
    ProviderMismatch { expected: String, actual: String },
    #[error("missing credentials: {0}")]
    MissingCredentials(String),
    #[error("cost accounting failed: {0}")]
    Cost(String),
}
