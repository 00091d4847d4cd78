use thiserror::Error;

/// Core error type shared across socialscrape crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A record points at an id that was not produced in the same scrape.
    #[error("dangling reference: {kind} '{id}' references missing {target} '{target_id}'")]
    DanglingReference {
        kind: &'static str,
        id: String,
        target: &'static str,
        target_id: String,
    },
    /// Two records of the same kind share an id.
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
}

/// Convenience alias for results returned by socialscrape crates.
pub type Result<T> = std::result::Result<T, Error>;
