use std::result::Result as StdResult;

use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures the family invariants enforced at enrollment.
#[derive(Debug, Error)]
pub enum FamilyError {
    #[error("invalid membership plan: {0}")]
    InvalidPlan(String),
    #[error("payer {0} is not enrolled in the family")]
    PayerNotEnrolled(String),
    #[error("payer {payer} joined {payer_joined}, after {member} joined {member_joined}")]
    PayerJoinsLate {
        payer: String,
        payer_joined: NaiveDate,
        member: String,
        member_joined: NaiveDate,
    },
    #[error("duplicate member name: {0}")]
    DuplicateMember(String),
    #[error("{name} joined {joined}, on or after the membership end {term_end}")]
    JoinedAfterTermEnd {
        name: String,
        joined: NaiveDate,
        term_end: NaiveDate,
    },
}

pub type Result<T> = StdResult<T, FamilyError>;

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Family(#[from] FamilyError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster parse error: {0}")]
    Roster(String),
    #[error("{0}")]
    Usage(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Roster(err.to_string())
    }
}
