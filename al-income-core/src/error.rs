use thiserror::Error;

pub type IncomeResult<T> = Result<T, IncomeError>;

/// Failures raised while computing totals.
///
/// Fields may be filled in lazily by the host, so nothing is validated at
/// construction time; a missing field only surfaces when a total needs it.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum IncomeError {
    #[error("missing attribute `{0}`")]
    MissingAttribute(&'static str),
    #[error("invalid amount `{input}`: {reason}")]
    InvalidAmount { input: String, reason: String },
    #[error("population hook failed: {0}")]
    Population(String),
}

impl IncomeError {
    pub(crate) fn invalid_amount<I: ToString, R: ToString>(input: I, reason: R) -> Self {
        IncomeError::InvalidAmount {
            input: input.to_string(),
            reason: reason.to_string(),
        }
    }
}
