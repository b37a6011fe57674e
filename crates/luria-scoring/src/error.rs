use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScoringError {
    #[error("question {0} was not answered")]
    Unanswered(u32),

    #[error("answer to question {0} is not a number")]
    NotANumber(u32),

    #[error("invalid scoring rule: {0}")]
    InvalidRule(String),

    /// `Display` stays generic; `detail` is for structured logs only.
    #[error("custom score calculation failed")]
    CustomFailed { detail: String },
}
