use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormsError {
    #[error("no normative range available for this test")]
    NoApplicableRange,
}
