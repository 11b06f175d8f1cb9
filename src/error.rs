use thiserror::Error;

/// Failures surfaced while bringing the terminal up or tearing it down.
///
/// The widgets themselves have no error paths; every state transition is a
/// total function over well-formed state.
#[derive(Debug, Error)]
pub enum TermFloatError {
    #[error("terminal backend error: {0}")]
    Terminal(#[from] std::io::Error),
}
