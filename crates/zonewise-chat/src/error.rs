//! Error types for the conversational engine.

/// Errors rejected before a turn mutates any state.
#[derive(Debug, thiserror::Error)]
pub enum ChatError {
    #[error("utterance cannot be empty")]
    EmptyUtterance,
    #[error("utterance exceeds maximum length of {0} characters")]
    UtteranceTooLong(usize),
    #[error("no user identity submitted yet")]
    AwaitingIdentity,
}
