//! Error types for the quiz engine and profile capture.
//!
//! [`score`](crate::engine::score) ignores answers that match no option;
//! only an interactive [`QuizSession`](crate::engine::QuizSession) rejects them.

use thiserror::Error;

/// Errors raised by the scoring engine and the quiz session state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// An answer is keyed to a question index outside `[0, len)`.
    #[error("answer index {index} is out of range for a {len}-question quiz")]
    InvalidIndex { index: usize, len: usize },

    /// The chosen value is not one of the question's options.
    #[error("question {} has no option '{}'", .index + 1, .value)]
    UnknownOption { index: usize, value: String },

    /// An answer arrived for a question other than the current one.
    #[error("expected an answer for question {}, got question {}", .expected + 1, .got + 1)]
    OutOfOrder { expected: usize, got: usize },

    /// A batch of answers does not cover the quiz exactly.
    #[error("expected {expected} answers, got {got}")]
    AnswerCount { expected: usize, got: usize },

    /// `start` was called on a session that already started.
    #[error("quiz attempt has already started")]
    AlreadyStarted,

    /// The session is not accepting answers (not started or already completed).
    #[error("quiz is not in progress")]
    NotInProgress,
}

/// Errors raised when building a [`Profile`](crate::model::Profile).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("{0} is required")]
    MissingField(&'static str),
}
