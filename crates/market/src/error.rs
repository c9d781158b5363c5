pub use bazaar_ports::EngineError;

pub type Result<T> = std::result::Result<T, EngineError>;

/// Shorthand for an invariant failure with a formatted message
pub(crate) fn invariant(message: impl Into<String>) -> EngineError {
    EngineError::InvariantViolation(message.into())
}
