/// Convenience result type used across the client.
pub type SceneResult<T> = Result<T, SceneError>;

/// Error taxonomy of the client.
///
/// Building and mutating primitives never fails; these errors surface only from the function
/// registry, from settings parsing and from the output channel once it is flushed or finished.
#[derive(thiserror::Error, Debug)]
pub enum SceneError {
    /// Invalid user-provided settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Rejected interpolation function registration.
    #[error("registry error: {0}")]
    Registry(String),

    /// Failure of the underlying output channel.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors when serializing or deserializing settings.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SceneError {
    /// Build a [`SceneError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SceneError::Registry`] value.
    pub fn registry(msg: impl Into<String>) -> Self {
        Self::Registry(msg.into())
    }

    /// Build a [`SceneError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for SceneError {
    fn from(err: serde_json::Error) -> Self {
        Self::serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
