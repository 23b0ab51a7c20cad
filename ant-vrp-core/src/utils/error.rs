use std::fmt::{Display, Formatter};

/// An error with a human readable message, used where no dedicated error type is needed:
/// model validation, problem readers and configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct GenericError(String);

/// A result type with [`GenericError`].
pub type GenericResult<T> = Result<T, GenericError>;

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(message: String) -> Self {
        Self(message)
    }
}

impl From<&str> for GenericError {
    fn from(message: &str) -> Self {
        Self(message.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(err: std::io::Error) -> Self {
        Self(err.to_string())
    }
}
