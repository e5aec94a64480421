//! Error types for the core crate

use thiserror::Error;

use crate::options::OptionsError;

/// Errors raised by maze generation, level selection and options loading
#[derive(Error, Debug)]
pub enum MazeError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type Result<T> = std::result::Result<T, MazeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MazeError::InvalidArgument("grid must have at least one row".to_string());
        assert!(err.to_string().contains("Invalid argument"));
        assert!(err.to_string().contains("at least one row"));
    }

    #[test]
    fn test_from_options_error() {
        let err: MazeError = OptionsError::UnknownOption("colour".to_string()).into();
        assert!(matches!(err, MazeError::Options(_)));
        assert!(err.to_string().contains("colour"));
    }
}
