use brick::analysis::ValidationError;
use std::error::Error;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompileError {
    Validation(ValidationError),
}

impl Error for CompileError {}

impl std::fmt::Display for CompileError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Validation(error) => write!(formatter, "{}", error),
        }
    }
}

impl From<ValidationError> for CompileError {
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}
