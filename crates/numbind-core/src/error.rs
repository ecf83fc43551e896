use crate::errorcode::LibError;
use crate::provider::NumericProvider;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidArgument {
    #[error("{name} is empty")]
    Empty { name: &'static str },
    #[error("stride of {name} must be positive")]
    ZeroStride { name: &'static str },
    #[error("{a} and {b} have different strided lengths: {len_a} vs {len_b}")]
    LengthMismatch { a: &'static str, b: &'static str, len_a: usize, len_b: usize },
    #[error("output buffer too small: got {len}, need at least {needed}")]
    BufferTooSmall { len: usize, needed: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NumError {
    #[error("library error {code}: {0}", code = .0.code())]
    Library(#[from] LibError),
    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] InvalidArgument),
}

impl NumError {
    /// Wrap a raw status raised by `provider`, described by its own table
    pub fn from_status(provider: &dyn NumericProvider, code: i32) -> Self {
        NumError::Library(LibError::from_provider(provider, code))
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, NumError::InvalidArgument(_))
    }

    /// Raw provider code, if this is a library failure
    pub fn code(&self) -> Option<i32> {
        match self {
            NumError::Library(e) => Some(e.code()),
            NumError::InvalidArgument(_) => None,
        }
    }
}

pub type NumResult<T> = Result<T, NumError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{default_provider, Status};

    #[test]
    fn test_library_error_message() {
        let e = NumError::from_status(default_provider(), Status::EZERODIV);
        assert_eq!(e.to_string(), "library error 12: tried to divide by zero");
        assert_eq!(e.code(), Some(12));
        assert!(!e.is_invalid_argument());
    }

    #[test]
    fn test_invalid_argument_message() {
        let e: NumError = InvalidArgument::BufferTooSmall { len: 3, needed: 10 }.into();
        assert_eq!(e.to_string(), "invalid argument: output buffer too small: got 3, need at least 10");
        assert!(e.is_invalid_argument());
        assert_eq!(e.code(), None);
    }
}
