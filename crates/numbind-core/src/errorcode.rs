use crate::provider::{default_provider, NumericProvider, Status};

use std::fmt;

/// A non-success status reported by the numerical provider.
///
/// The message is taken from the table of the provider that raised the
/// status, at the time the error is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LibError {
    code: i32,
    message: &'static str,
}

impl LibError {
    /// Error for `code`, described by the default provider
    pub fn from_code(code: i32) -> Self {
        Self::from_provider(default_provider(), code)
    }

    /// Error for `code`, described by `provider`
    pub fn from_provider(provider: &dyn NumericProvider, code: i32) -> Self {
        Self { code, message: provider.strerror(code) }
    }

    pub fn code(&self) -> i32 {
        self.code
    }

    /// Canonical message for the stored code. Codes the provider does not
    /// know get the provider's unknown-code message.
    pub fn describe(&self) -> &'static str {
        self.message
    }

    pub fn status(&self) -> Option<Status> {
        Status::from_code(self.code)
    }
}

impl Default for LibError {
    fn default() -> Self {
        Self::from_code(Status::SUCCESS)
    }
}

impl From<Status> for LibError {
    fn from(status: Status) -> Self {
        Self::from_code(status.code())
    }
}

impl fmt::Display for LibError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for LibError {}
