use thiserror::Error;

/// Returned when a symbolic name is not in the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown character code name `{name}`")]
pub struct UnknownNameError {
    pub name: String,
}

impl UnknownNameError {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Returned when text cannot be read as a code point.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCodePointError {
    #[error("empty code point")]
    Empty,
    #[error("invalid code point `{0}`")]
    InvalidDigits(String),
    #[error("code point {value:#X} is above U+10FFFF")]
    OutOfRange { value: u64 },
    #[error("code point `{0}` is above U+10FFFF")]
    TooLarge(String),
}
