//! Error types for address construction and mutation.

/// Errors raised by [`crate::Address`] constructors and mutators.
///
/// Classifier predicates never produce one of these; they answer `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddressError {
    /// The value does not match any supported shape, or matches one but is
    /// out of range (octet above 255, prefix length above 32).
    #[error("{0} isn't a valid IP address")]
    InvalidAddress(String),
    #[error("there are four parts to an IP address, index {0} is out of range")]
    IndexOutOfRange(usize),
    #[error("each of the IP parts is between 0 and 255, got {0}")]
    OctetOutOfRange(u32),
}

pub type Result<T> = std::result::Result<T, AddressError>;

impl AddressError {
    pub(crate) fn invalid<T: std::fmt::Display>(value: T) -> Self {
        AddressError::InvalidAddress(value.to_string())
    }
}
