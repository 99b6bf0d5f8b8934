use thiserror::Error;

/// Errors that may occur when decoding an unsigned vint.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
pub enum DecodeError {
    /// The source ended before the declared length was available.
    ///
    /// The first byte announces how many bytes the value occupies; fewer than
    /// that many remained. Callers streaming data may retry once more input
    /// has arrived.
    #[error("truncated vint: input ended before the declared length")]
    Truncated,
}
