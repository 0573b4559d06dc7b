//! Error types for pagesim.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
/// This is a common Rust pattern (see `std::io::Result`).
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in pagesim.
///
/// The engine recognizes exactly one input-validation class: the frame count
/// must be positive and the reference string non-empty. Both are checked
/// before any step is produced, so a failed `simulate` never yields a
/// partial trace.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// The configured frame count was zero.
    #[error("frame count must be at least 1, got {0}")]
    InvalidFrameCount(usize),

    /// The reference string had no entries.
    #[error("reference string must not be empty")]
    EmptyReferenceString,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidFrameCount(0);
        assert_eq!(format!("{}", err), "frame count must be at least 1, got 0");

        let err = Error::EmptyReferenceString;
        assert_eq!(format!("{}", err), "reference string must not be empty");
    }

    #[test]
    fn test_result_type_alias() {
        fn might_fail() -> Result<u32> {
            Ok(42)
        }

        assert_eq!(might_fail().unwrap(), 42);
    }
}
