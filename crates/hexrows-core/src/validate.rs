use core::fmt;

use hex::FromHexError;

/// Why strict checking rejected an input.
///
/// Messages are stable strings so CI callers can match on them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HexCheckError {
    /// The input does not split into whole hex pairs.
    OddLength { len: usize },
    /// A character outside `[0-9a-fA-F]`.
    InvalidCharacter { c: char, index: usize },
}

impl fmt::Display for HexCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HexCheckError::OddLength { len } => {
                write!(f, "input has odd length {len} (expected whole hex pairs)")
            }
            HexCheckError::InvalidCharacter { c, index } => {
                write!(f, "invalid hex character '{c}' at index {index}")
            }
        }
    }
}

impl std::error::Error for HexCheckError {}

/// Strict check: the input must be a whole number of well-formed hex pairs.
///
/// Default behavior of the tool is pass-through (no validation at all); this
/// is the opt-in guard behind `--strict`.
pub fn check_hex(input: &str) -> Result<(), HexCheckError> {
    match hex::decode(input) {
        Ok(_) => Ok(()),
        Err(FromHexError::InvalidHexCharacter { c, index }) => {
            Err(HexCheckError::InvalidCharacter { c, index })
        }
        Err(FromHexError::OddLength) | Err(FromHexError::InvalidStringLength) => {
            Err(HexCheckError::OddLength {
                len: input.chars().count(),
            })
        }
    }
}
