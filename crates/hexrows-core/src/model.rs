use core::fmt;

/// One byte's hex encoding, taken from the input as a 2-character substring.
///
/// Pass-through mode does not require well-formed pairs: an odd-length input
/// produces a final 1-character token, and non-hex characters are carried
/// through verbatim. Use [`ByteToken::is_well_formed`] (or the strict check in
/// `crate::validate`) when that matters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ByteToken(String);

impl ByteToken {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the token is exactly two ASCII hex digits.
    pub fn is_well_formed(&self) -> bool {
        self.0.len() == 2 && self.0.bytes().all(|b| b.is_ascii_hexdigit())
    }
}

impl fmt::Display for ByteToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An ordered group of tokens, printed as one output line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Row {
    pub tokens: Vec<ByteToken>,
}

impl Row {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
