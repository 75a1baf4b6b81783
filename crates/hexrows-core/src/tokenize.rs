use crate::model::{ByteToken, Row};

/// Partition input into consecutive 2-character tokens.
///
/// Notes:
/// - Partitioning starts at offset 0 and steps by 2.
/// - Splitting is by character, not byte, so pass-through input with multi-byte
///   characters cannot split one in half.
/// - An odd-length input yields a final 1-character token; empty input yields
///   no tokens.
pub fn tokenize(input: &str) -> Vec<ByteToken> {
    let chars: Vec<char> = input.chars().collect();
    chars
        .chunks(2)
        .map(|pair| ByteToken::new(pair.iter().collect::<String>()))
        .collect()
}

/// Group tokens into rows of `width`.
///
/// A trailing group of fewer than `width` tokens is silently dropped unless
/// `keep_partial` is set, in which case it becomes a short final row.
/// Truncation is not an error in either mode.
///
/// `width` must be nonzero; the CLI rejects `--width 0` before calling this.
pub fn group_rows(tokens: &[ByteToken], width: usize, keep_partial: bool) -> Vec<Row> {
    tokens
        .chunks(width)
        .filter(|chunk| keep_partial || chunk.len() == width)
        .map(|chunk| Row {
            tokens: chunk.to_vec(),
        })
        .collect()
}
