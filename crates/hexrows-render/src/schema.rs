use serde::{Deserialize, Serialize};

use hexrows_core::model::Row;

/// Ultra-minimal JSON listing of grouped rows, v1.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingV1 {
    /// Version (const = 1)
    pub v: u8,
    /// Tokens per full row
    pub w: usize,
    /// Rows in input order
    pub r: Vec<RowTupleV1>,
}

/// Row tuple: the row's token texts in input order.
pub type RowTupleV1 = Vec<String>;

impl ListingV1 {
    pub fn from_rows(width: usize, rows: &[Row]) -> Self {
        Self {
            v: 1,
            w: width,
            r: rows
                .iter()
                .map(|row| {
                    row.tokens
                        .iter()
                        .map(|t| t.as_str().to_string())
                        .collect()
                })
                .collect(),
        }
    }
}
