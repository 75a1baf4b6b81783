use hexrows_core::model::Row;

/// Render one row as comma-separated `0x` literals with a trailing comma.
///
/// Token text is carried verbatim (case included), so `ff` renders as `0xff`
/// and `FF` as `0xFF`.
pub fn render_row(row: &Row) -> String {
    let literals: Vec<String> = row.tokens.iter().map(|t| format!("0x{t}")).collect();

    format!("{},", literals.join(", "))
}

/// Render all rows, one line per row, each line terminated with `\n`.
///
/// Zero rows render as the empty string.
pub fn render_lines(rows: &[Row]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&render_row(row));
        out.push('\n');
    }
    out
}
