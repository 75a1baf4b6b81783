use crate::schema::ListingV1;

/// Serialize as minified JSON (no whitespace).
pub fn to_minified_json(listing: &ListingV1) -> Result<String, serde_json::Error> {
    serde_json::to_string(listing)
}

/// Serialize as pretty JSON (for debugging).
pub fn to_pretty_json(listing: &ListingV1) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(listing)
}
