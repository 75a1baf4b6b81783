//! Output rendering for `hexrows`.
//!
//! Two surfaces:
//! - literal lines (`render`): rows of `0x..` byte literals, one row per line
//! - a versioned JSON listing (`schema` + `serialize`) for machine consumers

pub mod render;
pub mod schema;
pub mod serialize;
