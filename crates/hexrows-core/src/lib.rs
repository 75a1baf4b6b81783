//! Core types and deterministic helpers for formatting hex strings as rows of
//! byte literals.
//!
//! This crate contains **no** I/O and no rendering. It focuses on:
//! - the token / row data model
//! - partitioning input into byte-sized tokens
//! - grouping tokens into fixed-width rows
//! - opt-in strict hex checking
//!
//! Rendering and the CLI live in higher layers (`hexrows-render`,
//! `hexrows-cli`).

pub mod model;
pub mod tokenize;
pub mod validate;
