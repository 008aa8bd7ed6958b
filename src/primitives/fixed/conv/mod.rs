//! Conversion helpers for `FixedInt`.
//!
//! Split by concern: the width-to-width matrix, bridges to the Rust
//! primitive integers, and width-exact byte encodings.

pub mod bytes;
pub mod matrix;
pub mod primitive;
