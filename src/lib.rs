//! Locale-independent string ↔ number conversions and hex codecs.
//!
//! # Architecture
//!
//! This crate mirrors the conversion surface of Chromium's
//! `base/strings/string_number_conversions` API as a set of pure Rust
//! functions:
//!
//! | base API                     | Module           |
//! |------------------------------|------------------|
//! | IntToString family           | decimal::format  |
//! | StringToInt family           | decimal::parse   |
//! | StringToSizeT                | decimal::parse   |
//! | HexEncode / HexStringToBytes | hex::codec       |
//! | HexStringToInt family        | hex::parse       |
//! | WString variants             | wide             |
//!
//! # Degraded conversions
//!
//! Parsers never fail outright. Every call writes a well-defined value
//! through its output parameter and returns `true` only for a perfect
//! conversion: the entire input consumed, no overflow, no leading
//! whitespace. On failure the written value is still usable — the parsed
//! prefix, the type's clamp value, or zero — so callers get a best-effort
//! result for diagnostics and lenient paths while the `bool` stays
//! authoritative for error handling.
//!
//! There are no convenience forms that return a bare value and ignore
//! success/failure. That encourages code that doesn't handle the error
//! conditions.
//!
//! Everything here is locale-independent: ASCII digits only, no grouping
//! separators, no Unicode digit classes. Floating-point conversions are out
//! of scope; use a locale-aware numeric library for those.

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod ascii;

pub mod decimal;
pub mod hex;
pub mod wide;


// ═══════════════════════════════════════════════════════════════════════
// Flat re-exports — the API is a stateless free-function namespace
// ═══════════════════════════════════════════════════════════════════════

pub use crate::decimal::format::{int64_to_string, int_to_string, uint64_to_string, uint_to_string};
pub use crate::decimal::parse::{
    string_to_int, string_to_int64, string_to_size_t, string_to_uint, string_to_uint64,
};
pub use crate::hex::codec::{hex_encode, hex_string_to_bytes};
pub use crate::hex::parse::{
    hex_string_to_int, hex_string_to_int64, hex_string_to_uint, hex_string_to_uint64,
};
pub use crate::wide::{
    int64_to_wstring, int_to_wstring, uint64_to_wstring, uint_to_wstring, wstring_to_int,
    wstring_to_int64, wstring_to_size_t, wstring_to_uint, wstring_to_uint64,
};
