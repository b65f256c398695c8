//! Best-effort hex integer parsing.
//!
//! Same degraded-conversion policy as decimal parsing (see
//! `decimal::parse`), with hex digit semantics:
//!
//! - Digits `0-9a-fA-F`, freely case-mixed.
//! - An optional `0x` / `0X` prefix is accepted transparently; it is
//!   neither required nor an error. A bare `"0x"` has no digits and parses
//!   to (false, 0).
//! - No sign handling. Accumulation happens in the unsigned type of the
//!   target's width and signed destinations receive the bit pattern
//!   reinterpreted, so the 32-bit signed parser accepts the full
//!   `0x0..=0xFFFFFFFF` range and `"FFFFFFFF"` yields -1 cleanly.
//! - On overflow of the width's bit capacity the written value is the
//!   all-ones pattern for that width and the result is false.

use crate::ascii::{hex_digit, is_whitespace};

macro_rules! hex_parser {
    (
        $(#[$meta:meta])*
        $name:ident, $ty:ty, $accum:ty
    ) => {
        $(#[$meta])*
        pub fn $name(input: &str, output: &mut $ty) -> bool {
            let bytes = input.as_bytes();
            let mut pos = 0;
            let mut clean = true;

            while pos < bytes.len() && is_whitespace(bytes[pos]) {
                clean = false;
                pos += 1;
            }

            if pos + 1 < bytes.len()
                && bytes[pos] == b'0'
                && (bytes[pos + 1] == b'x' || bytes[pos + 1] == b'X')
            {
                pos += 2;
            }

            let digits_start = pos;
            let mut value: $accum = 0;
            let mut clamped = false;
            while pos < bytes.len() {
                let digit = match hex_digit(bytes[pos]) {
                    Some(d) => d as $accum,
                    None => break,
                };
                if !clamped {
                    match value.checked_mul(16).and_then(|v| v.checked_add(digit)) {
                        Some(v) => value = v,
                        None => {
                            value = <$accum>::MAX;
                            clamped = true;
                        }
                    }
                }
                pos += 1;
            }

            if pos == digits_start {
                *output = 0;
                return false;
            }
            *output = value as $ty;
            clean && !clamped && pos == bytes.len()
        }
    };
}

hex_parser!(
    /// Best-effort parse of hex text into a signed 32-bit destination.
    /// Mirrors base::HexStringToInt(). Accepts the unsigned 32-bit bit
    /// range and reinterprets it; there is no sign handling.
    hex_string_to_int,
    i32,
    u32
);

hex_parser!(
    /// Best-effort parse of hex text into an unsigned 32-bit value.
    /// Mirrors base::HexStringToUInt().
    hex_string_to_uint,
    u32,
    u32
);

hex_parser!(
    /// Best-effort parse of hex text into a signed 64-bit destination.
    /// Mirrors base::HexStringToInt64(). Bit-pattern semantics as with
    /// the 32-bit form.
    hex_string_to_int64,
    i64,
    u64
);

hex_parser!(
    /// Best-effort parse of hex text into an unsigned 64-bit value.
    /// Mirrors base::HexStringToUInt64().
    hex_string_to_uint64,
    u64,
    u64
);
