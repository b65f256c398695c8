//! Best-effort decimal integer parsing.
//!
//! Every parser writes a well-defined value through `output` and returns
//! `true` only for a perfect conversion. A `false` return still leaves a
//! usable value behind:
//!
//! | condition                     | value written          |
//! |-------------------------------|------------------------|
//! | magnitude over type maximum   | type maximum           |
//! | magnitude under type minimum  | type minimum           |
//! | trailing non-digit characters | value parsed so far    |
//! | leading whitespace            | value parsed after it  |
//! | no parseable digits           | 0                      |
//! | empty input                   | 0                      |
//!
//! Overflow is checked before every multiply-add step, never detected after
//! the fact on a wrapped result. Once the clamp is hit, remaining digits are
//! still consumed so that trailing-garbage detection is unaffected.
//!
//! Signed parsers consume an optional leading `-` and accumulate negative
//! values toward the type minimum. A `+` is never consumed, and unsigned
//! parsers consume no sign at all: either reads as "no digit here".

use crate::ascii::{decimal_digit, is_whitespace};

macro_rules! unsigned_parser {
    (
        $(#[$meta:meta])*
        $name:ident, $core:ident, $ty:ty
    ) => {
        $(#[$meta])*
        pub fn $name(input: &str, output: &mut $ty) -> bool {
            $core(input.as_bytes(), output)
        }

        pub(crate) fn $core(input: &[u8], output: &mut $ty) -> bool {
            let mut pos = 0;
            let mut clean = true;

            while pos < input.len() && is_whitespace(input[pos]) {
                clean = false;
                pos += 1;
            }

            let digits_start = pos;
            let mut value: $ty = 0;
            let mut clamped = false;
            while pos < input.len() {
                let digit = match decimal_digit(input[pos]) {
                    Some(d) => d as $ty,
                    None => break,
                };
                if !clamped {
                    match value.checked_mul(10).and_then(|v| v.checked_add(digit)) {
                        Some(v) => value = v,
                        None => {
                            value = <$ty>::MAX;
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
            *output = value;
            clean && !clamped && pos == input.len()
        }
    };
}

macro_rules! signed_parser {
    (
        $(#[$meta:meta])*
        $name:ident, $core:ident, $ty:ty
    ) => {
        $(#[$meta])*
        pub fn $name(input: &str, output: &mut $ty) -> bool {
            $core(input.as_bytes(), output)
        }

        pub(crate) fn $core(input: &[u8], output: &mut $ty) -> bool {
            let mut pos = 0;
            let mut clean = true;

            while pos < input.len() && is_whitespace(input[pos]) {
                clean = false;
                pos += 1;
            }

            let negative = pos < input.len() && input[pos] == b'-';
            if negative {
                pos += 1;
            }

            let digits_start = pos;
            let mut value: $ty = 0;
            let mut clamped = false;
            while pos < input.len() {
                let digit = match decimal_digit(input[pos]) {
                    Some(d) => d as $ty,
                    None => break,
                };
                if !clamped {
                    let step = if negative {
                        value.checked_mul(10).and_then(|v| v.checked_sub(digit))
                    } else {
                        value.checked_mul(10).and_then(|v| v.checked_add(digit))
                    };
                    match step {
                        Some(v) => value = v,
                        None => {
                            value = if negative { <$ty>::MIN } else { <$ty>::MAX };
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
            *output = value;
            clean && !clamped && pos == input.len()
        }
    };
}

signed_parser!(
    /// Best-effort parse of decimal text into a signed 32-bit value.
    /// Mirrors base::StringToInt(). Returns true only for a perfect
    /// conversion; see the module table for the value written on failure.
    string_to_int,
    parse_i32,
    i32
);

signed_parser!(
    /// Best-effort parse of decimal text into a signed 64-bit value.
    /// Mirrors base::StringToInt64().
    string_to_int64,
    parse_i64,
    i64
);

unsigned_parser!(
    /// Best-effort parse of decimal text into an unsigned 32-bit value.
    /// Mirrors base::StringToUint(). A leading `-` is not consumed and
    /// reads as "no parseable digits".
    string_to_uint,
    parse_u32,
    u32
);

unsigned_parser!(
    /// Best-effort parse of decimal text into an unsigned 64-bit value.
    /// Mirrors base::StringToUint64().
    string_to_uint64,
    parse_u64,
    u64
);

unsigned_parser!(
    /// Best-effort parse of decimal text into a platform-width unsigned
    /// value. Mirrors base::StringToSizeT(); this is the unsigned path
    /// instantiated at native pointer width.
    string_to_size_t,
    parse_usize,
    usize
);
