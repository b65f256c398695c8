//! Wide-text (UTF-16) adapters over the decimal conversions.
//!
//! Compatibility surface for callers that carry UTF-16 text. Each adapter
//! is a thin boundary layer over the byte-oriented implementation: the
//! outcome for equivalent ASCII content is identical to the narrow form,
//! character for character. The hex operations have no wide forms.

use alloc::vec::Vec;

use crate::decimal::format::{int64_to_string, int_to_string, uint64_to_string, uint_to_string};
use crate::decimal::parse::{parse_i32, parse_i64, parse_u32, parse_u64, parse_usize};

/// Widen ASCII output to UTF-16 code units.
fn widen(s: &str) -> Vec<u16> {
    s.bytes().map(u16::from).collect()
}

/// Narrow UTF-16 code units for the byte scanners. Units outside ASCII
/// map to a byte that is never a digit, sign, or whitespace, so they stop
/// a scan exactly as a letter would.
fn narrow(input: &[u16]) -> Vec<u8> {
    input
        .iter()
        .map(|&unit| if unit < 0x80 { unit as u8 } else { 0xFF })
        .collect()
}

/// Format a signed 32-bit value as wide decimal text. Mirrors base::IntToWString().
pub fn int_to_wstring(value: i32) -> Vec<u16> {
    widen(&int_to_string(value))
}

/// Format an unsigned 32-bit value as wide decimal text. Mirrors base::UintToWString().
pub fn uint_to_wstring(value: u32) -> Vec<u16> {
    widen(&uint_to_string(value))
}

/// Format a signed 64-bit value as wide decimal text. Mirrors base::Int64ToWString().
pub fn int64_to_wstring(value: i64) -> Vec<u16> {
    widen(&int64_to_string(value))
}

/// Format an unsigned 64-bit value as wide decimal text. Mirrors base::Uint64ToWString().
pub fn uint64_to_wstring(value: u64) -> Vec<u16> {
    widen(&uint64_to_string(value))
}

/// Best-effort parse of wide decimal text into a signed 32-bit value.
/// Mirrors base::WStringToInt(); same policy as `string_to_int`.
pub fn wstring_to_int(input: &[u16], output: &mut i32) -> bool {
    parse_i32(&narrow(input), output)
}

/// Best-effort parse of wide decimal text into an unsigned 32-bit value.
/// Mirrors base::WStringToUint().
pub fn wstring_to_uint(input: &[u16], output: &mut u32) -> bool {
    parse_u32(&narrow(input), output)
}

/// Best-effort parse of wide decimal text into a signed 64-bit value.
/// Mirrors base::WStringToInt64().
pub fn wstring_to_int64(input: &[u16], output: &mut i64) -> bool {
    parse_i64(&narrow(input), output)
}

/// Best-effort parse of wide decimal text into an unsigned 64-bit value.
/// Mirrors base::WStringToUint64().
pub fn wstring_to_uint64(input: &[u16], output: &mut u64) -> bool {
    parse_u64(&narrow(input), output)
}

/// Best-effort parse of wide decimal text into a platform-width unsigned
/// value. Mirrors base::WStringToSizeT().
pub fn wstring_to_size_t(input: &[u16], output: &mut usize) -> bool {
    parse_usize(&narrow(input), output)
}
