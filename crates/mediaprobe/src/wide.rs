//! Conversion between Rust strings and the `wchar_t` strings MediaInfo speaks.
//!
//! `wchar_t` is UTF-16 on Windows and UTF-32 everywhere else.
use crate::c_binding::wchar_t;
use crate::errors::{Error, Result};

/// Encode `s` as a NUL-terminated wide string.
pub(crate) fn to_wide(s: &str) -> Result<Vec<wchar_t>> {
    if s.contains('\0') {
        return Err(Error::invalid_argument(format!(
            "{:?} contains a NUL character",
            s
        )));
    }

    #[cfg(windows)]
    let mut out: Vec<wchar_t> = s.encode_utf16().collect();
    #[cfg(not(windows))]
    let mut out: Vec<wchar_t> = s.chars().map(|c| c as wchar_t).collect();

    out.push(0);
    Ok(out)
}

/// Decode a wide string without its terminator. Invalid code units become U+FFFD.
#[cfg(windows)]
pub(crate) fn from_wide(units: &[wchar_t]) -> String {
    String::from_utf16_lossy(units)
}

/// Decode a wide string without its terminator. Invalid code units become U+FFFD.
#[cfg(not(windows))]
pub(crate) fn from_wide(units: &[wchar_t]) -> String {
    units
        .iter()
        .map(|&u| char::from_u32(u).unwrap_or(char::REPLACEMENT_CHARACTER))
        .collect()
}

/// Copy a NUL-terminated wide string owned by MediaInfo. Null becomes the empty string.
///
/// # Safety
///
/// `ptr` must be null or point at a NUL-terminated string that stays alive for the duration of the call.
pub(crate) unsafe fn from_wide_ptr(ptr: *const wchar_t) -> String {
    if ptr.is_null() {
        return String::new();
    }

    let mut len = 0;
    while *ptr.add(len) != 0 {
        len += 1;
    }

    from_wide(std::slice::from_raw_parts(ptr, len))
}
