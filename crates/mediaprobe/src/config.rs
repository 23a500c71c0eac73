//! Process-wide knobs.
//!
//! The library location is the only thing a user can change, and only through the environment, since it is resolved
//! once per process.
use std::ffi::{CString, OsStr, OsString};

use crate::errors::{Error, Result};

/// If set, the only path we try to load libmediainfo from.
pub const LIBRARY_ENV_VAR: &str = "MEDIAINFO_LIBRARY";

#[cfg(windows)]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["MediaInfo.dll"];

#[cfg(target_os = "macos")]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["libmediainfo.0.dylib", "libmediainfo.dylib"];

#[cfg(not(any(windows, target_os = "macos")))]
pub const DEFAULT_LIBRARY_NAMES: &[&str] = &["libmediainfo.so.0", "libmediainfo.so"];

/// Largest slice handed to MediaInfo per call when opening a buffer.
pub(crate) const BUFFER_CHUNK_SIZE: usize = 64 * 1024;

/// Upper bound on seek requests honored while feeding one buffer.
pub(crate) const MAX_BUFFER_SEEKS: usize = 256;

/// Paths to try, in order.
pub(crate) fn library_candidates() -> Vec<OsString> {
    candidates_from(std::env::var_os(LIBRARY_ENV_VAR))
}

fn candidates_from(explicit: Option<OsString>) -> Vec<OsString> {
    match explicit {
        Some(p) if !p.is_empty() => vec![p],
        _ => DEFAULT_LIBRARY_NAMES.iter().map(OsString::from).collect(),
    }
}

/// Convert a library path for the loader.
///
/// On Unix the bytes go through untouched.  Windows loads through `LoadLibraryA`, so the path must be valid Unicode.
pub(crate) fn library_path_to_c(path: &OsStr) -> Result<CString> {
    #[cfg(unix)]
    let bytes = {
        use std::os::unix::ffi::OsStrExt;
        path.as_bytes().to_vec()
    };
    #[cfg(not(unix))]
    let bytes = path
        .to_str()
        .ok_or_else(|| {
            Error::initialization(format!(
                "library path {} is not valid Unicode",
                path.to_string_lossy()
            ))
        })?
        .as_bytes()
        .to_vec();

    CString::new(bytes).map_err(|_| {
        Error::initialization(format!(
            "library path {} contains NUL",
            path.to_string_lossy()
        ))
    })
}
