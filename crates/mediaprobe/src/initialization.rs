use std::ffi::{c_char, CStr};

use crate::errors::{Error, Result};
use crate::wide::{from_wide_ptr, to_wide};

macro_rules! log_cb {
    ($identifier: ident, $level: ident) => {
        extern "C" fn $identifier(msg: *const c_char) {
            unsafe {
                let c = CStr::from_ptr(msg);
                let decoded = c.to_string_lossy();
                log::$level!("{}", decoded);
            }
        }
    };
}

log_cb!(debug_cb, debug);
log_cb!(info_cb, info);
log_cb!(warning_cb, warn);
log_cb!(error_cb, error);

/// Ask a throwaway handle which version of MediaInfo we got.
unsafe fn log_library_version() {
    let handle = mpcall!(new);
    if handle.is_null() {
        return;
    }

    if let (Ok(name), Ok(value)) = (to_wide("Info_Version"), to_wide("")) {
        let version = from_wide_ptr(mpcall!(option, handle, name.as_ptr(), value.as_ptr()));
        log::info!("Using {}", version);
    }

    mpcall!(delete, handle);
}

unsafe fn ensure_initialized_inner() -> Result<()> {
    if mpcall!(
        init_logging,
        Some(error_cb),
        Some(warning_cb),
        Some(info_cb),
        Some(debug_cb)
    ) == 0
    {
        return Err(Error::initialization("Unable to initialize logging"));
    }

    let candidates = crate::config::library_candidates();
    for path in candidates.iter() {
        let c_path = match crate::config::library_path_to_c(path) {
            Ok(p) => p,
            Err(e) => {
                log::warn!("Skipping library path: {}", e);
                continue;
            }
        };

        if mpcall!(load, c_path.as_ptr()) != 0 {
            log_library_version();
            return Ok(());
        }
    }

    Err(Error::initialization(format!(
        "Unable to load libmediainfo (tried {}; set {} to override)",
        candidates
            .iter()
            .map(|c| c.to_string_lossy())
            .collect::<Vec<_>>()
            .join(", "),
        crate::config::LIBRARY_ENV_VAR
    )))
}

/// Load the native library exactly once per process.
///
/// The outcome, including failure, is remembered: every later call gets the same answer.
pub(crate) fn ensure_initialized() -> Result<()> {
    lazy_static::lazy_static! {
        static ref INITIALIZED: Result<()> = unsafe { ensure_initialized_inner() };
    }

    match &*INITIALIZED {
        Ok(()) => Ok(()),
        Err(e) => Err(e.clone_internal()),
    }
}
