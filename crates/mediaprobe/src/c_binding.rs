//! Declarations for the functions exported by `src/c/mediainfo_wrapper.c`.
use std::ffi::{c_char, c_int, c_void};

#[cfg(windows)]
pub type wchar_t = u16;
#[cfg(not(windows))]
pub type wchar_t = u32;

pub type log_callback = Option<extern "C" fn(message: *const c_char)>;

extern "C" {
    pub fn mp_mediainfo_0_1_0_init_logging(
        error: log_callback,
        warning: log_callback,
        info: log_callback,
        debug: log_callback,
    ) -> c_int;

    pub fn mp_mediainfo_0_1_0_load(path: *const c_char) -> c_int;

    pub fn mp_mediainfo_0_1_0_new() -> *mut c_void;

    pub fn mp_mediainfo_0_1_0_delete(handle: *mut c_void);

    pub fn mp_mediainfo_0_1_0_open(handle: *mut c_void, path: *const wchar_t) -> usize;

    pub fn mp_mediainfo_0_1_0_open_buffer_init(handle: *mut c_void, size: u64, offset: u64) -> usize;

    pub fn mp_mediainfo_0_1_0_open_buffer_continue(
        handle: *mut c_void,
        data: *const u8,
        length: usize,
    ) -> usize;

    pub fn mp_mediainfo_0_1_0_open_buffer_continue_goto_get(handle: *mut c_void) -> u64;

    pub fn mp_mediainfo_0_1_0_open_buffer_finalize(handle: *mut c_void) -> usize;

    pub fn mp_mediainfo_0_1_0_close(handle: *mut c_void);

    pub fn mp_mediainfo_0_1_0_inform(handle: *mut c_void) -> *const wchar_t;

    pub fn mp_mediainfo_0_1_0_get(
        handle: *mut c_void,
        stream_kind: c_int,
        stream_number: usize,
        parameter: *const wchar_t,
        info_kind: c_int,
        search_kind: c_int,
    ) -> *const wchar_t;

    pub fn mp_mediainfo_0_1_0_option(
        handle: *mut c_void,
        option: *const wchar_t,
        value: *const wchar_t,
    ) -> *const wchar_t;
}
