use std::ffi::c_void;
use std::path::Path;
use std::ptr::NonNull;

use crate::config::{BUFFER_CHUNK_SIZE, MAX_BUFFER_SEEKS};
use crate::errors::{Error, Result};
use crate::kinds::{InfoKind, StreamKind};
use crate::wide::{from_wide_ptr, to_wide};

/// Bits of the status returned by `Open_Buffer_Continue`.
const STATUS_ACCEPTED: usize = 1 << 0;
const STATUS_FINALIZED: usize = 1 << 3;

/// `Open_Buffer_Continue_GoTo_Get` returns this when MediaInfo doesn't want to seek.
const NO_SEEK: u64 = u64::MAX;

/// One MediaInfo session, describing one media source.
///
/// Make one with [MediaInfo::new], open exactly one file or buffer, then query it.  Dropping the handle (or calling
/// [MediaInfo::close]) releases the native session.
///
/// Queries never fail.  MediaInfo answers anything it doesn't know, including questions asked before anything was
/// opened, with an empty string, so an empty result can mean either "no such parameter" or "no value".
///
/// A handle may move between threads but can't be shared: MediaInfo hands back strings from per-handle buffers.
#[derive(Debug)]
pub struct MediaInfo {
    handle: NonNull<c_void>,
    opened: bool,
}

unsafe impl Send for MediaInfo {}

impl MediaInfo {
    /// Allocate a new session, loading libmediainfo first if this is the first handle in the process.
    pub fn new() -> Result<MediaInfo> {
        crate::initialization::ensure_initialized()?;

        let raw = unsafe { mpcall!(new) };
        let handle = NonNull::new(raw)
            .ok_or_else(|| Error::initialization("MediaInfo_New returned a null handle"))?;

        Ok(MediaInfo {
            handle,
            opened: false,
        })
    }

    fn raw(&self) -> *mut c_void {
        self.handle.as_ptr()
    }

    fn ensure_not_open(&self) -> Result<()> {
        if self.opened {
            return Err(Error::already_open());
        }
        Ok(())
    }

    pub fn is_open(&self) -> bool {
        self.opened
    }

    /// Open the file at `path`.
    pub fn open_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        self.ensure_not_open()?;

        let path = path.as_ref();
        let as_str = path.to_str().ok_or_else(|| {
            Error::invalid_argument(format!("{} is not valid Unicode", path.display()))
        })?;
        let wide = to_wide(as_str)?;

        if unsafe { mpcall!(open, self.raw(), wide.as_ptr()) } == 0 {
            log::warn!("MediaInfo can't open file {}", path.display());
            self.reset();
            return Err(Error::open(format!("file: {}", path.display())));
        }

        log::debug!("Opened {}", path.display());
        self.opened = true;
        Ok(())
    }

    /// Open a media source held entirely in memory.
    ///
    /// `bytes` must be the whole source: MediaInfo may seek within it, e.g. to find an index at the end of the file.
    ///
    /// Stricter than [MediaInfo::open_file]: MediaInfo opens any readable file, but a buffer is only accepted if some
    /// parser recognized it, meaning a parser accepted the data or the General `Format` is known after finalizing.
    /// Content MediaInfo can't identify is an error here.
    pub fn open_buffer(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Err(Error::invalid_argument("Buffer is empty"));
        }
        self.ensure_not_open()?;

        let accepted = self.feed_buffer(bytes);
        let finalized = unsafe { mpcall!(open_buffer_finalize, self.raw()) };
        // Some parsers only accept while finalizing.
        let recognized = accepted || !self.format().is_empty();

        if !recognized || finalized == 0 {
            log::warn!(
                "MediaInfo can't open memory buffer of {} bytes",
                bytes.len()
            );
            self.reset();
            return Err(Error::open(format!(
                "memory buffer of {} bytes",
                bytes.len()
            )));
        }

        log::debug!("Opened memory buffer of {} bytes", bytes.len());
        self.opened = true;
        Ok(())
    }

    /// Throw away whatever a failed open left behind, so the handle answers like a fresh one.
    fn reset(&mut self) {
        unsafe { mpcall!(close, self.raw()) };
    }

    /// Push `bytes` through the buffer protocol, following seek requests.  Returns whether any parser accepted the
    /// data.
    fn feed_buffer(&mut self, bytes: &[u8]) -> bool {
        let h = self.raw();
        let total = bytes.len() as u64;
        let mut accepted = false;
        let mut position = 0usize;
        let mut seeks = 0usize;

        unsafe { mpcall!(open_buffer_init, h, total, 0) };

        while position < bytes.len() {
            let end = (position + BUFFER_CHUNK_SIZE).min(bytes.len());
            let chunk = &bytes[position..end];
            let status = unsafe { mpcall!(open_buffer_continue, h, chunk.as_ptr(), chunk.len()) };

            accepted |= status & STATUS_ACCEPTED != 0;
            if status & STATUS_FINALIZED != 0 {
                break;
            }

            position = end;

            let goto = unsafe { mpcall!(open_buffer_continue_goto_get, h) };
            if goto == NO_SEEK {
                continue;
            }

            if goto >= total || seeks == MAX_BUFFER_SEEKS {
                log::debug!(
                    "Not following MediaInfo seek to {} (buffer is {} bytes, {} seeks so far)",
                    goto,
                    total,
                    seeks
                );
                break;
            }

            log::trace!("MediaInfo seeks to {}", goto);
            seeks += 1;
            position = goto as usize;
            unsafe { mpcall!(open_buffer_init, h, total, goto) };
        }

        accepted
    }

    /// Release the session.
    ///
    /// Equivalent to dropping the handle.
    pub fn close(self) {
        std::mem::drop(self);
    }

    /// Get the value of parameter `name` on stream `index` of kind `kind`.
    ///
    /// Returns the empty string if MediaInfo has no such parameter or no such stream.  [StreamKind::General] only has
    /// index 0.
    pub fn get(&self, kind: StreamKind, index: usize, name: &str) -> String {
        self.get_info(kind, index, name, InfoKind::Text)
    }

    /// Like [MediaInfo::get], but choose which facet of the parameter to return, e.g. its unit.
    pub fn get_info(&self, kind: StreamKind, index: usize, name: &str, info: InfoKind) -> String {
        let wide_name = match to_wide(name) {
            Ok(w) => w,
            Err(e) => {
                log::debug!("Not asking MediaInfo for {:?}: {}", name, e);
                return String::new();
            }
        };

        unsafe {
            from_wide_ptr(mpcall!(
                get,
                self.raw(),
                kind.as_native(),
                index,
                wide_name.as_ptr(),
                info.as_native(),
                InfoKind::Name.as_native()
            ))
        }
    }

    /// Human-readable report of everything MediaInfo found, in the same format as the `mediainfo` command line tool.
    pub fn inform(&self) -> String {
        unsafe { from_wide_ptr(mpcall!(inform, self.raw())) }
    }

    /// Set or query a MediaInfo option.  What `value` means, and what comes back, is up to MediaInfo.
    pub fn option(&mut self, name: &str, value: &str) -> String {
        let (wide_name, wide_value) = match (to_wide(name), to_wide(value)) {
            (Ok(n), Ok(v)) => (n, v),
            (Err(e), _) | (_, Err(e)) => {
                log::debug!("Not passing option {:?}={:?} to MediaInfo: {}", name, value, e);
                return String::new();
            }
        };

        unsafe {
            from_wide_ptr(mpcall!(
                option,
                self.raw(),
                wide_name.as_ptr(),
                wide_value.as_ptr()
            ))
        }
    }

    /// Query an option without a value.
    pub fn get_option(&mut self, name: &str) -> String {
        self.option(name, "")
    }

    /// Text listing every parameter this build of MediaInfo knows about, with descriptions.
    ///
    /// Doesn't depend on what was opened.
    pub fn available_parameters(&mut self) -> String {
        self.get_option("Info_Parameters")
    }

    /// Something like `MediaInfoLib - v23.04`.
    pub fn library_version(&mut self) -> String {
        self.get_option("Info_Version")
    }

    fn general(&self, name: &str) -> String {
        self.get(StreamKind::General, 0, name)
    }

    fn general_int(&self, name: &str) -> u64 {
        self.general(name).trim().parse().unwrap_or(0)
    }

    /// Duration in milliseconds, from the General `Duration` parameter.  0 if unknown.
    pub fn duration(&self) -> u64 {
        self.general_int("Duration")
    }

    /// General `Codec`.
    pub fn codec(&self) -> String {
        self.general("Codec")
    }

    /// General `Format`, e.g. `MPEG Audio` or `Ogg`.
    pub fn format(&self) -> String {
        self.general("Format")
    }

    /// Number of streams of `kind`, from General `VideoCount`, `AudioCount`, etc.  0 if there are none.
    pub fn stream_count(&self, kind: StreamKind) -> u64 {
        self.general_int(&kind.count_parameter())
    }

    pub fn video_count(&self) -> u64 {
        self.stream_count(StreamKind::Video)
    }

    pub fn audio_count(&self) -> u64 {
        self.stream_count(StreamKind::Audio)
    }

    pub fn text_count(&self) -> u64 {
        self.stream_count(StreamKind::Text)
    }

    pub fn image_count(&self) -> u64 {
        self.stream_count(StreamKind::Image)
    }
}

impl Drop for MediaInfo {
    fn drop(&mut self) {
        unsafe {
            if self.opened {
                mpcall!(close, self.raw());
            }
            mpcall!(delete, self.raw());
        }
    }
}
