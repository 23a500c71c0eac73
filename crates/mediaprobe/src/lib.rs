//! Safe bindings to libmediainfo.
//!
//! [MediaInfo] wraps one native session: open a file or a buffer, then ask for parameters by name.  The native library
//! is located and loaded at runtime the first time a handle is made; see [config] for how it is found.
//!
//! ```no_run
//! use mediaprobe::{MediaInfo, StreamKind};
//!
//! let mut mi = MediaInfo::new()?;
//! mi.open_file("song.mp3")?;
//! println!("{} ms", mi.duration());
//! println!("{}", mi.get(StreamKind::Audio, 0, "SamplingRate"));
//! # Ok::<(), mediaprobe::Error>(())
//! ```
macro_rules! mpcall {
    ($i: ident) => {mpcall!($i,) };

    ($identifier: ident, $($args:expr),*) => {
        paste::paste! {
            crate::c_binding::[<mp_mediainfo_0_1_0_ $identifier>]($($args),*)
        }
    };
}

#[allow(warnings, clippy::all)]
mod c_binding;
pub mod config;
mod errors;
mod initialization;
mod kinds;
mod media_info;
mod wide;

pub use errors::*;
pub use kinds::*;
pub use media_info::*;
