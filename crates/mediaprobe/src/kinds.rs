use std::ffi::c_int;
use std::fmt;
use std::str::FromStr;

use crate::errors::Error;

/// Which category of stream a query is about.
///
/// The discriminants are MediaInfo's own numbering.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StreamKind {
    /// The container itself.  There is only ever one, at index 0.
    General = 0,
    Video = 1,
    Audio = 2,
    /// Subtitles and other timed text.
    Text = 3,
    /// Anything MediaInfo can't fit elsewhere, e.g. timecode tracks.
    Other = 4,
    Image = 5,
    /// Chapters.
    Menu = 6,
}

impl StreamKind {
    pub const ALL: [StreamKind; 7] = [
        StreamKind::General,
        StreamKind::Video,
        StreamKind::Audio,
        StreamKind::Text,
        StreamKind::Other,
        StreamKind::Image,
        StreamKind::Menu,
    ];

    pub(crate) fn as_native(self) -> c_int {
        self as c_int
    }

    pub fn name(self) -> &'static str {
        match self {
            StreamKind::General => "General",
            StreamKind::Video => "Video",
            StreamKind::Audio => "Audio",
            StreamKind::Text => "Text",
            StreamKind::Other => "Other",
            StreamKind::Image => "Image",
            StreamKind::Menu => "Menu",
        }
    }

    /// The General parameter holding how many streams of this kind exist, e.g. `AudioCount`.
    pub fn count_parameter(self) -> String {
        format!("{}Count", self.name())
    }
}

impl fmt::Display for StreamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StreamKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StreamKind::ALL
            .iter()
            .copied()
            .find(|k| k.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::invalid_argument(format!("unknown stream kind {:?}", s)))
    }
}

/// Which facet of a parameter MediaInfo should return.
///
/// [crate::MediaInfo::get] always asks for [InfoKind::Text].
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum InfoKind {
    /// The parameter's own name.
    Name = 0,
    /// The value.
    #[default]
    Text = 1,
    /// The unit, e.g. " ms".
    Measure = 2,
    Options = 3,
    /// Translated name.
    NameText = 4,
    /// Translated unit.
    MeasureText = 5,
    /// Description of the parameter.
    Info = 6,
    HowTo = 7,
}

impl InfoKind {
    pub(crate) fn as_native(self) -> c_int {
        self as c_int
    }
}
