//! Definition of the Clap command line.
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use mediaprobe::StreamKind;

/// Inspect a media file with libmediainfo.
///
/// Without `--param` or `--list-parameters`, prints MediaInfo's summary of the file.
#[derive(Debug, Parser)]
pub struct CliArgs {
    /// The media file to inspect.
    pub path: PathBuf,

    /// Read the whole file into memory and hand MediaInfo the buffer instead of the path.
    #[clap(long)]
    pub buffer: bool,

    /// Parameter to print, as `Name`, `Kind:Name` or `Kind:Index:Name`, e.g. `Duration` or `Audio:1:Format`.  May be
    /// repeated.
    #[clap(short, long = "param")]
    pub params: Vec<ParamQuery>,

    /// MediaInfo option to set before opening, as `Name=Value`.  May be repeated.
    #[clap(short, long = "option")]
    pub options: Vec<OptionArg>,

    /// Print every parameter MediaInfo knows about instead of the summary.
    #[clap(long)]
    pub list_parameters: bool,

    /// Print parameters as a JSON object instead of one per line.
    #[clap(long)]
    pub json: bool,
}

/// One `--param`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ParamQuery {
    pub kind: StreamKind,
    pub index: usize,
    pub name: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OptionArg {
    pub name: String,
    pub value: String,
}

impl std::fmt::Display for ParamQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}:{}", self.kind, self.index, self.name)
    }
}

impl FromStr for ParamQuery {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts = s.split(':').collect::<Vec<_>>();
        let (kind, index, name) = match parts[..] {
            [name] => (StreamKind::General, 0, name),
            [kind, name] => (kind.parse::<StreamKind>().map_err(|e| format!("{e}"))?, 0, name),
            [kind, index, name] => (
                kind.parse::<StreamKind>().map_err(|e| format!("{e}"))?,
                index
                    .parse::<usize>()
                    .map_err(|_| format!("{index:?} is not a stream index"))?,
                name,
            ),
            _ => return Err(format!("{s:?} has too many `:`")),
        };

        if name.is_empty() {
            return Err(format!("{s:?} has no parameter name"));
        }

        Ok(ParamQuery {
            kind,
            index,
            name: name.to_string(),
        })
    }
}

impl FromStr for OptionArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s.split_once('=').unwrap_or((s, ""));
        if name.is_empty() {
            return Err(format!("{s:?} has no option name"));
        }

        Ok(OptionArg {
            name: name.to_string(),
            value: value.to_string(),
        })
    }
}
