//! `mediaprobe`: print what libmediainfo knows about a file.
mod cli_args;

use anyhow::{Context, Result};
use clap::Parser;
use mediaprobe::MediaInfo;

use crate::cli_args::CliArgs;

fn open(args: &CliArgs) -> Result<MediaInfo> {
    let mut mi = MediaInfo::new()?;

    for o in args.options.iter() {
        let answer = mi.option(&o.name, &o.value);
        log::debug!("Option {}={} -> {:?}", o.name, o.value, answer);
    }

    if args.buffer {
        let bytes = std::fs::read(&args.path)
            .with_context(|| format!("Unable to read {}", args.path.display()))?;
        mi.open_buffer(&bytes[..])?;
    } else {
        mi.open_file(&args.path)?;
    }

    Ok(mi)
}

fn print_params(mi: &MediaInfo, args: &CliArgs) -> Result<()> {
    if args.json {
        let mut obj = serde_json::Map::new();
        for q in args.params.iter() {
            obj.insert(
                q.to_string(),
                serde_json::Value::String(mi.get(q.kind, q.index, &q.name)),
            );
        }
        println!("{}", serde_json::to_string_pretty(&obj)?);
    } else {
        for q in args.params.iter() {
            println!("{}: {}", q, mi.get(q.kind, q.index, &q.name));
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let mut mi = open(&args).with_context(|| format!("Unable to inspect {}", args.path.display()))?;

    if args.list_parameters {
        println!("{}", mi.available_parameters());
    } else if args.params.is_empty() {
        println!("{}", mi.inform());
    } else {
        print_params(&mi, &args)?;
    }

    mi.close();
    Ok(())
}
