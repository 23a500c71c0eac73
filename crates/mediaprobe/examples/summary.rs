use mediaprobe::*;

pub fn main() -> Result<()> {
    env_logger::init();

    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: summary <media file>");
        std::process::exit(1);
    };

    let bytes = match std::fs::read(&path) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Unable to read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    let mut mi = MediaInfo::new()?;
    mi.open_buffer(&bytes[..])?;

    println!("{}", mi.inform());
    println!("Bit rate: {}", mi.get(StreamKind::General, 0, "OverallBitRate"));
    Ok(())
}
