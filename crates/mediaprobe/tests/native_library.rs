//! Tests against the real libmediainfo.
//!
//! Fixtures are mono 16-bit PCM wave files written on first use, sized so that MediaInfo reports a known duration.
use std::path::{Path, PathBuf};

use mediaprobe::{InfoKind, MediaInfo, StreamKind};

/// 27952 samples at 8 kHz.
const SHORT_DURATION: &str = "3494";
/// 1404336 samples at 16 kHz.
const LONG_DURATION: &str = "87771";

fn write_wave(name: &str, sample_rate: u32, samples: u32) -> PathBuf {
    let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join(name);
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };

    let mut writer = hound::WavWriter::create(&path, spec).unwrap();
    for i in 0..samples {
        // A quiet sawtooth; the content doesn't matter, only the length.
        writer.write_sample(((i % 64) as i16 - 32) * 64).unwrap();
    }
    writer.finalize().unwrap();
    path
}

lazy_static::lazy_static! {
    static ref SHORT_WAVE: PathBuf = write_wave("mediaprobe_short.wav", 8000, 27952);
    static ref LONG_WAVE: PathBuf = write_wave("mediaprobe_long.wav", 16000, 1404336);
}

fn fixtures() -> [(&'static Path, &'static str); 2] {
    [
        (SHORT_WAVE.as_path(), SHORT_DURATION),
        (LONG_WAVE.as_path(), LONG_DURATION),
    ]
}

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn open(path: &Path) -> MediaInfo {
    init_logging();
    let mut mi = MediaInfo::new().unwrap();
    mi.open_file(path).unwrap();
    mi
}

#[test]
fn test_open_file_duration() {
    for (path, duration) in fixtures() {
        let mi = open(path);
        assert!(mi.is_open());
        assert_eq!(mi.get(StreamKind::General, 0, "Duration"), duration);
        assert_eq!(mi.duration(), duration.parse::<u64>().unwrap());
    }
}

#[test]
fn test_open_missing_file() {
    init_logging();
    let mut mi = MediaInfo::new().unwrap();
    let missing = Path::new(env!("CARGO_TARGET_TMPDIR")).join("mediaprobe_does_not_exist.ogg");

    let err = mi.open_file(&missing).unwrap_err();
    assert!(err.is_open_error());
    assert!(!mi.is_open());
}

#[test]
fn test_open_empty_buffer() {
    init_logging();
    let mut mi = MediaInfo::new().unwrap();
    let err = mi.open_buffer(&[]).unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(!mi.is_open());
}

#[test]
fn test_buffer_matches_file() {
    const GENERAL: &[&str] = &[
        "Duration",
        "Format",
        "Codec",
        "AudioCount",
        "VideoCount",
        "FileSize",
        "OverallBitRate",
    ];
    const AUDIO: &[&str] = &["Format", "SamplingRate", "Channel(s)", "BitDepth", "Duration"];

    for (path, duration) in fixtures() {
        let from_file = open(path);

        let bytes = std::fs::read(path).unwrap();
        let mut from_buffer = MediaInfo::new().unwrap();
        from_buffer.open_buffer(&bytes[..]).unwrap();

        assert_eq!(
            from_buffer.get(StreamKind::General, 0, "Duration"),
            duration
        );

        for name in GENERAL {
            assert_eq!(
                from_buffer.get(StreamKind::General, 0, name),
                from_file.get(StreamKind::General, 0, name),
                "General {}",
                name
            );
        }

        for name in AUDIO {
            assert_eq!(
                from_buffer.get(StreamKind::Audio, 0, name),
                from_file.get(StreamKind::Audio, 0, name),
                "Audio {}",
                name
            );
        }
    }
}

#[test]
fn test_inform() {
    for (path, _) in fixtures() {
        let mi = open(path);
        let summary = mi.inform();
        assert!(summary.len() > 10, "{:?}", summary);
        assert!(summary.contains("Audio"));
    }
}

#[test]
fn test_available_parameters() {
    let mut short = open(&SHORT_WAVE);
    let mut long = open(&LONG_WAVE);

    let a = short.available_parameters();
    assert!(a.len() > 10);
    assert_eq!(a, long.available_parameters());
}

#[test]
fn test_get_is_idempotent() {
    let mi = open(&LONG_WAVE);
    for name in ["Duration", "Format", "AudioCount", "NotARealParameter"] {
        let first = mi.get(StreamKind::General, 0, name);
        assert_eq!(mi.get(StreamKind::General, 0, name), first);
        assert_eq!(mi.get(StreamKind::General, 0, name), first);
    }
}

#[test]
fn test_convenience_accessors() {
    for (path, _) in fixtures() {
        let mi = open(path);

        assert_eq!(mi.codec(), mi.get(StreamKind::General, 0, "Codec"));
        assert_eq!(mi.format(), mi.get(StreamKind::General, 0, "Format"));
        assert_eq!(mi.format(), "Wave");

        assert_eq!(mi.audio_count(), 1);
        assert_eq!(mi.video_count(), 0);
        assert_eq!(mi.text_count(), 0);
        assert_eq!(mi.image_count(), 0);
        assert_eq!(mi.stream_count(StreamKind::Audio), 1);
    }
}

#[test]
fn test_unknown_parameters_are_empty() {
    let mi = open(&SHORT_WAVE);
    assert_eq!(mi.get(StreamKind::General, 0, "NotARealParameter"), "");
    assert_eq!(mi.get(StreamKind::Video, 0, "Width"), "");
    assert_eq!(mi.get(StreamKind::Audio, 5, "Format"), "");
    assert_eq!(mi.get(StreamKind::General, 0, "Dura\0tion"), "");
}

#[test]
fn test_info_kinds() {
    let mi = open(&SHORT_WAVE);
    assert_eq!(
        mi.get_info(StreamKind::General, 0, "Duration", InfoKind::Text),
        SHORT_DURATION
    );
    assert_eq!(
        mi.get_info(StreamKind::General, 0, "Duration", InfoKind::Name),
        "Duration"
    );
}

#[test]
fn test_second_open_is_rejected() {
    let mut mi = open(&SHORT_WAVE);

    assert!(mi.open_file(LONG_WAVE.as_path()).unwrap_err().is_already_open());
    let bytes = std::fs::read(LONG_WAVE.as_path()).unwrap();
    assert!(mi.open_buffer(&bytes[..]).unwrap_err().is_already_open());

    // The first source is untouched.
    assert_eq!(mi.get(StreamKind::General, 0, "Duration"), SHORT_DURATION);
    mi.close();
}

#[test]
fn test_retry_after_failed_open() {
    init_logging();
    let mut mi = MediaInfo::new().unwrap();
    let missing = Path::new(env!("CARGO_TARGET_TMPDIR")).join("mediaprobe_missing.wav");
    assert!(mi.open_file(&missing).is_err());

    mi.open_file(SHORT_WAVE.as_path()).unwrap();
    assert_eq!(mi.duration(), 3494);
}

#[test]
fn test_retry_after_rejected_buffer() {
    init_logging();
    let mut mi = MediaInfo::new().unwrap();

    let garbage = vec![0x5Au8; 4096];
    assert!(mi.open_buffer(&garbage[..]).unwrap_err().is_open_error());
    assert!(!mi.is_open());

    // Nothing from the rejected buffer survives.
    assert_eq!(mi.get(StreamKind::General, 0, "FileSize"), "");
    assert_eq!(mi.get(StreamKind::General, 0, "Format"), "");
    assert_eq!(mi.stream_count(StreamKind::Audio), 0);

    let bytes = std::fs::read(SHORT_WAVE.as_path()).unwrap();
    mi.open_buffer(&bytes[..]).unwrap();
    assert_eq!(mi.get(StreamKind::General, 0, "Duration"), SHORT_DURATION);
    assert_eq!(
        mi.get(StreamKind::General, 0, "FileSize"),
        bytes.len().to_string()
    );
}

#[test]
fn test_failed_file_open_leaves_handle_empty() {
    init_logging();
    let mut mi = MediaInfo::new().unwrap();
    let missing = Path::new(env!("CARGO_TARGET_TMPDIR")).join("mediaprobe_gone.wav");
    assert!(mi.open_file(&missing).unwrap_err().is_open_error());

    assert_eq!(mi.get(StreamKind::General, 0, "CompleteName"), "");
    assert_eq!(mi.duration(), 0);

    let bytes = std::fs::read(LONG_WAVE.as_path()).unwrap();
    mi.open_buffer(&bytes[..]).unwrap();
    assert_eq!(mi.get(StreamKind::General, 0, "Duration"), LONG_DURATION);
}

#[test]
fn test_library_version() {
    let mut mi = open(&SHORT_WAVE);
    assert!(mi.library_version().contains("MediaInfoLib"));
}

#[test]
fn test_handle_per_thread() {
    init_logging();
    let threads = (0..4)
        .map(|i| {
            let path = if i % 2 == 0 {
                SHORT_WAVE.clone()
            } else {
                LONG_WAVE.clone()
            };
            std::thread::spawn(move || {
                let mut mi = MediaInfo::new().unwrap();
                mi.open_file(&path).unwrap();
                mi.duration()
            })
        })
        .collect::<Vec<_>>();

    let durations = threads
        .into_iter()
        .map(|t| t.join().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(durations, vec![3494, 87771, 3494, 87771]);
}

#[test]
fn test_handle_moves_between_threads() {
    let mi = open(&LONG_WAVE);
    let duration = std::thread::spawn(move || mi.duration()).join().unwrap();
    assert_eq!(duration, 87771);
}
