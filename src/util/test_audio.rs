use std::fs;
use std::path::Path;

/// Writes a silent mono 16-bit PCM WAV of the given length.
pub fn write_silent_wav(path: &Path, seconds: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 44100,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut writer = hound::WavWriter::create(path, spec).unwrap();
    for _ in 0..spec.sample_rate * seconds {
        writer.write_sample(0i16).unwrap();
    }
    writer.finalize().unwrap();
}
