use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use lofty::file::AudioFile;
use lofty::probe::Probe;

/// Total playback duration of the audio file at `path`.
/// Any failure to open or parse the file surfaces as a single error.
pub fn from_path(path: impl AsRef<Path>) -> Result<Duration> {
    let path = path.as_ref();
    let file = Probe::open(path)
        .with_context(|| format!("Failed to open {}", path.display()))?
        .read()
        .with_context(|| format!("Failed to read audio properties of {}", path.display()))?;
    Ok(file.properties().duration())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_audio::write_silent_wav;

    #[test]
    fn reads_duration_of_wav() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("silence.wav");
        write_silent_wav(&path, 2);

        let duration = from_path(&path).unwrap();

        assert!((duration.as_secs_f64() - 2.0).abs() < 0.1);
    }

    #[test]
    fn fails_on_missing_file() {
        let dir = tempfile::tempdir().unwrap();

        assert!(from_path(dir.path().join("missing.mp3")).is_err());
    }
}
