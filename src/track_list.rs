use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Meditation voice tracks probed when no explicit list is given.
const BUILT_IN_TRACKS: [&str; 4] = [
    "voice/meditation/home_mingxiang_1.mp3",
    "voice/meditation/home_mingxiang_2.mp3",
    "voice/meditation/mingxiang_1.mp3",
    "voice/meditation/mingxiang_2.mp3",
];

pub fn built_in() -> Vec<String> {
    BUILT_IN_TRACKS.iter().map(|track| (*track).to_owned()).collect()
}

/// Reads relative track paths from a newline-separated file.
/// Surrounding whitespace is trimmed; blank lines and `#` comments are skipped.
pub fn from_file(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read track list {}", path.display()))?;

    let tracks: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_owned)
        .collect();

    if tracks.is_empty() {
        bail!("Track list {} contains no tracks", path.display());
    }

    Ok(tracks)
}
