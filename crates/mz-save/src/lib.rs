//! mz-save: progress persistence for Mouse Maze
//!
//! Progress is stored as a JSON file with a small versioned header. Older
//! installs kept only the high-score table in a separate file; that file is
//! still read when the progress file is unusable.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use mz_core::progress::{HighScores, Progress};

/// Current save file format version
pub const SAVE_VERSION: u32 = 1;

/// Progress file name inside the data directory
pub const PROGRESS_FILE: &str = "progress.json";

/// Scores-only file written by older versions
pub const LEGACY_SCORES_FILE: &str = "scores.json";

/// Save/restore errors
#[derive(Debug, Error)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Save file not found")]
    NotFound,

    #[error("Incompatible save version: expected {expected}, found {found}")]
    IncompatibleVersion { expected: u32, found: u32 },

    #[error("Invalid save file header")]
    InvalidHeader,
}

/// Save file header for versioning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaveHeader {
    /// Magic identifier
    pub magic: String,
    /// Save format version
    pub version: u32,
    /// Time of save
    pub timestamp: DateTime<Utc>,
}

impl SaveHeader {
    const MAGIC: &'static str = "MZRS";

    pub fn new() -> Self {
        Self {
            magic: Self::MAGIC.to_string(),
            version: SAVE_VERSION,
            timestamp: Utc::now(),
        }
    }

    pub fn validate(&self) -> Result<(), SaveError> {
        if self.magic != Self::MAGIC {
            return Err(SaveError::InvalidHeader);
        }
        if self.version != SAVE_VERSION {
            return Err(SaveError::IncompatibleVersion {
                expected: SAVE_VERSION,
                found: self.version,
            });
        }
        Ok(())
    }
}

impl Default for SaveHeader {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete save file structure
#[derive(Serialize, Deserialize)]
pub struct SaveFile {
    pub header: SaveHeader,
    pub progress: Progress,
}

/// Write progress to `path`, creating parent directories as needed
pub fn save_progress(progress: &Progress, path: impl AsRef<Path>) -> Result<(), SaveError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let save_file = SaveFile {
        header: SaveHeader::new(),
        progress: progress.clone(),
    };

    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, &save_file)?;
    debug!("saved progress to {}", path.display());
    Ok(())
}

/// Read progress from `path`, validating the header
pub fn load_progress(path: impl AsRef<Path>) -> Result<Progress, SaveError> {
    let file = File::open(path).map_err(|_| SaveError::NotFound)?;
    let reader = BufReader::new(file);
    let save_file: SaveFile = serde_json::from_reader(reader)?;

    save_file.header.validate()?;
    Ok(save_file.progress)
}

/// Read a scores-only file left by an older version
pub fn load_legacy_scores(path: impl AsRef<Path>) -> Result<HighScores, SaveError> {
    let file = File::open(path).map_err(|_| SaveError::NotFound)?;
    let scores: HighScores = serde_json::from_reader(BufReader::new(file))?;
    Ok(scores)
}

/// Progress file inside `dir`
pub fn progress_path(dir: &Path) -> PathBuf {
    dir.join(PROGRESS_FILE)
}

/// Load progress from `dir`.
///
/// A missing progress file starts fresh. A progress file that cannot be read
/// falls back to the legacy scores file, and failing that to a fresh start.
pub fn load_or_default(dir: &Path) -> Progress {
    let path = progress_path(dir);
    let err = match load_progress(&path) {
        Ok(progress) => return progress,
        Err(SaveError::NotFound) => return Progress::default(),
        Err(err) => err,
    };

    warn!("could not read {}: {}", path.display(), err);
    match load_legacy_scores(dir.join(LEGACY_SCORES_FILE)) {
        Ok(scores) => {
            warn!("recovered {} scores from legacy file", scores.len());
            Progress {
                scores,
                ..Progress::default()
            }
        }
        Err(SaveError::NotFound) => Progress::default(),
        Err(err) => {
            warn!("legacy scores unreadable: {}", err);
            Progress::default()
        }
    }
}

/// Get the default data directory
pub fn default_data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("mousemaze");
    path
}

/// Check if a progress file exists in `dir`
pub fn progress_exists(dir: &Path) -> bool {
    progress_path(dir).exists()
}

/// Delete the progress file in `dir`
pub fn delete_progress(dir: &Path) -> Result<(), SaveError> {
    std::fs::remove_file(progress_path(dir))?;
    Ok(())
}
