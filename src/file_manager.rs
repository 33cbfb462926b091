//! # File Management Module
//!
//! Questo modulo gestisce le operazioni sui file e la discovery delle immagini.
//!
//! ## Responsabilità:
//! - Discovery ricorsiva delle immagini sotto la directory radice
//! - Riconoscimento formato tramite estensione (case-insensitive)
//! - Copia di backup degli originali prima della sovrascrittura
//! - Formattazione human-readable delle dimensioni
//!
//! ## Formati supportati:
//! - **Immagini**: JPG, JPEG, PNG, GIF, BMP, TIF, TIFF, WebP
//!
//! ## Backup:
//! - Il backup è una copia byte-per-byte dell'originale, stesso nome file
//! - Viene creato una sola volta: un backup esistente non viene mai sovrascritto
//! - La directory dei backup viene esclusa dalla discovery
//!
//! ## Esempio:
//! ```rust,ignore
//! let files = FileManager::find_images(Path::new("/path/to/images"), None);
//! for file in files {
//!     FileManager::backup_original(&file, Path::new("/path/to/images/backup"))?;
//! }
//! ```

use crate::error::{ResizeError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Extensions accepted by discovery, lowercase.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "tif", "tiff", "webp"];

/// Result of a backup attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackupStatus {
    /// The original was copied to this path
    Created(PathBuf),
    /// A backup with the same file name already existed and was left alone
    AlreadyPresent(PathBuf),
}

/// Manages file operations and discovery
pub struct FileManager;

impl FileManager {
    /// Find all supported images under `root`, never descending into `exclude`.
    ///
    /// Entries that cannot be read are dropped; they only show up in debug logs.
    /// Symlinked files are kept, symlinked directories are not descended into.
    pub fn find_images(root: &Path, exclude: Option<&Path>) -> Vec<PathBuf> {
        WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| exclude.map_or(true, |dir| entry.path() != dir))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry under {}: {}", root.display(), e);
                    None
                }
            })
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| Self::is_supported_format(path))
            .collect()
    }

    /// Check if a file format is supported
    pub fn is_supported_format(path: &Path) -> bool {
        Self::extension(path).is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
    }

    /// Lowercase extension of `path`, if any
    pub fn extension(path: &Path) -> Option<String> {
        path.extension().map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Copy `original` verbatim into `backup_dir`, unless a backup with the same
    /// file name is already there.
    pub fn backup_original(original: &Path, backup_dir: &Path) -> Result<BackupStatus> {
        let file_name = original.file_name().ok_or_else(|| {
            ResizeError::Validation(format!("Invalid file name: {}", original.display()))
        })?;

        fs::create_dir_all(backup_dir)?;

        let backup_path = backup_dir.join(file_name);
        if backup_path.exists() {
            debug!("Backup already present: {}", backup_path.display());
            return Ok(BackupStatus::AlreadyPresent(backup_path));
        }

        let bytes = fs::copy(original, &backup_path)?;
        debug!(
            "Backed up {} to {} ({})",
            original.display(),
            backup_path.display(),
            Self::format_size(bytes)
        );
        Ok(BackupStatus::Created(backup_path))
    }

    /// Size of a file on disk, zero when it cannot be read
    pub fn file_size(path: &Path) -> u64 {
        fs::metadata(path).map(|m| m.len()).unwrap_or(0)
    }

    /// Get human-readable file size
    pub fn format_size(size: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = size as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", size as u64, UNITS[unit_index])
        } else {
            format!("{:.2} {}", size, UNITS[unit_index])
        }
    }
}
