//! # Image Resize Module
//!
//! Questo modulo ridimensiona in-place le immagini che superano il limite
//! configurato, con backup opzionale dell'originale.
//!
//! ## Pipeline per singolo file
//! 1. **Backup** (solo in safe mode): copia byte-per-byte in `backup/`, una
//!    sola volta per nome file
//! 2. **Ricontrollo**: se l'immagine è già entro i limiti ritorna `Skipped`
//! 3. **Resize**: filtro Lanczos3, aspect ratio preservato, nessun lato oltre
//!    il limite
//! 4. **Salvataggio**: sovrascrive il file originale con i parametri del formato
//!
//! ## Esiti
//! Ogni chiamata produce un `ResizeOutcome` esplicito: `Resized`, `Skipped`
//! oppure `Error` con la causa. Un errore non interrompe mai la scansione.
//!
//! Se il backup fallisce il file originale non viene toccato.

use crate::error::Result;
use crate::file_manager::{BackupStatus, FileManager};
use crate::image_processor::{Dimensions, ImageProcessor};
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tracing::debug;

/// What happened to a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResizeOutcome {
    /// The file was downscaled and overwritten
    Resized { original: Dimensions, resized: Dimensions },
    /// The file was already within bounds and left untouched
    Skipped,
    /// Backup, decode, resize or save failed
    Error(String),
}

/// Downscales oversized images in place
pub struct ImageResizer {
    /// Maximum width/height in pixels
    target_size: u32,
    /// Backup destination; `None` disables backups
    backup_dir: Option<PathBuf>,
}

impl ImageResizer {
    pub fn new(target_size: u32, backup_dir: Option<PathBuf>) -> Self {
        Self {
            target_size,
            backup_dir,
        }
    }

    /// Back up (if enabled), re-check and shrink `path` in place.
    pub fn resize_image(&self, path: &Path) -> ResizeOutcome {
        match self.try_resize(path) {
            Ok(outcome) => outcome,
            Err(e) => ResizeOutcome::Error(e.to_string()),
        }
    }

    fn try_resize(&self, path: &Path) -> Result<ResizeOutcome> {
        if let Some(backup_dir) = &self.backup_dir {
            if let BackupStatus::Created(backup) = FileManager::backup_original(path, backup_dir)? {
                debug!("💾 Backed up {} to {}", path.display(), backup.display());
            }
        }

        let original_size = FileManager::file_size(path);
        let img = ImageProcessor::load(path)?;
        let original = Dimensions::from(&img);
        if original.fits_within(self.target_size) {
            debug!("{} is {}, nothing to do", path.display(), original);
            return Ok(ResizeOutcome::Skipped);
        }

        let resized_img = img.resize(self.target_size, self.target_size, FilterType::Lanczos3);
        drop(img);
        let resized = Dimensions::from(&resized_img);

        ImageProcessor::save(&resized_img, path)?;

        debug!(
            "Resized {}: {} -> {} ({} -> {})",
            path.display(),
            original,
            resized,
            FileManager::format_size(original_size),
            FileManager::format_size(FileManager::file_size(path))
        );

        Ok(ResizeOutcome::Resized { original, resized })
    }
}
