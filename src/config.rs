//! # Configuration Management Module
//!
//! Questo modulo gestisce tutta la configurazione dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce la struct `Config` con i parametri fissi del resize
//! - Traduce i flag della CLI in un `RunMode` valido
//! - Rifiuta le combinazioni di flag non valide prima di toccare qualsiasi file
//!
//! ## Parametri di configurazione:
//! - `images_dir`: Directory radice delle immagini (default: `<exe>/../word-images`)
//! - `backup_dir`: Directory dei backup (sempre `<images_dir>/backup`)
//! - `target_size`: Dimensione massima in pixel per lato (default: 240)
//! - `mode`: Modalità di esecuzione (check, scan, write)
//! - `show_progress`: Mostra la progress bar su stderr
//!
//! ## Validazione:
//! - `--safe` richiede `--write`
//! - `--check` insieme a `--write` ridimensiona comunque, ma stampa solo il report di check
//! - `target_size` deve essere > 0
//! - `backup_dir` non può coincidere con `images_dir`
//!
//! ## Esempio:
//! ```rust,ignore
//! let mode = RunMode::from_flags(false, true, true)?;
//! let config = Config::new("/tmp/word-images", mode);
//! config.validate()?;
//! ```

use crate::error::{ResizeError, Result};
use std::path::{Path, PathBuf};

/// Maximum width and height, in pixels, an image may keep untouched.
pub const TARGET_SIZE: u32 = 240;

/// Name of the directory, inside the image root, that holds backups.
pub const BACKUP_DIR_NAME: &str = "backup";

/// Name of the image root, resolved next to the executable's directory.
pub const IMAGES_DIR_NAME: &str = "word-images";

/// What a run is allowed to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    /// Only count the files exceeding the bound.
    Check,
    /// Measure every file and print the normal report without writing.
    Scan,
    /// Resize oversized files in place, optionally backing them up first.
    /// With `check` set the final report is the check line instead of the
    /// resized/skipped counts.
    Write { safe: bool, check: bool },
}

impl RunMode {
    /// Build a mode from the raw CLI flags, rejecting invalid combinations.
    pub fn from_flags(check: bool, write: bool, safe: bool) -> Result<Self> {
        if safe && !write {
            return Err(ResizeError::InvalidFlags(
                "--safe can only be used with --write".to_string(),
            ));
        }

        Ok(match (check, write) {
            (_, true) => Self::Write { safe, check },
            (true, false) => Self::Check,
            (false, false) => Self::Scan,
        })
    }

    pub fn writes(&self) -> bool {
        matches!(self, Self::Write { .. })
    }

    pub fn is_safe(&self) -> bool {
        matches!(self, Self::Write { safe: true, .. })
    }

    /// True when the final report is the "exceed" count.
    pub fn reports_check(&self) -> bool {
        matches!(self, Self::Check | Self::Write { check: true, .. })
    }
}

/// Configuration for one resize run
#[derive(Debug, Clone)]
pub struct Config {
    /// Root directory scanned recursively for images
    pub images_dir: PathBuf,
    /// Where originals are copied in safe mode
    pub backup_dir: PathBuf,
    /// Maximum width/height in pixels
    pub target_size: u32,
    /// What the run may do
    pub mode: RunMode,
    /// Draw a progress bar on stderr
    pub show_progress: bool,
}

impl Config {
    /// Configuration rooted at `images_dir`, with the fixed bound and backup location.
    pub fn new(images_dir: impl Into<PathBuf>, mode: RunMode) -> Self {
        let images_dir = images_dir.into();
        let backup_dir = images_dir.join(BACKUP_DIR_NAME);
        Self {
            images_dir,
            backup_dir,
            target_size: TARGET_SIZE,
            mode,
            show_progress: true,
        }
    }

    /// Configuration rooted at `<directory of the executable>/../word-images`.
    pub fn for_executable(mode: RunMode) -> Result<Self> {
        let exe = std::env::current_exe()?;
        Ok(Self::new(Self::images_dir_for(&exe)?, mode))
    }

    fn images_dir_for(exe: &Path) -> Result<PathBuf> {
        let exe_dir = exe.parent().ok_or_else(|| {
            ResizeError::Validation(format!("Executable has no parent directory: {}", exe.display()))
        })?;
        let base = exe_dir.parent().unwrap_or(exe_dir);
        Ok(base.join(IMAGES_DIR_NAME))
    }

    /// Backup directory, only when the run backs originals up.
    pub fn active_backup_dir(&self) -> Option<&Path> {
        self.mode.is_safe().then_some(self.backup_dir.as_path())
    }

    /// Validate configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(ResizeError::Validation(
                "Target size must be greater than 0".to_string(),
            ));
        }

        if self.backup_dir == self.images_dir {
            return Err(ResizeError::Validation(format!(
                "Backup directory must differ from the image directory: {}",
                self.images_dir.display()
            )));
        }

        Ok(())
    }
}
