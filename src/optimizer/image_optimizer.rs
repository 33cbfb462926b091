//! # Image Optimizer Main Orchestrator
//!
//! Orchestratore della run: discovery, misura, decisione e conteggio,
//! un file alla volta, in un singolo thread.
//!
//! ## Flusso per file
//! - misura fallita → `unreadable`, errore stampato su stdout
//! - entro i limiti → `skipped`
//! - oltre i limiti → `need_resize`; in write mode delega a `ImageResizer`
//!   e conteggia l'esito

use crate::{
    config::Config,
    error::Result,
    file_manager::FileManager,
    image_processor::ImageProcessor,
    progress::{ProgressManager, RunStats},
    resize::{ImageResizer, ResizeOutcome},
};
use std::path::Path;
use tracing::{debug, info};

/// Runs one scan-and-resize pass over the image directory
pub struct ImageOptimizer {
    config: Config,
    resizer: ImageResizer,
}

impl ImageOptimizer {
    /// Validate `config` and prepare the resizer
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let resizer = ImageResizer::new(
            config.target_size,
            config.active_backup_dir().map(Path::to_path_buf),
        );
        Ok(Self { config, resizer })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process every discovered image; per-file failures never abort the run.
    pub fn run(&self) -> RunStats {
        let mut stats = RunStats::new();

        info!("🔍 Scanning {}", self.config.images_dir.display());
        let images = FileManager::find_images(&self.config.images_dir, Some(&self.config.backup_dir));
        stats.discovered = images.len();
        if images.is_empty() {
            return stats;
        }
        debug!("Found {} image(s), mode {:?}", images.len(), self.config.mode);

        let progress = ProgressManager::new(images.len() as u64, self.config.show_progress);
        for path in &images {
            self.process_file(path, &mut stats, &progress);
            progress.update(&Self::display_name(path));
        }
        progress.finish();

        stats
    }

    fn process_file(&self, path: &Path, stats: &mut RunStats, progress: &ProgressManager) {
        let dims = match ImageProcessor::read_dimensions(path) {
            Ok(dims) => dims,
            Err(e) => {
                progress.println(&format!("Error reading {}: {}", path.display(), e));
                stats.add_unreadable();
                return;
            }
        };

        if dims.fits_within(self.config.target_size) {
            debug!("{} is {}, within bounds", path.display(), dims);
            stats.add_within_bounds();
            return;
        }

        debug!("{} is {}, exceeds {}px", path.display(), dims, self.config.target_size);
        stats.add_oversized();
        if !self.config.mode.writes() {
            return;
        }

        let outcome = self.resizer.resize_image(path);
        match &outcome {
            ResizeOutcome::Resized { original, resized } => {
                debug!("✅ {}: {} -> {}", Self::display_name(path), original, resized);
            }
            ResizeOutcome::Skipped => {}
            ResizeOutcome::Error(reason) => {
                progress.println(&format!("❌ Failed to process {}: {}", path.display(), reason));
            }
        }
        stats.add_outcome(&outcome);
    }

    fn display_name(path: &Path) -> String {
        path.file_name().unwrap_or_default().to_string_lossy().to_string()
    }
}
