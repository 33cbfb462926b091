//! # Progress Tracking and Statistics Module
//!
//! Questo modulo gestisce il progress tracking e i contatori della run.
//!
//! ## Responsabilità:
//! - Progress bar visuale con `indicatif` su stderr
//! - Contatori della run (da ridimensionare, ridimensionati, saltati, errori)
//! - Righe di report finali per l'operatore
//!
//! ## Statistiche tracciate:
//! - **discovered**: Immagini trovate dalla discovery
//! - **need_resize**: Immagini oltre il limite
//! - **resized**: Immagini effettivamente ridimensionate
//! - **skipped**: Immagini già entro il limite
//! - **errors**: Resize falliti
//! - **unreadable**: Immagini di cui non è stato possibile leggere le dimensioni
//!
//! ## Report finali:
//! ```text
//! 1 image(s) resized.
//! 1 image(s) already within 240px bounds.
//! ```

use crate::config::Config;
use crate::resize::ResizeOutcome;
use indicatif::{ProgressBar, ProgressStyle};

const BAR_TEMPLATE: &str = "[{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}";

/// Manages progress reporting while files are processed
#[derive(Clone)]
pub struct ProgressManager {
    bar: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager; a hidden one draws nothing.
    pub fn new(total_files: u64, visible: bool) -> Self {
        if !visible {
            return Self {
                bar: ProgressBar::hidden(),
            };
        }

        let bar = ProgressBar::new(total_files);
        let style = ProgressStyle::with_template(BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
        bar.set_style(style);

        Self { bar }
    }

    /// Update progress with a message
    pub fn update(&self, message: &str) {
        self.bar.inc(1);
        self.bar.set_message(message.to_string());
    }

    /// Print a line to stdout without tearing the bar
    pub fn println(&self, line: &str) {
        self.bar.suspend(|| println!("{line}"));
    }

    /// Remove the bar once the run is over
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}

/// Counters for one run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub discovered: usize,
    pub need_resize: usize,
    pub resized: usize,
    pub skipped: usize,
    pub errors: usize,
    pub unreadable: usize,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_within_bounds(&mut self) {
        self.skipped += 1;
    }

    pub fn add_oversized(&mut self) {
        self.need_resize += 1;
    }

    pub fn add_unreadable(&mut self) {
        self.unreadable += 1;
    }

    pub fn add_outcome(&mut self, outcome: &ResizeOutcome) {
        match outcome {
            ResizeOutcome::Resized { .. } => self.resized += 1,
            ResizeOutcome::Skipped => self.skipped += 1,
            ResizeOutcome::Error(_) => self.errors += 1,
        }
    }

    /// Final report, one entry per stdout line
    pub fn report_lines(&self, config: &Config) -> Vec<String> {
        if self.discovered == 0 {
            return vec!["No images found.".to_string()];
        }

        let target = config.target_size;
        let mut lines = Vec::new();

        if config.mode.reports_check() {
            lines.push(format!("{} image(s) exceed {}px.", self.need_resize, target));
        } else {
            lines.push(format!("{} image(s) resized.", self.resized));
            lines.push(format!(
                "{} image(s) already within {}px bounds.",
                self.skipped, target
            ));
        }

        if self.errors > 0 {
            lines.push(format!("{} image(s) failed to resize.", self.errors));
        }
        if self.unreadable > 0 {
            lines.push(format!("{} image(s) could not be read.", self.unreadable));
        }
        if let Some(backup_dir) = config.active_backup_dir() {
            lines.push(format!("Backups saved to {}.", backup_dir.display()));
        }

        lines
    }
}
