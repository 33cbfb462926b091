//! # Image Resizer Library
//!
//! Questo è il modulo principale della libreria che espone tutte le API pubbliche.
//!
//! ## Responsabilità:
//! - Definisce la struttura modulare dell'applicazione
//! - Espone i tipi e le funzioni principali tramite re-exports
//!
//! ## Architettura dei moduli:
//! - `config`: Configurazione, modalità di esecuzione e validazione dei flag
//! - `error`: Tipi di errore custom
//! - `file_manager`: Discovery delle immagini e backup degli originali
//! - `image_processor`: Lettura dimensioni e salvataggio per formato
//! - `resize`: Resize in-place con esito esplicito per file
//! - `optimizer`: Orchestratore della run
//! - `progress`: Progress bar e contatori
//!
//! ## Utilizzo:
//! ```rust,ignore
//! use image_resizer::{Config, ImageOptimizer, RunMode};
//!
//! let config = Config::new("/path/to/word-images", RunMode::Check);
//! let stats = ImageOptimizer::new(config.clone())?.run();
//! for line in stats.report_lines(&config) {
//!     println!("{line}");
//! }
//! ```

pub mod config;
pub mod error;
pub mod file_manager;
pub mod image_processor;
pub mod optimizer;
pub mod progress;
pub mod resize;

#[cfg(test)]
mod test_helpers;

pub use config::{Config, RunMode};
pub use error::ResizeError;
pub use image_processor::Dimensions;
pub use optimizer::ImageOptimizer;
pub use progress::RunStats;
pub use resize::{ImageResizer, ResizeOutcome};
