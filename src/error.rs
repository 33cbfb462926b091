//! # Error Types Module
//!
//! Questo modulo definisce i tipi di errore custom dell'applicazione.
//!
//! ## Responsabilità:
//! - Definisce `ResizeError` enum per categorizzare tutti gli errori possibili
//! - Integra con `thiserror` per automatic error conversion da `io` e `image`
//!
//! ## Categorie di errori:
//! - `Io`: Errori di I/O (file non trovati, permessi, backup falliti)
//! - `Image`: Errori di decodifica/codifica immagini (formati corrotti, etc.)
//! - `UnsupportedFormat`: Estensione non gestita dal salvataggio
//! - `InvalidFlags`: Combinazione di flag CLI non valida
//! - `Validation`: Errori di validazione della configurazione
//!
//! Gli errori per singolo file non interrompono mai la scansione: vengono
//! convertiti in `ResizeOutcome::Error` dall'orchestratore.

/// Custom error types for image resizing
#[derive(thiserror::Error, Debug)]
pub enum ResizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    InvalidFlags(String),

    #[error("Configuration error: {0}")]
    Validation(String),
}

pub type Result<T, E = ResizeError> = std::result::Result<T, E>;
