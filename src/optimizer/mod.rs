//! # Optimizer Module
//!
//! Orchestrazione della run:
//! - `image_optimizer`: scansione sequenziale, misura, resize e conteggi

pub mod image_optimizer;

pub use image_optimizer::ImageOptimizer;
