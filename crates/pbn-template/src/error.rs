//! Error types for pbn-template

use thiserror::Error;

/// Errors that can occur while building or consuming templates
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pbn_core::Error),

    /// Quantization error
    #[error("quantization error: {0}")]
    Color(#[from] pbn_color::ColorError),

    /// Region operation error
    #[error("region error: {0}")]
    Region(#[from] pbn_region::RegionError),
}

/// Result type for template operations
pub type TemplateResult<T> = Result<T, TemplateError>;
