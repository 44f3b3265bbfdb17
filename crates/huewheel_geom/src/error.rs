use thiserror::Error;

/// Errors reported by configuration checks and option parsing.
///
/// The transforms themselves never fail; these only surface when a host
/// explicitly validates a [`LayoutConfig`](crate::LayoutConfig) or parses an
/// option name.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Degenerate configuration: {field} must be positive, got {value}")]
    Degenerate { field: &'static str, value: f64 },

    #[error("Non-finite configuration value for {field}")]
    NonFinite { field: &'static str },

    #[error("Unknown wheel direction '{0}' (expected 'clockwise' or 'anticlockwise')")]
    UnknownDirection(String),

    #[error("Unknown layout direction '{0}' (expected 'horizontal' or 'vertical')")]
    UnknownLayout(String),
}

pub type Result<T> = std::result::Result<T, GeometryError>;
