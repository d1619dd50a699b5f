//! Error types for table construction, loading, and lookup
use crate::grid::GridQuantity;

/// Errors that can occur while building or querying a magnetic field table.
#[derive(Debug, thiserror::Error)]
pub enum GeomagError {
    /// A query coordinate is NaN or infinite. Finite out-of-range coordinates are
    /// clamped (latitude) or wrapped (longitude) and never produce this error.
    #[error("Invalid input: latitude {latitude}, longitude {longitude} must be finite")]
    InvalidInput { latitude: f64, longitude: f64 },

    #[error("{quantity} grid has {found} samples, expected {expected}")]
    SampleCount {
        quantity: GridQuantity,
        found: usize,
        expected: usize,
    },

    #[error("{quantity} grid row {row} has {found} samples, expected {expected}")]
    RowLength {
        quantity: GridQuantity,
        row: usize,
        found: usize,
        expected: usize,
    },

    /// The +180 longitude column does not repeat the -180 column.
    #[error("{quantity} grid row {row} is not periodic: {first} at -180 but {last} at +180")]
    SeamMismatch {
        quantity: GridQuantity,
        row: usize,
        first: i16,
        last: i16,
    },

    #[error("Expected a {expected} grid, got {found}")]
    QuantityMismatch {
        expected: GridQuantity,
        found: GridQuantity,
    },

    #[error("Record {index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: Box<GeomagError>,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
