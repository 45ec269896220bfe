use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PdfError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    /// A page referenced by the page order was missing from the document
    #[error("page missing from document")]
    PageMissing,

    /// A colour string could not be parsed as a `#rrggbb` hex triplet
    #[error("invalid colour {0:?}, expected a hex triplet such as #555555")]
    InvalidColour(String),

    /// The unit step resolved to a value that cannot space grid lines
    /// (zero, or non-finite from a zero denominator)
    #[error("unit step {0} cannot be used to space grid lines")]
    DegenerateUnit(f64),

    /// A table was configured with zero rows or columns
    #[error("table needs at least one column and one row")]
    EmptyTable,
}
