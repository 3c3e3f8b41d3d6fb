use std::fmt;

/// Which side length of a rectangle was rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Width,
    Height,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Width => f.write_str("width"),
            Dimension::Height => f.write_str("height"),
        }
    }
}

/// Errors raised while building a [`Rectangle`](crate::Rectangle).
///
/// Construction is the only fallible operation in the crate; every
/// relationship function is total over valid rectangles.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometryError {
    /// Width or height was zero or negative. Width is checked first.
    #[error("{0} must be greater than 0")]
    InvalidDimension(Dimension),
    /// A corner or the area does not fit in the coordinate type.
    #[error("rectangle corners or area overflow the coordinate type")]
    OutOfRange,
}

pub type GeometryResult<T> = Result<T, GeometryError>;
