//! Error taxonomy for gradient parsing and construction.
//!
//! Callers of the reader see a single kind for every malformed payload —
//! [`GradientError::Format`] — with the specific cause carried inside as a
//! [`FormatError`]. Segment validation failures keep their own variants so
//! they stay distinguishable from text-level problems.

use thiserror::Error;

/// A specific reason gradient text could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The first line is not the literal `GIMP Gradient` tag.
    #[error("not a recognized gradient format")]
    UnrecognizedHeader,

    /// Fewer than three header lines were supplied.
    #[error("gradient header truncated")]
    TruncatedHeader,

    /// The second header line carries no `Name:` marker.
    #[error("gradient name marker missing")]
    MissingName,

    /// The third header line does not parse as a segment count.
    #[error("invalid segment count {0:?}")]
    InvalidSegmentCount(String),

    /// The declared segment count does not match the data lines present.
    #[error("declared {declared} segments, found {found} data lines")]
    LineCountMismatch { declared: usize, found: usize },

    /// A data-row token that should be numeric is not.
    #[error("unparseable number {0:?}")]
    InvalidNumber(String),
}

/// Any failure the gradient engine can surface.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GradientError {
    /// Malformed gradient text. The whole gradient fails to load; no
    /// partial [`Gradient`](crate::Gradient) is ever returned.
    #[error("failed to read gradient")]
    Format(#[from] FormatError),

    /// Segment control points are not ordered `left <= mid <= right`.
    #[error("segment positions not ordered: left {left}, mid {mid}, right {right}")]
    UnorderedPositions { left: f64, mid: f64, right: f64 },

    /// A segment whose left and right positions coincide has no width to
    /// interpolate across.
    #[error("degenerate segment of zero width at position {0}")]
    DegenerateSegment(f64),
}
