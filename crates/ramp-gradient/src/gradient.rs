//! An ordered collection of segments resolving positions to colors.

use ramp_color::Rgb;

use crate::segment::Segment;

/// A position-sorted, immutable set of [`Segment`]s with an optional name.
///
/// Construction sorts by each segment's left position. The sort is stable,
/// so segments sharing a left position keep the relative order they were
/// supplied in. There is no mutation API; concurrent reads need no
/// locking.
#[derive(Clone, Debug, Default)]
pub struct Gradient {
    segments: Vec<Segment>,
    name: Option<String>,
}

impl Gradient {
    /// Build an unnamed gradient. Iteration order does not matter.
    #[must_use]
    pub fn new<I>(segments: I) -> Self
    where
        I: IntoIterator<Item = Segment>,
    {
        let mut segments: Vec<Segment> = segments.into_iter().collect();
        segments.sort_by(|a, b| a.left().position().total_cmp(&b.left().position()));
        Self { segments, name: None }
    }

    /// Build a named gradient.
    #[must_use]
    pub fn with_name<I, S>(segments: I, name: S) -> Self
    where
        I: IntoIterator<Item = Segment>,
        S: Into<String>,
    {
        Self {
            name: Some(name.into()),
            ..Self::new(segments)
        }
    }

    /// The gradient's name, when one was supplied.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The segments in ascending left-position order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Resolve `pos` to a color.
    ///
    /// Scans the sorted segments and delegates to the first whose span
    /// contains `pos`. When none does — a gap between segments, or a
    /// position outside every span — the scan runs off the end and the
    /// last segment extrapolates along its own line. Callers needing
    /// strict containment must check [`Segment::contains`] beforehand.
    ///
    /// An empty gradient resolves every position to black.
    #[must_use]
    pub fn interpolate(&self, pos: f64) -> Rgb {
        let Some(mut owner) = self.segments.first() else {
            return Rgb::BLACK;
        };
        for segment in &self.segments {
            owner = segment;
            if segment.contains(pos) {
                break;
            }
        }
        owner.interpolate(pos)
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
