//! One piece of a gradient: three control points and the linear
//! interpolation between them.

use std::fmt;

use log::trace;
use ramp_color::Rgb;

use crate::error::GradientError;
use crate::point::ColorPoint;

/// Three control points — left, mid, right — defining one gradient piece.
///
/// The mid color is never supplied from outside: it is derived at
/// construction by linearly interpolating the endpoint colors at the mid
/// position. Querying the mid position afterwards therefore reproduces the
/// stored mid color from either half.
///
/// The mid point being independent of the span's center is what allows
/// asymmetric blending: a mid position close to the left endpoint front-
/// loads the color transition.
#[derive(Clone, PartialEq)]
pub struct Segment {
    left: ColorPoint,
    mid: ColorPoint,
    right: ColorPoint,
}

impl Segment {
    /// Build a segment from its three positions and endpoint colors.
    ///
    /// Colors are expected in final channel units; ratio-scaled input
    /// belongs in [`Rgb::from_ratios`] before it gets here.
    ///
    /// # Errors
    ///
    /// [`GradientError::UnorderedPositions`] unless
    /// `pos_left <= pos_mid <= pos_right`, and
    /// [`GradientError::DegenerateSegment`] when `pos_left == pos_right`,
    /// which would leave no width to interpolate across. With both checked
    /// here, [`interpolate`](Self::interpolate) cannot fail.
    pub fn new(
        positions: [f64; 3],
        col_left: Rgb,
        col_right: Rgb,
    ) -> Result<Self, GradientError> {
        let [pos_left, pos_mid, pos_right] = positions;
        if !(pos_left <= pos_mid && pos_mid <= pos_right) {
            return Err(GradientError::UnorderedPositions {
                left: pos_left,
                mid: pos_mid,
                right: pos_right,
            });
        }
        if pos_left == pos_right {
            return Err(GradientError::DegenerateSegment(pos_left));
        }

        let left = ColorPoint::new(pos_left, col_left);
        let right = ColorPoint::new(pos_right, col_right);
        let mid = ColorPoint::new(pos_mid, interpolate_between(&left, &right, pos_mid));

        let segment = Self { left, mid, right };
        trace!("created {segment:?}");
        Ok(segment)
    }

    /// The left control point.
    #[inline]
    #[must_use]
    pub fn left(&self) -> ColorPoint {
        self.left
    }

    /// The derived mid control point.
    #[inline]
    #[must_use]
    pub fn mid(&self) -> ColorPoint {
        self.mid
    }

    /// The right control point.
    #[inline]
    #[must_use]
    pub fn right(&self) -> ColorPoint {
        self.right
    }

    /// Whether `pos` falls inside this segment's span (bounds inclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: f64) -> bool {
        self.left.position() <= pos && pos <= self.right.position()
    }

    /// Evaluate the segment's color at `pos`.
    ///
    /// Queries at or below the mid position interpolate the left half
    /// (`left` ↔ `mid`), queries above it the right half (`mid` ↔
    /// `right`) — the `<=` tie-break makes a query exactly at the mid
    /// position deterministic. Positions outside the span extrapolate
    /// along the chosen half's line.
    #[must_use]
    pub fn interpolate(&self, pos: f64) -> Rgb {
        let (a, b) = if pos <= self.mid.position() {
            (&self.left, &self.mid)
        } else {
            (&self.mid, &self.right)
        };
        interpolate_between(a, b, pos)
    }
}

impl fmt::Debug for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment[{:?}, {:?}, {:?}]",
            self.left, self.mid, self.right
        )
    }
}

/// Linear per-channel interpolation of `pos` between two points.
fn interpolate_between(a: &ColorPoint, b: &ColorPoint, pos: f64) -> Rgb {
    let rel = relative_position(a.position(), b.position(), pos);
    a.color().lerp(b.color(), rel)
}

/// Fractional distance of `target` between `pos1` and `pos2`.
///
/// A zero-width pair has no interior; returning 0 keeps a query landing
/// exactly on the shared position at the pair's left color instead of
/// dividing by zero.
fn relative_position(pos1: f64, pos2: f64, target: f64) -> f64 {
    let span = pos2 - pos1;
    if span == 0.0 {
        return 0.0;
    }
    (target - pos1) / span
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn black_to_white(positions: [f64; 3]) -> Segment {
        Segment::new(positions, Rgb::BLACK, Rgb::WHITE)
            .unwrap_or_else(|e| panic!("segment {positions:?} should build: {e}"))
    }

    #[test]
    fn mid_color_is_derived_from_endpoints() {
        let seg = black_to_white([0.0, 0.5, 1.0]);
        assert_eq!(seg.mid().color(), Rgb::new(128, 128, 128));
    }

    #[test]
    fn skewed_mid_uses_relative_position() {
        // Mid sits a quarter of the way in, so its color is a quarter of
        // the black→white ramp.
        let seg = black_to_white([0.0, 0.25, 1.0]);
        assert_eq!(seg.mid().color(), Rgb::new(64, 64, 64));
    }

    #[test]
    fn endpoints_interpolate_to_endpoint_colors() {
        let seg = black_to_white([0.0, 0.5, 1.0]);
        assert_eq!(seg.interpolate(0.0), Rgb::BLACK);
        assert_eq!(seg.interpolate(1.0), Rgb::WHITE);
    }

    #[test]
    fn query_at_mid_matches_stored_mid_color() {
        // The <= tie-break routes the query through the left half, whose
        // formula lands exactly on the stored mid color.
        let seg = black_to_white([0.0, 0.3, 1.0]);
        assert_eq!(seg.interpolate(0.3), seg.mid().color());
    }

    #[test]
    fn channels_are_monotonic_across_the_span() {
        let seg = Segment::new(
            [0.0, 0.5, 1.0],
            Rgb::new(10, 200, 30),
            Rgb::new(240, 20, 200),
        )
        .expect("segment should build");

        let mut prev = seg.interpolate(0.0);
        for step in 1..=100 {
            let pos = f64::from(step) / 100.0;
            let next = seg.interpolate(pos);
            assert!(next.r >= prev.r, "r not rising at {pos}: {next:?} < {prev:?}");
            assert!(next.g <= prev.g, "g not falling at {pos}: {next:?} > {prev:?}");
            assert!(next.b >= prev.b, "b not rising at {pos}: {next:?} < {prev:?}");
            prev = next;
        }
    }

    #[test]
    fn unordered_positions_are_rejected() {
        let err = Segment::new([0.5, 0.2, 1.0], Rgb::BLACK, Rgb::WHITE)
            .expect_err("mid before left must not build");
        assert_eq!(
            err,
            GradientError::UnorderedPositions { left: 0.5, mid: 0.2, right: 1.0 }
        );

        assert!(Segment::new([0.0, 0.9, 0.5], Rgb::BLACK, Rgb::WHITE).is_err());
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let err = Segment::new([0.5, 0.5, 0.5], Rgb::BLACK, Rgb::WHITE)
            .expect_err("zero-width segment must not build");
        assert_eq!(err, GradientError::DegenerateSegment(0.5));
    }

    #[test]
    fn extrapolation_below_span_follows_the_left_half_line() {
        let seg = Segment::new(
            [0.2, 0.5, 0.8],
            Rgb::new(100, 100, 100),
            Rgb::new(200, 200, 200),
        )
        .expect("segment should build");

        // Left half runs 100 → 150 over [0.2, 0.5]; at 0.0 the line sits
        // at 100 - (0.2 / 0.3) * 50 ≈ 66.7.
        assert_eq!(seg.interpolate(0.0), Rgb::new(67, 67, 67));
    }

    #[test]
    fn zero_width_half_resolves_without_dividing_by_zero() {
        // left == mid passes the ordering check; a query landing exactly
        // there must still produce a color.
        let seg = Segment::new([0.0, 0.0, 1.0], Rgb::new(40, 40, 40), Rgb::new(200, 200, 200))
            .expect("segment should build");
        assert_eq!(seg.interpolate(0.0), Rgb::new(40, 40, 40));
    }

    #[test]
    fn contains_is_inclusive_at_both_bounds() {
        let seg = black_to_white([0.2, 0.5, 0.8]);
        assert!(seg.contains(0.2));
        assert!(seg.contains(0.8));
        assert!(!seg.contains(0.19));
        assert!(!seg.contains(0.81));
    }
}
