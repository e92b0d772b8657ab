//! A single gradient control point: a position paired with its color.

use std::fmt;

use log::trace;
use ramp_color::Rgb;

/// An immutable `(position, color)` pair.
///
/// Positions are expected in [0, 1] but are not range-checked here; the
/// owning [`Segment`](crate::Segment) validates the ordering between its
/// three points. Once constructed, a point never changes.
#[derive(Clone, Copy, PartialEq)]
pub struct ColorPoint {
    position: f64,
    color: Rgb,
}

impl ColorPoint {
    pub(crate) fn new(position: f64, color: Rgb) -> Self {
        let point = Self { position, color };
        trace!("created {point:?}");
        point
    }

    /// The point's position along the gradient axis.
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// The point's color.
    #[inline]
    #[must_use]
    pub fn color(&self) -> Rgb {
        self.color
    }
}

impl fmt::Debug for ColorPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ColorPoint[pos={:8.4}%, {}]",
            100.0 * self.position,
            self.color
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn accessors_return_construction_values() {
        let point = ColorPoint::new(0.25, Rgb::new(10, 20, 30));
        assert_eq!(point.position(), 0.25);
        assert_eq!(point.color(), Rgb::new(10, 20, 30));
    }

    #[test]
    fn debug_shows_position_as_percentage() {
        let point = ColorPoint::new(0.5, Rgb::new(128, 128, 128));
        assert_eq!(format!("{point:?}"), "ColorPoint[pos= 50.0000%, #808080]");
    }
}
