//! GIMP-gradient text format parsing.
//!
//! The format is line oriented:
//!
//! ```text
//! GIMP Gradient
//! Name: <arbitrary text>
//! <N>
//! <pos_l> <pos_m> <pos_r> <r_l> <g_l> <b_l> <a_l> <r_r> <g_r> <b_r> <a_r>
//! ```
//!
//! One data row per segment, `N` rows total. Tokens are separated by runs
//! of whitespace, color components are ratios in [0, 1], and the two
//! alpha columns are read and discarded — transparency is not modeled.
//!
//! Hand-edited gradient files often carry trailing or partial rows, so a
//! data row with fewer than the expected eleven columns is skipped
//! silently rather than rejected. Header problems, by contrast, fail the
//! whole payload: no partial gradient is ever produced.

use log::debug;
use ramp_color::Rgb;

use crate::error::{FormatError, GradientError};
use crate::gradient::Gradient;
use crate::segment::Segment;

/// The literal tag opening every gradient payload.
const HEADER_TAG: &str = "GIMP Gradient";

/// The marker introducing the gradient name on the second header line.
const NAME_MARKER: &str = "Name:";

/// The number of numeric columns a data row must supply.
const ROW_COLUMNS: usize = 11;

/// A source of gradients parsed from pre-split text lines.
///
/// The engine never reads files itself; callers hand in lines they
/// already hold, and readers must not consume or mutate the caller's
/// buffer.
pub trait GradientReader {
    /// Parse `lines` into a [`Gradient`].
    ///
    /// # Errors
    ///
    /// [`GradientError::Format`] when the payload is not a well-formed
    /// gradient description. Segment validation failures pass through
    /// unchanged.
    fn make(&self, lines: &[&str]) -> Result<Gradient, GradientError>;
}

/// Reader for the GIMP gradient (`.ggr`) text format.
#[derive(Clone, Copy, Debug, Default)]
pub struct GimpGradientReader;

impl GimpGradientReader {
    /// Convenience over [`GradientReader::make`] for callers holding the
    /// whole payload as a single string.
    ///
    /// # Errors
    ///
    /// Same as [`GradientReader::make`].
    pub fn read_str(&self, data: &str) -> Result<Gradient, GradientError> {
        let lines: Vec<&str> = data.lines().collect();
        self.make(&lines)
    }

    fn read_segments(rows: &[&str]) -> Result<Vec<Segment>, GradientError> {
        let mut segments = Vec::with_capacity(rows.len());
        for row in rows {
            let row = row.trim();
            if row.is_empty() {
                continue;
            }

            let tokens: Vec<&str> = row.split_whitespace().collect();
            if tokens.len() < ROW_COLUMNS {
                debug!(
                    "skipping data row with {} of {ROW_COLUMNS} columns: {row:?}",
                    tokens.len()
                );
                continue;
            }

            // Only the leading eleven columns are consumed; anything a row
            // carries beyond them is ignored, parsed or not.
            let mut values = [0.0_f64; ROW_COLUMNS];
            for (value, token) in values.iter_mut().zip(&tokens) {
                *value = token
                    .parse()
                    .map_err(|_| FormatError::InvalidNumber((*token).to_owned()))?;
            }
            let [pos_left, pos_mid, pos_right, r_l, g_l, b_l, _alpha_l, r_r, g_r, b_r, _alpha_r] =
                values;

            segments.push(Segment::new(
                [pos_left, pos_mid, pos_right],
                Rgb::from_ratios(r_l, g_l, b_l),
                Rgb::from_ratios(r_r, g_r, b_r),
            )?);
        }
        Ok(segments)
    }
}

impl GradientReader for GimpGradientReader {
    fn make(&self, lines: &[&str]) -> Result<Gradient, GradientError> {
        let header = lines.first().ok_or(FormatError::TruncatedHeader)?;
        if header.trim() != HEADER_TAG {
            return Err(FormatError::UnrecognizedHeader.into());
        }

        let name_line = lines.get(1).ok_or(FormatError::TruncatedHeader)?;
        let (_, name) = name_line
            .split_once(NAME_MARKER)
            .ok_or(FormatError::MissingName)?;
        let name = name.trim();

        let count_line = lines.get(2).ok_or(FormatError::TruncatedHeader)?;
        let declared: usize = count_line
            .trim()
            .parse()
            .map_err(|_| FormatError::InvalidSegmentCount(count_line.trim().to_owned()))?;

        let rows = &lines[3..];
        if declared != rows.len() {
            return Err(FormatError::LineCountMismatch {
                declared,
                found: rows.len(),
            }
            .into());
        }

        let segments = Self::read_segments(rows)?;
        debug!("read gradient {name:?} with {} segment(s)", segments.len());
        Ok(Gradient::with_name(segments, name))
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
