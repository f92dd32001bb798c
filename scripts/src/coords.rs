//! Coordinate accumulation and sexagesimal formatting

use crate::search_path::OffsetStep;

/// Current pointing of the search: RA in hours, Dec in degrees.
///
/// Wraparound at the 0h/24h boundary and declination limits are the mount
/// agent's concern; values here accumulate at full f64 precision and are only
/// rounded at the point of formatting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquatorialPosition {
    pub ra: f64,
    pub dec: f64,
}

impl EquatorialPosition {
    pub fn new(ra: f64, dec: f64) -> Self {
        Self { ra, dec }
    }

    /// Add one offset step and return the new position.
    pub fn advance(&mut self, step: OffsetStep) -> Self {
        self.ra += step.ra;
        self.dec += step.dec;
        *self
    }
}

/// Format a signed angle (hours or degrees) as base-60 text for a FITS
/// header: `" {whole}:{minutes}:{seconds}"` with five decimal places of
/// seconds and a leading space.
///
/// The whole part truncates toward zero; minutes and seconds come from the
/// magnitude of the fractional remainder, so -1.25 formats as
/// `" -1:15:0.00000"`.
pub fn format_base60(angle: f64) -> String {
    let whole = angle.trunc();
    let minutes_raw = (angle - whole).abs() * 60.0;
    let minutes = minutes_raw.trunc();
    let seconds = (minutes_raw - minutes) * 60.0;
    format!(" {}:{}:{:.5}", whole as i64, minutes as i64, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_accumulates_in_order() {
        let base = EquatorialPosition::new(5.0, 10.0);
        let s1 = OffsetStep { ra: 1.0, dec: 0.0 };
        let s2 = OffsetStep { ra: 0.0, dec: -2.0 };
        let s3 = OffsetStep { ra: -0.5, dec: 0.25 };

        let mut position = base;
        position.advance(s1);
        position.advance(s2);
        position.advance(s3);

        assert_eq!(position.ra, 5.0 + 1.0 + 0.0 + -0.5);
        assert_eq!(position.dec, 10.0 + 0.0 + -2.0 + 0.25);
    }

    #[test]
    fn test_advance_returns_new_position() {
        let mut position = EquatorialPosition::new(5.0, 10.0);
        let next = position.advance(OffsetStep { ra: 1.0, dec: 0.0 });
        assert_eq!(next, EquatorialPosition::new(6.0, 10.0));
        assert_eq!(position, next);
    }

    #[test]
    fn test_format_positive_half_hour() {
        assert_eq!(format_base60(10.5), " 10:30:0.00000");
    }

    #[test]
    fn test_format_negative_truncates_toward_zero() {
        // Whole part -1, minutes/seconds from |−0.25| — not floor semantics,
        // which would give -2:45.
        assert_eq!(format_base60(-1.25), " -1:15:0.00000");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_base60(0.0), " 0:0:0.00000");
    }

    #[test]
    fn test_format_quarter_degree() {
        assert_eq!(format_base60(6.25), " 6:15:0.00000");
    }

    #[test]
    fn test_format_small_negative_keeps_zero_whole_part() {
        assert_eq!(format_base60(-0.75), " 0:45:0.00000");
    }

    #[test]
    fn test_format_fractional_seconds_retained() {
        // 3.375 = 3 + 22.5/60: the half minute lands in the seconds field
        assert_eq!(format_base60(3.375), " 3:22:30.00000");
    }
}
