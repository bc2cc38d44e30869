use crate::SIGN_MARKER;
use crate::coder::{Coder, Span};
use log::trace;

/// Errors that can occur while encoding a coordinate pair.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum EncodeError {
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180)")]
    LongitudeOutOfRange(f64),
    #[error("target precision {0} is not positive")]
    PrecisionNotPositive(f64),
}

// Widest case is base 2: 64 digits for a full u64 magnitude.
const MAX_DIGITS: usize = 64;

impl Coder {
    /// Append `value` to `out` in this coder's base.
    ///
    /// Signed coders prefix negative values with `-` and encode the
    /// magnitude; unsigned coders encode the raw two's-complement bit
    /// pattern. Zero is always a single zero digit.
    pub fn append_i64(&self, out: &mut String, value: i64) {
        let magnitude = if self.signed && value < 0 {
            out.push(SIGN_MARKER);
            // unsigned negation, so i64::MIN keeps its magnitude
            (value as u64).wrapping_neg()
        } else {
            value as u64
        };
        self.append_magnitude(out, magnitude);
    }

    /// [`append_i64`] into a fresh string.
    ///
    /// [`append_i64`]: Coder::append_i64
    pub fn as_string(&self, value: i64) -> String {
        let mut out = String::new();
        self.append_i64(&mut out, value);
        out
    }

    fn append_magnitude(&self, out: &mut String, mut magnitude: u64) {
        let base = u64::from(self.alphabet.base());
        // digits come out least-significant first
        let mut digits = [0u32; MAX_DIGITS];
        let mut len = 0;
        loop {
            digits[len] = (magnitude % base) as u32;
            len += 1;
            magnitude /= base;
            if magnitude == 0 {
                break;
            }
        }
        for &digit in digits[..len].iter().rev() {
            out.push(self.alphabet.symbol_of(digit));
        }
    }

    /// Append a coordinate pair, narrowed until both axes are within
    /// `target_precision` degrees.
    ///
    /// Axes alternate strictly, longitude first: each digit splits the
    /// current axis's interval into `base` equal parts and selects the part
    /// containing the coordinate. An axis is satisfied once its interval
    /// width drops to the target; digits keep alternating until both axes
    /// are satisfied, so the string length may be odd.
    pub fn append_lat_lon(
        &self,
        out: &mut String,
        latitude: f64,
        longitude: f64,
        target_precision: f64,
    ) -> Result<(), EncodeError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(EncodeError::LatitudeOutOfRange(latitude));
        }
        if !(-180.0..180.0).contains(&longitude) {
            return Err(EncodeError::LongitudeOutOfRange(longitude));
        }
        if !(target_precision > 0.0) {
            return Err(EncodeError::PrecisionNotPositive(target_precision));
        }

        let base = self.alphabet.base();
        let mut lat = Span::latitude();
        let mut lon = Span::longitude();
        let (mut lat_done, mut lon_done) = (false, false);
        let mut lon_turn = true;
        let start = out.len();
        while !(lat_done && lon_done) {
            let (axis, value) = if lon_turn {
                (&mut lon, longitude)
            } else {
                (&mut lat, latitude)
            };
            let digit = axis.narrow_to(value, base);
            out.push(self.alphabet.symbol_of(digit));
            if lon_turn {
                lon_done = lon.width() <= target_precision;
            } else {
                lat_done = lat.width() <= target_precision;
            }
            lon_turn = !lon_turn;
        }
        trace!(
            "({latitude}, {longitude}) at target {target_precision}: {} digits",
            out.len() - start
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn hex() -> Coder {
        Coder::builder("0123456789ABCDEF").build().unwrap()
    }

    #[test]
    fn unsigned_hex_matches_standard_formatting() {
        let coder = hex();
        for value in [
            i64::MIN,
            -1234567890123456789,
            -1,
            0,
            1,
            0xF101,
            1234567890123456789,
            i64::MAX,
        ] {
            assert_eq!(coder.as_string(value), format!("{:X}", value as u64));
        }
    }

    #[test]
    fn signed_decimal_matches_standard_formatting() {
        let coder = Coder::builder("0123456789").signed(true).build().unwrap();
        for value in [
            i64::MIN,
            -i64::MAX,
            i64::from(i32::MIN),
            -1,
            0,
            1,
            i64::from(i32::MAX),
            i64::MAX,
        ] {
            assert_eq!(coder.as_string(value), value.to_string());
        }
    }

    #[test]
    fn zero_is_a_single_zero_digit() {
        assert_eq!(hex().as_string(0), "0");
        let signed = Coder::builder("01").signed(true).build().unwrap();
        assert_eq!(signed.as_string(0), "0");
    }

    #[test]
    fn append_extends_the_caller_buffer() {
        let coder = hex();
        let mut out = String::from("id-");
        coder.append_i64(&mut out, 0xBEEF);
        assert_eq!(out, "id-BEEF");
    }

    #[test]
    fn boundary_coordinates_encode() {
        let coder = hex();
        let mut out = String::new();
        for (lat, lon) in [(90.0, 0.0), (-90.0, 0.0), (0.0, -180.0)] {
            out.clear();
            assert!(coder.append_lat_lon(&mut out, lat, lon, 1e-2).is_ok());
            assert!(!out.is_empty());
        }
    }

    #[test]
    fn out_of_range_coordinates_are_rejected() {
        let coder = hex();
        let mut out = String::new();
        assert_eq!(
            coder.append_lat_lon(&mut out, 90.5, 0.0, 1e-2),
            Err(EncodeError::LatitudeOutOfRange(90.5))
        );
        // the longitude interval is half-open
        assert_eq!(
            coder.append_lat_lon(&mut out, 0.0, 180.0, 1e-2),
            Err(EncodeError::LongitudeOutOfRange(180.0))
        );
        assert_eq!(
            coder.append_lat_lon(&mut out, 0.0, 0.0, 0.0),
            Err(EncodeError::PrecisionNotPositive(0.0))
        );
        assert!(matches!(
            coder.append_lat_lon(&mut out, f64::NAN, 0.0, 1e-2),
            Err(EncodeError::LatitudeOutOfRange(_))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn halving_the_target_never_shortens_the_string() {
        let coder = Coder::builder("01").build().unwrap();
        let mut previous = 0;
        let mut target = 1.0;
        while target > 1e-6 {
            let mut out = String::new();
            coder.append_lat_lon(&mut out, 45.0, 45.0, target).unwrap();
            assert!(out.len() >= previous);
            previous = out.len();
            target /= 2.0;
        }
    }
}
