use crate::SIGN_MARKER;
use crate::coder::{Coder, Span};

/// Errors that can occur while decoding.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ParseError {
    #[error("character {0:?} is not in the alphabet or alias map")]
    UnknownSymbol(char),
    #[error("no digits to decode")]
    EmptyInput,
}

/// A decoded coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub latitude: f64,
    pub longitude: f64,
    /// Wider of the two final interval widths, in degrees. The worst-case
    /// error per axis is half this value.
    pub precision: f64,
}

impl Coder {
    /// Parse an integer in this coder's base.
    ///
    /// A leading `-` is recognized only on signed coders. Aliases are
    /// accepted anywhere a digit is. Magnitudes beyond 64 bits wrap modulo
    /// 2^64, mirroring the unsigned arithmetic on the encode side, so every
    /// encoded `i64` round-trips.
    pub fn parse_i64(&self, s: &str) -> Result<i64, ParseError> {
        let base = u64::from(self.alphabet.base());
        let mut chars = s.chars().peekable();
        let negative = self.signed && chars.peek() == Some(&SIGN_MARKER);
        if negative {
            chars.next();
        }

        let mut value: u64 = 0;
        let mut empty = true;
        for c in chars {
            let digit = self
                .alphabet
                .digit_of(c)
                .ok_or(ParseError::UnknownSymbol(c))?;
            value = value.wrapping_mul(base).wrapping_add(u64::from(digit));
            empty = false;
        }
        if empty {
            return Err(ParseError::EmptyInput);
        }

        let value = if negative { value.wrapping_neg() } else { value };
        Ok(value as i64)
    }

    /// Decode a coordinate pair by re-running the alternating narrowing the
    /// encoder performed, longitude first.
    ///
    /// Each coordinate is the midpoint of its final interval. Odd-length
    /// strings are valid; the longitude axis is then one digit ahead.
    pub fn parse_lat_lon(&self, s: &str) -> Result<LatLon, ParseError> {
        if s.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let base = self.alphabet.base();
        let mut lat = Span::latitude();
        let mut lon = Span::longitude();
        let mut lon_turn = true;
        for c in s.chars() {
            let digit = self
                .alphabet
                .digit_of(c)
                .ok_or(ParseError::UnknownSymbol(c))?;
            if lon_turn {
                lon.select(digit, base);
            } else {
                lat.select(digit, base);
            }
            lon_turn = !lon_turn;
        }

        Ok(LatLon {
            latitude: lat.midpoint(),
            longitude: lon.midpoint(),
            precision: lat.width().max(lon.width()),
        })
    }
}
