use crate::alphabet::{Alphabet, ConfigError};
use log::debug;

/// An immutable codec over one alphabet.
///
/// A coder is a pure function object: it holds no per-call state, so a single
/// instance can be shared freely across threads as long as each call uses its
/// own output buffer.
#[derive(Debug, Clone)]
pub struct Coder {
    pub(crate) alphabet: Alphabet,
    pub(crate) signed: bool,
}

impl Coder {
    /// Start assembling a coder over the given alphabet.
    pub fn builder(alphabet: &str) -> CoderBuilder {
        CoderBuilder {
            alphabet: alphabet.to_owned(),
            aliases: Vec::new(),
            signed: false,
        }
    }

    pub fn base(&self) -> u32 {
        self.alphabet.base()
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn is_signed(&self) -> bool {
        self.signed
    }
}

/// Accumulates coder configuration; nothing is validated until [`build`].
///
/// [`build`]: CoderBuilder::build
#[derive(Debug, Clone)]
pub struct CoderBuilder {
    alphabet: String,
    aliases: Vec<(char, char)>,
    signed: bool,
}

impl CoderBuilder {
    /// Register a decode-only alias: `input` will decode to the digit value
    /// of the primary symbol `target`. Repeatable.
    pub fn alias(mut self, input: char, target: char) -> Self {
        self.aliases.push((input, target));
        self
    }

    /// Enable the leading `-` marker for negative integers. Unsigned coders
    /// encode the raw two's-complement bit pattern instead.
    pub fn signed(mut self, signed: bool) -> Self {
        self.signed = signed;
        self
    }

    /// Validate the whole configuration and construct the coder.
    ///
    /// Returns the first configuration error: an invalid alphabet, then
    /// aliases in registration order.
    pub fn build(self) -> Result<Coder, ConfigError> {
        let alphabet = Alphabet::with_aliases(&self.alphabet, &self.aliases)?;
        debug!(
            "built coder: base {}, {} aliases, signed: {}",
            alphabet.base(),
            self.aliases.len(),
            self.signed
        );
        Ok(Coder {
            alphabet,
            signed: self.signed,
        })
    }
}

/// One axis of the coordinate codec: a half-open interval narrowed to one of
/// `base` equal parts per digit.
///
/// Encode and decode perform the identical arithmetic on this type, so both
/// directions reproduce the same interval sequence.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Span {
    low: f64,
    width: f64,
}

impl Span {
    pub(crate) fn latitude() -> Self {
        Span {
            low: crate::LAT_LOW,
            width: crate::LAT_WIDTH,
        }
    }

    pub(crate) fn longitude() -> Self {
        Span {
            low: crate::LON_LOW,
            width: crate::LON_WIDTH,
        }
    }

    /// Narrow to the part containing `value` and return the chosen digit.
    ///
    /// The part is chosen by `floor((value - low) / part_width)`, clamped so
    /// that the closed upper boundary (latitude 90) falls into the top part.
    pub(crate) fn narrow_to(&mut self, value: f64, base: u32) -> u32 {
        let part = self.width / f64::from(base);
        let digit = (((value - self.low) / part) as i64).clamp(0, i64::from(base) - 1) as u32;
        self.select(digit, base);
        digit
    }

    /// Narrow to the `digit`-th of `base` equal parts.
    pub(crate) fn select(&mut self, digit: u32, base: u32) {
        let part = self.width / f64::from(base);
        self.low += f64::from(digit) * part;
        self.width = part;
    }

    pub(crate) fn midpoint(&self) -> f64 {
        self.low + self.width / 2.0
    }

    pub(crate) fn width(&self) -> f64 {
        self.width
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn build_validates_alphabet_first() {
        assert_eq!(
            Coder::builder("0").alias('x', '0').build().unwrap_err(),
            ConfigError::AlphabetTooSmall
        );
    }

    #[test]
    fn build_validates_aliases_in_registration_order() {
        assert_eq!(
            Coder::builder("01")
                .alias('x', '9')
                .alias('0', '1')
                .build()
                .unwrap_err(),
            ConfigError::UnknownAliasTarget('9')
        );
    }

    #[test]
    fn narrowing_selects_the_containing_part() {
        let mut lon = Span::longitude();
        // [-180, 180) split into 16 parts of 22.5; 0.0 sits in part 8
        assert_eq!(lon.narrow_to(0.0, 16), 8);
        assert_eq!(lon.width(), 22.5);
        assert_eq!(lon.midpoint(), 11.25);
    }

    #[test]
    fn closed_upper_boundary_clamps_to_top_part() {
        let mut lat = Span::latitude();
        assert_eq!(lat.narrow_to(90.0, 16), 15);
        assert_eq!(lat.narrow_to(90.0, 16), 15);
    }
}
