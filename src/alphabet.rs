use std::collections::HashMap;

/// Errors that can occur while assembling an alphabet.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("alphabet must contain at least two symbols")]
    AlphabetTooSmall,
    #[error("symbol {0:?} appears more than once in the alphabet")]
    RepeatedSymbol(char),
    #[error("alias target {0:?} is not an alphabet symbol")]
    UnknownAliasTarget(char),
    #[error("alias {0:?} is already mapped to a digit")]
    DuplicateAlias(char),
}

/// An ordered set of distinct symbols defining a base-N numeral system.
///
/// The position of a symbol in the alphabet is its digit value. An alphabet
/// may additionally carry aliases: extra input characters that decode to the
/// digit value of a primary symbol. Aliases are accepted on input only and
/// are never produced when encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct Alphabet {
    symbols: Vec<char>,
    /// Merged char-to-digit lookup, primaries and aliases alike.
    digits: HashMap<char, u32>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> Result<Self, ConfigError> {
        Self::with_aliases(symbols, &[])
    }

    /// Build an alphabet along with decode aliases, each an
    /// `(input, target)` pair where `target` must be a primary symbol.
    ///
    /// Primaries are mapped first; an alias whose input character is already
    /// mapped (as a primary or as an earlier alias) is rejected, since it
    /// would shadow unambiguous decoding.
    pub fn with_aliases(symbols: &str, aliases: &[(char, char)]) -> Result<Self, ConfigError> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.len() < 2 {
            return Err(ConfigError::AlphabetTooSmall);
        }

        let mut digits = HashMap::with_capacity(symbols.len() + aliases.len());
        for (digit, &symbol) in symbols.iter().enumerate() {
            if digits.insert(symbol, digit as u32).is_some() {
                return Err(ConfigError::RepeatedSymbol(symbol));
            }
        }

        for &(input, target) in aliases {
            let digit = symbols
                .iter()
                .position(|&s| s == target)
                .ok_or(ConfigError::UnknownAliasTarget(target))? as u32;
            if digits.contains_key(&input) {
                return Err(ConfigError::DuplicateAlias(input));
            }
            digits.insert(input, digit);
        }

        Ok(Self { symbols, digits })
    }

    pub fn base(&self) -> u32 {
        self.symbols.len() as u32
    }

    /// Digit value of an input character, alias-aware. `None` for characters
    /// that are neither primary symbols nor aliases.
    pub fn digit_of(&self, symbol: char) -> Option<u32> {
        self.digits.get(&symbol).copied()
    }

    /// Primary symbol for a digit value.
    ///
    /// Panics if `digit >= base`; digits only ever come from this alphabet's
    /// own arithmetic, so an out-of-range digit is an internal defect.
    pub fn symbol_of(&self, digit: u32) -> char {
        self.symbols[digit as usize]
    }
}
