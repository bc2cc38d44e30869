//! Ready-made coders for well-known alphabets.
//!
//! Each constructor builds from a known-good constant configuration, so
//! construction failures are internal defects rather than caller errors.

use crate::coder::Coder;

/// Uppercase hexadecimal. Lowercase digits decode via aliases, as do the
/// lookalikes `o`/`O` for `0` and `l`/`L` for `1`.
pub fn hex() -> Coder {
    let mut builder = Coder::builder("0123456789ABCDEF");
    for upper in 'A'..='F' {
        builder = builder.alias(upper.to_ascii_lowercase(), upper);
    }
    for (input, target) in [('O', '0'), ('o', '0'), ('l', '1'), ('L', '1')] {
        builder = builder.alias(input, target);
    }
    builder.build().expect("hex configuration is valid")
}

/// Signed base 10; agrees with `i64::to_string` in both directions.
pub fn decimal() -> Coder {
    Coder::builder("0123456789")
        .signed(true)
        .build()
        .expect("decimal configuration is valid")
}

/// Crockford's base 32: `I`, `L`, `O` and `U` are excluded from the
/// alphabet, and the standard decode aliases are registered (lowercase
/// forms, `o`/`O` for `0`, `i`/`I`/`l`/`L` for `1`).
pub fn crockford32() -> Coder {
    const SYMBOLS: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
    let mut builder = Coder::builder(SYMBOLS);
    for upper in SYMBOLS.chars().filter(char::is_ascii_alphabetic) {
        builder = builder.alias(upper.to_ascii_lowercase(), upper);
    }
    for (input, target) in [
        ('O', '0'),
        ('o', '0'),
        ('I', '1'),
        ('i', '1'),
        ('L', '1'),
        ('l', '1'),
    ] {
        builder = builder.alias(input, target);
    }
    builder.build().expect("crockford configuration is valid")
}
