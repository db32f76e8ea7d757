use crate::traits::{Decryptor, Encryptor};

/// Reduce any shift modulo 26 into `[0, 25]`.
///
/// Negative shifts keep their meaning: `-1` becomes `25`. Total for every
/// `i64`, including the extremes.
pub fn normalize_shift(raw: i64) -> u8 {
    (((raw % 26) + 26) % 26) as u8
}

/// Shift every ASCII letter in `text` by `shift` positions, wrapping at the
/// alphabet boundary. Case is preserved and every non-letter passes through
/// unchanged.
///
/// Decoding is the same operation with the shift negated.
pub fn transform(text: &str, shift: i64) -> String {
    let shift = normalize_shift(shift);

    text.chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                let rotated = ((c as u8 - base + shift) % 26) + base;
                rotated as char
            } else {
                c
            }
        })
        .collect()
}

/// Caesar cipher with a fixed signed shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: i64,
}

impl Caesar {
    pub fn new(shift: i64) -> Self {
        Caesar { shift }
    }
}

impl Encryptor for Caesar {
    fn encrypt(&self, message: &str) -> String {
        transform(message, self.shift)
    }
}

impl Decryptor for Caesar {
    fn decrypt(&self, message: &str) -> String {
        // Negate after normalizing so i64::MIN cannot overflow.
        transform(message, -i64::from(normalize_shift(self.shift)))
    }
}
