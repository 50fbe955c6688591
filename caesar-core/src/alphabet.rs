//! Ordered symbol set and the shift (Caesar) transform over it

use std::collections::HashMap;

use crate::error::{Error, Result};

const RUSSIAN_UPPER: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЪЫЬЭЮЯ";
const RUSSIAN_LOWER: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";
const ENGLISH_UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ENGLISH_LOWER: &str = "abcdefghijklmnopqrstuvwxyz";

/// Space plus the punctuation that takes part in the shift
pub const PUNCTUATION: &str = " .,\"':-!?";

/// An ordered sequence of unique symbols.
///
/// Each symbol has a stable index in `[0, len)`. Characters outside the
/// alphabet pass through [`Alphabet::encrypt`] and [`Alphabet::decrypt`]
/// untouched.
#[derive(Clone, Debug)]
pub struct Alphabet {
    symbols: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Builds an alphabet, rejecting empty input and repeated symbols
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Result<Self> {
        let symbols: Vec<char> = symbols.into_iter().collect();
        if symbols.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        let mut index = HashMap::with_capacity(symbols.len());
        for (i, &c) in symbols.iter().enumerate() {
            if index.insert(c, i).is_some() {
                return Err(Error::DuplicateSymbol(c));
            }
        }

        Ok(Self { symbols, index })
    }

    /// Russian upper case, lower case, then [`PUNCTUATION`] (75 symbols)
    pub fn russian() -> Self {
        Self::from_known(&[RUSSIAN_UPPER, RUSSIAN_LOWER, PUNCTUATION])
    }

    /// English upper case, lower case, then [`PUNCTUATION`] (61 symbols)
    pub fn english() -> Self {
        Self::from_known(&[ENGLISH_UPPER, ENGLISH_LOWER, PUNCTUATION])
    }

    fn from_known(parts: &[&str]) -> Self {
        let symbols: Vec<char> = parts.iter().flat_map(|p| p.chars()).collect();
        let index = symbols.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { symbols, index }
    }

    /// Size of the key space
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; construction rejects empty alphabets
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    pub fn index_of(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Symbol at `i mod len`
    pub fn symbol_at(&self, i: usize) -> char {
        self.symbols[i % self.symbols.len()]
    }

    /// Maps any integer shift into `[0, len)`
    pub fn normalize_shift(&self, shift: i64) -> usize {
        shift.rem_euclid(self.symbols.len() as i64) as usize
    }

    /// Shifts every alphabet symbol forward by `shift`
    pub fn encrypt(&self, text: &str, shift: i64) -> String {
        let shift = self.normalize_shift(shift);
        self.rotate(text, shift)
    }

    /// Shifts every alphabet symbol backward by `shift`
    pub fn decrypt(&self, text: &str, shift: i64) -> String {
        let shift = self.normalize_shift(shift);
        self.rotate(text, (self.len() - shift) % self.len())
    }

    /// Forward rotation by an already normalized amount
    fn rotate(&self, text: &str, by: usize) -> String {
        if by == 0 {
            return text.to_string();
        }

        let len = self.len();
        text.chars()
            .map(|c| match self.index.get(&c) {
                Some(&i) => self.symbols[(i + by) % len],
                None => c,
            })
            .collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::russian()
    }
}
