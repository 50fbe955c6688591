//! Reference symbol frequencies and the observed-vs-expected deviation.
//!
//! Both built-in tables follow the same convention: letter frequencies sum to
//! about 1.0 over letters alone, and the space carries its own share on top.

use std::collections::{HashMap, HashSet};

use crate::error::{Error, Result};

const RUSSIAN: [(char, f64); 34] = [
    ('о', 0.1097),
    ('е', 0.0845),
    ('а', 0.0801),
    ('и', 0.0735),
    ('н', 0.0670),
    ('т', 0.0626),
    ('с', 0.0547),
    ('р', 0.0473),
    ('в', 0.0454),
    ('л', 0.0440),
    ('к', 0.0349),
    ('м', 0.0321),
    ('д', 0.0298),
    ('п', 0.0281),
    ('у', 0.0262),
    ('я', 0.0201),
    ('ы', 0.0190),
    ('ь', 0.0174),
    ('г', 0.0169),
    ('з', 0.0165),
    ('б', 0.0159),
    ('ч', 0.0144),
    ('й', 0.0121),
    ('х', 0.0097),
    ('ж', 0.0094),
    ('ш', 0.0073),
    ('ю', 0.0064),
    ('ц', 0.0048),
    ('щ', 0.0036),
    ('э', 0.0032),
    ('ф', 0.0026),
    ('ъ', 0.0004),
    ('ё', 0.0004),
    (' ', 0.1750),
];

const ENGLISH: [(char, f64); 27] = [
    ('e', 0.1270),
    ('t', 0.0906),
    ('a', 0.0817),
    ('o', 0.0751),
    ('i', 0.0697),
    ('n', 0.0675),
    ('s', 0.0633),
    ('h', 0.0609),
    ('r', 0.0599),
    ('d', 0.0425),
    ('l', 0.0403),
    ('c', 0.0278),
    ('u', 0.0276),
    ('m', 0.0241),
    ('w', 0.0236),
    ('f', 0.0223),
    ('g', 0.0202),
    ('y', 0.0197),
    ('p', 0.0193),
    ('b', 0.0129),
    ('v', 0.0098),
    ('k', 0.0077),
    ('j', 0.0015),
    ('x', 0.0015),
    ('q', 0.0010),
    ('z', 0.0007),
    (' ', 0.1800),
];

/// Relative frequencies measured over a piece of text.
///
/// Symbols that never occurred are absent and read as 0.
pub type ObservedFrequencies = HashMap<char, f64>;

/// Immutable symbol -> expected relative frequency mapping
#[derive(Clone, Debug)]
pub struct FrequencyTable {
    entries: Vec<(char, f64)>,
}

impl FrequencyTable {
    /// Builds a table; values must be finite and non-negative, symbols unique
    pub fn new<I: IntoIterator<Item = (char, f64)>>(entries: I) -> Result<Self> {
        let mut seen = HashSet::new();
        let mut table = Vec::new();

        for (symbol, value) in entries {
            if !value.is_finite() || value < 0.0 {
                return Err(Error::InvalidFrequency { symbol, value });
            }
            if !seen.insert(symbol) {
                return Err(Error::DuplicateSymbol(symbol));
            }
            table.push((symbol, value));
        }

        Ok(Self { entries: table })
    }

    /// Russian letters plus space
    pub fn russian() -> Self {
        Self { entries: RUSSIAN.to_vec() }
    }

    /// English letters plus space
    pub fn english() -> Self {
        Self { entries: ENGLISH.to_vec() }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Expected frequency of `symbol`, if the table models it
    pub fn get(&self, symbol: char) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == symbol)
            .map(|&(_, value)| value)
    }

    /// Entries in table order
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of squared differences between this table and `observed`.
    ///
    /// Only symbols of this table contribute; observed symbols it does not
    /// model are ignored.
    pub fn deviation(&self, observed: &ObservedFrequencies) -> f64 {
        self.entries
            .iter()
            .map(|(symbol, expected)| {
                let seen = observed.get(symbol).copied().unwrap_or(0.0);
                (expected - seen).powi(2)
            })
            .sum()
    }
}

impl Default for FrequencyTable {
    fn default() -> Self {
        Self::russian()
    }
}

/// Relative frequency of each letter and the space in `text`, case-folded.
///
/// Digits, punctuation and other symbols count toward neither the numerator
/// nor the total. Text with no letters or spaces yields an empty map.
pub fn observed_frequencies(text: &str) -> ObservedFrequencies {
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut total = 0usize;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_alphabetic() || c == ' ' {
            *counts.entry(c).or_insert(0) += 1;
            total += 1;
        }
    }

    if total == 0 {
        return ObservedFrequencies::new();
    }

    counts
        .into_iter()
        .map(|(c, n)| (c, n as f64 / total as f64))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_letters_sum_to_one() {
        for table in [FrequencyTable::russian(), FrequencyTable::english()] {
            let letters: f64 = table.iter().filter(|(c, _)| *c != ' ').map(|(_, f)| f).sum();
            assert!((letters - 1.0).abs() < 0.01, "letters sum {}", letters);
            assert!(table.get(' ').is_some());
        }
        assert_eq!(FrequencyTable::russian().len(), 34);
    }

    #[test]
    fn test_rejects_bad_entries() {
        assert!(matches!(
            FrequencyTable::new([('a', -0.1)]),
            Err(Error::InvalidFrequency { symbol: 'a', .. })
        ));
        assert!(matches!(
            FrequencyTable::new([('a', f64::NAN)]),
            Err(Error::InvalidFrequency { .. })
        ));
        assert!(matches!(
            FrequencyTable::new([('a', 0.5), ('a', 0.5)]),
            Err(Error::DuplicateSymbol('a'))
        ));
    }

    #[test]
    fn test_observed_ignores_punctuation_and_folds_case() {
        let observed = observed_frequencies("Аа б, 42!");
        // counted: 'а', 'а', ' ', 'б', ' ' -> 5 symbols
        assert_eq!(observed.len(), 3);
        assert!((observed[&'а'] - 0.4).abs() < 1e-12);
        assert!((observed[&' '] - 0.4).abs() < 1e-12);
        assert!((observed[&'б'] - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_observed_without_letters_is_empty() {
        assert!(observed_frequencies("").is_empty());
        assert!(observed_frequencies("12.,!?-").is_empty());
    }

    #[test]
    fn test_deviation() {
        let table = FrequencyTable::new([('a', 0.5), ('b', 0.5)]).unwrap();

        let exact = observed_frequencies("abab");
        assert!(table.deviation(&exact) < 1e-12);

        // 'c' is not modeled and does not add to the sum
        let skewed = observed_frequencies("aacc");
        // a: (0.5 - 0.5)^2, b: (0.5 - 0)^2
        assert!((table.deviation(&skewed) - 0.25).abs() < 1e-12);

        // nothing observed: every expected value counts in full
        assert!((table.deviation(&ObservedFrequencies::new()) - 0.5).abs() < 1e-12);
    }
}
