//! Dictionary-driven brute force over every shift.
//!
//! Each decryption is scored by how many of its whitespace tokens are
//! dictionary words. The highest count wins, ties going to the lowest shift.

use crate::alphabet::Alphabet;
use crate::dictionary::Dictionary;
use crate::scan::{Candidate, Execution, best_shift};

/// What to return when no shift produces a single dictionary word
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoMatchPolicy {
    /// Shift 0 with empty text and score 0
    #[default]
    Historical,
    /// Shift 0 with its decryption (the ciphertext itself) and score 0
    BestEffort,
    /// No candidate at all
    Reject,
}

pub struct BruteForce<'a> {
    alphabet: &'a Alphabet,
    dictionary: &'a Dictionary,
    policy: NoMatchPolicy,
    execution: Execution,
}

impl<'a> BruteForce<'a> {
    pub fn new(alphabet: &'a Alphabet, dictionary: &'a Dictionary) -> Self {
        Self {
            alphabet,
            dictionary,
            policy: NoMatchPolicy::default(),
            execution: Execution::default(),
        }
    }

    pub fn with_policy(mut self, policy: NoMatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Finds the shift whose decryption contains the most dictionary words.
    ///
    /// Score is the match count. When every shift scores 0 the result follows
    /// the configured [`NoMatchPolicy`]; `None` only under `Reject`.
    pub fn crack(&self, ciphertext: &str) -> Option<Candidate<usize>> {
        let best = best_shift(
            self.alphabet,
            ciphertext,
            self.execution,
            |text| self.dictionary.count_matches(text),
            |a: &usize, b: &usize| a.cmp(b),
        );

        if best.score > 0 {
            return Some(best);
        }

        match self.policy {
            NoMatchPolicy::Historical => Some(Candidate {
                shift: 0,
                text: String::new(),
                score: 0,
            }),
            NoMatchPolicy::BestEffort => Some(best),
            NoMatchPolicy::Reject => None,
        }
    }
}

/// Brute-force crack with the historical no-match behaviour (empty string)
pub fn brute_force_crack(alphabet: &Alphabet, ciphertext: &str, dictionary: &Dictionary) -> String {
    BruteForce::new(alphabet, dictionary)
        .crack(ciphertext)
        .map(|candidate| candidate.text)
        .unwrap_or_default()
}
