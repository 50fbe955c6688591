//! Exhaustive key-space scan shared by both crackers.
//!
//! Every shift in `[0, L)` is decrypted and scored independently. The winner
//! is the best score; among equal scores the lowest shift wins. Scores are
//! always reduced in shift order, so a parallel scan picks the same winner as
//! a sequential one regardless of which worker finishes first.

use std::cmp::Ordering;

use rayon::prelude::*;

use crate::alphabet::Alphabet;

/// A cryptanalysis result: chosen shift, its decryption and its score.
///
/// Score meaning depends on the cracker and is not comparable across them.
#[derive(Clone, Debug, PartialEq)]
pub struct Candidate<S> {
    pub shift: usize,
    pub text: String,
    pub score: S,
}

/// How the key space is walked
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Execution {
    #[default]
    Sequential,
    /// One rayon task per shift
    Parallel,
}

/// Scores every shift and returns the best candidate.
///
/// `rank(a, b)` returns `Greater` when `a` is strictly better than `b`.
pub(crate) fn best_shift<S, F, R>(
    alphabet: &Alphabet,
    ciphertext: &str,
    execution: Execution,
    score: F,
    rank: R,
) -> Candidate<S>
where
    S: Send,
    F: Fn(&str) -> S + Sync,
    R: Fn(&S, &S) -> Ordering,
{
    let len = alphabet.len();
    let score_shift = |shift: usize| score(&alphabet.decrypt(ciphertext, shift as i64));

    let mut scores: Vec<S> = match execution {
        Execution::Sequential => (0..len).map(score_shift).collect(),
        Execution::Parallel => (0..len).into_par_iter().map(score_shift).collect(),
    };

    // strict improvement only: the first shift reaching the best score keeps it
    let mut best = 0;
    for shift in 1..scores.len() {
        if rank(&scores[shift], &scores[best]) == Ordering::Greater {
            best = shift;
        }
    }

    Candidate {
        shift: best,
        text: alphabet.decrypt(ciphertext, best as i64),
        score: scores.swap_remove(best),
    }
}
