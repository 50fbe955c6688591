//! core functionality for enciphering text with a shift (Caesar) cipher
//! over a configurable alphabet, and for recovering the shift without a key
//!
//! # Modules
//!
//! - `alphabet`: ordered symbol set, encrypt/decrypt
//! - `frequency`: reference frequency tables and deviation scoring
//! - `language`: built-in alphabet + frequency presets
//! - `dictionary`: word list for brute force
//! - `scan`: shared key-space scan and result type
//! - `brute_force`: dictionary-match cracker
//! - `statistics`: frequency-analysis cracker

pub mod alphabet;
pub mod brute_force;
pub mod dictionary;
pub mod error;
pub mod frequency;
pub mod language;
pub mod scan;
pub mod statistics;

// Re-export commonly used items
pub use alphabet::{Alphabet, PUNCTUATION};
pub use brute_force::{BruteForce, NoMatchPolicy, brute_force_crack};
pub use dictionary::Dictionary;
pub use error::{Error, Result};
pub use frequency::{FrequencyTable, ObservedFrequencies, observed_frequencies};
pub use language::Language;
pub use scan::{Candidate, Execution};
pub use statistics::{FrequencyAnalysis, frequency_crack};
