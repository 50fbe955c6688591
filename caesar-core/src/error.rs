//! Error types for the caesar-core library.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while building alphabets and tables or loading a dictionary.
///
/// Encryption, decryption and both crackers never fail; only the data they
/// are configured with can be rejected.
#[derive(Debug, Error)]
pub enum Error {
    /// Alphabet was built from zero symbols.
    #[error("alphabet must contain at least one symbol")]
    EmptyAlphabet,

    /// A symbol occurs twice in an alphabet or frequency table.
    #[error("symbol {0:?} occurs more than once")]
    DuplicateSymbol(char),

    /// A reference frequency is negative, NaN or infinite.
    #[error("frequency for {symbol:?} must be finite and non-negative, got {value}")]
    InvalidFrequency { symbol: char, value: f64 },

    /// The dictionary file is missing or cannot be opened.
    #[error("dictionary unavailable at {}", path.display())]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The dictionary was opened but reading it failed part way.
    #[error("failed to read dictionary")]
    DictionaryRead(#[source] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
