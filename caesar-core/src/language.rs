//! Built-in language models: an alphabet paired with its reference frequencies

use crate::alphabet::Alphabet;
use crate::frequency::FrequencyTable;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Language {
    #[default]
    Russian,
    English,
}

impl Language {
    pub fn alphabet(self) -> Alphabet {
        match self {
            Language::Russian => Alphabet::russian(),
            Language::English => Alphabet::english(),
        }
    }

    pub fn frequencies(self) -> FrequencyTable {
        match self {
            Language::Russian => FrequencyTable::russian(),
            Language::English => FrequencyTable::english(),
        }
    }
}
