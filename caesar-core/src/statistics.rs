//! Frequency analysis: pick the shift whose decryption looks most like the
//! reference language.

use crate::alphabet::Alphabet;
use crate::frequency::{FrequencyTable, observed_frequencies};
use crate::scan::{Candidate, Execution, best_shift};

pub struct FrequencyAnalysis<'a> {
    alphabet: &'a Alphabet,
    reference: &'a FrequencyTable,
    execution: Execution,
}

impl<'a> FrequencyAnalysis<'a> {
    pub fn new(alphabet: &'a Alphabet, reference: &'a FrequencyTable) -> Self {
        Self {
            alphabet,
            reference,
            execution: Execution::default(),
        }
    }

    pub fn with_execution(mut self, execution: Execution) -> Self {
        self.execution = execution;
        self
    }

    /// Finds the shift with the smallest deviation from the reference table.
    ///
    /// Always returns a candidate; score is the sum of squared differences.
    /// A decryption without letters or spaces observes nothing, so its
    /// deviation is the sum of the squared reference values.
    pub fn crack(&self, ciphertext: &str) -> Candidate<f64> {
        best_shift(
            self.alphabet,
            ciphertext,
            self.execution,
            |text| self.reference.deviation(&observed_frequencies(text)),
            // lower deviation is better
            |a: &f64, b: &f64| b.total_cmp(a),
        )
    }
}

/// Frequency-analysis crack returning only the decrypted text
pub fn frequency_crack(alphabet: &Alphabet, ciphertext: &str, reference: &FrequencyTable) -> String {
    FrequencyAnalysis::new(alphabet, reference).crack(ciphertext).text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::language::Language;

    // 800 characters of ordinary prose; the full text recovers every shift
    const RUSSIAN_SAMPLE: &str = "Однажды весной, в час небывало жаркого заката, \
        в Москве, на Патриарших прудах, появились два гражданина. Первый из них, \
        одетый в летнюю серенькую пару, был маленького роста, упитан, лыс, свою \
        приличную шляпу пирожком нес в руке, а на хорошо выбритом лице его \
        помещались сверхъестественных размеров очки в черной роговой оправе. \
        Второй, плечистый, рыжеватый, вихрастый молодой человек в заломленной на \
        затылок клетчатой кепке, был в ковбойке, жеваных белых брюках и в черных \
        тапочках. Пуста была аллея, и никто не мешал им говорить о том, что \
        занимало их обоих. Над прудом стояла тишина, и только изредка где то \
        вдали звенел трамвай, а по воде медленно плыли листья и тени старых лип. \
        Они сели на скамейку лицом к пруду и спиной к улице, и разговор их \
        потек спокойно и неторопливо, как течет река в летний день.";

    const ENGLISH_SAMPLE: &str = "It was a bright cold day in April, and the \
        clocks were striking thirteen. The old man walked slowly along the river \
        and watched the boats drift past the stone bridge while the children \
        played near the water. He thought about the long winter that had finally \
        ended and about the friends he had not seen for many years. In the \
        evening the town grew quiet, the lights came on in the windows one after \
        another, and the smell of fresh bread drifted from the bakery at the \
        corner of the square where the market had stood since his childhood.";

    #[test]
    fn test_sample_is_long_enough() {
        assert!(RUSSIAN_SAMPLE.chars().count() >= 500);
    }

    #[test]
    fn test_recovers_every_russian_shift() {
        let alphabet = Alphabet::russian();
        let reference = FrequencyTable::russian();
        let analysis = FrequencyAnalysis::new(&alphabet, &reference);

        for shift in 0..alphabet.len() {
            let cipher = alphabet.encrypt(RUSSIAN_SAMPLE, shift as i64);
            let best = analysis.crack(&cipher);
            assert_eq!(best.shift, shift, "wrong shift for key {}", shift);
            assert_eq!(best.text, RUSSIAN_SAMPLE);
        }
    }

    /// Correct recoveries over `window`-character slices of the sample, one
    /// slice starting every 10 characters, each encrypted with every shift
    fn window_recoveries(window: usize) -> (usize, usize) {
        let alphabet = Alphabet::russian();
        let reference = FrequencyTable::russian();
        let analysis = FrequencyAnalysis::new(&alphabet, &reference);
        let chars: Vec<char> = RUSSIAN_SAMPLE.chars().collect();

        let mut recovered = 0;
        let mut total = 0;
        for start in (0..=chars.len() - window).step_by(10) {
            let plain: String = chars[start..start + window].iter().collect();
            for shift in 0..alphabet.len() {
                let cipher = alphabet.encrypt(&plain, shift as i64);
                if analysis.crack(&cipher).shift == shift {
                    recovered += 1;
                }
                total += 1;
            }
        }
        (recovered, total)
    }

    /// 15 characters is the shortest input that recovers the right shift at
    /// least 95% of the time with the Russian table (about 96% here).
    /// At 10 characters the rate falls to about 84%.
    #[test]
    fn test_minimum_sample_size() {
        let (recovered, total) = window_recoveries(15);
        assert_eq!(total, 80 * 75);
        assert!(recovered * 100 >= total * 95, "{}/{} at 15 chars", recovered, total);

        let (recovered, total) = window_recoveries(10);
        assert!(recovered * 100 < total * 95, "{}/{} at 10 chars", recovered, total);
    }

    #[test]
    fn test_alternate_language_model() {
        let language = Language::English;
        let alphabet = language.alphabet();
        let reference = language.frequencies();

        let cipher = alphabet.encrypt(ENGLISH_SAMPLE, 19);
        assert_eq!(frequency_crack(&alphabet, &cipher, &reference), ENGLISH_SAMPLE);
    }

    #[test]
    fn test_no_countable_symbols_returns_defined_result() {
        let alphabet = Alphabet::russian();
        let reference = FrequencyTable::russian();

        let expected: f64 = reference.iter().map(|(_, f)| f * f).sum();

        // digits and '#' are outside the alphabet: every shift sees the same text
        for cipher in ["", "12345#67890"] {
            let best = FrequencyAnalysis::new(&alphabet, &reference).crack(cipher);
            assert_eq!(best.shift, 0);
            assert_eq!(best.text, cipher);
            assert!((best.score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let alphabet = Alphabet::russian();
        let reference = FrequencyTable::russian();
        let cipher = alphabet.encrypt(RUSSIAN_SAMPLE, 27);

        let sequential = FrequencyAnalysis::new(&alphabet, &reference).crack(&cipher);
        let parallel = FrequencyAnalysis::new(&alphabet, &reference)
            .with_execution(Execution::Parallel)
            .crack(&cipher);

        assert_eq!(sequential, parallel);
        assert_eq!(parallel.shift, 27);
    }
}
