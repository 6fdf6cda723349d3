use docpipe_math::{mean, round_f64};
use docpipe_types::{AVERAGE_DECIMALS, RATIO_DECIMALS, Readability};

use crate::CorpusIndex;

/// Divisor applied to the average word length in the complexity score.
const WORD_LENGTH_SCALE: f64 = 5.0;

/// Corpus readability summary.
///
/// Both averages are means of per-document means. The complexity score is
/// computed from the unrounded averages, then rounded.
pub fn readability(index: &CorpusIndex<'_>) -> Readability {
    let sentence: Vec<f64> = index.profiles().iter().map(|p| p.avg_sentence_len).collect();
    let word: Vec<f64> = index.profiles().iter().map(|p| p.avg_word_len).collect();

    let avg_sentence_length = mean(&sentence);
    let avg_word_length = mean(&word);
    let complexity_score = avg_sentence_length * (avg_word_length / WORD_LENGTH_SCALE);

    Readability {
        avg_sentence_length: round_f64(avg_sentence_length, AVERAGE_DECIMALS),
        avg_word_length: round_f64(avg_word_length, AVERAGE_DECIMALS),
        complexity_score: round_f64(complexity_score, RATIO_DECIMALS),
    }
}
