use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::toolkit::{TaggingSource, TextAdapter};
use crate::HP;

static PUNCTUATION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());

static VOWEL_GROUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[aeiouyàáâäèéêëìíîïòóôöùúûü]+").unwrap());

const POSITIVE_WORDS: &[&str] = &[
    "buono",
    "bello",
    "fantastico",
    "eccellente",
    "meraviglioso",
    "positivo",
    "felice",
    "gioia",
    "bene",
    "perfetto",
];

const NEGATIVE_WORDS: &[&str] = &[
    "cattivo",
    "brutto",
    "terribile",
    "orribile",
    "pessimo",
    "negativo",
    "triste",
    "dolore",
    "male",
    "difettoso",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadabilitySource {
    /// Flesch reading ease over syllable counts.
    Flesch,
    /// Sentence and word length approximation used without a toolkit.
    Approximate,
    /// Not enough text to measure.
    Default,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisMetrics {
    pub total_words: usize,
    pub total_sentences: usize,
    pub avg_sentence_length: f64,
    pub unique_vocab: usize,
    pub lexical_richness: f64,
    pub adjectives: usize,
    pub adverbs: usize,
    pub verbs: usize,
    pub nouns: usize,
    pub readability: f64,
    pub syntactic_complexity: f64,
    pub tone_positive: f64,
    pub tone_negative: f64,
    pub tagging: TaggingSource,
    pub readability_source: ReadabilitySource,
}

impl AnalysisMetrics {
    #[tracing::instrument(skip_all, fields(chars = text.len()))]
    pub fn compute(text: &str, adapter: &TextAdapter) -> Self {
        let stripped = PUNCTUATION_RE.replace_all(text, "");
        let words = adapter.words(&stripped);
        let total_sentences = adapter.sentence_count(text);
        let total_words = words.len();

        let avg_sentence_length = ratio(total_words, total_sentences);

        let lowered: Vec<String> = words.iter().map(|w| w.to_lowercase()).collect();
        let unique_vocab = lowered.iter().collect::<HashSet<_>>().len();
        let lexical_richness = ratio(unique_vocab, total_words);

        let (pos, tagging) = adapter.pos_counts(&words);

        let (readability, readability_source) = if total_words == 0 || total_sentences == 0 {
            (HP.readability_default, ReadabilitySource::Default)
        } else if adapter.has_toolkit() {
            let syllables = words.iter().map(|w| count_syllables(w)).sum();
            (
                flesch_reading_ease(total_words, total_sentences, syllables),
                ReadabilitySource::Flesch,
            )
        } else {
            let letters: usize = words.iter().map(|w| w.chars().count()).sum();
            (
                approximate_readability(avg_sentence_length, ratio(letters, total_words)),
                ReadabilitySource::Approximate,
            )
        };

        let positive = lowered
            .iter()
            .filter(|w| POSITIVE_WORDS.contains(&w.as_str()))
            .count();
        let negative = lowered
            .iter()
            .filter(|w| NEGATIVE_WORDS.contains(&w.as_str()))
            .count();

        tracing::debug!(
            total_words,
            total_sentences,
            ?tagging,
            ?readability_source,
            "metrics computed"
        );

        Self {
            total_words,
            total_sentences,
            avg_sentence_length,
            unique_vocab,
            lexical_richness,
            adjectives: pos.adjectives,
            adverbs: pos.adverbs,
            verbs: pos.verbs,
            nouns: pos.nouns,
            readability,
            syntactic_complexity: avg_sentence_length,
            tone_positive: ratio(positive, total_words),
            tone_negative: ratio(negative, total_words),
            tagging,
            readability_source,
        }
    }

    /// Fraction of words tagged (or estimated) as adjectives.
    pub fn adjective_ratio(&self) -> f64 {
        ratio(self.adjectives, self.total_words)
    }

    pub fn verb_ratio(&self) -> f64 {
        ratio(self.verbs, self.total_words)
    }

    pub fn meets_minimum_length(&self) -> bool {
        self.total_words >= HP.min_meaningful_words
    }
}

// ---------------------------------------------------------------------------
// Readability
// ---------------------------------------------------------------------------

/// Vowel groups in `word`, never less than one.
pub fn count_syllables(word: &str) -> usize {
    VOWEL_GROUP_RE.find_iter(word).count().max(1)
}

/// Flesch reading ease, clamped to the 0-100 scale.
pub fn flesch_reading_ease(words: usize, sentences: usize, syllables: usize) -> f64 {
    if words == 0 || sentences == 0 {
        return HP.readability_default;
    }
    let score = HP.flesch_base
        - HP.flesch_sentence_weight * (words as f64 / sentences as f64)
        - HP.flesch_syllable_weight * (syllables as f64 / words as f64);
    clamp_readability(score)
}

/// Length-based estimate used when no toolkit is available.
pub fn approximate_readability(avg_sentence_length: f64, avg_word_length: f64) -> f64 {
    let score = HP.approx_base
        - HP.approx_sentence_weight * avg_sentence_length
        - HP.approx_word_weight * avg_word_length;
    clamp_readability(score)
}

fn clamp_readability(score: f64) -> f64 {
    if score.is_nan() {
        return HP.readability_default;
    }
    score.clamp(HP.readability_min, HP.readability_max)
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}
