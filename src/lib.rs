//! Writing-style analysis for prose samples.
//!
//! [`analyze`] turns a text into a [`StyleReport`]: counts, lexical richness,
//! readability, part-of-speech composition, tone, the dominant rhetorical
//! style and the improvement strategies attached to it. Tokenization and
//! tagging go through a [`TextAdapter`], which uses an injected
//! [`LanguageToolkit`] when one is available and regex heuristics otherwise.

pub mod error;
pub mod metrics;
pub mod report;
pub mod strategy;
pub mod style;
pub mod toolkit;

pub use error::{Error, Result};
pub use metrics::{AnalysisMetrics, ReadabilitySource};
pub use report::{PosShare, StyleReport};
pub use strategy::{Advice, AdviceKind, Intelligence, IntelligenceTips};
pub use style::{StyleLabel, StyleScores};
pub use toolkit::{
    LanguageToolkit, LexiconToolkit, PosCounts, TaggerModel, TaggingSource, TextAdapter,
};

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

pub(crate) struct Hyperparameters {
    pub min_meaningful_words: usize,
    // Proportional POS estimates, as word_count / divisor.
    pub estimate_adjective_divisor: usize,
    pub estimate_adverb_divisor: usize,
    pub estimate_verb_divisor: usize,
    pub estimate_noun_divisor: usize,
    pub readability_default: f64,
    pub readability_min: f64,
    pub readability_max: f64,
    pub flesch_base: f64,
    pub flesch_sentence_weight: f64,
    pub flesch_syllable_weight: f64,
    pub approx_base: f64,
    pub approx_sentence_weight: f64,
    pub approx_word_weight: f64,
    pub narrative_sentence_min: f64,
    pub narrative_sentence_max: f64,
    pub narrative_bonus: f64,
    pub argumentative_sentence_min: f64,
    pub argumentative_bonus: f64,
    pub expository_target: f64,
    pub advice_richness_min: f64,
    pub advice_sentence_max: f64,
    pub advice_adjective_ratio_min: f64,
    pub advice_readability_min: f64,
}

pub(crate) static HP: Hyperparameters = Hyperparameters {
    min_meaningful_words: 50,
    estimate_adjective_divisor: 10,
    estimate_adverb_divisor: 20,
    estimate_verb_divisor: 5,
    estimate_noun_divisor: 3,
    readability_default: 60.0,
    readability_min: 0.0,
    readability_max: 100.0,
    flesch_base: 206.835,
    flesch_sentence_weight: 1.015,
    flesch_syllable_weight: 84.6,
    approx_base: 100.0,
    approx_sentence_weight: 1.5,
    approx_word_weight: 8.0,
    narrative_sentence_min: 15.0,
    narrative_sentence_max: 25.0,
    narrative_bonus: 0.5,
    argumentative_sentence_min: 20.0,
    argumentative_bonus: 0.5,
    expository_target: 70.0,
    advice_richness_min: 0.5,
    advice_sentence_max: 25.0,
    advice_adjective_ratio_min: 0.05,
    advice_readability_min: 60.0,
};

/// Minimum number of words for a report to be considered meaningful.
pub fn min_meaningful_words() -> usize {
    HP.min_meaningful_words
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the metrics and dominant style for `text`.
pub fn score(text: &str, adapter: &TextAdapter) -> (AnalysisMetrics, StyleLabel) {
    let metrics = AnalysisMetrics::compute(text, adapter);
    let label = StyleScores::from_metrics(&metrics).dominant();
    (metrics, label)
}

/// Full analysis: metrics, style, strategies and personalised advice.
pub fn analyze(text: &str, adapter: &TextAdapter) -> StyleReport {
    StyleReport::build(text, adapter)
}
