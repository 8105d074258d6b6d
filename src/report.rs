use serde::Serialize;

use crate::metrics::AnalysisMetrics;
use crate::strategy::{self, Advice, IntelligenceTips};
use crate::style::{StyleLabel, StyleScores};
use crate::toolkit::TextAdapter;

/// One row of the part-of-speech composition table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PosShare {
    pub category: &'static str,
    pub count: usize,
    pub percent: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StyleReport {
    pub metrics: AnalysisMetrics,
    pub scores: StyleScores,
    pub dominant_style: StyleLabel,
    pub style_name: &'static str,
    pub style_description: &'static str,
    pub pos_breakdown: Vec<PosShare>,
    pub intelligence_strategies: Vec<IntelligenceTips>,
    pub style_strategies: Vec<&'static str>,
    pub advice: Vec<Advice>,
    pub meets_minimum_length: bool,
}

impl StyleReport {
    #[tracing::instrument(skip_all)]
    pub fn build(text: &str, adapter: &TextAdapter) -> Self {
        let metrics = AnalysisMetrics::compute(text, adapter);
        let scores = StyleScores::from_metrics(&metrics);
        let dominant_style = scores.dominant();
        let (intelligence_strategies, style_strategies) = strategy::strategies_for(dominant_style);
        let advice = strategy::personalised_advice(&metrics);
        let meets_minimum_length = metrics.meets_minimum_length();
        if !meets_minimum_length {
            tracing::warn!(
                words = metrics.total_words,
                minimum = crate::min_meaningful_words(),
                "text is shorter than the recommended minimum, results may be unreliable"
            );
        }

        Self {
            pos_breakdown: pos_breakdown(&metrics),
            scores,
            dominant_style,
            style_name: dominant_style.display_name(),
            style_description: dominant_style.description(),
            intelligence_strategies,
            style_strategies: style_strategies.to_vec(),
            advice,
            meets_minimum_length,
            metrics,
        }
    }

    /// Drop the static strategy tables, keeping metrics, scores and advice.
    pub fn without_strategies(mut self) -> Self {
        self.intelligence_strategies.clear();
        self.style_strategies.clear();
        self
    }
}

/// Nouns, verbs, adjectives, adverbs and everything else, with percentages
/// of the total word count.
pub fn pos_breakdown(metrics: &AnalysisMetrics) -> Vec<PosShare> {
    let tagged = metrics.nouns + metrics.verbs + metrics.adjectives + metrics.adverbs;
    let rows = [
        ("nouns", metrics.nouns),
        ("verbs", metrics.verbs),
        ("adjectives", metrics.adjectives),
        ("adverbs", metrics.adverbs),
        ("other", metrics.total_words.saturating_sub(tagged)),
    ];
    rows.into_iter()
        .map(|(category, count)| PosShare {
            category,
            count,
            percent: if metrics.total_words == 0 {
                0.0
            } else {
                (count as f64 / metrics.total_words as f64 * 1000.0).round() / 10.0
            },
        })
        .collect()
}
