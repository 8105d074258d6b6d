use serde::Serialize;

use crate::metrics::AnalysisMetrics;
use crate::HP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleLabel {
    Narrative,
    Descriptive,
    Argumentative,
    Expository,
}

impl StyleLabel {
    /// Declaration order, which is also the tie-break order.
    pub const ALL: [StyleLabel; 4] = [
        StyleLabel::Narrative,
        StyleLabel::Descriptive,
        StyleLabel::Argumentative,
        StyleLabel::Expository,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            StyleLabel::Narrative => "narrative",
            StyleLabel::Descriptive => "descriptive",
            StyleLabel::Argumentative => "argumentative",
            StyleLabel::Expository => "expository",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            StyleLabel::Narrative => "Narrativo",
            StyleLabel::Descriptive => "Descrittivo",
            StyleLabel::Argumentative => "Argomentativo",
            StyleLabel::Expository => "Espositivo",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            StyleLabel::Narrative => {
                "Lo stile narrativo si concentra sul racconto di eventi, spesso in sequenza temporale, con attenzione ai personaggi e alle loro azioni."
            }
            StyleLabel::Descriptive => {
                "Lo stile descrittivo si focalizza sulla rappresentazione dettagliata di persone, luoghi o oggetti, utilizzando molti aggettivi e avverbi."
            }
            StyleLabel::Argumentative => {
                "Lo stile argomentativo presenta tesi supportate da ragionamenti logici, dati e prove, con l'obiettivo di persuadere il lettore."
            }
            StyleLabel::Expository => {
                "Lo stile espositivo fornisce informazioni in modo chiaro e organizzato, spiegando concetti senza necessariamente persuadere."
            }
        }
    }
}

impl std::fmt::Display for StyleLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw score per style; the highest one names the dominant style.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleScores {
    pub narrative: f64,
    pub descriptive: f64,
    pub argumentative: f64,
    pub expository: f64,
}

impl StyleScores {
    pub fn from_metrics(metrics: &AnalysisMetrics) -> Self {
        let asl = metrics.avg_sentence_length;

        let mut narrative = metrics.verb_ratio();
        if (HP.narrative_sentence_min..=HP.narrative_sentence_max).contains(&asl) {
            narrative += HP.narrative_bonus;
        }

        let descriptive = metrics.adjective_ratio();

        let mut argumentative = metrics.lexical_richness;
        if asl > HP.argumentative_sentence_min {
            argumentative += HP.argumentative_bonus;
        }

        let expository =
            1.0 - (HP.expository_target - metrics.readability).abs() / HP.expository_target;

        Self {
            narrative,
            descriptive,
            argumentative,
            expository,
        }
    }

    pub fn get(&self, label: StyleLabel) -> f64 {
        match label {
            StyleLabel::Narrative => self.narrative,
            StyleLabel::Descriptive => self.descriptive,
            StyleLabel::Argumentative => self.argumentative,
            StyleLabel::Expository => self.expository,
        }
    }

    /// Highest-scoring label. Ties go to the label declared first in
    /// [`StyleLabel::ALL`].
    pub fn dominant(&self) -> StyleLabel {
        let mut best = StyleLabel::ALL[0];
        for label in StyleLabel::ALL.into_iter().skip(1) {
            if self.get(label) > self.get(best) {
                best = label;
            }
        }
        best
    }
}
