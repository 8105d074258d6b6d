//! Static improvement strategies, organised by Gardner's multiple
//! intelligences and by dominant style, plus advice derived from metrics.

use serde::Serialize;

use crate::metrics::AnalysisMetrics;
use crate::style::StyleLabel;
use crate::HP;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Intelligence {
    Linguistic,
    LogicalMathematical,
    Spatial,
    BodilyKinesthetic,
    Musical,
    Interpersonal,
    Intrapersonal,
    Naturalistic,
}

impl Intelligence {
    pub const ALL: [Intelligence; 8] = [
        Intelligence::Linguistic,
        Intelligence::LogicalMathematical,
        Intelligence::Spatial,
        Intelligence::BodilyKinesthetic,
        Intelligence::Musical,
        Intelligence::Interpersonal,
        Intelligence::Intrapersonal,
        Intelligence::Naturalistic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Intelligence::Linguistic => "Linguistica",
            Intelligence::LogicalMathematical => "Logico-Matematica",
            Intelligence::Spatial => "Spaziale",
            Intelligence::BodilyKinesthetic => "Corporeo-Cinestetica",
            Intelligence::Musical => "Musicale",
            Intelligence::Interpersonal => "Interpersonale",
            Intelligence::Intrapersonal => "Intrapersonale",
            Intelligence::Naturalistic => "Naturalistica",
        }
    }

    pub fn tips(self) -> &'static [&'static str; 4] {
        match self {
            Intelligence::Linguistic => &[
                "Amplia il tuo vocabolario leggendo autori di generi diversi",
                "Esercitati con giochi di parole e cruciverba",
                "Scrivi piccoli racconti utilizzando parole nuove ogni giorno",
                "Analizza la struttura di testi che ammiri",
            ],
            Intelligence::LogicalMathematical => &[
                "Organizza i tuoi testi con una struttura logica chiara (introduzione, sviluppo, conclusione)",
                "Utilizza connettivi logici per legare le idee (pertanto, di conseguenza, inoltre)",
                "Crea mappe concettuali prima di scrivere",
                "Supporta le tue argomentazioni con dati e statistiche",
            ],
            Intelligence::Spatial => &[
                "Usa metafore visive nelle tue descrizioni",
                "Disegna le scene prima di descriverle",
                "Organizza il testo con una struttura visivamente chiara",
                "Utilizza diagrammi per pianificare la struttura del testo",
            ],
            Intelligence::BodilyKinesthetic => &[
                "Scrivi stando in piedi o camminando per stimolare la creatività",
                "Drammatizza le scene che vuoi descrivere",
                "Usa un linguaggio che coinvolga i sensi e il movimento",
                "Prendi brevi pause fisiche durante la scrittura",
            ],
            Intelligence::Musical => &[
                "Leggi ad alta voce ciò che scrivi per verificarne il ritmo",
                "Ascolta musica mentre scrivi per ispirare diversi stati d'animo",
                "Usa l'allitterazione e l'assonanza per creare effetti sonori",
                "Presta attenzione al ritmo delle tue frasi",
            ],
            Intelligence::Interpersonal => &[
                "Scrivi pensando al tuo lettore ideale",
                "Chiedi feedback e impara a incorporare i suggerimenti",
                "Partecipa a gruppi di scrittura creativa",
                "Sviluppa dialoghi realistici tra i personaggi",
            ],
            Intelligence::Intrapersonal => &[
                "Tieni un diario personale per esplorare le tue emozioni",
                "Rifletti sul tuo processo di scrittura e sui tuoi progressi",
                "Stabilisci obiettivi di scrittura personali",
                "Scrivi di esperienze personali per sviluppare autenticità",
            ],
            Intelligence::Naturalistic => &[
                "Osserva e descrivi dettagliatamente ambienti naturali",
                "Usa metafore tratte dal mondo naturale",
                "Studia la struttura di piante e animali per ispirare la struttura del testo",
                "Scrivi all'aperto per stimolare la creatività",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntelligenceTips {
    pub intelligence: Intelligence,
    pub name: &'static str,
    pub tips: Vec<&'static str>,
}

/// Tips for every intelligence, in declaration order.
pub fn intelligence_strategies() -> Vec<IntelligenceTips> {
    Intelligence::ALL
        .into_iter()
        .map(|intelligence| IntelligenceTips {
            intelligence,
            name: intelligence.name(),
            tips: intelligence.tips().to_vec(),
        })
        .collect()
}

pub fn style_strategies(label: StyleLabel) -> &'static [&'static str] {
    match label {
        StyleLabel::Narrative => &[
            "Sviluppa personaggi multidimensionali (Interpersonale)",
            "Crea una struttura temporale chiara (Logico-Matematica)",
            "Usa dialoghi vivaci (Linguistica)",
            "Descrivi ambienti in modo coinvolgente (Spaziale)",
        ],
        StyleLabel::Descriptive => &[
            "Coinvolgi tutti i sensi nelle descrizioni (Corporeo-Cinestetica)",
            "Usa similitudini e metafore originali (Spaziale)",
            "Organizza le descrizioni in modo logico (Logico-Matematica)",
            "Scegli aggettivi precisi e evocativi (Linguistica)",
        ],
        StyleLabel::Argumentative => &[
            "Struttura logicamente le argomentazioni (Logico-Matematica)",
            "Anticipa e confuta le obiezioni (Interpersonale)",
            "Usa un linguaggio preciso e convincente (Linguistica)",
            "Supporta con esempi concreti (Naturalistica)",
        ],
        StyleLabel::Expository => &[
            "Organizza le informazioni in modo chiaro (Logico-Matematica)",
            "Usa analogie per spiegare concetti complessi (Spaziale)",
            "Adatta il linguaggio al pubblico (Interpersonale)",
            "Mantieni un tono equilibrato e oggettivo (Intrapersonale)",
        ],
    }
}

/// Generic and style-specific strategy lists for `label`.
pub fn strategies_for(label: StyleLabel) -> (Vec<IntelligenceTips>, &'static [&'static str]) {
    (intelligence_strategies(), style_strategies(label))
}

// ---------------------------------------------------------------------------
// Personalised advice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdviceKind {
    ExpandVocabulary,
    VarySentenceLength,
    AddDescriptiveDetail,
    ImproveReadability,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Advice {
    pub kind: AdviceKind,
    pub title: &'static str,
    pub message: &'static str,
}

impl Advice {
    fn new(kind: AdviceKind) -> Self {
        let (title, message) = match kind {
            AdviceKind::ExpandVocabulary => (
                "Amplia il tuo vocabolario",
                "La ricchezza lessicale è sotto la media. Prova a leggere più generi diversi e a utilizzare un dizionario dei sinonimi.",
            ),
            AdviceKind::VarySentenceLength => (
                "Varia la lunghezza delle frasi",
                "Le tue frasi sono piuttosto lunghe. Prova ad alternare frasi brevi e lunghe per creare ritmo.",
            ),
            AdviceKind::AddDescriptiveDetail => (
                "Aggiungi più dettagli descrittivi",
                "Usa più aggettivi per rendere la tua scrittura più vivida e coinvolgente.",
            ),
            AdviceKind::ImproveReadability => (
                "Migliora la leggibilità",
                "Il tuo testo potrebbe essere difficile da leggere per alcuni. Prova a semplificare frasi complesse e usa un linguaggio più diretto.",
            ),
        };
        Self {
            kind,
            title,
            message,
        }
    }
}

pub fn personalised_advice(metrics: &AnalysisMetrics) -> Vec<Advice> {
    let mut advice = Vec::new();
    if metrics.lexical_richness < HP.advice_richness_min {
        advice.push(Advice::new(AdviceKind::ExpandVocabulary));
    }
    if metrics.avg_sentence_length > HP.advice_sentence_max {
        advice.push(Advice::new(AdviceKind::VarySentenceLength));
    }
    if metrics.total_words > 0 && metrics.adjective_ratio() < HP.advice_adjective_ratio_min {
        advice.push(Advice::new(AdviceKind::AddDescriptiveDetail));
    }
    if metrics.readability < HP.advice_readability_min {
        advice.push(Advice::new(AdviceKind::ImproveReadability));
    }
    advice
}
