use std::io::Write;
use std::path::Path;

use stylometer::toolkit::{fallback_sentence_count, fallback_words};
use stylometer::{
    AnalysisMetrics, Error, LanguageToolkit, LexiconToolkit, PosCounts, ReadabilitySource,
    TaggerModel, TaggingSource, TextAdapter,
};

const MODEL: &str = "\
# Italian sample lexicon
gatto NN
corre VBZ
veloce JJ
-mente RB
-ente JJ
-are VB

abbr ca.
";

fn toolkit() -> LexiconToolkit {
    LexiconToolkit::new(TaggerModel::parse(MODEL).unwrap())
}

struct FailingToolkit;

impl LanguageToolkit for FailingToolkit {
    fn tokenize(&self, _text: &str) -> stylometer::Result<Vec<String>> {
        Err(Error::Toolkit {
            operation: "tokenize",
            reason: "resource missing".to_string(),
        })
    }

    fn sentence_split(&self, _text: &str) -> stylometer::Result<Vec<String>> {
        Err(Error::Toolkit {
            operation: "sentence_split",
            reason: "resource missing".to_string(),
        })
    }

    fn pos_tag(&self, _words: &[String]) -> stylometer::Result<Vec<(String, String)>> {
        Err(Error::Toolkit {
            operation: "pos_tag",
            reason: "resource missing".to_string(),
        })
    }
}

#[test]
fn model_parses_entries_and_rules() {
    let model = TaggerModel::parse(MODEL).unwrap();
    assert_eq!(model.len(), 6);
    assert_eq!(model.tag("Gatto"), "NN");
    assert_eq!(model.tag("corre"), "VBZ");
    assert!(model.is_abbreviation("ca"));
    assert!(model.is_abbreviation("Sig"));
    assert!(!model.is_abbreviation("gatto"));
}

#[test]
fn longest_suffix_wins() {
    let model = TaggerModel::parse(MODEL).unwrap();
    assert_eq!(model.tag("velocemente"), "RB");
    assert_eq!(model.tag("potente"), "JJ");
    assert_eq!(model.tag("cantare"), "VB");
    // A suffix never tags a word that is only the suffix.
    assert_eq!(model.tag("are"), "NN");
}

#[test]
fn unknown_words_and_numbers() {
    let model = TaggerModel::parse(MODEL).unwrap();
    assert_eq!(model.tag("tavolo"), "NN");
    assert_eq!(model.tag("2024"), "CD");
    assert_eq!(model.tag("3,50"), "CD");
}

#[test]
fn malformed_line_reports_its_number() {
    let err = TaggerModel::parse("gatto NN\ncorre\n").unwrap_err();
    match err {
        Error::ModelParse { line, .. } => assert_eq!(line, 2),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn invalid_tag_is_rejected() {
    let err = TaggerModel::parse("# header\ngatto nn\n").unwrap_err();
    assert!(matches!(err, Error::ModelParse { line: 2, .. }), "{err}");
    assert!(err.to_string().contains("invalid tag"));
}

#[test]
fn model_without_entries_is_rejected() {
    assert!(matches!(
        TaggerModel::parse("# nothing\n\n"),
        Err(Error::EmptyModel)
    ));
    assert!(matches!(
        TaggerModel::parse("abbr ecc\n"),
        Err(Error::EmptyModel)
    ));
}

#[test]
fn model_loads_from_disk() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MODEL.as_bytes()).unwrap();
    let model = TaggerModel::from_path(file.path()).unwrap();
    assert_eq!(model.tag("veloce"), "JJ");
}

#[test]
fn missing_model_file_is_a_read_error() {
    let err = TaggerModel::from_path(Path::new("/nonexistent/stylometer/model.txt")).unwrap_err();
    assert!(matches!(err, Error::Read { .. }), "{err}");
}

#[test]
fn adapter_degrades_without_model() {
    assert!(!TextAdapter::from_model_path(None).has_toolkit());
    assert!(!TextAdapter::from_model_path(Some(Path::new("/nonexistent/model.txt"))).has_toolkit());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"not a valid line here\n").unwrap();
    assert!(!TextAdapter::from_model_path(Some(file.path())).has_toolkit());
}

#[test]
fn adapter_uses_loaded_model() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(MODEL.as_bytes()).unwrap();
    let adapter = TextAdapter::from_model_path(Some(file.path()));
    assert!(adapter.has_toolkit());

    let m = AnalysisMetrics::compute("Il gatto corre veloce nel giardino verde.", &adapter);
    assert_eq!(m.total_words, 7);
    assert_eq!(m.tagging, TaggingSource::Toolkit);
    assert_eq!(m.verbs, 1);
    assert_eq!(m.adjectives, 1);
    // il, gatto, nel, giardino, verde fall through to NN.
    assert_eq!(m.nouns, 5);
    assert_eq!(m.readability_source, ReadabilitySource::Flesch);
}

#[test]
fn tokenizer_keeps_elisions_numbers_and_compounds() {
    let tokens = toolkit()
        .tokenize("L'albero dell'anno costa 3,50 euro e mezzo-litro")
        .unwrap();
    assert_eq!(
        tokens,
        ["L'", "albero", "dell'", "anno", "costa", "3,50", "euro", "e", "mezzo-litro"]
    );
}

#[test]
fn sentence_split_skips_abbreviations() {
    let sentences = toolkit()
        .sentence_split("Il Sig. Rossi è arrivato. Poi è partito! Davvero? Sì.")
        .unwrap();
    assert_eq!(
        sentences,
        ["Il Sig. Rossi è arrivato.", "Poi è partito!", "Davvero?", "Sì."]
    );
}

#[test]
fn sentence_split_skips_decimals_and_initials() {
    let tk = toolkit();
    assert_eq!(tk.sentence_split("Costa 3.50 euro. Bene.").unwrap().len(), 2);
    assert_eq!(
        tk.sentence_split("J. R. R. Tolkien scrisse molto. Fine.")
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn sentence_split_needs_a_capital_to_break() {
    let sentences = toolkit()
        .sentence_split("Era tardi... e pioveva. Dopo")
        .unwrap();
    assert_eq!(sentences, ["Era tardi... e pioveva.", "Dopo"]);
}

#[test]
fn failing_toolkit_falls_back_everywhere() {
    let adapter = TextAdapter::with_toolkit(FailingToolkit);
    let m = AnalysisMetrics::compute("Il gatto corre veloce nel giardino verde.", &adapter);
    assert_eq!(m.total_words, 7);
    assert_eq!(m.total_sentences, 1);
    assert_eq!(m.tagging, TaggingSource::Estimated);
    assert_eq!(m.adjectives, 0);
    assert_eq!(m.nouns, 2);
}

#[test]
fn fallback_words_are_lowercase_runs() {
    assert_eq!(
        fallback_words("Ciao, MONDO! L'ora è 10:30"),
        ["ciao", "mondo", "l", "ora", "è", "10", "30"]
    );
}

#[test]
fn fallback_sentences_ignore_empty_segments() {
    assert_eq!(fallback_sentence_count(""), 0);
    assert_eq!(fallback_sentence_count("Uno. Due!! Tre?!"), 3);
    assert_eq!(fallback_sentence_count("senza punteggiatura"), 1);
    assert_eq!(fallback_sentence_count("... ?"), 0);
}

#[test]
fn pos_counts_from_penn_tags() {
    let counts = PosCounts::from_tags(["JJ", "NN", "VBD", "RB", "DT", "NNS", "JJS"]);
    assert_eq!(
        counts,
        PosCounts {
            adjectives: 2,
            adverbs: 1,
            verbs: 1,
            nouns: 2,
        }
    );
    assert_eq!(counts.total(), 6);
}

#[test]
fn pos_estimates_use_integer_division() {
    assert_eq!(
        PosCounts::estimate(7),
        PosCounts {
            adjectives: 0,
            adverbs: 0,
            verbs: 1,
            nouns: 2,
        }
    );
    assert_eq!(PosCounts::estimate(0), PosCounts::default());
}

#[test]
fn bundled_lexicon_parses() {
    let model = TaggerModel::parse(include_str!("../data/italian.lexicon")).unwrap();
    assert_eq!(model.tag("è"), "VBZ");
    assert_eq!(model.tag("lentamente"), "RB");
    assert_eq!(model.tag("bellissimo"), "JJS");
    assert_eq!(model.tag("camminava"), "VBD");
    assert_eq!(model.tag("città"), "NN");
}
