use std::collections::{HashMap, HashSet};
use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::HP;

// ---------------------------------------------------------------------------
// Toolkit capability
// ---------------------------------------------------------------------------

/// Tokenizer and part-of-speech tagger backing the preferred analysis path.
///
/// Every operation may fail; [`TextAdapter`] substitutes a heuristic for any
/// call that returns an error.
pub trait LanguageToolkit: Send + Sync {
    fn tokenize(&self, text: &str) -> Result<Vec<String>>;

    fn sentence_split(&self, text: &str) -> Result<Vec<String>>;

    /// Tag each word with a Penn-style part-of-speech tag.
    fn pos_tag(&self, words: &[String]) -> Result<Vec<(String, String)>>;
}

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

static FALLBACK_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

static FALLBACK_SENTENCE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").unwrap());

// Elided articles and prepositions (l', dell', un') stay attached to their
// apostrophe; decimals and hyphenated compounds stay whole.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+['\u{2019}]|\d+(?:[.,]\d+)+|\w+(?:-\w+)*").unwrap());

static TERMINATOR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"[.!?\u{2026}]+["'\u{201D}\u{2019}\u{00BB})\]]*"#).unwrap()
});

static LAST_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\w+)$").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d+(?:[.,]\d+)*$").unwrap());

static TAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Z][A-Z$]*$").unwrap());

const DEFAULT_ABBREVIATIONS: &[&str] = &[
    "sig", "sigg", "dott", "dr", "prof", "ing", "avv", "geom", "arch", "ecc", "etc", "pag",
    "pagg", "cfr", "vol", "cap", "es", "n", "nr", "mr", "mrs", "ms", "st", "vs",
];

const ADJECTIVE_TAGS: &[&str] = &["JJ", "JJR", "JJS"];
const ADVERB_TAGS: &[&str] = &["RB", "RBR", "RBS"];
const VERB_TAGS: &[&str] = &["VB", "VBD", "VBG", "VBN", "VBP", "VBZ"];
const NOUN_TAGS: &[&str] = &["NN", "NNS", "NNP", "NNPS"];

// ---------------------------------------------------------------------------
// Tagger model
// ---------------------------------------------------------------------------

/// Lexicon-and-suffix tagging resource loaded from a plain-text file.
///
/// Format, one entry per line:
///
/// ```text
/// # comment
/// gatto NN
/// -mente RB
/// abbr sig
/// ```
#[derive(Debug, Clone, Default)]
pub struct TaggerModel {
    lexicon: HashMap<String, String>,
    // Sorted longest first so the most specific rule wins.
    suffixes: Vec<(String, String)>,
    abbreviations: HashSet<String>,
}

impl TaggerModel {
    pub fn from_path(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&source)
    }

    pub fn parse(source: &str) -> Result<Self> {
        let mut model = TaggerModel {
            abbreviations: DEFAULT_ABBREVIATIONS.iter().map(|a| a.to_string()).collect(),
            ..Default::default()
        };

        for (idx, raw) in source.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let fields: Vec<&str> = line.split_whitespace().collect();
            if fields.len() != 2 {
                return Err(Error::ModelParse {
                    line: idx + 1,
                    reason: format!("expected `word TAG`, found {} fields", fields.len()),
                });
            }
            let (key, value) = (fields[0], fields[1]);

            if key == "abbr" {
                let abbr = value.trim_end_matches('.').to_lowercase();
                model.abbreviations.insert(abbr);
                continue;
            }
            if !TAG_RE.is_match(value) {
                return Err(Error::ModelParse {
                    line: idx + 1,
                    reason: format!("invalid tag `{value}`"),
                });
            }
            match key.strip_prefix('-') {
                Some(suffix) if !suffix.is_empty() => {
                    model
                        .suffixes
                        .push((suffix.to_lowercase(), value.to_string()));
                }
                _ => {
                    model.lexicon.insert(key.to_lowercase(), value.to_string());
                }
            }
        }

        if model.is_empty() {
            return Err(Error::EmptyModel);
        }
        model
            .suffixes
            .sort_by(|a, b| b.0.chars().count().cmp(&a.0.chars().count()));
        Ok(model)
    }

    /// Number of lexicon entries plus suffix rules.
    pub fn len(&self) -> usize {
        self.lexicon.len() + self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_abbreviation(&self, token: &str) -> bool {
        self.abbreviations.contains(&token.to_lowercase())
    }

    pub fn tag(&self, word: &str) -> &str {
        let lower = word.to_lowercase();
        if let Some(tag) = self.lexicon.get(&lower) {
            return tag;
        }
        if NUMBER_RE.is_match(&lower) {
            return "CD";
        }
        let word_len = lower.chars().count();
        self.suffixes
            .iter()
            .find(|(suffix, _)| word_len > suffix.chars().count() && lower.ends_with(suffix))
            .map(|(_, tag)| tag.as_str())
            .unwrap_or("NN")
    }
}

// ---------------------------------------------------------------------------
// Lexicon toolkit
// ---------------------------------------------------------------------------

/// [`LanguageToolkit`] backed by a [`TaggerModel`].
#[derive(Debug, Clone)]
pub struct LexiconToolkit {
    model: TaggerModel,
}

impl LexiconToolkit {
    pub fn new(model: TaggerModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &TaggerModel {
        &self.model
    }

    fn ends_sentence(&self, text: &str, start: usize, end: usize) -> bool {
        let rest = &text[end..];
        let after = rest.trim_start();
        if after.is_empty() {
            return true;
        }
        // "3.14", "e.g" and friends: no whitespace after the terminator.
        if after.len() == rest.len() {
            return false;
        }
        let opens_sentence = after.chars().next().is_some_and(|c| {
            c.is_uppercase() || c.is_ascii_digit() || matches!(c, '"' | '\'' | '\u{201C}' | '\u{00AB}' | '(')
        });
        if !opens_sentence {
            return false;
        }

        let terminator = &text[start..end];
        if !terminator.starts_with('.') || terminator.starts_with("..") {
            return true;
        }
        let Some(caps) = LAST_WORD_RE.captures(&text[..start]) else {
            return true;
        };
        let previous = &caps[1];
        let is_initial = previous.chars().count() == 1
            && previous.chars().all(|c| c.is_uppercase());
        !(is_initial || self.model.is_abbreviation(previous))
    }
}

impl LanguageToolkit for LexiconToolkit {
    fn tokenize(&self, text: &str) -> Result<Vec<String>> {
        Ok(TOKEN_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect())
    }

    fn sentence_split(&self, text: &str) -> Result<Vec<String>> {
        let mut sentences = Vec::new();
        let mut sentence_start = 0usize;
        for m in TERMINATOR_RE.find_iter(text) {
            if !self.ends_sentence(text, m.start(), m.end()) {
                continue;
            }
            let sentence = text[sentence_start..m.end()].trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            sentence_start = m.end();
        }
        let tail = text[sentence_start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
        Ok(sentences)
    }

    fn pos_tag(&self, words: &[String]) -> Result<Vec<(String, String)>> {
        Ok(words
            .iter()
            .map(|w| (w.clone(), self.model.tag(w).to_string()))
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Part-of-speech counts
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PosCounts {
    pub adjectives: usize,
    pub adverbs: usize,
    pub verbs: usize,
    pub nouns: usize,
}

impl PosCounts {
    /// Proportional placeholder used when no tagger is available.
    pub fn estimate(word_count: usize) -> Self {
        Self {
            adjectives: word_count / HP.estimate_adjective_divisor,
            adverbs: word_count / HP.estimate_adverb_divisor,
            verbs: word_count / HP.estimate_verb_divisor,
            nouns: word_count / HP.estimate_noun_divisor,
        }
    }

    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut counts = Self::default();
        for tag in tags {
            if ADJECTIVE_TAGS.contains(&tag) {
                counts.adjectives += 1;
            } else if ADVERB_TAGS.contains(&tag) {
                counts.adverbs += 1;
            } else if VERB_TAGS.contains(&tag) {
                counts.verbs += 1;
            } else if NOUN_TAGS.contains(&tag) {
                counts.nouns += 1;
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.adjectives + self.adverbs + self.verbs + self.nouns
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaggingSource {
    Toolkit,
    Estimated,
}

// ---------------------------------------------------------------------------
// Heuristic fallbacks
// ---------------------------------------------------------------------------

/// Maximal runs of word characters, lower-cased.
pub fn fallback_words(text: &str) -> Vec<String> {
    FALLBACK_WORD_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Non-empty segments between runs of `.`, `!` and `?`.
pub fn fallback_sentence_count(text: &str) -> usize {
    FALLBACK_SENTENCE_RE
        .split(text)
        .filter(|s| !s.trim().is_empty())
        .count()
}

// ---------------------------------------------------------------------------
// Adapter
// ---------------------------------------------------------------------------

/// Front door for tokenization and tagging.
///
/// Holds an optional toolkit chosen once by the caller. Each operation tries
/// the toolkit first and falls back to the regex heuristics when it is absent
/// or returns an error; nothing is surfaced to the caller.
pub struct TextAdapter {
    toolkit: Option<Box<dyn LanguageToolkit>>,
}

impl TextAdapter {
    pub fn heuristic() -> Self {
        Self { toolkit: None }
    }

    pub fn with_toolkit<T>(toolkit: T) -> Self
    where
        T: LanguageToolkit + 'static,
    {
        Self {
            toolkit: Some(Box::new(toolkit)),
        }
    }

    /// Load a [`LexiconToolkit`] from `path`, degrading to heuristics when the
    /// model is missing or malformed.
    pub fn from_model_path(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("no tagger model configured, using heuristic analysis");
            return Self::heuristic();
        };
        match TaggerModel::from_path(path) {
            Ok(model) => {
                tracing::debug!(path = %path.display(), entries = model.len(), "tagger model loaded");
                Self::with_toolkit(LexiconToolkit::new(model))
            }
            Err(err) => {
                tracing::warn!(%err, "tagger model unavailable, using heuristic analysis");
                Self::heuristic()
            }
        }
    }

    pub fn has_toolkit(&self) -> bool {
        self.toolkit.is_some()
    }

    pub fn words(&self, text: &str) -> Vec<String> {
        if let Some(toolkit) = &self.toolkit {
            match toolkit.tokenize(text) {
                Ok(words) => return words,
                Err(err) => tracing::debug!(%err, "tokenize failed, using regex words"),
            }
        }
        fallback_words(text)
    }

    pub fn sentence_count(&self, text: &str) -> usize {
        if let Some(toolkit) = &self.toolkit {
            match toolkit.sentence_split(text) {
                Ok(sentences) => return sentences.len(),
                Err(err) => tracing::debug!(%err, "sentence split failed, using punctuation"),
            }
        }
        fallback_sentence_count(text)
    }

    pub fn pos_counts(&self, words: &[String]) -> (PosCounts, TaggingSource) {
        if let Some(toolkit) = &self.toolkit {
            match toolkit.pos_tag(words) {
                Ok(tagged) => {
                    let counts = PosCounts::from_tags(tagged.iter().map(|(_, tag)| tag.as_str()));
                    return (counts, TaggingSource::Toolkit);
                }
                Err(err) => tracing::debug!(%err, "pos tagging failed, estimating counts"),
            }
        }
        (PosCounts::estimate(words.len()), TaggingSource::Estimated)
    }
}

impl Default for TextAdapter {
    fn default() -> Self {
        Self::heuristic()
    }
}

impl std::fmt::Debug for TextAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextAdapter")
            .field("toolkit", &self.has_toolkit())
            .finish()
    }
}
