use dictionary::{Phonetic, Word, WordDefinition, WordMeaning};
use serde::Serialize;

pub const NOT_FOUND_TITLE: &str = "No Definitions Found";
pub const NOT_FOUND_MESSAGE: &str = "Sorry pal, we couldn't find definitions for the word you were looking for. You can try the search again at later time or head to the web instead.";

/// Index of the phonetic entry whose text and audio are displayed.
pub const PHONETIC_SLOT: usize = 1;
/// Number of meanings displayed, counted from the first.
pub const MEANING_SLOTS: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum View {
    Idle,
    Searching {
        term: String,
    },
    NotFound {
        term: String,
        title: &'static str,
        message: &'static str,
    },
    Entry(EntryView),
}

impl View {
    pub fn not_found(term: &str) -> Self {
        Self::NotFound {
            term: term.to_owned(),
            title: NOT_FOUND_TITLE,
            message: NOT_FOUND_MESSAGE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView {
    pub headword: String,
    pub phonetic: Option<PhoneticView>,
    pub meanings: Vec<MeaningView>,
    pub source_urls: Vec<String>,
}

impl EntryView {
    pub fn from_word(word: &Word) -> Self {
        let shown = word.meanings.len().min(MEANING_SLOTS);
        if shown < word.meanings.len() {
            tracing::debug!(
                word = %word.word,
                shown,
                total = word.meanings.len(),
                "only the leading meanings are displayed"
            );
        }
        Self {
            headword: word.word.clone(),
            phonetic: word.phonetics.get(PHONETIC_SLOT).map(PhoneticView::from),
            meanings: word
                .meanings
                .iter()
                .take(MEANING_SLOTS)
                .map(MeaningView::from)
                .collect(),
            source_urls: word.source_urls.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhoneticView {
    pub text: Option<String>,
    pub audio: Option<String>,
}

impl From<&Phonetic> for PhoneticView {
    fn from(phonetic: &Phonetic) -> Self {
        Self {
            text: phonetic.text.clone(),
            audio: phonetic.audio.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MeaningView {
    pub part_of_speech: String,
    pub definitions: Vec<DefinitionView>,
    pub synonyms: Vec<String>,
}

impl From<&WordMeaning> for MeaningView {
    fn from(meaning: &WordMeaning) -> Self {
        Self {
            part_of_speech: meaning.part_of_speech.to_string(),
            definitions: meaning.definitions.iter().map(DefinitionView::from).collect(),
            synonyms: meaning.synonyms.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DefinitionView {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
}

impl From<&WordDefinition> for DefinitionView {
    fn from(definition: &WordDefinition) -> Self {
        Self {
            definition: definition.definition.clone(),
            example: definition.example.clone(),
            synonyms: definition.synonyms.clone(),
        }
    }
}
