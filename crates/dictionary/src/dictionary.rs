use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Word {
    pub word: String,
    #[serde(default)]
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<Phonetic>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<WordMeaning>,
    #[serde(default)]
    pub license: Option<License>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Phonetic {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub text: Option<String>,
    /// The API sends `""` for entries without a recording.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub audio: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordMeaning {
    pub part_of_speech: PartOfSpeech,
    #[serde(default)]
    pub definitions: Vec<WordDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum PartOfSpeech {
    Noun,
    Pronoun,
    Verb,
    Adjective,
    Adverb,
    Preposition,
    Conjunction,
    Interjection,
    /// Tags outside the common set (e.g. "exclamation", "abbreviation").
    Other(String),
}

impl PartOfSpeech {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Noun => "noun",
            Self::Pronoun => "pronoun",
            Self::Verb => "verb",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Interjection => "interjection",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for PartOfSpeech {
    fn from(tag: String) -> Self {
        match &tag.to_ascii_lowercase()[..] {
            "noun" => Self::Noun,
            "pronoun" => Self::Pronoun,
            "verb" => Self::Verb,
            "adjective" => Self::Adjective,
            "adverb" => Self::Adverb,
            "preposition" => Self::Preposition,
            "conjunction" => Self::Conjunction,
            "interjection" => Self::Interjection,
            _ => Self::Other(tag),
        }
    }
}

impl From<PartOfSpeech> for String {
    fn from(part_of_speech: PartOfSpeech) -> Self {
        match part_of_speech {
            PartOfSpeech::Other(tag) => tag,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WordDefinition {
    pub definition: String,
    #[serde(default)]
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct License {
    pub name: String,
    pub url: String,
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|value| !value.trim().is_empty()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const HELLO: &str = include_str!("../tests/fixtures/hello.json");

    #[test]
    fn parses_api_entry() {
        let words: Vec<Word> = serde_json::from_str(HELLO).unwrap();
        let word = &words[0];
        assert_eq!(word.word, "hello");
        assert_eq!(word.meanings.len(), 3);
        assert_eq!(word.meanings[0].part_of_speech, PartOfSpeech::Noun);
        assert_eq!(
            word.source_urls,
            vec!["https://en.wiktionary.org/wiki/hello".to_string()]
        );
        assert_eq!(word.license.as_ref().unwrap().name, "CC BY-SA 3.0");
    }

    #[test]
    fn empty_audio_is_none() {
        let words: Vec<Word> = serde_json::from_str(HELLO).unwrap();
        let phonetics = &words[0].phonetics;
        assert_eq!(phonetics[0].audio, None);
        assert_eq!(
            phonetics[1].audio.as_deref(),
            Some("https://api.dictionaryapi.dev/media/pronunciations/en/hello-uk.mp3")
        );
    }

    #[test]
    fn unknown_part_of_speech_is_kept_verbatim() {
        let meaning: WordMeaning = serde_json::from_str(
            r#"{"partOfSpeech": "exclamation", "definitions": []}"#,
        )
        .unwrap();
        assert_eq!(
            meaning.part_of_speech,
            PartOfSpeech::Other("exclamation".to_string())
        );
        assert_eq!(meaning.part_of_speech.to_string(), "exclamation");
        assert!(meaning.synonyms.is_empty());
    }
}
