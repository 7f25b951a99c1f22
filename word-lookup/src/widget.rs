use dictionary::{DictionaryError, LookupSource, Word};

use crate::audio::AudioPlayer;
use crate::presentation::{Font, Presentation, Theme};
use crate::storage::Storage;
use crate::view::{EntryView, View, PHONETIC_SLOT};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupPhase {
    Idle,
    Searching,
    Found,
    NotFound,
}

/// Issued for every submitted search. Only the ticket of the latest
/// submission can commit an outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    generation: u64,
    term: String,
}

impl SearchTicket {
    pub fn term(&self) -> &str {
        &self.term
    }
}

pub struct LookupWidget {
    term: Option<String>,
    phase: LookupPhase,
    result: Option<Word>,
    generation: u64,
    presentation: Presentation,
    font_menu_open: bool,
}

impl LookupWidget {
    pub fn new() -> Self {
        Self {
            term: None,
            phase: LookupPhase::Idle,
            result: None,
            generation: 0,
            presentation: Presentation::default(),
            font_menu_open: false,
        }
    }

    pub fn phase(&self) -> LookupPhase {
        self.phase
    }

    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    pub fn result(&self) -> Option<&Word> {
        self.result.as_ref()
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    pub fn is_font_menu_open(&self) -> bool {
        self.font_menu_open
    }
}

impl LookupWidget {
    /// Starts a new search. An empty term is ignored and leaves the widget as is.
    pub fn submit_search(&mut self, term: &str) -> Option<SearchTicket> {
        if term.is_empty() {
            return None;
        }
        // whitespace-only input is still sent, the dictionary answers not found
        let term = match term.trim() {
            "" => term,
            trimmed => trimmed,
        };
        self.generation += 1;
        self.term = Some(term.to_owned());
        self.result = None;
        self.phase = LookupPhase::Searching;
        Some(SearchTicket {
            generation: self.generation,
            term: term.to_owned(),
        })
    }

    /// Stores the outcome of a lookup, returns false if the ticket was superseded.
    pub fn commit(&mut self, ticket: SearchTicket, outcome: Result<Word, DictionaryError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                term = %ticket.term,
                generation = ticket.generation,
                latest = self.generation,
                "discarding outcome of a superseded search"
            );
            return false;
        }
        match outcome {
            Ok(word) => {
                self.result = Some(word);
                self.phase = LookupPhase::Found;
            }
            Err(error) => {
                match &error {
                    DictionaryError::NotFound(_) => {
                        tracing::info!(term = %ticket.term, %error, "no definitions found");
                    }
                    _ => tracing::warn!(term = %ticket.term, %error, "lookup failed"),
                }
                self.result = None;
                self.phase = LookupPhase::NotFound;
            }
        }
        true
    }

    pub async fn search(&mut self, source: &dyn LookupSource, term: &str) -> bool {
        let Some(ticket) = self.submit_search(term) else {
            return false;
        };
        let outcome = source.lookup(ticket.term()).await;
        self.commit(ticket, outcome)
    }

    pub fn render(&self) -> View {
        match (self.phase, &self.term, &self.result) {
            (LookupPhase::Found, _, Some(word)) => View::Entry(EntryView::from_word(word)),
            (LookupPhase::Searching, Some(term), _) => View::Searching { term: term.clone() },
            (LookupPhase::NotFound, Some(term), _) => View::not_found(term),
            _ => View::Idle,
        }
    }

    /// Plays the clip of the displayed phonetic entry. Returns false when there is none.
    pub fn play_audio(&self, player: &dyn AudioPlayer) -> bool {
        let audio = self
            .result
            .as_ref()
            .and_then(|word| word.phonetics.get(PHONETIC_SLOT))
            .and_then(|phonetic| phonetic.audio.as_deref());
        match audio {
            Some(url) => {
                player.play(url);
                true
            }
            None => false,
        }
    }
}

impl LookupWidget {
    pub async fn restore_theme(&mut self, storage: &Storage) -> sqlx::Result<Theme> {
        let theme = storage.load_theme().await?;
        self.presentation.theme = theme;
        Ok(theme)
    }

    pub async fn toggle_theme(&mut self, storage: &Storage) -> sqlx::Result<Theme> {
        self.set_theme(self.presentation.theme.toggled(), storage)
            .await
    }

    pub async fn set_theme(&mut self, theme: Theme, storage: &Storage) -> sqlx::Result<Theme> {
        storage.save_theme(theme).await?;
        self.presentation.theme = theme;
        Ok(theme)
    }

    pub fn toggle_font_menu(&mut self) {
        self.font_menu_open = !self.font_menu_open;
    }

    /// Applies the named font and closes the menu. Unknown names keep the current font.
    pub fn select_font(&mut self, name: &str) -> Option<Font> {
        self.font_menu_open = false;
        let font = Font::from_name(name)?;
        self.presentation.font = font;
        Some(font)
    }
}

impl Default for LookupWidget {
    fn default() -> Self {
        Self::new()
    }
}
