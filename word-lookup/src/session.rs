use std::sync::Arc;

use dictionary::{DictionaryError, LookupSource, Word};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::{self, UnboundedSender};

use crate::audio::AudioPlayer;
use crate::render::{print_font_menu, print_view, OutputMode};
use crate::storage::Storage;
use crate::utilities::{prompt, rest_of_line};
use crate::widget::{LookupPhase, LookupWidget, SearchTicket};

type Outcome = (SearchTicket, Result<Word, DictionaryError>);

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Define(String),
    Play,
    Theme,
    Font(Option<String>),
    Help,
    Exit,
    Unknown(String),
    Empty,
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        let mut command_parts = line.split_ascii_whitespace();
        let Some(command) = command_parts.next() else {
            return Self::Empty;
        };
        match command {
            "exit" | "leave" | "quit" | "e" | "q" | "l" => Self::Exit,
            "define" | "find" => Self::Define(rest_of_line(command_parts)),
            "play" | "p" => Self::Play,
            "theme" | "t" => Self::Theme,
            "font" | "f" => {
                let name = rest_of_line(command_parts);
                Self::Font((!name.is_empty()).then_some(name))
            }
            "help" | "?" => Self::Help,
            // a lone word is searched directly
            _ if command_parts.next().is_none() => Self::Define(command.to_owned()),
            other => Self::Unknown(other.to_owned()),
        }
    }
}

pub struct Session {
    widget: LookupWidget,
    storage: Storage,
    source: Arc<dyn LookupSource>,
    player: Box<dyn AudioPlayer>,
    output: OutputMode,
}

impl Session {
    pub fn new(
        widget: LookupWidget,
        storage: Storage,
        source: Arc<dyn LookupSource>,
        player: Box<dyn AudioPlayer>,
        output: OutputMode,
    ) -> Self {
        Self {
            widget,
            storage,
            source,
            player,
            output,
        }
    }

    pub async fn run(mut self) -> anyhow::Result<()> {
        print_help();
        self.drive(BufReader::new(tokio::io::stdin())).await
    }

    /// Reads commands until `exit` or end of input. A search still pending at
    /// end of input is waited for and shown before returning.
    pub async fn drive<R>(&mut self, reader: R) -> anyhow::Result<()>
    where
        R: AsyncBufRead + Unpin,
    {
        let (outcome_tx, mut outcome_rx) = mpsc::unbounded_channel::<Outcome>();
        let mut lines = reader.lines();

        prompt(">> ")?;
        loop {
            tokio::select! {
                line = lines.next_line() => {
                    let Some(line) = line? else {
                        println!();
                        break;
                    };
                    match Command::parse(&line) {
                        Command::Exit => return Ok(()),
                        command => self.handle(command, &outcome_tx).await?,
                    }
                }
                Some((ticket, outcome)) = outcome_rx.recv() => {
                    self.apply(ticket, outcome)?;
                }
            }
            prompt(">> ")?;
        }

        // spawned lookups hold the remaining senders
        drop(outcome_tx);
        while self.widget.phase() == LookupPhase::Searching {
            let Some((ticket, outcome)) = outcome_rx.recv().await else {
                break;
            };
            self.apply(ticket, outcome)?;
        }
        Ok(())
    }

    fn apply(
        &mut self,
        ticket: SearchTicket,
        outcome: Result<Word, DictionaryError>,
    ) -> anyhow::Result<()> {
        if self.widget.commit(ticket, outcome) {
            println!();
            self.show()?;
        }
        Ok(())
    }

    async fn handle(
        &mut self,
        command: Command,
        outcome_tx: &UnboundedSender<Outcome>,
    ) -> anyhow::Result<()> {
        match command {
            Command::Define(term) => {
                let Some(ticket) = self.widget.submit_search(&term) else {
                    println!("Type a word to search for.");
                    return Ok(());
                };
                self.show()?;
                let source = Arc::clone(&self.source);
                let outcome_tx = outcome_tx.clone();
                tokio::spawn(async move {
                    let outcome = source.lookup(ticket.term()).await;
                    // the receiver only goes away when the session ends
                    let _ = outcome_tx.send((ticket, outcome));
                });
            }
            Command::Play => {
                if self.widget.phase() == LookupPhase::Searching {
                    println!("Still looking up {}.", self.widget.term().unwrap_or_default());
                } else if self.widget.result().is_none() {
                    println!("Search for a word first.");
                } else if !self.widget.play_audio(self.player.as_ref()) {
                    println!("No pronunciation audio for this word.");
                }
            }
            Command::Theme => {
                let theme = self.widget.toggle_theme(&self.storage).await?;
                tracing::info!(theme = theme.as_str(), "theme changed");
                self.show()?;
            }
            Command::Font(None) => {
                self.widget.toggle_font_menu();
                if self.widget.is_font_menu_open() {
                    print_font_menu(self.widget.presentation());
                    println!("Choose one with `font <name>`.");
                } else {
                    println!("Font menu closed.");
                }
            }
            Command::Font(Some(name)) => match self.widget.select_font(&name) {
                Some(font) => {
                    tracing::info!(font = font.name(), family = font.family(), "font changed");
                    self.show()?;
                }
                None => println!("Unknown font {name}."),
            },
            Command::Help => print_help(),
            Command::Unknown(command) => println!("Unknown command {command}."),
            Command::Empty | Command::Exit => {}
        }
        Ok(())
    }

    fn show(&self) -> anyhow::Result<()> {
        print_view(&self.widget.render(), self.widget.presentation(), self.output)
    }
}

fn print_help() {
    println!("Commands:");
    println!("  <word> | define <word>   look a word up");
    println!("  play                     play the pronunciation");
    println!("  theme                    switch between light and dark");
    println!("  font [name]              list fonts or pick one");
    println!("  quit                     leave");
}
