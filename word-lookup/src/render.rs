use std::fmt::Write as _;

use atty::Stream;
use termimad::{FmtText, MadSkin, terminal_size};

use crate::presentation::{Font, Presentation};
use crate::view::{EntryView, MeaningView, View};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn print_view(view: &View, presentation: Presentation, mode: OutputMode) -> anyhow::Result<()> {
    match mode {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(view)?);
        }
        OutputMode::Text => {
            let markdown = view_markdown(view, presentation);
            if stdout_is_tty() {
                let skin = markdown_skin(presentation);
                let formatted = FmtText::from(&skin, &markdown, Some(markdown_width()));
                println!("{formatted}");
            } else {
                println!("{markdown}");
            }
        }
    }
    Ok(())
}

pub fn print_font_menu(presentation: Presentation) {
    println!("Fonts:");
    for font in Font::ALL {
        let marker = if font == presentation.font { "*" } else { " " };
        println!("  {marker} {} ({})", font.name(), font.family());
    }
}

pub fn view_markdown(view: &View, presentation: Presentation) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "*{} theme · {} ({})*\n",
        presentation.theme.as_str(),
        presentation.font.name(),
        presentation.font.family()
    );
    match view {
        View::Idle => {
            out.push_str("Search for any word...\n");
        }
        View::Searching { term } => {
            let _ = writeln!(out, "Searching for **{term}**...");
        }
        View::NotFound { title, message, .. } => {
            let _ = writeln!(out, "## {title}\n\n{message}");
        }
        View::Entry(entry) => write_entry(&mut out, entry),
    }
    out
}

fn write_entry(out: &mut String, entry: &EntryView) {
    let _ = writeln!(out, "# {}", entry.headword);
    if let Some(phonetic) = &entry.phonetic {
        if let Some(text) = &phonetic.text {
            let _ = write!(out, "\n{text}");
        }
        if phonetic.audio.is_some() {
            out.push_str("  ▶ `play`");
        }
        out.push('\n');
    }
    for meaning in &entry.meanings {
        write_meaning(out, meaning);
    }
    if !entry.source_urls.is_empty() {
        out.push_str("\n**Source**\n");
        for url in &entry.source_urls {
            let _ = writeln!(out, "* {url}");
        }
    }
}

fn write_meaning(out: &mut String, meaning: &MeaningView) {
    let _ = writeln!(out, "\n## {}\n\n**Meaning**", meaning.part_of_speech);
    for definition in &meaning.definitions {
        let _ = writeln!(out, "* {}", definition.definition);
        if let Some(example) = &definition.example {
            let _ = writeln!(out, "  \"{example}\"");
        }
        if !definition.synonyms.is_empty() {
            let _ = writeln!(out, "  Synonyms: {}", definition.synonyms.join(", "));
        }
    }
    if !meaning.synonyms.is_empty() {
        let _ = writeln!(out, "\n**Synonyms** {}", meaning.synonyms.join(", "));
    }
}

fn stdout_is_tty() -> bool {
    atty::is(Stream::Stdout)
}

fn markdown_width() -> usize {
    let (width, _) = terminal_size();
    width.max(60) as usize
}

fn markdown_skin(presentation: Presentation) -> MadSkin {
    if presentation.theme.is_dark() {
        MadSkin::default_dark()
    } else {
        MadSkin::default_light()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::{Font, Theme};
    use crate::view::{DefinitionView, PhoneticView};

    fn entry(meanings: Vec<MeaningView>) -> View {
        View::Entry(EntryView {
            headword: "hello".to_string(),
            phonetic: Some(PhoneticView {
                text: Some("/həˈləʊ/".to_string()),
                audio: None,
            }),
            meanings,
            source_urls: vec!["https://en.wiktionary.org/wiki/hello".to_string()],
        })
    }

    fn meaning(part_of_speech: &str) -> MeaningView {
        MeaningView {
            part_of_speech: part_of_speech.to_string(),
            definitions: vec![DefinitionView {
                definition: "A greeting.".to_string(),
                example: Some("Hello, everyone.".to_string()),
                synonyms: vec!["hi".to_string()],
            }],
            synonyms: vec!["greeting".to_string()],
        }
    }

    #[test]
    fn header_names_theme_and_font_family() {
        let presentation = Presentation {
            theme: Theme::Dark,
            font: Font::Serif,
        };
        let text = view_markdown(&View::Idle, presentation);
        assert!(text.starts_with("*dark theme · Serif (Lora)*"));
    }

    #[test]
    fn not_found_shows_message_and_no_word_content() {
        let text = view_markdown(&View::not_found("qwertyuiop"), Presentation::default());
        assert!(text.contains("No Definitions Found"));
        assert!(!text.contains("**Meaning**"));
        assert!(!text.contains("# qwertyuiop"));
    }

    #[test]
    fn entry_lists_meanings_examples_and_sources() {
        let text = view_markdown(&entry(vec![meaning("noun")]), Presentation::default());
        assert!(text.contains("# hello"));
        assert!(text.contains("/həˈləʊ/"));
        assert!(!text.contains("`play`"));
        assert!(text.contains("## noun"));
        assert!(text.contains("\"Hello, everyone.\""));
        assert!(text.contains("Synonyms: hi"));
        assert!(text.contains("**Synonyms** greeting"));
        assert!(text.contains("* https://en.wiktionary.org/wiki/hello"));
        assert_eq!(text.matches("**Meaning**").count(), 1);
    }

    #[test]
    fn json_view_is_tagged_by_state() {
        let value = serde_json::to_value(View::not_found("qwertyuiop")).unwrap();
        assert_eq!(value["state"], "not_found");
        assert_eq!(value["term"], "qwertyuiop");
    }
}
