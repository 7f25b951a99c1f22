use serde::Serialize;

/// Colour scheme of the rendered output. Persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Anything other than `"dark"` restores as light.
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            Self::Dark
        } else {
            Self::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

/// Font family choice. Lives for the session only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Font {
    #[default]
    SansSerif,
    Serif,
    Mono,
}

impl Font {
    pub const ALL: [Font; 3] = [Font::SansSerif, Font::Serif, Font::Mono];

    pub fn name(self) -> &'static str {
        match self {
            Self::SansSerif => "Sans Serif",
            Self::Serif => "Serif",
            Self::Mono => "Mono",
        }
    }

    pub fn family(self) -> &'static str {
        match self {
            Self::SansSerif => "Inter",
            Self::Serif => "Lora",
            Self::Mono => "Inconsolata",
        }
    }

    /// Resolves a display name, a family name or a close misspelling of either.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = normalize(name);
        if wanted.is_empty() {
            return None;
        }
        let exact = Self::ALL.into_iter().find(|font| {
            normalize(font.name()) == wanted || normalize(font.family()) == wanted
        });
        if exact.is_some() {
            return exact;
        }
        if let Some(alias) = match &wanted[..] {
            "sans" => Some(Self::SansSerif),
            "monospace" | "monospaced" => Some(Self::Mono),
            _ => None,
        } {
            return Some(alias);
        }

        let mut candidates = Self::ALL
            .into_iter()
            .map(|font| {
                let score = f64::max(
                    strsim::jaro(&normalize(font.name()), &wanted),
                    strsim::jaro(&normalize(font.family()), &wanted),
                );
                (font, score)
            })
            .collect::<Vec<(Font, f64)>>();
        // most similar at the start
        candidates.sort_unstable_by(|(_, a), (_, b)| b.total_cmp(a));
        let difference = candidates[0].1 - candidates[1].1;
        if candidates[0].1 > 0.9 && difference > 0.25 {
            Some(candidates[0].0)
        } else {
            None
        }
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Presentation context handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Presentation {
    pub theme: Theme,
    pub font: Font,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_families() {
        assert_eq!(Font::from_name("Serif").unwrap().family(), "Lora");
        assert_eq!(Font::from_name("Mono").unwrap().family(), "Inconsolata");
        assert_eq!(Font::from_name("Sans Serif").unwrap().family(), "Inter");
    }

    #[test]
    fn font_names_are_forgiving() {
        assert_eq!(Font::from_name("sans-serif"), Some(Font::SansSerif));
        assert_eq!(Font::from_name("SANS"), Some(Font::SansSerif));
        assert_eq!(Font::from_name("lora"), Some(Font::Serif));
        assert_eq!(Font::from_name("monospace"), Some(Font::Mono));
        assert_eq!(Font::from_name("Inconsolatta"), Some(Font::Mono));
    }

    #[test]
    fn unknown_fonts_are_rejected() {
        assert_eq!(Font::from_name(""), None);
        assert_eq!(Font::from_name("comic"), None);
        assert_eq!(Font::from_name("helvetica"), None);
    }

    #[test]
    fn theme_round_trips_through_storage_value() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_stored(theme.as_str()), theme);
        }
        assert_eq!(Theme::from_stored("sepia"), Theme::Light);
        assert_eq!(Theme::from_stored(""), Theme::Light);
    }

    #[test]
    fn toggling_twice_is_identity() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
    }

    #[test]
    fn defaults() {
        let presentation = Presentation::default();
        assert_eq!(presentation.theme, Theme::Light);
        assert_eq!(presentation.font, Font::SansSerif);
    }
}
