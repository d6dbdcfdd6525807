//! Internationalization (i18n) module for Cosmic Folio
//!
//! Locale tags, language display names and the translation catalog used by
//! the page chrome. Site content itself is not translated here.

use crate::error::{LocaleError, LocaleResult};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Language used when a key or language is missing from the catalog
pub const FALLBACK_LANGUAGE: &str = "en";

/// Language, optional script, optional region
static TAG_PATTERN: OnceLock<Regex> = OnceLock::new();

fn tag_pattern() -> &'static Regex {
    TAG_PATTERN.get_or_init(|| {
        Regex::new(r"^[a-z]{2,3}(-[A-Z][a-z]{3})?(-([A-Z]{2}|[0-9]{3}))?$")
            .expect("locale tag pattern is valid")
    })
}

/// A validated locale tag such as `en-US` or `fr`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LocaleTag(String);

impl LocaleTag {
    /// Parse and validate a tag
    pub fn parse(tag: &str) -> LocaleResult<Self> {
        let tag = tag.trim();
        if tag_pattern().is_match(tag) {
            Ok(Self(tag.to_string()))
        } else {
            Err(LocaleError::InvalidTag {
                tag: tag.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Language subtag (`en` for `en-US`)
    pub fn language(&self) -> &str {
        self.0.split('-').next().unwrap_or(&self.0)
    }

    /// Compact label for the trigger button (`EN`)
    pub fn short_label(&self) -> String {
        self.language().to_uppercase()
    }

    /// Name of the language written in that language
    pub fn display_name(&self) -> String {
        display_name(self.language())
    }
}

impl fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse a list of tags, rejecting duplicates
pub fn parse_tags<'a>(tags: impl IntoIterator<Item = &'a str>) -> LocaleResult<Vec<LocaleTag>> {
    let mut parsed: Vec<LocaleTag> = Vec::new();
    for tag in tags {
        let tag = LocaleTag::parse(tag)?;
        if parsed.contains(&tag) {
            return Err(LocaleError::Duplicate {
                tag: tag.to_string(),
            });
        }
        parsed.push(tag);
    }
    Ok(parsed)
}

/// Endonym for a language subtag, or the subtag itself if unknown
pub fn display_name(language: &str) -> String {
    let name = match language {
        "en" => "English",
        "fr" => "français",
        "de" => "Deutsch",
        "es" => "español",
        "it" => "italiano",
        "pt" => "português",
        "nl" => "Nederlands",
        "pl" => "polski",
        "lt" => "lietuvių",
        "lv" => "latviešu",
        "et" => "eesti",
        "sv" => "svenska",
        "fi" => "suomi",
        "da" => "dansk",
        "nb" => "norsk bokmål",
        "ru" => "русский",
        "uk" => "українська",
        "ja" => "日本語",
        "zh" => "中文",
        "ko" => "한국어",
        other => return other.to_string(),
    };
    name.to_string()
}

type Catalog = &'static [(&'static str, &'static str)];

const EN: Catalog = &[
    ("header.language", "Language"),
    ("header.languageExpanded", "list shown"),
    ("header.languageCollapsed", "list hidden"),
    ("nav.home", "Home"),
    ("nav.blog", "Blog"),
    ("landingPage.welcome", "Welcome"),
    ("landingPage.latestArticles", "Latest articles"),
    ("page.location", "You are viewing"),
];

const FR: Catalog = &[
    ("header.language", "Langue"),
    ("header.languageExpanded", "liste affichée"),
    ("header.languageCollapsed", "liste masquée"),
    ("nav.home", "Accueil"),
    ("nav.blog", "Blog"),
    ("landingPage.welcome", "Bienvenue"),
    ("landingPage.latestArticles", "Derniers articles"),
    ("page.location", "Vous consultez"),
];

const DE: Catalog = &[
    ("header.language", "Sprache"),
    ("header.languageExpanded", "Liste angezeigt"),
    ("header.languageCollapsed", "Liste ausgeblendet"),
    ("nav.home", "Startseite"),
    ("nav.blog", "Blog"),
    ("landingPage.welcome", "Willkommen"),
    ("landingPage.latestArticles", "Neueste Artikel"),
    ("page.location", "Sie sehen"),
];

const ES: Catalog = &[
    ("header.language", "Idioma"),
    ("header.languageExpanded", "lista visible"),
    ("header.languageCollapsed", "lista oculta"),
    ("nav.home", "Inicio"),
    ("nav.blog", "Blog"),
    ("landingPage.welcome", "Bienvenido"),
    ("landingPage.latestArticles", "Últimos artículos"),
    ("page.location", "Estás viendo"),
];

const LT: Catalog = &[
    ("header.language", "Kalba"),
    ("header.languageExpanded", "sąrašas rodomas"),
    ("header.languageCollapsed", "sąrašas paslėptas"),
    ("nav.home", "Pradžia"),
    ("nav.blog", "Tinklaraštis"),
    ("landingPage.welcome", "Sveiki"),
    ("landingPage.latestArticles", "Naujausi straipsniai"),
    ("page.location", "Jūs žiūrite"),
];

fn catalog(language: &str) -> Option<Catalog> {
    match language {
        "en" => Some(EN),
        "fr" => Some(FR),
        "de" => Some(DE),
        "es" => Some(ES),
        "lt" => Some(LT),
        _ => None,
    }
}

fn lookup(catalog: Catalog, key: &str) -> Option<&'static str> {
    catalog
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, value)| *value)
}

/// Translate `key` for `locale`, falling back to English and then the key
pub fn translate(locale: &LocaleTag, key: &str) -> String {
    catalog(locale.language())
        .and_then(|c| lookup(c, key))
        .or_else(|| catalog(FALLBACK_LANGUAGE).and_then(|c| lookup(c, key)))
        .map(str::to_string)
        .unwrap_or_else(|| {
            log::warn!("missing translation for {} ({})", key, locale);
            key.to_string()
        })
}

/// Look up a translated string for a locale
#[macro_export]
macro_rules! fl {
    ($locale:expr, $message_id:literal) => {
        $crate::i18n::translate($locale, $message_id)
    };
}
