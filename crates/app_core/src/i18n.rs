//! Internationalization support using Fluent

use crate::AppError;
use fluent::{FluentBundle, FluentResource};

pub use fluent::FluentArgs;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use unic_langid::LanguageIdentifier;

const EN_FTL: &str = include_str!("../locales/en.ftl");
const GR_FTL: &str = include_str!("../locales/gr.ftl");

/// Languages the site is written in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    En,
    Gr,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::En, Language::Gr];

    /// Stored / configured code
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Gr => "gr",
        }
    }

    /// Toggle label shown in the header
    pub fn label(&self) -> &'static str {
        match self {
            Language::En => "EN",
            Language::Gr => "GR",
        }
    }

    /// BCP 47 identifier used for Fluent formatting
    fn langid(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Gr => "el",
        }
    }

    fn resource(&self) -> &'static str {
        match self {
            Language::En => EN_FTL,
            Language::Gr => GR_FTL,
        }
    }
}

impl FromStr for Language {
    type Err = AppError;

    /// Only the exact codes `"en"` and `"gr"` are recognized
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Language::En),
            "gr" => Ok(Language::Gr),
            other => Err(AppError::Config(format!("Unknown language: {:?}", other))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Localization manager
pub struct I18n {
    bundles: HashMap<Language, FluentBundle<FluentResource>>,
    current: Language,
    fallback: Language,
}

impl I18n {
    /// Create a manager with the embedded translations
    pub fn new(language: Language) -> Result<Self, AppError> {
        let mut bundles = HashMap::new();
        for lang in Language::ALL {
            bundles.insert(lang, Self::load_bundle(lang)?);
        }

        Ok(Self {
            bundles,
            current: language,
            fallback: Language::En,
        })
    }

    fn load_bundle(lang: Language) -> Result<FluentBundle<FluentResource>, AppError> {
        let lang_id: LanguageIdentifier = lang
            .langid()
            .parse()
            .map_err(|e| AppError::Init(format!("Invalid locale {}: {}", lang, e)))?;

        let resource = FluentResource::try_new(lang.resource().to_string()).map_err(|(_, errors)| {
            AppError::Init(format!("Fluent parse errors in {}: {:?}", lang, errors))
        })?;

        let mut bundle = FluentBundle::new(vec![lang_id]);
        // No bidi isolation marks around placeables; egui renders them as boxes
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| AppError::Init(format!("Fluent bundle errors: {:?}", errors)))?;

        tracing::debug!("Loaded locale: {}", lang);
        Ok(bundle)
    }

    pub fn set_language(&mut self, language: Language) {
        self.current = language;
    }

    pub fn language(&self) -> Language {
        self.current
    }

    /// Get a localized string
    pub fn get(&self, key: &str) -> String {
        self.get_with_args(key, None)
    }

    /// Get a localized string with arguments
    ///
    /// Falls back to English, then to the key itself.
    pub fn get_with_args(&self, key: &str, args: Option<&FluentArgs>) -> String {
        if let Some(text) = self.format(self.current, key, args) {
            return text;
        }

        if self.current != self.fallback {
            if let Some(text) = self.format(self.fallback, key, args) {
                return text;
            }
        }

        key.to_string()
    }

    /// Get a string only if the current language defines it
    pub fn get_local(&self, key: &str) -> Option<String> {
        self.format(self.current, key, None)
    }

    /// Numbered messages `<prefix>-1`, `<prefix>-2`, ... of the current language
    pub fn paragraphs(&self, prefix: &str) -> Vec<String> {
        (1..)
            .map(|n| self.get_local(&format!("{}-{}", prefix, n)))
            .take_while(Option::is_some)
            .flatten()
            .collect()
    }

    fn format(&self, lang: Language, key: &str, args: Option<&FluentArgs>) -> Option<String> {
        let bundle = self.bundles.get(&lang)?;
        let pattern = bundle.get_message(key)?.value()?;

        let mut errors = Vec::new();
        let result = bundle.format_pattern(pattern, args, &mut errors);
        if errors.is_empty() {
            Some(result.into_owned())
        } else {
            tracing::warn!(key, ?errors, "Fluent format errors");
            None
        }
    }
}

/// Convenience macro for getting localized strings
#[macro_export]
macro_rules! t {
    ($i18n:expr, $key:expr) => {
        $i18n.get($key)
    };
    ($i18n:expr, $key:expr, $($arg_name:ident = $arg_value:expr),+ $(,)?) => {{
        let mut args = $crate::i18n::FluentArgs::new();
        $(
            args.set(stringify!($arg_name), $arg_value);
        )+
        $i18n.get_with_args($key, Some(&args))
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_codes() {
        assert_eq!("en".parse::<Language>().unwrap(), Language::En);
        assert_eq!("gr".parse::<Language>().unwrap(), Language::Gr);
        assert!("el".parse::<Language>().is_err());
        assert!("GR".parse::<Language>().is_err());
        assert!("".parse::<Language>().is_err());
    }

    #[test]
    fn test_lookup_and_switch() {
        let mut i18n = I18n::new(Language::En).unwrap();
        assert_eq!(i18n.get("gallery-title"), "Collections");

        i18n.set_language(Language::Gr);
        assert_eq!(i18n.get("gallery-title"), "Συλλογές");
        assert_eq!(i18n.language(), Language::Gr);
    }

    #[test]
    fn test_fallback_to_english_then_key() {
        let i18n = I18n::new(Language::Gr).unwrap();
        assert_eq!(i18n.get("nav-gallery"), "Gallery");
        assert_eq!(i18n.get("no-such-message"), "no-such-message");
        assert!(i18n.get_local("nav-gallery").is_none());
    }

    #[test]
    fn test_paragraph_counts_differ_per_language() {
        let mut i18n = I18n::new(Language::En).unwrap();
        assert_eq!(i18n.paragraphs("about-paragraph").len(), 4);
        i18n.set_language(Language::Gr);
        let gr = i18n.paragraphs("about-paragraph");
        assert_eq!(gr.len(), 3);
        assert_eq!(gr[2], "Με έδρα την Αθήνα.");
    }

    #[test]
    fn test_args() {
        let i18n = I18n::new(Language::En).unwrap();
        let text = t!(i18n, "footer-rights", year = "2026");
        assert_eq!(text, "© 2026 All rights reserved");
    }
}
