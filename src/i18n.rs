//! English / Arabic display strings.
//!
//! English is the source language: every label in the app is written in
//! English and looked up here when Arabic is selected. Missing keys fall
//! back to the English text, so an untranslated label is never blank.

use std::borrow::Cow;
use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

const EMBEDDED_AR: &str = include_str!("../assets/translations_ar.json");

/// Label prefixes followed by a number, e.g. `"Global Average: 22450"`.
/// Only the prefix is translated.
const TRANSLATABLE_PREFIXES: &[&str] = &["Global Average:"];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Arabic,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Arabic => "ar",
        }
    }

    /// Accepts ISO codes and the lowercase English names.
    pub fn from_code(code: &str) -> Option<Language> {
        match code {
            "en" | "english" => Some(Language::English),
            "ar" | "arabic" => Some(Language::Arabic),
            _ => None,
        }
    }

    pub fn toggle(self) -> Language {
        match self {
            Language::English => Language::Arabic,
            Language::Arabic => Language::English,
        }
    }

    /// Name of the language in itself, for the toggle button.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Arabic => "العربية",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Language::Arabic)
    }
}

/// Immutable English → Arabic catalog.
#[derive(Debug, Clone, Default)]
pub struct Translations {
    arabic: HashMap<String, String>,
}

impl Translations {
    pub fn embedded() -> Result<Self> {
        Self::from_json_str(EMBEDDED_AR).context("parsing embedded Arabic translations")
    }

    pub fn from_json_str(text: &str) -> Result<Self> {
        let arabic: HashMap<String, String> = serde_json::from_str(text)?;
        Ok(Translations { arabic })
    }

    /// Translate `text` into `lang`.
    ///
    /// Lookup order for Arabic: exact match, then a known prefix with the
    /// remainder kept verbatim, then the input unchanged.
    pub fn translate<'a>(&'a self, lang: Language, text: &'a str) -> Cow<'a, str> {
        if lang == Language::English {
            return Cow::Borrowed(text);
        }
        if let Some(t) = self.arabic.get(text) {
            return Cow::Borrowed(t.as_str());
        }
        for prefix in TRANSLATABLE_PREFIXES {
            if let Some(rest) = text.strip_prefix(prefix) {
                let head = self.arabic.get(*prefix).map_or(*prefix, String::as_str);
                return Cow::Owned(format!("{head} {}", rest.trim()));
            }
        }
        Cow::Borrowed(text)
    }

    /// Whether an Arabic entry exists for `text`.
    pub fn has(&self, text: &str) -> bool {
        self.arabic.contains_key(text)
    }
}
