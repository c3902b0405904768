//! Indexed, immutable dictionaries built from the static string tables.

use crate::i18n::strings::{EN_STRINGS, ZH_TW_STRINGS};
use crate::i18n::{Locale, LocaleRegistry};
use std::collections::HashMap;
use std::sync::OnceLock;

/// The translations of one locale.
#[derive(Debug)]
pub struct Dictionary {
    locale: Locale,
    table: &'static [(&'static str, &'static str)],
    entries: HashMap<&'static str, &'static str>,
}

static DICTIONARIES: OnceLock<Vec<Dictionary>> = OnceLock::new();

impl Dictionary {
    fn build(locale: Locale) -> Dictionary {
        let table = table_for(locale);
        Dictionary {
            locale,
            table,
            // later duplicates win, matching object-literal semantics
            entries: table.iter().copied().collect(),
        }
    }

    fn all() -> &'static [Dictionary] {
        DICTIONARIES.get_or_init(|| {
            LocaleRegistry::get()
                .list_enabled()
                .into_iter()
                .filter_map(|config| Locale::from_code(config.code).ok())
                .map(Dictionary::build)
                .collect()
        })
    }

    /// Dictionary for a registered locale.
    ///
    /// # Panics
    /// Panics if the locale has no table, which indicates a registry entry
    /// without strings.
    pub fn for_locale(locale: Locale) -> &'static Dictionary {
        Self::all()
            .iter()
            .find(|dictionary| dictionary.locale == locale)
            .expect("Every enabled locale should have a dictionary")
    }

    /// Dictionary for a locale code, or `None` if the code is not supported.
    pub fn for_code(code: &str) -> Option<&'static Dictionary> {
        Self::all()
            .iter()
            .find(|dictionary| dictionary.locale.code() == code)
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries.get(key).copied()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The raw table, duplicates and all, in source order.
    pub fn raw_entries(&self) -> &'static [(&'static str, &'static str)] {
        self.table
    }
}

fn table_for(locale: Locale) -> &'static [(&'static str, &'static str)] {
    match locale.code() {
        "en" => EN_STRINGS,
        _ => ZH_TW_STRINGS,
    }
}

/// Translate `key` for the locale `code`.
///
/// This is the documented fallback contract: an unsupported locale or an
/// absent key returns `key` itself. It never fails.
pub fn lookup<'a>(code: &str, key: &'a str) -> &'a str {
    Dictionary::for_code(code)
        .and_then(|dictionary| dictionary.get(key))
        .unwrap_or(key)
}
