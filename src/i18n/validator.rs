//! Dictionary consistency validation.
//!
//! Every locale must carry the same key set as the default locale; values
//! must not be empty, and URLs or `{placeholder}` tokens present in one
//! locale's value should survive into the other's.

use crate::i18n::{Dictionary, Locale, LocaleRegistry};
use regex::Regex;
use std::collections::{BTreeSet, HashSet};
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the dictionaries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that make a locale render keys instead of text
    pub errors: Vec<String>,

    /// Suspicious but non-blocking issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct DictionaryValidator;

static URL_REGEX: OnceLock<Regex> = OnceLock::new();
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl DictionaryValidator {
    /// Validate every enabled locale against the default locale.
    pub fn validate_all() -> ValidationReport {
        let reference = Dictionary::for_locale(Locale::default_locale());
        let mut report = ValidationReport::new();

        for config in LocaleRegistry::get().list_enabled() {
            let Some(other) = Dictionary::for_code(config.code) else {
                report
                    .errors
                    .push(format!("{}: no dictionary registered", config.code));
                continue;
            };
            report.merge(Self::validate_entries(other));
            if other.locale() != reference.locale() {
                report.merge(Self::validate(reference, other));
            }
        }

        report
    }

    /// Compare `other` against `reference`.
    pub fn validate(reference: &Dictionary, other: &Dictionary) -> ValidationReport {
        Self::validate_tables(
            reference.locale().code(),
            reference.raw_entries(),
            other.locale().code(),
            other.raw_entries(),
        )
    }

    /// Check one table on its own: duplicate keys and empty values.
    pub fn validate_entries(dictionary: &Dictionary) -> ValidationReport {
        Self::validate_table(dictionary.locale().code(), dictionary.raw_entries())
    }

    fn validate_table(code: &str, table: &[(&str, &str)]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let mut seen = HashSet::new();

        for (key, value) in table {
            if !seen.insert(*key) {
                report
                    .warnings
                    .push(format!("{}: duplicate key '{}' (last value wins)", code, key));
            }
            if value.trim().is_empty() {
                report
                    .warnings
                    .push(format!("{}: empty value for '{}'", code, key));
            }
        }

        report
    }

    fn validate_tables(
        reference_code: &str,
        reference: &[(&str, &str)],
        other_code: &str,
        other: &[(&str, &str)],
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        let reference_keys: BTreeSet<&str> = reference.iter().map(|(k, _)| *k).collect();
        let other_keys: BTreeSet<&str> = other.iter().map(|(k, _)| *k).collect();

        for key in reference_keys.difference(&other_keys) {
            report
                .errors
                .push(format!("{}: missing key '{}'", other_code, key));
        }
        for key in other_keys.difference(&reference_keys) {
            report.errors.push(format!(
                "{}: key '{}' not present in {}",
                other_code, key, reference_code
            ));
        }

        for (key, reference_value) in reference {
            let Some((_, other_value)) = other.iter().rev().find(|(k, _)| k == key) else {
                continue;
            };

            let reference_urls = Self::extract_urls(reference_value);
            let other_urls = Self::extract_urls(other_value);
            if reference_urls != other_urls {
                report.warnings.push(format!(
                    "{}: URL mismatch for '{}': {} has {:?}, {} has {:?}",
                    other_code, key, reference_code, reference_urls, other_code, other_urls
                ));
            }

            let reference_placeholders = Self::extract_placeholders(reference_value);
            let other_placeholders = Self::extract_placeholders(other_value);
            if reference_placeholders != other_placeholders {
                report.warnings.push(format!(
                    "{}: placeholder mismatch for '{}': {} has {:?}, {} has {:?}",
                    other_code,
                    key,
                    reference_code,
                    reference_placeholders,
                    other_code,
                    other_placeholders
                ));
            }
        }

        report
    }

    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn extract_placeholders(text: &str) -> BTreeSet<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| Regex::new(r"\{([a-z_]+)\}").unwrap());

        regex
            .captures_iter(text)
            .filter_map(|cap| cap.get(0).map(|m| m.as_str().to_string()))
            .collect()
    }
}
