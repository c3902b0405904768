//! Dictionary consistency check.
//!
//! Usage:
//!   cargo run --bin check-translations
//!
//! Compares every enabled locale against the default locale and exits with a
//! non-zero status if any key is missing or extra.

use anyhow::Result;
use minic_portal::i18n::{Dictionary, DictionaryValidator, Locale, LocaleRegistry};
use tracing::{error, info, warn};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("check_translations=info".parse()?),
        )
        .init();

    for config in LocaleRegistry::get().list_enabled() {
        let locale = Locale::from_code(config.code)?;
        let entries = Dictionary::for_code(locale.code()).map_or(0, Dictionary::len);
        info!(
            "{} {} ({}){}: {} entries",
            locale,
            locale.name(),
            locale.native_name(),
            if locale.is_default() { " [default]" } else { "" },
            entries
        );
    }

    let report = DictionaryValidator::validate_all();

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for problem in &report.errors {
        error!("{}", problem);
    }

    if report.has_errors() {
        anyhow::bail!("{} translation error(s) found", report.errors.len());
    }

    info!(
        "Translations consistent ({} warning(s))",
        report.warnings.len()
    );
    Ok(())
}
