//! Internationalization (i18n) module for the zh-TW/en page localization.
//!
//! All locale metadata, the static dictionaries, persistence of the chosen
//! locale and the manager that rewrites marked page elements live here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for the supported locales
//! - `locale`: Validated `Locale` type
//! - `strings`: The static key/value tables for each locale
//! - `dictionary`: Indexed lookup with the identity fallback contract
//! - `store`: Persistence of the active locale
//! - `manager`: Applies the active locale to the page
//! - `validator`: Cross-locale dictionary consistency checks
//! - `metrics`: Lookup hit/fallback counters
//!
//! # Example
//!
//! ```rust,ignore
//! use minic_portal::i18n::{LocaleManager, MemoryLocaleStore};
//!
//! let mut manager = LocaleManager::new(Box::new(MemoryLocaleStore::new()), "zh-TW");
//! manager.initialize(&mut page);
//! manager.set_locale(&mut page, "en", true);
//! assert_eq!(manager.lookup("nav.home"), "Home");
//! ```

mod dictionary;
mod locale;
mod manager;
mod metrics;
mod registry;
mod store;
mod strings;
mod validator;

pub use dictionary::{lookup, Dictionary};
pub use locale::Locale;
pub use manager::{ApplyReport, LocaleManager};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LocaleConfig, LocaleRegistry};
pub use store::{FileLocaleStore, LocaleStore, MemoryLocaleStore};
pub use validator::{DictionaryValidator, ValidationReport};
