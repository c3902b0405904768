//! Locale manager: owns the active locale and rewrites the page's marked
//! elements from the static dictionaries.

use crate::i18n::{Dictionary, Locale, LocaleRegistry, LocaleStore, LookupMetrics};
use crate::page::{ElementKind, Page};
use tracing::{debug, info, warn};

/// Outcome of one translation pass over the page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ApplyReport {
    /// Elements whose text or placeholder was set
    pub translated: usize,
    /// Elements left unchanged because their key had no translation
    pub missing: usize,
}

pub struct LocaleManager {
    current: String,
    default_code: String,
    store: Box<dyn LocaleStore>,
    metrics: LookupMetrics,
}

impl LocaleManager {
    /// Build a manager. Nothing is rendered until [`initialize`](Self::initialize).
    pub fn new(store: Box<dyn LocaleStore>, default_code: impl Into<String>) -> Self {
        let default_code = default_code.into();
        Self {
            current: default_code.clone(),
            default_code,
            store,
            metrics: LookupMetrics::new(),
        }
    }

    /// Restore the persisted locale (or the default), render it without
    /// persisting again, and bind the page's locale switches.
    ///
    /// Returns the number of locale switches found.
    pub fn initialize(&mut self, page: &mut Page) -> usize {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read stored locale, using default: {:#}", e);
                None
            }
        };
        let code = stored.unwrap_or_else(|| self.default_code.clone());
        if !LocaleRegistry::get().is_enabled(&code) {
            warn!("Locale '{}' is not registered, page text stays as authored", code);
        }

        self.set_locale(page, &code, false);

        info!("Found {} locale switches", page.switches.len());
        page.switches.len()
    }

    /// Make `code` the active locale and re-render the page.
    ///
    /// Unrecognized codes are accepted and kept; they simply produce no
    /// translations. Store failures are logged and otherwise ignored.
    pub fn set_locale(&mut self, page: &mut Page, code: &str, persist: bool) {
        debug!("Switching locale to {}", code);
        self.current = code.to_string();

        if persist {
            if let Err(e) = self.store.save(code) {
                warn!("Failed to persist locale '{}': {:#}", code, e);
            }
        }

        page.lang = match Locale::from_code(code) {
            Ok(locale) => locale.html_lang().to_string(),
            Err(_) => code.to_string(),
        };
        let report = self.apply_translations(page);
        self.update_switches(page);

        debug!(
            "Locale {} applied: {} translated, {} unchanged",
            code, report.translated, report.missing
        );
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Rewrite every `data-i18n` and `data-i18n-content` element.
    ///
    /// Labels on text inputs receive the translation as placeholder, every
    /// other label and every prose block as text. Card titles and
    /// descriptions that carry a key follow their elements, so search and
    /// title sort see the displayed text. A key without translation leaves
    /// its element untouched.
    ///
    /// Only the render is counted; hit and fallback counters track
    /// [`lookup`](Self::lookup) calls.
    pub fn apply_translations(&self, page: &mut Page) -> ApplyReport {
        let mut report = ApplyReport::default();

        for element in page.labels.iter_mut() {
            match self.translate(&element.key) {
                Some(value) => {
                    match element.kind {
                        ElementKind::TextInput => element.placeholder = Some(value.to_string()),
                        ElementKind::SelectOption | ElementKind::Text => {
                            element.text = value.to_string()
                        }
                    }
                    report.translated += 1;
                }
                None => report.missing += 1,
            }
        }

        for element in page.prose.iter_mut() {
            match self.translate(&element.key) {
                Some(value) => {
                    element.text = value.to_string();
                    report.translated += 1;
                }
                None => report.missing += 1,
            }
        }

        // card text mirrors its marked elements, already counted above
        for view in page.cards.iter_mut() {
            if let Some(title) = view.title_key.as_deref().and_then(|key| self.translate(key)) {
                view.card.title = title.to_string();
            }
            if let Some(description) = view
                .description_key
                .as_deref()
                .and_then(|key| self.translate(key))
            {
                view.card.description = description.to_string();
            }
        }

        self.metrics.record_render();
        report
    }

    /// The translation of `key` under the active locale, if there is one.
    pub fn translate(&self, key: &str) -> Option<&'static str> {
        Dictionary::for_code(&self.current).and_then(|dictionary| dictionary.get(key))
    }

    /// Translate `key`, falling back to the key itself.
    ///
    /// This never fails: an unrecognized active locale or an absent key both
    /// return `key` unchanged.
    pub fn lookup<'a>(&self, key: &'a str) -> &'a str {
        match self.translate(key) {
            Some(value) => {
                self.metrics.record_hit();
                value
            }
            None => {
                self.metrics.record_fallback();
                key
            }
        }
    }

    pub fn metrics(&self) -> &LookupMetrics {
        &self.metrics
    }

    fn update_switches(&self, page: &mut Page) {
        for switch in page.switches.iter_mut() {
            let active = switch.code == self.current;
            switch.active = active;
            switch.bold = active;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::MemoryLocaleStore;
    use anyhow::{bail, Result};

    const PAGE: &str = r#"<html lang="zh-TW"><body>
      <a data-lang="zh-TW" class="active" style="font-weight: bold">中文</a>
      <a data-lang="en">EN</a>
      <span data-i18n="nav.brand">Minic</span>
      <span data-i18n="nav.home">首頁</span>
      <input id="searchInput" data-i18n="hero.search_placeholder" placeholder="搜尋資料庫...">
      <select id="sortSelect"><option value="latest" data-i18n="filter.latest">最新</option></select>
      <span data-i18n="nav.not_a_key">原文</span>
      <p data-i18n-content="db2.description">長篇描述</p>
      <div class="resource-card" data-type="database" data-access="restricted">
        <h5 class="resource-title"><a href="/database/db2" data-i18n="db2.title">大腦意識資料庫</a></h5>
        <p class="resource-description" data-i18n-content="db2.description">研究大腦</p>
        <div class="resource-meta"><p>發布日期: 2024-01-01</p><p>大小: 10 GB</p></div>
      </div>
    </body></html>"#;

    struct FailingStore;

    impl LocaleStore for FailingStore {
        fn load(&self) -> Result<Option<String>> {
            bail!("storage unavailable")
        }

        fn save(&self, _code: &str) -> Result<()> {
            bail!("storage unavailable")
        }
    }

    fn manager(store: impl LocaleStore + 'static) -> LocaleManager {
        LocaleManager::new(Box::new(store), "zh-TW")
    }

    fn label<'a>(page: &'a Page, key: &str) -> &'a crate::page::MarkedElement {
        page.labels.iter().find(|label| label.key == key).unwrap()
    }

    // ==================== Initialize Tests ====================

    #[test]
    fn test_initialize_defaults_to_zh_tw() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(MemoryLocaleStore::new());

        let switches = manager.initialize(&mut page);

        assert_eq!(switches, 2);
        assert_eq!(manager.current(), "zh-TW");
        assert_eq!(page.lang, "zh-TW");
        assert_eq!(label(&page, "nav.home").text, "首頁");
    }

    #[test]
    fn test_initialize_restores_persisted_locale_without_saving() {
        let mut page = Page::parse(PAGE);
        let store = std::sync::Arc::new(MemoryLocaleStore::with_value("en"));
        let mut manager = LocaleManager::new(Box::new(store.clone()), "zh-TW");

        manager.initialize(&mut page);

        assert_eq!(manager.current(), "en");
        assert_eq!(page.lang, "en");
        assert_eq!(label(&page, "nav.home").text, "Home");
        assert!(page.switches[1].active && page.switches[1].bold);
        assert!(!page.switches[0].active && !page.switches[0].bold);
        assert_eq!(store.load().unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_initialize_with_failing_store_uses_default() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(FailingStore);

        manager.initialize(&mut page);
        assert_eq!(manager.current(), "zh-TW");
    }

    // ==================== set_locale Tests ====================

    #[test]
    fn test_set_locale_rewrites_every_element_kind() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(MemoryLocaleStore::new());
        manager.initialize(&mut page);

        manager.set_locale(&mut page, "en", true);

        assert_eq!(label(&page, "nav.home").text, "Home");
        assert_eq!(
            label(&page, "hero.search_placeholder").placeholder.as_deref(),
            Some("Search databases...")
        );
        assert_eq!(label(&page, "filter.latest").text, "Latest");
        assert!(page.prose[0].text.starts_with("A comprehensive database"));
        // missing key leaves the element as it was
        assert_eq!(label(&page, "nav.not_a_key").text, "原文");
    }

    #[test]
    fn test_set_locale_persists_only_when_asked() {
        let store = std::sync::Arc::new(MemoryLocaleStore::new());
        let mut manager = LocaleManager::new(Box::new(store.clone()), "zh-TW");
        let mut page = Page::parse(PAGE);

        manager.set_locale(&mut page, "en", false);
        assert_eq!(store.load().unwrap(), None);

        manager.set_locale(&mut page, "en", true);
        assert_eq!(store.load().unwrap(), Some("en".to_string()));
    }

    #[test]
    fn test_set_locale_tolerates_store_failure() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(FailingStore);

        manager.set_locale(&mut page, "en", true);
        assert_eq!(manager.current(), "en");
        assert_eq!(label(&page, "nav.home").text, "Home");
    }

    #[test]
    fn test_round_trip_restores_original_rendering() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(MemoryLocaleStore::new());
        manager.initialize(&mut page);
        let before = (page.labels.clone(), page.prose.clone());

        manager.set_locale(&mut page, "en", true);
        manager.set_locale(&mut page, "zh-TW", true);

        assert_eq!(before.0, page.labels);
        assert_eq!(before.1, page.prose);
        assert!(page.prose[0].text.starts_with("研究大腦意識狀態"));
    }

    #[test]
    fn test_card_text_follows_locale() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(MemoryLocaleStore::new());
        manager.initialize(&mut page);
        let zh_card = page.cards[0].card.clone();
        assert_eq!(zh_card.title, "大腦意識資料庫");

        manager.set_locale(&mut page, "en", true);
        let card = &page.cards[0].card;
        assert_eq!(card.title, "Brain Consciousness Database");
        assert!(card.description.contains("neuroplasticity"));
        assert!(card.matches_lowercase("neuroplasticity"));
        assert_eq!(card.size_text, zh_card.size_text);

        manager.set_locale(&mut page, "zh-TW", true);
        assert_eq!(page.cards[0].card, zh_card);
    }

    #[test]
    fn test_html_lang_comes_from_registry() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(MemoryLocaleStore::new());

        manager.set_locale(&mut page, "en", false);
        assert_eq!(page.lang, Locale::EN.html_lang());
        manager.set_locale(&mut page, "zh-TW", false);
        assert_eq!(page.lang, Locale::ZH_TW.html_lang());
        // unregistered codes are written as given
        manager.set_locale(&mut page, "fr", false);
        assert_eq!(page.lang, "fr");
    }

    #[test]
    fn test_reselecting_active_locale_only_rerenders() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(MemoryLocaleStore::new());
        manager.set_locale(&mut page, "en", false);
        let labels = page.labels.clone();

        manager.set_locale(&mut page, "en", false);
        assert_eq!(labels, page.labels);
        assert_eq!(manager.metrics().renders(), 2);
    }

    #[test]
    fn test_unrecognized_locale_is_kept_and_translates_nothing() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(MemoryLocaleStore::with_value("fr"));

        manager.initialize(&mut page);

        assert_eq!(manager.current(), "fr");
        assert_eq!(page.lang, "fr");
        assert_eq!(label(&page, "nav.home").text, "首頁");
        assert!(page.switches.iter().all(|switch| !switch.active));
    }

    // ==================== Lookup Tests ====================

    #[test]
    fn test_lookup_brand_under_both_locales() {
        let mut page = Page::default();
        let mut manager = manager(MemoryLocaleStore::new());

        manager.set_locale(&mut page, "zh-TW", false);
        assert_eq!(manager.lookup("nav.brand"), "Minic");
        manager.set_locale(&mut page, "en", false);
        assert_eq!(manager.lookup("nav.brand"), "Minic");
    }

    #[test]
    fn test_lookup_unknown_key_is_identity() {
        let manager = manager(MemoryLocaleStore::new());
        assert_eq!(manager.lookup("nav.missing"), "nav.missing");
        assert_eq!(manager.translate("nav.missing"), None);
    }

    #[test]
    fn test_lookup_counts_hits_and_fallbacks() {
        let manager = manager(MemoryLocaleStore::new());
        manager.lookup("nav.home");
        manager.lookup("nav.missing");

        let report = manager.metrics().report();
        assert_eq!(report.hits, 1);
        assert_eq!(report.fallbacks, 1);
    }

    #[test]
    fn test_rendering_does_not_count_as_lookups() {
        let mut page = Page::parse(PAGE);
        let mut manager = manager(MemoryLocaleStore::new());

        // nav.not_a_key has no translation in either locale
        manager.initialize(&mut page);
        manager.set_locale(&mut page, "en", false);
        let report = manager.apply_translations(&mut page);
        assert!(report.missing > 0);

        let metrics = manager.metrics().report();
        assert_eq!(metrics.fallbacks, 0);
        assert_eq!(metrics.hits, 0);
        assert_eq!(metrics.renders, 3);
    }
}
