//! In-memory page model: the parts of the catalog document the controllers
//! read and mutate.
//!
//! [`Page::parse`] extracts the marked elements from the catalog HTML once.
//! After that the page is the view: the catalog controller toggles card
//! visibility and order, the locale manager rewrites labels, and both push
//! feedback into the loading modal and alert stack.

use crate::catalog::{AccessLevel, Listing, ResourceCard, ResourceType};
use crate::feedback::{AlertStack, LoadingModal};
use anyhow::{Context, Result};
use scraper::{ElementRef, Html, Selector};
use std::path::Path;
use tracing::debug;

/// A resource card as placed on the page.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub card: ResourceCard,
    /// i18n key on the card's title, if the markup carries one
    pub title_key: Option<String>,
    /// i18n key on the card's description
    pub description_key: Option<String>,
    pub visible: bool,
    pub fade_in: bool,
}

impl AsRef<ResourceCard> for CardView {
    fn as_ref(&self) -> &ResourceCard {
        &self.card
    }
}

/// How a marked element displays a translated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// `input` / `textarea`: the translation becomes the placeholder
    TextInput,
    /// `option` inside a select: the translation becomes the label
    SelectOption,
    /// Everything else: the translation becomes the text
    Text,
}

impl ElementKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_lowercase().as_str() {
            "input" | "textarea" => ElementKind::TextInput,
            "option" => ElementKind::SelectOption,
            _ => ElementKind::Text,
        }
    }
}

/// An element carrying a `data-i18n` or `data-i18n-content` key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkedElement {
    pub key: String,
    pub kind: ElementKind,
    pub text: String,
    pub placeholder: Option<String>,
}

/// A `[data-lang]` control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSwitch {
    pub code: String,
    /// `active` class present
    pub active: bool,
    /// inline `font-weight: bold`
    pub bold: bool,
}

/// A filter checkbox (`input[type=checkbox]` whose id ends in `Check`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub id: String,
    pub value: String,
    pub checked: bool,
    /// Explicit `data-filter` dimension, if the markup names one
    pub dimension: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct Page {
    /// `<html lang>`
    pub lang: String,

    /// Cards in container order
    pub cards: Vec<CardView>,

    /// `[data-i18n]` elements
    pub labels: Vec<MarkedElement>,

    /// `[data-i18n-content]` elements
    pub prose: Vec<MarkedElement>,

    pub switches: Vec<LocaleSwitch>,
    pub checkboxes: Vec<Checkbox>,

    pub search_form: bool,
    /// Value of `#searchInput`
    pub search_input: Option<String>,
    /// Selected value of `#sortSelect`
    pub sort_select: Option<String>,
    pub apply_button: bool,

    /// Text of `#csv-size`
    pub csv_size: Option<String>,
    /// Last update of the CSV, once the download info reported one
    pub csv_updated: Option<String>,

    /// `#loadingModal`; `None` when the page has no modal
    pub loading: Option<LoadingModal>,
    pub alerts: AlertStack,

    /// Where the page navigated to, once a redirect happened
    pub location: Option<String>,
}

impl Page {
    pub fn load(path: impl AsRef<Path>) -> Result<Page> {
        let path = path.as_ref();
        let html = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read page {}", path.display()))?;
        Ok(Page::parse(&html))
    }

    /// Extract the page model from catalog HTML. Missing elements simply
    /// leave the corresponding field empty.
    pub fn parse(html: &str) -> Page {
        let document = Html::parse_document(html);

        let lang = first(&document, "html")
            .and_then(|html| html.value().attr("lang"))
            .unwrap_or_default()
            .to_string();

        let cards = select_all(&document, ".resource-card")
            .into_iter()
            .map(|element| CardView {
                card: parse_card(element),
                title_key: card_marker(element, ".resource-title"),
                description_key: card_marker(element, ".resource-description"),
                visible: true,
                fade_in: true,
            })
            .collect::<Vec<_>>();

        let labels = select_all(&document, "[data-i18n]")
            .into_iter()
            .filter_map(|element| marked_element(element, "data-i18n"))
            .collect();
        let prose = select_all(&document, "[data-i18n-content]")
            .into_iter()
            .filter_map(|element| marked_element(element, "data-i18n-content"))
            .collect();

        let switches = select_all(&document, "[data-lang]")
            .into_iter()
            .filter_map(|element| {
                let code = element.value().attr("data-lang")?.to_string();
                Some(LocaleSwitch {
                    code,
                    active: has_class(element, "active"),
                    bold: element
                        .value()
                        .attr("style")
                        .is_some_and(|style| style.contains("bold")),
                })
            })
            .collect();

        let checkboxes = select_all(&document, r#"input[type="checkbox"][id$="Check"]"#)
            .into_iter()
            .filter_map(|element| {
                let value = element.value();
                Some(Checkbox {
                    id: value.attr("id")?.to_string(),
                    value: value.attr("value").unwrap_or("on").to_string(),
                    checked: value.attr("checked").is_some(),
                    dimension: value.attr("data-filter").map(str::to_string),
                })
            })
            .collect();

        let sort_select = first(&document, "#sortSelect").map(|select| {
            let options = select_within(select, "option");
            options
                .iter()
                .find(|option| option.value().attr("selected").is_some())
                .or_else(|| options.first())
                .and_then(|option| option.value().attr("value"))
                .unwrap_or_default()
                .to_string()
        });

        let loading = first(&document, "#loadingModal")
            .map(|_| LoadingModal::new(first(&document, "#loadingMessage").is_some()));

        let page = Page {
            lang,
            cards,
            labels,
            prose,
            switches,
            checkboxes,
            search_form: first(&document, "#searchForm").is_some(),
            search_input: first(&document, "#searchInput")
                .map(|input| input.value().attr("value").unwrap_or_default().to_string()),
            sort_select,
            apply_button: first(&document, "#applyFilters").is_some(),
            csv_size: first(&document, "#csv-size").map(element_text),
            csv_updated: None,
            loading,
            alerts: AlertStack::default(),
            location: None,
        };

        debug!(
            "Parsed page: {} cards, {} labels, {} prose blocks, {} locale switches, {} checkboxes",
            page.cards.len(),
            page.labels.len(),
            page.prose.len(),
            page.switches.len(),
            page.checkboxes.len()
        );

        page
    }

    /// Apply a filter/sort result.
    ///
    /// Visible cards are re-appended at the end of the container in listing
    /// order; hidden cards keep their relative order ahead of them.
    pub fn apply_listing(&mut self, listing: &Listing) {
        let mut cards: Vec<Option<CardView>> = std::mem::take(&mut self.cards)
            .into_iter()
            .map(Some)
            .collect();

        let mut hidden = listing.hidden.clone();
        hidden.sort_unstable();

        let mut reordered = Vec::with_capacity(cards.len());
        for index in hidden {
            if let Some(mut view) = cards.get_mut(index).and_then(Option::take) {
                view.visible = false;
                view.fade_in = false;
                reordered.push(view);
            }
        }
        for &index in &listing.visible {
            if let Some(mut view) = cards.get_mut(index).and_then(Option::take) {
                view.visible = true;
                view.fade_in = true;
                reordered.push(view);
            }
        }
        // indices the listing did not mention stay where they were
        reordered.extend(cards.into_iter().flatten());

        self.cards = reordered;
    }

    /// Titles of the visible cards in display order.
    pub fn visible_titles(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|view| view.visible)
            .map(|view| view.card.title.as_str())
            .collect()
    }

    /// Toggle a filter checkbox. Returns `false` if no such checkbox exists.
    pub fn set_checkbox(&mut self, id: &str, checked: bool) -> bool {
        match self.checkboxes.iter_mut().find(|checkbox| checkbox.id == id) {
            Some(checkbox) => {
                checkbox.checked = checked;
                true
            }
            None => false,
        }
    }

    /// `(id, data-filter, value)` for every checked filter checkbox.
    pub fn checked_filters(&self) -> impl Iterator<Item = (&str, Option<&str>, &str)> {
        self.checkboxes
            .iter()
            .filter(|checkbox| checkbox.checked)
            .map(|checkbox| {
                (
                    checkbox.id.as_str(),
                    checkbox.dimension.as_deref(),
                    checkbox.value.as_str(),
                )
            })
    }

    pub fn show_loading(&mut self, message: &str) {
        if let Some(modal) = self.loading.as_mut() {
            modal.show(message);
        }
    }

    pub fn hide_loading(&mut self) {
        if let Some(modal) = self.loading.as_mut() {
            modal.hide();
        }
    }
}

fn parse_card(element: ElementRef<'_>) -> ResourceCard {
    let value = element.value();

    let kind = match value.attr("data-type").unwrap_or_default().parse::<ResourceType>() {
        Ok(kind) => Some(kind),
        Err(e) => {
            debug!("Card type not recognized: {}", e);
            None
        }
    };
    let access = value
        .attr("data-access")
        .unwrap_or_default()
        .parse::<AccessLevel>()
        .ok();

    let title_node = select_within(element, ".resource-title").into_iter().next();
    let title = title_node.map(element_text).unwrap_or_default();
    let link = title_node.and_then(|node| {
        select_within(node, "a[href]")
            .into_iter()
            .next()
            .and_then(|a| a.value().attr("href"))
            .map(str::to_string)
    });

    let description = select_within(element, ".resource-description")
        .into_iter()
        .next()
        .map(element_text)
        .unwrap_or_default();

    let meta_lines = select_within(element, ".resource-meta p");
    let published_text = meta_lines.first().copied().map(element_text).unwrap_or_default();
    let size_text = meta_lines.last().copied().map(element_text).unwrap_or_default();

    ResourceCard {
        kind,
        access,
        title,
        description,
        published_text,
        size_text,
        link,
    }
}

/// The i18n key on the card node matching `css`, or on its first marked
/// descendant.
fn card_marker(card: ElementRef<'_>, css: &str) -> Option<String> {
    let node = select_within(card, css).into_iter().next()?;
    marker_key(node).or_else(|| {
        select_within(node, "[data-i18n], [data-i18n-content]")
            .into_iter()
            .find_map(marker_key)
    })
}

fn marker_key(element: ElementRef<'_>) -> Option<String> {
    let value = element.value();
    value
        .attr("data-i18n")
        .or_else(|| value.attr("data-i18n-content"))
        .map(str::to_string)
}

fn marked_element(element: ElementRef<'_>, attribute: &str) -> Option<MarkedElement> {
    let value = element.value();
    Some(MarkedElement {
        key: value.attr(attribute)?.to_string(),
        kind: ElementKind::from_tag(value.name()),
        text: element_text(element),
        placeholder: value.attr("placeholder").map(str::to_string),
    })
}

fn element_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn has_class(element: ElementRef<'_>, class: &str) -> bool {
    element
        .value()
        .attr("class")
        .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
}

fn first<'a>(document: &'a Html, css: &str) -> Option<ElementRef<'a>> {
    let selector = Selector::parse(css).ok()?;
    document.select(&selector).next()
}

fn select_all<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

fn select_within<'a>(element: ElementRef<'a>, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => element.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{evaluate, FilterState, SortKey};

    const PAGE: &str = r##"<!DOCTYPE html>
<html lang="zh-TW">
<body>
  <a href="#" data-lang="zh-TW" class="lang-btn active" style="font-weight: bold">中文</a>
  <a href="#" data-lang="en" class="lang-btn">EN</a>
  <form id="searchForm">
    <input id="searchInput" type="text" data-i18n="hero.search_placeholder" placeholder="搜尋資料庫...">
    <button data-i18n="hero.search_button">搜尋</button>
  </form>
  <input type="checkbox" id="databaseCheck" value="database" checked>
  <input type="checkbox" id="softwareCheck" value="software">
  <input type="checkbox" id="openCheck" value="open" data-filter="access">
  <input type="checkbox" id="newsletter" value="weekly">
  <select id="sortSelect">
    <option value="relevance" data-i18n="filter.relevance">相關性</option>
    <option value="title_asc" selected data-i18n="filter.title_asc">標題 (升序)</option>
  </select>
  <button id="applyFilters" data-i18n="filter.apply">套用篩選</button>
  <div id="resources">
    <div class="resource-card" data-type="database" data-access="open">
      <h5 class="resource-title"><a href="/database/dementia">臺灣失智症臨床資料庫</a></h5>
      <p class="resource-description">阿茲海默症 MRI</p>
      <div class="resource-meta"><p>發布日期: 2025-08-28</p><p>大小: 2.5 MB</p></div>
    </div>
    <div class="resource-card" data-type="widget" data-access="restricted">
      <h5 class="resource-title">大腦意識資料庫</h5>
      <p class="resource-description">EEG fMRI</p>
      <div class="resource-meta"><p>發布日期: 2024-01-01</p><p>大小: 10 GB</p></div>
    </div>
  </div>
  <p data-i18n-content="db1.description_1">長篇描述</p>
  <span id="csv-size">--</span>
  <div id="loadingModal"><span id="loadingMessage"></span></div>
</body>
</html>"##;

    // ==================== Parse Tests ====================

    #[test]
    fn test_parse_lang_and_controls() {
        let page = Page::parse(PAGE);
        assert_eq!(page.lang, "zh-TW");
        assert!(page.search_form);
        assert_eq!(page.search_input.as_deref(), Some(""));
        assert_eq!(page.sort_select.as_deref(), Some("title_asc"));
        assert!(page.apply_button);
        assert_eq!(page.csv_size.as_deref(), Some("--"));
        assert_eq!(page.loading, Some(LoadingModal::new(true)));
        assert!(page.location.is_none());
    }

    #[test]
    fn test_parse_cards() {
        let page = Page::parse(PAGE);
        assert_eq!(page.cards.len(), 2);

        let first = &page.cards[0].card;
        assert_eq!(first.kind, Some(ResourceType::Database));
        assert_eq!(first.access, Some(AccessLevel::Open));
        assert_eq!(first.title, "臺灣失智症臨床資料庫");
        assert_eq!(first.link.as_deref(), Some("/database/dementia"));
        assert_eq!(first.published_text, "發布日期: 2025-08-28");
        assert_eq!(first.size_text, "大小: 2.5 MB");

        let second = &page.cards[1].card;
        assert_eq!(second.kind, None);
        assert_eq!(second.access, Some(AccessLevel::Restricted));
        assert!(second.link.is_none());
        assert!(page.cards.iter().all(|view| view.visible));
    }

    #[test]
    fn test_parse_card_markers() {
        let page = Page::parse(
            r#"<div class="resource-card" data-type="database" data-access="open">
                 <h5 class="resource-title"><a href="/database/db2" data-i18n="db2.title">大腦意識資料庫</a></h5>
                 <p class="resource-description" data-i18n-content="db2.description">研究大腦</p>
               </div>"#,
        );
        assert_eq!(page.cards[0].title_key.as_deref(), Some("db2.title"));
        assert_eq!(page.cards[0].description_key.as_deref(), Some("db2.description"));

        // cards without markers keep their literal text
        let page = Page::parse(PAGE);
        assert!(page.cards.iter().all(|view| view.title_key.is_none()));
        assert!(page.cards.iter().all(|view| view.description_key.is_none()));
    }

    #[test]
    fn test_parse_marked_elements() {
        let page = Page::parse(PAGE);
        let keys: Vec<_> = page.labels.iter().map(|label| label.key.as_str()).collect();
        assert_eq!(
            keys,
            vec![
                "hero.search_placeholder",
                "hero.search_button",
                "filter.relevance",
                "filter.title_asc",
                "filter.apply"
            ]
        );
        assert_eq!(page.labels[0].kind, ElementKind::TextInput);
        assert_eq!(page.labels[0].placeholder.as_deref(), Some("搜尋資料庫..."));
        assert_eq!(page.labels[2].kind, ElementKind::SelectOption);
        assert_eq!(page.labels[4].kind, ElementKind::Text);

        assert_eq!(page.prose.len(), 1);
        assert_eq!(page.prose[0].key, "db1.description_1");
    }

    #[test]
    fn test_parse_switches_and_checkboxes() {
        let page = Page::parse(PAGE);
        assert_eq!(page.switches.len(), 2);
        assert!(page.switches[0].active && page.switches[0].bold);
        assert!(!page.switches[1].active && !page.switches[1].bold);

        // "newsletter" does not end in "Check"
        assert_eq!(page.checkboxes.len(), 3);
        assert!(page.checkboxes[0].checked);
        assert_eq!(page.checkboxes[2].dimension.as_deref(), Some("access"));
    }

    #[test]
    fn test_parse_empty_document() {
        let page = Page::parse("<html><body></body></html>");
        assert!(page.cards.is_empty());
        assert!(!page.search_form);
        assert!(page.search_input.is_none());
        assert!(page.sort_select.is_none());
        assert!(page.loading.is_none());
    }

    #[test]
    fn test_load_missing_file() {
        let result = Page::load("/definitely/not/here.html");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Failed to read page"));
    }

    // ==================== Mutation Tests ====================

    #[test]
    fn test_apply_listing_reappends_visible_cards() {
        let mut page = Page::parse(PAGE);
        let state = FilterState {
            sort: SortKey::SizeDesc,
            ..Default::default()
        };
        let listing = evaluate(&page.cards, &state);
        page.apply_listing(&listing);

        assert_eq!(page.visible_titles(), vec!["大腦意識資料庫", "臺灣失智症臨床資料庫"]);
    }

    #[test]
    fn test_apply_listing_puts_hidden_cards_first() {
        let mut page = Page::parse(PAGE);
        let state = FilterState {
            search_term: "阿茲海默".to_string(),
            ..Default::default()
        };
        let listing = evaluate(&page.cards, &state);
        page.apply_listing(&listing);

        assert!(!page.cards[0].visible);
        assert!(!page.cards[0].fade_in);
        assert_eq!(page.cards[0].card.title, "大腦意識資料庫");
        assert!(page.cards[1].visible);
    }

    #[test]
    fn test_set_checkbox_and_checked_filters() {
        let mut page = Page::parse(PAGE);
        assert!(page.set_checkbox("softwareCheck", true));
        assert!(page.set_checkbox("databaseCheck", false));
        assert!(!page.set_checkbox("missingCheck", true));

        let checked: Vec<_> = page.checked_filters().collect();
        assert_eq!(checked, vec![("softwareCheck", None, "software")]);
    }

    #[test]
    fn test_loading_without_modal_is_noop() {
        let mut page = Page::parse("<html></html>");
        page.show_loading("Loading...");
        page.hide_loading();
        assert!(page.loading.is_none());
    }
}
