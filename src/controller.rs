//! Catalog controller: search, checkbox filters, sorting, resource
//! navigation and the download-size widget.
//!
//! Every handler is best-effort. A control missing from the page turns its
//! handler into a no-op, and nothing here returns an error to the caller.
//!
//! Search and apply both wait out a simulated latency before rendering.
//! Requests are ordered latest-wins: each takes a ticket when it starts and
//! only renders if no newer request started while it was waiting.

use crate::catalog::{evaluate, FilterState, SortKey};
use crate::config::Config;
use crate::download::DownloadClient;
use crate::feedback::AlertKind;
use crate::i18n;
use crate::page::Page;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// What a user action ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionOutcome {
    /// The page was updated
    Applied,
    /// Nothing to do: empty input or the control is not on the page
    Ignored,
    /// A newer search/apply started while this one was waiting
    Superseded,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// The page location changed to the resource
    Redirected(String),
    /// The resource has no page of its own; an info alert was shown instead
    Informational(String),
    /// No such card or the card has no link
    Unavailable,
}

/// Controls found on the page at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InitReport {
    pub search_form: bool,
    pub apply_button: bool,
    pub sort_select: bool,
    pub checkboxes: usize,
    pub card_links: usize,
    pub download_info: bool,
}

pub struct CatalogController {
    config: Arc<Config>,
    page: Arc<Mutex<Page>>,
    client: DownloadClient,
    filters: Mutex<FilterState>,
    ticket: AtomicU64,
}

impl CatalogController {
    pub fn new(config: Arc<Config>, page: Arc<Mutex<Page>>) -> Self {
        let client = DownloadClient::new(&config.base_url);
        Self {
            config,
            page,
            client,
            filters: Mutex::new(FilterState::default()),
            ticket: AtomicU64::new(0),
        }
    }

    pub fn page(&self) -> Arc<Mutex<Page>> {
        Arc::clone(&self.page)
    }

    pub async fn filter_state(&self) -> FilterState {
        self.filters.lock().await.clone()
    }

    /// Seed filter and sort state from the page as loaded, then fetch the
    /// download info once.
    pub async fn initialize(&self) -> InitReport {
        let mut report = {
            let page = self.page.lock().await;
            let mut filters = self.filters.lock().await;

            filters.set_checked(page.checked_filters());
            if let Some(value) = page.sort_select.as_deref() {
                filters.sort = SortKey::parse(value);
            }

            InitReport {
                search_form: page.search_form,
                apply_button: page.apply_button,
                sort_select: page.sort_select.is_some(),
                checkboxes: page.checkboxes.len(),
                card_links: page
                    .cards
                    .iter()
                    .filter(|view| view.card.link.is_some())
                    .count(),
                download_info: false,
            }
        };

        report.download_info = self.load_download_info().await;

        info!(
            "Catalog ready: search={}, apply={}, sort={}, {} checkboxes, {} card links",
            report.search_form,
            report.apply_button,
            report.sort_select,
            report.checkboxes,
            report.card_links
        );
        report
    }

    /// Toggle a filter checkbox and rebuild the accepted sets.
    ///
    /// Takes effect on the next search or apply.
    pub async fn set_checkbox(&self, id: &str, checked: bool) -> ActionOutcome {
        let mut page = self.page.lock().await;
        if !page.set_checkbox(id, checked) {
            debug!("No checkbox '{}' on the page", id);
            return ActionOutcome::Ignored;
        }

        let mut filters = self.filters.lock().await;
        filters.set_checked(page.checked_filters());
        debug!(
            "Filters now: types={:?}, access={:?}",
            filters.resource_types, filters.access
        );
        ActionOutcome::Applied
    }

    /// Pick a sort option. Takes effect on the next search or apply.
    pub async fn set_sort(&self, value: &str) -> ActionOutcome {
        let mut page = self.page.lock().await;
        let Some(selected) = page.sort_select.as_mut() else {
            return ActionOutcome::Ignored;
        };
        *selected = value.to_string();

        let sort = SortKey::parse(value);
        self.filters.lock().await.sort = sort;
        debug!("Sort set to {}", sort);
        ActionOutcome::Applied
    }

    /// Type `text` into the search box and submit the form.
    pub async fn submit_search(&self, text: &str) -> ActionOutcome {
        {
            let mut page = self.page.lock().await;
            if !page.search_form {
                return ActionOutcome::Ignored;
            }
            match page.search_input.as_mut() {
                Some(input) => *input = text.to_string(),
                None => return ActionOutcome::Ignored,
            }
        }
        self.search(text).await
    }

    /// Run a search for `term`.
    ///
    /// The trimmed term is always stored; an empty term does nothing else.
    pub async fn search(&self, term: &str) -> ActionOutcome {
        let term = term.trim().to_string();
        self.filters.lock().await.search_term = term.clone();
        if term.is_empty() {
            return ActionOutcome::Ignored;
        }

        let ticket = self.next_ticket();
        {
            let mut page = self.page.lock().await;
            let message = format!("{}: {}", i18n::lookup(&page.lang, "msg.searching"), term);
            page.show_loading(&message);
        }

        tokio::time::sleep(self.config.search_delay).await;

        // checked under the page lock so a newer request cannot start between
        // the check and the render
        let mut page = self.page.lock().await;
        if !self.is_latest(ticket) {
            debug!("Search '{}' superseded", term);
            return ActionOutcome::Superseded;
        }

        page.hide_loading();
        let shown = self.render(&mut page).await;
        let message = format!("{}: {}", i18n::lookup(&page.lang, "msg.search_result"), term);
        self.alert(&mut page, AlertKind::Info, message);

        info!("Search '{}' shows {} cards", term, shown);
        ActionOutcome::Applied
    }

    /// Click "apply filters".
    pub async fn apply_filters(&self) -> ActionOutcome {
        // the ticket is taken before waiting on the page; a click only
        // exists where the button does
        let ticket = self.next_ticket();
        {
            let mut page = self.page.lock().await;
            if !page.apply_button {
                return ActionOutcome::Ignored;
            }
            let message = i18n::lookup(&page.lang, "msg.applying_filters").to_string();
            page.show_loading(&message);
        }

        tokio::time::sleep(self.config.filter_delay).await;

        let mut page = self.page.lock().await;
        if !self.is_latest(ticket) {
            debug!("Filter apply superseded");
            return ActionOutcome::Superseded;
        }

        page.hide_loading();
        let shown = self.render(&mut page).await;
        let message = i18n::lookup(&page.lang, "msg.filters_applied").to_string();
        self.alert(&mut page, AlertKind::Success, message);

        info!("Filters applied, {} cards shown", shown);
        ActionOutcome::Applied
    }

    /// Open the `position`-th visible card (display order, zero-based).
    pub async fn open_card(&self, position: usize) -> Navigation {
        let href = {
            let page = self.page.lock().await;
            page.cards
                .iter()
                .filter(|view| view.visible)
                .nth(position)
                .and_then(|view| view.card.link.clone())
        };

        match href {
            Some(href) => self.navigate(&href).await,
            None => Navigation::Unavailable,
        }
    }

    /// Follow a resource link.
    ///
    /// Links under one of the routed prefixes change the page location; any
    /// other link only produces an info alert.
    pub async fn navigate(&self, href: &str) -> Navigation {
        if href.is_empty() {
            return Navigation::Unavailable;
        }

        {
            let mut page = self.page.lock().await;
            let message = i18n::lookup(&page.lang, "msg.loading_resource").to_string();
            page.show_loading(&message);
        }

        tokio::time::sleep(self.config.navigate_delay).await;

        let mut page = self.page.lock().await;
        page.hide_loading();

        let routed = self
            .config
            .route_prefixes
            .iter()
            .any(|prefix| href.starts_with(prefix.as_str()));

        if routed {
            info!("Navigating to {}", href);
            page.location = Some(href.to_string());
            Navigation::Redirected(href.to_string())
        } else {
            let message = format!(
                "{}: {}",
                i18n::lookup(&page.lang, "msg.viewing_resource"),
                href
            );
            self.alert(&mut page, AlertKind::Info, message);
            Navigation::Informational(href.to_string())
        }
    }

    /// Fetch the download info and show the CSV size and last update.
    ///
    /// Failures are logged and leave the page unchanged. Returns whether the
    /// size element was updated.
    pub async fn load_download_info(&self) -> bool {
        let info = match self.client.fetch().await {
            Ok(info) => info,
            Err(e) => {
                warn!("Failed to load download info: {:#}", e);
                return false;
            }
        };

        let Some(csv) = info.anonymized_csv else {
            debug!("Download info carries no CSV entry");
            return false;
        };
        let updated = csv.display_last_updated();
        let Some(size) = csv.display_size() else {
            debug!("Download info carries no CSV size");
            return false;
        };

        let mut page = self.page.lock().await;
        match page.csv_size.as_mut() {
            Some(text) => {
                *text = size;
                if let Some(updated) = updated {
                    debug!("Anonymized CSV last updated {}", updated);
                    page.csv_updated = Some(updated);
                }
                true
            }
            None => false,
        }
    }

    fn next_ticket(&self) -> u64 {
        self.ticket.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, ticket: u64) -> bool {
        self.ticket.load(Ordering::SeqCst) == ticket
    }

    async fn render(&self, page: &mut Page) -> usize {
        let filters = self.filters.lock().await;
        let listing = evaluate(&page.cards, &filters);
        page.apply_listing(&listing);
        listing.visible.len()
    }

    /// Show an alert and schedule its removal after the configured TTL.
    fn alert(&self, page: &mut Page, kind: AlertKind, message: String) -> u64 {
        debug!("Alert ({}): {}", kind, message);
        let id = page.alerts.push(kind, message);

        let shared = Arc::clone(&self.page);
        let ttl = self.config.alert_ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            shared.lock().await.alerts.dismiss(id);
        });

        id
    }
}
