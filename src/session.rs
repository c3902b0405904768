//! Line-oriented driver for the catalog page.
//!
//! Each input line is one user event. Search, apply and open run as spawned
//! tasks so a quick succession of them overlaps the way clicks do in a
//! browser; everything else runs inline.

use crate::catalog::FilterDimension;
use crate::controller::{CatalogController, InitReport};
use crate::i18n::{Locale, LocaleManager};
use crate::page::Page;
use futures::future::join_all;
use std::fmt::Write;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Check(String),
    Uncheck(String),
    Sort(String),
    Apply,
    /// A link, or the 1-based position of a visible card
    Open(String),
    Lang(String),
    Show,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    Unknown(String),
    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let argument = |name: &'static str| {
            if rest.is_empty() {
                Err(ParseCommandError::MissingArgument(name))
            } else {
                Ok(rest.to_string())
            }
        };

        match verb {
            "" => Err(ParseCommandError::Empty),
            // an empty search is a valid submission
            "search" => Ok(Command::Search(rest.to_string())),
            "check" => argument("check").map(Command::Check),
            "uncheck" => argument("uncheck").map(Command::Uncheck),
            "sort" => argument("sort").map(Command::Sort),
            "apply" => Ok(Command::Apply),
            "open" => argument("open").map(Command::Open),
            "lang" => argument("lang").map(Command::Lang),
            "show" => Ok(Command::Show),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(ParseCommandError::Unknown(other.to_string())),
        }
    }
}

pub struct Session {
    controller: Arc<CatalogController>,
    locale: LocaleManager,
    pending: Vec<JoinHandle<()>>,
}

impl Session {
    pub fn new(controller: Arc<CatalogController>, locale: LocaleManager) -> Self {
        Self {
            controller,
            locale,
            pending: Vec::new(),
        }
    }

    /// Render the persisted locale, then bind the catalog controls.
    pub async fn start(&mut self) -> InitReport {
        {
            let page = self.controller.page();
            let mut page = page.lock().await;
            self.locale.initialize(&mut page);
        }
        self.controller.initialize().await
    }

    pub fn locale(&self) -> &LocaleManager {
        &self.locale
    }

    /// Handle one command. Returns `false` once the session should end.
    pub async fn dispatch(&mut self, command: Command) -> bool {
        debug!("Dispatching {:?}", command);

        match command {
            Command::Search(term) => {
                let controller = Arc::clone(&self.controller);
                self.spawn(async move {
                    let outcome = controller.submit_search(&term).await;
                    debug!("search '{}': {:?}", term, outcome);
                });
            }
            Command::Apply => {
                let controller = Arc::clone(&self.controller);
                self.spawn(async move {
                    let outcome = controller.apply_filters().await;
                    debug!("apply: {:?}", outcome);
                });
            }
            Command::Open(target) => {
                let controller = Arc::clone(&self.controller);
                self.spawn(async move {
                    let result = match target.parse::<usize>() {
                        Ok(position) if position > 0 => controller.open_card(position - 1).await,
                        _ => controller.navigate(&target).await,
                    };
                    debug!("open '{}': {:?}", target, result);
                });
            }
            Command::Check(id) => {
                self.controller.set_checkbox(&id, true).await;
            }
            Command::Uncheck(id) => {
                self.controller.set_checkbox(&id, false).await;
            }
            Command::Sort(value) => {
                self.controller.set_sort(&value).await;
            }
            Command::Lang(code) => {
                let page = self.controller.page();
                let mut page = page.lock().await;
                self.locale.set_locale(&mut page, &code, true);
            }
            Command::Show => {
                self.settle().await;
                println!("{}", self.render().await);
            }
            Command::Quit => return false,
        }

        true
    }

    /// Wait for every spawned action to finish.
    pub async fn settle(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if pending.is_empty() {
            return;
        }

        for result in join_all(pending).await {
            if let Err(e) = result {
                warn!("Catalog action failed: {}", e);
            }
        }
    }

    pub async fn finish(&mut self) {
        self.settle().await;
        info!("Session finished, {}", self.locale.metrics().report().format());
    }

    /// Plain-text snapshot of the page.
    pub async fn render(&self) -> String {
        let page = self.controller.page();
        let page = page.lock().await;
        render_page(&page)
    }

    fn spawn<F>(&mut self, action: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.pending.retain(|handle| !handle.is_finished());
        self.pending.push(tokio::spawn(action));
    }
}

fn render_page(page: &Page) -> String {
    let mut out = String::new();

    let lang = if page.lang.is_empty() { "-" } else { page.lang.as_str() };
    match Locale::from_code(lang) {
        Ok(locale) => {
            let _ = writeln!(out, "[{} {}]", lang, locale.native_name());
        }
        Err(_) => {
            let _ = writeln!(out, "[{}]", lang);
        }
    }
    if let Some(location) = &page.location {
        let _ = writeln!(out, "location: {}", location);
    }
    if let Some(size) = &page.csv_size {
        let _ = writeln!(out, "csv size: {}", size);
    }
    if let Some(updated) = &page.csv_updated {
        let _ = writeln!(out, "csv updated: {}", updated);
    }

    let checked: Vec<String> = page
        .checkboxes
        .iter()
        .filter(|checkbox| checkbox.checked)
        .map(|checkbox| {
            match FilterDimension::classify(&checkbox.id, checkbox.dimension.as_deref()) {
                Some(dimension) => format!("{}={}", dimension, checkbox.value),
                None => checkbox.id.clone(),
            }
        })
        .collect();
    if !checked.is_empty() {
        let _ = writeln!(out, "filters: {}", checked.join(", "));
    }
    if let Some(sort) = &page.sort_select {
        let _ = writeln!(out, "sort: {}", sort);
    }

    if page.loading.as_ref().is_some_and(|modal| modal.visible) {
        let _ = writeln!(out, "(loading)");
    }
    for alert in page.alerts.iter() {
        let _ = writeln!(out, "<{}> {}", alert.kind, alert.message);
    }

    let visible: Vec<_> = page.cards.iter().filter(|view| view.visible).collect();
    let _ = writeln!(out, "{} of {} resources", visible.len(), page.cards.len());
    for (position, view) in visible.iter().enumerate() {
        let card = &view.card;
        let _ = writeln!(
            out,
            "{:>3}. {} | {} | {}",
            position + 1,
            card.title,
            card.published_text,
            card.size_text
        );
    }

    out
}
