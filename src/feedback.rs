//! Transient UI feedback: the loading modal and the dismissible alert stack.

use serde::Serialize;
use std::fmt;

/// The blocking "loading" overlay.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadingModal {
    pub visible: bool,

    /// Text of `#loadingMessage`; `None` when the page has no message element
    pub message: Option<String>,
}

impl LoadingModal {
    pub fn new(has_message_element: bool) -> Self {
        Self {
            visible: false,
            message: has_message_element.then(String::new),
        }
    }

    pub fn show(&mut self, message: &str) {
        if let Some(text) = self.message.as_mut() {
            *text = message.to_string();
        }
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Info,
    Success,
}

impl fmt::Display for AlertKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlertKind::Info => f.write_str("info"),
            AlertKind::Success => f.write_str("success"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alert {
    pub id: u64,
    pub kind: AlertKind,
    pub message: String,
}

/// Alerts currently on screen, oldest first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertStack {
    next_id: u64,
    alerts: Vec<Alert>,
}

impl AlertStack {
    /// Push an alert and return its id for later dismissal.
    pub fn push(&mut self, kind: AlertKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.alerts.push(Alert {
            id,
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove an alert. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.alerts.len();
        self.alerts.retain(|alert| alert.id != id);
        self.alerts.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &Alert> {
        self.alerts.iter()
    }

    pub fn last(&self) -> Option<&Alert> {
        self.alerts.last()
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
