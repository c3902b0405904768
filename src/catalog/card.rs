use super::{parse_size_kb, AccessLevel, ResourceType};
use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// One listed database, software package, tutorial or challenge.
///
/// The card keeps the raw text of its metadata lines; sort keys are derived on
/// demand so that a card whose text does not parse still takes part in the
/// listing with a zero size or the earliest possible date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceCard {
    /// `data-type`; `None` when the attribute is missing or not a known type
    pub kind: Option<ResourceType>,

    /// `data-access`; `None` when missing or unknown
    pub access: Option<AccessLevel>,

    pub title: String,
    pub description: String,

    /// First metadata line, e.g. "發布日期: 2025-08-28"
    pub published_text: String,

    /// Last metadata line, e.g. "大小: 2.5 MB"
    pub size_text: String,

    /// Target of the title hyperlink, if the title is a link
    pub link: Option<String>,
}

impl ResourceCard {
    pub fn published(&self) -> Option<NaiveDate> {
        parse_published(&self.published_text)
    }

    pub fn size_kb(&self) -> f64 {
        parse_size_kb(&self.size_text)
    }

    /// Case-insensitive substring match on title or description.
    ///
    /// `needle` must already be lowercase.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
    }
}

static CJK_DATE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Parse a publication line into a date.
///
/// A leading label ending in `:` or `：` ("發布日期:", "Published:") is
/// dropped first. Accepted forms are `2025-08-28`, `2025/08/28`,
/// `2025年8月28日` and `August 28, 2025`.
pub fn parse_published(text: &str) -> Option<NaiveDate> {
    let value = strip_label(text).trim();
    if value.is_empty() {
        return None;
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y"] {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    let regex = CJK_DATE_REGEX
        .get_or_init(|| Regex::new(r"^(\d{4})\s*年\s*(\d{1,2})\s*月\s*(\d{1,2})\s*日$").unwrap());
    let caps = regex.captures(value)?;
    NaiveDate::from_ymd_opt(
        caps[1].parse().ok()?,
        caps[2].parse().ok()?,
        caps[3].parse().ok()?,
    )
}

fn strip_label(text: &str) -> &str {
    let split = text
        .char_indices()
        .find(|(_, c)| *c == ':' || *c == '：');

    match split {
        Some((index, c)) if !text[..index].chars().any(|ch| ch.is_ascii_digit()) => {
            &text[index + c.len_utf8()..]
        }
        _ => text,
    }
}
