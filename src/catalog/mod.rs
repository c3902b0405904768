//! Catalog core: resource cards, filter state and the pure filter/sort pass.
//!
//! Nothing in this module touches the page model. [`evaluate`] takes the cards
//! and a [`FilterState`] and returns a [`Listing`]; applying that listing to a
//! view is the job of [`crate::page::Page::apply_listing`].

mod card;
mod filter;
mod size;

pub use card::{parse_published, ResourceCard};
pub use filter::{evaluate, FilterState, Listing, SortKey};
pub use size::parse_size_kb;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a marker attribute holds a value outside the fixed sets.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseFilterError {
    #[error("unknown resource type: '{0}'")]
    UnknownResourceType(String),

    #[error("unknown access level: '{0}'")]
    UnknownAccessLevel(String),

    #[error("unknown filter dimension: '{0}'")]
    UnknownDimension(String),
}

/// Category of a listed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Database,
    Software,
    Tutorial,
    Challenge,
}

impl ResourceType {
    pub const ALL: [ResourceType; 4] = [
        ResourceType::Database,
        ResourceType::Software,
        ResourceType::Tutorial,
        ResourceType::Challenge,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Database => "database",
            ResourceType::Software => "software",
            ResourceType::Tutorial => "tutorial",
            ResourceType::Challenge => "challenge",
        }
    }
}

impl FromStr for ResourceType {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        ResourceType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == value)
            .ok_or_else(|| ParseFilterError::UnknownResourceType(s.to_string()))
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who may access a listed resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    Open,
    Restricted,
}

impl AccessLevel {
    pub const ALL: [AccessLevel; 2] = [AccessLevel::Open, AccessLevel::Restricted];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccessLevel::Open => "open",
            AccessLevel::Restricted => "restricted",
        }
    }
}

impl FromStr for AccessLevel {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_lowercase();
        AccessLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == value)
            .ok_or_else(|| ParseFilterError::UnknownAccessLevel(s.to_string()))
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The facet a filter checkbox narrows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterDimension {
    ResourceType,
    Access,
}

impl FilterDimension {
    /// Decide which dimension a checkbox belongs to.
    ///
    /// An explicit `data-filter` value wins. Without one, the legacy id
    /// heuristic applies: ids mentioning `open` or `restricted` are access
    /// filters, ids mentioning a resource type name are type filters, and
    /// anything else is ignored (`None`).
    pub fn classify(id: &str, explicit: Option<&str>) -> Option<FilterDimension> {
        if let Some(explicit) = explicit {
            return explicit.parse().ok();
        }

        let id = id.to_ascii_lowercase();
        if id.contains("open") || id.contains("restricted") {
            return Some(FilterDimension::Access);
        }
        if ResourceType::ALL
            .iter()
            .any(|kind| id.contains(kind.as_str()))
        {
            return Some(FilterDimension::ResourceType);
        }
        None
    }
}

impl fmt::Display for FilterDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterDimension::ResourceType => f.write_str("resource_type"),
            FilterDimension::Access => f.write_str("access"),
        }
    }
}

impl FromStr for FilterDimension {
    type Err = ParseFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "type" | "resource_type" | "resource-type" => Ok(FilterDimension::ResourceType),
            "access" => Ok(FilterDimension::Access),
            _ => Err(ParseFilterError::UnknownDimension(s.to_string())),
        }
    }
}
