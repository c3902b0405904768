//! Minic portal: the catalog page's search, filtering, sorting and
//! zh-TW/en localization, driven against an in-memory page model.

pub mod catalog;
pub mod config;
pub mod controller;
pub mod download;
pub mod feedback;
pub mod format;
pub mod i18n;
pub mod page;
pub mod session;
