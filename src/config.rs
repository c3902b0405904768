use anyhow::{Context, Result};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    // Backend serving /api/download-info and resource pages
    pub base_url: String,

    // Catalog page and persisted locale
    pub page_path: String,
    pub state_path: String,
    pub default_locale: String,

    // Simulated latency and feedback timing
    pub search_delay: Duration,
    pub filter_delay: Duration,
    pub navigate_delay: Duration,
    pub alert_ttl: Duration,

    // Resource paths that navigate instead of showing a notice
    pub route_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            page_path: "templates/index.html".to_string(),
            state_path: ".minic/locale.json".to_string(),
            default_locale: "zh-TW".to_string(),
            search_delay: Duration::from_millis(800),
            filter_delay: Duration::from_millis(500),
            navigate_delay: Duration::from_millis(600),
            alert_ttl: Duration::from_millis(3000),
            route_prefixes: vec!["/database/".to_string(), "/software/".to_string()],
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        Ok(Self {
            base_url: std::env::var("MINIC_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),

            page_path: std::env::var("MINIC_PAGE_PATH").unwrap_or(defaults.page_path),
            state_path: std::env::var("MINIC_STATE_PATH").unwrap_or(defaults.state_path),
            default_locale: std::env::var("MINIC_DEFAULT_LOCALE")
                .unwrap_or(defaults.default_locale),

            search_delay: millis_from_env("MINIC_SEARCH_DELAY_MS")?
                .unwrap_or(defaults.search_delay),
            filter_delay: millis_from_env("MINIC_FILTER_DELAY_MS")?
                .unwrap_or(defaults.filter_delay),
            navigate_delay: millis_from_env("MINIC_NAVIGATE_DELAY_MS")?
                .unwrap_or(defaults.navigate_delay),
            alert_ttl: millis_from_env("MINIC_ALERT_TTL_MS")?.unwrap_or(defaults.alert_ttl),

            route_prefixes: std::env::var("MINIC_ROUTE_PREFIXES")
                .map(|value| {
                    value
                        .split(',')
                        .map(|prefix| prefix.trim().to_string())
                        .filter(|prefix| !prefix.is_empty())
                        .collect()
                })
                .unwrap_or(defaults.route_prefixes),
        })
    }
}

fn millis_from_env(name: &str) -> Result<Option<Duration>> {
    match std::env::var(name) {
        Ok(value) => {
            let millis: u64 = value
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number of milliseconds", name))?;
            Ok(Some(Duration::from_millis(millis)))
        }
        Err(_) => Ok(None),
    }
}
