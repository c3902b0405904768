use anyhow::{Context, Result};
use minic_portal::config::Config;
use minic_portal::controller::CatalogController;
use minic_portal::i18n::{FileLocaleStore, LocaleManager};
use minic_portal::page::Page;
use minic_portal::session::{Command, Session};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::Mutex;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("minic_portal=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Arc::new(Config::from_env()?);

    info!("Loading catalog page from {}", config.page_path);
    let page = Page::load(&config.page_path)?;
    let page = Arc::new(Mutex::new(page));

    let store = FileLocaleStore::new(&config.state_path);
    let locale = LocaleManager::new(Box::new(store), config.default_locale.clone());
    let controller = Arc::new(CatalogController::new(Arc::clone(&config), page));

    let mut session = Session::new(controller, locale);
    session.start().await;
    println!("{}", session.render().await);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
        if line.trim().is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if !session.dispatch(command).await {
                    break;
                }
            }
            Err(e) => warn!("{}", e),
        }
    }

    session.finish().await;
    println!("{}", session.render().await);
    Ok(())
}
