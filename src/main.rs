use crate::config::ScrapeConfig;
use crate::scraper::PlanScraper;
use crate::spreadsheets::export_listings_xlsx;
use tracing::{error, info};

mod config;
mod domain;
mod scraper;
mod spreadsheets;

#[cfg(test)]
mod tests;

fn main() {
    let config = match ScrapeConfig::new() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Config init failed: {e}");
            std::process::exit(1);
        }
    };

    let log_file = tracing_appender::rolling::never(".", &config.log_file);
    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    info!("scrape run started");

    let scraper = match PlanScraper::new(config.clone()) {
        Ok(scraper) => scraper,
        Err(e) => {
            error!("scraper init failed: {e}");
            eprintln!("Scraper init failed: {e}");
            std::process::exit(1);
        }
    };

    let mut listings = match scraper.run() {
        Ok(listings) => listings,
        Err(e) => {
            error!("scrape run failed: {e}");
            eprintln!("Scrape failed: {e}");
            std::process::exit(1);
        }
    };

    #[cfg(debug_assertions)]
    if let Err(e) = domain::listing::save_listings_debug(&listings, "listings_debug.json") {
        tracing::warn!("debug dump failed: {e}");
    }

    if let Err(e) = export_listings_xlsx(&mut listings, &config.output_path) {
        error!("export failed: {e}");
        eprintln!("Export failed: {e}");
        std::process::exit(1);
    }

    info!(
        "scrape run finished: {} listings exported to {}",
        listings.len(),
        config.output_path
    );
}
