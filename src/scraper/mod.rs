pub mod extract;
pub mod normalize;
mod scrape_error;
mod scraper;

pub use scrape_error::ScrapeError;
pub use self::scraper::PlanScraper;
