// config.rs
use crate::scraper::ScrapeError;
use url::Url;

const BASE_URL: &str = "http://vsnr.ru/";
const PLAN_LIST_PATH: &str = "local/ajax/plan_list.php?PAGEN_1=";
const PAGE_LIMIT: u32 = 756;
const OUTPUT_PATH: &str = "result.xlsx";
const LOG_FILE: &str = "logging.log";

/// Everything the scraper needs to know about the target site and the
/// artifacts of a run. Built once in `main` and passed down explicitly.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: Url,
    /// Pagination endpoint; the page index is appended to this string.
    pub plan_list_url: String,
    pub page_limit: u32,
    pub output_path: String,
    pub log_file: String,
}

impl ScrapeConfig {
    pub fn new() -> Result<Self, ScrapeError> {
        let base_url =
            Url::parse(BASE_URL).map_err(|e| ScrapeError::BadLink(e.to_string()))?;

        Ok(Self {
            base_url,
            plan_list_url: format!("{BASE_URL}{PLAN_LIST_PATH}"),
            page_limit: PAGE_LIMIT,
            output_path: OUTPUT_PATH.to_string(),
            log_file: LOG_FILE.to_string(),
        })
    }
}
