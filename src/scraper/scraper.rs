// scraper.rs
use crate::config::ScrapeConfig;
use crate::domain::listing::Listing;
use crate::scraper::extract::ListingExtractor;
use crate::scraper::normalize::normalize;
use crate::scraper::ScrapeError;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use scraper::{Html, Selector};
use tracing::info;
use url::Url;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// The plan-list pages mark each listing link with this trio of classes.
const PLAN_LINK_SELECTOR: &str = ".btn-reset.btn-secondary.btn-secondary--arrow";

pub struct PlanScraper {
    client: Client,
    config: ScrapeConfig,
    extractor: ListingExtractor,
    plan_link: Selector,
}

impl PlanScraper {
    pub fn new(config: ScrapeConfig) -> Result<Self, ScrapeError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let plan_link = Selector::parse(PLAN_LINK_SELECTOR)
            .map_err(|e| ScrapeError::Selector(e.to_string()))?;

        Ok(Self {
            client,
            config,
            extractor: ListingExtractor::new()?,
            plan_link,
        })
    }

    /// Walks every plan-list page, then fetches each collected listing in
    /// turn. The first failed fetch aborts the whole run; there is no retry
    /// and nothing is written on a partial run.
    pub fn run(&self) -> Result<Vec<Listing>, ScrapeError> {
        let links = self.collect_links()?;
        let total = links.len();

        let mut listings = Vec::with_capacity(total);
        for (done, link) in links.iter().enumerate() {
            listings.push(self.fetch_listing(link)?);
            info!("processed listing {}/{}", done + 1, total);
        }

        Ok(listings)
    }

    /// Permalinks in page order, pages 1 through the configured limit.
    /// A link appearing on more than one page is kept each time.
    pub fn collect_links(&self) -> Result<Vec<Url>, ScrapeError> {
        let mut links = Vec::new();

        for page in 1..=self.config.page_limit {
            let page_links = self.fetch_page_links(page)?;
            info!(
                "page {}/{}: collected {} listing links",
                page,
                self.config.page_limit,
                page_links.len()
            );
            links.extend(page_links);
        }

        Ok(links)
    }

    pub fn fetch_page_links(&self, page: u32) -> Result<Vec<Url>, ScrapeError> {
        let page_url = format!("{}{}", self.config.plan_list_url, page);

        let body = self
            .client
            .post(&page_url)
            .header(CONTENT_TYPE, FORM_CONTENT_TYPE)
            .send()
            .map_err(|e| ScrapeError::Network(e.to_string()))?
            .text()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        self.extract_plan_links(&body)
    }

    /// The pagination endpoint answers with an HTML fragment. A fragment
    /// with no matching links is an empty result, not an error.
    pub fn extract_plan_links(&self, body: &str) -> Result<Vec<Url>, ScrapeError> {
        let fragment = Html::parse_fragment(body);

        let mut links = Vec::new();
        for element in fragment.select(&self.plan_link) {
            if let Some(href) = element.value().attr("href") {
                let link = self
                    .config
                    .base_url
                    .join(href)
                    .map_err(|e| ScrapeError::BadLink(format!("{href}: {e}")))?;
                links.push(link);
            }
        }

        Ok(links)
    }

    pub fn fetch_listing(&self, link: &Url) -> Result<Listing, ScrapeError> {
        let body = self
            .client
            .get(link.as_str())
            .send()
            .map_err(|e| ScrapeError::Network(e.to_string()))?
            .text()
            .map_err(|e| ScrapeError::Network(e.to_string()))?;

        let document = Html::parse_document(&body);
        let fragments = self.extractor.extract(&document);

        Ok(normalize(fragments, link.to_string()))
    }
}
