// extract.rs
use crate::scraper::ScrapeError;
use scraper::{ElementRef, Html, Selector};

/// Raw text pulled off one listing page before any normalization.
///
/// Each group is independently optional: a listing page that lacks one of the
/// blocks still yields whatever the other blocks contain. `other_data` holds
/// the mid-section attribute tiles in document order; the sequence can be any
/// length and individual entries can be absent.
#[derive(Debug)]
pub struct RawFragments {
    pub title: Option<String>,
    /// Lower-cased description title, fed into type classification.
    pub type_label: Option<String>,
    pub price: Option<String>,
    pub other_data: Vec<Option<String>>,
}

pub struct ListingExtractor {
    title: Selector,
    type_title: Selector,
    price: Selector,
    mid_item: Selector,
}

impl ListingExtractor {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self {
            title: parse_selector(".card-secondary__title")?,
            type_title: parse_selector(".apartment__description-title")?,
            price: parse_selector(".regular_64.apartment__price-sum")?,
            mid_item: parse_selector(".apartment__mid_item-name")?,
        })
    }

    /// A selector that matches nothing leaves its group `None` and the rest
    /// of the groups untouched.
    pub fn extract(&self, document: &Html) -> RawFragments {
        RawFragments {
            title: first_text(document, &self.title),
            type_label: first_text(document, &self.type_title).map(|t| t.to_lowercase()),
            price: first_text(document, &self.price),
            other_data: document
                .select(&self.mid_item)
                .map(|el| Some(element_text(&el)))
                .collect(),
        }
    }
}

fn parse_selector(css: &str) -> Result<Selector, ScrapeError> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(e.to_string()))
}

fn first_text(document: &Html, selector: &Selector) -> Option<String> {
    document.select(selector).next().map(|el| element_text(&el))
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect()
}
