// normalize.rs
use crate::domain::listing::Listing;
use crate::scraper::extract::RawFragments;

/// Turns the raw fragments of one listing page into a `Listing`.
///
/// The mid-section tiles carry no labels of their own; meaning comes from
/// position. The layout is:
///
/// | index | field     |
/// |-------|-----------|
/// | 0     | building  |
/// | 1     | floor     |
/// | 2     | section   |
/// | 3     | number    |
/// | 4     | area      |
/// | 5     | rooms     |
/// | 6     | furnished |
///
/// A sequence shorter than seven entries maps the missing tail to `None`.
/// `source` is the permalink the page was fetched from, attached verbatim.
pub fn normalize(fragments: RawFragments, source: String) -> Listing {
    let other: Vec<Option<String>> = fragments
        .other_data
        .iter()
        .map(|f| f.as_deref().map(clean_fragment))
        .collect();

    let listing_type = fragments
        .type_label
        .as_deref()
        .map(|label| classify_type(label).to_string());

    let price = fragments
        .price
        .as_deref()
        .map(|p| clean_price(p).replace('.', ","));

    let area = slot(&other, 4).map(|a| a.replace('.', ","));

    Listing {
        complex: fragments.title,
        faza: None,
        building: slot(&other, 0),
        floor: slot(&other, 1),
        section: slot(&other, 2),
        number: slot(&other, 3),
        rooms: slot(&other, 5),
        area,
        area_living: None,
        area_kitchen: None,
        price,
        price_sale: None,
        furnished: slot(&other, 6),
        is_furniture: None,
        listing_type,
        plan: None,
        source,
        deadline: None,
        ceil_height: None,
    }
}

/// First match wins, so a label naming both a flat and a storage room is a
/// flat. Anything unrecognized is a serviced apartment.
fn classify_type(label: &str) -> &'static str {
    if label.contains("квартира") {
        "Квартира"
    } else if label.contains("кладовка") {
        "Кладовка"
    } else if label.contains("машиноместо") {
        "Машиноместо"
    } else {
        "Апартаменты"
    }
}

fn clean_fragment(raw: &str) -> String {
    raw.replace("м²", "")
        .replace('№', "")
        .replace("Корпус", "")
        .replace("отделка", "")
        .trim()
        .to_string()
}

fn clean_price(raw: &str) -> String {
    raw.replace(' ', "").replace('₽', "").trim().to_string()
}

fn slot(fragments: &[Option<String>], index: usize) -> Option<String> {
    fragments.get(index).cloned().flatten()
}
