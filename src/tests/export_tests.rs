use crate::domain::listing::Listing;
use crate::scraper::extract::RawFragments;
use crate::scraper::normalize::normalize;
use crate::spreadsheets::{export_listings_xlsx, sort_listings};
use std::time::{SystemTime, UNIX_EPOCH};

fn listing(complex: Option<&str>, source: &str) -> Listing {
    normalize(
        RawFragments {
            title: complex.map(str::to_string),
            type_label: None,
            price: None,
            other_data: vec![],
        },
        source.to_string(),
    )
}

#[test]
fn unnamed_records_sort_first() {
    let mut listings = vec![
        listing(Some("ЖК Берег"), "http://vsnr.ru/catalog/flat/1/"),
        listing(None, "http://vsnr.ru/catalog/flat/2/"),
        listing(Some("ЖК Аврора"), "http://vsnr.ru/catalog/flat/3/"),
    ];

    sort_listings(&mut listings);

    let order: Vec<Option<&str>> = listings.iter().map(|l| l.complex.as_deref()).collect();
    assert_eq!(order, vec![None, Some("ЖК Аврора"), Some("ЖК Берег")]);
}

#[test]
fn repeated_sorts_keep_equal_names_in_insertion_order() {
    let mut listings = vec![
        listing(Some("ЖК Аврора"), "http://vsnr.ru/catalog/flat/1/"),
        listing(Some("ЖК Аврора"), "http://vsnr.ru/catalog/flat/2/"),
        listing(Some("ЖК Аврора"), "http://vsnr.ru/catalog/flat/3/"),
    ];

    sort_listings(&mut listings);
    sort_listings(&mut listings);

    let order: Vec<&str> = listings.iter().map(|l| l.source.as_str()).collect();
    assert_eq!(
        order,
        vec![
            "http://vsnr.ru/catalog/flat/1/",
            "http://vsnr.ru/catalog/flat/2/",
            "http://vsnr.ru/catalog/flat/3/",
        ]
    );
}

#[test]
fn values_line_up_with_the_column_set() {
    let record = listing(Some("ЖК Аврора"), "http://vsnr.ru/catalog/flat/1/");
    let values = record.values();

    assert_eq!(values.len(), Listing::COLUMNS.len());
    assert_eq!(Listing::COLUMNS[0], "complex");
    assert_eq!(values[0], Some("ЖК Аврора"));
    assert_eq!(Listing::COLUMNS[16], "source");
    assert_eq!(values[16], Some("http://vsnr.ru/catalog/flat/1/"));
}

#[test]
fn export_writes_a_workbook_to_disk() {
    let path = std::env::temp_dir().join(format!(
        "export_test_{}.xlsx",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));

    let mut listings = vec![
        listing(Some("ЖК Берег"), "http://vsnr.ru/catalog/flat/1/"),
        listing(None, "http://vsnr.ru/catalog/flat/2/"),
    ];

    export_listings_xlsx(&mut listings, path.to_str().unwrap()).expect("export should succeed");

    let written = std::fs::metadata(&path).expect("workbook file should exist");
    assert!(written.len() > 0);

    std::fs::remove_file(&path).ok();
}
