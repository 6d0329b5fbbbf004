use crate::domain::listing::Listing;
use crate::scraper::ScrapeError;
use rust_xlsxwriter::Workbook;

/// Ascending by complex name; records with no name sort first. The sort is
/// stable, so repeated runs over the same input order rows identically.
pub fn sort_listings(listings: &mut [Listing]) {
    listings.sort_by(|a, b| a.complex.cmp(&b.complex));
}

/// Sorts and writes all records as one sheet at `path`, replacing whatever
/// is there. Header row first, then one row per listing with absent fields
/// as empty cells.
pub fn export_listings_xlsx(listings: &mut [Listing], path: &str) -> Result<(), ScrapeError> {
    sort_listings(listings);

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    for (col, header) in Listing::COLUMNS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| {
                ScrapeError::Xlsx(format!("Failed to write header '{}': {}", header, e))
            })?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        for (col, value) in listing.values().iter().enumerate() {
            worksheet
                .write_string(r, col as u16, value.unwrap_or(""))
                .map_err(|e| {
                    ScrapeError::Xlsx(format!(
                        "Failed to write {}: {}",
                        Listing::COLUMNS[col],
                        e
                    ))
                })?;
        }
    }

    workbook
        .save(path)
        .map_err(|e| ScrapeError::Xlsx(format!("Failed to save workbook: {}", e)))?;

    Ok(())
}
