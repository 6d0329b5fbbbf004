use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;

/// One exported row. `source` is the permalink the record came from and is
/// always present; everything else depends on what the page offered.
///
/// Field order is the export column order.
#[derive(Debug, Serialize)]
pub struct Listing {
    pub complex: Option<String>,
    pub faza: Option<String>,
    pub building: Option<String>,
    pub floor: Option<String>,
    pub section: Option<String>,
    pub number: Option<String>,
    pub rooms: Option<String>,
    pub area: Option<String>,
    pub area_living: Option<String>,
    pub area_kitchen: Option<String>,
    pub price: Option<String>,
    pub price_sale: Option<String>,
    pub furnished: Option<String>,
    pub is_furniture: Option<String>,
    #[serde(rename = "type")]
    pub listing_type: Option<String>,
    pub plan: Option<String>,
    pub source: String,
    pub deadline: Option<String>,
    pub ceil_height: Option<String>,
}

impl Listing {
    pub const COLUMNS: [&'static str; 19] = [
        "complex",
        "faza",
        "building",
        "floor",
        "section",
        "number",
        "rooms",
        "area",
        "area_living",
        "area_kitchen",
        "price",
        "price_sale",
        "furnished",
        "is_furniture",
        "type",
        "plan",
        "source",
        "deadline",
        "ceil_height",
    ];

    /// Cell values in `COLUMNS` order.
    pub fn values(&self) -> [Option<&str>; 19] {
        [
            self.complex.as_deref(),
            self.faza.as_deref(),
            self.building.as_deref(),
            self.floor.as_deref(),
            self.section.as_deref(),
            self.number.as_deref(),
            self.rooms.as_deref(),
            self.area.as_deref(),
            self.area_living.as_deref(),
            self.area_kitchen.as_deref(),
            self.price.as_deref(),
            self.price_sale.as_deref(),
            self.furnished.as_deref(),
            self.is_furniture.as_deref(),
            self.listing_type.as_deref(),
            self.plan.as_deref(),
            Some(self.source.as_str()),
            self.deadline.as_deref(),
            self.ceil_height.as_deref(),
        ]
    }
}

pub fn save_listings_debug(listings: &[Listing], filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, listings)?;
    Ok(())
}
