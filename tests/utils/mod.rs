use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use etp_catalog::config::Settings;
use etp_catalog::domain::{
    AuctionDetails, AuctionListing, AuctionStatus, Catalog, CatalogEntry, Category,
};
use etp_catalog::money::Amount;
// See https://users.rust-lang.org/t/sharing-code-and-macros-in-tests-directory/3098/7

// Sample data for tests
pub fn sample_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap()
}

pub fn moscow() -> FixedOffset {
    FixedOffset::east_opt(3 * 3600).unwrap()
}

pub fn rub(value: i64) -> Amount {
    Amount::rub(value)
}

pub fn sample_catalog() -> Catalog {
    Catalog::with_fixtures(sample_now())
}

pub fn sample_settings() -> Settings {
    Settings::default()
}

pub fn listing(id: i64, title: &str, description: &str, category: Category) -> AuctionListing {
    AuctionListing {
        id,
        title: title.to_string(),
        description: description.to_string(),
        current_price: rub(900),
        start_price: rub(1000),
        end_time: sample_now() + Duration::days(1),
        category,
        status: AuctionStatus::Active,
        bids_count: 0,
        image: "📦".to_string(),
    }
}

pub fn sample_details() -> AuctionDetails {
    AuctionDetails {
        organizer_name: "Organizer".to_string(),
        organizer_inn: "7700000000".to_string(),
        lot_number: "ЭА-2026-000001".to_string(),
        min_step: rub(50),
        specifications: "Specs".to_string(),
        delivery_terms: "Delivery".to_string(),
        payment_terms: "Payment".to_string(),
    }
}

pub fn entry(listing: AuctionListing) -> CatalogEntry {
    CatalogEntry {
        listing,
        details: sample_details(),
        bids: Vec::new(),
    }
}

pub fn ids(listings: &[&AuctionListing]) -> Vec<i64> {
    listings.iter().map(|l| l.id).collect()
}
