// src/domain/listings.rs
use chrono::{DateTime, Utc};

use super::core::{AuctionId, AuctionStatus, Category, CategoryFilter};
use crate::money::Amount;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionListing {
    pub id: AuctionId,
    pub title: String,
    pub description: String,
    /// Never above `start_price`: prices only go down in a reverse auction.
    pub current_price: Amount,
    pub start_price: Amount,
    pub end_time: DateTime<Utc>,
    pub category: Category,
    pub status: AuctionStatus,
    pub bids_count: u32,
    pub image: String,
}

impl AuctionListing {
    /// How far the current price has fallen from the start price, in whole percent.
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.current_price, self.start_price)
    }
}

pub fn discount_percent(current_price: Amount, start_price: Amount) -> i64 {
    let start = start_price.value();
    if start <= 0 {
        return 0;
    }
    // round(100 * (start - current) / start), half rounding towards positive infinity
    let fall = (start - current_price.value()) as i128;
    let start = start as i128;
    (200 * fall + start).div_euclid(2 * start) as i64
}

/// Descriptive fields only shown on the detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuctionDetails {
    pub organizer_name: String,
    /// Organizer tax id (INN).
    pub organizer_inn: String,
    pub lot_number: String,
    pub min_step: Amount,
    pub specifications: String,
    pub delivery_terms: String,
    pub payment_terms: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingQuery {
    pub text: String,
    pub category: CategoryFilter,
}

impl ListingQuery {
    pub fn new(text: impl Into<String>, category: CategoryFilter) -> Self {
        ListingQuery {
            text: text.into(),
            category,
        }
    }

    pub fn matches(&self, listing: &AuctionListing) -> bool {
        matches_text(&self.text, listing) && self.category.matches(listing.category)
    }
}

fn matches_text(query: &str, listing: &AuctionListing) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    listing.title.to_lowercase().contains(&needle)
        || listing.description.to_lowercase().contains(&needle)
}

/// Listings matching both the text and the category predicate, in source order.
pub fn filter_listings<'a, I>(listings: I, query: &ListingQuery) -> Vec<&'a AuctionListing>
where
    I: IntoIterator<Item = &'a AuctionListing>,
{
    listings
        .into_iter()
        .filter(|listing| query.matches(listing))
        .collect()
}
