use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::config::Settings;
use crate::domain::{
    suggested_bid, AuctionId, AuctionListing, AuctionStatus, BidId, BidRecord, Catalog,
    CatalogEntry, Category, CategoryFilter, ListingQuery, ALL_CATEGORIES, BID_ACCEPTED_TITLE,
    BID_REJECTED_MESSAGE, BID_REJECTED_TITLE,
};
use crate::format::{format_date_time, format_price, TimeRemaining};
use crate::money::{Amount, AmountValue, MoneyError};

pub type Clock = fn() -> DateTime<Utc>;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub settings: Arc<Settings>,
    /// Source of "now" for remaining-time text.
    pub clock: Clock,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub message: String,
}

/// Query string of the listing page.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ListingParams {
    pub q: Option<String>,
    pub category: Option<String>,
}

impl ListingParams {
    pub fn to_query(&self) -> ListingQuery {
        let category = self
            .category
            .as_deref()
            .map(CategoryFilter::from)
            .unwrap_or_default();
        ListingQuery::new(self.q.clone().unwrap_or_default(), category)
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionItem {
    pub id: AuctionId,
    pub title: String,
    pub description: String,
    pub current_price: AmountValue,
    pub current_price_text: String,
    pub start_price: AmountValue,
    pub start_price_text: String,
    pub discount_percent: i64,
    pub end_time: DateTime<Utc>,
    pub time_remaining: String,
    pub category: Category,
    pub status: AuctionStatus,
    pub status_label: &'static str,
    pub bids_count: u32,
    pub image: String,
}

impl AuctionItem {
    pub fn new(listing: &AuctionListing, now: DateTime<Utc>) -> Self {
        AuctionItem {
            id: listing.id,
            title: listing.title.clone(),
            description: listing.description.clone(),
            current_price: listing.current_price.value(),
            current_price_text: format_price(listing.current_price),
            start_price: listing.start_price.value(),
            start_price_text: format_price(listing.start_price),
            discount_percent: listing.discount_percent(),
            end_time: listing.end_time,
            time_remaining: TimeRemaining::between(now, listing.end_time).short(),
            category: listing.category,
            status: listing.status,
            status_label: listing.status.label(),
            bids_count: listing.bids_count,
            image: listing.image.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AuctionsResponse {
    /// Number of matches, shown above the result grid.
    pub count: usize,
    pub auctions: Vec<AuctionItem>,
}

#[derive(Debug, Serialize)]
pub struct CategoryOption {
    pub value: String,
    pub label: String,
}

pub fn category_options() -> Vec<CategoryOption> {
    let all = CategoryOption {
        value: ALL_CATEGORIES.to_string(),
        label: "Все категории".to_string(),
    };
    std::iter::once(all)
        .chain(Category::ALL.iter().map(|c| CategoryOption {
            value: c.name().to_string(),
            label: c.name().to_string(),
        }))
        .collect()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidItem {
    pub id: BidId,
    pub participant: String,
    pub price: AmountValue,
    pub price_text: String,
    pub time: DateTime<Utc>,
    pub time_text: String,
}

impl BidItem {
    pub fn new(bid: &BidRecord, offset: FixedOffset) -> Self {
        BidItem {
            id: bid.id,
            participant: bid.participant.clone(),
            price: bid.price.value(),
            price_text: format_price(bid.price),
            time: bid.time,
            time_text: format_date_time(bid.time, offset),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuctionDetail {
    #[serde(flatten)]
    pub item: AuctionItem,

    // Detail page only
    pub time_remaining_long: String,
    pub end_time_text: String,
    pub organizer_name: String,
    pub organizer_inn: String,
    pub lot_number: String,
    pub min_step: AmountValue,
    pub min_step_text: String,
    pub suggested_bid: AmountValue,
    pub suggested_bid_text: String,
    pub specifications: String,
    pub delivery_terms: String,
    pub payment_terms: String,
    pub bids: Vec<BidItem>,
}

impl AuctionDetail {
    pub fn new(entry: &CatalogEntry, now: DateTime<Utc>, offset: FixedOffset) -> Result<Self, MoneyError> {
        let listing = &entry.listing;
        let details = &entry.details;
        let suggested = suggested_bid(listing.current_price, details.min_step)?;

        Ok(AuctionDetail {
            item: AuctionItem::new(listing, now),
            time_remaining_long: TimeRemaining::between(now, listing.end_time).long(),
            end_time_text: format_date_time(listing.end_time, offset),
            organizer_name: details.organizer_name.clone(),
            organizer_inn: details.organizer_inn.clone(),
            lot_number: details.lot_number.clone(),
            min_step: details.min_step.value(),
            min_step_text: format_price(details.min_step),
            suggested_bid: suggested.value(),
            suggested_bid_text: format_price(suggested),
            specifications: details.specifications.clone(),
            delivery_terms: details.delivery_terms.clone(),
            payment_terms: details.payment_terms.clone(),
            bids: entry.bids.iter().map(|bid| BidItem::new(bid, offset)).collect(),
        })
    }
}

/// What the bid form posts. The amount is whatever the user typed.
#[derive(Debug, Serialize, Deserialize)]
pub struct BidRequest {
    pub amount: BidInput,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BidInput {
    Text(String),
    Number(serde_json::Number),
}

impl BidInput {
    pub fn as_text(&self) -> String {
        match self {
            BidInput::Text(text) => text.clone(),
            BidInput::Number(number) => number.to_string(),
        }
    }
}

/// Notification shown after submitting the bid form.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BidNotice {
    pub accepted: bool,
    pub title: String,
    pub description: String,
    /// Accepted bids empty the input; rejected ones leave it for correction.
    pub clear_input: bool,
}

impl BidNotice {
    pub fn accepted(amount: Amount) -> Self {
        BidNotice {
            accepted: true,
            title: BID_ACCEPTED_TITLE.to_string(),
            description: format!("Ваша ставка {} успешно размещена", format_price(amount)),
            clear_input: true,
        }
    }

    pub fn rejected() -> Self {
        BidNotice {
            accepted: false,
            title: BID_REJECTED_TITLE.to_string(),
            description: BID_REJECTED_MESSAGE.to_string(),
            clear_input: false,
        }
    }
}
