use actix_web::middleware::Logger;
use actix_web::{web, App, HttpResponse, HttpServer, Result};
use chrono::Utc;
use log::{debug, error, info, warn};
use std::sync::Arc;

use crate::config::Settings;
use crate::domain::{filter_listings, validate_bid, Catalog, Lookup};
use super::types::{
    category_options, ApiError, AppState, AuctionDetail, AuctionItem, AuctionsResponse, BidItem,
    BidNotice, BidRequest, Clock, ListingParams,
};

// Initialize application state
pub fn init_app_state(settings: Settings) -> AppState {
    let catalog = Catalog::with_fixtures(Utc::now());
    with_catalog(catalog, settings, Utc::now)
}

pub fn with_catalog(catalog: Catalog, settings: Settings, clock: Clock) -> AppState {
    AppState {
        catalog: Arc::new(catalog),
        settings: Arc::new(settings),
        clock,
    }
}

fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ApiError {
        message: "Auction not found".to_string(),
    })
}

// Resolve a path id, logging when the first auction stands in for it
fn lookup<'a>(data: &'a AppState, raw_id: &str) -> Option<Lookup<'a>> {
    let found = data.catalog.resolve(raw_id)?;
    if found.is_fallback() {
        warn!(
            "No auction with id {:?}, showing auction {} instead",
            raw_id,
            found.entry().listing.id
        );
    }
    Some(found)
}

// List auctions matching the search text and category
async fn get_auctions(
    params: web::Query<ListingParams>,
    data: web::Data<AppState>,
) -> Result<HttpResponse> {
    let query = params.to_query();
    let now = (data.clock)();

    let auctions: Vec<AuctionItem> = filter_listings(data.catalog.listings(), &query)
        .into_iter()
        .map(|listing| AuctionItem::new(listing, now))
        .collect();
    debug!(
        "Listing query {:?} in category {} matched {} auctions",
        query.text,
        query.category,
        auctions.len()
    );

    Ok(HttpResponse::Ok().json(AuctionsResponse {
        count: auctions.len(),
        auctions,
    }))
}

// Category filter options
async fn get_categories() -> Result<HttpResponse> {
    Ok(HttpResponse::Ok().json(category_options()))
}

// Get auction details by ID
async fn get_auction(path: web::Path<String>, data: web::Data<AppState>) -> Result<HttpResponse> {
    let raw_id = path.into_inner();
    let Some(found) = lookup(&data, &raw_id) else {
        return Ok(not_found());
    };

    let now = (data.clock)();
    match AuctionDetail::new(found.entry(), now, data.settings.utc_offset) {
        Ok(detail) => Ok(HttpResponse::Ok().json(detail)),
        Err(err) => {
            error!("Cannot build details for auction {}: {}", found.entry().listing.id, err);
            Ok(HttpResponse::InternalServerError().json(ApiError {
                message: err.to_string(),
            }))
        }
    }
}

// Bid history, newest first
async fn get_bids(path: web::Path<String>, data: web::Data<AppState>) -> Result<HttpResponse> {
    let raw_id = path.into_inner();
    let Some(found) = lookup(&data, &raw_id) else {
        return Ok(not_found());
    };

    let offset = data.settings.utc_offset;
    let bids: Vec<BidItem> = found
        .entry()
        .bids
        .iter()
        .map(|bid| BidItem::new(bid, offset))
        .collect();
    Ok(HttpResponse::Ok().json(bids))
}

// Check a bid against the current price. The catalog is left untouched.
async fn place_bid(
    path: web::Path<String>,
    bid_req: web::Json<BidRequest>,
    data: web::Data<AppState>,
) -> Result<HttpResponse> {
    let raw_id = path.into_inner();
    let Some(found) = lookup(&data, &raw_id) else {
        return Ok(not_found());
    };
    let entry = found.entry();
    let raw_amount = bid_req.amount.as_text();

    match validate_bid(
        &raw_amount,
        entry.listing.current_price,
        entry.details.min_step,
        data.settings.step_policy,
    ) {
        Ok(amount) => {
            info!("Bid {} accepted for auction {}", amount, entry.listing.id);
            Ok(HttpResponse::Ok().json(BidNotice::accepted(amount)))
        }
        Err(rejection) => {
            warn!("Bid rejected for auction {}: {}", entry.listing.id, rejection);
            Ok(HttpResponse::UnprocessableEntity().json(BidNotice::rejected()))
        }
    }
}

// Configure routes
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("")
            .route("/auctions", web::get().to(get_auctions))
            .route("/categories", web::get().to(get_categories))
            .route("/auctions/{id}", web::get().to(get_auction))
            .route("/auctions/{id}/bids", web::get().to(get_bids))
            .route("/auctions/{id}/bids", web::post().to(place_bid)),
    );
}

// Main application
pub async fn run_app(settings: Settings) -> std::io::Result<()> {
    let bind = (settings.host.clone(), settings.port);
    info!(
        "Starting server on {}:{} (bid step policy: {}, time offset: {})",
        bind.0, bind.1, settings.step_policy, settings.utc_offset
    );

    let app_state = init_app_state(settings);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(Logger::default())
            .configure(configure_app)
    })
    .bind(bind)?
    .run()
    .await
}
