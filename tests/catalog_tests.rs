use etp_catalog::domain::{AuctionStatus, Catalog, Category, Lookup};
use std::collections::HashSet;
#[path="utils/mod.rs"] mod utils;
use utils::*;

#[test]
fn test_resolve_exact_id() {
    let catalog = sample_catalog();

    let found = catalog.resolve("2").unwrap();
    assert!(!found.is_fallback());
    assert_eq!(found.entry().listing.id, 2);

    let found = catalog.resolve(" 3 ").unwrap();
    assert!(matches!(found, Lookup::Found(_)));
    assert_eq!(found.entry().listing.id, 3);
}

#[test]
fn test_resolve_numeric_forms_of_an_id() {
    let catalog = sample_catalog();

    for raw in ["2.0", "2e0", "+2", " 2.00 "] {
        let found = catalog.resolve(raw).unwrap();
        assert!(!found.is_fallback(), "id {:?}", raw);
        assert_eq!(found.entry().listing.id, 2);
    }
}

#[test]
fn test_resolve_unknown_id_falls_back_to_first_entry() {
    let catalog = sample_catalog();

    for raw in ["999", "abc", "", "-1", "1.5"] {
        let found = catalog.resolve(raw).unwrap();
        assert!(found.is_fallback(), "id {:?}", raw);
        assert_eq!(found.entry().listing.id, 1);
    }
}

#[test]
fn test_resolve_in_empty_catalog() {
    let catalog = Catalog::default();

    assert!(catalog.resolve("1").is_none());
}

#[test]
fn test_custom_catalog_falls_back_to_its_own_first_entry() {
    let catalog = Catalog::new(vec![
        entry(listing(10, "A", "a", Category::IT)),
        entry(listing(20, "B", "b", Category::Goods)),
    ]);

    assert_eq!(catalog.resolve("20").unwrap().entry().listing.id, 20);
    assert_eq!(catalog.resolve("1").unwrap().entry().listing.id, 10);
    assert!(catalog.get(1).is_none());
}

#[test]
fn test_fixture_ids_are_unique() {
    let catalog = sample_catalog();
    let ids: HashSet<i64> = catalog.listings().map(|l| l.id).collect();

    assert_eq!(ids.len(), catalog.entries().len());
    assert_eq!(catalog.entries().len(), 6);
}

#[test]
fn test_fixture_prices_only_go_down() {
    let catalog = sample_catalog();

    for listing in catalog.listings() {
        assert!(
            listing.current_price <= listing.start_price,
            "auction {}",
            listing.id
        );
        assert!(listing.discount_percent() >= 0);
    }
}

#[test]
fn test_fixture_bid_history_is_newest_and_lowest_first() {
    let catalog = sample_catalog();

    for entry in catalog.entries() {
        assert!(!entry.bids.is_empty(), "auction {}", entry.listing.id);
        assert_eq!(entry.bids[0].price, entry.listing.current_price);
        for pair in entry.bids.windows(2) {
            assert!(pair[0].time > pair[1].time, "auction {}", entry.listing.id);
            assert!(pair[0].price < pair[1].price, "auction {}", entry.listing.id);
        }
        assert!(entry.bids.iter().all(|b| b.time < sample_now()));
    }
}

#[test]
fn test_fixture_times_are_relative_to_now() {
    let catalog = sample_catalog();

    assert!(catalog.listings().all(|l| l.end_time > sample_now()));
    assert!(catalog
        .listings()
        .filter(|l| l.status == AuctionStatus::Ending)
        .all(|l| l.end_time - sample_now() <= chrono::Duration::days(1)));
}

#[test]
fn test_fixture_covers_every_category() {
    let catalog = sample_catalog();

    for category in Category::ALL {
        assert!(catalog.listings().any(|l| l.category == category), "{}", category);
    }
}
