// Rust guideline compliant 2026-10-12

//! Unit tests for output formatting module.

use rigmarket_app::{AppError, ListingPage, SweepReport};
use rigmarket_cli::create_formatter;
use rigmarket_core::{Condition, Error, Listing};
use rust_decimal::Decimal;
use serde_json::Value;

fn create_test_listing() -> Listing {
    Listing {
        id: "lst-a1b2c3d4".to_string(),
        title: "RTX 3080".to_string(),
        description: "Used for a year, never overclocked".to_string(),
        category: "gpu".to_string(),
        brand: "NVIDIA".to_string(),
        model: "Founders Edition".to_string(),
        condition: Condition::Used,
        price: Decimal::new(45000, 2),
        location: "Berlin".to_string(),
        images: vec!["front.jpg".to_string(), "back.jpg".to_string()],
        seller_id: "user-alice".to_string(),
        is_active: true,
        is_sold: false,
        created_at: 1_704_067_200,
        updated_at: 1_704_067_200,
        expires_at: Some(1_706_659_200),
        deleted_at: Some(1_709_251_200),
        is_boosted: true,
        views: 7,
    }
}

fn page_of(items: Vec<Listing>) -> ListingPage {
    ListingPage {
        total_count: items.len(),
        total_pages: 1,
        page: 1,
        limit: 12,
        items,
    }
}

#[test]
fn test_json_formatter_single_listing() {
    let listing = create_test_listing();
    let formatter = create_formatter(true);
    let output = formatter.format_listing(&listing, listing.created_at);

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["result"]["listing"]["id"], "lst-a1b2c3d4");
    assert_eq!(value["result"]["listing"]["price"], "450.00");
    assert_eq!(value["result"]["state"], "active");
}

#[test]
fn test_json_formatter_state_follows_now() {
    let listing = create_test_listing();
    let formatter = create_formatter(true);

    let expired: Value =
        serde_json::from_str(&formatter.format_listing(&listing, 1_706_659_200)).unwrap();
    assert_eq!(expired["result"]["state"], "expired");

    let purged: Value =
        serde_json::from_str(&formatter.format_listing(&listing, 1_709_251_200)).unwrap();
    assert_eq!(purged["result"]["state"], "purged");
}

#[test]
fn test_json_formatter_page() {
    let mut second = create_test_listing();
    second.id = "lst-d4e5f6a7".to_string();
    let formatter = create_formatter(true);
    let output = formatter.format_page(&page_of(vec![create_test_listing(), second]), 0);

    let value: Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["result"]["total_count"], 2);
    assert_eq!(value["result"]["items"][1]["id"], "lst-d4e5f6a7");
}

#[test]
fn test_json_formatter_app_error() {
    let formatter = create_formatter(true);
    let error = anyhow::Error::from(AppError::from(Error::validation("price", "negative")));
    let value: Value = serde_json::from_str(&formatter.format_error(&error)).unwrap();

    assert_eq!(value["status"], "error");
    assert_eq!(value["code"], "validation_error");
    assert_eq!(value["details"]["field"], "price");
}

#[test]
fn test_json_formatter_other_error() {
    let formatter = create_formatter(true);
    let error = anyhow::anyhow!("Invalid log level: loud");
    let value: Value = serde_json::from_str(&formatter.format_error(&error)).unwrap();

    assert_eq!(value["code"], "internal_error");
    assert_eq!(value["message"], "Invalid log level: loud");
}

#[test]
fn test_table_formatter_single_listing() {
    let listing = create_test_listing();
    let formatter = create_formatter(false);
    let output = formatter.format_listing(&listing, listing.created_at);

    assert!(output.contains("lst-a1b2c3d4"));
    assert!(output.contains("RTX 3080"));
    assert!(output.contains("450.00"));
    assert!(output.contains("State:       Active"));
    assert!(output.contains("2024-01-01 00:00:00 UTC"));
    assert!(output.contains("front.jpg, back.jpg"));
    assert!(output.contains("Boosted:     yes"));
}

#[test]
fn test_table_formatter_page() {
    let formatter = create_formatter(false);
    let output = formatter.format_page(&page_of(vec![create_test_listing()]), 1_704_067_200);

    assert!(output.contains("ID"));
    assert!(output.contains("* RTX 3080"));
    assert!(output.contains("Page 1 of 1 (1 total)"));
}

#[test]
fn test_table_formatter_empty_page() {
    let formatter = create_formatter(false);
    let output = formatter.format_page(&page_of(Vec::new()), 0);
    assert_eq!(output, "No listings found. (0 total)");
}

#[test]
fn test_table_formatter_sweep() {
    let formatter = create_formatter(false);
    let report = SweepReport {
        now: 1_704_067_200,
        deactivated: vec!["lst-00000001".to_string()],
        purged: Vec::new(),
    };
    let output = formatter.format_sweep(&report);

    assert!(output.contains("1 deactivated, 0 purged"));
    assert!(output.contains("deactivated lst-00000001"));
}

#[test]
fn test_table_formatter_error() {
    let formatter = create_formatter(false);
    let error = anyhow::anyhow!("Listing not found: lst-zzz");
    assert_eq!(formatter.format_error(&error), "Error: Listing not found: lst-zzz");
}
