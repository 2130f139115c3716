// Rust guideline compliant 2026-10-12

//! Output formatting module for the Rigmarket CLI.
//!
//! This module renders listings, result pages and sweep reports either as
//! JSON envelopes for machine consumption or as human-readable tables.

use chrono::{DateTime, Utc};
use rigmarket_app::{AppError, ErrorEnvelope, ListingPage, SuccessEnvelope, SweepReport};
use rigmarket_core::{Category, Listing};
use serde::Serialize;
use serde_json::json;
use std::path::Path;
use tabled::{builder::Builder, settings::Style};

/// Output formatter trait.
///
/// Defines the interface for formatting Rigmarket data in different output formats.
pub trait OutputFormatter {
    /// Formats the result of initializing a market directory.
    fn format_init(&self, market_dir: &Path, categories: usize) -> String;

    /// Formats a single listing, deriving its state at `now`.
    fn format_listing(&self, listing: &Listing, now: i64) -> String;

    /// Formats one page of discovery results.
    fn format_page(&self, page: &ListingPage, now: i64) -> String;

    /// Formats the category catalog.
    fn format_categories(&self, categories: &[Category]) -> String;

    /// Formats the outcome of one sweep.
    fn format_sweep(&self, report: &SweepReport) -> String;

    /// Formats an acknowledgement for an operation without a listing payload.
    ///
    /// # Arguments
    /// * `action` - Past-tense verb, e.g. `deleted`
    /// * `id` - The listing the action applied to
    fn format_ack(&self, action: &str, id: &str) -> String;

    /// Formats a view counter update. `views` is `None` when nothing was counted.
    fn format_views(&self, id: &str, views: Option<u64>) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

/// JSON output formatter.
///
/// Wraps every payload in the standard success or error envelope.
pub struct JsonFormatter;

impl JsonFormatter {
    fn envelope<T: Serialize>(result: T) -> String {
        serde_json::to_string_pretty(&SuccessEnvelope::new(result)).unwrap_or_else(|_| {
            json!({ "status": "error", "code": "json_error", "message": "Failed to serialize output" })
                .to_string()
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_init(&self, market_dir: &Path, categories: usize) -> String {
        Self::envelope(json!({
            "market_dir": market_dir.display().to_string(),
            "categories": categories,
        }))
    }

    fn format_listing(&self, listing: &Listing, now: i64) -> String {
        Self::envelope(json!({
            "listing": listing,
            "state": listing.state(now),
        }))
    }

    fn format_page(&self, page: &ListingPage, _now: i64) -> String {
        Self::envelope(page)
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        let entries: Vec<_> = categories
            .iter()
            .map(|c| json!({ "slug": c.slug, "name": c.name, "token": c.token() }))
            .collect();
        Self::envelope(entries)
    }

    fn format_sweep(&self, report: &SweepReport) -> String {
        Self::envelope(report)
    }

    fn format_ack(&self, action: &str, id: &str) -> String {
        Self::envelope(json!({ "id": id, "action": action }))
    }

    fn format_views(&self, id: &str, views: Option<u64>) -> String {
        Self::envelope(json!({ "id": id, "views": views }))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        let value = match error.downcast_ref::<AppError>() {
            Some(app_error) => serde_json::to_value(ErrorEnvelope::from_error(app_error))
                .unwrap_or_else(|_| json!({ "status": "error", "message": error.to_string() })),
            None => json!({
                "status": "error",
                "code": "internal_error",
                "message": error.to_string(),
            }),
        };
        value.to_string()
    }
}

/// Table output formatter.
///
/// Formats listings as aligned tables with UTC timestamps.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_init(&self, market_dir: &Path, categories: usize) -> String {
        format!(
            "✓ Rigmarket initialized at {}\n  - listings.jsonl\n  - config.toml ({} categories)",
            market_dir.display(),
            categories
        )
    }

    fn format_listing(&self, listing: &Listing, now: i64) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", listing.id));
        output.push_str(&format!("Title:       {}\n", listing.title));
        output.push_str(&format!("State:       {:?}\n", listing.state(now)));
        output.push_str(&format!("Category:    {}\n", listing.category));
        output.push_str(&format!("Price:       {}\n", listing.price));
        output.push_str(&format!("Condition:   {}\n", listing.condition));
        output.push_str(&format!("Location:    {}\n", listing.location));
        output.push_str(&format!("Seller:      {}\n", listing.seller_id));
        output.push_str(&format!("Views:       {}\n", listing.views));
        output.push_str(&format!("Created:     {}\n", format_timestamp(listing.created_at)));
        output.push_str(&format!("Updated:     {}\n", format_timestamp(listing.updated_at)));

        if !listing.brand.is_empty() || !listing.model.is_empty() {
            output.push_str(&format!(
                "Part:        {} {}\n",
                listing.brand, listing.model
            ));
        }
        if let Some(expires_at) = listing.expires_at {
            output.push_str(&format!("Expires:     {}\n", format_timestamp(expires_at)));
        }
        if let Some(deleted_at) = listing.deleted_at {
            output.push_str(&format!("Purge:       {}\n", format_timestamp(deleted_at)));
        }
        if listing.is_boosted {
            output.push_str("Boosted:     yes\n");
        }
        if !listing.description.is_empty() {
            output.push_str(&format!("Description: {}\n", listing.description));
        }
        if !listing.images.is_empty() {
            output.push_str(&format!("Images:      {}\n", listing.images.join(", ")));
        }

        output
    }

    fn format_page(&self, page: &ListingPage, now: i64) -> String {
        if page.items.is_empty() {
            return format!("No listings found. ({} total)", page.total_count);
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "State", "Price", "Category", "Title", "Location"]);

        for listing in &page.items {
            let title = if listing.is_boosted {
                format!("* {}", listing.title)
            } else {
                listing.title.clone()
            };
            builder.push_record(vec![
                listing.id.clone(),
                format!("{:?}", listing.state(now)),
                listing.price.to_string(),
                listing.category.clone(),
                title,
                listing.location.clone(),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        format!(
            "{}\nPage {} of {} ({} total)",
            table,
            page.page,
            page.total_pages.max(1),
            page.total_count
        )
    }

    fn format_categories(&self, categories: &[Category]) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Slug", "Name", "Token"]);
        for category in categories {
            builder.push_record(vec![
                category.slug.clone(),
                category.name.clone(),
                category.token(),
            ]);
        }
        let mut table = builder.build();
        table.with(Style::modern());
        table.to_string()
    }

    fn format_sweep(&self, report: &SweepReport) -> String {
        let mut output = format!(
            "✓ Sweep at {}: {} deactivated, {} purged\n",
            format_timestamp(report.now),
            report.deactivated.len(),
            report.purged.len()
        );
        for id in &report.deactivated {
            output.push_str(&format!("  - deactivated {}\n", id));
        }
        for id in &report.purged {
            output.push_str(&format!("  - purged {}\n", id));
        }
        output
    }

    fn format_ack(&self, action: &str, id: &str) -> String {
        format!("✓ Listing {} {}", id, action)
    }

    fn format_views(&self, id: &str, views: Option<u64>) -> String {
        match views {
            Some(views) => format!("✓ Listing {} has {} views", id, views),
            None => format!("Listing {} not counted", id),
        }
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Formats a Unix timestamp as a UTC date and time.
///
/// Falls back to the raw number when the timestamp is out of range.
pub fn format_timestamp(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| timestamp.to_string())
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `json` - Whether JSON envelopes were requested
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TableFormatter)
    }
}
