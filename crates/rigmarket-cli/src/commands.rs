// Rust guideline compliant 2026-10-12

//! Command implementations for the Rigmarket CLI.

pub mod categories;
pub mod create;
pub mod delete;
pub mod init;
pub mod list;
pub mod sell;
pub mod serve;
pub mod show;
pub mod sweep;
pub mod update;
pub mod view;

use rigmarket_app::AppError;
use rigmarket_core::{Condition, Error};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Parses a price argument, naming `field` in the validation error.
pub(crate) fn parse_decimal(field: &str, value: &str) -> Result<Decimal, AppError> {
    Decimal::from_str(value.trim()).map_err(|e| {
        AppError::from(Error::validation(
            field,
            format!("'{}' is not a decimal amount: {}", value, e),
        ))
    })
}

/// Parses an optional price argument.
pub(crate) fn parse_optional_decimal(
    field: &str,
    value: Option<&str>,
) -> Result<Option<Decimal>, AppError> {
    value.map(|v| parse_decimal(field, v)).transpose()
}

/// Parses an optional condition argument.
pub(crate) fn parse_condition(value: Option<&str>) -> Result<Option<Condition>, AppError> {
    Ok(value.map(Condition::from_str).transpose()?)
}
