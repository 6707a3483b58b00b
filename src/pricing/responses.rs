//! Response DTOs for the pricing API.
//!
//! Display rounding happens here and only here: domain results carry exact
//! decimals, the wire carries amounts rounded to cents as strings.

use rust_decimal::Decimal;
use serde::Serialize;

use super::calculators::{round_money, PriceForDate};
use super::models::{PriceBreakdownItem, PriceCalculationResult};

/// One breakdown line as rendered to the caller.
#[derive(Debug, Serialize)]
pub struct PriceBreakdownItemResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_name: Option<String>,
    pub nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_unit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub subtotal: Decimal,
    pub description: String,
}

impl From<PriceBreakdownItem> for PriceBreakdownItemResponse {
    fn from(item: PriceBreakdownItem) -> Self {
        Self {
            interval_name: item.interval_name,
            nights: item.nights,
            price_per_unit: round_money(item.price_per_unit, 2),
            subtotal: round_money(item.subtotal, 2),
            description: item.description,
        }
    }
}

/// Response for a full price calculation.
#[derive(Debug, Serialize)]
pub struct PriceCalculationResponse {
    #[serde(with = "rust_decimal::serde::str")]
    pub accommodation_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub transport_total: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub total: Decimal,
    pub nights: i64,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_night: Decimal,
    pub breakdown: Vec<PriceBreakdownItemResponse>,
}

impl From<PriceCalculationResult> for PriceCalculationResponse {
    fn from(result: PriceCalculationResult) -> Self {
        Self {
            accommodation_total: round_money(result.accommodation_total, 2),
            transport_total: round_money(result.transport_total, 2),
            total: round_money(result.total, 2),
            nights: result.nights,
            price_per_night: round_money(result.price_per_night, 2),
            breakdown: result.breakdown.into_iter().map(Into::into).collect(),
        }
    }
}

/// Response for a single-date price lookup. `price_per_person` is `None`
/// when no interval or rate covers the date.
#[derive(Debug, Serialize)]
pub struct PriceForDateResponse {
    #[serde(with = "rust_decimal::serde::str_option")]
    pub price_per_person: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval_name: Option<String>,
}

impl From<Option<PriceForDate>> for PriceForDateResponse {
    fn from(found: Option<PriceForDate>) -> Self {
        match found {
            Some(found) => Self {
                price_per_person: Some(round_money(found.price_per_person, 2)),
                interval_name: found.interval_name,
            },
            None => Self {
                price_per_person: None,
                interval_name: None,
            },
        }
    }
}

/// Liveness response for `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
