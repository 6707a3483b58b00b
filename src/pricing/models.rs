//! Domain models for the stay pricing engine.
//!
//! These are read-only snapshots supplied by the caller for the duration of
//! one calculation. The engine never mutates them and never touches storage.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A named seasonal pricing period belonging to one package.
///
/// Both `start_date` and `end_date` are inclusive calendar days: an interval
/// ending on 06-30 still prices the night of 06-30. Intervals within one
/// package must not overlap (validated where they are defined).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceInterval {
    pub id: Uuid,
    #[serde(default)]
    pub name: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl PriceInterval {
    /// Display label for error messages and breakdown lines.
    pub fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.id.to_string())
    }
}

/// Accommodation unit priced as a whole per night (fiksni packages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Apartment {
    pub id: Uuid,
    pub name: String,
    pub max_persons: i32,
}

/// Hotel room category priced per person per night (na upit packages).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomType {
    pub id: Uuid,
    /// Room code such as "1/2" or "1/3".
    pub code: String,
    pub name: String,
    pub max_persons: i32,
}

/// Nightly rate of one apartment within one interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApartmentRate {
    pub apartment_id: Uuid,
    pub interval_id: Uuid,
    #[serde(with = "rust_decimal::serde::str")]
    pub price_per_night: Decimal,
}

/// Per-person nightly rates of one room type within one interval, one
/// optional rate per meal plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRate {
    pub room_type_id: Uuid,
    pub interval_id: Uuid,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_nd: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_bb: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_hb: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_fb: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub price_ai: Option<Decimal>,
}

impl RoomRate {
    /// Rate for a meal plan. A missing or non-positive rate means the plan
    /// is not sold in this interval, so callers get `None` rather than a
    /// zero that would silently under-charge.
    pub fn rate_for(&self, plan: MealPlan) -> Option<Decimal> {
        let rate = match plan {
            MealPlan::Nd => self.price_nd,
            MealPlan::Bb => self.price_bb,
            MealPlan::Hb => self.price_hb,
            MealPlan::Fb => self.price_fb,
            MealPlan::Ai => self.price_ai,
        }?;
        (rate > Decimal::ZERO).then_some(rate)
    }
}

/// Meal plan codes as used on rate sheets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MealPlan {
    /// Room only, no meals.
    #[serde(rename = "ND")]
    Nd,
    /// Bed and breakfast.
    #[serde(rename = "BB")]
    Bb,
    /// Half board.
    #[serde(rename = "HB")]
    Hb,
    /// Full board.
    #[serde(rename = "FB")]
    Fb,
    /// All inclusive.
    #[serde(rename = "AI")]
    Ai,
}

impl MealPlan {
    pub fn code(&self) -> &'static str {
        match self {
            MealPlan::Nd => "ND",
            MealPlan::Bb => "BB",
            MealPlan::Hb => "HB",
            MealPlan::Fb => "FB",
            MealPlan::Ai => "AI",
        }
    }
}

impl fmt::Display for MealPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Age-bracketed discount rule for children, half-open on the upper bound:
/// a child aged exactly `age_to` belongs to the next bracket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChildrenPolicy {
    pub age_from: u8,
    pub age_to: u8,
    #[serde(flatten)]
    pub discount: Discount,
    #[serde(default)]
    pub label: Option<String>,
}

impl ChildrenPolicy {
    pub fn applies_to(&self, age: u8) -> bool {
        age >= self.age_from && age < self.age_to
    }
}

/// Discount kinds are a closed set; adding one is a compile-time change and
/// every match over it stays exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "discount_type", content = "discount_value")]
pub enum Discount {
    /// Child stays free.
    #[serde(rename = "FREE")]
    Free,
    /// Percent off the adult per-night price.
    #[serde(rename = "PERCENT")]
    Percent(#[serde(with = "rust_decimal::serde::str")] Decimal),
    /// Fixed per-night price overriding the base entirely.
    #[serde(rename = "FIXED")]
    Fixed(#[serde(with = "rust_decimal::serde::str")] Decimal),
}

/// Check-in / check-out pair. Checkout is exclusive: the checkout day is
/// not a night of stay.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StayRange {
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
}

impl StayRange {
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

/// Transport add-on inputs. A scheduled departure ("shift") rate wins over
/// the package default; with neither, transport is silently unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransportOptions {
    pub include_transport: bool,
    pub shift_rate: Option<Decimal>,
    pub package_rate: Option<Decimal>,
}

/// One audit-trail line of a price calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceBreakdownItem {
    pub interval_name: Option<String>,
    pub nights: i64,
    pub price_per_unit: Decimal,
    pub subtotal: Decimal,
    pub description: String,
}

/// The authoritative result of one price calculation.
///
/// Consumed opaquely by the reservation and offer-quote workflows; amounts
/// are exact decimals, rounded only when rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceCalculationResult {
    pub accommodation_total: Decimal,
    pub transport_total: Decimal,
    pub total: Decimal,
    pub nights: i64,
    pub price_per_night: Decimal,
    pub breakdown: Vec<PriceBreakdownItem>,
}
