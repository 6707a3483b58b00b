//! Core pricing calculation functions.
//!
//! Pure functions for pricing math - no I/O, no shared state. Money is
//! `rust_decimal::Decimal` throughout; rounding happens only when a value
//! is rendered for display, never while accumulating.

use chrono::{Duration, NaiveDate};
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::models::{
    ChildrenPolicy, Discount, MealPlan, PriceBreakdownItem, PriceCalculationResult, PriceInterval,
    RoomRate, TransportOptions,
};

/// Round to specified decimal places using banker's rounding
/// (ROUND_HALF_EVEN), which reduces cumulative rounding bias.
///
/// # Examples
/// ```
/// use rust_decimal_macros::dec;
/// use stay_pricing::pricing::round_money;
///
/// assert_eq!(round_money(dec!(2.5), 0), dec!(2));   // rounds to even
/// assert_eq!(round_money(dec!(3.5), 0), dec!(4));   // rounds to even
/// assert_eq!(round_money(dec!(1.234), 2), dec!(1.23));
/// ```
pub fn round_money(amount: Decimal, places: u32) -> Decimal {
    amount.round_dp_with_strategy(places, RoundingStrategy::MidpointNearestEven)
}

/// Format an amount as a Euro price for breakdown descriptions:
/// "€589" or "€58.5", at most two decimals, no trailing zeros.
pub fn format_eur(amount: Decimal) -> String {
    format!("€{}", round_money(amount, 2).normalize())
}

/// Format a date the way the agency prints it: "10.07.2025."
pub fn format_date_sr(date: NaiveDate) -> String {
    date.format("%d.%m.%Y.").to_string()
}

/// Whole nights between check-in and checkout (checkout day excluded).
pub fn nights_between(check_in: NaiveDate, check_out: NaiveDate) -> i64 {
    (check_out - check_in).num_days()
}

/// Nights a stay spends inside one interval.
///
/// The interval end date is inclusive of its whole last day, so the overlap
/// is computed against `end_date + 1`; non-overlapping inputs yield 0.
pub fn nights_in_interval(
    check_in: NaiveDate,
    check_out: NaiveDate,
    interval: &PriceInterval,
) -> i64 {
    let interval_end = interval.end_date + Duration::days(1);
    let overlap_start = check_in.max(interval.start_date);
    let overlap_end = check_out.min(interval_end);
    (overlap_end - overlap_start).num_days().max(0)
}

/// One interval a stay overlaps, with the nights spent in it.
#[derive(Debug, Clone, Copy)]
pub struct StayNights<'a> {
    pub interval: &'a PriceInterval,
    pub nights: i64,
}

/// Resolve every interval the stay overlaps, ascending by interval start
/// date so breakdown output is deterministic. Intervals with zero overlap
/// are dropped.
pub fn resolve_stay_intervals<'a>(
    check_in: NaiveDate,
    check_out: NaiveDate,
    intervals: &'a [PriceInterval],
) -> Vec<StayNights<'a>> {
    let mut resolved: Vec<StayNights<'a>> = intervals
        .iter()
        .map(|interval| StayNights {
            interval,
            nights: nights_in_interval(check_in, check_out, interval),
        })
        .filter(|stay| stay.nights > 0)
        .collect();

    resolved.sort_by_key(|stay| stay.interval.start_date);
    resolved
}

/// A child's effective per-night price with the discount label applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildPrice {
    pub price: Decimal,
    pub label: String,
}

/// Resolve a child's per-night price from the package's age brackets.
///
/// Brackets are `[age_from, age_to)` and must not overlap, so the first
/// match is the only match. No match charges the full base price.
pub fn resolve_child_price(
    base_price: Decimal,
    age: u8,
    policies: &[ChildrenPolicy],
) -> ChildPrice {
    let policy = policies.iter().find(|p| p.applies_to(age));

    match policy.map(|p| p.discount) {
        None => ChildPrice {
            price: base_price,
            label: "puna cena".to_string(),
        },
        Some(Discount::Free) => ChildPrice {
            price: Decimal::ZERO,
            label: "besplatno".to_string(),
        },
        Some(Discount::Percent(percent)) => ChildPrice {
            price: base_price * (Decimal::ONE - percent / Decimal::from(100)),
            label: format!("-{}%", percent.normalize()),
        },
        Some(Discount::Fixed(fixed)) => ChildPrice {
            price: fixed,
            label: format!("fiksno {}", format_eur(fixed)),
        },
    }
}

/// Resolve the optional flat per-person transport charge.
///
/// The shift rate is preferred when positive, then the package default.
/// Transport is advisory: with neither rate available there is simply no
/// charge and no breakdown line.
pub fn resolve_transport(opts: &TransportOptions, persons: i32) -> Option<PriceBreakdownItem> {
    if !opts.include_transport {
        return None;
    }

    let positive = |rate: &Decimal| *rate > Decimal::ZERO;
    let rate = opts
        .shift_rate
        .filter(positive)
        .or(opts.package_rate.filter(positive))?;

    let subtotal = rate * Decimal::from(persons);
    Some(PriceBreakdownItem {
        interval_name: None,
        nights: 0,
        price_per_unit: rate,
        subtotal,
        description: format!("Prevoz - {} osoba × {}", persons, format_eur(rate)),
    })
}

/// Combine accommodation and transport subtotals into the final result.
///
/// `price_per_night` guards against zero nights: a zero-night query should
/// never get here, but if it does it yields 0 rather than panicking.
pub fn aggregate(
    accommodation_total: Decimal,
    transport_total: Decimal,
    nights: i64,
    breakdown: Vec<PriceBreakdownItem>,
) -> PriceCalculationResult {
    let price_per_night = if nights > 0 {
        accommodation_total / Decimal::from(nights)
    } else {
        Decimal::ZERO
    };

    PriceCalculationResult {
        accommodation_total,
        transport_total,
        total: accommodation_total + transport_total,
        nights,
        price_per_night,
        breakdown,
    }
}

/// Per-person nightly price found for a single date.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceForDate {
    pub price_per_person: Decimal,
    pub interval_name: Option<String>,
}

/// Look up the per-person nightly price for a single date: the interval
/// containing the date, then that interval's rate row for the room type and
/// meal plan. Used by public package pages to show "from" prices.
pub fn price_for_date(
    date: NaiveDate,
    intervals: &[PriceInterval],
    rates: &[RoomRate],
    room_type_id: Uuid,
    meal_plan: MealPlan,
) -> Option<PriceForDate> {
    let interval = intervals
        .iter()
        .find(|i| date >= i.start_date && date <= i.end_date)?;

    let rate = rates
        .iter()
        .find(|r| r.room_type_id == room_type_id && r.interval_id == interval.id)?;

    let price_per_person = rate.rate_for(meal_plan)?;

    Some(PriceForDate {
        price_per_person,
        interval_name: interval.name.clone(),
    })
}
