//! Price calculation entry points.
//!
//! The two public calculators here are what the reservation and offer-quote
//! workflows call: pure functions over snapshots of a package's intervals,
//! rate rows and children policies. Mode selection (unit nightly rate vs.
//! per person with meal plan) happens at the call site.

use std::collections::HashMap;

use rust_decimal::Decimal;
use uuid::Uuid;

use super::calculators::{
    aggregate, format_eur, resolve_child_price, resolve_stay_intervals, resolve_transport,
    StayNights,
};
use super::models::{
    Apartment, ApartmentRate, ChildrenPolicy, MealPlan, PriceBreakdownItem,
    PriceCalculationResult, PriceInterval, RoomRate, RoomType, StayRange, TransportOptions,
};

/// Pricing calculation error types.
///
/// `NoPriceIntervalFound` and `MealPlanUnavailable` abort the whole
/// calculation; a partial or zero-priced result would under-charge a real
/// customer. Zero-night division is normalized in the aggregator instead of
/// erroring here.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PricingError {
    #[error("checkout must be strictly after check-in")]
    InvalidDateRange,

    #[error("no price interval covers the selected dates")]
    NoPriceIntervalFound,

    #[error("meal plan {meal_plan} not available for interval {interval}")]
    MealPlanUnavailable { meal_plan: MealPlan, interval: String },
}

impl PricingError {
    /// Customer-facing message, in the language the agency quotes in.
    pub fn user_message(&self) -> &'static str {
        match self {
            PricingError::InvalidDateRange => "Neispravan datumski opseg",
            PricingError::NoPriceIntervalFound | PricingError::MealPlanUnavailable { .. } => {
                "Ponuda nije dostupna za izabrani period"
            }
        }
    }
}

/// Resolve the stay's intervals and verify the package calendar fully
/// covers it. A shortfall means a gap; an excess means overlapping
/// intervals double-counted a night. Either way the price would be wrong,
/// so both fail.
fn resolve_covered_intervals<'a>(
    stay: StayRange,
    intervals: &'a [PriceInterval],
) -> Result<(i64, Vec<StayNights<'a>>), PricingError> {
    let total_nights = stay.nights();
    if total_nights <= 0 {
        return Err(PricingError::InvalidDateRange);
    }

    let resolved = resolve_stay_intervals(stay.check_in, stay.check_out, intervals);
    if resolved.is_empty() {
        return Err(PricingError::NoPriceIntervalFound);
    }

    let covered: i64 = resolved.iter().map(|s| s.nights).sum();
    if covered != total_nights {
        tracing::warn!(
            covered,
            total_nights,
            check_in = %stay.check_in,
            check_out = %stay.check_out,
            "price interval calendar does not cover the stay"
        );
        return Err(PricingError::NoPriceIntervalFound);
    }

    Ok((total_nights, resolved))
}

/// Calculate the price of a stay in an apartment (unit-nightly-rate mode).
///
/// The unit is priced as a whole: occupant count only matters for the
/// transport add-on. A missing rate row resolves to a typed `None` and is
/// charged as zero with a warning; rate sheets for fiksni packages are
/// complete by construction upstream.
pub fn calculate_unit_rate_price(
    apartment: &Apartment,
    stay: StayRange,
    intervals: &[PriceInterval],
    rates: &[ApartmentRate],
    transport: &TransportOptions,
    number_of_persons: i32,
) -> Result<PriceCalculationResult, PricingError> {
    let (total_nights, resolved) = resolve_covered_intervals(stay, intervals)?;

    let rate_by_interval: HashMap<Uuid, Decimal> = rates
        .iter()
        .filter(|r| r.apartment_id == apartment.id)
        .map(|r| (r.interval_id, r.price_per_night))
        .collect();

    let mut accommodation_total = Decimal::ZERO;
    let mut breakdown: Vec<PriceBreakdownItem> = Vec::with_capacity(resolved.len() + 1);

    for stay_nights in &resolved {
        let interval = stay_nights.interval;
        let price_per_night = match rate_by_interval.get(&interval.id) {
            Some(rate) => *rate,
            None => {
                tracing::warn!(
                    apartment = %apartment.name,
                    interval = %interval.label(),
                    "no nightly rate for interval, charging zero"
                );
                Decimal::ZERO
            }
        };

        let subtotal = Decimal::from(stay_nights.nights) * price_per_night;
        accommodation_total += subtotal;

        breakdown.push(PriceBreakdownItem {
            interval_name: interval.name.clone(),
            nights: stay_nights.nights,
            price_per_unit: price_per_night,
            subtotal,
            description: format!(
                "{} - {} noći × {}",
                apartment.name,
                stay_nights.nights,
                format_eur(price_per_night)
            ),
        });
    }

    let mut transport_total = Decimal::ZERO;
    if let Some(line) = resolve_transport(transport, number_of_persons) {
        transport_total = line.subtotal;
        breakdown.push(line);
    }

    Ok(aggregate(
        accommodation_total,
        transport_total,
        total_nights,
        breakdown,
    ))
}

/// Calculate the price of a hotel stay (per-person room-and-meal-plan mode).
///
/// Adults pay the interval's meal-plan rate per night; each child is priced
/// independently per interval, since the discount base changes with the
/// interval. A missing or zero meal-plan rate aborts with
/// `MealPlanUnavailable`. Free children still get a breakdown line so the
/// zero charge is auditable.
#[allow(clippy::too_many_arguments)]
pub fn calculate_per_person_price(
    room_type: &RoomType,
    stay: StayRange,
    meal_plan: MealPlan,
    intervals: &[PriceInterval],
    rates: &[RoomRate],
    children_policies: &[ChildrenPolicy],
    adults: i32,
    children_ages: &[u8],
) -> Result<PriceCalculationResult, PricingError> {
    let (total_nights, resolved) = resolve_covered_intervals(stay, intervals)?;

    let rate_by_interval: HashMap<Uuid, &RoomRate> = rates
        .iter()
        .filter(|r| r.room_type_id == room_type.id)
        .map(|r| (r.interval_id, r))
        .collect();

    let mut accommodation_total = Decimal::ZERO;
    let mut breakdown: Vec<PriceBreakdownItem> = Vec::new();

    for stay_nights in &resolved {
        let interval = stay_nights.interval;
        let nights = Decimal::from(stay_nights.nights);

        let price_per_person = rate_by_interval
            .get(&interval.id)
            .and_then(|rate| rate.rate_for(meal_plan))
            .ok_or_else(|| PricingError::MealPlanUnavailable {
                meal_plan,
                interval: interval.label(),
            })?;

        let adults_subtotal = Decimal::from(adults) * price_per_person * nights;
        accommodation_total += adults_subtotal;

        breakdown.push(PriceBreakdownItem {
            interval_name: interval.name.clone(),
            nights: stay_nights.nights,
            price_per_unit: price_per_person,
            subtotal: adults_subtotal,
            description: format!(
                "{} ({}) - {} odraslih × {} noći × {}",
                room_type.name,
                meal_plan,
                adults,
                stay_nights.nights,
                format_eur(price_per_person)
            ),
        });

        for &age in children_ages {
            let child = resolve_child_price(price_per_person, age, children_policies);
            let child_subtotal = child.price * nights;
            accommodation_total += child_subtotal;

            // Zero-subtotal lines stay in: a free child must be visible in
            // the audit trail, not silently dropped.
            breakdown.push(PriceBreakdownItem {
                interval_name: interval.name.clone(),
                nights: stay_nights.nights,
                price_per_unit: child.price,
                subtotal: child_subtotal,
                description: format!(
                    "Dete ({} god.) {} - {} noći × {}",
                    age,
                    child.label,
                    stay_nights.nights,
                    format_eur(child.price)
                ),
            });
        }
    }

    Ok(aggregate(
        accommodation_total,
        Decimal::ZERO,
        total_nights,
        breakdown,
    ))
}
