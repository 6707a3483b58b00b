//! Stay pricing engine.
//!
//! Computes the authoritative total price of a stay: nightly rates prorated
//! across seasonal intervals, age-bracketed children discounts, two pricing
//! models (unit nightly rate and per person with meal plan) and an optional
//! transport add-on, with an auditable line-item breakdown. Called by the
//! CRM over HTTP/JSON; also usable directly as a library.

pub mod calculators;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;

// Re-export commonly used items
pub use calculators::{
    price_for_date, resolve_child_price, resolve_stay_intervals, resolve_transport, round_money,
};
pub use models::{MealPlan, PriceBreakdownItem, PriceCalculationResult, StayRange};
pub use routes::router;
pub use services::{calculate_per_person_price, calculate_unit_rate_price, PricingError};
