//! Stay pricing engine for the travel agency CRM.
//!
//! A pure, stateless calculation service: the CRM ships read-only snapshots
//! of a package's seasonal intervals, rate tables and children policies,
//! and gets back an auditable price breakdown. No database, no caching.

pub mod error;
pub mod pricing;

pub use error::AppError;
pub use pricing::{calculate_per_person_price, calculate_unit_rate_price, PricingError};
