//! Request DTOs for the pricing API.
//!
//! The caller ships the full read-only snapshot (intervals, rate rows,
//! policies) inline; this service never reads storage. Decimals travel as
//! strings on the wire.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use super::models::{
    Apartment, ApartmentRate, ChildrenPolicy, MealPlan, PriceInterval, RoomRate, RoomType,
    StayRange, TransportOptions,
};

/// Body of `POST /pricing/calculate`.
///
/// Internally tagged on the package's pricing model, so dispatch over the
/// two modes is exhaustive at compile time.
#[derive(Debug, Deserialize)]
#[serde(tag = "pricing_model", rename_all = "snake_case")]
pub enum CalculatePriceRequest {
    UnitRate(UnitRatePriceRequest),
    PerPerson(PerPersonPriceRequest),
}

/// Unit-nightly-rate (apartment) calculation input.
#[derive(Debug, Deserialize)]
pub struct UnitRatePriceRequest {
    pub apartment: Apartment,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub intervals: Vec<PriceInterval>,
    pub rates: Vec<ApartmentRate>,
    #[serde(default)]
    pub include_transport: bool,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub shift_transport_rate: Option<Decimal>,
    #[serde(default, with = "rust_decimal::serde::str_option")]
    pub package_transport_rate: Option<Decimal>,
    pub number_of_persons: i32,
}

impl UnitRatePriceRequest {
    pub fn stay(&self) -> StayRange {
        StayRange {
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }

    pub fn transport(&self) -> TransportOptions {
        TransportOptions {
            include_transport: self.include_transport,
            shift_rate: self.shift_transport_rate,
            package_rate: self.package_transport_rate,
        }
    }
}

/// Per-person room-and-meal-plan (hotel) calculation input.
#[derive(Debug, Deserialize)]
pub struct PerPersonPriceRequest {
    pub room_type: RoomType,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub meal_plan: MealPlan,
    pub intervals: Vec<PriceInterval>,
    pub rates: Vec<RoomRate>,
    #[serde(default)]
    pub children_policies: Vec<ChildrenPolicy>,
    pub adults: i32,
    #[serde(default)]
    pub children_ages: Vec<u8>,
}

impl PerPersonPriceRequest {
    pub fn stay(&self) -> StayRange {
        StayRange {
            check_in: self.check_in,
            check_out: self.check_out,
        }
    }
}

/// Body of `POST /pricing/price-for-date`.
#[derive(Debug, Deserialize)]
pub struct PriceForDateRequest {
    pub date: NaiveDate,
    pub room_type_id: uuid::Uuid,
    pub meal_plan: MealPlan,
    pub intervals: Vec<PriceInterval>,
    pub rates: Vec<RoomRate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_unit_rate_request_json() {
        let body = serde_json::json!({
            "pricing_model": "unit_rate",
            "apartment": {
                "id": "7f1b6a6e-9a1a-4f6e-8b1a-111111111111",
                "name": "STD",
                "max_persons": 4
            },
            "check_in": "2025-07-10",
            "check_out": "2025-07-17",
            "intervals": [{
                "id": "7f1b6a6e-9a1a-4f6e-8b1a-222222222222",
                "name": "Glavna sezona",
                "start_date": "2025-07-01",
                "end_date": "2025-08-31"
            }],
            "rates": [{
                "apartment_id": "7f1b6a6e-9a1a-4f6e-8b1a-111111111111",
                "interval_id": "7f1b6a6e-9a1a-4f6e-8b1a-222222222222",
                "price_per_night": "589"
            }],
            "include_transport": true,
            "package_transport_rate": "50",
            "number_of_persons": 3
        });

        let req: CalculatePriceRequest = serde_json::from_value(body).unwrap();
        match req {
            CalculatePriceRequest::UnitRate(body) => {
                assert_eq!(body.stay().nights(), 7);
                assert_eq!(body.rates[0].price_per_night, dec!(589));
                let transport = body.transport();
                assert!(transport.include_transport);
                assert_eq!(transport.shift_rate, None);
                assert_eq!(transport.package_rate, Some(dec!(50)));
            }
            CalculatePriceRequest::PerPerson(_) => panic!("expected unit_rate"),
        }
    }

    #[test]
    fn test_per_person_request_json() {
        let body = serde_json::json!({
            "pricing_model": "per_person",
            "room_type": {
                "id": "7f1b6a6e-9a1a-4f6e-8b1a-333333333333",
                "code": "1/2",
                "name": "Dvokrevetna",
                "max_persons": 3
            },
            "check_in": "2025-07-10",
            "check_out": "2025-07-13",
            "meal_plan": "BB",
            "intervals": [],
            "rates": [{
                "room_type_id": "7f1b6a6e-9a1a-4f6e-8b1a-333333333333",
                "interval_id": "7f1b6a6e-9a1a-4f6e-8b1a-444444444444",
                "price_bb": "100"
            }],
            "children_policies": [{
                "age_from": 3,
                "age_to": 7,
                "discount_type": "PERCENT",
                "discount_value": "50"
            }],
            "adults": 2,
            "children_ages": [5]
        });

        let req: CalculatePriceRequest = serde_json::from_value(body).unwrap();
        match req {
            CalculatePriceRequest::PerPerson(body) => {
                assert_eq!(body.meal_plan, MealPlan::Bb);
                assert_eq!(body.rates[0].price_bb, Some(dec!(100)));
                assert_eq!(body.rates[0].price_ai, None);
                assert_eq!(body.children_policies.len(), 1);
                assert_eq!(body.children_ages, vec![5]);
            }
            CalculatePriceRequest::UnitRate(_) => panic!("expected per_person"),
        }
    }
}
