use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::pricing_model::{FinalPriceRecord, NewFinalPriceRecord};
use super::pricing_repository::FinalPriceRepository;
use crate::pricing::{PricingError, Result};
use crate::rates::RateRepository;
use crate::shipping::ShippingRouteRepository;
use crate::vehicles::VehicleRepository;

/// Service computing and recording final import prices.
///
/// The total combines the user-entered vehicle price, the selected
/// route's shipping rate, and the vehicle's import tax converted to
/// foreign currency at the current exchange rate. Every successful
/// computation appends exactly one ledger row.
pub struct PricingService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl PricingService {
    /// Creates a new PricingService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Computes a final price from the raw form input and the selected
    /// vehicle and shipping route, persists it and returns the record
    pub fn calculate(
        &self,
        vehicle_price_input: &str,
        vehicle_id: Option<i32>,
        shipping_route_id: Option<i32>,
    ) -> Result<FinalPriceRecord> {
        let vehicle_price = parse_vehicle_price(vehicle_price_input)?;

        let vehicle_id = vehicle_id.ok_or(PricingError::SelectionRequired)?;
        let route_id = shipping_route_id.ok_or(PricingError::SelectionRequired)?;

        let vehicle = VehicleRepository::new(self.pool.clone()).get_by_id(vehicle_id)?;
        let route = ShippingRouteRepository::new(self.pool.clone()).get_by_id(route_id)?;

        let rate = RateRepository::new(self.pool.clone())
            .latest()?
            .ok_or(PricingError::RateNotSet)?;
        if rate.value <= 0.0 {
            return Err(PricingError::RateNotSet);
        }

        let tax_in_foreign_currency = vehicle.import_tax / rate.value;
        let final_price = vehicle_price + route.rate + tax_in_foreign_currency;

        debug!(
            "Final price for {} {}: {} + {} + {} = {}",
            vehicle.name, vehicle.model, vehicle_price, route.rate, tax_in_foreign_currency,
            final_price
        );

        FinalPriceRepository::new(self.pool.clone()).append(NewFinalPriceRecord {
            vehicle_price,
            shipping_rate: route.rate,
            tax_in_foreign_currency,
            final_price,
            timestamp: None,
        })
    }

    /// Lists all recorded final prices, newest first
    pub fn history(&self) -> Result<Vec<FinalPriceRecord>> {
        FinalPriceRepository::new(self.pool.clone()).list()
    }

    /// Deletes one ledger record; deleting an absent id is a no-op
    pub fn delete_record(&self, record_id: i32) -> Result<()> {
        FinalPriceRepository::new(self.pool.clone()).delete(record_id)?;
        Ok(())
    }

    /// Deletes a set of ledger records, returning how many existed and
    /// were removed
    pub fn delete_records(&self, record_ids: &[i32]) -> Result<usize> {
        FinalPriceRepository::new(self.pool.clone()).delete_many(record_ids)
    }
}

/// Parses the user-entered vehicle price. Anything that is not a finite
/// positive number is rejected before any computation happens.
fn parse_vehicle_price(input: &str) -> Result<f64> {
    let price: f64 = input
        .trim()
        .parse()
        .map_err(|_| PricingError::InvalidVehiclePrice)?;

    if !price.is_finite() || price <= 0.0 {
        return Err(PricingError::InvalidVehiclePrice);
    }

    Ok(price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_positive_prices() {
        assert_eq!(parse_vehicle_price("1000").unwrap(), 1000.0);
        assert_eq!(parse_vehicle_price(" 2500.50 ").unwrap(), 2500.5);
    }

    #[test]
    fn rejects_non_numeric_input() {
        assert!(matches!(
            parse_vehicle_price("abc"),
            Err(PricingError::InvalidVehiclePrice)
        ));
        assert!(matches!(
            parse_vehicle_price(""),
            Err(PricingError::InvalidVehiclePrice)
        ));
    }

    #[test]
    fn rejects_zero_negative_and_non_finite() {
        assert!(matches!(
            parse_vehicle_price("0"),
            Err(PricingError::InvalidVehiclePrice)
        ));
        assert!(matches!(
            parse_vehicle_price("-5"),
            Err(PricingError::InvalidVehiclePrice)
        ));
        assert!(matches!(
            parse_vehicle_price("inf"),
            Err(PricingError::InvalidVehiclePrice)
        ));
        assert!(matches!(
            parse_vehicle_price("NaN"),
            Err(PricingError::InvalidVehiclePrice)
        ));
    }
}
