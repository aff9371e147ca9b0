use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::shipping_errors::ShippingError;
use super::Result;

/// Domain model for a shipping lane: origin region, auction/destination
/// label, and the lane's cost in foreign currency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRoute {
    pub id: i32,
    pub region: String,
    pub auction_label: String,
    pub rate: f64,
}

/// Input model for creating a new shipping route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShippingRoute {
    pub region: String,
    pub auction_label: String,
    pub rate: f64,
}

impl NewShippingRoute {
    /// Validates the new shipping route data
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(ShippingError::InvalidData(
                "Region cannot be empty".to_string(),
            ));
        }
        if self.auction_label.trim().is_empty() {
            return Err(ShippingError::InvalidData(
                "Auction label cannot be empty".to_string(),
            ));
        }
        if !self.rate.is_finite() || self.rate <= 0.0 {
            return Err(ShippingError::InvalidData(
                "Shipping rate must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Input model for updating an existing shipping route
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRouteUpdate {
    pub region: String,
    pub auction_label: String,
    pub rate: f64,
}

impl ShippingRouteUpdate {
    /// Validates the shipping route update data
    pub fn validate(&self) -> Result<()> {
        NewShippingRoute {
            region: self.region.clone(),
            auction_label: self.auction_label.clone(),
            rate: self.rate,
        }
        .validate()
    }
}

/// Database model for shipping routes
#[derive(
    Queryable,
    Identifiable,
    Insertable,
    AsChangeset,
    Selectable,
    PartialEq,
    Serialize,
    Deserialize,
    Debug,
    Clone,
)]
#[diesel(table_name = crate::schema::shipping_routes)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ShippingRouteDB {
    #[diesel(skip_insertion)]
    pub id: i32,
    pub region: String,
    pub auction_label: String,
    pub rate: f64,
}

// Conversion implementations
impl From<ShippingRouteDB> for ShippingRoute {
    fn from(db: ShippingRouteDB) -> Self {
        Self {
            id: db.id,
            region: db.region,
            auction_label: db.auction_label,
            rate: db.rate,
        }
    }
}

impl From<NewShippingRoute> for ShippingRouteDB {
    fn from(domain: NewShippingRoute) -> Self {
        Self {
            id: 0,
            region: domain.region.trim().to_string(),
            auction_label: domain.auction_label.trim().to_string(),
            rate: domain.rate,
        }
    }
}
