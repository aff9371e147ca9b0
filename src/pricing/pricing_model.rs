use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};

/// Domain model for one computed final price.
///
/// A record is a denormalized snapshot of the three contributions at
/// computation time; it carries no references back to the vehicle,
/// route or rate it was computed from, so later edits to those never
/// change history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinalPriceRecord {
    pub id: i32,
    /// User-entered base price in foreign currency
    pub vehicle_price: f64,
    /// Lane cost copied from the shipping route used
    pub shipping_rate: f64,
    /// Import tax converted into foreign currency at the rate in effect
    pub tax_in_foreign_currency: f64,
    /// Sum of the three contributions, fixed at creation time
    pub final_price: f64,
    pub timestamp: NaiveDateTime,
}

/// Input model for appending a ledger row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFinalPriceRecord {
    pub vehicle_price: f64,
    pub shipping_rate: f64,
    pub tax_in_foreign_currency: f64,
    pub final_price: f64,
    /// Filled with the current instant when not supplied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
}

/// Database model for final price records
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::final_price_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct FinalPriceRecordDB {
    #[diesel(skip_insertion)]
    pub id: i32,
    pub vehicle_price: f64,
    pub shipping_rate: f64,
    pub tax_in_foreign_currency: f64,
    pub final_price: f64,
    pub timestamp: NaiveDateTime,
}

// Conversion implementations
impl From<FinalPriceRecordDB> for FinalPriceRecord {
    fn from(db: FinalPriceRecordDB) -> Self {
        Self {
            id: db.id,
            vehicle_price: db.vehicle_price,
            shipping_rate: db.shipping_rate,
            tax_in_foreign_currency: db.tax_in_foreign_currency,
            final_price: db.final_price,
            timestamp: db.timestamp,
        }
    }
}

impl From<NewFinalPriceRecord> for FinalPriceRecordDB {
    fn from(domain: NewFinalPriceRecord) -> Self {
        Self {
            id: 0,
            vehicle_price: domain.vehicle_price,
            shipping_rate: domain.shipping_rate,
            tax_in_foreign_currency: domain.tax_in_foreign_currency,
            final_price: domain.final_price,
            timestamp: domain
                .timestamp
                .unwrap_or_else(|| chrono::Utc::now().naive_utc()),
        }
    }
}
