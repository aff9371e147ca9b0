use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use super::rates_errors::RateError;
use super::Result;

/// Domain model for one recorded exchange rate: home-currency units per
/// one unit of foreign currency. The row with the highest id is the
/// current rate; older rows are history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rate {
    pub id: i32,
    pub value: f64,
}

/// Input model for recording a new rate
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRate {
    pub value: f64,
}

impl NewRate {
    /// Validates the new rate data
    pub fn validate(&self) -> Result<()> {
        if !self.value.is_finite() || self.value <= 0.0 {
            return Err(RateError::InvalidData(
                "Rate value must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Database model for rates
#[derive(
    Queryable, Identifiable, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::rates)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct RateDB {
    #[diesel(skip_insertion)]
    pub id: i32,
    pub value: f64,
}

// Conversion implementations
impl From<RateDB> for Rate {
    fn from(db: RateDB) -> Self {
        Self {
            id: db.id,
            value: db.value,
        }
    }
}

impl From<NewRate> for RateDB {
    fn from(domain: NewRate) -> Self {
        Self {
            id: 0,
            value: domain.value,
        }
    }
}
