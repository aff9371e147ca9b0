use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::rates::{RateError, Result};
use crate::schema::rates;
use crate::schema::rates::dsl::*;

use super::rates_model::{NewRate, Rate, RateDB};

/// Repository for managing rate rows in the database
pub struct RateRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl RateRepository {
    /// Creates a new RateRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Inserts a new rate row and returns it
    pub fn create(&self, new_rate: NewRate) -> Result<Rate> {
        new_rate.validate()?;

        let rate_db: RateDB = new_rate.into();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        diesel::insert_into(rates::table)
            .values(&rate_db)
            .get_result::<RateDB>(&mut conn)
            .map(Rate::from)
            .map_err(|e| RateError::DatabaseError(e.to_string()))
    }

    /// Returns the current rate: the row with the highest id, if any
    pub fn latest(&self) -> Result<Option<Rate>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        let rate = rates
            .order(id.desc())
            .first::<RateDB>(&mut conn)
            .optional()
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        Ok(rate.map(Rate::from))
    }

    /// Lists all recorded rates, newest first
    pub fn list(&self) -> Result<Vec<Rate>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        rates
            .order(id.desc())
            .load::<RateDB>(&mut conn)
            .map_err(|e| RateError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(Rate::from).collect())
    }

    /// Replaces the value of an existing rate row
    pub fn update(&self, rate_id: i32, new_value: f64) -> Result<Rate> {
        NewRate { value: new_value }.validate()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        diesel::update(rates.find(rate_id))
            .set(value.eq(new_value))
            .get_result::<RateDB>(&mut conn)
            .map(Rate::from)
            .map_err(|e| match e {
                diesel::result::Error::NotFound => {
                    RateError::NotFound(format!("Rate with id {} not found", rate_id))
                }
                _ => RateError::DatabaseError(e.to_string()),
            })
    }

    /// Deletes a rate row and returns the number of deleted records
    pub fn delete(&self, rate_id: i32) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| RateError::DatabaseError(e.to_string()))?;

        diesel::delete(rates.find(rate_id))
            .execute(&mut conn)
            .map_err(|e| RateError::DatabaseError(e.to_string()))
    }
}
