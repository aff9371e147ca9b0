use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::debug;
use std::sync::Arc;

use super::rates_model::{NewRate, Rate};
use super::rates_repository::RateRepository;
use crate::rates::Result;

/// Service for managing the daily exchange rate.
///
/// "Current" is always the most recently inserted row. Deleting the
/// newest row silently promotes the next-newest one to current; callers
/// that care should re-read `current_rate` after a delete.
pub struct RateService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl RateService {
    /// Creates a new RateService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Records a new rate, making it the current one
    pub fn set_rate(&self, rate_value: f64) -> Result<Rate> {
        debug!("Recording new exchange rate: {}", rate_value);
        let repo = RateRepository::new(self.pool.clone());
        repo.create(NewRate { value: rate_value })
    }

    /// Returns the current rate, or None when none has been recorded yet
    pub fn current_rate(&self) -> Result<Option<Rate>> {
        let repo = RateRepository::new(self.pool.clone());
        repo.latest()
    }

    /// Lists all recorded rates, newest first
    pub fn history(&self) -> Result<Vec<Rate>> {
        let repo = RateRepository::new(self.pool.clone());
        repo.list()
    }

    /// Replaces the value of a specific rate row
    pub fn update_rate(&self, rate_id: i32, rate_value: f64) -> Result<Rate> {
        let repo = RateRepository::new(self.pool.clone());
        repo.update(rate_id, rate_value)
    }

    /// Deletes a rate row; deleting an absent id is a no-op
    pub fn delete_rate(&self, rate_id: i32) -> Result<()> {
        let repo = RateRepository::new(self.pool.clone());
        repo.delete(rate_id)?;
        Ok(())
    }
}
