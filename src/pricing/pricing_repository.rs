use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use std::sync::Arc;

use crate::db::get_connection;
use crate::pricing::{PricingError, Result};
use crate::schema::final_price_records;
use crate::schema::final_price_records::dsl::*;

use super::pricing_model::{FinalPriceRecord, FinalPriceRecordDB, NewFinalPriceRecord};

/// Append-only ledger of computed final prices. Rows are inserted once
/// and only ever removed, never updated.
pub struct FinalPriceRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl FinalPriceRepository {
    /// Creates a new FinalPriceRepository instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Appends one record to the ledger and returns it with its
    /// assigned id and timestamp
    pub fn append(&self, new_record: NewFinalPriceRecord) -> Result<FinalPriceRecord> {
        let record_db: FinalPriceRecordDB = new_record.into();

        let mut conn = get_connection(&self.pool)
            .map_err(|e| PricingError::DatabaseError(e.to_string()))?;

        diesel::insert_into(final_price_records::table)
            .values(&record_db)
            .get_result::<FinalPriceRecordDB>(&mut conn)
            .map(FinalPriceRecord::from)
            .map_err(|e| PricingError::DatabaseError(e.to_string()))
    }

    /// Lists all ledger records, newest first
    pub fn list(&self) -> Result<Vec<FinalPriceRecord>> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| PricingError::DatabaseError(e.to_string()))?;

        final_price_records
            .order(id.desc())
            .load::<FinalPriceRecordDB>(&mut conn)
            .map_err(|e| PricingError::DatabaseError(e.to_string()))
            .map(|results| results.into_iter().map(FinalPriceRecord::from).collect())
    }

    /// Deletes one record and returns the number of deleted rows
    pub fn delete(&self, record_id: i32) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| PricingError::DatabaseError(e.to_string()))?;

        diesel::delete(final_price_records.find(record_id))
            .execute(&mut conn)
            .map_err(|e| PricingError::DatabaseError(e.to_string()))
    }

    /// Deletes a set of records. Each id is handled independently: ids
    /// that no longer exist are skipped. Returns the number of rows
    /// actually removed.
    pub fn delete_many(&self, record_ids: &[i32]) -> Result<usize> {
        let mut conn = get_connection(&self.pool)
            .map_err(|e| PricingError::DatabaseError(e.to_string()))?;

        let mut removed = 0;
        for record_id in record_ids {
            removed += diesel::delete(final_price_records.find(record_id))
                .execute(&mut conn)
                .map_err(|e| PricingError::DatabaseError(e.to_string()))?;
        }

        Ok(removed)
    }
}
