use std::collections::HashMap;
use std::io::{Read, Write};
use std::sync::Arc;

use chrono::NaiveDateTime;
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::sqlite::SqliteConnection;
use log::info;

use super::transfer_model::{
    ImportOptions, ImportSummary, NumericPolicy, RowPolicy, TransferTable,
};
use super::{Result, TransferError};
use crate::db::get_connection;
use crate::pricing::{FinalPriceRecordDB, FinalPriceRepository, NewFinalPriceRecord};
use crate::rates::{NewRate, RateDB, RateRepository};
use crate::schema::{final_price_records, rates, shipping_routes, vehicles};
use crate::shipping::{NewShippingRoute, ShippingRouteDB, ShippingRouteRepository};
use crate::vehicles::{NewVehicle, VehicleDB, VehicleRepository};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.f";

/// Service moving whole tables in and out of the store as CSV.
///
/// Export writes a header row of column names followed by all rows,
/// newest first. Import matches file columns to table columns by exact
/// name and runs inside one transaction; what happens to bad cells and
/// bad rows is the caller's choice via `ImportOptions`.
pub struct TransferService {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
}

impl TransferService {
    /// Creates a new TransferService instance
    pub fn new(pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>) -> Self {
        Self { pool }
    }

    /// Writes the full contents of one table as CSV
    pub fn export<W: Write>(&self, table: TransferTable, writer: W) -> Result<()> {
        let mut wtr = WriterBuilder::new().from_writer(writer);
        wtr.write_record(table.columns())?;

        match table {
            TransferTable::Rates => {
                let rows = RateRepository::new(self.pool.clone())
                    .list()
                    .map_err(|e| TransferError::DatabaseError(e.to_string()))?;
                for r in rows {
                    wtr.write_record(&[r.id.to_string(), r.value.to_string()])?;
                }
            }
            TransferTable::Vehicles => {
                let rows = VehicleRepository::new(self.pool.clone())
                    .list()
                    .map_err(|e| TransferError::DatabaseError(e.to_string()))?;
                for v in rows {
                    wtr.write_record(&[
                        v.id.to_string(),
                        v.name,
                        v.model,
                        v.import_tax.to_string(),
                    ])?;
                }
            }
            TransferTable::ShippingRoutes => {
                let rows = ShippingRouteRepository::new(self.pool.clone())
                    .list()
                    .map_err(|e| TransferError::DatabaseError(e.to_string()))?;
                for s in rows {
                    wtr.write_record(&[
                        s.id.to_string(),
                        s.region,
                        s.auction_label,
                        s.rate.to_string(),
                    ])?;
                }
            }
            TransferTable::FinalPrices => {
                let rows = FinalPriceRepository::new(self.pool.clone())
                    .list()
                    .map_err(|e| TransferError::DatabaseError(e.to_string()))?;
                for f in rows {
                    wtr.write_record(&[
                        f.id.to_string(),
                        f.vehicle_price.to_string(),
                        f.shipping_rate.to_string(),
                        f.tax_in_foreign_currency.to_string(),
                        f.final_price.to_string(),
                        f.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                    ])?;
                }
            }
        }

        wtr.flush()
            .map_err(|e| TransferError::MalformedFile(e.to_string()))?;
        Ok(())
    }

    /// Loads CSV rows into one table.
    ///
    /// Missing required columns abort before anything is written. All
    /// inserts run in one transaction; under `RowPolicy::Abort` a bad
    /// row rolls that transaction back, under `ContinueAndReport` bad
    /// rows are counted and the rest commits.
    pub fn import<R: Read>(
        &self,
        table: TransferTable,
        reader: R,
        options: ImportOptions,
    ) -> Result<ImportSummary> {
        let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(reader);

        let headers = rdr.headers()?.clone();
        let missing: Vec<String> = table
            .required_columns()
            .iter()
            .filter(|col| !headers.iter().any(|h| h == **col))
            .map(|col| col.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(TransferError::MissingColumns(missing));
        }

        let index: HashMap<&str, usize> =
            headers.iter().enumerate().map(|(i, h)| (h, i)).collect();

        let rows: Vec<StringRecord> =
            rdr.records().collect::<std::result::Result<_, _>>()?;

        let mut conn = get_connection(&self.pool)
            .map_err(|e| TransferError::DatabaseError(e.to_string()))?;

        let summary = conn.transaction::<ImportSummary, TransferError, _>(|conn| {
            let mut summary = ImportSummary::default();

            for (i, row) in rows.iter().enumerate() {
                let row_number = i + 1;
                match insert_row(conn, table, row, &index, options.numeric_policy) {
                    Ok(()) => summary.imported += 1,
                    Err(message) => match options.row_policy {
                        RowPolicy::Abort => {
                            return Err(TransferError::RowFailed {
                                row: row_number,
                                message,
                            })
                        }
                        RowPolicy::ContinueAndReport => {
                            summary.failed += 1;
                            summary.errors.push(format!("row {}: {}", row_number, message));
                        }
                    },
                }
            }

            Ok(summary)
        })?;

        info!(
            "Imported {} rows into {:?} ({} failed)",
            summary.imported, table, summary.failed
        );
        Ok(summary)
    }
}

fn cell<'a>(row: &'a StringRecord, index: &HashMap<&str, usize>, column: &str) -> &'a str {
    index
        .get(column)
        .and_then(|i| row.get(*i))
        .unwrap_or_default()
}

/// Parses one numeric cell under the chosen policy. Strict rejects the
/// row; CoerceToZero reproduces the lenient "invalid becomes 0" import
/// behavior, leaving row validation to catch the zero where it matters.
fn parse_numeric(raw: &str, policy: NumericPolicy) -> std::result::Result<f64, String> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => match policy {
            NumericPolicy::Strict => Err(format!("invalid number '{}'", raw.trim())),
            NumericPolicy::CoerceToZero => Ok(0.0),
        },
    }
}

fn insert_row(
    conn: &mut SqliteConnection,
    table: TransferTable,
    row: &StringRecord,
    index: &HashMap<&str, usize>,
    policy: NumericPolicy,
) -> std::result::Result<(), String> {
    match table {
        TransferTable::Rates => {
            let new_rate = NewRate {
                value: parse_numeric(cell(row, index, "value"), policy)?,
            };
            new_rate.validate().map_err(|e| e.to_string())?;

            diesel::insert_into(rates::table)
                .values(&RateDB::from(new_rate))
                .execute(conn)
                .map_err(|e| e.to_string())?;
        }
        TransferTable::Vehicles => {
            let new_vehicle = NewVehicle {
                name: cell(row, index, "name").to_string(),
                model: cell(row, index, "model").to_string(),
                import_tax: parse_numeric(cell(row, index, "import_tax"), policy)?,
            };
            new_vehicle.validate().map_err(|e| e.to_string())?;

            diesel::insert_into(vehicles::table)
                .values(&VehicleDB::from(new_vehicle))
                .execute(conn)
                .map_err(|e| e.to_string())?;
        }
        TransferTable::ShippingRoutes => {
            let new_route = NewShippingRoute {
                region: cell(row, index, "region").to_string(),
                auction_label: cell(row, index, "auction_label").to_string(),
                rate: parse_numeric(cell(row, index, "rate"), policy)?,
            };
            new_route.validate().map_err(|e| e.to_string())?;

            diesel::insert_into(shipping_routes::table)
                .values(&ShippingRouteDB::from(new_route))
                .execute(conn)
                .map_err(|e| e.to_string())?;
        }
        TransferTable::FinalPrices => {
            let timestamp = match cell(row, index, "timestamp") {
                "" => None,
                raw => Some(parse_timestamp(raw)?),
            };

            let new_record = NewFinalPriceRecord {
                vehicle_price: parse_numeric(cell(row, index, "vehicle_price"), policy)?,
                shipping_rate: parse_numeric(cell(row, index, "shipping_rate"), policy)?,
                tax_in_foreign_currency: parse_numeric(
                    cell(row, index, "tax_in_foreign_currency"),
                    policy,
                )?,
                final_price: parse_numeric(cell(row, index, "final_price"), policy)?,
                timestamp,
            };

            diesel::insert_into(final_price_records::table)
                .values(&FinalPriceRecordDB::from(new_record))
                .execute(conn)
                .map_err(|e| e.to_string())?;
        }
    }

    Ok(())
}

fn parse_timestamp(raw: &str) -> std::result::Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw.trim(), "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|_| format!("invalid timestamp '{}'", raw.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_policy_rejects_invalid_numbers() {
        assert_eq!(parse_numeric("12.5", NumericPolicy::Strict).unwrap(), 12.5);
        assert!(parse_numeric("abc", NumericPolicy::Strict).is_err());
        assert!(parse_numeric("", NumericPolicy::Strict).is_err());
        assert!(parse_numeric("inf", NumericPolicy::Strict).is_err());
    }

    #[test]
    fn coerce_policy_turns_invalid_numbers_into_zero() {
        assert_eq!(
            parse_numeric("abc", NumericPolicy::CoerceToZero).unwrap(),
            0.0
        );
        assert_eq!(
            parse_numeric("12.5", NumericPolicy::CoerceToZero).unwrap(),
            12.5
        );
    }

    #[test]
    fn timestamps_round_trip_through_the_export_format() {
        let ts = chrono::NaiveDate::from_ymd_opt(2025, 8, 20)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let formatted = ts.format(TIMESTAMP_FORMAT).to_string();
        assert_eq!(parse_timestamp(&formatted).unwrap(), ts);
    }
}
