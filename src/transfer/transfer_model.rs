use serde::{Deserialize, Serialize};

/// The four tables a bulk transfer can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TransferTable {
    Rates,
    Vehicles,
    ShippingRoutes,
    FinalPrices,
}

impl TransferTable {
    /// Exported column order, matching the table's column order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            TransferTable::Rates => &["id", "value"],
            TransferTable::Vehicles => &["id", "name", "model", "import_tax"],
            TransferTable::ShippingRoutes => &["id", "region", "auction_label", "rate"],
            TransferTable::FinalPrices => &[
                "id",
                "vehicle_price",
                "shipping_rate",
                "tax_in_foreign_currency",
                "final_price",
                "timestamp",
            ],
        }
    }

    /// Columns an import file must carry. Ids are reassigned on insert
    /// and ledger timestamps default to the import instant, so neither
    /// is required.
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            TransferTable::Rates => &["value"],
            TransferTable::Vehicles => &["name", "model", "import_tax"],
            TransferTable::ShippingRoutes => &["region", "auction_label", "rate"],
            TransferTable::FinalPrices => &[
                "vehicle_price",
                "shipping_rate",
                "tax_in_foreign_currency",
                "final_price",
            ],
        }
    }
}

/// How an invalid numeric cell is treated during import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumericPolicy {
    /// The row fails; cheaper than discovering zero-valued amounts later
    #[default]
    Strict,
    /// Unparseable cells become 0.0 and face row validation like any
    /// other value
    CoerceToZero,
}

/// How a failed row affects the rest of the import
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowPolicy {
    /// Skip the row, keep a per-row error, commit the good rows
    #[default]
    ContinueAndReport,
    /// First failed row rolls the whole import back
    Abort,
}

/// Caller-chosen import behavior
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOptions {
    pub numeric_policy: NumericPolicy,
    pub row_policy: RowPolicy,
}

/// Outcome of one import run
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSummary {
    pub imported: usize,
    pub failed: usize,
    /// One entry per failed row, with its 1-based row number
    pub errors: Vec<String>,
}
