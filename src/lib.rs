pub mod db;

pub mod errors;
pub mod pricing;
pub mod rates;
pub mod schema;
pub mod shipping;
pub mod transfer;
pub mod vehicles;

pub use errors::{Error, Result};
