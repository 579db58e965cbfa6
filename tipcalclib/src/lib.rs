//! tipcalclib — расчет чаевых, конвертация валюты, история расчетов (JSON) и экспорт (CSV)

pub mod calculator;
pub mod convert;
pub mod error;
pub mod model;
pub mod store;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod json;
}

pub use calculator::compute;
pub use model::{CalculationInput, CalculationResult, Currency, HistoryRecord};
pub use store::{ExportOutcome, HistoryStore};
