//! Единый тип ошибок публичного API.
//!
//! Невалидный ввод ошибкой не считается: `compute` просто возвращает `None`.
//! Сюда попадают только сбои ввода-вывода и кодеков.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TipError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TipError>;
