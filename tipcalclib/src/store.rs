//! История расчетов в JSON-файле и ее экспорт в CSV.
//!
//! Файл создается при первой записи. Отсутствующий файл или файл, который
//! не разбирается как JSON (синтаксис, обрыв, не UTF-8), читается как пустая
//! история и перезаписывается при следующем `append`. Корректный JSON с
//! неподходящими данными возвращается ошибкой: такой файл не затирается.
//!
//! `append` читает, дописывает и заменяет файл целиком через временный файл
//! и `rename`, без блокировок. Два процесса, пишущие одновременно, могут
//! потерять запись друг друга.

use crate::{
    error::{Result, TipError},
    formats::{csv::Csv, json::Json},
    model::HistoryRecord,
    traits::{ReadFormat, WriteFormat},
};
use log::{info, warn};
use serde_json::error::Category;
use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

pub const DEFAULT_HISTORY_FILE: &str = "tip_calculator_history.json";
pub const DEFAULT_EXPORT_FILE: &str = "tip_calculator_history.csv";

/// Итог экспорта. `Empty` — не ошибка: файл не создается, вызывающий показывает уведомление.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    Empty,
    Written { rows: usize },
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Записи в порядке добавления. Ошибкой считаются сбои чтения (кроме
    /// отсутствия файла) и JSON, который разобрался, но не лег в записи.
    pub fn load(&self) -> Result<Vec<HistoryRecord>> {
        let bytes = match fs::read(&self.path) {
            Ok(b) => b,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        if let Err(e) = std::str::from_utf8(&bytes) {
            warn!(
                "history file {} is not UTF-8, treating as empty: {e}",
                self.path.display()
            );
            return Ok(Vec::new());
        }

        match Json::read(bytes.as_slice()) {
            Ok(records) => Ok(records),
            Err(TipError::Json(e)) if matches!(e.classify(), Category::Syntax | Category::Eof) => {
                warn!(
                    "history file {} is not valid JSON, treating as empty: {e}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.load()?.is_empty())
    }

    pub fn append(&self, record: HistoryRecord) -> Result<()> {
        let mut records = self.load()?;
        records.push(record);

        let dir = match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            Some(parent) => {
                fs::create_dir_all(parent)?;
                parent
            }
            None => Path::new("."),
        };

        // старый файл остается целым, пока новый не записан полностью
        let mut tmp = NamedTempFile::new_in(dir)?;
        {
            let mut w = BufWriter::new(&mut tmp);
            Json::write(&mut w, &records)?;
            w.flush()?;
        }
        tmp.persist(&self.path).map_err(|e| e.error)?;

        info!(
            "appended record to {} ({} total)",
            self.path.display(),
            records.len()
        );
        Ok(())
    }

    pub fn export_csv(&self, path: impl AsRef<Path>) -> Result<ExportOutcome> {
        let path = path.as_ref();
        let records = self.load()?;
        if records.is_empty() {
            info!("history is empty, nothing exported to {}", path.display());
            return Ok(ExportOutcome::Empty);
        }

        let mut w = BufWriter::new(File::create(path)?);
        Csv::write(&mut w, &records)?;
        w.flush()?;

        info!("exported {} records to {}", records.len(), path.display());
        Ok(ExportOutcome::Written {
            rows: records.len(),
        })
    }
}
