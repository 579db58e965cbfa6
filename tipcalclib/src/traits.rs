//! Трэйты чтения/записи истории на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::HistoryRecord};
use std::io::{BufRead, Write};

pub trait ReadFormat {
    fn read<R: BufRead>(r: R) -> Result<Vec<HistoryRecord>>;
}

pub trait WriteFormat {
    fn write<W: Write>(w: W, records: &[HistoryRecord]) -> Result<()>;
}
