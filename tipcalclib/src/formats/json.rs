//! Файл истории: JSON-массив объектов `{"Счет", "Чаевые", "Общая сумма"}`.
//!
//! Пишется с отступом в 4 пробела, кириллица не экранируется.

use crate::{error::Result, model::HistoryRecord};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{BufRead, Write};

pub struct Json;

impl crate::traits::ReadFormat for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<HistoryRecord>> {
        Ok(serde_json::from_reader(r)?)
    }
}

impl crate::traits::WriteFormat for Json {
    fn write<W: Write>(mut w: W, records: &[HistoryRecord]) -> Result<()> {
        {
            let formatter = PrettyFormatter::with_indent(b"    ");
            let mut ser = Serializer::with_formatter(&mut w, formatter);
            records.serialize(&mut ser)?;
        }
        w.flush()?;
        Ok(())
    }
}
