//! Экспорт истории в CSV: заголовок `Счет,Чаевые,Общая сумма`, строка на запись.
//!
//! Разделитель запятая, перевод строки `\n`, числа в обычной десятичной записи (`110`, не `110.00`).

use crate::{error::Result, model::{HistoryRecord, HISTORY_HEADER}};
use csv::{Terminator, WriterBuilder};
use rust_decimal::Decimal;
use std::io::Write;

#[derive(serde::Serialize)]
struct CsvOutRow {
    bill: String,
    tip: String,
    total: String,
}

fn plain(d: Decimal) -> String {
    d.normalize().to_string()
}

pub struct Csv;

impl crate::traits::WriteFormat for Csv {
    fn write<W: Write>(mut w: W, records: &[HistoryRecord]) -> Result<()> {
        let mut wrt = WriterBuilder::new()
            .has_headers(false)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut w);

        wrt.write_record(HISTORY_HEADER)?;
        for r in records {
            let out = CsvOutRow {
                bill: plain(r.bill_amount),
                tip: plain(r.tip_amount),
                total: plain(r.total_amount),
            };
            wrt.serialize(out)?;
        }
        wrt.flush()?;
        Ok(())
    }
}
