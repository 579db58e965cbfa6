//! Денежные суммы: разбор ввода, округление и пересчет по курсу.
//!
//! Округление везде одно: до 2 знаков, банковское (половина к четному).

use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use std::str::FromStr;

pub const MONEY_SCALE: u32 = 2;

pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointNearestEven)
}

/// Положительное конечное число из поля ввода, иначе `None`.
/// Пробелы по краям игнорируются, допускается запись `1e2`.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    let value = Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()?;
    (value > Decimal::ZERO).then_some(value)
}

/// Курс пересчета из исходной валюты в валюту отображения. Всегда > 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExchangeRate(Decimal);

impl ExchangeRate {
    pub fn parse(raw: &str) -> Option<Self> {
        parse_amount(raw).map(Self)
    }

    /// `None` только при переполнении.
    pub fn convert(self, amount: Decimal) -> Option<Decimal> {
        amount.checked_mul(self.0).map(round_money)
    }
}
