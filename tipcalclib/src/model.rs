//! Доменные модели: сырой ввод формы, результат расчета и запись истории.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Имена полей записи истории: ключи JSON и заголовок CSV.
pub const FIELD_BILL: &str = "Счет";
pub const FIELD_TIP: &str = "Чаевые";
pub const FIELD_TOTAL: &str = "Общая сумма";

pub const HISTORY_HEADER: [&str; 3] = [FIELD_BILL, FIELD_TIP, FIELD_TOTAL];

/// Валюта отображения. Форма предлагает три варианта, но принимается любая метка.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Currency {
    #[default]
    Rub,
    Usd,
    Eur,
    Other(String),
}

impl Currency {
    pub fn label(&self) -> &str {
        match self {
            Currency::Rub => "руб.",
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Other(label) => label,
        }
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        match s.trim() {
            "руб." | "RUB" | "rub" => Currency::Rub,
            "USD" | "usd" => Currency::Usd,
            "EUR" | "eur" => Currency::Eur,
            other => Currency::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Процент чаевых: целое число от 0 до 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct TipPercent(u8);

impl TipPercent {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    /// Отрицательные, дробные и нечисловые значения отвергаются.
    pub fn parse(raw: &str) -> Option<Self> {
        let value: i64 = raw.trim().parse().ok()?;
        u8::try_from(value).ok().and_then(Self::new)
    }

    pub fn as_decimal(self) -> Decimal {
        Decimal::from(self.0)
    }
}

/// Снимок полей формы на момент вызова. Строится заново при каждом изменении.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationInput {
    pub bill_amount: String,
    pub tip_percentage: String,
    pub split_enabled: bool,
    pub people_count: String,
    pub exchange_rate: String,
    pub currency: Currency,
}

impl Default for CalculationInput {
    /// Состояние формы после «Очистить».
    fn default() -> Self {
        Self {
            bill_amount: String::new(),
            tip_percentage: "10".into(),
            split_enabled: false,
            people_count: String::new(),
            exchange_rate: "1.0".into(),
            currency: Currency::Rub,
        }
    }
}

impl CalculationInput {
    pub fn new(bill_amount: impl Into<String>) -> Self {
        Self {
            bill_amount: bill_amount.into(),
            ..Self::default()
        }
    }

    pub fn with_tip(mut self, tip_percentage: impl Into<String>) -> Self {
        self.tip_percentage = tip_percentage.into();
        self
    }

    /// Включает разделение счета на `people_count` человек.
    pub fn with_split(mut self, people_count: impl Into<String>) -> Self {
        self.split_enabled = true;
        self.people_count = people_count.into();
        self
    }

    pub fn with_rate(mut self, exchange_rate: impl Into<String>) -> Self {
        self.exchange_rate = exchange_rate.into();
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}

/// Результат расчета. `tip_amount`, `total_amount` и `per_person_amount` уже
/// пересчитаны в валюту отображения; `base_*` и `bill_amount` остаются в
/// исходной валюте и идут в историю.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculationResult {
    pub bill_amount: Decimal,
    pub base_tip_amount: Decimal,
    pub base_total_amount: Decimal,
    pub tip_amount: Decimal,
    pub total_amount: Decimal,
    pub per_person_amount: Option<Decimal>,
    pub currency: Currency,
}

impl CalculationResult {
    /// Запись для истории: конвертация только для отображения и не сохраняется.
    pub fn to_record(&self) -> HistoryRecord {
        HistoryRecord {
            bill_amount: self.bill_amount,
            tip_amount: self.base_tip_amount,
            total_amount: self.base_total_amount,
        }
    }
}

/// Сумма для вывода как в форме: без лишних нулей, целые с `.0` (`110.0`, `27.5`).
pub fn display_amount(d: Decimal) -> String {
    let n = d.normalize();
    if n.scale() == 0 {
        format!("{n}.0")
    } else {
        n.to_string()
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cur = &self.currency;
        write!(f, "Сумма чаевых: {} {cur}", display_amount(self.tip_amount))?;
        write!(f, "\nОбщая сумма к оплате: {} {cur}", display_amount(self.total_amount))?;
        if let Some(pp) = self.per_person_amount {
            write!(f, "\nНа каждого: {} {cur}", display_amount(pp))?;
        }
        Ok(())
    }
}

/// Сохраненный расчет. Суммы в исходной валюте.
///
/// В JSON пишутся строками, читаются и строки, и числа (`100.0`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    #[serde(rename = "Счет")]
    pub bill_amount: Decimal,
    #[serde(rename = "Чаевые")]
    pub tip_amount: Decimal,
    #[serde(rename = "Общая сумма")]
    pub total_amount: Decimal,
}

impl HistoryRecord {
    pub fn new(bill_amount: Decimal, tip_amount: Decimal, total_amount: Decimal) -> Self {
        Self {
            bill_amount,
            tip_amount,
            total_amount,
        }
    }
}

impl fmt::Display for HistoryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{FIELD_BILL}: {} руб., {FIELD_TIP}: {} руб., {FIELD_TOTAL}: {} руб.",
            display_amount(self.bill_amount),
            display_amount(self.tip_amount),
            display_amount(self.total_amount),
        )
    }
}
