//! Расчет чаевых, итога и доли на человека.
//!
//! Порядок проверок: счет, процент, курс. Любая ошибка в них дает `None`
//! целиком. Некорректное число людей убирает только долю на человека.

use crate::convert::{parse_amount, round_money, ExchangeRate};
use crate::model::{CalculationInput, CalculationResult, TipPercent};
use log::debug;
use rust_decimal::Decimal;

/// Чистая функция: без состояния между вызовами, можно звать на каждое нажатие клавиши.
pub fn compute(input: &CalculationInput) -> Option<CalculationResult> {
    let result = try_compute(input);
    match &result {
        Some(r) => debug!(
            "computed tip={} total={} per_person={:?} {}",
            r.tip_amount, r.total_amount, r.per_person_amount, r.currency
        ),
        None => debug!("no result for input {input:?}"),
    }
    result
}

fn try_compute(input: &CalculationInput) -> Option<CalculationResult> {
    let bill = parse_amount(&input.bill_amount)?;
    let percent = TipPercent::parse(&input.tip_percentage)?;

    let base_tip = round_money(
        bill.checked_mul(percent.as_decimal())?
            .checked_div(Decimal::ONE_HUNDRED)?,
    );
    let base_total = round_money(bill.checked_add(base_tip)?);

    let rate = ExchangeRate::parse(&input.exchange_rate)?;
    let tip_amount = rate.convert(base_tip)?;
    let total_amount = rate.convert(base_total)?;

    let per_person_amount = if input.split_enabled {
        parse_people(&input.people_count).and_then(|n| split(total_amount, n))
    } else {
        None
    };

    Some(CalculationResult {
        bill_amount: bill,
        base_tip_amount: base_tip,
        base_total_amount: base_total,
        tip_amount,
        total_amount,
        per_person_amount,
        currency: input.currency.clone(),
    })
}

/// Целое число людей, не меньше 1.
pub fn parse_people(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|n| *n >= 1)
}

fn split(total: Decimal, people: u32) -> Option<Decimal> {
    total.checked_div(Decimal::from(people)).map(round_money)
}
