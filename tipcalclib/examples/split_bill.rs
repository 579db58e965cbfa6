use tipcalclib::{compute, CalculationInput, Currency};

fn main() {
    // Пример: счет 2400 руб., 15% чаевых, делим на троих, показываем в EUR
    let input = CalculationInput::new("2400")
        .with_tip("15")
        .with_split("3")
        .with_rate("0.011")
        .with_currency(Currency::Eur);

    match compute(&input) {
        Some(result) => println!("{result}"),
        None => println!("некорректный ввод"),
    }
}
