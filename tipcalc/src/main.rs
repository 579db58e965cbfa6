use clap::{Args, Parser, Subcommand};
use log::{debug, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tipcalclib::{
    compute,
    error::Result,
    store::{DEFAULT_EXPORT_FILE, DEFAULT_HISTORY_FILE},
    CalculationInput, Currency, ExportOutcome, HistoryStore,
};

const EMPTY_HISTORY: &str = "История расчетов пуста.";

#[derive(Parser, Debug)]
#[command(name = "tipcalc", version, about = "Калькулятор чаевых")]
struct Cli {
    /// Файл истории расчетов (JSON)
    #[arg(long = "history", global = true, default_value = DEFAULT_HISTORY_FILE)]
    history: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Рассчитать чаевые и общую сумму
    Calc(CalcArgs),
    /// Показать историю расчетов
    History,
    /// Экспортировать историю в CSV
    Export {
        /// Выходной файл
        #[arg(short = 'o', long = "output", default_value = DEFAULT_EXPORT_FILE)]
        output: PathBuf,
    },
}

// Поля принимаются строками как есть: проверка — дело движка.
#[derive(Args, Debug)]
struct CalcArgs {
    /// Сумма счета
    #[arg(long = "bill", allow_hyphen_values = true)]
    bill: String,

    /// Процент чаевых (0–100)
    #[arg(long = "tip", default_value = "10", allow_hyphen_values = true)]
    tip: String,

    /// Разделить счет
    #[arg(long = "split")]
    split: bool,

    /// Количество человек
    #[arg(long = "people", allow_hyphen_values = true)]
    people: Option<String>,

    /// Валюта отображения: руб., USD, EUR
    #[arg(long = "currency", default_value = "руб.")]
    currency: String,

    /// Курс валюты
    #[arg(long = "rate", default_value = "1.0", allow_hyphen_values = true)]
    rate: String,

    /// Сохранить расчет в историю
    #[arg(long = "save")]
    save: bool,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let store = HistoryStore::new(cli.history);

    match cli.command {
        Command::Calc(args) => calc(&store, args),
        Command::History => show_history(&store),
        Command::Export { output } => export_history(&store, &output),
    }
}

fn calc(store: &HistoryStore, args: CalcArgs) -> Result<()> {
    let input = CalculationInput {
        bill_amount: args.bill,
        tip_percentage: args.tip,
        split_enabled: args.split,
        people_count: args.people.unwrap_or_default(),
        exchange_rate: args.rate,
        currency: Currency::from(args.currency.as_str()),
    };

    // некорректный ввод: поля результата остаются пустыми
    let Some(result) = compute(&input) else {
        debug!("invalid input, nothing to show");
        return Ok(());
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{result}")?;

    if args.save {
        store.append(result.to_record())?;
        info!("calculation saved to {}", store.path().display());
    }
    Ok(())
}

fn show_history(store: &HistoryStore) -> Result<()> {
    let records = store.load()?;
    let mut out = io::stdout().lock();
    if records.is_empty() {
        writeln!(out, "{EMPTY_HISTORY}")?;
    }
    for r in &records {
        writeln!(out, "{r}")?;
    }
    Ok(())
}

fn export_history(store: &HistoryStore, output: &Path) -> Result<()> {
    match store.export_csv(output)? {
        ExportOutcome::Empty => println!("{EMPTY_HISTORY}"),
        ExportOutcome::Written { .. } => println!(
            "История успешно экспортирована в файл {}.",
            output.display()
        ),
    }
    Ok(())
}
