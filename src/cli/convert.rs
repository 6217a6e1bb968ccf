use super::ui;
use crate::ConvertArgs;
use crate::core::config::AppConfig;
use crate::core::{convert, currency};
use crate::providers::exchange_rate_api::ExchangeRateApiProvider;
use crate::resolver::RateResolver;
use crate::store::{ConversionRecord, HistoryLog, RateStore};
use anyhow::Result;
use tracing::warn;

fn display_result(amount: f64, from: &str, to: &str, result: f64) {
    println!(
        "\n{} {} → {} {}",
        ui::style_text(&format!("{amount:.2}"), ui::StyleType::Amount),
        ui::style_text(from, ui::StyleType::Code),
        ui::style_text(&format!("{result:.2}"), ui::StyleType::Amount),
        ui::style_text(to, ui::StyleType::Code),
    );
}

pub async fn run(args: &ConvertArgs, config: &AppConfig) -> Result<()> {
    let from = args.from.to_uppercase();
    let to = args.to.to_uppercase();

    // Both codes must be known before any network or file I/O
    currency::name(&from)?;
    currency::name(&to)?;

    let mut store = RateStore::open(config.rates_cache_path()?);
    let provider = ExchangeRateApiProvider::new(&config.provider.base_url);
    let mut resolver = RateResolver::new(&provider, &mut store);

    let rate = if args.offline {
        resolver.resolve(&from, &to, true).await?
    } else {
        let spinner = ui::new_spinner("Fetching latest rates...");
        let resolved = resolver.resolve(&from, &to, false).await;
        spinner.finish_and_clear();
        resolved?
    };

    let result = convert(args.amount, rate)?;
    display_result(args.amount, &from, &to, result);

    if args.save {
        let log = HistoryLog::new(config.history_path()?);
        let record = ConversionRecord::new(args.amount, &from, &to, result);
        match log.append(record) {
            Ok(()) => println!(
                "{}",
                ui::style_text("Conversion saved to history.", ui::StyleType::Success)
            ),
            // The conversion itself succeeded, so only report the failure
            Err(e) => {
                warn!("Failed to save conversion history: {e}");
                eprintln!(
                    "{}",
                    ui::style_text(
                        &format!("Could not save conversion to history: {e}"),
                        ui::StyleType::Error
                    )
                );
            }
        }
    }

    Ok(())
}
