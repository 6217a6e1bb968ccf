use super::ui;
use crate::core::config::AppConfig;
use crate::store::HistoryLog;
use anyhow::Result;
use comfy_table::Cell;

/// Displays past conversions in insertion order.
pub fn run(config: &AppConfig) -> Result<()> {
    let log = HistoryLog::new(config.history_path()?);
    let records = log.read_all();

    if records.is_empty() {
        println!(
            "{}",
            ui::style_text("No conversion history found.", ui::StyleType::Warning)
        );
        return Ok(());
    }

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date"),
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Result"),
    ]);

    for record in &records {
        table.add_row(vec![
            Cell::new(record.timestamp.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(format!("{} {}", record.from_amount, record.from_currency)),
            Cell::new(&record.to_currency),
            ui::amount_cell(&format!("{:.2}", record.result)),
        ]);
    }

    println!(
        "{}",
        ui::style_text("Conversion History", ui::StyleType::Title)
    );
    println!("{table}");
    Ok(())
}
