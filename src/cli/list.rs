use super::ui;
use crate::core::currency;
use anyhow::Result;
use comfy_table::Cell;

/// Displays all supported currencies, sorted by code.
pub fn run() -> Result<()> {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Code"),
        ui::header_cell("Currency Name"),
    ]);

    for (code, name) in currency::all() {
        table.add_row(vec![Cell::new(code), Cell::new(name)]);
    }

    println!(
        "{}",
        ui::style_text("Available Currencies", ui::StyleType::Title)
    );
    println!("{table}");
    Ok(())
}
