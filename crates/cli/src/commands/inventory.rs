//! Inventory subcommands.

#![allow(clippy::print_stdout)]

use std::error::Error;

use medisync_pos::config::PosConfig;
use medisync_pos::inventory::Inventory;
use medisync_pos::search::visible_rows;
use medisync_pos::view::format_price;

/// Write the starter catalog to the configured inventory path.
pub fn seed(config: &PosConfig) -> Result<(), Box<dyn Error>> {
    let catalog = Inventory::starter();
    catalog.save(&config.inventory_path)?;
    println!(
        "Seeded {} medicines to {}",
        catalog.medicines().len(),
        config.inventory_path.display()
    );
    Ok(())
}

/// List the catalog, optionally filtered the way a search box filters rows.
pub fn list(config: &PosConfig, filter: Option<&str>) -> Result<(), Box<dyn Error>> {
    let inventory = Inventory::load(&config.inventory_path)?;

    let rows: Vec<String> = inventory
        .medicines()
        .iter()
        .map(|medicine| {
            format!(
                "{:<10} {:<20} {:>8}  {} in stock",
                medicine.id.to_string(),
                medicine.name,
                format_price(medicine.unit_price),
                medicine.stock
            )
        })
        .collect();

    for row in visible_rows(&rows, filter.unwrap_or("")) {
        println!("{row}");
    }
    Ok(())
}
