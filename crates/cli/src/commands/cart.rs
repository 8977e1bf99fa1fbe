//! Cart subcommands.
//!
//! Each command opens the file-backed cart store, applies one mutation, and
//! lets the render callback paint the updated panel. The terminal is just
//! another render target for the cart's view data.

#![allow(clippy::print_stdout)]

use std::error::Error;

use chrono::Utc;
use medisync_core::MedicineId;
use medisync_pos::config::PosConfig;
use medisync_pos::error::CartError;
use medisync_pos::inventory::Inventory;
use medisync_pos::notice::{Notice, NoticeLevel};
use medisync_pos::persist::FileStore;
use medisync_pos::store::CartStore;
use medisync_pos::view::{CartRenderer, CartView, NullRenderer, format_price};

/// Renderer printing the cart panel after each mutation.
///
/// The store renders once at load; that paint is skipped so a single
/// command prints a single panel.
#[derive(Default)]
struct TerminalRenderer {
    painted_initial: bool,
}

impl CartRenderer for TerminalRenderer {
    fn render(&mut self, view: &CartView) {
        if self.painted_initial {
            print_view(view);
        } else {
            self.painted_initial = true;
        }
    }
}

fn print_view(view: &CartView) {
    if view.items.is_empty() {
        println!("Cart is empty.");
    } else {
        for item in &view.items {
            println!(
                "{:<20} {} x {:<3} {}",
                item.name,
                format_price(item.unit_price),
                item.quantity,
                format_price(item.line_total)
            );
        }
    }
    println!(
        "Total: {}  Items: {}",
        format_price(view.total_price),
        view.total_quantity
    );
}

fn print_notice(notice: &Notice) {
    println!("[{}] {}", notice.level, notice.message);
}

fn open_store(config: &PosConfig) -> Result<CartStore<FileStore>, Box<dyn Error>> {
    let storage = FileStore::open(&config.data_dir)?;
    Ok(CartStore::open(
        storage,
        Box::new(TerminalRenderer::default()),
    ))
}

/// Add one unit of a medicine, with the stock ceiling taken from the
/// inventory at this moment.
pub fn add(config: &PosConfig, raw_id: &str) -> Result<(), Box<dyn Error>> {
    let id = MedicineId::parse(raw_id);
    let inventory = Inventory::load(&config.inventory_path)?;
    let medicine = inventory.get(&id)?;

    let mut store = open_store(config)?;
    match store.add_item(
        medicine.id.clone(),
        &medicine.name,
        medicine.unit_price,
        medicine.stock,
    ) {
        Ok(()) => Ok(()),
        Err(err @ CartError::StockExceeded { .. }) => {
            // A blocking notice for the clerk, not a process failure
            print_notice(&Notice::new(NoticeLevel::Error, err.to_string(), Utc::now()));
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

/// Remove a line from the cart (no-op if absent).
pub fn remove(config: &PosConfig, raw_id: &str) -> Result<(), Box<dyn Error>> {
    let id = MedicineId::parse(raw_id);
    let mut store = open_store(config)?;
    store.remove_item(&id)?;
    Ok(())
}

/// Overwrite the quantity on a line.
///
/// A zero quantity or an unknown id leaves the cart unchanged, silently.
pub fn set_quantity(config: &PosConfig, raw_id: &str, quantity: u32) -> Result<(), Box<dyn Error>> {
    let id = MedicineId::parse(raw_id);
    let mut store = open_store(config)?;
    store.set_quantity(&id, quantity)?;
    Ok(())
}

/// Empty the cart.
pub fn clear(config: &PosConfig) -> Result<(), Box<dyn Error>> {
    let mut store = open_store(config)?;
    store.clear()?;
    Ok(())
}

/// Display the cart panel without mutating anything.
pub fn show(config: &PosConfig) -> Result<(), Box<dyn Error>> {
    let storage = FileStore::open(&config.data_dir)?;
    let store = CartStore::open(storage, Box::new(NullRenderer));
    print_view(&store.render());
    Ok(())
}
