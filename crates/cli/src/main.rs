//! MediSync CLI - cart and inventory management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed a starter medicine catalog
//! medisync inventory seed
//!
//! # Add one unit of medicine 7 to the cart
//! medisync cart add 7
//!
//! # Overwrite the quantity on a line
//! medisync cart set-quantity 7 3
//!
//! # Display the cart panel
//! medisync cart show
//! ```
//!
//! # Commands
//!
//! - `cart` - Mutate and display the sales cart
//! - `inventory` - Seed and list the medicine catalog

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "medisync")]
#[command(author, version, about = "MediSync point-of-sale tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Mutate and display the sales cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Manage the medicine inventory
    Inventory {
        #[command(subcommand)]
        action: InventoryAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Add one unit of a medicine to the cart
    Add {
        /// Medicine id (numeric or batch code)
        id: String,
    },
    /// Remove a line from the cart
    Remove {
        /// Medicine id (numeric or batch code)
        id: String,
    },
    /// Overwrite the quantity on a line
    SetQuantity {
        /// Medicine id (numeric or batch code)
        id: String,
        /// New quantity (0 leaves the cart unchanged)
        quantity: u32,
    },
    /// Empty the cart
    Clear,
    /// Display the cart panel
    Show,
}

#[derive(Subcommand)]
enum InventoryAction {
    /// Write a starter catalog
    Seed,
    /// List the catalog
    List {
        /// Only show rows containing this text
        #[arg(short, long)]
        filter: Option<String>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli);

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = medisync_pos::config::PosConfig::from_env();

    match cli.command {
        Commands::Cart { action } => match action {
            CartAction::Add { id } => commands::cart::add(&config, &id)?,
            CartAction::Remove { id } => commands::cart::remove(&config, &id)?,
            CartAction::SetQuantity { id, quantity } => {
                commands::cart::set_quantity(&config, &id, quantity)?;
            }
            CartAction::Clear => commands::cart::clear(&config)?,
            CartAction::Show => commands::cart::show(&config)?,
        },
        Commands::Inventory { action } => match action {
            InventoryAction::Seed => commands::inventory::seed(&config)?,
            InventoryAction::List { filter } => {
                commands::inventory::list(&config, filter.as_deref())?;
            }
        },
    }
    Ok(())
}
