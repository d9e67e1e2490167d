//! Minimart CLI - the storefront and admin panel shell.
//!
//! Commands:
//! - `minimart catalog` - Browse products, offers and categories
//! - `minimart cart` - Show and mutate the shopping cart
//! - `minimart checkout` - Build the WhatsApp order link
//! - `minimart admin` - Password-gated catalog management

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{AdminArgs, CartArgs, CatalogArgs, CheckoutArgs};

/// Minimart - localized supermarket storefront and admin panel
#[derive(Parser)]
#[command(name = "minimart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// Locale for listings and messages (en, nl, ar)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the catalog
    Catalog(CatalogArgs),

    /// Show and mutate the shopping cart
    Cart(CartArgs),

    /// Build the WhatsApp order link for the current cart
    Checkout(CheckoutArgs),

    /// Manage the catalog (password gated)
    Admin(AdminArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let output = output::Output::new(cli.verbose);

    let ctx = context::Context::load(cli.config.as_deref(), cli.locale.as_deref(), output)?;

    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Checkout(args) => commands::checkout::run(args, &ctx),
        Commands::Admin(args) => commands::admin::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
