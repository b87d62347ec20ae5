//! mealplan CLI - menu composition and shopping lists.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compose {
            catalog,
            category,
            time,
            tier,
            seed,
            config,
            season,
            shopping_list,
            json,
        } => commands::compose::run(commands::compose::ComposeArgs {
            catalog,
            category,
            time,
            tier,
            seed,
            config,
            season,
            shopping_list,
            json,
        }),

        Commands::ShoppingList {
            catalog,
            dishes,
            json,
        } => commands::shopping_list::run(catalog, dishes, json),

        Commands::Recipe {
            catalog,
            dish,
            json,
        } => commands::recipe::run(catalog, dish, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_logging(verbose: bool) {
    let default = if verbose { "mealplan=debug" } else { "mealplan=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
