use clap::Parser;
use stencil::cli::{handle_items, handle_list, handle_preview, handle_save, handle_show, Cli, Commands};
use stencil::config::{resolve_catalog, LogConfig};

fn main() {
    let cli = Cli::parse();

    LogConfig::verbose(cli.verbose).init();

    let result = resolve_catalog(cli.catalog.as_deref()).and_then(|catalog| match cli.command {
        Commands::List { category, json } => handle_list(&catalog, category, json),
        Commands::Items { json } => handle_items(&catalog, json),
        Commands::Show { id, json } => handle_show(&catalog, id, json),
        Commands::Preview {
            id,
            assignments,
            json,
        } => handle_preview(&catalog, id, assignments, json),
        Commands::Save {
            id,
            assignments,
            json,
        } => handle_save(&catalog, id, assignments, json),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
