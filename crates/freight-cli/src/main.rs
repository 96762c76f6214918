//! Freightline - cargo distribution for a small transport company
//!
//! A CLI tool that keeps a roster of clients and vehicles and assigns client
//! cargo to vehicles, VIP clients and smaller vehicles first.

mod cli;
mod commands;
mod logging;
mod menu;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
