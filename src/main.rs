//! Flatsize CLI - DPI and scaling overrides for Flatpak applications

use clap::Parser;

use flatsize::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
