//! Table Builder Binary
//!
//! Builds the seven-card strength table from scratch and writes it to disk,
//! one `<key>,<value>` record per line.

use clap::Parser;
use shortdeck::lookup::*;

#[derive(Parser)]
#[command(author, version, about = "Build and persist the seven-card strength table", long_about = None)]
struct Args {
    /// where to write the table, defaults to the working directory
    #[arg(short, long)]
    output: Option<String>,
    /// rebuild even if the file already exists
    #[arg(short, long)]
    force: bool,
}

fn main() -> anyhow::Result<()> {
    shortdeck::log();
    let args = Args::parse();
    let ref path = args.output.unwrap_or_else(Table::path);
    if Table::done(path) && !args.force {
        log::info!("{:<32}{:<32}", "skipping    existing table", path);
        return Ok(());
    }
    Table::grow()?.save(path)
}
