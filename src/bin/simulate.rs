//! Equity Simulation Binary
//!
//! Loads a persisted seven-card table and runs a Monte Carlo showdown
//! between the given ranges, printing one JSON record per player.
//!
//! Example: simulate --board KhQdJc "AA KK" "AKs AQs" "T9s"

use anyhow::Context;
use clap::Parser;
use shortdeck::cards::Hand;
use shortdeck::equity::Simulation;
use shortdeck::lookup::*;
use shortdeck::ranges::Board;
use shortdeck::ranges::Range;

#[derive(Parser)]
#[command(author, version, about = "Monte Carlo equity between short-deck ranges", long_about = None)]
struct Args {
    /// one range per player, e.g. "AA AKs AcKd"
    #[arg(required = true)]
    ranges: Vec<String>,
    /// seven-card table written by tabulate, defaults to the working directory
    #[arg(short, long)]
    table: Option<String>,
    /// community cards already dealt, e.g. KhQdJc
    #[arg(short, long, default_value = "")]
    board: String,
    #[arg(short, long, default_value_t = shortdeck::SIMULATION_ITERATIONS)]
    iterations: usize,
    #[arg(short, long)]
    seed: Option<u64>,
    /// fail on range tokens that match no shape instead of skipping them
    #[arg(long)]
    strict: bool,
}

fn main() -> anyhow::Result<()> {
    shortdeck::log();
    let args = Args::parse();
    let board = Board::try_from(args.board.as_str()).context("parse board")?;
    let ranges = args
        .ranges
        .iter()
        .map(|r| match args.strict {
            true => Range::try_from(r.as_str()).with_context(|| format!("parse range {:?}", r)),
            false => Ok(Range::parse(r).0),
        })
        .collect::<anyhow::Result<Vec<Range>>>()?;
    let ref path = args.table.unwrap_or_else(Table::path);
    let table = Table::load(path)?;
    let simulation = Simulation::from(ranges)
        .board(Hand::from(board))
        .known(board.size())
        .iterations(args.iterations);
    let simulation = match args.seed {
        Some(seed) => simulation.seed(seed),
        None => simulation,
    };
    for outcome in simulation.run(&table)? {
        println!("{}", serde_json::to_string(&outcome)?);
    }
    Ok(())
}
