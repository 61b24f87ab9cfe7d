//! Short-deck poker: hand ranking, strength tables, range expansion, and equity.
//!
//! The 36-card deck drops ranks Two through Five. Everything here is built on
//! a single 64-bit card set representation, see [`cards::Hand`].
//!
//! ## Modules
//!
//! - [`cards`] : Card primitives, enumeration, sampling, and the 5-card classifier
//! - [`ranges`] : Range and board notation expansion
//! - [`lookup`] : Five- and seven-card strength tables and their file format
//! - [`equity`] : Monte Carlo equity between player ranges
pub mod cards;
pub mod equity;
pub mod error;
pub mod lookup;
pub mod ranges;

pub use error::Error;

// ============================================================================
// DECK GEOMETRY
// ============================================================================
/// Cards in the short deck.
pub const N_CARDS: usize = 36;
/// Ranks in the short deck (Six through Ace).
pub const N_RANKS: usize = 9;
/// Suits in any deck.
pub const N_SUITS: usize = 4;
/// Cards in a player's hole.
pub const N_HOLE: usize = 2;
/// Cards on a complete board.
pub const N_BOARD: usize = 5;

// ============================================================================
// STRENGTH TABLES
// ============================================================================
/// C(36, 5) entries in the five-card table.
pub const N_FIVE_CARD_HANDS: usize = 376_992;
/// C(36, 7) entries in the seven-card table.
pub const N_SEVEN_CARD_HANDS: usize = 8_347_680;
/// Default location of the persisted seven-card table.
pub const TABLE_PATH: &str = "seven_card_strength_lookup.csv";

// ============================================================================
// MONTE CARLO SIMULATION
// ============================================================================
/// Iterations per simulation when none are requested.
pub const SIMULATION_ITERATIONS: usize = 10_000;
/// Independent shards a simulation is split into.
/// A seed reproduces a run only for the same shard count.
pub const SIMULATION_SHARDS: usize = 64;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("time moves slow")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
