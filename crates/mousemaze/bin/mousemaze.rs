//! Mouse Maze
//!
//! Command-line entry point: inspect levels, carve mazes and manage the
//! stored progress.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};

use mz_core::GameRng;
use mz_core::level::get_level_definition;
use mz_core::maze::get_maze;
use mz_core::options::GameOptions;
use mz_core::progress::random_player_name;
use mz_save::{default_data_dir, load_or_default, progress_path, save_progress};

/// Options file name inside the data directory
const CONFIG_FILE: &str = "mousemazerc";

/// Mouse Maze in Rust
#[derive(Parser, Debug)]
#[command(name = "mousemaze")]
#[command(author, version, about = "Mouse Maze - guide the mouse to the cheese", long_about = None)]
struct Args {
    /// Directory holding progress and options
    #[arg(long = "data-dir", global = true)]
    data_dir: Option<PathBuf>,

    /// Options file (defaults to mousemazerc in the data directory)
    #[arg(long = "config", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the layout chosen for a level
    Level {
        /// Level number
        #[arg(allow_negative_numbers = true)]
        number: i32,

        /// Treat the tutorial as finished
        #[arg(long = "tutorial-passed")]
        tutorial_passed: bool,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,

        /// Print the full definition as JSON
        #[arg(long)]
        json: bool,
    },

    /// Carve a maze of the given size
    Maze {
        rows: usize,
        cols: usize,

        /// RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Show stored progress and the current level
    Progress,

    /// Record a score and move to the next level
    Advance {
        /// Score for the finished level
        #[arg(long)]
        score: Option<i64>,

        /// Player name for the score table
        #[arg(long, requires = "score")]
        name: Option<String>,
    },

    /// View high scores
    Scores,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let data_dir = args.data_dir.clone().unwrap_or_else(default_data_dir);
    let config = args
        .config
        .clone()
        .unwrap_or_else(|| data_dir.join(CONFIG_FILE));

    let options = GameOptions::load_or_default(&config)
        .with_context(|| format!("reading options from {}", config.display()))?;
    debug!("options: {:?}", options);

    match args.command {
        Command::Level {
            number,
            tutorial_passed,
            seed,
            json,
        } => show_level(number, tutorial_passed, make_rng(seed, &options), json),
        Command::Maze { rows, cols, seed } => show_maze(rows, cols, make_rng(seed, &options)),
        Command::Progress => show_progress(&data_dir, make_rng(None, &options)),
        Command::Advance { score, name } => advance(&data_dir, score, name, &options),
        Command::Scores => show_scores(&data_dir),
    }
}

/// Seed from the command line, then the options file, then entropy
fn make_rng(seed: Option<u64>, options: &GameOptions) -> GameRng {
    match seed.or(options.seed) {
        Some(seed) => GameRng::new(seed),
        None => GameRng::from_entropy(),
    }
}

/// Name given on the command line, then the configured one, then a random pick
fn player_name(name: Option<String>, options: &GameOptions, rng: &mut GameRng) -> String {
    name.filter(|n| !n.trim().is_empty())
        .or_else(|| (!options.name.is_empty()).then(|| options.name.clone()))
        .unwrap_or_else(|| random_player_name(rng).to_string())
}

fn show_level(number: i32, tutorial_passed: bool, mut rng: GameRng, json: bool) -> Result<()> {
    let level = get_level_definition(number, tutorial_passed, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&level)?);
        return Ok(());
    }

    let size = level.dimensions();
    println!("{} ({}, {}x{})", level.id, level.kind, size.rows, size.cols);
    if let Some(speed) = level.cat_speed {
        println!("cat speed: {}", speed);
    }
    if let (Some(min), Some(max)) = (level.min_commands, level.max_commands) {
        println!("commands: {}..={}", min, max);
    }
    for row in &level.rows {
        println!("{}", row);
    }
    Ok(())
}

fn show_maze(rows: usize, cols: usize, mut rng: GameRng) -> Result<()> {
    let maze = get_maze(rows, cols, &mut rng)?;
    print!("{}", maze);
    Ok(())
}

fn show_progress(data_dir: &Path, mut rng: GameRng) -> Result<()> {
    let progress = load_or_default(data_dir);
    let level = progress.current_definition(&mut rng)?;

    println!("Data: {}", progress_path(data_dir).display());
    println!("Level: {} ({})", progress.current_level, level.id);
    println!(
        "Tutorial: {}",
        if progress.tutorial_passed { "passed" } else { "in progress" }
    );
    println!("Scores recorded: {}", progress.scores.len());
    Ok(())
}

fn advance(
    data_dir: &Path,
    score: Option<i64>,
    name: Option<String>,
    options: &GameOptions,
) -> Result<()> {
    let mut rng = make_rng(None, options);
    let mut progress = load_or_default(data_dir);

    if let Some(score) = score {
        let name = player_name(name, options, &mut rng);
        match progress.record_score(&name, score) {
            Some(rank) => println!("{} placed #{} with {}", name, rank, score),
            None => println!("{} did not make the table with {}", name, score),
        }
    }

    progress.next_level();
    info!(
        "now on level {} (tutorial passed: {})",
        progress.current_level, progress.tutorial_passed
    );

    let path = progress_path(data_dir);
    save_progress(&progress, &path)
        .with_context(|| format!("saving progress to {}", path.display()))?;
    Ok(())
}

fn show_scores(data_dir: &Path) -> Result<()> {
    let progress = load_or_default(data_dir);

    println!("\n=== Mouse Maze High Scores ===\n");
    println!("{:<4} {:<20} {:<10} {:<10}", "Rank", "Player", "Score", "Date");
    println!("{:-<46}", "");

    if progress.scores.is_empty() {
        println!("(no scores yet)");
    }
    for (rank, entry) in progress.scores.top(progress.scores.len()).iter().enumerate() {
        println!(
            "{:<4} {:<20} {:<10} {:<10}",
            rank + 1,
            entry.name,
            entry.score,
            entry.date.format("%Y-%m-%d")
        );
    }
    Ok(())
}
