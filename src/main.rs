use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use naval_battle::{
    init_logging, run_match, CliPlayer, Match, MatchConfig, MatchStatus, ScoreTable,
    DEFAULT_HEIGHT, DEFAULT_SCORE_LIMIT, DEFAULT_SHIP_COUNT, DEFAULT_WIDTH,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a match in the terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_WIDTH, allow_negative_numbers = true)]
        width: i32,
        #[arg(long, default_value_t = DEFAULT_HEIGHT, allow_negative_numbers = true)]
        height: i32,
        #[arg(long, default_value_t = DEFAULT_SHIP_COUNT, allow_negative_numbers = true)]
        ships: i32,
        #[arg(long, help = "Fix RNG seed for reproducible ship placement (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Name to credit with the win bonus")]
        player: Option<String>,
        #[arg(long, default_value = "scores.json")]
        scores: PathBuf,
    },
    /// Show the high-score table.
    Scores {
        #[arg(long, default_value_t = DEFAULT_SCORE_LIMIT)]
        limit: usize,
        #[arg(long, default_value = "scores.json")]
        scores: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            width,
            height,
            ships,
            seed,
            player,
            scores,
        } => {
            let config = MatchConfig::new(width, height, ships).sanitized();
            if config != MatchConfig::new(width, height, ships) {
                println!(
                    "Invalid configuration, using a {}x{} board with {} ships.",
                    config.width, config.height, config.ship_count
                );
            }
            let mut rng = match seed {
                Some(s) => {
                    println!("Using fixed seed: {} (placement will be reproducible)", s);
                    SmallRng::seed_from_u64(s)
                }
                None => SmallRng::from_rng(&mut rand::rng()),
            };
            let mut game = Match::with_rng(config, &mut rng)?;
            println!(
                "Board {}x{} with {} ships. Rows and columns start at 0.",
                config.width, config.height, config.ship_count
            );

            let mut cli_player = CliPlayer::stdio();
            let status = run_match(&mut game, &mut cli_player);

            let mut award = None;
            if status == MatchStatus::Finished {
                if let Some(name) = player.as_deref() {
                    let mut table = ScoreTable::load(&scores)
                        .with_context(|| format!("loading {}", scores.display()))?;
                    let entry = table.award_win(name)?.clone();
                    table
                        .save(&scores)
                        .with_context(|| format!("saving {}", scores.display()))?;
                    award = Some(entry);
                }
            }
            cli_player.show_summary(&game, award.as_ref());
        }
        Commands::Scores { limit, scores } => {
            let table = ScoreTable::load(&scores)
                .with_context(|| format!("loading {}", scores.display()))?;
            let top = table.top(limit);
            if top.is_empty() {
                println!("No scores recorded.");
            } else {
                println!("{:^9} | {:<16} | {:>6}", "Rank", "Player", "Points");
                println!("{}", "-".repeat(37));
                for (i, entry) in top.iter().enumerate() {
                    println!("{:^9} | {:<16} | {:>6}", i + 1, entry.player, entry.points);
                }
            }
        }
    }
    Ok(())
}
