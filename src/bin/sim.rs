use naval_battle::prelude::*;
use naval_battle::ScriptedPlayer;
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 && args.len() != 5 {
        eprintln!("Usage: {} <seed> [width height ships]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let config = if args.len() == 5 {
        MatchConfig::new(args[2].parse()?, args[3].parse()?, args[4].parse()?)
    } else {
        MatchConfig::default()
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::with_rng(config, &mut rng)?;
    let board = game.board();
    let mut shooter = ScriptedPlayer::sweep(board.width(), board.height(), &mut rng);

    let status = run_match(&mut game, &mut shooter);
    let sunk = shooter
        .outcomes()
        .iter()
        .filter(|o| **o == ShotOutcome::Sunk)
        .count();

    let result = json!({
        "seed": seed,
        "config": config,
        "status": status,
        "finished": game.is_finished(),
        "shots": game.board().shots_fired(),
        "hits": game.board().hits(),
        "sunk": sunk,
        "board": game.render_board(),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
