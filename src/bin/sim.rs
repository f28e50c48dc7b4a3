use broadside::{create_computer_player, GameConfig, Match, PlayerKind, Silent};
use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 4 {
        eprintln!("Usage: {} <kind1> <kind2> <seed>", args[0]);
        std::process::exit(1);
    }
    let kind1: PlayerKind = args[1].parse()?;
    let kind2: PlayerKind = args[2].parse()?;
    let seed: u64 = args[3].parse()?;

    let config = GameConfig::standard(10, 10)?;
    let mut p1 = create_computer_player(kind1, "player1", &config)
        .ok_or_else(|| anyhow::anyhow!("sim only runs computer players, got {kind1}"))?;
    let mut p2 = create_computer_player(kind2, "player2", &config)
        .ok_or_else(|| anyhow::anyhow!("sim only runs computer players, got {kind2}"))?;

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut game = Match::new(&config)?;
    let outcome = game.play([&mut *p1, &mut *p2], &mut rng, &mut Silent)?;

    let winner = if outcome.winner == 0 { "player1" } else { "player2" };
    let result = json!({
        "player1": {"kind": kind1, "shots": outcome.shots[0]},
        "player2": {"kind": kind2, "shots": outcome.shots[1]},
        "winner": winner,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
