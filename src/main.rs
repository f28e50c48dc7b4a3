#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::path::PathBuf;

#[cfg(feature = "std")]
use anyhow::Context;
#[cfg(feature = "std")]
use broadside::{
    create_player, init_logging, ConsoleSpectator, FleetFile, GameConfig, Match, PlayerKind,
    MAX_COLS, MAX_ROWS,
};
#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where the grid size and fleet come from.
#[derive(Args, Debug)]
#[cfg(feature = "std")]
struct FleetArgs {
    #[arg(long, default_value_t = MAX_ROWS, conflicts_with = "fleet")]
    rows: usize,
    #[arg(long, default_value_t = MAX_COLS, conflicts_with = "fleet")]
    cols: usize,
    #[arg(long, help = "JSON fleet description replacing the standard five ships")]
    fleet: Option<PathBuf>,
}

#[cfg(feature = "std")]
impl FleetArgs {
    fn load(&self) -> anyhow::Result<GameConfig> {
        match &self.fleet {
            Some(path) => GameConfig::from_path(path)
                .with_context(|| format!("loading fleet from {}", path.display())),
            None => GameConfig::standard(self.rows, self.cols)
                .context("building the standard fleet"),
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play one match between two contestants.
    Play {
        #[arg(long, value_enum, default_value_t = PlayerKind::Human)]
        player1: PlayerKind,
        #[arg(long, value_enum, default_value_t = PlayerKind::Good)]
        player2: PlayerKind,
        #[arg(long, default_value = "Player 1")]
        name1: String,
        #[arg(long, default_value = "Player 2")]
        name2: String,
        #[command(flatten)]
        fleet: FleetArgs,
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, help = "Wait for enter after every attack")]
        pause: bool,
    },
    /// Validate a fleet and print it as JSON.
    Fleet {
        #[command(flatten)]
        fleet: FleetArgs,
    },
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play {
            player1,
            player2,
            name1,
            name2,
            fleet,
            seed,
            pause,
        } => {
            let config = fleet.load()?;
            if let Some(s) = seed {
                println!("Using fixed seed: {} (game will be reproducible)", s);
            }
            let mut rng = if let Some(s) = seed {
                SmallRng::seed_from_u64(s)
            } else {
                let mut seed_rng = rand::rng();
                SmallRng::from_rng(&mut seed_rng)
            };

            let mut p1 = create_player(player1, name1, &config);
            let mut p2 = create_player(player2, name2, &config);
            let mut spectator = ConsoleSpectator::stdout(pause);
            let mut game = Match::new(&config)?;
            let outcome = game.play([&mut *p1, &mut *p2], &mut rng, &mut spectator)?;
            log::info!("match over after {:?} shots", outcome.shots);
        }
        Commands::Fleet { fleet } => {
            let config = fleet.load()?;
            let file = FleetFile::from(&config);
            println!("{}", serde_json::to_string_pretty(&file)?);
        }
    }
    Ok(())
}
