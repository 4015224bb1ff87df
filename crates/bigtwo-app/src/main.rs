mod controller;
mod human;

use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use bigtwo_bot::{FirstOption, RandomChoice};
use bigtwo_core::game::serialization::GameLog;
use bigtwo_core::game::state::GameState;
use bigtwo_core::model::seat::Seat;

use controller::{GameController, SeatActor};

/// Four-player Big Two at the terminal.
#[derive(Debug, Parser)]
#[command(name = "bigtwo", version, about = "Four-player Big Two at the terminal")]
struct Cli {
    /// RNG seed for a reproducible deal.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Run every seat as a bot instead of prompting at North.
    #[arg(long)]
    bots_only: bool,

    /// Strategy for bot seats.
    #[arg(long, value_enum, default_value = "greedy")]
    bot: BotKind,

    /// Write the finished game's JSON log to this file.
    #[arg(long, value_name = "FILE")]
    log: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum BotKind {
    Greedy,
    Random,
}

impl BotKind {
    fn actor(self) -> SeatActor {
        match self {
            BotKind::Greedy => SeatActor::Bot(Box::new(FirstOption)),
            BotKind::Random => SeatActor::Bot(Box::new(RandomChoice::new())),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();

    let state = match cli.seed {
        Some(seed) => GameState::with_seed(seed),
        None => GameState::new(),
    };

    let actors = Seat::ALL.map(|seat| {
        if !cli.bots_only && seat == Seat::North {
            SeatActor::Human
        } else {
            cli.bot.actor()
        }
    });

    let mut controller = GameController::new(state, actors);
    controller.run()?;

    if let Some(path) = cli.log {
        fs::write(&path, GameLog::to_json(controller.state())?)?;
        println!("Game log written to {}", path.display());
    }

    Ok(())
}
