use anyhow::{Result, ensure};
use tracing::info;

use bigtwo_bot::{ChoiceContext, ChoiceStrategy};
use bigtwo_core::game::state::{GameState, PlayOutcome};
use bigtwo_core::model::seat::Seat;

use crate::human;

pub enum SeatActor {
    Human,
    Bot(Box<dyn ChoiceStrategy>),
}

/// Drives one game to completion: asks each seat's actor for a choice from
/// the engine's legal set and feeds it back, rendering the transitions.
pub struct GameController {
    state: GameState,
    actors: [SeatActor; Seat::COUNT],
}

impl GameController {
    pub fn new(state: GameState, actors: [SeatActor; Seat::COUNT]) -> Self {
        Self { state, actors }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the winning seat, or `None` when a human quits mid-game.
    pub fn run(&mut self) -> Result<Option<Seat>> {
        info!(seed = self.state.seed(), "starting game");
        loop {
            let seat = self.state.current_player();
            let options = self.state.valid_plays().to_vec();

            let index = match &mut self.actors[seat.index()] {
                SeatActor::Human => {
                    let chosen = human::prompt_choice(
                        seat,
                        self.state.player(seat).hand(),
                        self.state.last_play(),
                        &options,
                    )?;
                    match chosen {
                        Some(index) => index,
                        None => {
                            println!("Game abandoned.");
                            return Ok(None);
                        }
                    }
                }
                SeatActor::Bot(strategy) => {
                    let ctx = ChoiceContext {
                        seat,
                        hand: self.state.player(seat).hand(),
                        options: &options,
                    };
                    strategy.choose(&ctx)
                }
            };
            ensure!(index < options.len(), "choice {index} out of range");

            let play = options[index].clone();
            if play.is_pass() {
                println!("{seat} passes.");
            } else {
                println!("{seat} plays {play}.");
            }

            match self.state.apply_play(seat, play)? {
                PlayOutcome::Played => {}
                PlayOutcome::NewRound => {
                    let leader = self.state.current_player();
                    println!("Everyone else passed. {leader} leads the next round.");
                }
                PlayOutcome::GameWon => {
                    println!("{seat} wins the game!");
                    return Ok(Some(seat));
                }
            }
        }
    }
}
