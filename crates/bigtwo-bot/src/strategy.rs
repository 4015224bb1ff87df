use bigtwo_core::model::hand::Hand;
use bigtwo_core::model::seat::Seat;
use bigtwo_core::play::combo::Combination;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::debug;

/// Everything a strategy sees when asked to act. `options` is the current
/// legal set from the engine, never empty; the chosen index must fall inside
/// it.
pub struct ChoiceContext<'a> {
    pub seat: Seat,
    pub hand: &'a Hand,
    pub options: &'a [Combination],
}

/// A way of picking one play from an option list. The engine never depends
/// on which implementation sits behind a seat.
pub trait ChoiceStrategy: Send {
    fn choose(&mut self, ctx: &ChoiceContext) -> usize;
}

/// Always takes the first option: the weakest play that beats the table, or
/// the lowest single when leading. Passes only when nothing else is legal.
#[derive(Debug, Default)]
pub struct FirstOption;

impl ChoiceStrategy for FirstOption {
    fn choose(&mut self, ctx: &ChoiceContext) -> usize {
        debug!(seat = %ctx.seat, play = %ctx.options[0], "greedy choice");
        0
    }
}

/// Picks uniformly among the options, pass included.
#[derive(Debug)]
pub struct RandomChoice {
    rng: SmallRng,
}

impl RandomChoice {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomChoice {
    fn default() -> Self {
        Self::new()
    }
}

impl ChoiceStrategy for RandomChoice {
    fn choose(&mut self, ctx: &ChoiceContext) -> usize {
        let index = self.rng.gen_range(0..ctx.options.len());
        debug!(seat = %ctx.seat, play = %ctx.options[index], "random choice");
        index
    }
}
