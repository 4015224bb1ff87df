use crate::game::history::{TurnAction, TurnRecord};
use crate::game::player::Player;
use crate::model::card::Card;
use crate::model::deck::Deck;
use crate::model::seat::Seat;
use crate::play::combo::Combination;
use core::fmt;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::array;

/// The turn-sequencing state machine: whose turn it is, what must be beaten,
/// when a round resets because everyone else passed, and when the game ends.
///
/// The machine validates and applies plays but never chooses them; callers
/// pick from [`GameState::valid_plays`] and feed the choice back through
/// [`GameState::apply_play`].
#[derive(Debug, Clone)]
pub struct GameState {
    players: [Player; Seat::COUNT],
    current: Seat,
    last_play: Option<Combination>,
    last_non_pass: Option<Seat>,
    round: u32,
    first_turn: bool,
    winner: Option<Seat>,
    history: Vec<TurnRecord>,
    rng: StdRng,
    seed: u64,
}

/// Result of an accepted play. `NewRound` is the signal a front end or bot
/// uses to announce that the lead is open again; correctness of the machine
/// itself does not depend on the caller observing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    NewRound,
    GameWon,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    OutOfTurn { expected: Seat, actual: Seat },
    IllegalPlay(Combination),
    GameOver(Seat),
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayError::OutOfTurn { expected, actual } => {
                write!(f, "expected {expected} to play next but got {actual}")
            }
            PlayError::IllegalPlay(combination) => {
                write!(f, "{combination} is not in the current legal set")
            }
            PlayError::GameOver(winner) => {
                write!(f, "game already won by {winner}")
            }
        }
    }
}

impl std::error::Error for PlayError {}

impl GameState {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut state = Self {
            players: array::from_fn(|_| Player::new()),
            current: Seat::North,
            last_play: None,
            last_non_pass: None,
            round: 1,
            first_turn: true,
            winner: None,
            history: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
            seed,
        };
        state.start_new_game();
        state
    }

    /// Deals a fresh shuffle, hands the lead to whoever holds the three of
    /// diamonds, and clears all round state.
    pub fn start_new_game(&mut self) {
        let deck = Deck::shuffled(&mut self.rng);
        let hands = deck.deal(Seat::COUNT);
        for (seat, cards) in Seat::ALL.iter().copied().zip(hands) {
            self.players[seat.index()].set_hand(cards);
            if self.players[seat.index()].hand().contains(Card::THREE_OF_DIAMONDS) {
                self.current = seat;
            }
        }
        self.last_play = None;
        self.last_non_pass = None;
        self.round = 1;
        self.first_turn = true;
        self.winner = None;
        self.history.clear();
    }

    /// Builds a game mid-flight from explicit hands, with `current` to act
    /// and the opening-play constraint already spent.
    pub fn from_hands(hands: [Vec<Card>; Seat::COUNT], current: Seat) -> Self {
        let mut hands = hands.into_iter();
        Self {
            players: array::from_fn(|_| {
                let mut player = Player::new();
                player.set_hand(hands.next().unwrap_or_default());
                player
            }),
            current,
            last_play: None,
            last_non_pass: None,
            round: 1,
            first_turn: false,
            winner: None,
            history: Vec::new(),
            rng: StdRng::seed_from_u64(0),
            seed: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_player(&self) -> Seat {
        self.current
    }

    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat.index()]
    }

    pub fn last_play(&self) -> Option<&Combination> {
        self.last_play.as_ref()
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn is_first_turn(&self) -> bool {
        self.first_turn
    }

    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    pub fn history(&self) -> &[TurnRecord] {
        &self.history
    }

    /// The current player's legal plays, 0-indexed and stable until that
    /// player's hand next mutates.
    pub fn valid_plays(&mut self) -> &[Combination] {
        let previous = self.last_play.clone();
        let first = self.first_turn;
        self.players[self.current.index()].play_options(previous.as_ref(), first)
    }

    pub fn did_win(&self, seat: Seat) -> bool {
        self.players[seat.index()].hand().is_empty()
    }

    /// Applies one chosen play for `seat`, recording it, advancing the turn
    /// and reporting whether a round boundary fired or the game was won.
    ///
    /// The play must come from the current [`GameState::valid_plays`] list;
    /// anything else is rejected as [`PlayError::IllegalPlay`].
    pub fn apply_play(&mut self, seat: Seat, play: Combination) -> Result<PlayOutcome, PlayError> {
        if let Some(winner) = self.winner {
            return Err(PlayError::GameOver(winner));
        }
        if seat != self.current {
            return Err(PlayError::OutOfTurn {
                expected: self.current,
                actual: seat,
            });
        }
        let previous = self.last_play.clone();
        let legal = self.players[seat.index()]
            .play_options(previous.as_ref(), self.first_turn)
            .contains(&play);
        if !legal {
            return Err(PlayError::IllegalPlay(play));
        }

        self.first_turn = false;
        if play.is_pass() {
            self.history.push(TurnRecord {
                round: self.round,
                seat,
                action: TurnAction::Passed,
            });
        } else {
            self.players[seat.index()].play(&play);
            self.last_play = Some(play.clone());
            self.last_non_pass = Some(seat);
            self.history.push(TurnRecord {
                round: self.round,
                seat,
                action: TurnAction::Played(play),
            });
            if self.players[seat.index()].hand().is_empty() {
                self.history.push(TurnRecord {
                    round: self.round,
                    seat,
                    action: TurnAction::Won,
                });
                self.winner = Some(seat);
                return Ok(PlayOutcome::GameWon);
            }
        }

        self.current = self.current.next();
        if Some(self.current) == self.last_non_pass {
            // Everyone else passed since the last real play: the lead returns
            // to that player with nothing on the table.
            self.last_play = None;
            self.last_non_pass = None;
            self.round += 1;
            return Ok(PlayOutcome::NewRound);
        }
        Ok(PlayOutcome::Played)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
