use crate::model::seat::Seat;
use crate::play::combo::Combination;
use core::fmt;
use serde::{Deserialize, Serialize};

/// One entry of the append-only game log. Records are audit data only; the
/// turn machine never reads them back to make decisions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnRecord {
    pub round: u32,
    pub seat: Seat,
    pub action: TurnAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnAction {
    Played(Combination),
    Passed,
    Won,
}

impl fmt::Display for TurnRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.action {
            TurnAction::Played(combination) => {
                write!(f, "round {}: {} plays {}", self.round, self.seat, combination)
            }
            TurnAction::Passed => write!(f, "round {}: {} passes", self.round, self.seat),
            TurnAction::Won => write!(f, "round {}: {} wins", self.round, self.seat),
        }
    }
}
