pub mod history;
pub mod player;
pub mod serialization;
pub mod state;
