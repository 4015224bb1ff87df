pub mod strategy;

pub use strategy::{ChoiceContext, ChoiceStrategy, FirstOption, RandomChoice};
