use std::io::{self, Write};

use anyhow::Result;

use bigtwo_core::model::hand::Hand;
use bigtwo_core::model::seat::Seat;
use bigtwo_core::play::combo::Combination;

/// Shows the table and the 1-based option list, then reads a selection.
/// Returns `None` when the player quits (`q` or end of input).
pub fn prompt_choice(
    seat: Seat,
    hand: &Hand,
    last_play: Option<&Combination>,
    options: &[Combination],
) -> Result<Option<usize>> {
    println!();
    let cards: Vec<String> = hand.iter().map(|card| card.to_string()).collect();
    println!("{seat}, your hand: {}", cards.join(" "));
    match last_play {
        Some(play) => println!("To beat: {play}"),
        None => println!("You lead this round."),
    }
    for (i, option) in options.iter().enumerate() {
        println!("  {}. {option}", i + 1);
    }

    loop {
        print!("Enter selection (1-{}, q to quit): ", options.len());
        io::stdout().flush()?;
        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match trimmed.parse::<usize>() {
            Ok(choice) if (1..=options.len()).contains(&choice) => {
                return Ok(Some(choice - 1));
            }
            _ => println!("Invalid selection"),
        }
    }
}
