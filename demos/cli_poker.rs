//! CLI dealing example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use holdem_dealer::{Deck, DealError};

fn main() {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos() as u64;
    let mut deck = Deck::new(seed);

    print!("{}", deck.render_table());

    loop {
        let input = prompt_line("Press 'r' to deal cards, or 'q' to quit: ");

        match input.as_str() {
            "q" | "quit" => break,
            "r" => match deck.deal_community() {
                Ok(_) => print!("{}", deck.render_table()),
                Err(DealError::Exhausted) => println!("No more cards left to deal."),
            },
            _ => println!("Invalid input. Please enter 'r' or 'q'."),
        }
    }

    println!("Game over. Exiting...");
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return String::new();
    }
    input.trim().to_lowercase()
}
