//! CLI blackjack example.
//!
//! Usage: `cargo run --example cli_blackjack -- [players] [decks]`.
//! Set `RUST_LOG=blackjack_deck=debug` to see engine diagnostics.

#![allow(clippy::missing_docs_in_private_items)]

use std::env;
use std::io::{self, Write};

use blackjack_deck::{Decision, Game, GameOptions, Interface, Outcome, Player, RoundEvent};
use tracing_subscriber::EnvFilter;

struct Terminal;

impl Interface for Terminal {
    fn choose(&mut self, player: &Player, prompt: &str) -> Decision {
        println!("--- {} ---", player.name());
        println!("{} (score {})", player.hand(), player.hand().score());
        loop {
            // Closed input ends the turn.
            let Some(line) = prompt_line(prompt) else {
                return Decision::Stay;
            };
            match line.parse::<Decision>() {
                Ok(decision) => return decision,
                Err(err) => println!("\n{err}\n"),
            }
        }
    }

    fn event(&mut self, event: &RoundEvent<'_>) {
        match event {
            RoundEvent::Dealt { player, card } => println!("{player} is dealt {card}"),
            RoundEvent::Hit {
                player,
                card,
                score,
            } => println!("\n**Hit** {player} draws {card} ({score}) **Hit**\n"),
            RoundEvent::Stay { player, score } => {
                println!("\n**Stay** {player} stays on {score} **Stay**\n");
            }
            RoundEvent::TwentyOne { player } => println!("{player} got 21!!\n"),
            RoundEvent::Bust { player, score } => println!("{player} busts with {score}\n"),
            RoundEvent::Outcome {
                player,
                outcome,
                player_score,
                dealer_score,
            } => {
                let verdict = match outcome {
                    Outcome::Win => "You Won!",
                    Outcome::Loss => "You Lost",
                    Outcome::Push => "Push",
                };
                println!("{player}: {verdict}");
                println!("Dealer Score: {dealer_score}");
                println!("{player} Score: {player_score}\n");
            }
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = env::args().skip(1);
    let players = parse_arg(args.next(), 1);
    let decks = parse_arg(args.next(), 1);

    let options = GameOptions::default()
        .with_players(players)
        .with_decks(decks)
        .with_reshuffle_threshold(15 * usize::from(decks));
    let mut game = match Game::from_entropy(options) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("{err}");
            return;
        }
    };

    println!("Blackjack CLI example");

    loop {
        if let Err(err) = game.play_round(&mut Terminal) {
            eprintln!("Round aborted: {err}");
        }

        if !prompt_yes_no("Would you like to play another round? (Yes/No): ") {
            println!("Goodbye.");
            break;
        }

        if game.reset_for_next_round() {
            println!("Deck reshuffled.");
        }
    }
}

fn parse_arg(arg: Option<String>, default: u8) -> u8 {
    arg.and_then(|value| value.parse().ok()).unwrap_or(default)
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(input.trim().to_lowercase()),
    }
}

fn prompt_yes_no(prompt: &str) -> bool {
    loop {
        let Some(line) = prompt_line(prompt) else {
            return false;
        };
        match line.as_str() {
            "y" | "yes" => return true,
            "n" | "no" | "q" | "quit" => return false,
            _ => println!("I didn't understand"),
        }
    }
}
