//! CLI Trio example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use triors::{Card, CardOrigin, Game, GameOptions, Phase};

fn main() {
    println!("Trio CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let options = GameOptions::default().with_piquant(true).with_turn_limit(200);

    let mut game = match Game::new(&["Ana", "Bo", "Cy"], options, seed) {
        Ok(game) => game,
        Err(err) => {
            println!("Setup error: {err}");
            return;
        }
    };

    if let Err(err) = game.start_game() {
        println!("Start error: {err}");
        return;
    }

    while !game.is_game_ended() {
        print_table(&game);

        if game.phase() != Phase::Playing {
            println!("Exchange pending for actors {:?}.", game.awaiting_exchange());
            break;
        }

        println!("Commands: [s <actor>] smallest  [l <actor>] largest  [c <index>] center  [n] next turn  [q] quit");
        let input = prompt_line("Command: ");
        let mut parts = input.split_whitespace();

        let result = match parts.next() {
            Some("s") => parts
                .next()
                .and_then(|raw| raw.parse::<usize>().ok())
                .map(|actor| game.reveal_smallest_from_actor(actor)),
            Some("l") => parts
                .next()
                .and_then(|raw| raw.parse::<usize>().ok())
                .map(|actor| game.reveal_largest_from_actor(actor)),
            Some("c") => parts
                .next()
                .and_then(|raw| raw.parse::<usize>().ok())
                .and_then(|index| game.center.cards().get(index).copied())
                .map(|card| game.reveal_from_center(card)),
            Some("n") => {
                match game.next_turn() {
                    Ok(true) => println!("Trio completed!"),
                    Ok(false) => println!("No trio this turn."),
                    Err(err) => println!("Turn error: {err}"),
                }
                continue;
            }
            Some("q") => return,
            _ => {
                println!("Unknown command.");
                continue;
            }
        };

        match result {
            Some(Ok(card)) => println!("Revealed {}.", format_card(card)),
            Some(Err(err)) => println!("Reveal error: {err}"),
            None => println!("Bad argument."),
        }
    }

    print_table(&game);
    match game.winner() {
        Some(winner) => println!(
            "{} wins ({:?})!",
            game.actors[winner].name,
            game.victory().map_or("?", |victory| match victory {
                triors::Victory::ThreeTrios => "three trios",
                triors::Victory::LinkedTrios => "linked trios",
                triors::Victory::SevenTrio => "trio of sevens",
            })
        ),
        None => {
            if game.is_game_ended() {
                println!("The game is a draw.");
            }
        }
    }
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

fn print_table(game: &Game) {
    println!("\nCenter: {} face-down cards", game.center.len());

    for (index, actor) in game.actors.iter().enumerate() {
        let marker = if index == game.current_actor() { "*" } else { " " };
        println!(
            "{} {} ({}): {} | trios: {}",
            marker,
            index,
            actor.name,
            format_hand(actor.hand.cards()),
            game.trio_count(index)
        );
    }

    if !game.revealed_cards().is_empty() {
        let revealed = game
            .revealed_cards()
            .iter()
            .map(|entry| {
                let origin = match entry.origin {
                    CardOrigin::Hand(actor) => format!("hand {actor}"),
                    CardOrigin::Center => "center".to_string(),
                };
                format!("{} ({origin})", format_card(entry.card))
            })
            .collect::<Vec<_>>()
            .join(", ");
        println!("Revealed: {revealed}");
    }
    println!();
}

fn format_hand(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "(empty)".to_string();
    }
    cards
        .iter()
        .map(|card| format_card(*card))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_card(card: Card) -> String {
    format!("[{}]", card.denomination)
}
