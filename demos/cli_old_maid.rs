//! CLI Old Maid example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use log::{LevelFilter, Log, Metadata, Record};
use oldmaid::{
    Card, Fired, Game, GameOptions, GamePhase, GameSnapshot, PlayerIndex, TurnOutcome,
};

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn main() {
    let level = if std::env::var_os("OLDMAID_DEBUG").is_some() {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }

    println!("Old Maid CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let game = Game::new(GameOptions::default(), seed);

    loop {
        game.start();
        prompt_line("Press enter to toss the coin...");
        match game.toss_coin() {
            Some(PlayerIndex::Human) => println!("Heads: you go first."),
            Some(PlayerIndex::Npc) => println!("Tails: the NPC goes first."),
            None => {}
        }

        let snapshot = game.snapshot();
        println!("Checking pairs... {} discarded.", snapshot.discarded_pairs.len());

        if !play(&game) {
            println!("Goodbye.");
            break;
        }

        print_final(&game.snapshot());
        game.reset();

        if prompt_line("Play again? (y/n): ") != "y" {
            println!("Goodbye.");
            break;
        }
    }
}

/// Runs one game to completion. Returns `false` if the user quit.
fn play(game: &Game) -> bool {
    while !matches!(game.phase(), GamePhase::GameOver | GamePhase::Idle) {
        if let Some(due) = game.next_scheduled() {
            thread::sleep(due.delay);
            match game.fire(due.ticket) {
                Some(Fired::PlayBegan) => println!("Play begins."),
                Some(Fired::NpcDrew(outcome)) => report("NPC", &outcome),
                None => {}
            }
            continue;
        }

        let snapshot = game.snapshot();
        print_table(&snapshot);

        let npc_cards = snapshot.players[PlayerIndex::Npc.index()].hand.len();
        let Some(position) = prompt_usize(&format!("Pick a card (1-{npc_cards}): ")) else {
            return false;
        };

        match position
            .checked_sub(1)
            .and_then(|position| game.select_card(position))
        {
            Some(outcome) => report("You", &outcome),
            None => println!("That card is not available."),
        }
    }
    true
}

fn report(who: &str, outcome: &TurnOutcome) {
    print!("{who} drew {}", format_card(&outcome.card));
    for pair in &outcome.pairs {
        print!(
            " and discarded {} {}",
            format_card(&pair.cards[0]),
            format_card(&pair.cards[1])
        );
    }
    println!(".");
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

fn prompt_usize(prompt: &str) -> Option<usize> {
    loop {
        let input = prompt_line(prompt);
        if input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<usize>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(snapshot: &GameSnapshot) {
    let [human, npc] = &snapshot.players;
    println!("\n{}: {}", npc.name, "[?] ".repeat(npc.hand.len()).trim_end());
    println!(
        "{}: {}",
        human.name,
        human
            .hand
            .cards()
            .iter()
            .map(format_card)
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!("Discarded pairs: {}\n", snapshot.discarded_pairs.len());
}

fn print_final(snapshot: &GameSnapshot) {
    for player in &snapshot.players {
        println!(
            "{}: {}",
            player.name,
            player
                .hand
                .cards()
                .iter()
                .map(format_card)
                .collect::<Vec<_>>()
                .join(" ")
        );
    }

    if let Some(result) = snapshot.result {
        let winner = &snapshot.players[result.winner.index()].name;
        if result.has_joker {
            println!("{winner} wins! The loser is left holding the joker.");
        } else {
            println!("{winner} wins by emptying their hand!");
        }
    }
}

fn format_card(card: &Card) -> String {
    let text = card.to_string();
    match card.suit {
        oldmaid::Suit::Hearts | oldmaid::Suit::Diamonds => colorize(&text, "31"),
        oldmaid::Suit::Joker => colorize(&text, "35"),
        _ => text,
    }
}

fn colorize(text: &str, code: &str) -> String {
    format!("\x1b[{code}m{text}\x1b[0m")
}
