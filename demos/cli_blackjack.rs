//! CLI blackjack example.

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use bjcore::{Card, Game, GameOptions, Hand, Suit};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    println!("Blackjack CLI example (type 'q' to quit)");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs();
    let mut game = Game::new(GameOptions::default(), seed);

    loop {
        if let Some(bet) = prompt_u32("Bet amount (0 to quit): ") {
            if bet == 0 {
                println!("Goodbye.");
                break;
            }
            if let Err(err) = game.set_wager(bet) {
                println!("Bet error: {err}");
            }
        } else {
            break;
        }

        if let Err(err) = game.new_game() {
            println!("Deal error: {err}");
            continue;
        }

        while game.is_active() {
            print_table(&game);

            let result = match prompt_line("Action ([h]it, [s]tand, [n]ew game): ").as_str() {
                "h" | "hit" => game.hit().map(|_| ()),
                "s" | "stand" => game.stand().map(|drawn| {
                    if !drawn.is_empty() {
                        println!("Dealer draws {} card(s).", drawn.len());
                    }
                }),
                "n" | "new" => game.new_game(),
                "q" | "quit" => return,
                _ => {
                    println!("Unknown action.");
                    continue;
                }
            };

            if let Err(err) = result {
                println!("Action error: {err}");
            }
        }

        print_table(&game);
        if let Some(wager) = game.wager() {
            println!("(bet of {wager} recorded)");
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

fn prompt_u32(prompt: &str) -> Option<u32> {
    loop {
        let input = prompt_line(prompt);
        if input.is_empty() || input == "q" || input == "quit" {
            return None;
        }
        match input.parse::<u32>() {
            Ok(value) => return Some(value),
            Err(_) => println!("Please enter a number."),
        }
    }
}

fn print_table(game: &Game) {
    println!("\nDeck: {} cards remaining", game.cards_remaining());

    let dealer = game
        .dealer_table_cards()
        .iter()
        .map(|card| card.as_ref().map_or_else(|| "??".to_string(), format_card))
        .collect::<Vec<_>>()
        .join(" ");
    if game.is_active() {
        println!("Dealer: {dealer}");
    } else {
        println!("Dealer: {dealer} (value {})", game.dealer_hand().value());
    }

    let player = game.player_hand();
    println!("You:    {} (value {})", format_hand(player), player.value());
    println!("\n{}\n", game.message());
}

fn format_hand(hand: &Hand) -> String {
    if hand.is_empty() {
        return "(empty)".to_string();
    }
    hand.cards()
        .iter()
        .map(format_card)
        .collect::<Vec<_>>()
        .join(" ")
}

fn colorize(text: &str, code: &str) -> String {
    format!("\u{1b}[{code}m{text}\u{1b}[0m")
}

fn format_card(card: &Card) -> String {
    let color_code = match card.suit() {
        Suit::Hearts | Suit::Diamonds => "31",
        Suit::Clubs => "32",
        Suit::Spades => "34",
    };
    colorize(&card.to_string(), color_code)
}
