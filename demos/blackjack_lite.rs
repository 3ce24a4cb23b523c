//! CLI Blackjack Lite example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use colored::Colorize;
use hilors::blackjack::{BlackjackLite, BlackjackOutcome, BlackjackState, Hand};

/// Single-hand blackjack against a dealer who stands on 17.
#[derive(Parser)]
#[command(name = "blackjack_lite")]
struct Args {
    /// Seed for the shuffle; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    let mut game = BlackjackLite::new(seed);

    println!("Blackjack Lite (type 'q' to quit)");
    println!("Face cards are worth 10, Aces 1 or 11. Dealer stands on 17.");

    'rounds: loop {
        if let Err(err) = game.start_round() {
            println!("Deal error: {err}");
            break;
        }

        println!("\nCards remaining: {}", game.cards_remaining());
        if let Some(card) = game.dealer_up_card() {
            println!("Dealer shows: {card}");
        }
        println!("Your hand: {}", format_hand(game.player_hand()));

        while game.state() == BlackjackState::PlayerTurn {
            let action = prompt_line("(h)it or (s)tand? ");
            match action.as_str() {
                "h" | "hit" => match game.hit() {
                    Ok(card) => {
                        println!("You draw {card}.");
                        println!("Your hand: {}", format_hand(game.player_hand()));
                    }
                    Err(err) => println!("Action error: {err}"),
                },
                "s" | "stand" => {
                    if let Err(err) = game.stand() {
                        println!("Action error: {err}");
                    }
                }
                "q" | "quit" => break 'rounds,
                _ => println!("Unknown action."),
            }
        }

        println!("Dealer's hand: {}", format_hand(game.dealer_hand()));
        if let Some(outcome) = game.last_outcome() {
            println!("{}", describe(outcome));
        }

        let record = game.record();
        println!(
            "Record: {}W - {}L - {}P  |  Win rate: {:.1}%",
            record.wins,
            record.losses,
            record.pushes,
            record.win_rate() * 100.0
        );

        if !matches!(prompt_line("Play another hand? (y/n): ").as_str(), "y" | "yes") {
            break;
        }
    }

    println!("\nThanks for playing!");
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let _ = simplelog::TermLogger::init(
        level,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
}

fn prompt_line(prompt: &str) -> String {
    print!("{prompt}");
    let _ = io::stdout().flush();

    let mut input = String::new();
    match io::stdin().read_line(&mut input) {
        Ok(0) | Err(_) => "q".to_string(),
        Ok(_) => input.trim().to_lowercase(),
    }
}

fn format_hand(hand: &Hand) -> String {
    let cards = hand
        .cards()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("{cards} (value {})", hand.value())
}

fn describe(outcome: BlackjackOutcome) -> String {
    let text = match outcome {
        BlackjackOutcome::PlayerBust => "Bust! You lose.",
        BlackjackOutcome::DealerBust => "Dealer busts. You win!",
        BlackjackOutcome::PlayerBlackjack => "Blackjack! You win!",
        BlackjackOutcome::DealerBlackjack => "Dealer has blackjack. You lose.",
        BlackjackOutcome::PlayerHigher => "You win!",
        BlackjackOutcome::DealerHigher => "Dealer wins.",
        BlackjackOutcome::Push => "Push.",
    };

    if outcome.is_win() {
        text.green().bold().to_string()
    } else if outcome.is_loss() {
        text.red().bold().to_string()
    } else {
        text.yellow().to_string()
    }
}
