//! CLI Higher or Lower example.

#![allow(clippy::missing_docs_in_private_items)]

use std::io::{self, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::Parser;
use colored::Colorize;
use hilors::{Card, Direction, DisplayState, Game, GameOptions, RoundResult};

/// Guess whether the next card ranks higher or lower.
#[derive(Parser)]
#[command(name = "higher_lower")]
struct Args {
    /// Add two Jokers, ranked above every other card.
    #[arg(long)]
    jokers: bool,
    /// Seed for the shuffle; defaults to the current time.
    #[arg(long)]
    seed: Option<u64>,
    /// Reshuffle once fewer than this many cards remain.
    #[arg(long, default_value_t = 1)]
    threshold: usize,
    /// Points per correct guess.
    #[arg(long, default_value_t = 1)]
    points: u32,
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
    let options = GameOptions::default()
        .with_jokers(args.jokers)
        .with_reshuffle_threshold(args.threshold)
        .with_points_per_correct(args.points);

    let mut game = match Game::new(options, seed) {
        Ok(game) => game,
        Err(err) => {
            eprintln!("Invalid options: {err}");
            std::process::exit(2);
        }
    };

    println!("{}", "=".repeat(50));
    println!("  HIGHER OR LOWER");
    println!("{}", "=".repeat(50));
    println!("Guess if the next card will be higher or lower.");
    println!("Ties count as wrong. Jokers are the highest cards.");
    println!("Commands: h, l, n (new game), q (quit)\n");

    print_state(&game.display_state());

    loop {
        let input = prompt_line("Higher or lower? ");
        match input.as_str() {
            "q" | "quit" => break,
            "n" | "new" => {
                let jokers = prompt_line("Include Jokers? (y/n): ");
                let state = game.new_game(matches!(jokers.as_str(), "y" | "yes"));
                println!("New game.");
                print_state(&state);
                continue;
            }
            _ => {}
        }

        let direction = match input.parse::<Direction>() {
            Ok(direction) => direction,
            Err(err) => {
                println!("{err}");
                continue;
            }
        };

        let result = game.guess(direction);
        print_result(&result);
        print_state(&result.state);
    }

    print_summary(&game.display_state());
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

fn format_card(card: &Card) -> String {
    let text = card.to_string();
    if card.is_joker() {
        text.magenta().bold().to_string()
    } else if card.is_red() {
        text.red().bold().to_string()
    } else {
        text.bold().to_string()
    }
}

fn print_result(result: &RoundResult) {
    if result.reshuffled {
        println!("Deck reshuffled.");
    }
    println!("Next card: {}", format_card(&result.next_card));

    let message = format!("It was {}.", result.comparison);
    if result.correct {
        println!("{} {message}", "Correct!".green().bold());
    } else {
        println!("{} {message}", "Wrong!".red().bold());
    }
}

fn print_state(state: &DisplayState) {
    println!(
        "\nCurrent card: {}  |  Score: {}  |  Streak: {} (best {})  |  Cards left: {}",
        format_card(&state.current_card),
        state.score,
        state.current_streak,
        state.best_streak,
        state.remaining
    );
}

fn print_summary(state: &DisplayState) {
    println!("\n{}", "=".repeat(50));
    println!("  FINAL STATISTICS");
    println!("{}", "=".repeat(50));
    println!("Score: {}", state.score);
    println!("Best streak: {}", state.best_streak);
    println!("Rounds played: {}", state.total_rounds);
    println!("Accuracy: {:.1}%", state.accuracy * 100.0);
    println!("\nThanks for playing!");
}
