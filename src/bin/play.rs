use clap::Parser;
use flood_puzzle::engine::{Color, Coord, Game, TurnOutcome};
use std::io::{self, Write};

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the board generator; omit for a fresh board every run
    #[clap(short, long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut game = match args.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };

    println!("Welcome to Flood Puzzle!");
    println!("Paint the whole board a single color in as few clicks as you can.");

    loop {
        println!("---------------------");
        println!(
            "Clicks: {}, painting with: {}",
            game.score(),
            game.replacement_color().name()
        );
        println!("{}", game.current());

        print!(
            "Enter a cell (row col), 'c <color>' to pick a paint color, \
             'u' to undo, 'n' for a new board, 'q' to quit: "
        );
        io::stdout().flush().unwrap(); // Ensure prompt is shown before input

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "n" {
            game.restart();
            println!("Fresh board.");
            continue;
        }

        if trimmed_input == "u" {
            match game.handle_undo() {
                TurnOutcome::Won { score } => announce_win(score),
                TurnOutcome::Playing => {
                    // A declined undo leaves the score untouched, so it is
                    // indistinguishable here without checking the counter.
                    println!("Undo processed (no effect at the initial board).");
                }
            }
            continue;
        }

        if let Some(name) = trimmed_input.strip_prefix("c ") {
            match Color::from_name(name.trim()) {
                Some(color) => {
                    game.set_replacement_color(color);
                    println!("Now painting with {}.", color.name());
                }
                None => {
                    println!("Unknown color '{}'. Pick one of: white, black, red, green, blue.", name.trim());
                }
            }
            continue;
        }

        // Try to parse as coordinates
        let parts: Vec<&str> = trimmed_input.split_whitespace().collect();
        if parts.len() == 2 {
            if let (Ok(r), Ok(c)) = (parts[0].parse::<usize>(), parts[1].parse::<usize>()) {
                let side = game.current().side();
                if r < side && c < side {
                    match game.handle_cell_click(Coord::new(r, c)) {
                        TurnOutcome::Won { score } => announce_win(score),
                        TurnOutcome::Playing => {}
                    }
                } else {
                    println!(
                        "Invalid coordinates: row and column must be between 0 and {}.",
                        side - 1
                    );
                }
            } else {
                println!(
                    "Invalid input: enter numbers for row and column (e.g. '3 4'), \
                     'c <color>', 'u', 'n', or 'q'."
                );
            }
        } else {
            println!("Invalid input format. Use 'row col', 'c <color>', 'u', 'n', or 'q'.");
        }
    }
}

fn announce_win(score: u32) {
    println!();
    println!("---------------------");
    println!("🎉 YOU WON! 🎉");
    println!("Final score: {} clicks", score);
    println!("A new board has been dealt.");
    println!("---------------------");
}
