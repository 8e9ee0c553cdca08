//! # Flood Puzzle Library
//!
//! This library provides the core logic for a single-player flood-fill
//! puzzle: a square board of randomly colored cells where clicking a cell
//! repaints its 4-connected same-color region with the currently selected
//! color, and the player wins once the whole board is one color.
//!
//! It is used by one binary:
//! - `play`: interactive gameplay via the command line.
//!
//! ## Modules
//! - `engine`: the color palette (`Color`), board representation (`Grid`,
//!   `Coord`), the `flood_fill` algorithm, the snapshot `History` backing
//!   undo, and session state management (`Game`).
//! - `utils`: utility functions, such as parsing board layouts from
//!   strings (used heavily as test fixtures).

pub mod engine;
pub mod utils;
