//! Core game engine for the flood-fill puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Color`: RGB cell colors and the fixed five-color palette.
//! - `Coord`: board coordinates with clamped neighbor stepping.
//! - `Grid`: the n-by-n board, with random generation and index/pixel
//!   coordinate conversion.
//! - `flood_fill`: the region-recoloring algorithm.
//! - `History`: the snapshot stack that backs undo.
//! - `Game`: one play session (board history, click score, selected
//!   replacement color) and turn processing.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// An RGB cell color. Components are in `[0, 255]` and equality is
/// component-wise.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color(pub u8, pub u8, pub u8);

/// White, the default replacement color at game start and after restart.
pub const WHITE: Color = Color(255, 255, 255);
/// Black.
pub const BLACK: Color = Color(0, 0, 0);
/// Red.
pub const RED: Color = Color(255, 0, 0);
/// Green.
pub const GREEN: Color = Color(0, 255, 0);
/// Blue.
pub const BLUE: Color = Color(0, 0, 255);

/// The fixed palette that board cells are drawn from. Random boards pick
/// each cell independently and uniformly from this set.
pub const PALETTE: [Color; 5] = [WHITE, BLACK, RED, GREEN, BLUE];

// Used internally by `Grid::random` so that generated boards only ever
// contain palette colors.
fn random_cell_color(rng: &mut impl Rng) -> Color {
    PALETTE[rng.gen_range(0..PALETTE.len())]
}

impl Color {
    /// Converts the color to its single-character representation.
    ///
    /// This is primarily used for text-based display and for the board
    /// fixtures in tests. Colors outside the palette map to `'?'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use flood_puzzle::engine::{Color, RED, WHITE};
    /// assert_eq!(RED.to_char(), 'R');
    /// assert_eq!(WHITE.to_char(), 'W');
    /// assert_eq!(Color(1, 2, 3).to_char(), '?');
    /// ```
    pub fn to_char(self) -> char {
        match self {
            Color(255, 255, 255) => 'W',
            Color(0, 0, 0) => 'K',
            Color(255, 0, 0) => 'R',
            Color(0, 255, 0) => 'G',
            Color(0, 0, 255) => 'B',
            Color(..) => '?',
        }
    }

    /// Parses the single-character representation back into a palette
    /// color. Returns `None` for characters outside `W K R G B`.
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'W' => Some(WHITE),
            'K' => Some(BLACK),
            'R' => Some(RED),
            'G' => Some(GREEN),
            'B' => Some(BLUE),
            _ => None,
        }
    }

    /// Returns the lowercase palette name of the color, or `"?"` for
    /// colors outside the palette.
    pub fn name(self) -> &'static str {
        match self {
            Color(255, 255, 255) => "white",
            Color(0, 0, 0) => "black",
            Color(255, 0, 0) => "red",
            Color(0, 255, 0) => "green",
            Color(0, 0, 255) => "blue",
            Color(..) => "?",
        }
    }

    /// Looks up a palette color by its lowercase name.
    pub fn from_name(name: &str) -> Option<Color> {
        match name {
            "white" => Some(WHITE),
            "black" => Some(BLACK),
            "red" => Some(RED),
            "green" => Some(GREEN),
            "blue" => Some(BLUE),
            _ => None,
        }
    }

    /// Returns the ANSI background color code string for terminal output.
    fn to_ansi_color_code(self) -> &'static str {
        match self {
            Color(255, 255, 255) => "47",
            Color(0, 0, 0) => "40",
            Color(255, 0, 0) => "41",
            Color(0, 255, 0) => "42",
            Color(0, 0, 255) => "44",
            Color(..) => "0",
        }
    }
}

/// The side length of the standard game board. The grid type itself is
/// parameterized by side length so that tests can work on small boards,
/// but a real game session always plays on this size.
pub const CELLS_PER_AXIS: usize = 9;

/// A board coordinate as a (row, column) pair.
///
/// A `Coord` handed to the grid must satisfy `row < n` and `col < n` for
/// that grid's side length `n`. The stepping methods (`left`, `right`,
/// `up`, `down`) never leave that range: a step that would fall off the
/// board clamps to the edge, so an edge cell steps onto itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Self {
        Coord { row, col }
    }

    /// Converts a linear row-major cell index into a coordinate on a board
    /// of side length `n`. Inverse of [`Coord::to_index`].
    ///
    /// # Examples
    ///
    /// ```
    /// use flood_puzzle::engine::Coord;
    /// assert_eq!(Coord::from_index(10, 9), Coord::new(1, 1));
    /// assert_eq!(Coord::from_index(10, 9).to_index(9), 10);
    /// ```
    pub fn from_index(index: usize, n: usize) -> Self {
        Coord {
            row: index / n,
            col: index % n,
        }
    }

    /// Converts the coordinate into a linear row-major cell index on a
    /// board of side length `n`. Inverse of [`Coord::from_index`].
    pub fn to_index(self, n: usize) -> usize {
        self.row * n + self.col
    }

    /// The coordinate one column to the left, clamped at column 0.
    pub fn left(self) -> Self {
        Coord {
            row: self.row,
            col: self.col.saturating_sub(1),
        }
    }

    /// The coordinate one column to the right, clamped at column `n - 1`.
    pub fn right(self, n: usize) -> Self {
        Coord {
            row: self.row,
            col: (self.col + 1).min(n - 1),
        }
    }

    /// The coordinate one row up, clamped at row 0.
    pub fn up(self) -> Self {
        Coord {
            row: self.row.saturating_sub(1),
            col: self.col,
        }
    }

    /// The coordinate one row down, clamped at row `n - 1`.
    pub fn down(self, n: usize) -> Self {
        Coord {
            row: (self.row + 1).min(n - 1),
            col: self.col,
        }
    }
}

/// The game board: a flat row-major sequence of exactly `n * n` colors.
///
/// Cell `i` of the underlying sequence sits at row `i / n`, column
/// `i % n`. The length invariant is established at construction and never
/// broken afterwards. Reads and writes are bounds-checked and panic on an
/// out-of-range coordinate rather than clamping, so indexing bugs surface
/// immediately during testing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    n: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Creates a board of side length `n` with every cell drawn
    /// independently and uniformly at random from [`PALETTE`]. No spatial
    /// correlation is imposed; adjacent cells match purely by chance.
    ///
    /// # Panics
    /// Panics if `n` is zero.
    pub fn random(n: usize, rng: &mut impl Rng) -> Self {
        assert!(n > 0, "board side length must be positive");
        let cells = (0..n * n).map(|_| random_cell_color(rng)).collect();
        Grid { n, cells }
    }

    /// Creates a random board from a fixed seed. The same seed always
    /// produces the same board, which keeps tests and replays reproducible.
    pub fn random_with_seed(n: usize, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        Grid::random(n, &mut rng)
    }

    /// Creates a board from an explicit row-major cell sequence.
    ///
    /// # Panics
    /// Panics if `n` is zero or `cells.len() != n * n`.
    pub fn from_cells(n: usize, cells: Vec<Color>) -> Self {
        assert!(n > 0, "board side length must be positive");
        assert_eq!(
            cells.len(),
            n * n,
            "expected {} cells for a {}x{} board, got {}",
            n * n,
            n,
            n,
            cells.len()
        );
        Grid { n, cells }
    }

    /// The side length of the board.
    pub fn side(&self) -> usize {
        self.n
    }

    /// The cells in row-major order.
    pub fn cells(&self) -> &[Color] {
        &self.cells
    }

    /// Returns the color at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board. Out-of-bounds access is a
    /// programming error at this layer, not something to clamp away.
    pub fn color_at(&self, coord: Coord) -> Color {
        assert!(
            coord.row < self.n && coord.col < self.n,
            "coordinate ({}, {}) outside {}x{} board",
            coord.row,
            coord.col,
            self.n,
            self.n
        );
        self.cells[coord.to_index(self.n)]
    }

    /// Sets the color at `coord`.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board.
    pub fn set_color(&mut self, coord: Coord, color: Color) {
        assert!(
            coord.row < self.n && coord.col < self.n,
            "coordinate ({}, {}) outside {}x{} board",
            coord.row,
            coord.col,
            self.n,
            self.n
        );
        self.cells[coord.to_index(self.n)] = color;
    }

    /// True when every cell has the same color as cell 0. This is the win
    /// condition.
    pub fn is_uniform(&self) -> bool {
        let first = self.cells[0];
        self.cells.iter().all(|&c| c == first)
    }

    /// Converts a pixel position on a rendered board surface of the given
    /// dimensions into the coordinate of the cell under it.
    ///
    /// The result is clamped into the board, so positions on the far edge
    /// of the surface (or slightly outside it) land on the nearest edge
    /// cell. Coordinate conversion belongs to the core; the UI layer hands
    /// over raw pixel positions only.
    pub fn coord_at_pixel(&self, x: f64, y: f64, width: f64, height: f64) -> Coord {
        let cell_width = width / self.n as f64;
        let cell_height = height / self.n as f64;
        let col = ((x / cell_width).floor().max(0.0) as usize).min(self.n - 1);
        let row = ((y / cell_height).floor().max(0.0) as usize).min(self.n - 1);
        Coord { row, col }
    }
}

impl fmt::Display for Grid {
    /// Formats the board with row and column numbers and ANSI background
    /// colors for terminal output.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "  ")?;
        for c_idx in 0..self.n {
            write!(f, "{:<2}", c_idx)?;
        }
        writeln!(f)?;

        for r_idx in 0..self.n {
            write!(f, "{:<2}", r_idx)?;
            for c_idx in 0..self.n {
                let code = self.cells[r_idx * self.n + c_idx].to_ansi_color_code();
                write!(f, "\x1b[{}m  \x1b[m", code)?;
            }
            if r_idx < self.n - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Recolors the maximal 4-connected region of same-colored cells around
/// `start` to `replacement`, in place. Cells outside that region are left
/// untouched.
///
/// The starting cell's color is captured once, before any mutation, and
/// the fill proceeds depth-first. Visited cells are not tracked
/// explicitly: a recolored cell no longer matches the captured color, so
/// revisiting it terminates immediately. Neighbor steps clamp at the board
/// edge rather than skipping, which makes an edge cell recurse onto
/// itself; that self-visit is harmless for the same reason.
///
/// If the starting cell already has the replacement color the whole call
/// is a no-op.
///
/// # Examples
///
/// ```
/// use flood_puzzle::engine::{flood_fill, Coord, Grid, BLACK, RED, WHITE};
/// let mut grid = Grid::from_cells(2, vec![WHITE, WHITE, BLACK, BLACK]);
/// flood_fill(&mut grid, Coord::new(0, 0), RED);
/// assert_eq!(grid.cells(), &[RED, RED, BLACK, BLACK]);
/// ```
pub fn flood_fill(grid: &mut Grid, start: Coord, replacement: Color) {
    let original = grid.color_at(start);
    fill_from(grid, start, original, replacement);
}

fn fill_from(grid: &mut Grid, coord: Coord, original: Color, replacement: Color) {
    // Base case order matters: the replacement-equals-original check comes
    // first, and every comparison is against the color captured at the
    // start of the whole fill, never the current start-cell color.
    if original == replacement {
        return;
    }
    if grid.color_at(coord) != original {
        return;
    }
    grid.set_color(coord, replacement);

    let n = grid.side();
    fill_from(grid, coord.left(), original, replacement);
    fill_from(grid, coord.right(n), original, replacement);
    fill_from(grid, coord.up(), original, replacement);
    fill_from(grid, coord.down(n), original, replacement);
}

/// The turn history: an ordered stack of board snapshots, oldest first.
///
/// Element 0 is the initial board of the current game and the last element
/// is the board the player currently sees. The history never becomes
/// empty: undo truncates down to, but never past, the initial board.
#[derive(Clone, Debug)]
pub struct History {
    snapshots: Vec<Grid>,
}

impl History {
    /// Creates a history holding only `initial`.
    pub fn new(initial: Grid) -> Self {
        History {
            snapshots: vec![initial],
        }
    }

    /// Discards all snapshots and restarts the history from `grid`.
    pub fn initialize(&mut self, grid: Grid) {
        self.snapshots.clear();
        self.snapshots.push(grid);
    }

    /// The current board, i.e. the most recent snapshot.
    pub fn current(&self) -> &Grid {
        self.snapshots
            .last()
            .expect("history always holds at least the initial board")
    }

    /// Appends `grid` as the new current board.
    pub fn commit(&mut self, grid: Grid) {
        self.snapshots.push(grid);
    }

    /// Removes the most recent snapshot and returns `true`, unless only
    /// the initial board remains, in which case the history is unchanged
    /// and `false` signals that there is nothing to undo. Declining is an
    /// expected outcome, not an error.
    pub fn rollback(&mut self) -> bool {
        if self.snapshots.len() > 1 {
            self.snapshots.pop();
            true
        } else {
            false
        }
    }

    /// The number of snapshots, counting the initial board.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// The result of one turn, reported back to the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// The board still holds more than one color; play continues.
    Playing,
    /// The board became a single color. `score` is the click count at the
    /// moment of the winning action. By the time the caller sees this the
    /// session has already restarted with a fresh random board and a score
    /// of zero.
    Won { score: u32 },
}

/// One play session of the flood-fill puzzle.
///
/// All mutable game state lives here: the snapshot history, the click
/// counter, the selected replacement color, and the board generator. There
/// are no process-wide globals, so multiple sessions can coexist and tests
/// need no shared fixtures. A session is single-threaded; each handler
/// runs to completion before the next event is accepted.
///
/// # Examples
/// ```
/// use flood_puzzle::engine::{Coord, Game, Grid, TurnOutcome, BLACK, RED, WHITE};
///
/// let board = Grid::from_cells(2, vec![WHITE, WHITE, BLACK, BLACK]);
/// let mut game = Game::new_with_grid(board);
/// game.set_replacement_color(RED);
///
/// assert_eq!(game.handle_cell_click(Coord::new(0, 0)), TurnOutcome::Playing);
/// assert_eq!(game.score(), 1);
///
/// // Painting the remaining black region red clears the board.
/// assert_eq!(
///     game.handle_cell_click(Coord::new(1, 0)),
///     TurnOutcome::Won { score: 2 }
/// );
/// // The session has already restarted.
/// assert_eq!(game.score(), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Game {
    history: History,
    clicks: u32,
    replacement: Color,
    n: usize,
    rng: SmallRng,
}

impl Game {
    /// Creates a session on a fresh random standard-size board. Seeded
    /// from entropy, so every run gets a different board.
    pub fn new() -> Self {
        Game::from_rng(SmallRng::from_entropy())
    }

    /// Creates a session whose board generator is seeded with `seed`. The
    /// initial board, and every board produced by later restarts, is
    /// reproducible from the seed.
    pub fn with_seed(seed: u64) -> Self {
        Game::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(mut rng: SmallRng) -> Self {
        let initial = Grid::random(CELLS_PER_AXIS, &mut rng);
        Game {
            history: History::new(initial),
            clicks: 0,
            replacement: WHITE,
            n: CELLS_PER_AXIS,
            rng,
        }
    }

    /// Creates a session starting from an explicit board. Later restarts
    /// generate random boards of the same side length.
    pub fn new_with_grid(initial: Grid) -> Self {
        let n = initial.side();
        Game {
            history: History::new(initial),
            clicks: 0,
            replacement: WHITE,
            n,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Begins a new game on `initial`, or on a fresh random board when
    /// `None`. The history is replaced wholesale; the score is left alone
    /// (only [`Game::restart`] resets it).
    pub fn start(&mut self, initial: Option<Grid>) {
        let grid = match initial {
            Some(grid) => {
                self.n = grid.side();
                grid
            }
            None => Grid::random(self.n, &mut self.rng),
        };
        self.history.initialize(grid);
    }

    /// The board the player currently sees.
    pub fn current(&self) -> &Grid {
        self.history.current()
    }

    /// The click counter: completed clicks minus undone ones.
    pub fn score(&self) -> u32 {
        self.clicks
    }

    /// The currently selected replacement color.
    pub fn replacement_color(&self) -> Color {
        self.replacement
    }

    /// Selects the color that subsequent clicks paint with. Touches
    /// neither history nor score.
    pub fn set_replacement_color(&mut self, color: Color) {
        self.replacement = color;
    }

    /// Processes a click on the cell at `coord`: flood-fills a copy of the
    /// current board with the selected replacement color, commits the copy
    /// as a new turn, and checks for a win.
    ///
    /// Every click counts as a turn and gets its own history entry, even
    /// when the clicked cell already wears the replacement color and the
    /// fill changes nothing.
    ///
    /// # Panics
    /// Panics if `coord` is outside the board. Callers pass coordinates
    /// derived from in-bounds input.
    pub fn handle_cell_click(&mut self, coord: Coord) -> TurnOutcome {
        self.clicks += 1;
        let mut next = self.current().clone();
        flood_fill(&mut next, coord, self.replacement);
        self.history.commit(next);
        self.end_of_turn()
    }

    /// Converts a pixel position on a rendered board surface of the given
    /// dimensions into a cell coordinate and processes a click there.
    pub fn handle_pixel_click(&mut self, x: f64, y: f64, width: f64, height: f64) -> TurnOutcome {
        let coord = self.current().coord_at_pixel(x, y, width, height);
        self.handle_cell_click(coord)
    }

    /// Undoes the most recent turn, if any. On success the click counter
    /// is decremented and the usual end-of-turn processing runs; when
    /// there is nothing to undo the session is left completely unchanged.
    pub fn handle_undo(&mut self) -> TurnOutcome {
        if self.history.rollback() {
            self.clicks -= 1;
            self.end_of_turn()
        } else {
            TurnOutcome::Playing
        }
    }

    // Runs after every completed turn (click or successful undo): the
    // caller repaints from `current()`, and a uniform board wins and
    // immediately rolls into a fresh game.
    fn end_of_turn(&mut self) -> TurnOutcome {
        if self.current().is_uniform() {
            let score = self.clicks;
            self.restart();
            TurnOutcome::Won { score }
        } else {
            TurnOutcome::Playing
        }
    }

    /// Abandons the current game: score back to zero, selected color back
    /// to white, and a fresh random board.
    pub fn restart(&mut self) {
        self.clicks = 0;
        self.replacement = WHITE;
        self.start(None);
    }
}
