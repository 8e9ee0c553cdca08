use crate::engine::{Color, Grid};

/// Parses an array of string slices into a `Grid`.
///
/// Each string slice represents one row, starting from row 0, and the
/// board is square: with `k` rows given, every row must be exactly `k`
/// characters long. Valid characters are:
/// - 'W': white
/// - 'K': black
/// - 'R': red
/// - 'G': green
/// - 'B': blue
///
/// There is no "empty" cell in this game, so short rows are not padded;
/// any length mismatch or unrecognized character is an error.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`), one per row, top to
///   bottom.
///
/// # Returns
/// * `Ok(Grid)` on success.
/// * `Err(String)` if `s` is empty, any row's length differs from the
///   number of rows, or a character outside `['W', 'K', 'R', 'G', 'B']`
///   is encountered.
///
/// # Examples
/// ```
/// use flood_puzzle::utils::grid_from_str_array;
/// use flood_puzzle::engine::{Coord, BLACK, RED, WHITE};
///
/// let grid = grid_from_str_array(&["WR", "KK"]).unwrap();
/// assert_eq!(grid.color_at(Coord::new(0, 0)), WHITE);
/// assert_eq!(grid.color_at(Coord::new(0, 1)), RED);
/// assert_eq!(grid.color_at(Coord::new(1, 0)), BLACK);
///
/// assert!(grid_from_str_array(&["WX", "KK"]).is_err());
/// assert!(grid_from_str_array(&["WRK", "KK"]).is_err());
/// ```
pub fn grid_from_str_array(s: &[&str]) -> Result<Grid, String> {
    let n = s.len();
    if n == 0 {
        return Err("Expected at least one row".to_string());
    }

    let mut cells = Vec::with_capacity(n * n);

    for (r, row_str) in s.iter().enumerate() {
        if row_str.chars().count() != n {
            return Err(format!(
                "Row {} has {} characters, expected {} for a square board",
                r,
                row_str.chars().count(),
                n
            ));
        }

        for (c, char_cell) in row_str.chars().enumerate() {
            match Color::from_char(char_cell) {
                Some(color) => cells.push(color),
                None => {
                    return Err(format!(
                        "Unrecognized character '{}' in row {} col {}",
                        char_cell, r, c
                    ))
                }
            }
        }
    }

    Ok(Grid::from_cells(n, cells))
}
