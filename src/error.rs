use thiserror::Error;

#[derive(Error, Debug)]
/// Errors raised while building the engine's inputs
///
/// Rejected moves are never errors, see [`PlacementValidator`](crate::PlacementValidator)
pub enum Error {
    /// A board needs 15 rows
    #[error("Invalid number of rows {0} (expect 15)")]
    InvalidRowCount(usize),

    /// Parsing a row on the board needs 15 squares
    #[error("Invalid row \"{0}\": length {1}, expect 15")]
    InvalidRowLength(String, usize),

    /// A square is neither a letter nor empty
    #[error("Invalid square '{square}' at row {row}, col {col}")]
    InvalidSquare {
        square: char,
        row: usize,
        col: usize,
    },

    /// The precompiled dictionary could not be read
    #[error("Dictionary fst could not be loaded")]
    Fst(#[from] fst::Error),
}
