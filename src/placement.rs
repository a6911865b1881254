// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, play_scorer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PlacementError {
    #[display("no tiles placed")]
    NoTilesPlaced,
    #[display("word must pass through the starting space")]
    NotThroughStart,
    #[display("word must be longer than 1 letter")]
    SingleLetterFirstMove,
    #[display("word must be adjacent to set tiles")]
    NotAdjacent,
    #[display("tiles must be in a single row or column")]
    MultipleLines,
    #[display("tiles must form a contiguous line")]
    NotContiguous,
}

#[inline(always)]
fn is_adjacent_to_set_tile(board: &board::Board, row: i8, col: i8) -> bool {
    board.is_set(row - 1, col)
        || board.is_set(row + 1, col)
        || board.is_set(row, col - 1)
        || board.is_set(row, col + 1)
}

// Checks the tiles placed this turn (those not yet set).
pub fn validate_placement(board: &board::Board, is_first_turn: bool) -> Result<(), PlacementError> {
    let lines = play_scorer::bounding_lines(board);
    if lines.is_empty() {
        return Err(PlacementError::NoTilesPlaced);
    }

    if is_first_turn {
        let dim = board.dim();
        if !board.has_tile(dim.rows / 2, dim.cols / 2) {
            return Err(PlacementError::NotThroughStart);
        }
        if lines.num_rows() == 1 && lines.num_cols() == 1 {
            return Err(PlacementError::SingleLetterFirstMove);
        }
    } else if !lines
        .rows()
        .any(|row| lines.cols().any(|col| is_adjacent_to_set_tile(board, row, col)))
    {
        return Err(PlacementError::NotAdjacent);
    }

    if lines.num_rows() > 1 && lines.num_cols() > 1 {
        return Err(PlacementError::MultipleLines);
    }

    let gap = if lines.num_rows() == 1 {
        let row = lines.first_row();
        (lines.first_col()..=lines.last_col()).any(|col| !board.has_tile(row, col))
    } else {
        let col = lines.first_col();
        (lines.first_row()..=lines.last_row()).any(|row| !board.has_tile(row, col))
    };
    if gap {
        return Err(PlacementError::NotContiguous);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game_config, matrix};

    fn setup() -> (game_config::GameConfig<'static>, board::Board) {
        let game_config = game_config::make_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        (game_config, board)
    }

    fn put(
        game_config: &game_config::GameConfig,
        board: &mut board::Board,
        row: i8,
        col: i8,
        down: bool,
        letters: &str,
    ) {
        play_scorer::place_letters(game_config, board, matrix::RowCol(row, col), down, letters)
            .unwrap();
    }

    #[test]
    fn empty_turn() {
        let (_, board) = setup();
        assert_eq!(validate_placement(&board, true), Err(PlacementError::NoTilesPlaced));
        assert_eq!(validate_placement(&board, false), Err(PlacementError::NoTilesPlaced));
    }

    #[test]
    fn first_move() {
        let (game_config, mut board) = setup();
        put(&game_config, &mut board, 7, 7, false, "AT");
        assert_eq!(validate_placement(&board, true), Ok(()));

        let (game_config, mut board) = setup();
        put(&game_config, &mut board, 7, 7, false, "A");
        assert_eq!(
            validate_placement(&board, true),
            Err(PlacementError::SingleLetterFirstMove)
        );

        let (game_config, mut board) = setup();
        put(&game_config, &mut board, 3, 3, false, "CAT");
        assert_eq!(validate_placement(&board, true), Err(PlacementError::NotThroughStart));

        let (game_config, mut board) = setup();
        put(&game_config, &mut board, 5, 7, true, "CAT");
        assert_eq!(validate_placement(&board, true), Ok(()));
    }

    #[test]
    fn later_move_must_touch() {
        let (game_config, mut board) = setup();
        put(&game_config, &mut board, 7, 6, false, "CAT");
        board.commit();
        put(&game_config, &mut board, 2, 2, false, "AT");
        assert_eq!(validate_placement(&board, false), Err(PlacementError::NotAdjacent));
        board.clear_unset();
        put(&game_config, &mut board, 8, 6, false, "AT");
        assert_eq!(validate_placement(&board, false), Ok(()));
    }

    #[test]
    fn later_move_single_line() {
        let (game_config, mut board) = setup();
        put(&game_config, &mut board, 7, 6, false, "CAT");
        board.commit();
        put(&game_config, &mut board, 8, 6, false, "A");
        put(&game_config, &mut board, 9, 7, false, "T");
        assert_eq!(validate_placement(&board, false), Err(PlacementError::MultipleLines));
    }

    #[test]
    fn later_move_without_gaps() {
        let (game_config, mut board) = setup();
        put(&game_config, &mut board, 7, 6, false, "CAT");
        board.commit();
        put(&game_config, &mut board, 8, 6, false, "A");
        put(&game_config, &mut board, 8, 8, false, "E");
        assert_eq!(validate_placement(&board, false), Err(PlacementError::NotContiguous));
        // set tiles may fill the span.
        board.clear_unset();
        put(&game_config, &mut board, 7, 5, false, "S");
        put(&game_config, &mut board, 7, 9, false, "S");
        assert_eq!(validate_placement(&board, false), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            PlacementError::NotThroughStart.to_string(),
            "word must pass through the starting space"
        );
        assert_eq!(
            PlacementError::NotAdjacent.to_string(),
            "word must be adjacent to set tiles"
        );
    }
}
