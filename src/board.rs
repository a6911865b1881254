// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board_layout, matrix};

pub const DIM: matrix::Dim = matrix::Dim { rows: 15, cols: 15 };

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tile {
    pub letter: char,
    pub value: i16,
    #[serde(default)]
    pub on_board: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub location: matrix::RowCol,
    #[serde(rename = "type", default)]
    pub space_type: board_layout::SpaceType,
    #[serde(default)]
    pub tile: Option<Tile>,
    // committed on a previous turn.
    #[serde(default)]
    pub is_set: bool,
}

#[derive(Debug, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardShapeError {
    #[display("board: need {expected} rows, found {found} rows")]
    Rows { expected: i8, found: usize },
    #[display("board row {row} (0-based): need {expected} cols, found {found} cols")]
    Cols {
        row: usize,
        expected: i8,
        found: usize,
    },
}

// Always DIM, stored row-major.
#[derive(Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<Vec<Space>>", into = "Vec<Vec<Space>>")]
pub struct Board {
    spaces: Box<[Space]>,
}

impl Clone for Board {
    #[inline(always)]
    fn clone(&self) -> Self {
        Self {
            spaces: self.spaces.clone(),
        }
    }

    #[inline(always)]
    fn clone_from(&mut self, source: &Self) {
        self.spaces.clone_from_slice(&source.spaces);
    }
}

impl Board {
    pub fn new(board_layout: &board_layout::BoardLayout) -> Self {
        debug_assert_eq!(board_layout.dim(), DIM);
        let mut spaces = Vec::with_capacity(DIM.len());
        for row in 0..DIM.rows {
            for col in 0..DIM.cols {
                spaces.push(Space {
                    location: matrix::RowCol(row, col),
                    space_type: board_layout.space_type_at(row, col),
                    tile: None,
                    is_set: false,
                });
            }
        }
        Self {
            spaces: spaces.into_boxed_slice(),
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        DIM
    }

    #[inline(always)]
    pub fn spaces(&self) -> &[Space] {
        &self.spaces
    }

    #[inline(always)]
    pub fn space(&self, row: i8, col: i8) -> Option<&Space> {
        if DIM.contains(row, col) {
            Some(&self.spaces[DIM.at_row_col(row, col)])
        } else {
            None
        }
    }

    // panics outside the board.
    #[inline(always)]
    pub fn at(&self, row: i8, col: i8) -> &Space {
        assert!(DIM.contains(row, col), "({}, {}) is off the board", row, col);
        &self.spaces[DIM.at_row_col(row, col)]
    }

    // panics outside the board.
    #[inline(always)]
    pub fn at_mut(&mut self, row: i8, col: i8) -> &mut Space {
        assert!(DIM.contains(row, col), "({}, {}) is off the board", row, col);
        &mut self.spaces[DIM.at_row_col(row, col)]
    }

    #[inline(always)]
    pub fn at_index(&self, idx: usize) -> &Space {
        &self.spaces[idx]
    }

    // false outside the board.
    #[inline(always)]
    pub fn has_tile(&self, row: i8, col: i8) -> bool {
        self.space(row, col).is_some_and(|space| space.tile.is_some())
    }

    // false outside the board.
    #[inline(always)]
    pub fn is_set(&self, row: i8, col: i8) -> bool {
        self.space(row, col).is_some_and(|space| space.is_set)
    }

    pub fn has_set_tiles(&self) -> bool {
        self.spaces.iter().any(|space| space.is_set)
    }

    // Puts a tile down for this turn.
    pub fn place(&mut self, row_col: matrix::RowCol, tile: Tile) {
        let space = self.at_mut(row_col.row(), row_col.col());
        space.tile = Some(Tile {
            on_board: true,
            ..tile
        });
        space.is_set = false;
    }

    // Tiles placed this turn, row-major.
    pub fn placed_tiles(&self) -> impl Iterator<Item = (matrix::RowCol, &Tile)> {
        self.spaces.iter().filter_map(|space| match &space.tile {
            Some(tile) if !space.is_set => Some((space.location, tile)),
            _ => None,
        })
    }

    // Marks this turn's tiles as set. Returns how many were committed.
    pub fn commit(&mut self) -> usize {
        let mut num_committed = 0;
        for space in self.spaces.iter_mut() {
            if space.tile.is_some() && !space.is_set {
                space.is_set = true;
                num_committed += 1;
            }
        }
        num_committed
    }

    // Lifts this turn's tiles off the board, row-major.
    pub fn clear_unset(&mut self) -> Vec<Tile> {
        let mut lifted = Vec::new();
        for space in self.spaces.iter_mut() {
            if !space.is_set {
                if let Some(tile) = space.tile.take() {
                    lifted.push(tile);
                }
            }
        }
        lifted
    }
}

impl TryFrom<Vec<Vec<Space>>> for Board {
    type Error = BoardShapeError;

    fn try_from(rows: Vec<Vec<Space>>) -> Result<Self, Self::Error> {
        if rows.len() != DIM.rows as usize {
            return Err(BoardShapeError::Rows {
                expected: DIM.rows,
                found: rows.len(),
            });
        }
        let mut spaces = Vec::with_capacity(DIM.len());
        for (row_num, row) in (0..).zip(rows) {
            if row.len() != DIM.cols as usize {
                return Err(BoardShapeError::Cols {
                    row: row_num as usize,
                    expected: DIM.cols,
                    found: row.len(),
                });
            }
            for (col_num, space) in (0..).zip(row) {
                // location is derived from position, whatever the input said.
                spaces.push(Space {
                    location: matrix::RowCol(row_num, col_num),
                    ..space
                });
            }
        }
        Ok(Self {
            spaces: spaces.into_boxed_slice(),
        })
    }
}

impl From<Board> for Vec<Vec<Space>> {
    fn from(board: Board) -> Self {
        board
            .spaces
            .chunks(DIM.cols as usize)
            .map(|row| row.to_vec())
            .collect()
    }
}
