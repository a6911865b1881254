// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, game_config, matrix};

// Distinct rows and columns holding tiles placed this turn, as bitsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundingLines {
    rows: u16,
    cols: u16,
}

fn iter_bits(bits: u16) -> impl Iterator<Item = i8> {
    (0..16i8).filter(move |&i| bits & (1 << i) != 0)
}

impl BoundingLines {
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    #[inline(always)]
    pub fn num_rows(&self) -> u32 {
        self.rows.count_ones()
    }

    #[inline(always)]
    pub fn num_cols(&self) -> u32 {
        self.cols.count_ones()
    }

    // ascending.
    pub fn rows(&self) -> impl Iterator<Item = i8> + use<> {
        iter_bits(self.rows)
    }

    // ascending.
    pub fn cols(&self) -> impl Iterator<Item = i8> + use<> {
        iter_bits(self.cols)
    }

    // these four assume !is_empty().
    #[inline(always)]
    pub fn first_row(&self) -> i8 {
        self.rows.trailing_zeros() as i8
    }

    #[inline(always)]
    pub fn last_row(&self) -> i8 {
        15 - self.rows.leading_zeros() as i8
    }

    #[inline(always)]
    pub fn first_col(&self) -> i8 {
        self.cols.trailing_zeros() as i8
    }

    #[inline(always)]
    pub fn last_col(&self) -> i8 {
        15 - self.cols.leading_zeros() as i8
    }
}

pub fn bounding_lines(board: &board::Board) -> BoundingLines {
    let mut lines = BoundingLines::default();
    for (row_col, _) in board.placed_tiles() {
        lines.rows |= 1 << row_col.row();
        lines.cols |= 1 << row_col.col();
    }
    lines
}

// One maximal run of tiles through an anchor.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct WordScan {
    pub text: String,
    pub points: i16,
    pub word_multiplier: i16,
}

// Walks back from the anchor (inclusive) and forward from anchor + 1 until an
// empty space or the edge. Premiums only count for tiles placed this turn.
// A run shorter than 2 scores as ("", 0).
pub fn scan_word(board: &board::Board, down: bool, lane: i8, anchor: i8) -> WordScan {
    let strider = board.dim().lane(down, lane);
    let has_tile = |i: i8| board.at_index(strider.at(i)).tile.is_some();
    let mut start = anchor;
    while start >= 0 && has_tile(start) {
        start -= 1;
    }
    start += 1;
    let mut end = anchor + 1;
    while end < strider.len() && has_tile(end) {
        end += 1;
    }
    if end - start < 2 {
        return WordScan {
            text: String::new(),
            points: 0,
            word_multiplier: 1,
        };
    }

    let mut text = String::with_capacity((end - start) as usize);
    let mut word_score = 0i16;
    let mut word_multiplier = 1i16;
    for i in start..end {
        let space = board.at_index(strider.at(i));
        if let Some(tile) = &space.tile {
            text.push(tile.letter);
            if space.is_set {
                word_score += tile.value;
            } else {
                word_score += tile.value * space.space_type.letter_multiplier();
                word_multiplier *= space.space_type.word_multiplier();
            }
        }
    }
    WordScan {
        text,
        points: word_score * word_multiplier,
        word_multiplier,
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct BoardAnalysis {
    pub words: Vec<String>,
    pub points: i16,
}

impl BoardAnalysis {
    #[inline(always)]
    fn push(&mut self, word_scan: WordScan) {
        self.points += word_scan.points;
        if !word_scan.text.is_empty() {
            self.words.push(word_scan.text);
        }
    }
}

// Every word formed by this turn's tiles and the total score. The main word
// comes first, then the cross words in board order.
pub fn analyze_board(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    num_played: i8,
) -> BoardAnalysis {
    let mut analysis = BoardAnalysis::default();
    let lines = bounding_lines(board);
    if lines.is_empty() {
        return analysis;
    }
    let first_row = lines.first_row();
    let first_col = lines.first_col();
    if lines.num_rows() == 1 {
        analysis.push(scan_word(board, false, first_row, first_col));
        for col in lines.cols() {
            analysis.push(scan_word(board, true, col, first_row));
        }
    } else {
        analysis.push(scan_word(board, true, first_col, first_row));
        for row in lines.rows() {
            analysis.push(scan_word(board, false, row, first_col));
        }
    }
    analysis.points += game_config.num_played_bonus(num_played);
    analysis
}

// Tiles of the rack that are currently on the board.
pub fn count_tiles_on_board(rack: &[board::Tile]) -> i8 {
    rack.iter().filter(|tile| tile.on_board).count() as i8
}

// Puts letters down in a line for this turn, using the alphabet's values.
// Returns None if a letter is unknown or the line runs off the board.
pub fn place_letters(
    game_config: &game_config::GameConfig,
    board: &mut board::Board,
    start: matrix::RowCol,
    down: bool,
    letters: &str,
) -> Option<i8> {
    let alphabet = game_config.alphabet();
    let tiles = alphabet.make_rack(letters)?;
    let (dr, dc) = if down { (1, 0) } else { (0, 1) };
    let len = tiles.len() as i8;
    if !board
        .dim()
        .contains(start.row() + dr * (len - 1), start.col() + dc * (len - 1))
        || !board.dim().contains(start.row(), start.col())
    {
        return None;
    }
    for (i, tile) in (0..).zip(tiles) {
        board.place(
            matrix::RowCol(start.row() + dr * i, start.col() + dc * i),
            tile,
        );
    }
    Some(len)
}
