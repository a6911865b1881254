// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, board_layout};

#[inline(always)]
pub fn empty_label(space_type: board_layout::SpaceType) -> char {
    match space_type {
        board_layout::SpaceType::Start => '*',
        board_layout::SpaceType::TripleWord => '=',
        board_layout::SpaceType::DoubleWord => '-',
        board_layout::SpaceType::TripleLetter => '"',
        board_layout::SpaceType::DoubleLetter => '\'',
        board_layout::SpaceType::Default => ' ',
    }
}

// Set tiles in uppercase, tiles placed this turn in lowercase.
#[inline(always)]
pub fn space_label(space: &board::Space) -> char {
    match &space.tile {
        Some(tile) if space.is_set => tile.letter.to_ascii_uppercase(),
        Some(tile) => tile.letter.to_ascii_lowercase(),
        None => empty_label(space.space_type),
    }
}

fn write_col_labels(f: &mut std::fmt::Formatter<'_>, cols: i8) -> std::fmt::Result {
    write!(f, "  ")?;
    for c in 0..cols {
        write!(f, " {}", ((c as u8) + 0x61) as char)?;
    }
    writeln!(f)
}

fn write_border(f: &mut std::fmt::Formatter<'_>, cols: i8) -> std::fmt::Result {
    write!(f, "  +")?;
    for _ in 1..cols {
        write!(f, "--")?;
    }
    writeln!(f, "-+")
}

pub struct BoardDisplay<'a>(pub &'a board::Board);

impl std::fmt::Display for BoardDisplay<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let board = self.0;
        let dim = board.dim();
        write_col_labels(f, dim.cols)?;
        write_border(f, dim.cols)?;
        for r in 0..dim.rows {
            write!(f, "{:2}|", r + 1)?;
            for c in 0..dim.cols {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", space_label(board.at(r, c)))?;
            }
            writeln!(f, "|{}", r + 1)?;
        }
        write_border(f, dim.cols)?;
        write_col_labels(f, dim.cols)
    }
}

pub fn print_board(board: &board::Board) {
    print!("{}", BoardDisplay(board));
}

// "APP(L)E": tiles already on the board in parentheses.
pub fn fmt_rack(rack: &[board::Tile]) -> String {
    let mut s = String::with_capacity(rack.len() * 3);
    for tile in rack {
        if tile.on_board {
            s.push('(');
            s.push(tile.letter);
            s.push(')');
        } else {
            s.push(tile.letter);
        }
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{game_config, matrix};

    #[test]
    fn renders_layout_and_tiles() {
        let game_config = game_config::make_english_game_config();
        let mut board = board::Board::new(game_config.board_layout());
        board.place(
            matrix::RowCol(7, 8),
            board::Tile {
                letter: 'Q',
                value: 10,
                on_board: false,
            },
        );
        let s = BoardDisplay(&board).to_string();
        let lines = s.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 19);
        assert_eq!(lines[0], "   a b c d e f g h i j k l m n o");
        assert!(lines[2].starts_with(" 1|= "));
        assert_eq!(&lines[9][3..], "=     '       * q     '     =|8");
    }

    #[test]
    fn rack_marks_used_tiles() {
        let rack = [
            board::Tile {
                letter: 'A',
                value: 1,
                on_board: true,
            },
            board::Tile {
                letter: 'B',
                value: 3,
                on_board: false,
            },
        ];
        assert_eq!(fmt_rack(&rack), "(A)B");
    }
}
