// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, fash, game_config, matrix};

// Coordinates of empty spaces in one line, in board order.
pub type Slot = Box<[matrix::RowCol]>;

struct SlotCollector<'a> {
    board: &'a board::Board,
    max_len: i8,
    seen: fash::MyHashSet<Slot>,
    slots: Vec<Slot>,
}

impl SlotCollector<'_> {
    #[inline(always)]
    fn is_free(&self, row: i8, col: i8) -> bool {
        self.board
            .space(row, col)
            .is_some_and(|space| space.tile.is_none())
    }

    // Keeps the first occurrence only.
    fn push(&mut self, slot: Vec<matrix::RowCol>) {
        let slot = Slot::from(slot);
        if !self.seen.contains(&slot) {
            self.seen.insert(slot.clone());
            self.slots.push(slot);
        }
    }

    // The run of len spaces starting at (row, col), if all are free.
    fn window(&self, down: bool, row: i8, col: i8, len: i8) -> Option<Vec<matrix::RowCol>> {
        let (dr, dc) = if down { (1, 0) } else { (0, 1) };
        let mut slot = Vec::with_capacity(len as usize);
        for i in 0..len {
            let (r, c) = (row + dr * i, col + dc * i);
            if !self.is_free(r, c) {
                return None;
            }
            slot.push(matrix::RowCol(r, c));
        }
        Some(slot)
    }

    // Every window of each length that covers (row, col), leftmost/topmost
    // start first.
    fn windows_through(&mut self, down: bool, row: i8, col: i8, min_len: i8) {
        let (dr, dc) = if down { (1, 0) } else { (0, 1) };
        for len in min_len..=self.max_len {
            for k in (0..len).rev() {
                if let Some(slot) = self.window(down, row - dr * k, col - dc * k, len) {
                    self.push(slot);
                }
            }
        }
    }

    // Grows away from the set tile at (row, col), one space at a time,
    // recording every prefix.
    fn grow_from(&mut self, down: bool, row: i8, col: i8, forward: bool) {
        let (dr, dc) = if down { (1, 0) } else { (0, 1) };
        let sign = if forward { 1 } else { -1 };
        for len in 1..=self.max_len {
            let (r, c) = (row + dr * sign * len, col + dc * sign * len);
            if !self.is_free(r, c) {
                break;
            }
            let slot = if forward {
                self.window(down, row + dr, col + dc, len)
            } else {
                self.window(down, r, c, len)
            };
            if let Some(slot) = slot {
                self.push(slot);
            }
        }
    }

    // Slots in the lines on either side of the set tile, through the space
    // beside it.
    fn beside(&mut self, down: bool, row: i8, col: i8) {
        let (dr, dc) = if down { (0, 1) } else { (1, 0) };
        for sign in [-1, 1] {
            let (r, c) = (row + dr * sign, col + dc * sign);
            if self.is_free(r, c) {
                self.windows_through(down, r, c, 1);
            }
        }
    }

    fn around(&mut self, row: i8, col: i8) {
        for down in [true, false] {
            self.grow_from(down, row, col, false);
            self.grow_from(down, row, col, true);
            self.beside(down, row, col);
        }
    }
}

// Every distinct slot a placement may use, shortest first. On the first turn
// these pass through the start square, otherwise they touch a set tile.
pub fn generate_slots(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    is_first_turn: bool,
) -> Vec<Slot> {
    let mut collector = SlotCollector {
        board,
        max_len: game_config.rack_size(),
        seen: fash::MyHashSet::default(),
        slots: Vec::new(),
    };
    if is_first_turn {
        let board_layout = game_config.board_layout();
        let (row, col) = (board_layout.star_row(), board_layout.star_col());
        for down in [false, true] {
            collector.windows_through(down, row, col, 2);
        }
    } else {
        for space in board.spaces() {
            if space.is_set {
                collector.around(space.location.row(), space.location.col());
            }
        }
    }
    let mut slots = collector.slots;
    slots.sort_by_key(|slot| slot.len());
    slots
}
