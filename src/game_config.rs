// Copyright (C) 2020-2026 Andy Kurnia.

use super::{alphabet, board_layout};

pub struct StaticGameConfig<'a> {
    alphabet: alphabet::Alphabet<'a>,
    board_layout: board_layout::BoardLayout<'a>,
    rack_size: i8,
    bingo_bonus: i16,
    min_word_len: u8,
    max_word_len: u8,
    efficiency_threshold: f64,
    special_efficiency_threshold: f64,
}

pub enum GameConfig<'a> {
    Static(StaticGameConfig<'a>),
}

impl<'a> GameConfig<'a> {
    #[inline(always)]
    pub fn alphabet(&self) -> &alphabet::Alphabet<'a> {
        match self {
            GameConfig::Static(x) => &x.alphabet,
        }
    }

    #[inline(always)]
    pub fn board_layout(&self) -> &board_layout::BoardLayout<'a> {
        match self {
            GameConfig::Static(x) => &x.board_layout,
        }
    }

    #[inline(always)]
    pub fn rack_size(&self) -> i8 {
        match self {
            GameConfig::Static(x) => x.rack_size,
        }
    }

    #[inline(always)]
    pub fn num_played_bonus(&self, num_played: i8) -> i16 {
        match self {
            GameConfig::Static(x) => {
                // branchless
                x.bingo_bonus & -((num_played == x.rack_size) as i16)
            }
        }
    }

    // inclusive; the dictionary never holds words outside this range.
    #[inline(always)]
    pub fn word_len_range(&self) -> std::ops::RangeInclusive<usize> {
        match self {
            GameConfig::Static(x) => (x.min_word_len as usize)..=(x.max_word_len as usize),
        }
    }

    #[inline(always)]
    pub fn efficiency_threshold(&self) -> f64 {
        match self {
            GameConfig::Static(x) => x.efficiency_threshold,
        }
    }

    #[inline(always)]
    pub fn special_efficiency_threshold(&self) -> f64 {
        match self {
            GameConfig::Static(x) => x.special_efficiency_threshold,
        }
    }
}

pub fn make_english_game_config<'a>() -> GameConfig<'a> {
    make_english_game_config_with_thresholds(0.65, 0.5)
}

pub fn make_english_game_config_with_thresholds<'a>(
    efficiency_threshold: f64,
    special_efficiency_threshold: f64,
) -> GameConfig<'a> {
    GameConfig::Static(StaticGameConfig {
        alphabet: alphabet::make_english_alphabet(),
        board_layout: board_layout::make_standard_board_layout(),
        rack_size: 7,
        bingo_bonus: 50,
        min_word_len: 2,
        max_word_len: 12,
        efficiency_threshold,
        special_efficiency_threshold,
    })
}
