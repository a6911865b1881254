// Copyright (C) 2020-2026 Andy Kurnia.

use super::matrix;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpaceType {
    #[default]
    Default,
    Start,
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl SpaceType {
    // only for tiles placed this turn.
    #[inline(always)]
    pub fn letter_multiplier(self) -> i16 {
        match self {
            SpaceType::DoubleLetter => 2,
            SpaceType::TripleLetter => 3,
            _ => 1,
        }
    }

    // only for tiles placed this turn.
    #[inline(always)]
    pub fn word_multiplier(self) -> i16 {
        match self {
            SpaceType::DoubleWord => 2,
            SpaceType::TripleWord => 3,
            _ => 1,
        }
    }
}

pub struct StaticBoardLayout<'a> {
    space_types: &'a [SpaceType],
    dim: matrix::Dim,
    star_row: i8,
    star_col: i8,
}

pub enum BoardLayout<'a> {
    Static(StaticBoardLayout<'a>),
}

impl<'a> BoardLayout<'a> {
    #[inline(always)]
    pub fn space_types(&self) -> &'a [SpaceType] {
        match self {
            BoardLayout::Static(x) => x.space_types,
        }
    }

    #[inline(always)]
    pub fn dim(&self) -> matrix::Dim {
        match self {
            BoardLayout::Static(x) => x.dim,
        }
    }

    #[inline(always)]
    pub fn star_row(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_row,
        }
    }

    #[inline(always)]
    pub fn star_col(&self) -> i8 {
        match self {
            BoardLayout::Static(x) => x.star_col,
        }
    }

    #[inline(always)]
    pub fn space_type_at(&self, row: i8, col: i8) -> SpaceType {
        self.space_types()[self.dim().at_row_col(row, col)]
    }
}

const TWS: SpaceType = SpaceType::TripleWord;
const DWS: SpaceType = SpaceType::DoubleWord;
const TLS: SpaceType = SpaceType::TripleLetter;
const DLS: SpaceType = SpaceType::DoubleLetter;
const FVS: SpaceType = SpaceType::Default;
const STA: SpaceType = SpaceType::Start;

static STANDARD_SPACE_TYPES: &[SpaceType] = &[
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, STA, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
    FVS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DLS, FVS, FVS, //
    FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, //
    FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, FVS, DWS, FVS, FVS, FVS, FVS, //
    DLS, FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, DLS, //
    FVS, FVS, DWS, FVS, FVS, FVS, DLS, FVS, DLS, FVS, FVS, FVS, DWS, FVS, FVS, //
    FVS, DWS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, TLS, FVS, FVS, FVS, DWS, FVS, //
    TWS, FVS, FVS, DLS, FVS, FVS, FVS, TWS, FVS, FVS, FVS, DLS, FVS, FVS, TWS, //
];

pub fn make_standard_board_layout<'a>() -> BoardLayout<'a> {
    BoardLayout::Static(StaticBoardLayout {
        space_types: STANDARD_SPACE_TYPES,
        dim: matrix::Dim { rows: 15, cols: 15 },
        star_row: 7,
        star_col: 7,
    })
}
