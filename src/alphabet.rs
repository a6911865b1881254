// Copyright (C) 2020-2026 Andy Kurnia.

use super::board;

pub struct Letter {
    label: char,
    score: i16,
}

pub struct StaticAlphabet<'a> {
    letters: &'a [Letter],
    special_score: i16,
}

pub enum Alphabet<'a> {
    Static(StaticAlphabet<'a>),
}

impl<'a> Alphabet<'a> {
    #[inline(always)]
    pub fn len(&self) -> u8 {
        match self {
            Alphabet::Static(x) => x.letters.len() as u8,
        }
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    fn letters(&self) -> &'a [Letter] {
        match self {
            Alphabet::Static(x) => x.letters,
        }
    }

    // case-insensitive.
    #[inline(always)]
    pub fn score(&self, letter: char) -> Option<i16> {
        let letter = letter.to_ascii_uppercase();
        self.letters()
            .iter()
            .find(|x| x.label == letter)
            .map(|x| x.score)
    }

    // J, Q, X, Z in English.
    #[inline(always)]
    pub fn is_special(&self, score: i16) -> bool {
        match self {
            Alphabet::Static(x) => score >= x.special_score,
        }
    }

    // A fresh rack tile for this letter, uppercased.
    pub fn make_tile(&self, letter: char) -> Option<board::Tile> {
        self.score(letter).map(|value| board::Tile {
            letter: letter.to_ascii_uppercase(),
            value,
            on_board: false,
        })
    }

    // "APPLE" -> [A, P, P, L, E]; None on any letter outside the alphabet.
    pub fn make_rack(&self, letters: &str) -> Option<Vec<board::Tile>> {
        letters.chars().map(|c| self.make_tile(c)).collect()
    }
}

static ENGLISH_LETTERS: &[Letter] = &[
    Letter { label: 'A', score: 1 },
    Letter { label: 'B', score: 3 },
    Letter { label: 'C', score: 3 },
    Letter { label: 'D', score: 2 },
    Letter { label: 'E', score: 1 },
    Letter { label: 'F', score: 4 },
    Letter { label: 'G', score: 2 },
    Letter { label: 'H', score: 4 },
    Letter { label: 'I', score: 1 },
    Letter { label: 'J', score: 8 },
    Letter { label: 'K', score: 5 },
    Letter { label: 'L', score: 1 },
    Letter { label: 'M', score: 3 },
    Letter { label: 'N', score: 1 },
    Letter { label: 'O', score: 1 },
    Letter { label: 'P', score: 3 },
    Letter { label: 'Q', score: 10 },
    Letter { label: 'R', score: 1 },
    Letter { label: 'S', score: 1 },
    Letter { label: 'T', score: 1 },
    Letter { label: 'U', score: 1 },
    Letter { label: 'V', score: 4 },
    Letter { label: 'W', score: 4 },
    Letter { label: 'X', score: 8 },
    Letter { label: 'Y', score: 4 },
    Letter { label: 'Z', score: 10 },
];

pub fn make_english_alphabet<'a>() -> Alphabet<'a> {
    Alphabet::Static(StaticAlphabet {
        letters: ENGLISH_LETTERS,
        special_score: 8,
    })
}
