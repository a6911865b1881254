// Copyright (C) 2020-2026 Andy Kurnia.

// (row, col), 0-based. Serializes as [row, col].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
pub struct RowCol(pub i8, pub i8);

impl RowCol {
    #[inline(always)]
    pub fn row(self) -> i8 {
        self.0
    }

    #[inline(always)]
    pub fn col(self) -> i8 {
        self.1
    }
}

// Walks one lane (a row or a column) of a flat row-major grid.
#[derive(Clone)]
pub struct Strider {
    base: i16,
    step: i8,
    len: i8,
}

impl Strider {
    #[inline(always)]
    pub fn len(&self) -> i8 {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline(always)]
    pub fn at(&self, idx: i8) -> usize {
        ((self.base as isize) + (idx as isize) * (self.step as isize)) as usize
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dim {
    pub rows: i8,
    pub cols: i8,
}

impl Dim {
    #[inline(always)]
    pub fn across(&self, row: i8) -> Strider {
        Strider {
            base: (row as i16) * (self.cols as i16),
            step: 1,
            len: self.cols,
        }
    }

    #[inline(always)]
    pub fn down(&self, col: i8) -> Strider {
        Strider {
            base: col as i16,
            step: self.cols,
            len: self.rows,
        }
    }

    #[inline(always)]
    pub fn lane(&self, down: bool, lane: i8) -> Strider {
        if down {
            self.down(lane)
        } else {
            self.across(lane)
        }
    }

    #[inline(always)]
    pub fn at_row_col(&self, row: i8, col: i8) -> usize {
        (((row as isize) * (self.cols as isize)) + (col as isize)) as usize
    }

    #[inline(always)]
    pub fn contains(&self, row: i8, col: i8) -> bool {
        row >= 0 && row < self.rows && col >= 0 && col < self.cols
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn striders_follow_lanes() {
        let dim = Dim { rows: 15, cols: 15 };
        assert_eq!(dim.across(7).at(0), 105);
        assert_eq!(dim.across(7).at(14), 119);
        assert_eq!(dim.down(3).at(2), 33);
        assert_eq!(dim.lane(true, 3).at(2), dim.at_row_col(2, 3));
        assert_eq!(dim.lane(false, 2).at(3), dim.at_row_col(2, 3));
        assert_eq!(dim.len(), 225);
        assert!(dim.contains(14, 0));
        assert!(!dim.contains(15, 0));
        assert!(!dim.contains(0, -1));
    }
}
