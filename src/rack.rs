// Copyright (C) 2020-2026 Andy Kurnia.

use super::board;

pub type Permutation = Box<[board::Tile]>;

// Every ordering of every subset of a rack, grouped by length.
// No attempt is made to collapse repeated letters.
pub struct PermutationsByLength {
    by_len: Box<[Vec<Permutation>]>,
}

impl PermutationsByLength {
    // longest length available.
    #[inline(always)]
    pub fn max_len(&self) -> usize {
        self.by_len.len() - 1
    }

    // empty for 0 or beyond the rack.
    #[inline(always)]
    pub fn of_len(&self, len: usize) -> &[Permutation] {
        match self.by_len.get(len) {
            Some(perms) => perms,
            None => &[],
        }
    }

    pub fn len(&self) -> usize {
        self.by_len.iter().map(|perms| perms.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::ops::Index<usize> for PermutationsByLength {
    type Output = [Permutation];

    #[inline(always)]
    fn index(&self, len: usize) -> &Self::Output {
        self.of_len(len)
    }
}

// Subsets of exactly num_picks indexes, in lexicographic order.
fn combinations(num_items: usize, num_picks: usize) -> Vec<Box<[u8]>> {
    struct Env<'a> {
        num_items: usize,
        picked: &'a mut Vec<u8>,
        found: &'a mut Vec<Box<[u8]>>,
    }
    fn iter(env: &mut Env, start: usize, remaining: usize) {
        if remaining == 0 {
            env.found.push(env.picked[..].into());
            return;
        }
        // leave room for the rest.
        for i in start..=(env.num_items - remaining) {
            env.picked.push(i as u8);
            iter(env, i + 1, remaining - 1);
            env.picked.pop();
        }
    }
    let mut found = Vec::new();
    if num_picks <= num_items {
        iter(
            &mut Env {
                num_items,
                picked: &mut Vec::with_capacity(num_picks),
                found: &mut found,
            },
            0,
            num_picks,
        );
    }
    found
}

#[inline(always)]
fn factorial(n: usize) -> usize {
    (1..=n).product()
}

// The code-th ordering of items, reading code in the factorial number system.
// Codes 0..n! give every ordering once, in lexicographic order of positions.
fn nth_permutation<T: Copy>(items: &[T], mut code: usize, out: &mut Vec<T>) {
    let mut pool = items.to_vec();
    out.clear();
    for i in (0..items.len()).rev() {
        let f = factorial(i);
        out.push(pool.remove(code / f));
        code %= f;
    }
}

pub fn generate_permutations_by_length(rack: &[board::Tile]) -> PermutationsByLength {
    let mut by_len = vec![Vec::new(); rack.len() + 1];
    let mut chosen = Vec::with_capacity(rack.len());
    let mut perm = Vec::with_capacity(rack.len());
    for (len, perms) in by_len.iter_mut().enumerate().skip(1) {
        let num_orders = factorial(len);
        for combination in combinations(rack.len(), len) {
            chosen.clear();
            chosen.extend(combination.iter().map(|&i| rack[i as usize]));
            for code in 0..num_orders {
                nth_permutation(&chosen, code, &mut perm);
                perms.push(Permutation::from(&perm[..]));
            }
        }
    }
    PermutationsByLength {
        by_len: by_len.into_boxed_slice(),
    }
}
