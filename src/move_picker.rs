// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, dictionary, error, game_config, matrix, play_scorer, rack, slotgen};

#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    // highest score.
    #[display("greedy")]
    Greedy,
    // trades score for tile efficiency.
    #[display("heuristic")]
    Heuristic,
}

impl std::str::FromStr for Mode {
    type Err = error::MyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("greedy") {
            Ok(Mode::Greedy)
        } else if s.eq_ignore_ascii_case("heuristic") {
            Ok(Mode::Heuristic)
        } else {
            Err(error::new(format!("invalid mode {:?}", s)))
        }
    }
}

pub struct PickParams<'a> {
    pub board: &'a board::Board,
    pub rack: &'a [board::Tile],
    pub dictionary: &'a dictionary::Dictionary,
    pub level: dictionary::Level,
    pub mode: Mode,
    pub is_first_turn: bool,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PickedMove {
    pub board: board::Board,
    pub words: Vec<String>,
    pub points: i16,
    #[serde(rename = "hand")]
    pub rack: Vec<board::Tile>,
}

impl PickedMove {
    #[inline(always)]
    pub fn is_pass(&self) -> bool {
        self.words.is_empty()
    }
}

// A legal placement, identified by its position in the search order.
#[derive(Clone, Copy, Debug)]
struct Candidate {
    slot_idx: usize,
    perm_idx: usize,
    points: i16,
    ratio: f64,
}

impl Candidate {
    #[inline(always)]
    fn order_key(&self) -> (usize, usize) {
        (self.slot_idx, self.perm_idx)
    }
}

// What one worker found over the slots it took.
#[derive(Default)]
struct Findings {
    strong: Option<Candidate>,
    // every candidate the fallback rule may look at, in search order.
    fallbacks: Vec<Candidate>,
    num_legal: usize,
}

// Strictly more points wins, so the earliest of equals stays.
#[inline(always)]
fn beats_strong(candidate: &Candidate, strong: &Option<Candidate>) -> bool {
    match strong {
        Some(strong) => {
            candidate.points > strong.points
                || (candidate.points == strong.points
                    && candidate.order_key() < strong.order_key())
        }
        None => true,
    }
}

// At ratio 0 a candidate must beat the fallback's points, otherwise its ratio.
// No fallback yet compares as 0 points at ratio 0.
fn replay_fallbacks(mut fallbacks: Vec<Candidate>) -> Option<Candidate> {
    fallbacks.sort_unstable_by_key(Candidate::order_key);
    let mut fallback: Option<Candidate> = None;
    for candidate in fallbacks {
        let (points, ratio) = fallback.map_or((0, 0.0), |x| (x.points, x.ratio));
        let better = if candidate.ratio == 0.0 {
            candidate.points > points
        } else {
            candidate.ratio > ratio
        };
        if better {
            fallback = Some(candidate);
        }
    }
    fallback
}

struct Search<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    lexicon: &'a dictionary::Lexicon,
    base: &'a board::Board,
    slots: &'a [slotgen::Slot],
    perms: &'a rack::PermutationsByLength,
    // by length then permutation index; whether the letters alone spell a word.
    perm_ok: &'a [Box<[bool]>],
    greedy: bool,
}

impl Search<'_> {
    #[inline(always)]
    fn simulate(
        &self,
        scratch: &mut board::Board,
        slot: &[matrix::RowCol],
        perm: &[board::Tile],
    ) -> play_scorer::BoardAnalysis {
        scratch.clone_from(self.base);
        for (&row_col, &tile) in slot.iter().zip(perm) {
            scratch.place(row_col, tile);
        }
        play_scorer::analyze_board(self.game_config, scratch, perm.len() as i8)
    }

    fn retain(&self, findings: &mut Findings, candidate: Candidate, perm: &[board::Tile]) {
        if self.greedy {
            if beats_strong(&candidate, &findings.strong) {
                findings.strong = Some(candidate);
            }
            return;
        }
        let alphabet = self.game_config.alphabet();
        let is_special = perm.iter().any(|tile| alphabet.is_special(tile.value));
        if candidate.ratio >= self.game_config.efficiency_threshold()
            || (is_special && candidate.ratio >= self.game_config.special_efficiency_threshold())
        {
            if beats_strong(&candidate, &findings.strong) {
                findings.strong = Some(candidate);
            }
        } else if !is_special {
            findings.fallbacks.push(candidate);
        }
    }

    fn work(&self, next_slot: &std::sync::atomic::AtomicUsize) -> Findings {
        let mut findings = Findings::default();
        let mut scratch = self.base.clone();
        loop {
            let slot_idx = next_slot.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            if slot_idx >= self.slots.len() {
                break;
            }
            let slot = &self.slots[slot_idx];
            let len = slot.len();
            let num_legal_before = findings.num_legal;
            for (perm_idx, perm) in self.perms.of_len(len).iter().enumerate() {
                if !self.perm_ok[len][perm_idx] {
                    continue;
                }
                let analysis = self.simulate(&mut scratch, slot, perm);
                if analysis.words.is_empty()
                    || !analysis.words.iter().all(|word| self.lexicon.contains(word))
                {
                    continue;
                }
                findings.num_legal += 1;
                let face_sum = perm.iter().map(|tile| tile.value).sum::<i16>();
                let ratio = if analysis.points == 0 {
                    0.0
                } else {
                    1.0 - face_sum as f64 / analysis.points as f64
                };
                self.retain(
                    &mut findings,
                    Candidate {
                        slot_idx,
                        perm_idx,
                        points: analysis.points,
                        ratio,
                    },
                    perm,
                );
            }
            tracing::trace!(
                slot_idx,
                len,
                num_legal = findings.num_legal - num_legal_before,
                "searched slot"
            );
        }
        findings
    }
}

pub struct MovePicker<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    num_threads: usize,
}

impl<'a> MovePicker<'a> {
    pub fn new(game_config: &'a game_config::GameConfig<'a>) -> Self {
        Self::with_num_threads(game_config, num_cpus::get())
    }

    // 0 or 1 searches on the calling thread.
    pub fn with_num_threads(game_config: &'a game_config::GameConfig<'a>, num_threads: usize) -> Self {
        Self {
            game_config,
            num_threads: num_threads.max(1),
        }
    }

    #[inline(always)]
    pub fn num_threads(&self) -> usize {
        self.num_threads
    }

    // Tries every permutation of the unused rack tiles in every slot. Finding
    // nothing is not an error; the board comes back unchanged with 0 points.
    pub fn pick_a_move(&self, params: &PickParams<'_>) -> error::Returns<PickedMove> {
        let game_config = self.game_config;
        if params.rack.len() > game_config.rack_size() as usize {
            return_error!(format!(
                "rack has {} tiles, at most {} allowed",
                params.rack.len(),
                game_config.rack_size()
            ));
        }
        let lexicon = params.dictionary.lexicon(params.level)?;

        // this turn's tiles, if any, are not part of the position.
        let mut base = params.board.clone();
        base.clear_unset();

        let available = params
            .rack
            .iter()
            .filter(|tile| !tile.on_board)
            .copied()
            .collect::<Vec<_>>();
        let perms = rack::generate_permutations_by_length(&available);
        let perm_ok = (0..=perms.max_len())
            .map(|len| {
                perms
                    .of_len(len)
                    .iter()
                    .map(|perm| {
                        len <= 1 || {
                            let word = perm.iter().map(|tile| tile.letter).collect::<String>();
                            lexicon.contains(&word)
                        }
                    })
                    .collect::<Box<[bool]>>()
            })
            .collect::<Box<[_]>>();
        let slots = slotgen::generate_slots(game_config, &base, params.is_first_turn);
        let greedy = params.mode == Mode::Greedy || params.level == dictionary::Level::Beginner;
        tracing::debug!(
            num_slots = slots.len(),
            num_perms = perms.len(),
            num_threads = self.num_threads,
            greedy,
            "searching"
        );

        let search = Search {
            game_config,
            lexicon,
            base: &base,
            slots: &slots,
            perms: &perms,
            perm_ok: &perm_ok,
            greedy,
        };
        let next_slot = std::sync::atomic::AtomicUsize::new(0);
        let mut all_findings = Vec::with_capacity(self.num_threads);
        if self.num_threads <= 1 {
            all_findings.push(search.work(&next_slot));
        } else {
            let (tx, rx) = std::sync::mpsc::channel();
            std::thread::scope(|s| {
                for _ in 0..self.num_threads {
                    let tx = tx.clone();
                    let search = &search;
                    let next_slot = &next_slot;
                    s.spawn(move || {
                        // the receiver outlives the scope.
                        let _ = tx.send(search.work(next_slot));
                    });
                }
            });
            drop(tx);
            all_findings.extend(rx);
        }

        let mut strong = None;
        let mut fallbacks = Vec::new();
        let mut num_legal = 0;
        for findings in all_findings {
            num_legal += findings.num_legal;
            if let Some(candidate) = findings.strong {
                if beats_strong(&candidate, &strong) {
                    strong = Some(candidate);
                }
            }
            fallbacks.extend(findings.fallbacks);
        }
        let winner = match strong {
            Some(candidate) if candidate.points > 0 => Some(candidate),
            _ => replay_fallbacks(fallbacks),
        };

        let Some(winner) = winner else {
            tracing::debug!(num_legal, "no move found");
            return Ok(PickedMove {
                board: params.board.clone(),
                words: Vec::new(),
                points: 0,
                rack: params.rack.to_vec(),
            });
        };

        let slot = &slots[winner.slot_idx];
        let perm = &perms.of_len(slot.len())[winner.perm_idx];
        let mut board = base.clone();
        let analysis = search.simulate(&mut board, slot, perm);
        let mut rack = params.rack.to_vec();
        for tile in perm.iter() {
            if let Some(rack_tile) = rack
                .iter_mut()
                .find(|rack_tile| !rack_tile.on_board && rack_tile.letter == tile.letter)
            {
                rack_tile.on_board = true;
            }
        }
        tracing::debug!(
            num_legal,
            points = analysis.points,
            ratio = winner.ratio,
            words = ?analysis.words,
            "picked a move"
        );
        Ok(PickedMove {
            board,
            words: analysis.words,
            points: analysis.points,
            rack,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_dictionary(
        game_config: &game_config::GameConfig,
        words: &[&str],
    ) -> dictionary::Dictionary {
        let mut dictionary = dictionary::Dictionary::new();
        for level in dictionary::Level::ALL {
            dictionary.set_lexicon(level, dictionary::Lexicon::from_words(game_config, words));
        }
        dictionary
    }

    fn set_letter(
        game_config: &game_config::GameConfig,
        board: &mut board::Board,
        row: i8,
        col: i8,
        letter: char,
    ) {
        let tile = game_config.alphabet().make_tile(letter).unwrap();
        board.place(matrix::RowCol(row, col), tile);
        board.commit();
    }

    fn pick(
        game_config: &game_config::GameConfig,
        board: &board::Board,
        rack: &[board::Tile],
        dictionary: &dictionary::Dictionary,
        level: dictionary::Level,
        mode: Mode,
        is_first_turn: bool,
    ) -> PickedMove {
        MovePicker::with_num_threads(game_config, 1)
            .pick_a_move(&PickParams {
                board,
                rack,
                dictionary,
                level,
                mode,
                is_first_turn,
            })
            .unwrap()
    }

    // Q at the center and an A far away, both set.
    fn two_ways(game_config: &game_config::GameConfig) -> board::Board {
        let mut board = board::Board::new(game_config.board_layout());
        set_letter(game_config, &mut board, 7, 7, 'Q');
        set_letter(game_config, &mut board, 2, 2, 'A');
        board
    }

    #[test]
    fn apple_on_empty_board() {
        let game_config = game_config::make_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let rack = game_config.alphabet().make_rack("APPLE").unwrap();
        let dictionary = make_dictionary(&game_config, &["apple"]);
        for mode in [Mode::Heuristic, Mode::Greedy] {
            let picked = pick(
                &game_config,
                &board,
                &rack,
                &dictionary,
                dictionary::Level::Expert,
                mode,
                true,
            );
            assert_eq!(picked.words, vec!["APPLE"]);
            // leftmost window puts the A on the double letter square.
            assert_eq!(picked.points, 10);
            assert_eq!(picked.board.at(7, 3).tile.unwrap().letter, 'A');
            assert_eq!(picked.board.at(7, 7).tile.unwrap().letter, 'E');
            assert!(picked.rack.iter().all(|tile| tile.on_board));
            assert!(!board.has_tile(7, 7));
        }
    }

    #[test]
    fn heuristic_prefers_efficiency() {
        let game_config = game_config::make_english_game_config();
        let board = two_ways(&game_config);
        let rack = game_config.alphabet().make_rack("IZZ").unwrap();
        let dictionary = make_dictionary(&game_config, &["qi", "zz", "azz"]);

        let picked = pick(
            &game_config,
            &board,
            &rack,
            &dictionary,
            dictionary::Level::Expert,
            Mode::Heuristic,
            false,
        );
        assert_eq!(picked.words, vec!["QI"]);
        assert_eq!(picked.points, 11);
        assert_eq!(
            picked.rack.iter().map(|tile| tile.on_board).collect::<Vec<_>>(),
            vec![true, false, false]
        );

        let picked = pick(
            &game_config,
            &board,
            &rack,
            &dictionary,
            dictionary::Level::Expert,
            Mode::Greedy,
            false,
        );
        assert_eq!(picked.words, vec!["AZZ"]);
        assert_eq!(picked.points, 21);
        assert_eq!(
            picked.rack.iter().map(|tile| tile.on_board).collect::<Vec<_>>(),
            vec![false, true, true]
        );
    }

    #[test]
    fn beginner_is_always_greedy() {
        let game_config = game_config::make_english_game_config();
        let board = two_ways(&game_config);
        let rack = game_config.alphabet().make_rack("IZZ").unwrap();
        let dictionary = make_dictionary(&game_config, &["qi", "zz", "azz"]);
        let picked = pick(
            &game_config,
            &board,
            &rack,
            &dictionary,
            dictionary::Level::Beginner,
            Mode::Heuristic,
            false,
        );
        assert_eq!(picked.points, 21);
    }

    #[test]
    fn special_tiles_have_their_own_threshold() {
        // X on the double letter beside A: 17 points, ratio 1 - 8/17.
        let game_config = game_config::make_english_game_config();
        let mut board = board::Board::new(game_config.board_layout());
        set_letter(&game_config, &mut board, 6, 7, 'A');
        let rack = game_config.alphabet().make_rack("X").unwrap();
        let dictionary = make_dictionary(&game_config, &["ax"]);
        let picked = pick(
            &game_config,
            &board,
            &rack,
            &dictionary,
            dictionary::Level::Expert,
            Mode::Heuristic,
            false,
        );
        assert_eq!(picked.words, vec!["AX"]);
        assert_eq!(picked.points, 17);
        assert_eq!(picked.board.at(6, 8).tile.unwrap().letter, 'X');

        // special moves below their threshold do not fall back either.
        let game_config = game_config::make_english_game_config_with_thresholds(0.65, 0.6);
        let picked = pick(
            &game_config,
            &board,
            &rack,
            &dictionary,
            dictionary::Level::Expert,
            Mode::Heuristic,
            false,
        );
        assert!(picked.is_pass());
        assert_eq!(picked.rack, rack);
    }

    #[test]
    fn thresholds_are_configurable() {
        // nothing is efficient enough, and the special tiles cannot fall back.
        let game_config = game_config::make_english_game_config_with_thresholds(1.0, 1.0);
        let board = two_ways(&game_config);
        let rack = game_config.alphabet().make_rack("IZZ").unwrap();
        let dictionary = make_dictionary(&game_config, &["qi", "zz", "azz"]);
        let picked = pick(
            &game_config,
            &board,
            &rack,
            &dictionary,
            dictionary::Level::Expert,
            Mode::Heuristic,
            false,
        );
        assert_eq!(picked.words, vec!["QI"]);
        assert_eq!(picked.points, 11);
    }

    #[test]
    fn no_move_leaves_everything_alone() {
        let game_config = game_config::make_english_game_config();
        let board = two_ways(&game_config);
        let rack = game_config.alphabet().make_rack("XX").unwrap();
        let dictionary = make_dictionary(&game_config, &["qi"]);
        let picked = pick(
            &game_config,
            &board,
            &rack,
            &dictionary,
            dictionary::Level::Intermediate,
            Mode::Heuristic,
            false,
        );
        assert!(picked.is_pass());
        assert_eq!(picked.points, 0);
        assert_eq!(picked.board, board);
        assert_eq!(picked.rack, rack);
    }

    #[test]
    fn used_tiles_are_not_reused() {
        let game_config = game_config::make_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let mut rack = game_config.alphabet().make_rack("APPLE").unwrap();
        rack[2].on_board = true;
        let dictionary = make_dictionary(&game_config, &["apple", "pale"]);
        let picked = pick(
            &game_config,
            &board,
            &rack,
            &dictionary,
            dictionary::Level::Expert,
            Mode::Heuristic,
            true,
        );
        assert_eq!(picked.words, vec!["PALE"]);
        assert_eq!(picked.points, 6);
        assert!(picked.rack.iter().all(|tile| tile.on_board));
        assert_eq!(picked.rack.len(), 5);
    }

    #[test]
    fn thread_count_does_not_matter() {
        let game_config = game_config::make_english_game_config();
        let mut board = board::Board::new(game_config.board_layout());
        for (col, letter) in (5..).zip("QUIET".chars()) {
            let tile = game_config.alphabet().make_tile(letter).unwrap();
            board.place(matrix::RowCol(7, col), tile);
        }
        board.commit();
        let rack = game_config.alphabet().make_rack("TEASING").unwrap();
        let dictionary = make_dictionary(
            &game_config,
            &[
                "quiet", "quiets", "at", "ta", "it", "ti", "ea", "eat", "tea", "sat", "its",
                "quit", "in", "gin", "sign", "sting", "tie", "ties", "tins", "site", "get",
            ],
        );
        for mode in [Mode::Heuristic, Mode::Greedy] {
            let params = PickParams {
                board: &board,
                rack: &rack,
                dictionary: &dictionary,
                level: dictionary::Level::Expert,
                mode,
                is_first_turn: false,
            };
            let sequential = MovePicker::with_num_threads(&game_config, 1)
                .pick_a_move(&params)
                .unwrap();
            assert!(!sequential.is_pass());
            for num_threads in [2, 3, 8] {
                let parallel = MovePicker::with_num_threads(&game_config, num_threads)
                    .pick_a_move(&params)
                    .unwrap();
                assert_eq!(parallel, sequential);
            }
        }
    }

    #[test]
    fn configuration_errors() {
        let game_config = game_config::make_english_game_config();
        let board = board::Board::new(game_config.board_layout());
        let dictionary = make_dictionary(&game_config, &["apple"]);
        let picker = MovePicker::with_num_threads(&game_config, 1);
        let rack = game_config.alphabet().make_rack("ABCDEFGH").unwrap();
        assert!(picker
            .pick_a_move(&PickParams {
                board: &board,
                rack: &rack,
                dictionary: &dictionary,
                level: dictionary::Level::Expert,
                mode: Mode::Greedy,
                is_first_turn: true,
            })
            .is_err());

        let empty = dictionary::Dictionary::new();
        let rack = game_config.alphabet().make_rack("APPLE").unwrap();
        let err = picker
            .pick_a_move(&PickParams {
                board: &board,
                rack: &rack,
                dictionary: &empty,
                level: dictionary::Level::Expert,
                mode: Mode::Greedy,
                is_first_turn: true,
            })
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "dictionary for EXPERT is unavailable: not loaded"
        );
    }

    #[test]
    fn fallback_rule() {
        let at = |slot_idx, points, ratio| Candidate {
            slot_idx,
            perm_idx: 0,
            points,
            ratio,
        };
        // a better ratio wins over more points.
        let picked = replay_fallbacks(vec![at(2, 30, 0.1), at(0, 5, 0.0), at(1, 6, 0.2)]).unwrap();
        assert_eq!(picked.slot_idx, 1);
        // a scoreless-ratio move still needs more points.
        let picked = replay_fallbacks(vec![at(0, 5, 0.1), at(1, 30, 0.0)]).unwrap();
        assert_eq!(picked.slot_idx, 1);
        let picked = replay_fallbacks(vec![at(0, 5, 0.1), at(1, 9, 0.1), at(2, 4, 0.3)]).unwrap();
        assert_eq!(picked.slot_idx, 2);
        assert!(replay_fallbacks(vec![at(0, 0, 0.0)]).is_none());
    }

    #[test]
    fn modes_parse() {
        assert_eq!("Greedy".parse::<Mode>().unwrap(), Mode::Greedy);
        assert_eq!("heuristic".parse::<Mode>().unwrap(), Mode::Heuristic);
        assert!("smart".parse::<Mode>().is_err());
        assert_eq!(serde_json::to_string(&Mode::Greedy).unwrap(), "\"greedy\"");
    }
}
