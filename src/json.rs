// Copyright (C) 2020-2026 Andy Kurnia.

use super::{board, dictionary, error, game_config, move_picker, placement, play_scorer};

// One request, tagged by "route". Field names are camelCase.
// board: 15 rows of 15 spaces, each {location, type, tile, isSet}.
// hand: tiles {letter, value, onBoard}.
#[derive(Debug, serde::Deserialize)]
#[serde(tag = "route", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum Question {
    ValidateWords {
        words: Vec<String>,
        #[serde(default = "default_level")]
        level: dictionary::Level,
    },
    ValidateTilePlacement {
        board: board::Board,
        #[serde(default)]
        first_turn: bool,
    },
    // tiles played this turn are counted from the hand.
    AnalyzeBoardConfiguration {
        board: board::Board,
        #[serde(default)]
        hand: Vec<board::Tile>,
    },
    FindBestWord {
        board: board::Board,
        hand: Vec<board::Tile>,
        #[serde(default = "default_level")]
        level: dictionary::Level,
        #[serde(default = "default_mode")]
        mode: move_picker::Mode,
        #[serde(default)]
        first_turn: bool,
        #[serde(default)]
        efficiency_threshold: Option<f64>,
        #[serde(default)]
        special_efficiency_threshold: Option<f64>,
    },
}

fn default_level() -> dictionary::Level {
    dictionary::Level::Expert
}

fn default_mode() -> move_picker::Mode {
    move_picker::Mode::Heuristic
}

// Scores are only meaningful for tiles worth what the alphabet says, and for
// hands that fit the rack.
fn check_tiles(
    game_config: &game_config::GameConfig,
    board: &board::Board,
    hand: &[board::Tile],
) -> error::Returns<()> {
    if hand.len() > game_config.rack_size() as usize {
        return_error!(format!(
            "hand has {} tiles, at most {} allowed",
            hand.len(),
            game_config.rack_size()
        ));
    }
    let alphabet = game_config.alphabet();
    let board_tiles = board.spaces().iter().filter_map(|space| space.tile.as_ref());
    for tile in board_tiles.chain(hand) {
        match alphabet.score(tile.letter) {
            Some(value) if value == tile.value => {}
            Some(value) => {
                return_error!(format!(
                    "tile {} is worth {}, not {}",
                    tile.letter, value, tile.value
                ));
            }
            None => {
                return_error!(format!("invalid letter {:?}", tile.letter));
            }
        }
    }
    Ok(())
}

pub struct Answerer<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    dictionary: &'a dictionary::Dictionary,
    num_threads: usize,
}

impl<'a> Answerer<'a> {
    pub fn new(
        game_config: &'a game_config::GameConfig<'a>,
        dictionary: &'a dictionary::Dictionary,
    ) -> Self {
        Self {
            game_config,
            dictionary,
            num_threads: num_cpus::get(),
        }
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads;
        self
    }

    pub fn answer(&self, question: &Question) -> error::Returns<serde_json::Value> {
        match question {
            Question::ValidateWords { words, level } => {
                let verdict = self.dictionary.lexicon(*level)?.validate_words(words);
                tracing::debug!(num_words = words.len(), valid = verdict.valid, "validated words");
                Ok(serde_json::to_value(verdict)?)
            }
            Question::ValidateTilePlacement { board, first_turn } => {
                Ok(match placement::validate_placement(board, *first_turn) {
                    Ok(()) => serde_json::json!({ "valid": true }),
                    Err(err) => serde_json::json!({ "valid": false, "error": err.to_string() }),
                })
            }
            Question::AnalyzeBoardConfiguration { board, hand } => {
                check_tiles(self.game_config, board, hand)?;
                let num_played = play_scorer::count_tiles_on_board(hand);
                let analysis = play_scorer::analyze_board(self.game_config, board, num_played);
                Ok(serde_json::json!({
                    "words": analysis.words,
                    "points": analysis.points }))
            }
            Question::FindBestWord {
                board,
                hand,
                level,
                mode,
                first_turn,
                efficiency_threshold,
                special_efficiency_threshold,
            } => {
                check_tiles(self.game_config, board, hand)?;
                let custom_game_config;
                let game_config = if efficiency_threshold.is_some()
                    || special_efficiency_threshold.is_some()
                {
                    custom_game_config = game_config::make_english_game_config_with_thresholds(
                        efficiency_threshold.unwrap_or(self.game_config.efficiency_threshold()),
                        special_efficiency_threshold
                            .unwrap_or(self.game_config.special_efficiency_threshold()),
                    );
                    &custom_game_config
                } else {
                    self.game_config
                };
                let picked = move_picker::MovePicker::with_num_threads(game_config, self.num_threads)
                    .pick_a_move(&move_picker::PickParams {
                        board,
                        rack: hand,
                        dictionary: self.dictionary,
                        level: *level,
                        mode: *mode,
                        is_first_turn: *first_turn,
                    })?;
                Ok(serde_json::to_value(picked)?)
            }
        }
    }

    pub fn answer_str(&self, data: &str) -> error::Returns<serde_json::Value> {
        let question = serde_json::from_str::<Question>(data)?;
        self.answer(&question)
    }
}
