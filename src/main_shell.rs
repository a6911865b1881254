// Copyright (C) 2020-2026 Andy Kurnia.

mod rlhelper;

use tilewise::{
    board, dictionary, display, error, game_config, matrix, move_picker, placement, play_scorer,
};

static HELP: &str = "\
commands:
  help                  this text
  exit                  leave
  source FILE           run commands from FILE
  new                   empty board, empty rack
  show                  board, rack, level, mode
  rack LETTERS          replace the rack
  level [LEVEL]         beginner, intermediate, expert
  mode [MODE]           greedy, heuristic
  place COORD LETTERS   8h is across from row 8 col h, h8 is down;
                        . plays through a tile already there
  undo                  take back the last place/best
  check                 score and judge the tiles placed this turn
  best                  let the engine place tiles from the rack
  commit                set the tiles placed this turn
  words WORD...         look words up at the current level";

// "8h" is across from row 8 col h, "h8" is down from there.
fn parse_coord(dim: matrix::Dim, s: &str) -> Option<(matrix::RowCol, bool)> {
    let s = s.to_ascii_lowercase();
    let (down, col_str, row_str) = if s.starts_with(|c: char| c.is_ascii_digit()) {
        let i = s.find(|c: char| !c.is_ascii_digit())?;
        (false, &s[i..], &s[..i])
    } else {
        (true, s.get(..1)?, s.get(1..)?)
    };
    if col_str.len() != 1 {
        return None;
    }
    let col = col_str.as_bytes()[0].checked_sub(b'a')? as i8;
    let row = row_str.parse::<i8>().ok()?.checked_sub(1)?;
    dim.contains(row, col)
        .then_some((matrix::RowCol(row, col), down))
}

struct Session<'a> {
    game_config: &'a game_config::GameConfig<'a>,
    dictionary: &'a dictionary::Dictionary,
    move_picker: move_picker::MovePicker<'a>,
    board: board::Board,
    rack: Vec<board::Tile>,
    level: dictionary::Level,
    mode: move_picker::Mode,
    undo_stack: Vec<(board::Board, Vec<board::Tile>)>,
}

impl<'a> Session<'a> {
    fn new(
        game_config: &'a game_config::GameConfig<'a>,
        dictionary: &'a dictionary::Dictionary,
    ) -> Self {
        Self {
            game_config,
            dictionary,
            move_picker: move_picker::MovePicker::new(game_config),
            board: board::Board::new(game_config.board_layout()),
            rack: Vec::new(),
            level: dictionary::Level::Expert,
            mode: move_picker::Mode::Heuristic,
            undo_stack: Vec::new(),
        }
    }

    #[inline(always)]
    fn is_first_turn(&self) -> bool {
        !self.board.has_set_tiles()
    }

    fn save(&mut self) {
        self.undo_stack.push((self.board.clone(), self.rack.clone()));
    }

    fn show(&self) {
        display::print_board(&self.board);
        println!(
            "rack: {}  level: {}  mode: {}{}",
            display::fmt_rack(&self.rack),
            self.level,
            self.mode,
            if self.is_first_turn() { "  (first turn)" } else { "" }
        );
    }

    fn set_rack(&mut self, letters: &str) -> error::Returns<()> {
        let Some(rack) = self.game_config.alphabet().make_rack(letters) else {
            tilewise::return_error!(format!("invalid letters {:?}", letters));
        };
        if rack.len() > self.game_config.rack_size() as usize {
            tilewise::return_error!(format!(
                "rack can hold at most {} tiles",
                self.game_config.rack_size()
            ));
        }
        self.save();
        self.rack = rack;
        println!("rack: {}", display::fmt_rack(&self.rack));
        Ok(())
    }

    fn place(&mut self, coord: &str, letters: &str) -> error::Returns<()> {
        let dim = self.board.dim();
        let Some((start, down)) = parse_coord(dim, coord) else {
            tilewise::return_error!(format!("invalid coordinate {:?}", coord));
        };
        let (dr, dc) = if down { (1, 0) } else { (0, 1) };
        let mut tiles = Vec::with_capacity(letters.len());
        for (i, letter) in (0..).zip(letters.chars()) {
            let (row, col) = (start.row() + dr * i, start.col() + dc * i);
            if !dim.contains(row, col) {
                tilewise::return_error!(format!("{:?} runs off the board", letters));
            }
            let has_tile = self.board.has_tile(row, col);
            if letter == '.' {
                if !has_tile {
                    tilewise::return_error!(format!("nothing to play through at {}", i + 1));
                }
                continue;
            }
            if has_tile {
                tilewise::return_error!(format!("square {} is taken", i + 1));
            }
            let Some(tile) = self.game_config.alphabet().make_tile(letter) else {
                tilewise::return_error!(format!("invalid letter {:?}", letter));
            };
            tiles.push((matrix::RowCol(row, col), tile));
        }
        self.save();
        for (row_col, tile) in tiles {
            if let Some(rack_tile) = self
                .rack
                .iter_mut()
                .find(|rack_tile| !rack_tile.on_board && rack_tile.letter == tile.letter)
            {
                rack_tile.on_board = true;
            }
            self.board.place(row_col, tile);
        }
        self.show();
        Ok(())
    }

    fn undo(&mut self) -> error::Returns<()> {
        let Some((board, rack)) = self.undo_stack.pop() else {
            tilewise::return_error!("nothing to undo".into());
        };
        self.board = board;
        self.rack = rack;
        self.show();
        Ok(())
    }

    // Prints what the tiles placed this turn would score. Returns the points
    // if everything is legal.
    fn check(&self) -> error::Returns<Option<i16>> {
        let num_played = self.board.placed_tiles().count() as i8;
        let analysis = play_scorer::analyze_board(self.game_config, &self.board, num_played);
        println!("words: {:?}  points: {}", analysis.words, analysis.points);
        if let Err(err) = placement::validate_placement(&self.board, self.is_first_turn()) {
            println!("placement: {}", err);
            return Ok(None);
        }
        let verdict = self
            .dictionary
            .lexicon(self.level)?
            .validate_words(&analysis.words);
        if !verdict.valid {
            println!("invalid words: {:?}", verdict.invalid_words);
            return Ok(None);
        }
        if analysis.words.is_empty() {
            println!("no words formed");
            return Ok(None);
        }
        println!("ok");
        Ok(Some(analysis.points))
    }

    fn best(&mut self) -> error::Returns<()> {
        if self.board.placed_tiles().next().is_some() {
            tilewise::return_error!("commit or undo the tiles placed this turn first".into());
        }
        let t0 = std::time::Instant::now();
        let picked = self.move_picker.pick_a_move(&move_picker::PickParams {
            board: &self.board,
            rack: &self.rack,
            dictionary: self.dictionary,
            level: self.level,
            mode: self.mode,
            is_first_turn: self.is_first_turn(),
        })?;
        tracing::info!(
            elapsed_ms = t0.elapsed().as_millis() as u64,
            num_threads = self.move_picker.num_threads(),
            "picked"
        );
        if picked.is_pass() {
            println!("no move found");
            return Ok(());
        }
        self.save();
        self.board = picked.board;
        self.rack = picked.rack;
        self.show();
        println!("words: {:?}  points: {}", picked.words, picked.points);
        Ok(())
    }

    fn commit(&mut self) -> error::Returns<()> {
        if self.board.placed_tiles().next().is_none() {
            tilewise::return_error!("no tiles placed".into());
        }
        let Some(points) = self.check()? else {
            tilewise::return_error!("not committing".into());
        };
        let num_committed = self.board.commit();
        self.rack.retain(|tile| !tile.on_board);
        self.undo_stack.clear();
        println!("committed {} tiles for {} points", num_committed, points);
        self.show();
        Ok(())
    }

    fn words(&self, words: &[String]) -> error::Returns<()> {
        let verdict = self.dictionary.lexicon(self.level)?.validate_words(words);
        if verdict.valid {
            println!("valid");
        } else {
            println!("invalid: {:?}", verdict.invalid_words);
        }
        Ok(())
    }

    // Ok(false) to leave.
    fn run(&mut self, strings: &[String]) -> error::Returns<bool> {
        match strings[0].as_str() {
            "help" => {
                println!("{}", HELP);
            }
            "exit" => {
                return Ok(false);
            }
            "new" => {
                self.board = board::Board::new(self.game_config.board_layout());
                self.rack.clear();
                self.undo_stack.clear();
                self.show();
            }
            "show" => {
                self.show();
            }
            "rack" => {
                if strings.len() != 2 {
                    tilewise::return_error!("need LETTERS".into());
                }
                self.set_rack(&strings[1])?;
            }
            "level" => {
                if let Some(level) = strings.get(1) {
                    self.level = level.parse()?;
                }
                println!("level: {}", self.level);
            }
            "mode" => {
                if let Some(mode) = strings.get(1) {
                    self.mode = mode.parse()?;
                }
                println!("mode: {}", self.mode);
            }
            "place" => {
                if strings.len() != 3 {
                    tilewise::return_error!("need COORD LETTERS".into());
                }
                self.place(&strings[1], &strings[2])?;
            }
            "undo" => {
                self.undo()?;
            }
            "check" => {
                self.check()?;
            }
            "best" => {
                self.best()?;
            }
            "commit" => {
                self.commit()?;
            }
            "words" => {
                self.words(&strings[1..])?;
            }
            _ => {
                println!("invalid input, help for help");
            }
        }
        Ok(true)
    }
}

pub fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 2 {
        tilewise::return_error!(format!(
            "usage: {} <dictionary-dir>",
            args.first().map_or("shell", |s| s.as_str())
        ));
    }
    let game_config = game_config::make_english_game_config();
    let dictionary = dictionary::Dictionary::load_dir(&game_config, std::path::Path::new(&args[1]))?;
    let mut session = Session::new(&game_config, &dictionary);

    let mut rl = rlhelper::new_rl_editor()
        .map_err(|err| error::new(format!("cannot start line editor: {}", err)))?;
    let mut cmd_stack = Vec::<(String, Option<(String, usize)>)>::new();
    loop {
        if let Some((line, source)) = cmd_stack.pop() {
            if let Some((filename, line_num)) = source {
                println!("{}:{}> {}", filename, line_num, line);
            }
            match shell_words::split(&line) {
                Ok(strings) => {
                    if strings.is_empty() {
                        continue;
                    }
                    if strings[0] == "source" {
                        if strings.len() > 1 {
                            match std::fs::read_to_string(&strings[1]) {
                                Ok(whole_file) => {
                                    let v = cmd_stack.len();
                                    for (line_num, line) in whole_file.lines().enumerate() {
                                        cmd_stack.push((
                                            line.to_string(),
                                            Some((strings[1].clone(), line_num + 1)),
                                        ));
                                    }
                                    cmd_stack[v..].reverse();
                                }
                                Err(err) => {
                                    println!("cannot open file: {:?}", err);
                                }
                            }
                        } else {
                            println!("need another arg");
                        }
                        continue;
                    }
                    match session.run(&strings) {
                        Ok(true) => {}
                        Ok(false) => {
                            break;
                        }
                        Err(err) => {
                            println!("{}", err);
                        }
                    }
                }
                Err(err) => {
                    println!("Bad quoting: {:?}", err);
                }
            }
        } else {
            match rl.readline(">> ") {
                Ok(line) => {
                    let _ = rl.add_history_entry(line.as_str());
                    cmd_stack.push((line, None));
                }
                Err(rustyline::error::ReadlineError::Interrupted) => {
                    println!("CTRL-C");
                    break;
                }
                Err(rustyline::error::ReadlineError::Eof) => {
                    println!("CTRL-D");
                    break;
                }
                Err(err) => {
                    println!("Error: {:?}", err);
                    break;
                }
            }
        }
    }

    Ok(())
}
