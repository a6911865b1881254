// Copyright (C) 2020-2026 Andy Kurnia.

use std::io::Read;
use tilewise::{dictionary, error, game_config, json};

// question: one JSON object tagged by "route", e.g.
//   {"route":"validateWords","words":["cat","tac"]}
//   {"route":"validateTilePlacement","board":[...],"firstTurn":true}
//   {"route":"analyzeBoardConfiguration","board":[...],"hand":[...]}
//   {"route":"findBestWord","board":[...],"hand":[...],"level":"EXPERT",
//    "mode":"heuristic","firstTurn":false}
// the answer goes to stdout, logs go to stderr.
pub fn main() -> error::Returns<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = std::env::args().collect::<Vec<_>>();
    if args.len() < 2 || args.len() > 3 {
        tilewise::return_error!(format!(
            "usage: {} <dictionary-dir> [question.json]",
            args.first().map_or("json", |s| s.as_str())
        ));
    }

    let game_config = game_config::make_english_game_config();
    let t0 = std::time::Instant::now();
    let dictionary = dictionary::Dictionary::load_dir(&game_config, std::path::Path::new(&args[1]))?;
    tracing::info!(elapsed_ms = t0.elapsed().as_millis() as u64, "dictionary ready");

    let data = if let Some(filename) = args.get(2) {
        std::fs::read_to_string(filename)?
    } else {
        let mut data = String::new();
        std::io::stdin().read_to_string(&mut data)?;
        data
    };

    let t0 = std::time::Instant::now();
    let ret = json::Answerer::new(&game_config, &dictionary).answer_str(&data)?;
    tracing::info!(elapsed_ms = t0.elapsed().as_millis() as u64, "answered");
    println!("{}", ret);

    Ok(())
}
