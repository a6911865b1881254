// Copyright (C) 2020-2026 Andy Kurnia.

#[macro_use]
pub mod error;

pub mod alphabet;
pub mod board;
pub mod board_layout;
pub mod dictionary;
pub mod display;
pub mod fash;
pub mod game_config;
pub mod json;
pub mod matrix;
pub mod move_picker;
pub mod placement;
pub mod play_scorer;
pub mod rack;
pub mod slotgen;
