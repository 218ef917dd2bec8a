pub mod config;
pub mod console;
pub mod dictionary;
pub mod error;
pub mod game;
pub mod hangman;
pub mod metrics;
pub mod round;
pub mod startup;
