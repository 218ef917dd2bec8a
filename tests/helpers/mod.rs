use std::collections::VecDeque;

use hangman::config::GameSettings;
use hangman::console::Console;
use hangman::dictionary::{Category, WordDictionary};
use hangman::error::Error;

/// Replays scripted player lines and records everything displayed.
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    pub displayed: Vec<String>,
}

impl ScriptedConsole {
    pub fn new(inputs: &[&str]) -> Self {
        ScriptedConsole {
            inputs: inputs.iter().map(|input| input.to_string()).collect(),
            displayed: Vec::new(),
        }
    }

    pub fn count(&self, text: &str) -> usize {
        self.displayed
            .iter()
            .filter(|line| line.contains(text))
            .count()
    }
}

impl Console for ScriptedConsole {
    fn display(&mut self, text: &str) {
        self.displayed.push(text.to_string());
    }

    fn read_line(&mut self) -> Result<String, Error> {
        self.inputs.pop_front().ok_or(Error::InputClosed)
    }
}

pub fn settings() -> GameSettings {
    GameSettings {
        clear_screen: false,
        ..GameSettings::default()
    }
}

pub fn single_word_dictionary(category: &str, word: &str) -> WordDictionary {
    WordDictionary::new(vec![Category {
        name: category.to_string(),
        words: vec![word.to_string()],
    }])
}
