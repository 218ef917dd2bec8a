pub mod session_fsm;

use rand::seq::SliceRandom;
use rand::Rng;
use rust_fsm::StateMachine;

use crate::config::GameSettings;
use crate::console::Console;
use crate::dictionary::WordDictionary;
use crate::error::Error;
use crate::game::session_fsm::{SessionFsm, SessionFsmInput, SessionFsmState};
use crate::hangman::Difficulty;
use crate::metrics::{CORRECT_GUESSES, INCORRECT_GUESSES, ROUNDS_LOST, ROUNDS_STARTED, ROUNDS_WON};
use crate::round::{self, GuessOutcome, Round};

const CATEGORY_PROMPT: &str = "Choose a category number or press Enter for a random category:";
const DIFFICULTY_PROMPT: &str = "Choose a difficulty level or press Enter for a random one:";
const LETTER_PROMPT: &str = "Enter a letter:";
const PLAY_AGAIN_PROMPT: &str = "Do you want to play again? (enter a number):\n1. Yes\n2. No";

#[derive(Debug, PartialEq)]
enum MenuChoice {
    Random,
    Number(usize),
}

/// Drives a play session over a [`Console`]: category and difficulty
/// selection, the guess loop and the replay prompt.
pub struct Game<'a, C, R> {
    dictionary: &'a WordDictionary,
    console: C,
    rng: R,
    settings: GameSettings,
    fsm: StateMachine<SessionFsm>,
}

impl<'a, C: Console, R: Rng> Game<'a, C, R> {
    pub fn new(dictionary: &'a WordDictionary, console: C, rng: R, settings: GameSettings) -> Self {
        Game {
            dictionary,
            console,
            rng,
            settings,
            fsm: StateMachine::default(),
        }
    }

    pub fn state(&self) -> &SessionFsmState {
        self.fsm.state()
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Plays rounds until the player quits.
    pub fn run(&mut self) -> Result<(), Error> {
        self.fsm = StateMachine::default();
        self.console.display("Welcome to Hangman!");

        loop {
            let category = self.choose_category()?;
            self.process_event(&SessionFsmInput::CategoryChosen)?;
            let word = WordDictionary::pick_random_valid_word(
                self.dictionary.words_for(&category),
                &mut self.rng,
            )?;

            let difficulty = self.choose_difficulty()?;
            self.process_event(&SessionFsmInput::DifficultyChosen)?;

            let mut round = Round::new(&word, difficulty);
            ROUNDS_STARTED.inc();
            log::info!(
                "Round started. Category: '{category}', Difficulty: '{difficulty}', WordLength: '{}'.",
                word.chars().count()
            );

            self.play_round(&category, &mut round)?;
            self.process_event(&SessionFsmInput::RoundFinished)?;
            self.announce_outcome(&round)?;

            if self.play_again_prompt()? {
                self.process_event(&SessionFsmInput::PlayAgain)?;
                self.clear_screen();
            } else {
                self.process_event(&SessionFsmInput::Quit)?;
                self.console.display("Thanks for playing! See you next time!");
                return Ok(());
            }
        }
    }

    pub fn choose_category(&mut self) -> Result<String, Error> {
        let dictionary = self.dictionary;
        let categories = dictionary.categories();

        self.console.display(CATEGORY_PROMPT);
        for (index, category) in categories.iter().enumerate() {
            self.console.display(&format!("{}. {category}", index + 1));
        }

        loop {
            let input = self.console.read_line()?;
            match parse_menu_choice(&input, categories.len()) {
                Some(MenuChoice::Random) => {
                    let category = categories.choose(&mut self.rng).ok_or_else(|| {
                        Error::log_and_create_internal("The dictionary has no categories.")
                    })?;
                    self.console
                        .display(&format!("Random category: {category}"));
                    return Ok(category.to_string());
                }
                Some(MenuChoice::Number(number)) => return Ok(categories[number - 1].to_string()),
                None => self.reject(
                    &format!("Invalid input! Enter a number from 1 to {}.", categories.len()),
                    CATEGORY_PROMPT,
                ),
            }
        }
    }

    pub fn choose_difficulty(&mut self) -> Result<Difficulty, Error> {
        self.console.display(DIFFICULTY_PROMPT);
        for difficulty in Difficulty::ALL {
            self.console.display(&format!(
                "{}. {difficulty} ({} attempts)",
                difficulty.level(),
                difficulty.max_mistakes()
            ));
        }

        loop {
            let input = self.console.read_line()?;
            match parse_menu_choice(&input, Difficulty::ALL.len()) {
                Some(MenuChoice::Random) => {
                    let level = self.rng.gen_range(1..=Difficulty::ALL.len());
                    let difficulty = Difficulty::from_level(level)?;
                    self.console
                        .display(&format!("Random difficulty: {difficulty}"));
                    return Ok(difficulty);
                }
                Some(MenuChoice::Number(level)) => return Ok(Difficulty::from_level(level)?),
                None => self.reject(
                    &format!(
                        "Invalid input! Enter a number from 1 to {}.",
                        Difficulty::ALL.len()
                    ),
                    DIFFICULTY_PROMPT,
                ),
            }
        }
    }

    pub fn play_round(&mut self, category: &str, round: &mut Round) -> Result<(), Error> {
        while !round.is_over() {
            self.clear_screen();
            self.console.display(&format!("Category: {category}"));
            self.display_round(round)?;

            let letter = self.read_letter(round)?;
            let outcome = round.submit_letter(letter)?;
            match outcome {
                GuessOutcome::Correct => CORRECT_GUESSES.inc(),
                GuessOutcome::Incorrect => INCORRECT_GUESSES.inc(),
            }
            log::debug!(
                "Letter submitted. Letter: '{letter}', Outcome: '{outcome:?}', RemainingAttempts: '{}'.",
                round.remaining_attempts()
            );
        }
        Ok(())
    }

    /// Reads until the player types one letter that has not been guessed yet.
    pub fn read_letter(&mut self, round: &Round) -> Result<char, Error> {
        self.console.display(LETTER_PROMPT);

        loop {
            let input = self.console.read_line()?;
            match single_letter(&input) {
                Some(letter) if round.has_guessed(letter) => self.reject(
                    "This letter has already been guessed! Try another one.",
                    LETTER_PROMPT,
                ),
                Some(letter) => return Ok(round::normalize(letter)),
                None => self.reject("Invalid input! Enter a single letter.", LETTER_PROMPT),
            }
        }
    }

    pub fn play_again_prompt(&mut self) -> Result<bool, Error> {
        self.console.display(PLAY_AGAIN_PROMPT);

        loop {
            match self.console.read_line()?.trim() {
                "1" => return Ok(true),
                "2" => return Ok(false),
                _ => self.reject(
                    "Invalid choice! Enter 1 for \"Yes\" or 2 for \"No\".",
                    PLAY_AGAIN_PROMPT,
                ),
            }
        }
    }

    /// Rejected input gets the corrective message, then the same prompt again.
    fn reject(&mut self, message: &str, prompt: &str) {
        self.console.display(message);
        self.console.display(prompt);
    }

    fn display_round(&mut self, round: &Round) -> Result<(), Error> {
        self.console
            .display(&format!("Word: {}", round.masked_word()));
        self.console
            .display(&format!("Remaining attempts: {}", round.remaining_attempts()));
        self.console
            .display(&format!("Gallows: {}", round.mistakes().stage()?));
        self.console.display(&format!(
            "Guessed letters: {}",
            round.guessed_letters_display()
        ));
        Ok(())
    }

    fn announce_outcome(&mut self, round: &Round) -> Result<(), Error> {
        self.clear_screen();

        if round.is_word_fully_revealed() {
            ROUNDS_WON.inc();
            log::info!("Round finished. Outcome: 'won', Word: '{}'.", round.secret_word());
            self.console.display(&format!(
                "Congratulations! You guessed the word: {}",
                round.secret_word()
            ));
        } else {
            ROUNDS_LOST.inc();
            log::info!("Round finished. Outcome: 'lost', Word: '{}'.", round.secret_word());
            self.console
                .display(&format!("Gallows: {}", round.mistakes().stage()?));
            self.console.display(&format!(
                "Game over. The word was: {}",
                round.secret_word()
            ));
        }
        Ok(())
    }

    fn clear_screen(&mut self) {
        if self.settings.clear_screen {
            self.console
                .display(&"\n".repeat(self.settings.clear_screen_lines));
        }
    }

    fn process_event(&mut self, event: &SessionFsmInput) -> Result<(), Error> {
        match self.fsm.consume(event) {
            Ok(_) => {
                log::debug!("Session state changed. State: '{}'.", self.fsm.state());
                Ok(())
            }
            Err(error) => Err(Error::log_and_create_internal(&format!(
                "The fsm in state {:?} can't transition with an event {:?}. Error: '{error}'.",
                self.fsm.state(),
                event
            ))),
        }
    }
}

/// Empty input picks at random, otherwise a 1-based number up to `options`.
fn parse_menu_choice(input: &str, options: usize) -> Option<MenuChoice> {
    let input = input.trim();
    if input.is_empty() {
        return Some(MenuChoice::Random);
    }
    match input.parse::<usize>() {
        Ok(number) if (1..=options).contains(&number) => Some(MenuChoice::Number(number)),
        _ => None,
    }
}

fn single_letter(input: &str) -> Option<char> {
    let mut chars = input.trim().chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_alphabetic() => Some(letter),
        _ => None,
    }
}
