use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum DomainError {
    #[error("Cannot pick a word from an empty list of words.")]
    InvalidInput,
    #[error("None of the candidate words is valid. Candidates: '{0}'.")]
    NoValidCandidates(usize),
    #[error("There is no stage table for the mistake budget. MaxMistakes: '{0}'.")]
    UnsupportedDifficulty(u8),
    #[error("Unknown difficulty level. Level: '{0}', Levels: '1..=3'.")]
    UnknownDifficultyLevel(usize),
    #[error("The letter has already been guessed in this round. Letter: '{0}'.")]
    DuplicateGuess(char),
}
