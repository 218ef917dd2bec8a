use std::fmt;

use rust_fsm::state_machine;

/*
 * Select category
 * Select difficulty
 * Guess letters until the word is revealed or the budget is exhausted
 * Round over, then play again or quit
 */
state_machine! {
    derive(Debug, Clone, PartialEq)
    pub SessionFsm(SelectCategory)

    SelectCategory => {
        CategoryChosen => SelectDifficulty
    },
    SelectDifficulty => {
        DifficultyChosen => GuessLoop
    },
    GuessLoop => {
        RoundFinished => RoundOver
    },
    RoundOver => {
        PlayAgain => SelectCategory,
        Quit => End,
    }
}

impl fmt::Display for SessionFsmState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[cfg(test)]
mod tests {
    use rust_fsm::StateMachine;

    use super::{SessionFsm, SessionFsmInput, SessionFsmState};

    #[test]
    fn session_goes_through_a_round_and_back() {
        let mut fsm: StateMachine<SessionFsm> = StateMachine::default();
        assert_eq!(fsm.state(), &SessionFsmState::SelectCategory);

        for input in [
            SessionFsmInput::CategoryChosen,
            SessionFsmInput::DifficultyChosen,
            SessionFsmInput::RoundFinished,
            SessionFsmInput::PlayAgain,
        ] {
            assert!(fsm.consume(&input).is_ok());
        }

        assert_eq!(fsm.state(), &SessionFsmState::SelectCategory);
    }

    #[test]
    fn quit_is_only_allowed_after_a_round() {
        let mut fsm: StateMachine<SessionFsm> = StateMachine::default();

        assert!(fsm.consume(&SessionFsmInput::Quit).is_err());
        assert_eq!(fsm.state(), &SessionFsmState::SelectCategory);
    }
}
