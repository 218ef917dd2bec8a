use std::process::ExitCode;

use hangman::config::Config;
use hangman::error::Error;

fn main() -> ExitCode {
    std_logger::Config::logfmt().init();

    let config = match Config::get() {
        Ok(config) => config,
        Err(error) => {
            log::error!("Unable to get the Config. Error: '{error}'.");
            return ExitCode::FAILURE;
        }
    };

    match hangman::startup::start_session(config) {
        Ok(()) | Err(Error::InputClosed) => ExitCode::SUCCESS,
        Err(error) => {
            log::error!("The session stopped unexpectedly. Error: '{error}'.");
            ExitCode::FAILURE
        }
    }
}
