use rand::rngs::OsRng;

use crate::config::Config;
use crate::console::StdConsole;
use crate::dictionary::WordDictionary;
use crate::error::Error;
use crate::game::Game;
use crate::metrics;

/// Runs one interactive session on stdin/stdout.
pub fn start_session(config: Config) -> Result<(), Error> {
    metrics::register_metrics();

    let dictionary = WordDictionary::builtin(config.game.language);
    log::info!(
        "Dictionary loaded. Language: '{:?}', Categories: '{}'.",
        config.game.language,
        dictionary.categories().join(",")
    );

    let mut game = Game::new(&dictionary, StdConsole::stdio(), OsRng, config.game);
    let result = game.run();

    log::debug!("Session metrics:\n{}", metrics::gather_text());
    result
}
