use config::ConfigError;
use serde::Deserialize;
use serde_aux::prelude::deserialize_number_from_string;

use crate::dictionary::Language;

#[derive(Deserialize, Clone, Debug)]
pub struct Config {
    pub game: GameSettings,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct GameSettings {
    pub language: Language,
    pub clear_screen: bool,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub clear_screen_lines: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            language: Language::En,
            clear_screen: true,
            clear_screen_lines: 50,
        }
    }
}

impl Config {
    const ENV_PREFIX: &'static str = "HANGMAN";
    const ENV_SEPARATOR: &'static str = "__";

    pub fn get() -> Result<Config, ConfigError> {
        let base_path = std::env::current_dir()
            .map_err(|error| ConfigError::Message(format!("No current directory: {error}")))?;
        let configuration_directory = base_path.join("config");

        let environment: Environment = match std::env::var("ENVIRONMENT") {
            Ok(value) => value.try_into().map_err(ConfigError::Message)?,
            Err(_) => Environment::Dev,
        };

        let environment_filename = format!("{}.yaml", environment.as_str());
        let defaults = GameSettings::default();

        let config = config::Config::builder()
            .set_default("game.language", "en")?
            .set_default("game.clear_screen", defaults.clear_screen)?
            .set_default("game.clear_screen_lines", defaults.clear_screen_lines as i64)?
            .add_source(config::File::from(configuration_directory.join("base.yaml")).required(false))
            .add_source(
                config::File::from(configuration_directory.join(environment_filename))
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(Config::ENV_PREFIX)
                    .prefix_separator(Config::ENV_SEPARATOR)
                    .separator(Config::ENV_SEPARATOR),
            )
            .build()?;

        let config = config.try_deserialize::<Config>()?;
        log::debug!(
            "Config loaded. Environment: '{}', Language: '{:?}'.",
            environment.as_str(),
            config.game.language
        );
        Ok(config)
    }
}

#[derive(Debug, PartialEq)]
enum Environment {
    Dev,
    Prod,
}

const DEV: &str = "dev";
const PROD: &str = "prod";

impl Environment {
    fn as_str(&self) -> &'static str {
        match self {
            Environment::Dev => DEV,
            Environment::Prod => PROD,
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(string: String) -> Result<Self, Self::Error> {
        match string.to_lowercase().as_str() {
            DEV => Ok(Self::Dev),
            PROD => Ok(Self::Prod),
            other => Err(format!(
                "{other} is not a supported environment. Use either `{DEV}` or `{PROD}`.",
            )),
        }
    }
}
