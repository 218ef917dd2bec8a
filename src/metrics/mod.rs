use lazy_static::lazy_static;
use prometheus::{Encoder, IntCounter, Registry, TextEncoder};

lazy_static! {
    static ref REGISTRY: Registry = Registry::new();
    pub static ref ROUNDS_STARTED: IntCounter =
        IntCounter::new("hangman_rounds_started", "Rounds started in this session")
            .expect("metric cannot be created");
    pub static ref ROUNDS_WON: IntCounter =
        IntCounter::new("hangman_rounds_won", "Rounds won by revealing the word")
            .expect("metric cannot be created");
    pub static ref ROUNDS_LOST: IntCounter =
        IntCounter::new("hangman_rounds_lost", "Rounds lost by exhausting the mistake budget")
            .expect("metric cannot be created");
    pub static ref CORRECT_GUESSES: IntCounter =
        IntCounter::new("hangman_correct_guesses", "Letters found in the secret word")
            .expect("metric cannot be created");
    pub static ref INCORRECT_GUESSES: IntCounter =
        IntCounter::new("hangman_incorrect_guesses", "Letters missing from the secret word")
            .expect("metric cannot be created");
}

pub fn register_metrics() {
    for counter in [
        &*ROUNDS_STARTED,
        &*ROUNDS_WON,
        &*ROUNDS_LOST,
        &*CORRECT_GUESSES,
        &*INCORRECT_GUESSES,
    ] {
        if let Err(error) = REGISTRY.register(Box::new(counter.clone())) {
            log::error!("Could not register metric. Error: '{error}'.");
        }
    }
}

/// Registered metrics in the Prometheus text format.
pub fn gather_text() -> String {
    let encoder = TextEncoder::new();
    let mut buffer = Vec::new();
    if let Err(error) = encoder.encode(&REGISTRY.gather(), &mut buffer) {
        log::error!("Could not encode metrics. Error: '{error}'.");
    }
    match String::from_utf8(buffer) {
        Ok(text) => text,
        Err(error) => {
            log::error!("Metrics could not be from_utf8'd. Error: '{error}'.");
            String::default()
        }
    }
}
