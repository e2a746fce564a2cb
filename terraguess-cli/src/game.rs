//! Interactive terminal game loop.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::watch;
use tracing::info;

use terraguess::config::ConfigFile;
use terraguess::provider::{
    AsyncReqwestClient, GoogleReverseGeocoder, GoogleStreetViewLocator,
};
use terraguess::registry::CountryRegistry;
use terraguess::round::{Round, RoundEngine, RoundError, RoundState};
use terraguess::score::{GuessEvaluator, Verdict};

use crate::error::CliError;

/// Runs the game loop until the player quits.
///
/// Each iteration starts a round, waits for it to become playable,
/// prints the panorama link, and scores guesses until the player names
/// the country or asks for the next round.
pub async fn run(config: ConfigFile) -> Result<(), CliError> {
    let api_key = config
        .provider
        .google_api_key
        .clone()
        .ok_or(CliError::MissingApiKey)?;

    let locator = GoogleStreetViewLocator::new(AsyncReqwestClient::new()?, api_key.clone());
    let geocoder = GoogleReverseGeocoder::new(AsyncReqwestClient::new()?, api_key);
    let engine = RoundEngine::new(locator, geocoder, config.sampler);
    let evaluator = GuessEvaluator::new(Arc::new(CountryRegistry::new()));

    let mut state_rx = engine.subscribe();
    let mut input = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    println!("TerraGuess {} - guess the country!", terraguess::VERSION);
    println!("Commands: 'next' for a new round, 'quit' to exit.");

    'rounds: loop {
        println!();
        println!("Finding a panorama somewhere on Earth...");
        engine.new_round();

        let round = match wait_for_round(&mut state_rx).await {
            Ok(round) => round,
            Err(e) => {
                // Round-level failure; offer another try
                println!("😞 {e}");
                if !prompt_retry(&mut input, &mut stdout).await? {
                    break 'rounds;
                }
                continue 'rounds;
            }
        };

        info!(country = round.country(), "Round ready");
        println!("📍 Look around: {}", panorama_url(&round));

        loop {
            stdout.write_all(b"Guess the country: ").await?;
            stdout.flush().await?;

            let Some(line) = input.next_line().await? else {
                break 'rounds;
            };
            match line.trim() {
                "" => continue,
                "quit" | "exit" => break 'rounds,
                "next" => continue 'rounds,
                guess => {
                    let outcome = evaluator.evaluate(&round, guess);
                    println!("{}", outcome.message);
                    if outcome.verdict == Verdict::Correct {
                        continue 'rounds;
                    }
                }
            }
        }
    }

    println!("Thanks for playing!");
    Ok(())
}

/// Waits for the current round to settle, returning the round or the
/// failure exactly as observed on the state channel.
async fn wait_for_round(
    state_rx: &mut watch::Receiver<RoundState>,
) -> Result<Round, RoundError> {
    loop {
        {
            let state = state_rx.borrow_and_update();
            match &*state {
                RoundState::Ready(round) => return Ok(round.clone()),
                RoundState::Failed(e) => return Err(e.clone()),
                _ => {}
            }
        }
        // The engine outlives this loop, so the channel cannot close
        state_rx
            .changed()
            .await
            .expect("round engine dropped while waiting");
    }
}

async fn prompt_retry(
    input: &mut tokio::io::Lines<BufReader<tokio::io::Stdin>>,
    stdout: &mut tokio::io::Stdout,
) -> Result<bool, CliError> {
    stdout.write_all(b"Try another round? [Y/n] ").await?;
    stdout.flush().await?;
    match input.next_line().await? {
        Some(line) => Ok(!matches!(line.trim(), "n" | "N" | "no" | "quit")),
        None => Ok(false),
    }
}

/// Google Maps pano viewer link for the round's snapped coordinate.
fn panorama_url(round: &Round) -> String {
    let coord = round.coordinate();
    format!(
        "https://www.google.com/maps/@?api=1&map_action=pano&viewpoint={},{}",
        coord.lat, coord.lon
    )
}
