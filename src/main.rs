//! Guess Duel - terminal front end.
//!
//! Reads the human's guesses from stdin, prints the game log, and waits a
//! moment before firing each computer turn.

mod cli;

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use guess_duel::{describe, status_line, GameEvent, GuessingGameEngine, Phase, TracingSink};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;
    info!(?config, "starting guess-duel");

    let mut engine = match cli.seed {
        Some(seed) => GuessingGameEngine::new(seed),
        None => GuessingGameEngine::from_entropy(),
    };
    engine.subscribe(TracingSink);
    engine.subscribe(|event: &GameEvent| {
        for line in describe(event) {
            println!("{}", line);
        }
    });

    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        engine.start_new_game(config.clone())?;
        if !play_game(&mut engine, cli.think_delay(), &mut input)? {
            break;
        }
        if !ask_play_again(&mut input)? {
            break;
        }
    }

    Ok(())
}

/// Play one game to the end. Returns `false` if input ran out.
fn play_game(engine: &mut GuessingGameEngine, think: Duration, input: &mut impl BufRead) -> Result<bool> {
    while engine.phase() == Phase::InProgress {
        if let Some(ticket) = engine.pending_computer_turn() {
            println!("Computer is thinking...");
            thread::sleep(think);
            engine.run_scheduled_turn(ticket)?;
            continue;
        }

        if let Some(state) = engine.state() {
            println!("{}", status_line(state));
        }
        print!("Your guess: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            debug!("stdin closed mid-game");
            return Ok(false);
        }
        if line.trim().is_empty() {
            continue;
        }

        match engine.submit_human_guess(&line) {
            Ok(_) => {}
            Err(err) if err.is_input_error() => println!("{}", err),
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(state) = engine.state() {
        println!("{}", status_line(state));
    }
    Ok(true)
}

fn ask_play_again(input: &mut impl BufRead) -> Result<bool> {
    print!("Play again? [y/N] ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(false);
    }
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
