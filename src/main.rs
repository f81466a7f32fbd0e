//! Pal Quest terminal driver.
//!
//! Reads one button per line from stdin (`up`, `down`, `left`, `right`, `a`,
//! `b`) and prints a frame after every change. Deferred battle steps fire on
//! their real delays while waiting for input.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use pal_quest::{Button, GameConfig, GameSession};
use tokio::io::{stdin, AsyncBufReadExt, BufReader};
use tokio::time::{sleep, Instant};

#[derive(Parser, Debug)]
#[command(name = "pal-quest", about = "Explore, battle and catch wild Pals")]
struct Args {
    /// RON file overriding the default game configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for a reproducible world and battles
    #[arg(long)]
    seed: Option<u64>,

    /// Print each frame as a JSON view instead of text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut session = GameSession::new(config)?;
    print_frame(&session, args.json)?;

    let mut lines = BufReader::new(stdin()).lines();
    let mut last_tick = Instant::now();

    loop {
        let wait = session.next_step_in().map(Duration::from_millis);

        tokio::select! {
            line = lines.next_line() => {
                tick(&mut session, &mut last_tick);
                let Some(line) = line? else {
                    log::info!("Input closed, exiting");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                match line.parse::<Button>() {
                    Ok(button) => session.handle_input(button),
                    Err(e) => {
                        eprintln!("{}", e);
                        continue;
                    }
                }
                session.take_events();
                print_frame(&session, args.json)?;
            }
            _ = sleep_or_wait(wait) => {
                tick(&mut session, &mut last_tick);
                if !session.take_events().is_empty() {
                    print_frame(&session, args.json)?;
                }
            }
        }
    }

    Ok(())
}

/// Move the session clock forward by the wall time since the last tick.
fn tick(session: &mut GameSession, last_tick: &mut Instant) {
    let now = Instant::now();
    let elapsed = now.duration_since(*last_tick).as_millis() as u64;
    *last_tick = now;
    session.advance(elapsed);
}

async fn sleep_or_wait(wait: Option<Duration>) {
    match wait {
        Some(duration) => sleep(duration).await,
        None => std::future::pending::<()>().await,
    }
}

fn print_frame(session: &GameSession, json: bool) -> Result<(), serde_json::Error> {
    let view = session.view();
    if json {
        println!("{}", serde_json::to_string(&view)?);
    } else {
        println!("{}", view);
    }
    Ok(())
}
