use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use connect_four_engine::agent::RandomAgent;
use connect_four_engine::config::AppConfig;
use connect_four_engine::error::MoveError;
use connect_four_engine::game::{GameEngine, Player, RoundOutcome};
use connect_four_engine::session::{play_session, SessionStats};

/// Play or simulate four-in-a-row from the command line.
#[derive(Parser)]
#[command(name = "connect-four", about = "Four-in-a-row rules engine")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Drop tokens into the given columns (0-based). With no columns, read
    /// one token per line from stdin: a column, `r` to reset, `q` to quit.
    Play {
        columns: Vec<usize>,

        /// Print one JSON object per placement instead of text
        #[arg(long)]
        json: bool,
    },
    /// Random-vs-random session
    Simulate {
        /// Override number of rounds
        #[arg(long)]
        rounds: Option<usize>,

        /// Override the RNG seed
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the default configuration as TOML
    DefaultConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Command::DefaultConfig = cli.command {
        print!("{}", AppConfig::default_toml()?);
        return Ok(());
    }

    let mut app_config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { columns, json } => {
            let mut engine = GameEngine::with_config(app_config.engine.clone())
                .context("building engine")?;
            if columns.is_empty() {
                play_stdin(&mut engine, json)?;
            } else {
                for column in columns {
                    report_drop(&mut engine, column, json)?;
                }
            }
            if !json {
                print_summary(&engine);
            }
            Ok(())
        }
        Command::Simulate { rounds, seed } => {
            if let Some(rounds) = rounds {
                app_config.session.rounds = rounds;
            }
            if seed.is_some() {
                app_config.session.seed = seed;
            }
            app_config.validate().context("validating overrides")?;
            simulate(&app_config)
        }
        Command::DefaultConfig => Ok(()),
    }
}

fn play_stdin(engine: &mut GameEngine, json: bool) -> Result<()> {
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        match line.trim() {
            "" => continue,
            "q" | "Q" => break,
            "r" | "R" => {
                engine.reset();
                if !json {
                    println!("New round {} started!", engine.round());
                }
            }
            token => match token.parse::<usize>() {
                Ok(column) => report_drop(engine, column, json)?,
                Err(_) => eprintln!("Ignoring '{token}': expected a column, 'r' or 'q'"),
            },
        }
    }
    Ok(())
}

/// Apply one drop and describe the result. Rejected drops are reported, not
/// fatal.
fn report_drop(engine: &mut GameEngine, column: usize, json: bool) -> Result<()> {
    match engine.drop_token(column) {
        Ok(placement) => {
            if json {
                println!(
                    "{}",
                    serde_json::to_string(&placement).context("encoding placement")?
                );
                return Ok(());
            }
            println!(
                "{} -> row {}, column {}",
                engine.label(placement.owner),
                placement.row,
                placement.column
            );
            match placement.outcome {
                RoundOutcome::Win(player) => println!("{} wins!", engine.label(player)),
                RoundOutcome::Draw => println!("It's a draw!"),
                RoundOutcome::InProgress => {}
            }
        }
        Err(err) => {
            if json {
                let rejected = serde_json::json!({ "column": column, "error": err.to_string() });
                println!("{rejected}");
            } else if let MoveError::RoundAlreadyDecided(_) = err {
                println!("Round is over! Send 'r' to start a new one.");
            } else {
                println!("Rejected: {err}");
            }
        }
    }
    Ok(())
}

fn print_summary(engine: &GameEngine) {
    println!();
    println!("{}", engine.board());
    let scores = engine.current_scores();
    println!(
        "{}: {}  |  {}: {}",
        engine.label(Player::Red),
        scores.red,
        engine.label(Player::Yellow),
        scores.yellow
    );
    match engine.current_outcome() {
        RoundOutcome::InProgress => {
            println!("Next to move: {}", engine.label(engine.current_player()))
        }
        _ => println!("Round {}: {}", engine.round(), engine.describe_outcome()),
    }
}

fn simulate(app_config: &AppConfig) -> Result<()> {
    let session = &app_config.session;
    let mut engine =
        GameEngine::with_config(app_config.engine.clone()).context("building engine")?;
    let (mut red, mut yellow) = match session.seed {
        Some(seed) => (
            RandomAgent::with_seed(seed),
            RandomAgent::with_seed(seed.wrapping_add(1)),
        ),
        None => (RandomAgent::new(), RandomAgent::new()),
    };
    let mut stats = SessionStats::with_capacity(session.stats_window);

    play_session(&mut engine, &mut red, &mut yellow, session.rounds, &mut stats)
        .context("running session")?;

    let window = session.stats_window;
    let scores = engine.current_scores();
    println!("Rounds played: {}", stats.total_rounds());
    println!(
        "{}: {}  |  {}: {}  |  Draws: {}",
        engine.label(Player::Red),
        scores.red,
        engine.label(Player::Yellow),
        scores.yellow,
        stats.total_draws()
    );
    println!(
        "Last {} rounds: {} {:.1}%  {} {:.1}%  draw {:.1}%  avg length {:.1}",
        window.min(stats.total_rounds()),
        engine.label(Player::Red),
        stats.win_rate(Player::Red, window) * 100.0,
        engine.label(Player::Yellow),
        stats.win_rate(Player::Yellow, window) * 100.0,
        stats.draw_rate(window) * 100.0,
        stats.average_round_length(window)
    );
    Ok(())
}
