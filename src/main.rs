//! Cube Trainer - Main entry point
//!
//! Prints scrambles from the command line or runs the interactive trainer.

use anyhow::Context;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stdout;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::EnvFilter;

use cubetrainer::app::App;
use cubetrainer::cli::{Cli, Commands};
use cubetrainer::{JsonLinesSink, PresentationSink, Scramble, ScrambleEngine, TrainerConfig};

/// Initialize logging; `RUST_LOG` overrides the default level
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Main application entry point
fn main() -> anyhow::Result<()> {
    init_logging();
    info!("cubetrainer starting up");

    let cli = Cli::parse_args();
    debug!("CLI arguments parsed");

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Some(Commands::Validate { path }) => {
            info!("Validating configuration file: {:?}", path);
            match TrainerConfig::load_from_file(&path).and_then(|c| c.validate()) {
                Ok(()) => {
                    println!("✓ Configuration file is valid: {}", path.display());
                }
                Err(e) => {
                    error!("Configuration validation failed: {:#}", e);
                    eprintln!("✗ Configuration validation failed: {:#}", e);
                    std::process::exit(1);
                }
            }
        }
        Some(Commands::InitConfig { path }) => {
            TrainerConfig::default().save_to_file(&path)?;
            println!("✓ Wrote default configuration to {}", path.display());
        }
        Some(Commands::Scramble {
            length,
            count,
            seed,
            explain,
            json,
        }) => {
            let length = length.unwrap_or(config.scramble_length);
            let mut engine = match seed.or(config.seed) {
                Some(seed) => ScrambleEngine::seeded(seed),
                None => ScrambleEngine::new(),
            };
            print_scrambles(&mut engine, length, count, explain, json)?;
        }
        Some(Commands::Explain { moves }) => explain_moves(&moves)?,
        Some(Commands::Tui) | None => {
            info!("Launching terminal trainer");
            run_tui(config)?;
        }
    }

    Ok(())
}

/// Load the config given on the command line, or defaults
fn load_config(path: Option<&Path>) -> anyhow::Result<TrainerConfig> {
    let Some(path) = path else {
        return Ok(TrainerConfig::default());
    };
    let config = TrainerConfig::load_from_file(path)?;
    config
        .validate()
        .with_context(|| format!("Invalid configuration in {}", path.display()))?;
    Ok(config)
}

fn print_scrambles(
    engine: &mut ScrambleEngine,
    length: usize,
    count: usize,
    explain: bool,
    json: bool,
) -> anyhow::Result<()> {
    let mut sink = json.then(|| JsonLinesSink::new(stdout().lock()));

    for _ in 0..count {
        let (scramble, explanations) = engine.generate_with_explanation(length)?;
        if let Some(sink) = sink.as_mut() {
            sink.present_scramble(&scramble, &explanations)?;
            continue;
        }

        println!("{}", scramble);
        if explain {
            for (i, text) in explanations.iter().enumerate() {
                println!("{:>3}. {}", i + 1, text);
            }
            println!();
        }
    }
    Ok(())
}

fn explain_moves(moves: &str) -> anyhow::Result<()> {
    let scramble: Scramble = moves.parse()?;
    for (i, mv) in scramble.iter().enumerate() {
        println!("{:>3}. {:<3} {}", i + 1, mv.to_string(), mv.explain());
    }
    if !scramble.is_valid() {
        eprintln!("note: this sequence turns the same axis on consecutive moves");
    }
    Ok(())
}

/// Run the terminal trainer
fn run_tui(config: TrainerConfig) -> anyhow::Result<()> {
    debug!("Initializing terminal for TUI mode");

    enable_raw_mode().context("Failed to enable raw mode")?;
    crossterm::execute!(stdout(), crossterm::terminal::EnterAlternateScreen)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout());
    let result = Terminal::new(backend)
        .context("Failed to create terminal")
        .and_then(|mut terminal| {
            let mut app = App::new(config)?;
            app.run(&mut terminal)?;
            Ok(())
        });

    // Cleanup terminal (always attempt cleanup, even if app failed)
    let _ = disable_raw_mode();
    let _ = crossterm::execute!(stdout(), crossterm::terminal::LeaveAlternateScreen);

    result
}
