use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, Level};

use crate::config::{GameConfig, DEFAULT_SPIN_DEG_PER_SEC, DEFAULT_STAR_COUNT, DEFAULT_TICK_MS};
use crate::core::engine::Engine;
use crate::games::globe::{DistanceGame, GlobeGame};
use crate::geo::{haversine_km, CountryCatalog};
use crate::headless;

#[derive(Parser)]
#[command(name = "globeterm")]
#[command(about = "🌍 Guess the hidden country by its distance from your guesses")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Seed for the target draw (and the starfield)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Play against a fixed target country
    #[arg(long, global = true)]
    pub target: Option<String>,

    /// Write logs to this file (the TUI never logs to the terminal)
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Play on the terminal globe (default)
    Play {
        /// Milliseconds between globe animation frames
        #[arg(long, default_value_t = DEFAULT_TICK_MS)]
        tick_ms: u64,

        /// Auto-spin speed in degrees per second
        #[arg(long, default_value_t = DEFAULT_SPIN_DEG_PER_SEC)]
        spin: f64,

        /// Number of background stars
        #[arg(long, default_value_t = DEFAULT_STAR_COUNT)]
        stars: usize,
    },
    /// Read guesses from stdin, write one JSON result per line
    Headless,
    /// List the countries that can be guessed
    List,
    /// Great-circle distance between two countries
    Distance {
        from: String,
        to: String,
    },
}

impl Cli {
    pub fn config(&self) -> GameConfig {
        let mut config = GameConfig {
            seed: self.seed,
            target: self.target.clone(),
            log_file: self.log_file.clone(),
            ..GameConfig::default()
        };
        if let Some(Commands::Play { tick_ms, spin, stars }) = &self.command {
            config.tick_rate = Duration::from_millis(*tick_ms);
            config.spin_deg_per_sec = *spin;
            config.star_count = *stars;
        }
        config
    }
}

fn init_logging(log_file: Option<&Path>, verbose: u8, tui: bool) -> Result<()> {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };

    match log_file {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("cannot open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // stdout belongs to the TUI
        None if tui => {}
        None => {
            tracing_subscriber::fmt().with_max_level(level).with_writer(io::stderr).init();
        }
    }
    Ok(())
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = cli.config();
    let tui = matches!(cli.command, None | Some(Commands::Play { .. }));
    init_logging(config.log_file.as_deref(), cli.verbose, tui)?;

    let catalog = CountryCatalog::load().context("built-in country table is broken")?;
    info!(countries = catalog.len(), "catalog loaded");

    match cli.command {
        None | Some(Commands::Play { .. }) => {
            let game = GlobeGame::new(catalog, &config)?;
            let terminal = ratatui::init();
            let result = Engine::new(game).run(terminal).await;
            ratatui::restore();

            let game = result?;
            let dg = game.distance_game();
            if dg.is_active() {
                println!("👋 The country was {}. Score: {}", dg.target().name(), dg.score());
            } else {
                println!("🎉 Found {} with score {}", dg.target().name(), dg.score());
            }
        }

        Some(Commands::Headless) => {
            let mut game = match (&config.target, config.seed) {
                (Some(name), _) => DistanceGame::with_target(catalog, name)?,
                (None, Some(seed)) => DistanceGame::new(catalog, &mut StdRng::seed_from_u64(seed)),
                (None, None) => DistanceGame::new(catalog, &mut rand::rng()),
            };
            headless::run(&mut game, io::stdin().lock(), io::stdout().lock())?;
        }

        Some(Commands::List) => {
            for country in catalog.iter() {
                println!("{:<34} {:>11.6} {:>10.6}", country.name(), country.lon_deg(), country.lat_deg());
            }
        }

        Some(Commands::Distance { from, to }) => {
            let a = catalog.lookup(&from)?;
            let b = catalog.lookup(&to)?;
            println!("{} → {}: {:.0} km", from, to, haversine_km(a, b));
        }
    }

    Ok(())
}
