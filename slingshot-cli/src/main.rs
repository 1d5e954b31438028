mod canvas;
mod sling_app;

use clap::{Parser, Subcommand};
use eframe::egui;
use sling_app::SlingApp;
use slingshot_core::{run_launch, BodyFate, DVec2, RemovalCause, SimulationConfig, SimulationState};
use std::path::{Path, PathBuf};

const WINDOW_TITLE: &str = "Gravitational Slingshot Effect";

#[derive(Parser)]
#[command(name = "slingshot")]
#[command(about = "Gravitational slingshot - fling bodies past a massive attractor", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive window
    Play {
        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Restart the session whenever the configuration file changes
        #[arg(long, requires = "config")]
        watch: bool,
    },
    /// Launch a single body without a window and report where it went
    Launch {
        /// Press point of the drag, as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: DVec2,
        /// Release point of the drag, as X,Y
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: DVec2,
        /// Give up after this many ticks
        #[arg(long, default_value_t = 10_000)]
        ticks: u64,
        /// JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Print the position after every tick
        #[arg(long)]
        trace: bool,
    },
    /// Print the default configuration as JSON
    Config,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { config, watch } => run_play(config, watch),
        Commands::Launch {
            from,
            to,
            ticks,
            config,
            trace,
        } => run_headless_launch(from, to, ticks, config.as_deref(), trace),
        Commands::Config => print_default_config(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&Path>) -> Result<SimulationConfig, Box<dyn std::error::Error>> {
    Ok(match path {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    })
}

fn run_play(config_path: Option<PathBuf>, watch: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path.as_deref())?;
    let state = SimulationState::new(config)?;
    let playfield = *state.playfield();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([playfield.width as f32, playfield.height as f32 + 32.0]),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(SlingApp::new(state, config_path, watch, cc)))),
    )?;

    Ok(())
}

fn run_headless_launch(
    from: DVec2,
    to: DVec2,
    ticks: u64,
    config_path: Option<&Path>,
    trace: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    let report = run_launch(config, from, to, ticks)?;

    if trace {
        for (tick, pos) in report.trajectory.iter().enumerate() {
            println!("{:>6} {:>12.4} {:>12.4}", tick, pos.x, pos.y);
        }
    }

    let fate = match report.fate {
        BodyFate::Removed(RemovalCause::OffBounds) => "left the playfield",
        BodyFate::Removed(RemovalCause::Collided) => "hit the attractor",
        BodyFate::InFlight => "still in flight",
    };
    println!(
        "launch velocity = ({:.6}, {:.6})",
        report.initial_velocity.x, report.initial_velocity.y
    );
    println!("fate = {} after {} ticks", fate, report.ticks);
    println!("final position = ({:.6}, {:.6})", report.final_pos.x, report.final_pos.y);
    println!("final velocity = ({:.6}, {:.6})", report.final_vel.x, report.final_vel.y);

    Ok(())
}

fn print_default_config() -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", SimulationConfig::default().to_json_pretty()?);
    Ok(())
}

/// Parse "X,Y" into a finite point
fn parse_point(s: &str) -> Result<DVec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{}'", s))?;
    let parse = |v: &str| -> Result<f64, String> {
        let v = v.trim();
        let value = v
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{}': {}", v, e))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(format!("coordinate '{}' must be finite", v))
        }
    };
    Ok(DVec2::new(parse(x)?, parse(y)?))
}
