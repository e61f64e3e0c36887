mod script;
mod sink;

use std::error::Error;
use std::fs::File;
use std::path::{Path, PathBuf};

use clap::Parser;
use simplelog::{ColorChoice, CombinedLogger, Config, LevelFilter, TermLogger, TerminalMode, WriteLogger};
use terrawalk_edit::PlacementOutcome;
use terrawalk_sim::{SimConfig, Simulation, SlopeResolution, TomlInventoryStore, load_config_from_path};

use script::scripted_frame;
use sink::LoggingRenderer;

#[derive(Parser)]
#[command(name = "terrawalk", about = "Walk a procedural heightfield headlessly")]
struct Cli {
    /// TOML configuration file; built-in defaults when omitted
    #[arg(long)]
    config: Option<PathBuf>,
    /// Number of ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,
    /// Where the hotbar is loaded from and saved to
    #[arg(long, default_value = "inventory.toml")]
    inventory: PathBuf,
    /// Overrides the world seed from the configuration
    #[arg(long)]
    seed: Option<u32>,
    /// Also write debug logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
    /// Click to place every N ticks (0 never places)
    #[arg(long, default_value_t = 0)]
    place_every: u64,
}

fn init_logging(log_file: Option<&Path>) -> Result<(), Box<dyn Error>> {
    match log_file {
        Some(path) => {
            CombinedLogger::init(vec![
                TermLogger::new(LevelFilter::Info, Config::default(), TerminalMode::Mixed, ColorChoice::Auto),
                WriteLogger::new(LevelFilter::Debug, Config::default(), File::create(path)?),
            ])?;
        }
        None => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).try_init()?;
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> SimConfig {
    let Some(path) = path else {
        return SimConfig::default();
    };
    match load_config_from_path(path) {
        Ok(cfg) => {
            log::info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            log::warn!("failed to load config {}: {}; using defaults", path.display(), e);
            SimConfig::default()
        }
    }
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = init_logging(cli.log_file.as_deref()) {
        eprintln!("failed to initialize logging: {e}");
    }

    let mut config = load_config(cli.config.as_deref());
    if let Some(seed) = cli.seed {
        config.worldgen.world.seed = seed;
    }

    let mut sim = Simulation::new(config, TomlInventoryStore::new(&cli.inventory));
    let mut renderer = LoggingRenderer::default();
    let (mut placed, mut rejected, mut climbs, mut walls) = (0u64, 0u64, 0u64, 0u64);
    for t in 1..=cli.ticks {
        let report = sim.tick(&scripted_frame(t, cli.place_every), &mut renderer);
        for outcome in &report.placements {
            match outcome {
                PlacementOutcome::Placed { .. } => placed += 1,
                PlacementOutcome::Rejected(reason) => {
                    rejected += 1;
                    log::debug!("tick {}: placement rejected: {:?}", t, reason);
                }
            }
        }
        match report.step.slope {
            SlopeResolution::Climb { .. } | SlopeResolution::Ledge { .. } => climbs += 1,
            SlopeResolution::Wall { .. } => walls += 1,
            SlopeResolution::Level => {}
        }
    }

    let state = sim.state();
    let p = state.player.position;
    let chunk_stats = state.chunks.stats();
    let field_stats = state.chunks.field().stats();
    let index_stats = state.objects.stats();
    log::info!(
        "{} ticks: player at ({:.1}, {:.1}, {:.1}) {:?}",
        cli.ticks,
        p.x,
        p.y,
        p.z,
        state.player.motion
    );
    log::info!(
        "chunks: {} loaded, {} vertices, {} indices uploaded; {} visible",
        chunk_stats.loaded,
        renderer.vertices,
        renderer.indices,
        state.visibility.visible_chunks()
    );
    log::info!(
        "terrain: {} tiles, {} samples computed, {} cache hits",
        field_stats.tiles,
        field_stats.computed,
        field_stats.hits
    );
    log::info!(
        "objects: {} in {} buckets ({} trees), {} visible; {} placed, {} rejected",
        index_stats.objects,
        index_stats.buckets,
        chunk_stats.trees,
        state.visibility.visible_objects(),
        placed,
        rejected
    );
    log::info!("slope: {} slowed moves, {} blocked moves", climbs, walls);

    if let Err(e) = sim.save() {
        log::error!("failed to save inventory to {}: {}", cli.inventory.display(), e);
    }
}
