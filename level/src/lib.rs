pub mod config;
pub mod systems;

use anyhow::Result;
use bevy_ecs::prelude::*;
use clap::Parser;
use tracing::{info, warn};

use common::{ObstacleRegistry, PlayerPose, constants::DEFAULT_SEED};

use crate::{
    config::{LevelConfig, init_tracing},
    systems::{PlayerMarker, WalkScript, WalkStats, players_walk_system},
};

// ============================================================================
// CLI Argument Parsing
// ============================================================================

#[derive(Parser, Debug)]
#[command(author, version, about = "Hex maze level host", long_about = None)]
pub struct Args {
    /// Wall length
    #[arg(long, default_value_t = 1.0)]
    pub length: f32,

    /// Wall thickness and pillar radius
    #[arg(long, default_value_t = 0.1)]
    pub width: f32,

    /// Wall and pillar height
    #[arg(long, default_value_t = 0.2)]
    pub height: f32,

    /// Grid radius in cells
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub side: i32,

    /// Maze seed
    #[arg(long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Print the generated layout as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Number of scripted walk ticks to simulate
    #[arg(long, default_value_t = 0)]
    pub steps: u32,

    /// Distance covered by one walk tick
    #[arg(long, default_value_t = 0.05)]
    pub step_size: f32,

    /// Seed for the scripted walk, defaults to the maze seed
    #[arg(long)]
    pub walk_seed: Option<u64>,

    /// Tracing filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log: String,
}

// ============================================================================
// Level Host
// ============================================================================

pub fn run_level() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log);

    let config = LevelConfig::from_args(&args)?;
    run_with_config(&config)?;
    Ok(())
}

pub fn run_with_config(config: &LevelConfig) -> Result<WalkStats> {
    let layout = config.maze.generate()?;

    if config.print_json {
        print_layout(&layout)?;
    }

    // A fresh world per level; nothing carries over from a previous layout
    let registry = ObstacleRegistry::from_layout(&layout);
    info!(obstacles = registry.len(), spawn = ?layout.spawn, "level loaded");

    let mut world = World::new();
    world.insert_resource(registry);
    world.insert_resource(WalkScript::new(&config.walk));
    world.insert_resource(WalkStats::default());
    world.spawn((PlayerMarker, PlayerPose::new(layout.spawn)));

    let mut schedule = Schedule::default();
    schedule.add_systems(players_walk_system);

    for _ in 0..config.walk.steps {
        schedule.run(&mut world);
    }

    let stats = *world.resource::<WalkStats>();
    if config.walk.steps > 0 {
        info!(accepted = stats.accepted, blocked = stats.blocked, "walk finished");
        if stats.accepted == 0 {
            warn!("player never moved; spawn may be boxed in");
        }
    }

    Ok(stats)
}

#[cfg(feature = "json")]
fn print_layout(layout: &common::MazeLayout) -> Result<()> {
    println!("{}", layout.to_json()?);
    Ok(())
}

#[cfg(not(feature = "json"))]
fn print_layout(_layout: &common::MazeLayout) -> Result<()> {
    anyhow::bail!("layout printing needs the `json` feature")
}
