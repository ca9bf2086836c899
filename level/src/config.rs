use anyhow::Result;
use tracing_subscriber::EnvFilter;

use common::protocol::MazeParams;

use crate::Args;

// ============================================================================
// Logging
// ============================================================================

// RUST_LOG wins over the --log flag so a single run can be made louder without editing scripts.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

// ============================================================================
// Level Configuration
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkConfig {
    pub steps: u32,
    pub step_size: f32,
    pub seed: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LevelConfig {
    pub maze: MazeParams,
    pub walk: WalkConfig,
    pub print_json: bool,
}

impl LevelConfig {
    pub fn from_args(args: &Args) -> Result<Self> {
        anyhow::ensure!(
            args.step_size.is_finite() && args.step_size > 0.0,
            "step size must be finite and positive, got {}",
            args.step_size
        );

        Ok(Self {
            maze: MazeParams {
                length: args.length,
                width: args.width,
                height: args.height,
                side: args.side,
                seed: args.seed,
            },
            walk: WalkConfig {
                steps: args.steps,
                step_size: args.step_size,
                seed: args.walk_seed.unwrap_or(args.seed),
            },
            print_json: args.json,
        })
    }
}
