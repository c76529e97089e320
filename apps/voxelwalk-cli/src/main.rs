use anyhow::Context;
use clap::{Parser, Subcommand};
use glam::Vec3;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use voxelwalk_controller::{ControllerConfig, FirstPersonController, PlayerState};
use voxelwalk_input::{Action, InputState};
use voxelwalk_kernel::{BlockWorld, HeightMap};
use voxelwalk_render::{DebugTextRenderer, RenderView, Renderer, Scene};

#[derive(Parser)]
#[command(name = "voxelwalk-cli", about = "Headless driver for the voxelwalk controller")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Walk the player through a walled arena and report where it ends up
    Simulate {
        /// Simulated time in seconds
        #[arg(short, long, default_value = "2.0")]
        seconds: f32,
        /// Frame time in seconds
        #[arg(long, default_value = "0.0166667")]
        dt: f32,
        /// Movement keys held for the whole run (w/a/s/d)
        #[arg(short, long, default_value = "w")]
        keys: String,
        /// Jump at this many seconds into the run
        #[arg(long)]
        jump_at: Option<f32>,
        /// Action keys applied before the first tick (q/e pan, f place, g remove)
        #[arg(long, default_value = "")]
        actions: String,
        /// Arena edge length in blocks
        #[arg(long, default_value = "16")]
        arena: usize,
        /// Controller configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print the effective controller configuration as JSON
    Config {
        /// Controller configuration file (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Print one debug frame of the arena from the starting position
    Render {
        /// Arena edge length in blocks
        #[arg(long, default_value = "16")]
        arena: usize,
        /// Shapes listed before the rest are summarized
        #[arg(long, default_value = "16")]
        max_listed: usize,
    },
}

fn load_config(path: Option<&Path>) -> anyhow::Result<ControllerConfig> {
    match path {
        Some(path) => ControllerConfig::load(path)
            .with_context(|| format!("loading controller config {}", path.display())),
        None => Ok(ControllerConfig::default()),
    }
}

/// Spawn near the middle of the arena, two blocks south of center, facing north.
fn start_state(arena: usize) -> PlayerState {
    let mid = arena as f32 / 2.0;
    let eye = Vec3::new(mid, 1.0, mid + 2.0);
    PlayerState::new(eye, eye - Vec3::Z)
}

fn apply_actions(controller: &mut FirstPersonController, world: &mut BlockWorld, actions: &str) {
    for key in actions.chars().filter(|c| !c.is_whitespace()) {
        let action = Action::from_key(key);
        match controller.apply_action(action, world) {
            Ok(()) if action.edits_world() => {
                tracing::info!(?action, blocks = world.block_count(), "world edited");
            }
            Ok(()) => {}
            Err(err) => tracing::warn!(?action, %err, "action rejected"),
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("voxelwalk-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("kernel: tick={}", BlockWorld::new().tick());
            println!("input: {}", voxelwalk_input::crate_info());
            println!("controller: {}", voxelwalk_controller::crate_info());
            println!("render: {}", voxelwalk_render::crate_info());
        }
        Commands::Simulate {
            seconds,
            dt,
            keys,
            jump_at,
            actions,
            arena,
            config,
        } => {
            anyhow::ensure!(dt > 0.0 && dt.is_finite(), "dt must be positive, got {dt}");
            anyhow::ensure!(seconds >= 0.0, "seconds must not be negative, got {seconds}");
            let config = load_config(config.as_deref())?;
            let input = InputState::parse_keys(&keys)?;

            let mut world = HeightMap::arena(arena).build();
            let mut controller = FirstPersonController::new(config, start_state(arena));
            apply_actions(&mut controller, &mut world, &actions);

            let ticks = (seconds / dt).round() as u64;
            let jump_tick = jump_at.map(|t| (t / dt).round() as u64);
            let mut blocked_ticks = 0u64;
            let mut landings = 0u64;
            println!("Simulate: {ticks} ticks of {dt:.4}s, keys={keys:?}");

            for tick in 0..ticks {
                if jump_tick == Some(tick) && !controller.jump() {
                    tracing::info!(tick, "jump ignored while airborne");
                }
                let report = controller.tick(dt, &input, &world);
                if report.collision.blocked_x || report.collision.blocked_z {
                    blocked_ticks += 1;
                }
                if report.gravity.landed {
                    landings += 1;
                }
                world.step();
            }

            let s = controller.state();
            println!(
                "Final: eye=({:.3}, {:.3}, {:.3}) velocity=({:.3}, {:.3}) grounded={}",
                s.eye.x, s.eye.y, s.eye.z, s.velocity.x, s.velocity.y, s.grounded
            );
            println!(
                "Terrain under eye: {:.2}, blocked ticks: {blocked_ticks}, landings: {landings}",
                world.terrain_height(s.eye.x, s.eye.z)
            );

            let replayed = BlockWorld::replay(world.events());
            println!(
                "World: blocks={}, tick={}, replay={}",
                world.block_count(),
                world.tick(),
                if replayed.state_hash() == world.state_hash() {
                    "OK"
                } else {
                    "MISMATCH"
                }
            );
        }
        Commands::Config { config } => {
            let config = load_config(config.as_deref())?;
            println!("{}", config.to_json_pretty()?);
        }
        Commands::Render { arena, max_listed } => {
            let world = HeightMap::arena(arena).build();
            let mut controller =
                FirstPersonController::new(ControllerConfig::default(), start_state(arena));
            controller.tick(0.0, &InputState::new(), &world);

            let scene = Scene::from_world(&world, arena as f32);
            let renderer = DebugTextRenderer { max_listed };
            print!("{}", renderer.render(&scene, &RenderView::from_controller(&controller)));
        }
    }

    Ok(())
}
