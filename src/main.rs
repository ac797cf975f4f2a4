//! Tidy Kitchen headless runner.
//!
//! Builds the kitchen world, optionally replays an input script, and runs the
//! frame schedule at a fixed step:
//!
//! 1. Load `config.ini` (defaults when missing) and the level layout
//! 2. Start the audio thread and register observers
//! 3. For every frame: apply due script steps, advance time, run the schedule
//! 4. Report zone progress and stop the audio thread
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --level demos/kitchen.json --script demos/tour.json
//! ```

use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;

use tidykitchen::components::zone::PlacementZone;
use tidykitchen::game::{build_schedule, setup_world};
use tidykitchen::inputscript::InputScript;
use tidykitchen::level::LevelLayout;
use tidykitchen::resources::audio::{setup_audio, shutdown_audio};
use tidykitchen::resources::gameconfig::GameConfig;
use tidykitchen::resources::input::InputState;
use tidykitchen::resources::levelprogress::LevelProgress;
use tidykitchen::systems::time::update_world_time;

const FIXED_DT: f32 = 1.0 / 60.0;

/// Tidy Kitchen, headless
#[derive(Parser)]
#[command(version, about = "Runs the kitchen tidying game without a window.")]
struct Cli {
    /// INI file with gameplay tunables.
    #[arg(long, value_name = "PATH", default_value = "config.ini")]
    config: PathBuf,

    /// JSON level layout. The built-in kitchen is used when omitted.
    #[arg(long, value_name = "PATH")]
    level: Option<PathBuf>,

    /// JSON input script replayed frame by frame.
    #[arg(long, value_name = "PATH")]
    script: Option<PathBuf>,

    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut config = GameConfig::with_path(&cli.config);
    if let Err(e) = config.load_from_file() {
        warn!("{e}; using defaults");
    }

    let layout = match &cli.level {
        Some(path) => match LevelLayout::load(path) {
            Ok(layout) => layout,
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        None => LevelLayout::default_kitchen(),
    };

    let mut script = match &cli.script {
        Some(path) => match InputScript::load(path) {
            Ok(script) => Some(script),
            Err(e) => {
                error!("{e}");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let mut world = setup_world(config, &layout);
    setup_audio(&mut world);

    let mut schedule = build_schedule();
    schedule
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    for frame in 0..cli.frames {
        if let Some(script) = script.as_mut() {
            let mut input = world.resource_mut::<InputState>();
            script.apply(frame, &mut input);
        }
        update_world_time(&mut world, FIXED_DT);
        schedule.run(&mut world);
        world.clear_trackers();

        if world.resource::<LevelProgress>().is_victorious()
            && script.as_ref().is_none_or(|s| s.is_finished())
        {
            info!("Level complete after {} frames", frame + 1);
            break;
        }
    }

    let mut zones = world.query::<&PlacementZone>();
    for zone in zones.iter(&world) {
        info!(
            "{}: {}/{}{}",
            zone.name,
            zone.count(),
            zone.required_items,
            if zone.is_complete() { " done" } else { "" }
        );
    }
    shutdown_audio(&mut world);
}
