#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless command-line driver for Castle Defence.
//!
//! Boots a world, starts a game, and advances it at the nominal frame cadence
//! while a simple policy builds towers on free sites. Notable events are
//! printed as they happen; the run ends with a one-line summary.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{ensure, Context, Result};
use clap::{Parser, ValueEnum};

use castle_defence_core::{Command, Event, GameConfig, TowerKind, FRAME_DURATION};
use castle_defence_world::{apply, query, World};

/// Command-line arguments accepted by the driver.
#[derive(Debug, Parser)]
#[command(name = "castle-defence", about = "Headless castle defence simulation")]
struct Args {
    /// Maximum number of ticks to simulate before giving up.
    #[arg(long, default_value_t = 200_000)]
    max_ticks: u32,

    /// Speed multiplier to play at (1-5).
    #[arg(long, default_value_t = 1)]
    speed: u32,

    /// Tower kind the build policy places on free sites.
    #[arg(long, value_enum, default_value_t = KindArg::Basic)]
    tower: KindArg,

    /// TOML file overriding the default game tuning.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print every event instead of the notable subset.
    #[arg(long)]
    verbose: bool,
}

/// Tower kinds as they appear on the command line.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum KindArg {
    Basic,
    Heavy,
    Magic,
}

impl From<KindArg> for TowerKind {
    fn from(value: KindArg) -> Self {
        match value {
            KindArg::Basic => TowerKind::Basic,
            KindArg::Heavy => TowerKind::Heavy,
            KindArg::Magic => TowerKind::Magic,
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading tuning file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parsing tuning file {}", path.display()))
}

fn build_on_free_site(world: &mut World, kind: TowerKind, events: &mut Vec<Event>) {
    if query::resources(world) < kind.cost() {
        return;
    }
    let Some(site) = query::build_sites(world)
        .into_iter()
        .find(|site| !site.is_occupied())
    else {
        return;
    };
    apply(world, Command::SelectTowerKind { kind }, events);
    apply(
        world,
        Command::Click {
            at: site.position,
        },
        events,
    );
}

fn describe(event: &Event) -> Option<String> {
    match event {
        Event::WaveStarted { wave } => Some(format!("wave {wave} started")),
        Event::BossEmerged { kind, .. } => Some(format!("boss emerged: {kind:?}")),
        Event::LifeLost { remaining, .. } => {
            Some(format!("enemy broke through, {remaining} lives left"))
        }
        Event::WaveCleared { wave } => Some(format!("wave {wave} cleared")),
        Event::TowerBuilt { kind, at, .. } => Some(format!(
            "built {kind:?} tower at ({}, {})",
            at.x(),
            at.y()
        )),
        Event::GameWon { score } => Some(format!("victory, final score {score}")),
        Event::GameLost { score } => Some(format!("defeat, final score {score}")),
        _ => None,
    }
}

fn drain(events: &mut Vec<Event>, verbose: bool) {
    for event in events.drain(..) {
        if let Some(line) = describe(&event) {
            println!("{line}");
        } else if verbose {
            println!("{event:?}");
        }
    }
}

/// Entry point for the Castle Defence command-line interface.
fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(
        (1..=5).contains(&args.speed),
        "speed must be between 1 and 5"
    );
    let config = load_config(args.config.as_deref())?;
    let mut world = World::with_config(config);
    let mut events = Vec::new();

    apply(&mut world, Command::StartGame, &mut events);
    for _ in 1..args.speed {
        apply(&mut world, Command::ToggleSpeed, &mut events);
    }
    drain(&mut events, args.verbose);

    let kind = TowerKind::from(args.tower);
    let mut ticks = 0_u32;
    while ticks < args.max_ticks && query::phase(&world).is_in_progress() {
        build_on_free_site(&mut world, kind, &mut events);
        apply(&mut world, Command::Tick { dt: FRAME_DURATION }, &mut events);
        drain(&mut events, args.verbose);
        ticks += 1;
    }

    println!(
        "finished after {ticks} ticks: {:?}, wave {}/{}, lives {}, resources {}, score {}",
        query::phase(&world),
        query::wave(&world),
        query::max_waves(&world),
        query::lives(&world),
        query::resources(&world),
        query::score(&world),
    );
    Ok(())
}
