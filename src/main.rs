mod config;
mod edit;
mod export;
mod scene;

use std::error::Error;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use cubic_blocks::{BlockCatalog, BlockType};
use cubic_geom::Vec3;
use cubic_physics::PhysicsSystem;
use cubic_world::VoxelWorld;

use config::AppConfig;
use edit::Editor;

const DEFAULT_CONFIG: &str = "assets/cubic.toml";

#[derive(Parser, Debug)]
#[command(name = "cubic", about = "Headless chunked voxel world: mesh, simulate and edit")]
struct Args {
    /// App config (TOML). Defaults to assets/cubic.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Block catalog (TOML); overrides the config's `blocks` entry.
    #[arg(long)]
    blocks: Option<PathBuf>,
    #[arg(long)]
    cell_size: Option<usize>,
    /// Physics ticks to simulate after spawning.
    #[arg(long)]
    ticks: Option<u32>,
    /// Spawn height of the simulated actor.
    #[arg(long, allow_hyphen_values = true)]
    drop_height: Option<f32>,
    /// Replace the demo scene with a voxel dump written by --export.
    #[arg(long)]
    load: Option<PathBuf>,
    /// Write every non-air voxel to this TOML file on exit.
    #[arg(long)]
    export: Option<PathBuf>,
    /// -v debug, -vv trace
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Info,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    // RUST_LOG refines the -v level per target (e.g. RUST_LOG=perf=off).
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.init();
}

fn load_config(args: &Args) -> Result<AppConfig, Box<dyn Error>> {
    let mut cfg = match &args.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None if Path::new(DEFAULT_CONFIG).exists() => AppConfig::load_from_path(DEFAULT_CONFIG)?,
        None => {
            log::warn!("{} not found; using built-in defaults", DEFAULT_CONFIG);
            AppConfig::default()
        }
    };
    if let Some(blocks) = &args.blocks {
        cfg.blocks = Some(blocks.clone());
    }
    if let Some(size) = args.cell_size {
        cfg.world.cell_size = size;
    }
    if let Some(ticks) = args.ticks {
        cfg.demo.ticks = ticks;
    }
    if let Some(h) = args.drop_height {
        cfg.demo.drop_height = h;
    }
    Ok(cfg)
}

fn load_catalog(cfg: &AppConfig) -> Result<BlockCatalog, Box<dyn Error>> {
    let catalog = match &cfg.blocks {
        Some(path) => BlockCatalog::load_from_path(path)?,
        None => BlockCatalog::builtin(),
    };
    if let Err(missing) = catalog.validate(&BlockType::BUILTIN) {
        log::warn!(
            "block catalog lacks {} built-in types ({:?}); they behave as solid unknown blocks",
            missing.len(),
            missing
        );
    }
    log::info!("block catalog: {} types", catalog.len());
    Ok(catalog)
}

/// Drops the actor at `(x, drop_height, z)` and simulates; returns the final feet position.
fn simulate(ed: &mut Editor, spawn: Vec3, ticks: u32) -> Vec3 {
    let (sx, sy, sz) = spawn.floor_i32();
    match ed.physics.ground_height(&ed.world, sx, sz, sy) {
        Some(ground) => log::info!("ground below spawn at y={}", ground),
        None => log::warn!("no ground below spawn; the actor will fall forever"),
    }
    let mut pos = spawn;
    let mut landed_at = None;
    for tick in 0..ticks {
        let step = ed.physics.update(&ed.world, pos, 1.0);
        pos = step.position;
        if step.on_ground && landed_at.is_none() {
            landed_at = Some(tick);
            log::info!("landed on tick {} at y={:.3}", tick, pos.y);
        }
    }
    if ed.physics.is_in_liquid(&ed.world, pos) {
        log::info!("actor is standing in water");
    }
    pos
}

fn run(args: Args) -> Result<(), Box<dyn Error>> {
    let cfg = load_config(&args)?;
    let catalog = Arc::new(load_catalog(&cfg)?);
    let mut world = VoxelWorld::with_cell_size(catalog.clone(), cfg.world.cell_size)?;
    match &args.load {
        Some(path) => {
            export::load_voxels(&mut world, path)?;
        }
        None => {
            scene::build_demo(&mut world);
        }
    }

    let physics = PhysicsSystem::new(catalog, cfg.physics.clone());
    let mut ed = Editor::new(world, physics);
    let stats = ed.meshes.rebuild_dirty(&ed.world);
    log::info!(
        "meshed {} cells ({} faces) out of {}",
        stats.built,
        stats.faces,
        ed.world.cell_count()
    );

    let spawn = Vec3::new(0.5, cfg.demo.drop_height, 0.5);
    let feet = simulate(&mut ed, spawn, cfg.demo.ticks);
    log::info!("actor at ({:.3}, {:.3}, {:.3})", feet.x, feet.y, feet.z);

    let eye = feet + Vec3::new(0.0, cfg.physics.player_height * 0.9, 0.0);
    let look = Vec3::new(1.0, -1.0, 0.0);
    let hit = ed.target(eye, look, cfg.demo.reach);
    let exact = ed.physics.raycast_exact(&ed.world, eye, look, cfg.demo.reach);
    if hit.hit {
        log::info!(
            "looking at {:?} ({}) at {:?}, distance {:.2} (exact {:.2})",
            hit.block_type,
            catalog_name(&ed, hit.block_type),
            hit.block(),
            hit.distance,
            exact.distance
        );
        match ed.break_target(&hit) {
            Ok(old) => log::info!("broke {}", catalog_name(&ed, old)),
            Err(why) => log::info!("cannot break target: {:?}", why),
        }
        let hit = ed.target(eye, look, cfg.demo.reach);
        match ed.place_at_target(&hit, BlockType::WOOD, Some(feet)) {
            Ok(at) => log::info!("placed wood at {:?}", at),
            Err(why) => log::info!("cannot place: {:?}", why),
        }
        let stats = ed.meshes.rebuild_dirty(&ed.world);
        log::info!(
            "after {} edits: rebuilt {} cells, removed {}, {} meshes total",
            ed.edit_count(),
            stats.built,
            stats.removed,
            ed.meshes.len()
        );
    } else {
        log::info!("nothing within reach");
    }

    if let Some(path) = &args.export {
        let n = export::save_voxels(&ed.world, path)?;
        println!("Saved {} voxels to {}", n, path.display());
    }
    Ok(())
}

fn catalog_name(ed: &Editor, ty: BlockType) -> &str {
    ed.world.catalog().name(ty)
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        log::error!("{}", err);
        std::process::exit(1);
    }
}
