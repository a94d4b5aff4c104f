use std::error::Error;
use std::fs;
use std::path::Path;

use cubic_world::{VoxelData, VoxelWorld};
use serde::{Deserialize, Serialize};

/// The raw voxel array as a TOML document: one `[[voxels]]` table per block.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VoxelDump {
    #[serde(default)]
    pub voxels: Vec<VoxelData>,
}

pub fn voxels_to_toml(world: &VoxelWorld) -> Result<String, Box<dyn Error>> {
    let dump = VoxelDump {
        voxels: world.all_voxels(),
    };
    Ok(toml::to_string(&dump)?)
}

pub fn save_voxels(world: &VoxelWorld, path: &Path) -> Result<usize, Box<dyn Error>> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let text = voxels_to_toml(world)?;
    fs::write(path, text).map_err(|e| format!("writing {}: {e}", path.display()))?;
    let n: usize = world
        .cell_coords()
        .into_iter()
        .filter_map(|c| world.cell(c))
        .map(|cell| cell.non_air_count())
        .sum();
    log::info!("exported {} voxels to {}", n, path.display());
    Ok(n)
}

/// Replaces the world contents with the voxels stored at `path`.
pub fn load_voxels(world: &mut VoxelWorld, path: &Path) -> Result<usize, Box<dyn Error>> {
    let s = fs::read_to_string(path).map_err(|e| format!("reading {}: {e}", path.display()))?;
    let dump: VoxelDump = toml::from_str(&s)?;
    world.clear();
    let n = world.load_voxels(dump.voxels);
    log::info!("loaded {} voxels from {}", n, path.display());
    Ok(n)
}
