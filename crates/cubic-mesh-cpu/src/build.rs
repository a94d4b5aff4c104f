use std::time::Instant;

use cubic_geom::{Aabb, Vec3};
use cubic_world::{CellCoord, VoxelSource, VoxelWorld};

use crate::chunk::CellMesh;
use crate::face::Face;
use crate::mesh_build::MeshBuild;

/// Culled mesh for the cell at `coord`, or `None` when nothing is visible.
///
/// A face is emitted when its block is renderable and the neighbor across that
/// face is air. Neighbors are read through the world, so faces on the cell
/// border are culled against the adjacent cell (missing cells read as air).
pub fn build_cell_mesh(world: &VoxelWorld, coord: CellCoord) -> Option<CellMesh> {
    let cell = world.cell(coord)?;
    let t0 = Instant::now();
    let catalog = world.catalog();
    let (bx, by, bz) = world.cell_origin(coord);
    let mut mb = MeshBuild::default();
    mb.reserve_faces(cell.non_air_count());
    for (lx, ly, lz, ty) in cell.iter_non_air() {
        if !catalog.needs_render(ty) {
            continue;
        }
        let (wx, wy, wz) = (bx + lx as i32, by + ly as i32, bz + lz as i32);
        for face in Face::ALL {
            let (dx, dy, dz) = face.delta();
            // Nothing exists past the i32 edge, so those faces stay exposed.
            let exposed = match (wx.checked_add(dx), wy.checked_add(dy), wz.checked_add(dz)) {
                (Some(nx), Some(ny), Some(nz)) => world.voxel(nx, ny, nz).is_air(),
                _ => true,
            };
            if exposed {
                mb.add_face(face, lx as f32, ly as f32, lz as f32);
            }
        }
    }
    log_mesher_perf(coord, mb.face_count(), t0.elapsed().as_secs_f32() * 1000.0);
    if mb.is_empty() {
        return None;
    }
    let origin = Vec3::new(bx as f32, by as f32, bz as f32);
    let size = world.cell_size() as f32;
    Some(CellMesh {
        coord,
        origin,
        bbox: Aabb::new(origin, origin + Vec3::splat(size)),
        mesh: mb,
    })
}

fn log_mesher_perf(coord: CellCoord, faces: usize, ms: f32) {
    log::debug!(
        target: "perf",
        "ms={:.3} faces={} mesher_cell cx={} cy={} cz={}",
        ms,
        faces,
        coord.cx,
        coord.cy,
        coord.cz
    );
}
