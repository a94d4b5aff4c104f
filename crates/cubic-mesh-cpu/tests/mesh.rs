use std::sync::Arc;

use cubic_blocks::{BlockCatalog, BlockType};
use cubic_mesh_cpu::constants::{FLOATS_PER_FACE, INDICES_PER_FACE};
use cubic_mesh_cpu::{Face, MeshCache, RebuildStats, build_cell_mesh};
use cubic_world::{CellCoord, VoxelWorld};
use proptest::prelude::*;

fn load_catalog() -> BlockCatalog {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    BlockCatalog::load_from_path(root.join("../../assets/blocks.toml")).unwrap()
}

fn make_world(cell_size: usize) -> VoxelWorld {
    VoxelWorld::with_cell_size(Arc::new(load_catalog()), cell_size).unwrap()
}

fn face_normals(mesh: &cubic_mesh_cpu::CellMesh) -> Vec<(i32, i32, i32)> {
    mesh.mesh
        .norm
        .chunks(FLOATS_PER_FACE)
        .map(|n| (n[0] as i32, n[1] as i32, n[2] as i32))
        .collect()
}

#[test]
fn isolated_block_has_six_faces() {
    let mut w = make_world(16);
    w.set_voxel(3, 4, 5, BlockType::STONE);
    let m = build_cell_mesh(&w, CellCoord::new(0, 0, 0)).expect("mesh");
    assert_eq!(m.face_count(), 6);
    assert_eq!(m.mesh.pos.len(), 72);
    assert_eq!(m.mesh.norm.len(), 72);
    assert_eq!(m.vertex_count(), 24);
    assert_eq!(m.mesh.idx.len(), 36);
    assert_eq!(m.mesh.triangle_count(), 12);
    let normals = face_normals(&m);
    let expected: Vec<_> = Face::ALL.iter().map(|f| f.delta()).collect();
    assert_eq!(normals, expected);
}

#[test]
fn first_face_uses_local_positions_and_fixed_winding() {
    let mut w = make_world(16);
    w.set_voxel(3, 4, 5, BlockType::DIRT);
    let m = build_cell_mesh(&w, CellCoord::new(0, 0, 0)).unwrap();
    assert_eq!(
        &m.mesh.pos[..12],
        &[3.0, 4.0, 5.0, 3.0, 5.0, 5.0, 3.0, 5.0, 6.0, 3.0, 4.0, 6.0]
    );
    assert_eq!(&m.mesh.idx[..6], &[0, 1, 2, 2, 1, 3]);
    assert_eq!(&m.mesh.idx[6..12], &[4, 5, 6, 6, 5, 7]);
}

#[test]
fn adjacent_pair_shares_no_faces() {
    let mut w = make_world(16);
    w.set_voxel(0, 0, 0, BlockType::STONE);
    w.set_voxel(1, 0, 0, BlockType::STONE);
    let m = build_cell_mesh(&w, CellCoord::new(0, 0, 0)).unwrap();
    assert_eq!(m.face_count(), 10);
}

#[test]
fn non_air_neighbors_cull_regardless_of_opacity() {
    let mut w = make_world(16);
    w.set_voxel(0, 0, 0, BlockType::STONE);
    w.set_voxel(0, 1, 0, BlockType::WATER);
    let m = build_cell_mesh(&w, CellCoord::new(0, 0, 0)).unwrap();
    assert_eq!(m.face_count(), 10);
}

#[test]
fn air_cells_produce_nothing() {
    let mut w = make_world(8);
    assert!(build_cell_mesh(&w, CellCoord::new(0, 0, 0)).is_none());
    w.set_voxel(2, 2, 2, BlockType::SAND);
    w.remove_voxel(2, 2, 2);
    assert!(w.has_cell(CellCoord::new(0, 0, 0)));
    assert!(build_cell_mesh(&w, CellCoord::new(0, 0, 0)).is_none());
}

#[test]
fn fully_enclosed_block_is_invisible_but_neighbors_are_not() {
    let mut w = make_world(8);
    for x in 0..3 {
        for y in 0..3 {
            for z in 0..3 {
                w.set_voxel(x, y, z, BlockType::STONE);
            }
        }
    }
    let m = build_cell_mesh(&w, CellCoord::new(0, 0, 0)).unwrap();
    // 3x3 on each of six sides.
    assert_eq!(m.face_count(), 54);
}

#[test]
fn boundary_faces_follow_the_neighbor_cell() {
    let mut w = make_world(4);
    w.set_voxel(3, 0, 0, BlockType::STONE);
    let c0 = CellCoord::new(0, 0, 0);
    // neighbor cell does not exist yet
    assert_eq!(build_cell_mesh(&w, c0).unwrap().face_count(), 6);

    w.set_voxel(4, 0, 0, BlockType::STONE);
    assert!(w.has_cell(CellCoord::new(1, 0, 0)));
    let m0 = build_cell_mesh(&w, c0).unwrap();
    assert_eq!(m0.face_count(), 5);
    assert!(!face_normals(&m0).contains(&(1, 0, 0)));
    let m1 = build_cell_mesh(&w, CellCoord::new(1, 0, 0)).unwrap();
    assert_eq!(m1.face_count(), 5);
    assert!(!face_normals(&m1).contains(&(-1, 0, 0)));

    w.remove_voxel(4, 0, 0);
    assert_eq!(build_cell_mesh(&w, c0).unwrap().face_count(), 6);
}

#[test]
fn negative_cells_place_mesh_at_their_origin() {
    let mut w = make_world(4);
    w.set_voxel(-1, -1, -1, BlockType::WOOD);
    let coord = w.cell_coord_of(-1, -1, -1);
    assert_eq!(coord, CellCoord::new(-1, -1, -1));
    let m = build_cell_mesh(&w, coord).unwrap();
    assert_eq!((m.origin.x, m.origin.y, m.origin.z), (-4.0, -4.0, -4.0));
    assert_eq!(m.bbox.max.x, 0.0);
    let v = m.world_vertex(0).unwrap();
    assert_eq!((v.x, v.y, v.z), (-1.0, -1.0, -1.0));
}

#[test]
fn cache_swaps_and_drops_meshes() {
    let mut w = make_world(4);
    let mut cache = MeshCache::new();
    w.set_voxel(3, 0, 0, BlockType::STONE);
    cache.invalidate_world(&w);
    assert_eq!(
        cache.rebuild_dirty(&w),
        RebuildStats { built: 1, removed: 0, faces: 6 }
    );

    w.set_voxel(4, 0, 0, BlockType::STONE);
    cache.note_edit(&w, 4, 0, 0);
    assert!(cache.is_dirty(CellCoord::new(0, 0, 0)));
    assert!(cache.is_dirty(CellCoord::new(1, 0, 0)));
    let stats = cache.rebuild_dirty(&w);
    assert_eq!(stats.built, 2);
    assert_eq!(stats.faces, 10);
    assert_eq!(cache.len(), 2);
    assert_eq!(cache.total_faces(), 10);

    w.remove_voxel(3, 0, 0);
    w.remove_voxel(4, 0, 0);
    cache.note_edit(&w, 3, 0, 0);
    cache.note_edit(&w, 4, 0, 0);
    let stats = cache.rebuild_dirty(&w);
    assert_eq!(stats.removed, 2);
    assert!(cache.is_empty());
    assert!(cache.get(CellCoord::new(0, 0, 0)).is_none());
}

#[test]
fn generate_installs_immediately() {
    let mut w = make_world(8);
    let mut cache = MeshCache::new();
    w.set_voxel(1, 1, 1, BlockType::LEAVES);
    let c = CellCoord::new(0, 0, 0);
    assert_eq!(cache.generate(&w, c).map(|m| m.face_count()), Some(6));
    assert_eq!(cache.iter().count(), 1);
    cache.clear();
    assert_eq!(cache.len(), 0);
    assert_eq!(cache.dirty_count(), 0);
}

#[test]
fn blocks_at_the_coordinate_limits_mesh_all_faces() {
    for size in [1, 16] {
        let mut w = make_world(size);
        let corners = [
            (i32::MAX, 0, 0),
            (i32::MIN, 0, 0),
            (0, i32::MAX, 0),
            (0, 0, i32::MIN),
            (i32::MAX, i32::MIN, i32::MAX),
        ];
        for &(x, y, z) in &corners {
            w.set_voxel(x, y, z, BlockType::STONE);
        }
        let mut cache = MeshCache::new();
        for &(x, y, z) in &corners {
            cache.note_edit(&w, x, y, z);
            let m = build_cell_mesh(&w, w.cell_coord_of(x, y, z)).expect("mesh");
            assert_eq!(m.face_count(), 6, "block at ({x}, {y}, {z}), cell size {size}");
        }
        let stats = cache.rebuild_dirty(&w);
        assert_eq!(cache.total_faces(), 6 * corners.len());
        assert_eq!(stats.built, corners.len());
    }
}

proptest! {
    #[test]
    fn buffers_stay_face_aligned(
        blocks in proptest::collection::vec((0i32..6, 0i32..6, 0i32..6, 1u8..8), 1..40)
    ) {
        let mut w = make_world(6);
        for (x, y, z, t) in &blocks {
            w.set_voxel(*x, *y, *z, BlockType(*t));
        }
        if let Some(m) = build_cell_mesh(&w, CellCoord::new(0, 0, 0)) {
            prop_assert_eq!(m.mesh.pos.len() % FLOATS_PER_FACE, 0);
            prop_assert_eq!(m.mesh.norm.len(), m.mesh.pos.len());
            prop_assert_eq!(m.mesh.idx.len() % INDICES_PER_FACE, 0);
            prop_assert_eq!(m.mesh.idx.len() / INDICES_PER_FACE, m.mesh.pos.len() / FLOATS_PER_FACE);
            let nv = m.vertex_count() as u32;
            prop_assert!(m.mesh.idx.iter().all(|&i| i < nv));
            prop_assert!(m.face_count() <= 6 * blocks.len());
        }
    }
}
