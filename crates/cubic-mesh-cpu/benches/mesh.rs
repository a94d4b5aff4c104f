use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};

use cubic_blocks::{BlockCatalog, BlockType};
use cubic_mesh_cpu::{MeshCache, build_cell_mesh};
use cubic_world::{CellCoord, VoxelWorld};

fn load_catalog() -> BlockCatalog {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    BlockCatalog::load_from_path(root.join("../../assets/blocks.toml")).unwrap()
}

fn flat_world(thickness: i32) -> VoxelWorld {
    let mut world = VoxelWorld::new(Arc::new(load_catalog()));
    let s = world.cell_size() as i32;
    for x in 0..s {
        for z in 0..s {
            for y in 0..thickness {
                let ty = if y + 1 == thickness {
                    BlockType::GRASS
                } else {
                    BlockType::STONE
                };
                world.set_voxel(x, y, z, ty);
            }
        }
    }
    world
}

fn checker_world() -> VoxelWorld {
    let mut world = VoxelWorld::new(Arc::new(load_catalog()));
    let s = world.cell_size() as i32;
    for x in 0..s {
        for y in 0..s {
            for z in 0..s {
                if (x + y + z) % 2 == 0 {
                    world.set_voxel(x, y, z, BlockType::DIRT);
                }
            }
        }
    }
    world
}

fn bench_build_cell_mesh(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_cell_mesh");
    let flat = flat_world(16);
    group.bench_function("flat_32x16x32", |b| {
        b.iter(|| black_box(build_cell_mesh(&flat, CellCoord::new(0, 0, 0))))
    });
    let checker = checker_world();
    group.bench_function("checker_32", |b| {
        b.iter(|| black_box(build_cell_mesh(&checker, CellCoord::new(0, 0, 0))))
    });
    group.finish();
}

fn bench_rebuild_after_edit(c: &mut Criterion) {
    let mut world = flat_world(16);
    let mut cache = MeshCache::new();
    cache.invalidate_world(&world);
    cache.rebuild_dirty(&world);
    c.bench_function("rebuild_after_single_edit", |b| {
        b.iter(|| {
            world.remove_voxel(10, 15, 10);
            cache.note_edit(&world, 10, 15, 10);
            black_box(cache.rebuild_dirty(&world));
            world.set_voxel(10, 15, 10, BlockType::GRASS);
            cache.note_edit(&world, 10, 15, 10);
            black_box(cache.rebuild_dirty(&world));
        })
    });
}

criterion_group!(benches, bench_build_cell_mesh, bench_rebuild_after_edit);
criterion_main!(benches);
