use cubic_blocks::{BlockCatalog, BlockDef, BlockType, BlocksConfig};
use proptest::prelude::*;

fn asset_catalog() -> BlockCatalog {
    let root = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    BlockCatalog::load_from_path(root.join("../../assets/blocks.toml")).unwrap()
}

#[test]
fn asset_file_matches_builtin() {
    let from_file = asset_catalog();
    let builtin = BlockCatalog::builtin();
    assert_eq!(from_file.block_types(), builtin.block_types());
    for ty in BlockType::BUILTIN {
        assert_eq!(from_file.get(ty), builtin.get(ty), "mismatch for {:?}", ty);
    }
}

#[test]
fn builtin_covers_every_builtin_type() {
    let cat = BlockCatalog::builtin();
    assert_eq!(cat.validate(&BlockType::BUILTIN), Ok(()));
    assert_eq!(cat.len(), BlockType::BUILTIN.len());
}

#[test]
fn validate_reports_missing() {
    let cat = BlockCatalog::from_toml_str(
        r#"
        [[blocks]]
        name = "stone"
        id = 3
    "#,
    )
    .unwrap();
    let missing = cat.validate(&BlockType::BUILTIN).unwrap_err();
    assert_eq!(missing.len(), 6);
    assert!(!missing.contains(&BlockType::STONE));
}

#[test]
fn derived_accessors_follow_table_values() {
    let cat = BlockCatalog::builtin();
    assert!(cat.is_solid(BlockType::LEAVES));
    assert!(!cat.is_opaque(BlockType::LEAVES));
    assert!(cat.blocks_light(BlockType::LEAVES));
    assert_eq!(cat.light_blocking(BlockType::LEAVES), 1);

    assert!(!cat.is_solid(BlockType::WATER));
    assert!(cat.is_transparent(BlockType::WATER));
    assert!(cat.blocks_light(BlockType::WATER));

    assert!(cat.is_opaque(BlockType::STONE));
    assert_eq!(cat.hardness(BlockType::WOOD), 2.0);
    assert_eq!(cat.color(BlockType::SAND), 0xf4a460);
    assert_eq!(cat.emission(BlockType::GRASS), 0);
}

#[test]
fn lookup_by_key_or_display_name() {
    let cat = BlockCatalog::builtin();
    assert_eq!(cat.id_by_name("log"), Some(BlockType::WOOD));
    assert_eq!(cat.id_by_name("Wood"), Some(BlockType::WOOD));
    assert_eq!(cat.id_by_name("obsidian"), None);
}

#[test]
fn listings_partition_by_opacity() {
    let cat = BlockCatalog::builtin();
    assert_eq!(
        cat.transparent_blocks(),
        vec![BlockType::LEAVES, BlockType::WATER]
    );
    assert_eq!(
        cat.opaque_blocks(),
        vec![
            BlockType::GRASS,
            BlockType::DIRT,
            BlockType::STONE,
            BlockType::WOOD,
            BlockType::SAND
        ]
    );
}

#[test]
fn toml_defaults_derive_from_solidity() {
    let cat = BlockCatalog::from_toml_str(
        r#"
        [[blocks]]
        name = "mist"
        id = 40
        solid = false

        [[blocks]]
        name = "glowstone"
        id = 41
        emission = 15
    "#,
    )
    .unwrap();
    let mist = cat.get(BlockType(40));
    assert!(!mist.solid && !mist.opaque && mist.transparent);
    assert_eq!(mist.light_blocking, 0);
    assert_eq!(mist.display_name, "mist");

    let glow = cat.get(BlockType(41));
    assert!(glow.solid && glow.opaque && !glow.transparent);
    assert_eq!(glow.light_blocking, 15);
    assert_eq!(glow.emission, 15);
}

#[test]
fn air_id_is_rejected() {
    let err = BlockCatalog::from_toml_str(
        r#"
        [[blocks]]
        name = "void"
        id = 0
    "#,
    )
    .unwrap_err();
    assert!(err.to_string().contains("reserved for air"));
}

#[test]
fn light_values_above_fifteen_are_rejected() {
    let mut def = BlockDef::new("lamp", 9);
    def.emission = Some(16);
    let cfg = BlocksConfig { blocks: vec![def] };
    assert!(BlockCatalog::from_config(cfg).is_err());
}

#[test]
fn malformed_toml_is_an_error() {
    assert!(BlockCatalog::from_toml_str("[[blocks]]\nid = \"three\"").is_err());
    assert!(BlockCatalog::load_from_path("/definitely/not/here.toml").is_err());
}

proptest! {
    // Every code resolves to some entry; unregistered codes are solid and opaque
    #[test]
    fn every_code_resolves(code in any::<u8>()) {
        let cat = BlockCatalog::builtin();
        let ty = BlockType(code);
        let props = cat.get(ty);
        if ty.is_air() {
            prop_assert!(!props.solid);
        } else if !cat.contains(ty) {
            prop_assert!(props.solid && props.opaque);
        } else {
            prop_assert_eq!(props.id, ty);
        }
        prop_assert_eq!(cat.blocks_light(ty), cat.light_blocking(ty) > 0);
    }
}
