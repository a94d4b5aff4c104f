use std::collections::HashMap;
use std::error::Error;
use std::fs;
use std::path::Path;

use super::config::{BlockDef, BlocksConfig};
use super::types::BlockType;

/// Highest value accepted for `emission` and `light_blocking`.
pub const MAX_LIGHT: u8 = 15;

const DEFAULT_COLOR: u32 = 0x80_80_80;

/// Physical and render properties of one block type.
#[derive(Clone, Debug, PartialEq)]
pub struct BlockProps {
    pub id: BlockType,
    /// Stable key used by config files and lookups.
    pub name: String,
    pub display_name: String,
    /// Seconds to break by hand.
    pub hardness: f32,
    pub opaque: bool,
    pub transparent: bool,
    pub solid: bool,
    pub emission: u8,
    pub light_blocking: u8,
    pub color: u32,
}

impl BlockProps {
    fn air() -> Self {
        Self {
            id: BlockType::AIR,
            name: "air".into(),
            display_name: "Air".into(),
            hardness: 0.0,
            opaque: false,
            transparent: true,
            solid: false,
            emission: 0,
            light_blocking: 0,
            color: 0,
        }
    }

    // Unknown codes collide and render like a plain opaque block.
    fn unknown(id: BlockType) -> Self {
        Self {
            id,
            name: "unknown".into(),
            display_name: "Unknown".into(),
            hardness: 0.0,
            opaque: true,
            transparent: false,
            solid: true,
            emission: 0,
            light_blocking: MAX_LIGHT,
            color: DEFAULT_COLOR,
        }
    }

    #[inline]
    pub fn blocks_light(&self) -> bool {
        self.light_blocking > 0
    }
}

/// Read-only table of block properties, built once at startup and shared by
/// the world and physics (typically behind an `Arc`).
///
/// Lookups never fail: `AIR` resolves to a non-solid, transparent entry and
/// unregistered codes resolve to a solid, opaque fallback.
#[derive(Clone, Debug)]
pub struct BlockCatalog {
    entries: Vec<Option<BlockProps>>,
    by_name: HashMap<String, BlockType>,
    air: BlockProps,
    /// One stand-in per code, so `get(ty).id == ty` holds for unknown codes too.
    fallback: Vec<BlockProps>,
}

impl Default for BlockCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl BlockCatalog {
    /// An empty catalog: only `AIR` is known.
    pub fn new() -> Self {
        Self {
            entries: vec![None; u8::MAX as usize + 1],
            by_name: HashMap::new(),
            air: BlockProps::air(),
            fallback: (0..=u8::MAX)
                .map(|code| BlockProps::unknown(BlockType(code)))
                .collect(),
        }
    }

    /// The seven default block types.
    pub fn builtin() -> Self {
        let mut cat = Self::new();
        let table: [(BlockType, &str, &str, f32, bool, bool, u8, u32); 7] = [
            (BlockType::GRASS, "grass_block", "Grass Block", 0.6, true, true, 15, 0x4a_7c_59),
            (BlockType::DIRT, "dirt", "Dirt", 0.5, true, true, 15, 0x8b_45_13),
            (BlockType::STONE, "stone", "Stone", 1.5, true, true, 15, 0x80_80_80),
            (BlockType::WOOD, "log", "Wood", 2.0, true, true, 15, 0x9b_76_53),
            (BlockType::LEAVES, "leaves", "Leaves", 0.2, false, true, 1, 0x22_8b_22),
            (BlockType::SAND, "sand", "Sand", 0.5, true, true, 15, 0xf4_a4_60),
            (BlockType::WATER, "water", "Water", 0.0, false, false, 3, 0x41_69_e1),
        ];
        for (id, name, display, hardness, opaque, solid, light_blocking, color) in table {
            cat.insert(BlockProps {
                id,
                name: name.into(),
                display_name: display.into(),
                hardness,
                opaque,
                transparent: !opaque,
                solid,
                emission: 0,
                light_blocking,
                color,
            });
        }
        cat
    }

    pub fn from_toml_str(toml_str: &str) -> Result<Self, Box<dyn Error>> {
        let cfg: BlocksConfig = toml::from_str(toml_str)?;
        Self::from_config(cfg)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let path = path.as_ref();
        let s = fs::read_to_string(path)
            .map_err(|e| format!("reading blocks config {}: {e}", path.display()))?;
        Self::from_toml_str(&s)
    }

    pub fn from_config(cfg: BlocksConfig) -> Result<Self, Box<dyn Error>> {
        let mut cat = Self::new();
        for def in cfg.blocks {
            let props = compile_def(def)?;
            cat.insert(props);
        }
        Ok(cat)
    }

    fn insert(&mut self, props: BlockProps) {
        let slot = props.id.0 as usize;
        if let Some(prev) = self.entries[slot].take() {
            log::warn!(
                "block id {} already registered as '{}'; replacing with '{}'",
                slot,
                prev.name,
                props.name
            );
            self.by_name.retain(|_, id| *id != props.id);
        }
        self.by_name.insert(props.name.clone(), props.id);
        self.by_name.insert(props.display_name.clone(), props.id);
        self.entries[slot] = Some(props);
    }

    /// Properties for `ty`; never fails (see type-level docs).
    #[inline]
    pub fn get(&self, ty: BlockType) -> &BlockProps {
        if ty.is_air() {
            return &self.air;
        }
        self.entries[ty.0 as usize]
            .as_ref()
            .unwrap_or(&self.fallback[ty.0 as usize])
    }

    /// Registered entry for `ty`, `None` for air and unknown codes.
    #[inline]
    pub fn entry(&self, ty: BlockType) -> Option<&BlockProps> {
        if ty.is_air() {
            return None;
        }
        self.entries[ty.0 as usize].as_ref()
    }

    #[inline]
    pub fn contains(&self, ty: BlockType) -> bool {
        self.entry(ty).is_some()
    }

    #[inline]
    pub fn is_solid(&self, ty: BlockType) -> bool {
        self.get(ty).solid
    }

    #[inline]
    pub fn is_opaque(&self, ty: BlockType) -> bool {
        self.get(ty).opaque
    }

    #[inline]
    pub fn is_transparent(&self, ty: BlockType) -> bool {
        self.get(ty).transparent
    }

    #[inline]
    pub fn blocks_light(&self, ty: BlockType) -> bool {
        self.get(ty).blocks_light()
    }

    #[inline]
    pub fn light_blocking(&self, ty: BlockType) -> u8 {
        self.get(ty).light_blocking
    }

    #[inline]
    pub fn emission(&self, ty: BlockType) -> u8 {
        self.get(ty).emission
    }

    #[inline]
    pub fn hardness(&self, ty: BlockType) -> f32 {
        self.get(ty).hardness
    }

    #[inline]
    pub fn name(&self, ty: BlockType) -> &str {
        &self.get(ty).name
    }

    #[inline]
    pub fn color(&self, ty: BlockType) -> u32 {
        self.get(ty).color
    }

    /// Everything except air produces geometry.
    #[inline]
    pub fn needs_render(&self, ty: BlockType) -> bool {
        !ty.is_air()
    }

    /// Looks a type up by key name or display name.
    pub fn id_by_name(&self, name: &str) -> Option<BlockType> {
        self.by_name.get(name).copied()
    }

    /// Registered types in id order.
    pub fn block_types(&self) -> Vec<BlockType> {
        self.entries.iter().flatten().map(|p| p.id).collect()
    }

    pub fn opaque_blocks(&self) -> Vec<BlockType> {
        self.entries
            .iter()
            .flatten()
            .filter(|p| p.opaque)
            .map(|p| p.id)
            .collect()
    }

    pub fn transparent_blocks(&self) -> Vec<BlockType> {
        self.entries
            .iter()
            .flatten()
            .filter(|p| p.transparent)
            .map(|p| p.id)
            .collect()
    }

    /// Returns the subset of `required` that has no entry.
    pub fn validate(&self, required: &[BlockType]) -> Result<(), Vec<BlockType>> {
        let missing: Vec<BlockType> = required
            .iter()
            .copied()
            .filter(|ty| !self.contains(*ty))
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(missing)
        }
    }

    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn compile_def(def: BlockDef) -> Result<BlockProps, Box<dyn Error>> {
    if def.id == 0 {
        return Err(format!("block '{}': id 0 is reserved for air", def.name).into());
    }
    let solid = def.solid.unwrap_or(true);
    let opaque = def.opaque.unwrap_or(solid);
    let transparent = def.transparent.unwrap_or(!opaque);
    let emission = def.emission.unwrap_or(0);
    let light_blocking = def
        .light_blocking
        .unwrap_or(if opaque { MAX_LIGHT } else { 0 });
    if emission > MAX_LIGHT || light_blocking > MAX_LIGHT {
        return Err(format!(
            "block '{}': light values must be within 0..={MAX_LIGHT} (emission={emission}, light_blocking={light_blocking})",
            def.name
        )
        .into());
    }
    let display_name = def.display_name.unwrap_or_else(|| def.name.clone());
    Ok(BlockProps {
        id: BlockType(def.id),
        name: def.name,
        display_name,
        hardness: def.hardness.unwrap_or(0.0),
        opaque,
        transparent,
        solid,
        emission,
        light_blocking,
        color: def.color.unwrap_or(DEFAULT_COLOR),
    })
}
