use serde::Deserialize;

// Top-level blocks config file
#[derive(Deserialize, Debug, Clone, Default)]
pub struct BlocksConfig {
    #[serde(default)]
    pub blocks: Vec<BlockDef>,
}

// One `[[blocks]]` entry. Omitted properties are derived from `solid`/`opaque`
// when the catalog compiles the definition.
#[derive(Deserialize, Debug, Clone)]
pub struct BlockDef {
    pub name: String,
    pub id: u8,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub hardness: Option<f32>,
    #[serde(default)]
    pub solid: Option<bool>,
    #[serde(default)]
    pub opaque: Option<bool>,
    #[serde(default)]
    pub transparent: Option<bool>,
    #[serde(default)]
    pub emission: Option<u8>,
    #[serde(default)]
    pub light_blocking: Option<u8>,
    // 0xRRGGBB
    #[serde(default)]
    pub color: Option<u32>,
}

impl BlockDef {
    pub fn new(name: impl Into<String>, id: u8) -> Self {
        Self {
            name: name.into(),
            id,
            display_name: None,
            hardness: None,
            solid: None,
            opaque: None,
            transparent: None,
            emission: None,
            light_blocking: None,
            color: None,
        }
    }
}
