//! Block types and the read-only block catalog.
#![forbid(unsafe_code)]

pub mod catalog;
pub mod config;
pub mod types;

pub use catalog::{BlockCatalog, BlockProps};
pub use config::{BlockDef, BlocksConfig};
pub use types::BlockType;
