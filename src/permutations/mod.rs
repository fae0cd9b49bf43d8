//! Client block permutation types.
//!
//! These structs serialize to the engine's client block permutation format:
//! a list of condition expressions paired with render override components.
//! Optional components are omitted from the output entirely when absent.

pub mod builder;

pub use builder::{build_permutations, build_permutations_file, dedup_entries};

use crate::types::FluidState;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reference to a geometry model, optionally gated per bone.
///
/// Serializes either as a bare identifier string or as an object carrying
/// per-face visibility conditions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeometryReference {
    Identifier(String),
    WithVisibility {
        identifier: String,
        bone_visibility: BTreeMap<String, String>,
    },
}

impl GeometryReference {
    /// The referenced geometry identifier.
    pub fn identifier(&self) -> &str {
        match self {
            GeometryReference::Identifier(id) => id,
            GeometryReference::WithVisibility { identifier, .. } => identifier,
        }
    }
}

/// One material override for a face selector ("*", "up", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterialInstance {
    pub texture: String,
    pub render_method: String,
    pub face_dimming: bool,
    pub ambient_occlusion: bool,
}

impl MaterialInstance {
    /// A blended, undimmed fluid material for the given texture.
    pub fn fluid(texture: &str) -> Self {
        Self {
            texture: texture.to_string(),
            render_method: "blend".to_string(),
            face_dimming: false,
            ambient_occlusion: false,
        }
    }
}

/// Block-state overrides set alongside the geometry swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStateOverride {
    pub fluid_state: FluidState,
}

/// Mesh rotation override, degrees per axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    pub rotation: [i32; 3],
}

/// The override components of one permutation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    #[serde(rename = "minecraft:geometry")]
    pub geometry: GeometryReference,

    #[serde(rename = "minecraft:block_state", skip_serializing_if = "Option::is_none")]
    pub block_state: Option<BlockStateOverride>,

    #[serde(
        rename = "minecraft:material_instances",
        skip_serializing_if = "Option::is_none"
    )]
    pub material_instances: Option<BTreeMap<String, MaterialInstance>>,

    #[serde(
        rename = "minecraft:transformation",
        skip_serializing_if = "Option::is_none"
    )]
    pub transformation: Option<Transformation>,
}

/// A conditional rule mapping block state to render overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationEntry {
    pub condition: String,
    pub components: Components,
}

/// The complete permutation output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PermutationFile {
    pub format_version: String,
    #[serde(rename = "minecraft:client_block_permutations")]
    pub permutations: Vec<PermutationEntry>,
}
