//! Generator configuration.
//!
//! Every constant the asset files depend on lives here so both generators,
//! and any test, run off the same values without touching the filesystem.

use crate::error::{MesherError, Result};
use crate::types::{DepthLevel, Slope};

/// Configuration shared by the mesher and the permutation builder.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of fluid levels; depth runs 1..=max_depth.
    pub max_depth: u8,
    /// Slope set to generate, in output order.
    pub slopes: Vec<Slope>,
    /// Prefix of every geometry identifier, e.g. "geometry.lumstudio.fluid".
    pub identifier_base: String,
    /// Block-state name holding the (zero-based) fluid depth.
    pub depth_state: String,
    /// Block-state name holding the slope tag.
    pub slope_state: String,
    /// Prefix of the per-face visibility states, e.g. "lumstudio:invisible".
    pub invisible_state_prefix: String,
    /// Format version of the geometry file.
    pub geometry_format_version: String,
    /// Format version of the permutations file.
    pub permutations_format_version: String,
    /// Texture sheet dimensions declared in every geometry description.
    pub texture_width: u32,
    pub texture_height: u32,
    /// Visible-bounds metadata declared in every geometry description.
    pub visible_bounds_width: u32,
    pub visible_bounds_height: u32,
    pub visible_bounds_offset: [i32; 3],
    /// Texture for the top face of a still fluid.
    pub still_texture: String,
    /// Texture for flowing faces.
    pub flowing_texture: String,
    /// Texture for the top face of diagonally flowing fluid.
    pub diagonal_texture: String,
    /// Attach per-face bone-visibility conditions to each permutation.
    pub bone_visibility: bool,
    /// Namespaced identifier of the fluid block, e.g. "lumstudio:oil".
    pub block_id: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_depth: 8,
            slopes: Slope::ALL.to_vec(),
            identifier_base: "geometry.lumstudio.fluid".to_string(),
            depth_state: "lumstudio:depth".to_string(),
            slope_state: "slope".to_string(),
            invisible_state_prefix: "lumstudio:invisible".to_string(),
            geometry_format_version: "1.12.0".to_string(),
            permutations_format_version: "1.16.100".to_string(),
            texture_width: 64,
            texture_height: 64,
            visible_bounds_width: 16,
            visible_bounds_height: 16,
            visible_bounds_offset: [0, 0, 0],
            still_texture: "oil".to_string(),
            flowing_texture: "flowing_oil".to_string(),
            diagonal_texture: "oil".to_string(),
            bone_visibility: false,
            block_id: "lumstudio:oil".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Config for a named fluid: derives identifier base, textures and block
    /// id from the fluid name.
    pub fn for_fluid(namespace: &str, fluid: &str) -> Self {
        Self {
            identifier_base: format!("geometry.{}.fluid", namespace),
            still_texture: fluid.to_string(),
            flowing_texture: format!("flowing_{}", fluid),
            diagonal_texture: fluid.to_string(),
            block_id: format!("{}:{}", namespace, fluid),
            depth_state: format!("{}:depth", namespace),
            invisible_state_prefix: format!("{}:invisible", namespace),
            ..Self::default()
        }
    }

    /// Enable per-face bone-visibility conditions.
    pub fn with_bone_visibility(mut self, enabled: bool) -> Self {
        self.bone_visibility = enabled;
        self
    }

    /// The deterministic geometry identifier for one (depth, slope) pair.
    ///
    /// Both output files reference geometry through this one function; the
    /// engine resolves the permutation's geometry component against the
    /// identifier in the geometry file, so the strings must match exactly.
    pub fn geometry_identifier(&self, depth: DepthLevel, slope: Slope) -> String {
        format!("{}.{}_{}", self.identifier_base, depth.level(), slope)
    }

    /// Reject configs the generators cannot iterate.
    pub fn validate(&self) -> Result<()> {
        if self.max_depth == 0 {
            return Err(MesherError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        if self.slopes.is_empty() {
            return Err(MesherError::InvalidConfig(
                "slope set must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
