//! Permutation table building.
//!
//! Walks the same (depth x slope) cross-product as the mesher, depth-major
//! then slope-minor, and emits one conditional render rule per pair. The
//! geometry reference in each rule comes from the same naming function the
//! mesher uses; the engine resolves the two files against each other purely
//! by that string.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::permutations::{
    BlockStateOverride, Components, GeometryReference, MaterialInstance, PermutationEntry,
    PermutationFile, Transformation,
};
use crate::types::{DepthLevel, FluidState, Slope};
use std::collections::BTreeMap;

/// Face names carrying a visibility state.
const FACES: [&str; 6] = ["up", "down", "north", "east", "west", "south"];
/// Side faces with half and micro tiers.
const SIDE_FACES: [&str; 4] = ["north", "east", "west", "south"];

/// Build the deduplicated permutation list over the full cross-product.
pub fn build_permutations(config: &GeneratorConfig) -> Result<Vec<PermutationEntry>> {
    config.validate()?;
    let mut entries = Vec::new();
    for depth in DepthLevel::all(config.max_depth) {
        let state = FluidState::from_depth(depth, config.max_depth);
        for &slope in &config.slopes {
            entries.push(build_entry(depth, slope, state, config));
        }
    }
    Ok(dedup_entries(entries))
}

/// Build the full permutation document.
pub fn build_permutations_file(config: &GeneratorConfig) -> Result<PermutationFile> {
    Ok(PermutationFile {
        format_version: config.permutations_format_version.clone(),
        permutations: build_permutations(config)?,
    })
}

fn build_entry(
    depth: DepthLevel,
    slope: Slope,
    state: FluidState,
    config: &GeneratorConfig,
) -> PermutationEntry {
    // The engine state is zero-based while depth levels start at 1.
    let condition = format!(
        "q.block_state('{}') == {} && q.block_state('{}') == '{}'",
        config.depth_state,
        depth.level() - 1,
        config.slope_state,
        slope
    );

    let identifier = config.geometry_identifier(depth, slope);
    let geometry = if config.bone_visibility {
        GeometryReference::WithVisibility {
            identifier,
            bone_visibility: bone_visibility(depth, config),
        }
    } else {
        GeometryReference::Identifier(identifier)
    };

    PermutationEntry {
        condition,
        components: Components {
            geometry,
            block_state: Some(BlockStateOverride { fluid_state: state }),
            material_instances: Some(material_instances(slope, config)),
            transformation: slope.rotation().map(|rotation| Transformation { rotation }),
        },
    }
}

/// Material overrides for one slope: every face uses the flowing texture,
/// except the top face of still fluid (still texture) and of diagonally
/// flowing fluid (diagonal texture).
fn material_instances(slope: Slope, config: &GeneratorConfig) -> BTreeMap<String, MaterialInstance> {
    let mut materials = BTreeMap::new();
    materials.insert("*".to_string(), MaterialInstance::fluid(&config.flowing_texture));
    if slope.is_none() {
        materials.insert("up".to_string(), MaterialInstance::fluid(&config.still_texture));
    } else if slope.is_diagonal() {
        materials.insert(
            "up".to_string(),
            MaterialInstance::fluid(&config.diagonal_texture),
        );
    }
    materials
}

/// Per-face visibility conditions keyed by the auxiliary `invisible_*`
/// states: base faces render at state 0, half faces at 1, and the micro
/// faces at 3. Micro faces exist only on the full-bucket geometry tier,
/// which covers every depth that buckets to `full`.
fn bone_visibility(depth: DepthLevel, config: &GeneratorConfig) -> BTreeMap<String, String> {
    let prefix = &config.invisible_state_prefix;
    let mut bones = BTreeMap::new();
    for face in FACES {
        bones.insert(
            face.to_string(),
            format!("q.block_state('{}_{}') == 0", prefix, face),
        );
    }
    for face in SIDE_FACES {
        bones.insert(
            format!("{}_half", face),
            format!("q.block_state('{}_{}') == 1", prefix, face),
        );
    }
    if FluidState::from_depth(depth, config.max_depth) == FluidState::Full {
        for face in SIDE_FACES {
            bones.insert(
                format!("{}_micro", face),
                format!("q.block_state('{}_{}') == 3", prefix, face),
            );
        }
    }
    bones
}

/// Remove exact duplicates, keeping the first occurrence of each entry in
/// its original position.
pub fn dedup_entries(entries: Vec<PermutationEntry>) -> Vec<PermutationEntry> {
    let mut unique: Vec<PermutationEntry> = Vec::with_capacity(entries.len());
    for entry in entries {
        if !unique.contains(&entry) {
            unique.push(entry);
        }
    }
    unique
}
