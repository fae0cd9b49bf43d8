//! Server-side block definition building.
//!
//! Emits the block JSON that registers the fluid with the engine: the state
//! domains the permutations condition on, plus baseline components. Loose
//! component keys (placement filter, destructibility, `tag:*`) carry no
//! schema of their own and are built as raw JSON values.

use crate::config::GeneratorConfig;
use crate::types::{DepthLevel, FluidState, Slope};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::collections::BTreeMap;

/// The complete block definition document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDefinition {
    pub format_version: String,
    #[serde(rename = "minecraft:block")]
    pub block: Block,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Block {
    pub description: BlockDescription,
    pub components: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDescription {
    pub identifier: String,
    pub properties: BTreeMap<String, Value>,
}

/// Build the block definition for the configured fluid.
pub fn build_block_definition(config: &GeneratorConfig) -> BlockDefinition {
    let namespace = config
        .block_id
        .split(':')
        .next()
        .unwrap_or(&config.block_id);
    let safe_id = config.block_id.replace(':', "_");

    let mut properties = BTreeMap::new();
    properties.insert(
        config.depth_state.clone(),
        Value::from((0..config.max_depth).collect::<Vec<u8>>()),
    );
    properties.insert(
        config.slope_state.clone(),
        Value::from(
            config
                .slopes
                .iter()
                .map(|slope| slope.name())
                .collect::<Vec<&str>>(),
        ),
    );
    properties.insert(
        "fluid_state".to_string(),
        Value::from(
            FluidState::ALL
                .iter()
                .map(|state| state.name())
                .collect::<Vec<&str>>(),
        ),
    );
    properties.insert(
        format!("{}:fluid_mode", namespace),
        json!(["dormant", "active"]),
    );

    let mut components = Map::new();
    components.insert(
        "minecraft:material_instances".to_string(),
        json!({
            "*": {
                "texture": safe_id,
                "render_method": "blend"
            }
        }),
    );
    // Default geometry: the full still column; permutations swap it per state.
    components.insert(
        "minecraft:geometry".to_string(),
        Value::from(config.geometry_identifier(DepthLevel::new(config.max_depth), Slope::None)),
    );
    components.insert(
        "minecraft:placement_filter".to_string(),
        json!({
            "conditions": [
                { "allowed_faces": ["up", "down", "north", "south", "east", "west"] }
            ]
        }),
    );
    components.insert(
        "minecraft:loot".to_string(),
        Value::from("loot_tables/empty.json"),
    );
    components.insert(
        "minecraft:destructible_by_mining".to_string(),
        json!({ "seconds_to_destroy": 100 }),
    );
    components.insert(
        "minecraft:destructible_by_explosion".to_string(),
        json!({ "explosion_resistance": 500 }),
    );
    components.insert("tag:fluid".to_string(), json!({}));
    components.insert(format!("tag:{}", safe_id), json!({}));

    BlockDefinition {
        format_version: "1.19.70".to_string(),
        block: Block {
            description: BlockDescription {
                identifier: config.block_id.clone(),
                properties,
            },
            components,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_domains_match_generators() {
        let config = GeneratorConfig::default();
        let definition = build_block_definition(&config);
        let properties = &definition.block.description.properties;

        let depths = properties["lumstudio:depth"].as_array().unwrap();
        assert_eq!(depths.len(), 8);
        assert_eq!(depths[0], 0);
        assert_eq!(depths[7], 7);

        let slopes = properties["slope"].as_array().unwrap();
        assert_eq!(slopes.len(), 9);
        assert_eq!(slopes[0], "none");

        let states = properties["fluid_state"].as_array().unwrap();
        assert_eq!(states.len(), 8);
    }

    #[test]
    fn test_default_geometry_is_full_still_column() {
        let config = GeneratorConfig::default();
        let definition = build_block_definition(&config);
        assert_eq!(
            definition.block.components["minecraft:geometry"],
            "geometry.lumstudio.fluid.8_none"
        );
    }

    #[test]
    fn test_fluid_tags_present() {
        let config = GeneratorConfig::for_fluid("acme", "tar");
        let definition = build_block_definition(&config);
        assert_eq!(definition.block.description.identifier, "acme:tar");
        assert!(definition.block.components.contains_key("tag:fluid"));
        assert!(definition.block.components.contains_key("tag:acme_tar"));
    }
}
