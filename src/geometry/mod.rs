//! Geometry model types.
//!
//! These structs serialize to the engine's `*.geo.json` format: a list of
//! geometry models, each holding bones made of axis-aligned cuboids in a
//! 0-16 local unit space.

pub mod mesher;

pub use mesher::{build_geometry_file, mesh};

use serde::{Deserialize, Serialize};

/// An axis-aligned cuboid within a bone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cuboid {
    /// Minimum corner in the 0-16 local space.
    pub origin: [i32; 3],
    /// Extents per axis.
    pub size: [i32; 3],
    /// Texture-mapping origin.
    pub uv: [i32; 2],
}

impl Cuboid {
    /// Height of this cuboid (y extent).
    pub fn height(&self) -> i32 {
        self.size[1]
    }

    /// Whether the cuboid stays inside the 0-16 unit space on every axis.
    pub fn in_bounds(&self) -> bool {
        (0..3).all(|axis| {
            self.origin[axis] >= 0 && self.origin[axis] + self.size[axis] <= 16
        })
    }
}

/// A named group of cuboids positioned via a pivot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bone {
    pub name: String,
    pub pivot: [i32; 3],
    pub cubes: Vec<Cuboid>,
}

/// Metadata block of a geometry model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryDescription {
    pub identifier: String,
    pub texture_width: u32,
    pub texture_height: u32,
    pub visible_bounds_width: u32,
    pub visible_bounds_height: u32,
    pub visible_bounds_offset: [i32; 3],
}

/// One geometry model: a description plus its bones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryModel {
    pub description: GeometryDescription,
    pub bones: Vec<Bone>,
}

impl GeometryModel {
    /// All cuboids across all bones.
    pub fn cuboids(&self) -> impl Iterator<Item = &Cuboid> {
        self.bones.iter().flat_map(|bone| bone.cubes.iter())
    }
}

/// The complete geometry output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeometryFile {
    pub format_version: String,
    #[serde(rename = "minecraft:geometry")]
    pub geometry: Vec<GeometryModel>,
}

impl GeometryFile {
    /// Identifiers of every model in the file, in order.
    pub fn identifiers(&self) -> Vec<&str> {
        self.geometry
            .iter()
            .map(|model| model.description.identifier.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cuboid_bounds() {
        let inside = Cuboid {
            origin: [0, 0, 14],
            size: [16, 8, 2],
            uv: [0, 0],
        };
        assert!(inside.in_bounds());
        assert_eq!(inside.height(), 8);

        let outside = Cuboid {
            origin: [0, 0, 15],
            size: [16, 8, 2],
            uv: [0, 0],
        };
        assert!(!outside.in_bounds());
    }

    #[test]
    fn test_geometry_file_serializes_engine_keys() {
        let file = GeometryFile {
            format_version: "1.12.0".to_string(),
            geometry: vec![],
        };
        let json = serde_json::to_value(&file).unwrap();
        assert_eq!(json["format_version"], "1.12.0");
        assert!(json.get("minecraft:geometry").is_some());
    }
}
