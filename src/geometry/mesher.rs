//! Fluid surface meshing.
//!
//! Approximates a sloped liquid surface with axis-aligned cuboid slices.
//! Cardinal slopes subdivide the footprint into 8 slices along the flow
//! axis; diagonal slopes use a 4x4 grid with the interpolation factor
//! averaged between the two axes.
//!
//! All rounding here is half-away-from-zero (`f32::round`). Golden slice
//! heights in the tests assume that mode.

use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::geometry::{Bone, Cuboid, GeometryDescription, GeometryFile, GeometryModel};
use crate::types::{DepthLevel, Slope};

/// Slice count along the flow axis for cardinal slopes.
const CARDINAL_SLICES: i32 = 8;
/// Slice count per axis for diagonal slopes.
const DIAGONAL_SLICES: i32 = 4;
/// Maximum surface drop, in 16ths of a block.
const MAX_DROP: f32 = 4.0;

/// Mesh one fluid surface into a geometry model.
///
/// Total over its domain: every (depth, slope) pair yields a model, flat
/// fluids and near-full blocks collapsing to a single cuboid.
pub fn mesh(depth: DepthLevel, slope: Slope, config: &GeneratorConfig) -> GeometryModel {
    let fluid_height = depth.fluid_height(config.max_depth);

    let mut bone = Bone {
        name: "fluid".to_string(),
        pivot: [0, 0, 0],
        cubes: Vec::new(),
    };

    // Flat case: still fluid, too shallow to slope, or a full block where
    // the slope collapses anyway.
    if slope.is_none() || fluid_height < 4 || depth.is_full(config.max_depth) {
        bone.cubes.push(Cuboid {
            origin: [0, 0, 0],
            size: [16, fluid_height, 16],
            uv: [0, 0],
        });
        return wrap_model(bone, depth, slope, config);
    }

    // Visual lip of the flowing surface, scaling to zero as the block fills.
    let drop = ((1.0 - depth.fraction(config.max_depth)) * MAX_DROP).round();

    if slope.is_cardinal() {
        let thickness = 16 / CARDINAL_SLICES;
        let along_z = matches!(slope, Slope::North | Slope::South);
        for i in 0..CARDINAL_SLICES {
            let offset = i * thickness;
            let center = offset as f32 + thickness as f32 / 2.0;
            let factor = if along_z {
                slope.surface_factor(8.0, center)
            } else {
                slope.surface_factor(center, 8.0)
            };
            let height = slice_height(fluid_height, drop, factor);
            bone.cubes.push(if along_z {
                Cuboid {
                    origin: [0, 0, offset],
                    size: [16, height, thickness],
                    uv: [0, 0],
                }
            } else {
                Cuboid {
                    origin: [offset, 0, 0],
                    size: [thickness, height, 16],
                    uv: [0, 0],
                }
            });
        }
    } else {
        let thickness = 16 / DIAGONAL_SLICES;
        for i in 0..DIAGONAL_SLICES {
            for j in 0..DIAGONAL_SLICES {
                let x_origin = i * thickness;
                let z_origin = j * thickness;
                let center_x = x_origin as f32 + thickness as f32 / 2.0;
                let center_z = z_origin as f32 + thickness as f32 / 2.0;
                let height =
                    slice_height(fluid_height, drop, slope.surface_factor(center_x, center_z));
                bone.cubes.push(Cuboid {
                    origin: [x_origin, 0, z_origin],
                    size: [thickness, height, thickness],
                    uv: [0, 0],
                });
            }
        }
    }

    wrap_model(bone, depth, slope, config)
}

/// Interpolated slice height, clamped so no slice degenerates to zero.
fn slice_height(fluid_height: i32, drop: f32, factor: f32) -> i32 {
    let top = (fluid_height as f32 - drop) + factor * drop;
    (top.round() as i32).max(1)
}

fn wrap_model(
    bone: Bone,
    depth: DepthLevel,
    slope: Slope,
    config: &GeneratorConfig,
) -> GeometryModel {
    GeometryModel {
        description: GeometryDescription {
            identifier: config.geometry_identifier(depth, slope),
            texture_width: config.texture_width,
            texture_height: config.texture_height,
            visible_bounds_width: config.visible_bounds_width,
            visible_bounds_height: config.visible_bounds_height,
            visible_bounds_offset: config.visible_bounds_offset,
        },
        bones: vec![bone],
    }
}

/// Build the full geometry document over the (depth x slope) cross-product.
pub fn build_geometry_file(config: &GeneratorConfig) -> Result<GeometryFile> {
    config.validate()?;
    let mut geometry = Vec::new();
    for depth in DepthLevel::all(config.max_depth) {
        for &slope in &config.slopes {
            geometry.push(mesh(depth, slope, config));
        }
    }
    Ok(GeometryFile {
        format_version: config.geometry_format_version.clone(),
        geometry,
    })
}
