//! # Fluid Mesher
//!
//! A Rust library for generating Bedrock-style JSON assets for custom fluid
//! blocks: sloped-surface geometry models and the client block permutation
//! table that selects them at render time.
//!
//! ## Overview
//!
//! A fluid block has a depth level (how full it is) and a slope tag (which
//! edge the surface dips towards). For every (depth, slope) pair the mesher
//! approximates the sloped surface with axis-aligned cuboid slices, and the
//! permutation builder emits the matching conditional render rule. The two
//! outputs are linked only by the deterministic geometry identifier.
//!
//! ## Quick Start
//!
//! ```ignore
//! use fluid_mesher::{generate_all, GeneratorConfig};
//!
//! let config = GeneratorConfig::for_fluid("lumstudio", "oil");
//! let assets = generate_all(&config, "out/")?;
//! println!("{} models, {} permutations",
//!     assets.geometry_models, assets.permutation_entries);
//! ```
//!
//! ## Library Integration
//!
//! The in-memory documents are plain serde types, so a build pipeline can
//! post-process them before writing:
//!
//! ```ignore
//! use fluid_mesher::{build_geometry_file, build_permutations_file, GeneratorConfig};
//!
//! let config = GeneratorConfig::default().with_bone_visibility(true);
//! let geometry = build_geometry_file(&config)?;
//! let permutations = build_permutations_file(&config)?;
//! ```

pub mod block;
pub mod config;
pub mod error;
pub mod geometry;
pub mod output;
pub mod permutations;
pub mod types;

// Re-export main types for convenience
pub use block::{build_block_definition, BlockDefinition};
pub use config::GeneratorConfig;
pub use error::{MesherError, Result};
pub use geometry::{build_geometry_file, mesh, Bone, Cuboid, GeometryFile, GeometryModel};
pub use output::{
    generate_all, write_block_definition, write_geometry_file, write_permutations_file,
    GeneratedAssets,
};
pub use permutations::{
    build_permutations, build_permutations_file, dedup_entries, PermutationEntry, PermutationFile,
};
pub use types::{DepthLevel, FluidState, Slope};
