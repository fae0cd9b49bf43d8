//! Output file writing.
//!
//! Each run builds the documents in memory and writes them wholesale; a
//! failed write aborts with the underlying error and leaves no recovery to
//! do, since the files are regenerated from scratch every time.

use crate::block::{build_block_definition, BlockDefinition};
use crate::config::GeneratorConfig;
use crate::error::Result;
use crate::geometry::{build_geometry_file, GeometryFile};
use crate::permutations::{build_permutations_file, PermutationFile};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// File name of the geometry document.
pub const GEOMETRY_FILE_NAME: &str = "fluid_geometry.json";
/// File name of the permutation document.
pub const PERMUTATIONS_FILE_NAME: &str = "fluid_block_permutations.json";

fn write_pretty<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(BufWriter::new(file), value)?;
    Ok(())
}

/// Write the geometry document to `path`, overwriting it.
pub fn write_geometry_file<P: AsRef<Path>>(path: P, file: &GeometryFile) -> Result<()> {
    write_pretty(path.as_ref(), file)
}

/// Write the permutation document to `path`, overwriting it.
pub fn write_permutations_file<P: AsRef<Path>>(path: P, file: &PermutationFile) -> Result<()> {
    write_pretty(path.as_ref(), file)
}

/// Write the block definition to `path`, overwriting it.
pub fn write_block_definition<P: AsRef<Path>>(path: P, definition: &BlockDefinition) -> Result<()> {
    write_pretty(path.as_ref(), definition)
}

/// Paths and counts of one full generation run.
#[derive(Debug)]
pub struct GeneratedAssets {
    pub geometry_path: PathBuf,
    pub geometry_models: usize,
    pub permutations_path: PathBuf,
    pub permutation_entries: usize,
    pub block_path: PathBuf,
}

/// Generate all asset files into `out_dir`, creating it if needed.
pub fn generate_all<P: AsRef<Path>>(config: &GeneratorConfig, out_dir: P) -> Result<GeneratedAssets> {
    let out_dir = out_dir.as_ref();
    std::fs::create_dir_all(out_dir)?;

    let geometry = build_geometry_file(config)?;
    let geometry_path = out_dir.join(GEOMETRY_FILE_NAME);
    write_geometry_file(&geometry_path, &geometry)?;

    let permutations = build_permutations_file(config)?;
    let permutations_path = out_dir.join(PERMUTATIONS_FILE_NAME);
    write_permutations_file(&permutations_path, &permutations)?;

    let definition = build_block_definition(config);
    let block_path = out_dir.join(format!("{}.block.json", config.block_id.replace(':', "_")));
    write_block_definition(&block_path, &definition)?;

    Ok(GeneratedAssets {
        geometry_path,
        geometry_models: geometry.geometry.len(),
        permutations_path,
        permutation_entries: permutations.permutations.len(),
        block_path,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_all_writes_parseable_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        let assets = generate_all(&config, dir.path()).unwrap();

        assert_eq!(assets.geometry_models, 72);
        assert_eq!(assets.permutation_entries, 72);

        let geometry: GeometryFile =
            serde_json::from_reader(File::open(&assets.geometry_path).unwrap()).unwrap();
        let permutations: PermutationFile =
            serde_json::from_reader(File::open(&assets.permutations_path).unwrap()).unwrap();

        assert_eq!(geometry.geometry.len(), 72);
        assert_eq!(permutations.permutations.len(), 72);
        assert!(assets.block_path.ends_with("lumstudio_oil.block.json"));
        assert!(assets.block_path.exists());
    }

    #[test]
    fn test_outputs_overwrite_on_regeneration() {
        let dir = tempfile::tempdir().unwrap();
        let config = GeneratorConfig::default();
        generate_all(&config, dir.path()).unwrap();
        let first = std::fs::read_to_string(dir.path().join(GEOMETRY_FILE_NAME)).unwrap();
        generate_all(&config, dir.path()).unwrap();
        let second = std::fs::read_to_string(dir.path().join(GEOMETRY_FILE_NAME)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_fluid_state_overrides_within_declared_domain() {
        // Every fluid_state the permutations set must be a value the block
        // definition declares, or the engine can never apply the override.
        let config = GeneratorConfig::default();
        let definition = build_block_definition(&config);
        let domain = definition.block.description.properties["fluid_state"]
            .as_array()
            .unwrap()
            .clone();
        let permutations = build_permutations_file(&config).unwrap();
        let json = serde_json::to_value(&permutations).unwrap();
        for entry in json["minecraft:client_block_permutations"].as_array().unwrap() {
            let state = &entry["components"]["minecraft:block_state"]["fluid_state"];
            assert!(domain.contains(state), "undeclared fluid_state: {}", state);
        }
    }

    #[test]
    fn test_every_referenced_identifier_exists_in_geometry() {
        let config = GeneratorConfig::default();
        let geometry = build_geometry_file(&config).unwrap();
        let permutations = build_permutations_file(&config).unwrap();
        let identifiers = geometry.identifiers();
        for entry in &permutations.permutations {
            assert!(
                identifiers.contains(&entry.components.geometry.identifier()),
                "dangling geometry reference: {}",
                entry.components.geometry.identifier()
            );
        }
    }
}
