//! Fluid Mesher CLI
//!
//! Generate Bedrock fluid geometry and client permutation assets.

use clap::{Parser, Subcommand};
use fluid_mesher::{build_geometry_file, build_permutations_file, generate_all, GeneratorConfig};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fluid-mesher")]
#[command(author, version, about = "Generate Bedrock fluid block assets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate geometry, permutation and block definition files
    Generate {
        /// Output directory for the asset files
        #[arg(short, long, default_value = "out")]
        output: PathBuf,

        /// Namespace of the content pack (e.g., "lumstudio")
        #[arg(short, long, default_value = "lumstudio")]
        namespace: String,

        /// Fluid name (e.g., "oil")
        #[arg(short, long, default_value = "oil")]
        fluid: String,

        /// Attach per-face bone visibility conditions to each permutation
        #[arg(long)]
        bone_visibility: bool,

        /// Number of fluid depth levels
        #[arg(long, default_value = "8")]
        max_depth: u8,
    },

    /// Print generation counts without writing any files
    Info {
        /// Namespace of the content pack
        #[arg(short, long, default_value = "lumstudio")]
        namespace: String,

        /// Fluid name
        #[arg(short, long, default_value = "oil")]
        fluid: String,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            output,
            namespace,
            fluid,
            bone_visibility,
            max_depth,
        } => {
            let mut config =
                GeneratorConfig::for_fluid(&namespace, &fluid).with_bone_visibility(bone_visibility);
            config.max_depth = max_depth;

            let assets = generate_all(&config, &output)?;
            println!(
                "Generated {} geometry models in '{}'.",
                assets.geometry_models,
                assets.geometry_path.display()
            );
            println!(
                "Generated {} permutation entries in '{}'.",
                assets.permutation_entries,
                assets.permutations_path.display()
            );
            println!("Generated block definition in '{}'.", assets.block_path.display());
        }

        Commands::Info { namespace, fluid } => {
            let config = GeneratorConfig::for_fluid(&namespace, &fluid);
            let geometry = build_geometry_file(&config)?;
            let permutations = build_permutations_file(&config)?;
            println!("Fluid: {}", config.block_id);
            println!("Depth levels: 1..={}", config.max_depth);
            println!("Slopes: {}", config.slopes.len());
            println!("Geometry models: {}", geometry.geometry.len());
            println!("Permutation entries: {}", permutations.permutations.len());
        }
    }

    Ok(())
}
