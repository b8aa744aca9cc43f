//! Elemgen CLI orchestrator
//!
//! This binary provides the main entry point for elemgen: it resolves the
//! element catalog and output directory from flags and/or a config file and
//! runs the generation pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![deny(clippy::unwrap_used)]

use std::env;
use std::path::PathBuf;

use catalog::Catalog;
use config::Config;

fn main() {
    let args: Vec<String> = env::args().collect();

    // Handle help flag
    if args.iter().any(|a| a == "--help" || a == "-h") {
        println!("elemgen");
        println!();
        println!("USAGE:");
        println!("    elemgen [SUBCOMMAND] [FLAGS]");
        println!();
        println!("SUBCOMMANDS:");
        println!("    generate                      Generate element bindings from the catalog");
        println!("    --help, -h                    Show this help message");
        println!("FLAGS:");
        println!("    --catalog <file>              Load the element catalog from a .toml file (default: the embedded catalog)");
        println!("    --output <dir>                Write generated files to <dir>");
        println!("    --config <file>               Load catalog/output settings from a config file; flags override it");
        println!();
        println!("EXAMPLES:");
        println!("    elemgen generate --output generated");
        println!("    elemgen generate --catalog resources/elements.toml --output generated");
        return;
    }

    // Handle generate subcommand
    if args.iter().any(|a| a == "generate") {
        let config = match flag_value(&args, "--config") {
            Some(path) => match Config::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Error: Failed to load config file '{}': {}", path, e);
                    std::process::exit(1);
                }
            },
            None => Config::default(),
        };

        // Catalog: --catalog flag, then config file, then the embedded table.
        let catalog_path =
            flag_value(&args, "--catalog").map(PathBuf::from).or(config.catalog.input_path);
        let catalog = match &catalog_path {
            Some(path) => match Catalog::from_file(path) {
                Ok(catalog) => catalog,
                Err(e) => {
                    eprintln!("Error: Failed to load catalog '{}': {}", path.display(), e);
                    std::process::exit(1);
                }
            },
            None => {
                logging::trace("cli", "using the embedded element catalog");
                Catalog::builtin()
            }
        };

        let out_dir = match flag_value(&args, "--output") {
            Some(dir) => PathBuf::from(dir),
            None => config.output.dir,
        };

        if out_dir.exists() {
            logging::warn(
                "cli",
                &format!(
                    "output directory {} already exists; generated files will be overwritten",
                    out_dir.display()
                ),
            );
        }

        match pipeline::generate(&catalog, &out_dir) {
            Ok(summary) => {
                println!(
                    "Generated {} files for {} elements into {}",
                    summary.artifacts,
                    summary.entries,
                    out_dir.display()
                );
            }
            Err(e) => {
                eprintln!("Generation failed: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    // No default behavior - show help if no valid subcommand provided
    eprintln!("Error: No valid subcommand provided");
    eprintln!("Use 'elemgen --help' for usage information");
    std::process::exit(1);
}

/// Value following `flag` in the argument list, if any.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a String> {
    args.iter().position(|a| a == flag).and_then(|i| args.get(i + 1))
}
