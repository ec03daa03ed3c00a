use anyhow::{bail, Result};
use clap::Parser;
use std::path::PathBuf;

use flashpack::{collect, scan_tree, write_header, Manifest, MimeResolver};

/// Generates a PROGMEM_Files header file from a folder of static assets
#[derive(Parser, Debug)]
#[command(name = "flashpack", version, about)]
struct Args {
    /// The folder to scan
    #[arg(long, default_value = "public")]
    folder: PathBuf,

    /// The output header file (overwritten if it exists)
    #[arg(long, default_value = "PROGMEM_Files.h")]
    output: PathBuf,

    /// Optional path for a JSON manifest describing the run
    #[arg(long)]
    manifest: Option<PathBuf>,
}

fn main() -> Result<()> {
    println!("<<PROGMEM_Files.h Generator>>\n");

    let args = Args::parse();

    // A missing root is fatal: no output, non-zero exit
    if !args.folder.is_dir() {
        bail!("The folder {} does not exist", args.folder.display());
    }

    println!("Collecting files from {}...", args.folder.display());
    let paths = scan_tree(&args.folder)?;
    for path in &paths {
        println!("===> {}", path);
    }
    println!("Found {} file(s)", paths.len());

    let resolver = MimeResolver::new();
    let table = collect(&args.folder, &paths, &resolver)?;

    println!("Generating header file..");
    println!("Saving to {}", args.output.display());
    let header_size = write_header(&args.output, &table)?;

    if let Some(manifest_path) = &args.manifest {
        let manifest = Manifest::new(
            &table,
            &args.folder.to_string_lossy(),
            &args.output.to_string_lossy(),
            header_size as u64,
        );
        manifest.write_to_file(manifest_path)?;
        println!("Wrote manifest to {}", manifest_path.display());
    }

    println!("Successfully generated header file..");

    Ok(())
}
