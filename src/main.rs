use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;
use tree_gedcom::{ExportConfig, GedcomExporter};

/// Export a family tree directory as a GEDCOM 5.5.1 file
#[derive(Debug, Parser)]
#[command(name = "tree-gedcom", version, about)]
struct Cli {
    /// Directory holding the three input documents
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Output GEDCOM file
    #[arg(short, long, default_value = "output/export.ged")]
    output: PathBuf,

    /// File name of the tree node document inside the data directory
    #[arg(long, default_value = "tree.json")]
    tree_file: String,

    /// File name of the annotations document inside the data directory
    #[arg(long, default_value = "annotations.json")]
    annotations_file: String,

    /// File name of the relatives document inside the data directory
    #[arg(long, default_value = "relatives_10.json")]
    relatives_file: String,

    /// Product id written to the header SOUR line
    #[arg(long)]
    source_id: Option<String>,
}

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut config = ExportConfig::default()
        .with_data_dir(cli.data_dir)
        .with_output_path(cli.output)
        .with_tree_file(cli.tree_file)
        .with_annotations_file(cli.annotations_file)
        .with_relatives_file(cli.relatives_file);
    if let Some(product_id) = cli.source_id {
        config.source.product_id = product_id;
    }
    info!("{config}");

    let summary = GedcomExporter::from_config(&config)
        .export(config.output_path())
        .with_context(|| format!("GEDCOM export to {} failed", config.output_path().display()))?;

    println!("{summary}");
    Ok(())
}
