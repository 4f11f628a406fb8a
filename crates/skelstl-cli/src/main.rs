//! skelstl entry point

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;

use skelstl_core::{ExportOptions, Model, export_model};

#[derive(Parser, Debug)]
#[command(name = "skelstl", about = "Skeletal model STL exporter")]
struct Args {
    /// Path to the model snapshot file
    infile: PathBuf,

    /// Path to the output directory
    #[arg(short, long, default_value = "output")]
    outdir: PathBuf,

    /// Export only joint-axis proxies and proxy bodies, skipping real meshes
    #[arg(short, long)]
    jointsonly: bool,

    /// Directory holding the model's mesh assets
    /// (defaults to Geometry/ next to the model file)
    #[arg(short, long)]
    geomdir: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "skelstl=info,skelstl_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();

    let model = Model::load(&args.infile)
        .with_context(|| format!("loading model {}", args.infile.display()))?;
    tracing::info!("Loaded model: {}", model.name);

    let geometry_dir = args.geomdir.unwrap_or_else(|| {
        args.infile
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join("Geometry")
    });

    let options = ExportOptions {
        output_dir: args.outdir,
        geometry_dir,
        joints_only: args.jointsonly,
    };

    export_model(&model, &options).context("export failed")?;
    Ok(())
}
