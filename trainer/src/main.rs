use anyhow::Result;
use clap::Parser;
use tracing::info;

use trainer::{build_trainer_app, load_config, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_deref(), args.danger_zone_tag.clone())?;
    info!(?cfg, "Trainer config loaded");

    let mut app = build_trainer_app(args, cfg);
    app.run();
    Ok(())
}
