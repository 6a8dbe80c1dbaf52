use std::path::PathBuf;

use bevy::prelude::Resource;
use clap::Parser;

#[derive(Parser, Debug, Resource, Clone, Default)]
#[command(name = "crane-trainer")]
#[command(about = "Overhead crane and gas analyzer training bay", long_about = None)]
pub struct Args {
    /// TOML file with crane, button, cable and analyzer settings
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Run without window/rendering
    #[arg(long, default_value_t = false)]
    pub headless: bool,
    /// Override the tag used to find hazard zones
    #[arg(long, env = "TRAINER_DANGER_ZONE_TAG")]
    pub danger_zone_tag: Option<String>,
}
