//! Trainer configuration: a TOML file whose tables map onto the mechanics
//! specs. Every field is optional; missing values fall back to the bay's
//! defaults.

use std::path::Path;

use anyhow::{Context, Result};
use bevy::prelude::Resource;
use mechanics::{AnalyzerSpec, ButtonPalette, CableSpec, CraneSpec};
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    pub crane: CraneSpec,
    pub buttons: ButtonPalette,
    pub cable: CableSpec,
    pub analyzer: AnalyzerSpec,
}

impl TrainerConfig {
    pub fn validate(&self) -> Result<()> {
        self.crane.validate().context("invalid [crane] settings")?;
        self.cable.validate().context("invalid [cable] settings")?;
        self.analyzer.validate().context("invalid [analyzer] settings")?;
        Ok(())
    }
}

pub fn parse_config(text: &str) -> Result<TrainerConfig> {
    let cfg: TrainerConfig = toml::from_str(text).context("failed to parse trainer config")?;
    cfg.validate()?;
    Ok(cfg)
}

/// Loads `path` if given, otherwise the defaults. A tag passed on the command
/// line wins over the file.
pub fn load_config(path: Option<&Path>, tag_override: Option<String>) -> Result<TrainerConfig> {
    let mut cfg = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            parse_config(&text).with_context(|| format!("in {}", path.display()))?
        }
        None => TrainerConfig::default(),
    };
    if let Some(tag) = tag_override {
        cfg.analyzer.danger_zone_tag = tag;
        cfg.analyzer.validate().context("invalid --danger-zone-tag")?;
    }
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/trainer.toml")), None).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config"));
    }

    #[test]
    fn file_values_override_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[crane]
speed_east_west = 1.5

[cable]
segments = 6
sag = 0.8
"#
        )
        .unwrap();
        let cfg = load_config(Some(file.path()), None).unwrap();
        assert_eq!(cfg.crane.speed_east_west, 1.5);
        assert_eq!(cfg.crane.speed_up_down, 1.0);
        assert_eq!(cfg.cable.segments, 6);
        assert_eq!(cfg.analyzer.danger_zone_tag, "DangerZone");
    }

    #[test]
    fn tag_override_wins() {
        let cfg = load_config(None, Some("Leak".into())).unwrap();
        assert_eq!(cfg.analyzer.danger_zone_tag, "Leak");
        assert!(load_config(None, Some(String::new())).is_err());
    }

    #[test]
    fn inverted_limits_are_rejected() {
        let err = parse_config("[crane]\nx_limits = { min = 4.0, max = -4.0 }").unwrap_err();
        assert!(format!("{err:#}").contains("[crane]"));
    }
}
