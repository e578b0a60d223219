use natal::EngineSettings;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EngineToml {
    #[serde(default)]
    natal_quincunx: Option<bool>,
    #[serde(default)]
    default_birth_hour: Option<u32>,
    #[serde(default)]
    default_birth_minute: Option<u32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct NarrativeToml {
    #[serde(default)]
    max_strengths: Option<usize>,
    #[serde(default)]
    max_challenges: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct CelebritiesToml {
    #[serde(default)]
    matches: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RootConfigToml {
    #[serde(default)]
    engine: Option<EngineToml>,
    #[serde(default)]
    narrative: Option<NarrativeToml>,
    #[serde(default)]
    celebrities: Option<CelebritiesToml>,
}

/// Relative paths probed when no explicit config path is given: the
/// workspace root, then two levels up for binaries run from `apps/<name>`.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/natal.toml", "../../configs/natal.toml"];

/// Text of the config file. An explicit path must exist; otherwise the
/// default locations are probed and `None` means none was found.
pub fn read_config_toml_text(path: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }
    for p in &DEFAULT_CONFIG_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), text)));
        }
    }
    Ok(None)
}

/// Parse settings from TOML text. Missing sections and keys keep their
/// defaults; unknown ones are rejected.
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse natal config: {e}"))?;
    let mut settings = EngineSettings::default();

    let engine = root.engine.unwrap_or_default();
    if let Some(v) = engine.natal_quincunx {
        settings.natal_quincunx = v;
    }
    if let Some(v) = engine.default_birth_hour {
        settings.default_birth_hour = v;
    }
    if let Some(v) = engine.default_birth_minute {
        settings.default_birth_minute = v;
    }

    let narrative = root.narrative.unwrap_or_default();
    if let Some(v) = narrative.max_strengths {
        settings.max_strengths = v;
    }
    if let Some(v) = narrative.max_challenges {
        settings.max_challenges = v;
    }

    if let Some(v) = root.celebrities.unwrap_or_default().matches {
        settings.celebrity_matches = v;
    }

    settings.default_birth_time().map_err(|e| {
        anyhow::anyhow!("engine.default_birth_hour/default_birth_minute do not form a clock time: {e}")
    })?;
    Ok(settings)
}

pub fn load_engine_settings(path: Option<&Path>) -> anyhow::Result<EngineSettings> {
    match read_config_toml_text(path)? {
        Some((source, text)) => {
            let settings = parse_engine_settings(&text)
                .map_err(|e| anyhow::anyhow!("{}: {e}", source.display()))?;
            log::debug!("Loaded engine settings from {}", source.display());
            Ok(settings)
        }
        None => {
            log::warn!("No natal config found in {:?}, using defaults", DEFAULT_CONFIG_PATHS);
            Ok(EngineSettings::default())
        }
    }
}
