use anyhow::Context;
use horary::{GeoLocation, JudgeOptions, MoonContactMode};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Relative locations tried for `horary.toml` when no path is given.
pub const CONFIG_CANDIDATES: [&str; 2] = ["configs/horary.toml", "../../configs/horary.toml"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HorarySettings {
    /// Swiss Ephemeris data directory; `None` defers to the adapter's default.
    pub ephemeris_path: Option<PathBuf>,
    /// Default place of asking.
    pub location: Option<GeoLocation>,
    pub judge: JudgeOptions,
}

#[derive(Debug, Clone, Deserialize)]
struct LocationToml {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct JudgmentToml {
    #[serde(default)]
    moon_contact: MoonContactMode,
    #[serde(default)]
    affliction_rules: bool,
}

#[derive(Debug, Clone, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris_path: Option<PathBuf>,
    #[serde(default)]
    location: Option<LocationToml>,
    #[serde(default)]
    judgment: Option<JudgmentToml>,
}

pub fn parse_settings(text: &str) -> anyhow::Result<HorarySettings> {
    let root: RootConfigToml = toml::from_str(text).context("Failed to parse horary.toml")?;

    let location = match root.location {
        Some(LocationToml { lat, lon }) => {
            let location = GeoLocation::new(lat, lon);
            if !location.is_valid() {
                anyhow::bail!("[location] out of range: lat {lat} (±90), lon {lon} (±180)");
            }
            Some(location)
        }
        None => None,
    };

    let judgment = root.judgment.unwrap_or_default();
    Ok(HorarySettings {
        ephemeris_path: root.ephemeris_path,
        location,
        judge: JudgeOptions {
            moon_contact: judgment.moon_contact,
            affliction_rules: judgment.affliction_rules,
        },
    })
}

/// Read `horary.toml` from an explicit path, or the first candidate that exists.
pub fn read_horary_toml_text(explicit: Option<&Path>) -> anyhow::Result<String> {
    if let Some(path) = explicit {
        return fs::read_to_string(path).with_context(|| format!("Could not read {}", path.display()));
    }
    for p in &CONFIG_CANDIDATES {
        if let Ok(c) = fs::read_to_string(p) {
            return Ok(c);
        }
    }
    anyhow::bail!("Could not load horary.toml from {:?}", CONFIG_CANDIDATES);
}

pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<HorarySettings> {
    let text = read_horary_toml_text(explicit)?;
    parse_settings(&text)
}

/// Like [`load_settings`], but a missing file yields defaults.
///
/// An explicit path that cannot be read and a file that fails to parse are
/// still errors.
pub fn load_settings_or_default(explicit: Option<&Path>) -> anyhow::Result<HorarySettings> {
    if explicit.is_some() {
        return load_settings(explicit);
    }
    if !CONFIG_CANDIDATES.iter().any(|p| Path::new(p).exists()) {
        log::warn!("No horary.toml found in {:?}; using defaults", CONFIG_CANDIDATES);
        return Ok(HorarySettings::default());
    }
    load_settings(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_config() {
        let settings = parse_settings(
            r#"
            ephemeris_path = "/opt/sweph"

            [location]
            lat = 51.5074
            lon = -0.1278

            [judgment]
            moon_contact = "aspects"
            affliction_rules = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.ephemeris_path, Some(PathBuf::from("/opt/sweph")));
        assert_eq!(settings.location, Some(GeoLocation::new(51.5074, -0.1278)));
        assert_eq!(settings.judge.moon_contact, MoonContactMode::Aspects);
        assert!(settings.judge.affliction_rules);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(parse_settings("").unwrap(), HorarySettings::default());
    }

    #[test]
    fn test_judgment_defaults() {
        let settings = parse_settings("[judgment]\n").unwrap();
        assert_eq!(settings.judge.moon_contact, MoonContactMode::HouseProxy);
        assert!(!settings.judge.affliction_rules);
    }

    #[test]
    fn test_bad_location_is_an_error() {
        let err = parse_settings("[location]\nlat = 123.0\nlon = 0.0\n").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_unknown_moon_mode_is_an_error() {
        assert!(parse_settings("[judgment]\nmoon_contact = \"vibes\"\n").is_err());
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let missing = Path::new("/nonexistent/horary.toml");
        assert!(load_settings(Some(missing)).is_err());
        assert!(load_settings_or_default(Some(missing)).is_err());
    }
}
