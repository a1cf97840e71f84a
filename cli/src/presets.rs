use anyhow::Context;
use demineur_core::Preset;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Layout of a presets file:
///
/// ```toml
/// [[preset]]
/// name = "Tiny"
/// width = 8
/// height = 8
/// mine_probability = 0.12
/// ```
#[derive(Debug, Deserialize)]
struct PresetFile {
    #[serde(default)]
    preset: Vec<Preset>,
}

pub(crate) fn load(path: &Path) -> anyhow::Result<Vec<Preset>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Could not read presets from {}", path.display()))?;
    parse(&text).with_context(|| format!("Invalid presets file {}", path.display()))
}

pub(crate) fn parse(text: &str) -> anyhow::Result<Vec<Preset>> {
    let file: PresetFile = toml::from_str(text)?;
    for preset in &file.preset {
        preset
            .config()
            .with_context(|| format!("Preset {:?}", preset.name))?;
    }
    Ok(file.preset)
}
