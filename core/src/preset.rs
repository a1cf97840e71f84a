use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

/// Named grid shape and density a player can pick from a menu.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub width: Coord,
    pub height: Coord,
    pub mine_probability: f64,
}

impl Preset {
    pub fn new(name: impl Into<String>, width: Coord, height: Coord, mine_probability: f64) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            mine_probability,
        }
    }

    /// The stock presets, easiest first.
    pub fn builtin() -> Vec<Preset> {
        vec![
            Self::new("Facile", 16, 16, 0.1),
            Self::new("Normale", 24, 24, 0.11),
            Self::new("Difficile", 32, 24, 0.12),
            Self::new("Hardcore", 48, 24, 0.14),
        ]
    }

    /// Case-insensitive lookup by name.
    pub fn find<'a>(presets: &'a [Preset], name: &str) -> Option<&'a Preset> {
        presets
            .iter()
            .find(|preset| preset.name.eq_ignore_ascii_case(name))
    }

    pub fn config(&self) -> Result<GameConfig> {
        GameConfig::new((self.width, self.height), self.mine_probability)
    }
}

/// Menu label, e.g. `Facile (16x16)`.
impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}x{})", self.name, self.width, self.height)
    }
}
