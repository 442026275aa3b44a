use serde::{Deserialize, Serialize};
use std::fmt;

/// RGBA tint of the cursor overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tint {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

/// What a pointer click or drag does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// Pointer input does nothing.
    #[default]
    Default,
    /// Pointer input spawns boids, evicting the oldest at the population cap.
    Spawn,
    /// Pointer input erases boids under the cursor.
    Erase,
    /// Pointer input selects boids under the cursor.
    Select,
}

impl EditMode {
    /// All modes in key binding order.
    pub const ALL: [EditMode; 4] = [
        EditMode::Default,
        EditMode::Spawn,
        EditMode::Erase,
        EditMode::Select,
    ];

    /// Diameter of the cursor circle; operations act within half of it.
    pub const fn radius(self) -> f64 {
        match self {
            EditMode::Default => 50.0,
            EditMode::Spawn => 300.0,
            EditMode::Erase => 200.0,
            EditMode::Select => 25.0,
        }
    }

    /// Cursor overlay tint.
    pub const fn tint(self) -> Tint {
        match self {
            EditMode::Default => Tint { r: 255, g: 215, b: 141, a: 5 },
            EditMode::Spawn => Tint { r: 94, g: 140, b: 102, a: 10 },
            EditMode::Erase => Tint { r: 140, g: 80, b: 94, a: 10 },
            EditMode::Select => Tint { r: 164, g: 179, b: 193, a: 10 },
        }
    }

    /// Key that switches to this mode.
    pub const fn key_bind(self) -> char {
        match self {
            EditMode::Default => 'd',
            EditMode::Spawn => 's',
            EditMode::Erase => 'e',
            EditMode::Select => 'v',
        }
    }

    /// Mode bound to `key`, if any.
    pub fn from_key(key: char) -> Option<EditMode> {
        Self::ALL.into_iter().find(|mode| mode.key_bind() == key)
    }

    /// Short usage hints shown in the stats panel while the mode is active.
    pub fn hints(self) -> &'static [&'static str] {
        match self {
            EditMode::Default => &[],
            EditMode::Spawn => &[
                "click or drag to spawn boids",
                "press 1-7 to pick a spawn color",
                "press 0 for random spawn colors",
            ],
            EditMode::Erase => &["click or drag to erase boids"],
            EditMode::Select => &["click to select boids", "hold shift to deselect the rest"],
        }
    }

    /// Lowercase mode name.
    pub const fn name(self) -> &'static str {
        match self {
            EditMode::Default => "default",
            EditMode::Spawn => "spawn",
            EditMode::Erase => "erase",
            EditMode::Select => "select",
        }
    }
}

impl fmt::Display for EditMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
