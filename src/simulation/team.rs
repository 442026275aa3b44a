//! Fixed palette of team colors.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color and display name of a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TeamColor {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Display name, also used as the tally key for color consensus.
    pub name: &'static str,
}

/// One of the seven teams a boid can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Team {
    /// Red team.
    Red,
    /// Green team.
    Green,
    /// Blue team.
    Blue,
    /// Yellow team.
    Yellow,
    /// White team.
    White,
    /// Orange team.
    Orange,
    /// Pink team.
    Pink,
}

impl Team {
    /// All teams in palette order.
    pub const ALL: [Team; 7] = [
        Team::Red,
        Team::Green,
        Team::Blue,
        Team::Yellow,
        Team::White,
        Team::Orange,
        Team::Pink,
    ];

    /// Returns the palette entry for this team.
    pub const fn color(self) -> TeamColor {
        match self {
            Team::Red => TeamColor { r: 255, g: 0, b: 0, name: "red" },
            Team::Green => TeamColor { r: 0, g: 255, b: 0, name: "green" },
            Team::Blue => TeamColor { r: 0, g: 0, b: 255, name: "blue" },
            Team::Yellow => TeamColor { r: 255, g: 255, b: 0, name: "yellow" },
            Team::White => TeamColor { r: 255, g: 255, b: 255, name: "white" },
            Team::Orange => TeamColor { r: 255, g: 165, b: 0, name: "orange" },
            Team::Pink => TeamColor { r: 255, g: 192, b: 203, name: "pink" },
        }
    }

    /// Display name of the team.
    pub const fn name(self) -> &'static str {
        self.color().name
    }

    /// Palette index of the team (0..7).
    pub fn index(self) -> usize {
        self as usize
    }

    /// Looks up a team by palette index.
    ///
    /// Returns `None` for anything outside `0..7`, including negative indices,
    /// which callers treat as "pick at random".
    pub fn from_index(index: i32) -> Option<Team> {
        usize::try_from(index)
            .ok()
            .and_then(|i| Self::ALL.get(i).copied())
    }

    /// Looks up a team by display name.
    pub fn from_name(name: &str) -> Option<Team> {
        Self::ALL.into_iter().find(|team| team.name() == name)
    }

    /// Picks a team uniformly at random.
    pub fn random(rng: &mut impl Rng) -> Team {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
