// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A defensive lineup slot for one inning.
///
/// The set of positions is a closed domain constant: the eleven field
/// positions plus the "Out" slot for a player sitting the inning.
/// "Out" is a grid slot like any other and holds at most one player per
/// inning; it never counts toward inning completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Pitcher.
    Pitcher,
    /// Catcher.
    Catcher,
    /// First Base.
    #[serde(rename = "First Base")]
    FirstBase,
    /// Second Base.
    #[serde(rename = "Second Base")]
    SecondBase,
    /// Third Base.
    #[serde(rename = "Third Base")]
    ThirdBase,
    /// Short Stop.
    #[serde(rename = "Short Stop")]
    ShortStop,
    /// Left Field.
    #[serde(rename = "Left Field")]
    LeftField,
    /// Left Center.
    #[serde(rename = "Left Center")]
    LeftCenter,
    /// Center Field.
    #[serde(rename = "Center Field")]
    CenterField,
    /// Right Center.
    #[serde(rename = "Right Center")]
    RightCenter,
    /// Right Field.
    #[serde(rename = "Right Field")]
    RightField,
    /// Sitting out this inning.
    Out,
}

impl Position {
    /// All twelve positions in display order.
    pub const ALL: [Self; 12] = [
        Self::Pitcher,
        Self::Catcher,
        Self::FirstBase,
        Self::SecondBase,
        Self::ThirdBase,
        Self::ShortStop,
        Self::LeftField,
        Self::LeftCenter,
        Self::CenterField,
        Self::RightCenter,
        Self::RightField,
        Self::Out,
    ];

    /// The eleven field positions, excluding "Out".
    pub const FIELD_POSITIONS: [Self; 11] = [
        Self::Pitcher,
        Self::Catcher,
        Self::FirstBase,
        Self::SecondBase,
        Self::ThirdBase,
        Self::ShortStop,
        Self::LeftField,
        Self::LeftCenter,
        Self::CenterField,
        Self::RightCenter,
        Self::RightField,
    ];

    /// Parses a position from its display string.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnknownPosition` if the string does not match
    /// a known position.
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "Pitcher" => Ok(Self::Pitcher),
            "Catcher" => Ok(Self::Catcher),
            "First Base" => Ok(Self::FirstBase),
            "Second Base" => Ok(Self::SecondBase),
            "Third Base" => Ok(Self::ThirdBase),
            "Short Stop" => Ok(Self::ShortStop),
            "Left Field" => Ok(Self::LeftField),
            "Left Center" => Ok(Self::LeftCenter),
            "Center Field" => Ok(Self::CenterField),
            "Right Center" => Ok(Self::RightCenter),
            "Right Field" => Ok(Self::RightField),
            "Out" => Ok(Self::Out),
            _ => Err(DomainError::UnknownPosition(s.to_string())),
        }
    }

    /// Returns the display string for this position.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pitcher => "Pitcher",
            Self::Catcher => "Catcher",
            Self::FirstBase => "First Base",
            Self::SecondBase => "Second Base",
            Self::ThirdBase => "Third Base",
            Self::ShortStop => "Short Stop",
            Self::LeftField => "Left Field",
            Self::LeftCenter => "Left Center",
            Self::CenterField => "Center Field",
            Self::RightCenter => "Right Center",
            Self::RightField => "Right Field",
            Self::Out => "Out",
        }
    }

    /// Returns whether this is the "Out" slot.
    #[must_use]
    pub const fn is_out(&self) -> bool {
        matches!(self, Self::Out)
    }
}

impl FromStr for Position {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
