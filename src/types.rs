//! Cube move types
//!
//! Faces, turn modifiers and moves as proper Rust enums instead of the
//! single-character strings that travel over the wire. The token form
//! (`R`, `U'`, `F2`) is only produced and parsed at the edges.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString};

use crate::error::TrainerError;

/// One of the six faces of the cube
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Face {
    #[strum(serialize = "U")]
    Up,
    #[strum(serialize = "D")]
    Down,
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "F")]
    Front,
    #[strum(serialize = "B")]
    Back,
}

impl Face {
    /// All faces, in draw order
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Down,
        Face::Right,
        Face::Left,
        Face::Front,
        Face::Back,
    ];

    /// The face on the other side of the cube along the same axis
    pub fn opposite(self) -> Face {
        match self {
            Face::Up => Face::Down,
            Face::Down => Face::Up,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Whether a turn of `other` may directly follow a turn of `self`
    pub fn can_precede(self, other: Face) -> bool {
        other != self && other != self.opposite()
    }

    /// Single-letter notation
    pub fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Down => 'D',
            Face::Right => 'R',
            Face::Left => 'L',
            Face::Front => 'F',
            Face::Back => 'B',
        }
    }

    /// Human-readable name used in move explanations
    pub fn name(self) -> &'static str {
        match self {
            Face::Up => "Upper face",
            Face::Down => "Down face",
            Face::Right => "Right face",
            Face::Left => "Left face",
            Face::Front => "Front face",
            Face::Back => "Back face",
        }
    }
}

/// Rotation applied to a face turn
///
/// `Display` gives the rotation descriptor used in explanations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
pub enum Modifier {
    /// Quarter turn clockwise (no suffix)
    #[default]
    #[strum(serialize = "clockwise")]
    Clockwise,
    /// Quarter turn counterclockwise (`'` suffix)
    #[strum(serialize = "counterclockwise")]
    CounterClockwise,
    /// Half turn (`2` suffix)
    #[strum(serialize = "180 degrees")]
    Double,
}

impl Modifier {
    /// All modifiers, in draw order
    pub const ALL: [Modifier; 3] = [
        Modifier::Clockwise,
        Modifier::CounterClockwise,
        Modifier::Double,
    ];

    /// Token suffix for this modifier
    pub fn suffix(self) -> &'static str {
        match self {
            Modifier::Clockwise => "",
            Modifier::CounterClockwise => "'",
            Modifier::Double => "2",
        }
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        match suffix {
            "" => Some(Modifier::Clockwise),
            "'" => Some(Modifier::CounterClockwise),
            "2" => Some(Modifier::Double),
            _ => None,
        }
    }
}

/// A single face turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Move {
    pub face: Face,
    pub modifier: Modifier,
}

impl Move {
    pub fn new(face: Face, modifier: Modifier) -> Self {
        Self { face, modifier }
    }

    /// Natural-language description, e.g. "Right face 180 degrees"
    pub fn explain(&self) -> String {
        format!("{} {}", self.face.name(), self.modifier)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.modifier.suffix())
    }
}

impl FromStr for Move {
    type Err = TrainerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars
            .next()
            .ok_or_else(|| TrainerError::validation("empty move token"))?;
        let face = Face::ALL
            .into_iter()
            .find(|face| face.letter() == letter)
            .ok_or_else(|| TrainerError::validation(format!("unknown face in move '{}'", s)))?;
        let modifier = Modifier::from_suffix(chars.as_str()).ok_or_else(|| {
            TrainerError::validation(format!("unknown modifier in move '{}'", s))
        })?;
        Ok(Self { face, modifier })
    }
}

impl From<Move> for String {
    fn from(mv: Move) -> Self {
        mv.to_string()
    }
}

impl TryFrom<String> for Move {
    type Error = TrainerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
