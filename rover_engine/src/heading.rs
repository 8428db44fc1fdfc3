use crate::error::HeadingError;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Represents the compass direction a rover is facing.
///
/// The variants are ordered clockwise, so turning right advances the
/// ordinal and turning left walks it back, both modulo 4.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub enum Heading {
    #[serde(rename = "N")]
    North,
    #[serde(rename = "E")]
    East,
    #[serde(rename = "S")]
    South,
    #[serde(rename = "W")]
    West,
}

const CLOCKWISE: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

impl Heading {
    /// The heading 90 degrees counter-clockwise from this one, e.g. South -> East.
    pub fn left(self) -> Heading {
        CLOCKWISE[(self.ordinal() + 3) % 4]
    }

    /// The heading 90 degrees clockwise from this one, e.g. East -> South.
    pub fn right(self) -> Heading {
        CLOCKWISE[(self.ordinal() + 1) % 4]
    }

    /// Finds the heading for a compass symbol.
    ///
    /// # Arguments
    /// * `symbol` - One of `N`, `E`, `S` or `W`.
    pub fn from_symbol(symbol: &str) -> Result<Heading, HeadingError> {
        match symbol {
            "N" => Ok(Heading::North),
            "E" => Ok(Heading::East),
            "S" => Ok(Heading::South),
            "W" => Ok(Heading::West),
            _ => Err(HeadingError::InvalidDirection(symbol.to_string())),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Heading::North => 'N',
            Heading::East => 'E',
            Heading::South => 'S',
            Heading::West => 'W',
        }
    }

    fn ordinal(self) -> usize {
        self as usize
    }
}

impl FromStr for Heading {
    type Err = HeadingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Heading::from_symbol(s)
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Distribution<Heading> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Heading {
        match rng.gen_range(0..4) {
            0 => Heading::North,
            1 => Heading::East,
            2 => Heading::South,
            _ => Heading::West,
        }
    }
}
