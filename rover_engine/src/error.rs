//! Error types for parsing and running a mission.

use std::fmt;
use std::num::ParseIntError;
use thiserror::Error;

/// A compass symbol that is not one of `N`, `E`, `S` or `W`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum HeadingError {
    #[error("invalid direction: '{0}'")]
    InvalidDirection(String),
}

/// A movement token that is not one of `L`, `R` or `M`.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum InstructionError {
    #[error("invalid instruction: '{0}'")]
    InvalidInstruction(char),
}

/// The axis a coordinate token belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Axis {
    X,
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => write!(f, "x"),
            Axis::Y => write!(f, "y"),
        }
    }
}

/// A coordinate token that is not a plain run of ASCII digits.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum CoordinateError {
    #[error("{axis} coordinate '{token}': {source}")]
    Invalid {
        axis: Axis,
        token: String,
        source: ParseIntError,
    },

    #[error("{axis} coordinate '{token}': sign is not allowed")]
    Signed { axis: Axis, token: String },
}

impl CoordinateError {
    pub fn axis(&self) -> Axis {
        match self {
            CoordinateError::Invalid { axis, .. } | CoordinateError::Signed { axis, .. } => *axis,
        }
    }

    pub fn token(&self) -> &str {
        match self {
            CoordinateError::Invalid { token, .. } | CoordinateError::Signed { token, .. } => token,
        }
    }
}

/// A starting position that lies outside the grid.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[error("({x}, {y}) is outside the grid ({max_x}, {max_y})")]
pub struct OutOfBoundsError {
    pub x: u32,
    pub y: u32,
    pub max_x: u32,
    pub max_y: u32,
}

/// Errors that abort a mission.
///
/// Every variant names the phase that failed. Rovers are numbered from 1 in
/// the order their instruction pairs appear.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MissionError {
    #[error("at least 3 instruction lines must be given, got {lines}")]
    InsufficientInput { lines: usize },

    #[error("parsing grid size instruction: {0}")]
    MalformedGridSize(#[source] CoordinateError),

    #[error("invalid instructions for rover {rover}, must be 2 lines for each rover but got {lines}")]
    UnevenVehicleInstructions { rover: usize, lines: usize },

    #[error("parsing rover {rover} position instruction: {source}")]
    MalformedPosition {
        rover: usize,
        source: CoordinateError,
    },

    #[error("parsing rover {rover} position instruction: {source}")]
    InvalidDirection { rover: usize, source: HeadingError },

    #[error("deploying rover {rover}: {source}")]
    PositionOutOfBounds {
        rover: usize,
        source: OutOfBoundsError,
    },

    #[error("instructing rover {rover}: {source}")]
    InvalidInstruction {
        rover: usize,
        source: InstructionError,
    },
}
