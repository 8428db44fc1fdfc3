//! # rover_engine
//!
//! Simulates rovers driving on a bounded grid.
//! A mission script gives the grid size followed by a starting pose and a
//! movement program for each rover; running it yields every rover's final pose.

pub mod error;
pub mod grid;
pub mod heading;
pub mod mission;
pub mod rover;

pub use error::MissionError;
pub use grid::Grid;
pub use heading::Heading;
pub use mission::start;
pub use mission::CoordinateFormat;
pub use mission::Mission;
pub use mission::MissionConfig;
pub use rover::Instruction;
pub use rover::Pose;
pub use rover::Rover;

mod replay;
