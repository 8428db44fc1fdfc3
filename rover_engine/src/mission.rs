use crate::error::{Axis, CoordinateError, MissionError};
use crate::grid::Grid;
use crate::heading::Heading;
use crate::replay::{create_replay_logger, ReplayLogger};
use crate::rover::{Pose, Rover};
use log::{debug, warn};
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+").expect("token pattern is a valid regex"));

/// How coordinates and headings are located on the grid and position lines.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CoordinateFormat {
    /// Tokens are separated by runs of whitespace, so `10 12 N` is accepted.
    #[default]
    Whitespace,
    /// Single characters at offsets 0, 2 and 4. Coordinates are limited to one digit.
    FixedOffset,
}

/// Configuration for running a mission.
#[derive(Clone, Debug, Default)]
pub struct MissionConfig {
    pub coordinates: CoordinateFormat,
    /// Record every rover's steps, available afterwards from [`Mission::replay`].
    pub record_replay: bool,
}

/// Parses an instruction script and drives each rover through its program.
///
/// The script is a grid size line followed by one pair of lines per rover:
///
/// ```text
/// 5 5
/// 1 2 N
/// LMLMLMLMM
/// 3 3 E
/// MMRMMRMRRM
/// ```
pub struct Mission {
    config: MissionConfig,
    grid: Option<Grid>,
    replay_logger: Option<Box<dyn ReplayLogger>>,
}

impl Default for Mission {
    fn default() -> Self {
        Mission::new(MissionConfig::default())
    }
}

impl Mission {
    pub fn new(config: MissionConfig) -> Mission {
        Mission {
            config,
            grid: None,
            replay_logger: None,
        }
    }

    pub fn config(&self) -> &MissionConfig {
        &self.config
    }

    /// Runs every rover in the script and returns their final poses in input order.
    ///
    /// Processing stops at the first error and no poses are returned. A replay
    /// recorded by a failed run is cleared.
    ///
    /// # Arguments
    /// * `instructions` - The raw instruction script, one record per line.
    pub fn run(&mut self, instructions: &str) -> Result<Vec<Pose>, MissionError> {
        self.grid = None;
        self.replay_logger = None;

        let mut lines: Vec<&str> = instructions.lines().collect();
        // `lines` drops the empty text after a final line break, which is the
        // program of a last rover that has nothing to do
        if lines.len() % 2 == 0 && instructions.ends_with('\n') {
            lines.push("");
        }
        if lines.len() < 3 {
            return Err(MissionError::InsufficientInput { lines: lines.len() });
        }

        let grid = self.parse_grid_size(lines[0])?;
        debug!("grid spans (0, 0) to ({}, {})", grid.max_x(), grid.max_y());
        self.grid = Some(grid);

        let mut replay_logger = create_replay_logger(self.config.record_replay, grid);

        // A rover needs two lines: its starting position and the program that drives it
        let poses = lines[1..]
            .chunks(2)
            .enumerate()
            .map(|(index, pair)| self.drive_rover(&grid, index + 1, pair, &mut *replay_logger))
            .collect::<Result<Vec<Pose>, MissionError>>();

        if let Err(e) = &poses {
            debug!("mission aborted: {}", e);
            replay_logger.clear();
        }
        self.replay_logger = Some(replay_logger);

        poses
    }

    /// The grid of the last run, once its size line has been parsed.
    pub fn grid(&self) -> Option<Grid> {
        self.grid
    }

    /// The replay of the last run, if replay recording is enabled.
    pub fn replay(&self) -> Option<Value> {
        self.replay_logger.as_ref().and_then(|logger| logger.to_json())
    }

    fn drive_rover(
        &self,
        grid: &Grid,
        rover: usize,
        pair: &[&str],
        replay_logger: &mut dyn ReplayLogger,
    ) -> Result<Pose, MissionError> {
        let &[position, program] = pair else {
            return Err(MissionError::UnevenVehicleInstructions {
                rover,
                lines: pair.len(),
            });
        };

        let start = self.parse_position(rover, position)?;
        let mut vehicle = Rover::new(grid, start.x, start.y, start.heading)
            .map_err(|source| MissionError::PositionOutOfBounds { rover, source })?;
        debug!("rover {} ({}) deployed at {}", rover, vehicle.id(), start);
        replay_logger.log_deploy(rover, vehicle.id(), start);

        let steps = vehicle
            .run_program(program)
            .map_err(|source| MissionError::InvalidInstruction { rover, source })?;
        for step in steps {
            replay_logger.log_step(rover, step);
        }

        let pose = vehicle.pose();
        debug!("rover {} finished at {}", rover, pose);
        replay_logger.log_finish(rover, pose);

        Ok(pose)
    }

    /// Parses `X Y`, the maximum coordinates of the grid.
    fn parse_grid_size(&self, line: &str) -> Result<Grid, MissionError> {
        let tokens = self.tokens(line, 2);

        let max_x =
            parse_coordinate(tokens[0], Axis::X).map_err(MissionError::MalformedGridSize)?;
        let max_y =
            parse_coordinate(tokens[1], Axis::Y).map_err(MissionError::MalformedGridSize)?;

        Ok(Grid::new(max_x, max_y))
    }

    /// Parses `X Y H`, e.g. `3 1 N` is x: 3, y: 1 facing North.
    fn parse_position(&self, rover: usize, line: &str) -> Result<Pose, MissionError> {
        let tokens = self.tokens(line, 3);

        let x = parse_coordinate(tokens[0], Axis::X)
            .map_err(|source| MissionError::MalformedPosition { rover, source })?;
        let y = parse_coordinate(tokens[1], Axis::Y)
            .map_err(|source| MissionError::MalformedPosition { rover, source })?;
        let heading = Heading::from_symbol(tokens[2])
            .map_err(|source| MissionError::InvalidDirection { rover, source })?;

        Ok(Pose::new(x, y, heading))
    }

    /// Splits a line into exactly `count` tokens. Missing tokens are empty.
    fn tokens<'l>(&self, line: &'l str, count: usize) -> Vec<&'l str> {
        match self.config.coordinates {
            CoordinateFormat::Whitespace => {
                let mut found: Vec<&str> = TOKEN.find_iter(line).map(|m| m.as_str()).collect();
                if found.len() > count {
                    warn!("ignoring trailing tokens in {:?}", line);
                }
                found.resize(count, "");
                found
            }
            CoordinateFormat::FixedOffset => (0..count)
                .map(|i| line.get(i * 2..i * 2 + 1).unwrap_or(""))
                .collect(),
        }
    }
}

fn parse_coordinate(token: &str, axis: Axis) -> Result<u32, CoordinateError> {
    let value = token.parse().map_err(|source| CoordinateError::Invalid {
        axis,
        token: token.to_string(),
        source,
    })?;

    // `u32::from_str` accepts a leading `+`
    if !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordinateError::Signed {
            axis,
            token: token.to_string(),
        });
    }

    Ok(value)
}

/// Runs a mission with the default configuration.
///
/// # Arguments
/// * `instructions` - The raw instruction script, one record per line.
pub fn start(instructions: &str) -> Result<Vec<Pose>, MissionError> {
    Mission::default().run(instructions)
}
