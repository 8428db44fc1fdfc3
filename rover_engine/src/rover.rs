use crate::error::{InstructionError, OutOfBoundsError};
use crate::grid::Grid;
use crate::heading::Heading;
use log::trace;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single movement instruction for a rover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Instruction {
    /// `L`: rotate 90 degrees counter-clockwise.
    TurnLeft,
    /// `R`: rotate 90 degrees clockwise.
    TurnRight,
    /// `M`: move one cell forward, stopping at the edge of the grid.
    MoveForward,
}

impl Instruction {
    pub fn from_char(value: char) -> Result<Instruction, InstructionError> {
        match value {
            'L' => Ok(Instruction::TurnLeft),
            'R' => Ok(Instruction::TurnRight),
            'M' => Ok(Instruction::MoveForward),
            _ => Err(InstructionError::InvalidInstruction(value)),
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Instruction::TurnLeft => 'L',
            Instruction::TurnRight => 'R',
            Instruction::MoveForward => 'M',
        }
    }
}

impl Distribution<Instruction> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Instruction {
        match rng.gen_range(0..3) {
            0 => Instruction::TurnLeft,
            1 => Instruction::TurnRight,
            _ => Instruction::MoveForward,
        }
    }
}

/// The final position and heading of a rover.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: u32,
    pub y: u32,
    pub heading: Heading,
}

impl Pose {
    pub fn new(x: u32, y: u32, heading: Heading) -> Pose {
        Pose { x, y, heading }
    }
}

impl fmt::Display for Pose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.heading)
    }
}

/// What a single instruction did to a rover.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Step {
    Turn {
        from: Heading,
        to: Heading,
    },
    /// `clamped` is set when the grid edge stopped the rover short of a full cell.
    Move {
        from: (u32, u32),
        to: (u32, u32),
        clamped: bool,
    },
}

/// A rover driving on a borrowed [`Grid`].
///
/// The position always stays within the grid: moves that would leave it are
/// truncated at the edge instead of failing.
pub struct Rover<'a> {
    id: String,
    x: u32,
    y: u32,
    heading: Heading,
    grid: &'a Grid,
}

impl<'a> Rover<'a> {
    /// Deploys a rover on `grid`, failing when the starting position lies outside it.
    pub fn new(
        grid: &'a Grid,
        x: u32,
        y: u32,
        heading: Heading,
    ) -> Result<Rover<'a>, OutOfBoundsError> {
        if !grid.contains(x, y) {
            return Err(OutOfBoundsError {
                x,
                y,
                max_x: grid.max_x(),
                max_y: grid.max_y(),
            });
        }

        Ok(Rover {
            id: Uuid::new_v4().to_string(),
            x,
            y,
            heading,
            grid,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn pose(&self) -> Pose {
        Pose::new(self.x, self.y, self.heading)
    }

    /// Executes a single instruction token, e.g. `L` to turn left or `M` to move forward.
    pub fn apply_instruction(&mut self, token: char) -> Result<Step, InstructionError> {
        let instruction = Instruction::from_char(token)?;
        Ok(self.execute(instruction))
    }

    /// Executes a whole program such as `LMMRRM`, left to right.
    ///
    /// Whitespace is skipped. The first invalid token aborts the program and the
    /// remaining tokens are not executed.
    pub fn run_program(&mut self, program: &str) -> Result<Vec<Step>, InstructionError> {
        program
            .chars()
            .filter(|token| !token.is_whitespace())
            .map(|token| self.apply_instruction(token))
            .collect()
    }

    pub fn execute(&mut self, instruction: Instruction) -> Step {
        trace!("rover {} executing {}", self.id, instruction.symbol());

        match instruction {
            Instruction::TurnLeft => self.turn(self.heading.left()),
            Instruction::TurnRight => self.turn(self.heading.right()),
            Instruction::MoveForward => self.move_forward(),
        }
    }

    fn turn(&mut self, to: Heading) -> Step {
        let from = self.heading;
        self.heading = to;
        Step::Turn { from, to }
    }

    fn move_forward(&mut self) -> Step {
        let from = (self.x, self.y);

        // Saturating arithmetic keeps a rover at u32::MAX from overflowing
        // before the clamp against the grid bound applies.
        let clamped = match self.heading {
            Heading::North => {
                self.y = self.y.saturating_add(1).min(self.grid.max_y());
                from.1 == self.y
            }
            Heading::East => {
                self.x = self.x.saturating_add(1).min(self.grid.max_x());
                from.0 == self.x
            }
            Heading::South => {
                self.y = self.y.saturating_sub(1);
                from.1 == self.y
            }
            Heading::West => {
                self.x = self.x.saturating_sub(1);
                from.0 == self.x
            }
        };

        Step::Move {
            from,
            to: (self.x, self.y),
            clamped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn when_turning_the_position_is_unchanged() {
        let grid = Grid::new(5, 5);
        let mut rover = Rover::new(&grid, 2, 3, Heading::North).unwrap();

        let step = rover.apply_instruction('L').unwrap();

        assert_eq!(
            step,
            Step::Turn {
                from: Heading::North,
                to: Heading::West
            }
        );
        assert_eq!(rover.pose(), Pose::new(2, 3, Heading::West));

        rover.apply_instruction('R').unwrap();
        rover.apply_instruction('R').unwrap();
        assert_eq!(rover.pose(), Pose::new(2, 3, Heading::East));
    }

    #[test]
    fn when_moving_forward_the_rover_advances_one_cell_in_its_heading() {
        let grid = Grid::new(5, 5);

        let cases = [
            (Heading::North, (2, 3)),
            (Heading::East, (3, 2)),
            (Heading::South, (2, 1)),
            (Heading::West, (1, 2)),
        ];

        for (heading, (x, y)) in cases {
            let mut rover = Rover::new(&grid, 2, 2, heading).unwrap();
            let step = rover.apply_instruction('M').unwrap();

            assert_eq!(rover.pose(), Pose::new(x, y, heading));
            assert_eq!(
                step,
                Step::Move {
                    from: (2, 2),
                    to: (x, y),
                    clamped: false
                }
            );
        }
    }

    #[test]
    fn when_moving_off_an_edge_the_rover_is_clamped_to_the_boundary() {
        let grid = Grid::new(2, 2);

        let cases = [
            (2, 2, Heading::North),
            (2, 2, Heading::East),
            (0, 0, Heading::South),
            (0, 0, Heading::West),
        ];

        for (x, y, heading) in cases {
            let mut rover = Rover::new(&grid, x, y, heading).unwrap();
            let step = rover.apply_instruction('M').unwrap();

            assert_eq!(rover.pose(), Pose::new(x, y, heading));
            assert_eq!(
                step,
                Step::Move {
                    from: (x, y),
                    to: (x, y),
                    clamped: true
                }
            );
        }
    }

    #[test]
    fn when_moving_repeatedly_the_rover_stabilizes_at_the_boundary() {
        let grid = Grid::new(2, 2);
        let mut rover = Rover::new(&grid, 0, 0, Heading::North).unwrap();

        rover.run_program("MMMMMMMMMMMMM").unwrap();

        assert_eq!(rover.pose(), Pose::new(0, 2, Heading::North));
    }

    #[test]
    fn when_running_a_program_whitespace_is_ignored() {
        let grid = Grid::new(5, 5);
        let mut rover = Rover::new(&grid, 1, 2, Heading::North).unwrap();

        let steps = rover.run_program(" LM LM\tLMLM M ").unwrap();

        assert_eq!(steps.len(), 9);
        assert_eq!(rover.pose(), Pose::new(1, 3, Heading::North));
    }

    #[test]
    fn when_running_an_empty_program_the_rover_stays_put() {
        let grid = Grid::new(5, 5);
        let mut rover = Rover::new(&grid, 4, 4, Heading::South).unwrap();

        assert!(rover.run_program("").unwrap().is_empty());
        assert_eq!(rover.pose(), Pose::new(4, 4, Heading::South));
    }

    #[test]
    fn when_a_program_contains_an_invalid_token_the_rest_is_not_executed() {
        let grid = Grid::new(5, 5);
        let mut rover = Rover::new(&grid, 0, 0, Heading::North).unwrap();

        let error = rover.run_program("MMGMM").unwrap_err();

        assert_eq!(error, InstructionError::InvalidInstruction('G'));
        assert_eq!(error.to_string(), "invalid instruction: 'G'");
        assert_eq!(rover.pose(), Pose::new(0, 2, Heading::North));
    }

    #[test]
    fn when_instructions_are_lowercase_they_are_rejected() {
        assert_eq!(
            Instruction::from_char('m'),
            Err(InstructionError::InvalidInstruction('m'))
        );
    }

    #[test]
    fn when_running_random_programs_the_rover_never_leaves_the_grid() {
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let grid = Grid::new(rng.gen_range(0..6), rng.gen_range(0..6));
            let start_x = rng.gen_range(0..=grid.max_x());
            let start_y = rng.gen_range(0..=grid.max_y());
            let mut rover = Rover::new(&grid, start_x, start_y, rng.gen()).unwrap();

            for _ in 0..100 {
                let instruction: Instruction = rng.gen();
                rover.execute(instruction);

                let pose = rover.pose();
                assert!(grid.contains(pose.x, pose.y));
            }
        }
    }

    #[test]
    fn when_deploying_outside_the_grid_the_rover_is_rejected() {
        let grid = Grid::new(2, 2);

        for (x, y) in [(5, 0), (0, 3), (3, 3)] {
            let error = Rover::new(&grid, x, y, Heading::East).err().unwrap();

            assert_eq!(
                error,
                OutOfBoundsError {
                    x,
                    y,
                    max_x: 2,
                    max_y: 2
                }
            );
        }
        assert!(Rover::new(&grid, 2, 2, Heading::East).is_ok());
    }

    #[test]
    fn when_deploying_rovers_each_gets_a_unique_id() {
        let grid = Grid::new(1, 1);
        let first = Rover::new(&grid, 0, 0, Heading::North).unwrap();
        let second = Rover::new(&grid, 0, 0, Heading::North).unwrap();

        assert_eq!(first.id().len(), 36);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn when_displaying_a_pose_it_matches_the_position_instruction_format() {
        assert_eq!(Pose::new(5, 1, Heading::East).to_string(), "5 1 E");
    }
}
