use crate::heading::Heading;
use crate::rover::Pose;
use crossterm::{
    cursor::Hide,
    execute,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use serde::{Deserialize, Serialize};
use std::io::{stdout, Write};

/// The bounded area rovers drive on.
///
/// The lower bound is always `(0, 0)`; `max_x` and `max_y` are inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    max_x: u32,
    max_y: u32,
}

impl Grid {
    pub fn new(max_x: u32, max_y: u32) -> Grid {
        Grid { max_x, max_y }
    }

    pub fn max_x(&self) -> u32 {
        self.max_x
    }

    pub fn max_y(&self) -> u32 {
        self.max_y
    }

    pub fn contains(&self, x: u32, y: u32) -> bool {
        x <= self.max_x && y <= self.max_y
    }

    /// Renders the grid as text rows, north at the top.
    ///
    /// Empty cells are `.` and rovers are drawn as an arrow pointing the way
    /// they face. When rovers share a cell the last one wins.
    pub fn render(&self, poses: &[Pose]) -> Vec<String> {
        (0..=self.max_y)
            .rev()
            .map(|y| {
                (0..=self.max_x)
                    .map(|x| {
                        self.rover_at(x, y, poses)
                            .map_or('.', |(_, pose)| arrow(pose.heading))
                    })
                    .collect()
            })
            .collect()
    }

    /// Clears the terminal and draws the grid with one colour per rover.
    pub fn draw(&self, poses: &[Pose]) -> std::io::Result<()> {
        let mut stdout = stdout();

        execute!(
            stdout,
            Clear(ClearType::All),
            Hide,
            Print("Grid: "),
            Print(format!("{} x {}", self.max_x, self.max_y)),
            Print("\nRovers: "),
            Print(poses.len().to_string())
        )?;

        for (rover, pose) in poses.iter().enumerate() {
            execute!(
                stdout,
                SetForegroundColor(rover_to_color(rover)),
                Print("\nRover "),
                Print((rover + 1).to_string()),
                Print(": "),
                Print(pose.to_string()),
                SetForegroundColor(Color::Reset)
            )?;
        }
        execute!(stdout, Print("\n\n"))?;

        for y in (0..=self.max_y).rev() {
            for x in 0..=self.max_x {
                let rover = self.rover_at(x, y, poses);
                execute!(
                    stdout,
                    SetForegroundColor(
                        rover.map_or(Color::Reset, |(index, _)| rover_to_color(index))
                    ),
                    Print(rover.map_or('.', |(_, pose)| arrow(pose.heading))),
                    SetForegroundColor(Color::Reset)
                )?;
            }
            execute!(stdout, Print("\n"))?;
        }

        stdout.flush()
    }

    fn rover_at<'a>(&self, x: u32, y: u32, poses: &'a [Pose]) -> Option<(usize, &'a Pose)> {
        poses
            .iter()
            .enumerate()
            .rev()
            .find(|(_, pose)| pose.x == x && pose.y == y)
    }
}

fn arrow(heading: Heading) -> char {
    match heading {
        Heading::North => '^',
        Heading::East => '>',
        Heading::South => 'v',
        Heading::West => '<',
    }
}

fn rover_to_color(rover: usize) -> Color {
    match rover % 6 {
        0 => Color::Red,
        1 => Color::Green,
        2 => Color::Yellow,
        3 => Color::Blue,
        4 => Color::Magenta,
        _ => Color::Cyan,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_creating_a_grid_the_bounds_are_inclusive() {
        let grid = Grid::new(5, 3);

        assert_eq!(grid.max_x(), 5);
        assert_eq!(grid.max_y(), 3);
        assert!(grid.contains(0, 0));
        assert!(grid.contains(5, 3));
        assert!(!grid.contains(6, 3));
        assert!(!grid.contains(5, 4));
    }

    #[test]
    fn when_rendering_an_empty_grid_every_cell_is_land() {
        let grid = Grid::new(2, 1);

        assert_eq!(grid.render(&[]), vec!["...", "..."]);
    }

    #[test]
    fn when_rendering_rovers_north_is_the_top_row() {
        let grid = Grid::new(2, 2);
        let poses = [
            Pose::new(0, 0, Heading::East),
            Pose::new(2, 2, Heading::North),
            Pose::new(1, 1, Heading::West),
        ];

        assert_eq!(grid.render(&poses), vec!["..^", ".<.", ">.."]);
    }

    #[test]
    fn when_rendering_rovers_on_the_same_cell_the_last_one_is_drawn() {
        let grid = Grid::new(0, 0);
        let poses = [
            Pose::new(0, 0, Heading::East),
            Pose::new(0, 0, Heading::South),
        ];

        assert_eq!(grid.render(&poses), vec!["v"]);
    }
}
