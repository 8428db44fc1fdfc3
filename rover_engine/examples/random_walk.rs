use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rover_engine::{Heading, Instruction, Mission};

struct RandomPlanner {
    rng: StdRng,
}

impl RandomPlanner {
    fn new(seed: u64) -> RandomPlanner {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn position(&mut self, max_x: u32, max_y: u32) -> String {
        let heading: Heading = self.rng.gen();
        format!(
            "{} {} {}",
            self.rng.gen_range(0..=max_x),
            self.rng.gen_range(0..=max_y),
            heading
        )
    }

    fn program(&mut self, length: usize) -> String {
        (0..length)
            .map(|_| self.rng.gen::<Instruction>().symbol())
            .collect()
    }
}

fn main() {
    env_logger::init();

    let (max_x, max_y) = (9, 6);
    let mut planner = RandomPlanner::new(0);

    // Generate a script for a handful of rovers wandering the grid
    let mut script = vec![format!("{} {}", max_x, max_y)];
    for _ in 0..4 {
        script.push(planner.position(max_x, max_y));
        script.push(planner.program(40));
    }
    let script = script.join("\n");

    let mut mission = Mission::default();
    let poses = match mission.run(&script) {
        Ok(poses) => poses,
        Err(e) => panic!("Generated script was rejected: {}", e),
    };

    println!("{}\n", script);
    match mission.grid() {
        Some(grid) => {
            for row in grid.render(&poses) {
                println!("{}", row);
            }
        }
        None => unreachable!("a successful run has a grid"),
    }
    for pose in &poses {
        println!("{}", pose);
    }
}
