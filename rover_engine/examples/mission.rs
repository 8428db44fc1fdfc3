use rover_engine::{Mission, MissionConfig};
use std::env;
use std::fs;
use std::path::Path;

fn main() {
    env_logger::init();

    let script_file = match env::args().nth(1) {
        Some(path) => Path::new(&path).to_path_buf(),
        None => Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/test_data/challenge.txt"),
    };
    let script = match fs::read_to_string(&script_file) {
        Ok(contents) => contents,
        Err(e) => panic!("Error reading script file {}: {}", script_file.display(), e),
    };

    let mut mission = Mission::new(MissionConfig {
        record_replay: true,
        ..Default::default()
    });

    let poses = match mission.run(&script) {
        Ok(poses) => poses,
        Err(e) => {
            eprintln!("Mission failed: {}", e);
            std::process::exit(1);
        }
    };

    let grid = mission.grid().expect("a successful run has a grid");
    grid.draw(&poses).expect("Could not draw the grid");

    let replay_filename = "/tmp/mission_replay.json";
    let replay = mission.replay().expect("replay recording is enabled");
    match serde_json::to_string_pretty(&replay) {
        Ok(json) => fs::write(replay_filename, json).expect("Could not write the replay"),
        Err(e) => panic!("Could not serialize the replay: {}", e),
    }

    println!("\nReplay written to {}", replay_filename);
}
