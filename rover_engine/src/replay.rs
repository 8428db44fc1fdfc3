use crate::grid::Grid;
use crate::heading::Heading;
use crate::rover::{Pose, Step};
use serde_json::{json, Value};

pub fn create_replay_logger(enabled: bool, grid: Grid) -> Box<dyn ReplayLogger> {
    match enabled {
        false => Box::new(NoOpReplayLogger {}),
        true => Box::new(JsonReplayLogger::new(grid)),
    }
}

pub trait ReplayLogger {
    #[allow(unused_variables)]
    fn log_deploy(&mut self, rover: usize, id: &str, pose: Pose) {}

    #[allow(unused_variables)]
    fn log_event(&mut self, rover: usize, event: Event) {}

    #[allow(unused_variables)]
    fn log_finish(&mut self, rover: usize, pose: Pose) {}

    fn clear(&mut self) {}

    fn to_json(&self) -> Option<Value> {
        None
    }

    fn log_step(&mut self, rover: usize, step: Step) {
        let event = match step {
            Step::Turn { from, to } => Event {
                event_type: EventType::Turn,
                heading: Some((from, to)),
                location: None,
                destination: None,
                clamped: false,
            },
            Step::Move { from, to, clamped } => Event {
                event_type: EventType::Move,
                heading: None,
                location: Some(from),
                destination: Some(to),
                clamped,
            },
        };

        self.log_event(rover, event);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub enum EventType {
    Turn,
    Move,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Event {
    event_type: EventType,
    heading: Option<(Heading, Heading)>,
    location: Option<(u32, u32)>,
    destination: Option<(u32, u32)>,
    clamped: bool,
}

struct RoverTrack {
    id: String,
    start: Pose,
    finish: Option<Pose>,
    events: Vec<Event>,
}

struct NoOpReplayLogger;
impl ReplayLogger for NoOpReplayLogger {}

/// Records every rover's deployment, steps and final pose as a JSON document.
struct JsonReplayLogger {
    grid: Grid,
    rovers: Vec<RoverTrack>,
}

impl JsonReplayLogger {
    pub fn new(grid: Grid) -> Self {
        JsonReplayLogger {
            grid,
            rovers: Vec::new(),
        }
    }

    fn track(&mut self, rover: usize) -> Option<&mut RoverTrack> {
        // Rovers are numbered from 1
        self.rovers.get_mut(rover.checked_sub(1)?)
    }
}

impl ReplayLogger for JsonReplayLogger {
    fn log_deploy(&mut self, rover: usize, id: &str, pose: Pose) {
        debug_assert_eq!(rover, self.rovers.len() + 1);

        self.rovers.push(RoverTrack {
            id: id.to_string(),
            start: pose,
            finish: None,
            events: Vec::new(),
        });
    }

    fn log_event(&mut self, rover: usize, event: Event) {
        if let Some(track) = self.track(rover) {
            track.events.push(event);
        }
    }

    fn log_finish(&mut self, rover: usize, pose: Pose) {
        if let Some(track) = self.track(rover) {
            track.finish = Some(pose);
        }
    }

    fn clear(&mut self) {
        self.rovers.clear();
    }

    fn to_json(&self) -> Option<Value> {
        let rovers: Vec<_> = self
            .rovers
            .iter()
            .map(|track| {
                json!({
                    "id": track.id,
                    "start": track.start,
                    "finish": track.finish,
                    "events": track.events,
                })
            })
            .collect();

        Some(json!({
            "grid": self.grid,
            "rovers": rovers,
        }))
    }
}
