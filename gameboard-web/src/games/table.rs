//! Hold the ball: keep the ball on a board that lurches every few seconds

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::command::{NodeSpawn, SceneCommand};
use super::GameController;
use crate::physics::{Impulse, Tilt};

const BOARD_NODE: &str = "Root";
const BALL_NODE: &str = "sphere";
const PUSH: f32 = 0.3;
/// Seconds between board lurches
const LURCH_PERIOD: f64 = 3.0;
/// Delay between levelling the board and tipping it again
const TIP_DELAY: f32 = 0.5;
const TIP_ANGLE_DEGREES: f32 = 85.0;

pub struct TableGame {
    rng: StdRng,
    next_lurch: Option<f64>,
}

impl TableGame {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            next_lurch: None,
        }
    }
}

impl GameController for TableGame {
    fn name(&self) -> &'static str {
        "table"
    }

    fn start(&mut self) -> Vec<SceneCommand> {
        self.next_lurch = None;
        vec![SceneCommand::SpawnNode(NodeSpawn::new(
            BOARD_NODE,
            "Table.scn",
            Vector3::new(0.0, -0.5, -3.0),
        ))]
    }

    fn on_tilt(&mut self, tilt: Tilt) -> Vec<SceneCommand> {
        let impulse = match tilt {
            Tilt::Right => Impulse::new(PUSH, 0.0, 0.0),
            Tilt::Left => Impulse::new(-PUSH, 0.0, 0.0),
            _ => return Vec::new(),
        };
        vec![SceneCommand::impulse(BALL_NODE, impulse)]
    }

    /// The first tick starts the timer, each period after it lurches once.
    /// Missed periods are dropped, the next lurch is a full period from now.
    fn tick(&mut self, now: f64) -> Vec<SceneCommand> {
        let Some(due) = self.next_lurch else {
            self.next_lurch = Some(now + LURCH_PERIOD);
            return Vec::new();
        };
        if now < due {
            return Vec::new();
        }
        self.next_lurch = Some(now + LURCH_PERIOD);

        let tip = if self.rng.gen_bool(0.5) {
            TIP_ANGLE_DEGREES.to_radians()
        } else {
            0.0
        };
        vec![
            SceneCommand::SetRotationZ {
                node: BOARD_NODE.to_string(),
                radians: 0.0,
                delay: 0.0,
            },
            SceneCommand::SetRotationZ {
                node: BOARD_NODE.to_string(),
                radians: tip,
                delay: TIP_DELAY,
            },
        ]
    }
}
