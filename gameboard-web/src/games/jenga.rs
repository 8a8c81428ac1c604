//! Jenga: tap to build the tower, tap a block to pick it, nudge it out
//! with the arrow buttons

use std::f32::consts::FRAC_PI_2;

use nalgebra::Vector3;

use super::command::{NodeSpawn, SceneCommand};
use super::GameController;
use crate::error::{GameBoardError, Result};
use crate::physics::Impulse;

pub const LEVELS: usize = 10;
pub const BLOCKS_PER_LEVEL: usize = 3;
pub const BLOCK_WIDTH: f32 = 0.2;
pub const BLOCK_HEIGHT: f32 = 0.1;
pub const BLOCK_LENGTH: f32 = 0.6;

const FLOOR_NODE: &str = "plane";
/// Tower footprint center along z
const TOWER_Z: f32 = -1.0;
const PUSH: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlButton {
    Left,
    Right,
    Up,
    Down,
}

impl ControlButton {
    pub fn from_name(name: &str) -> Result<Self> {
        match name {
            "left" => Ok(ControlButton::Left),
            "right" => Ok(ControlButton::Right),
            "up" => Ok(ControlButton::Up),
            "down" => Ok(ControlButton::Down),
            other => Err(GameBoardError::UnknownButton(other.to_string())),
        }
    }

    fn push(self) -> Impulse {
        match self {
            ControlButton::Left => Impulse::new(-PUSH, 0.0, 0.0),
            ControlButton::Right => Impulse::new(PUSH, 0.0, 0.0),
            ControlButton::Up => Impulse::new(0.0, 0.0, -PUSH),
            ControlButton::Down => Impulse::new(0.0, 0.0, PUSH),
        }
    }
}

/// The thirty blocks, bottom level first. Even levels run along z,
/// odd levels are turned a quarter and run along x.
pub fn jenga_tower() -> Vec<NodeSpawn> {
    let asset = format!("box:{}x{}x{}", BLOCK_WIDTH, BLOCK_HEIGHT, BLOCK_LENGTH);
    let mut blocks = Vec::with_capacity(LEVELS * BLOCKS_PER_LEVEL);

    for level in 0..LEVELS {
        let y = level as f32 * BLOCK_HEIGHT + 0.05;
        for i in 0..BLOCKS_PER_LEVEL {
            let offset = (i as f32 - 1.0) * BLOCK_WIDTH;
            let name = format!("block{}_{}", level, i);

            let block = if level % 2 == 0 {
                NodeSpawn::new(name, asset.as_str(), Vector3::new(offset, y, TOWER_Z))
            } else {
                NodeSpawn::new(name, asset.as_str(), Vector3::new(0.0, y, offset + TOWER_Z))
                    .rotated_y(FRAC_PI_2)
            };
            blocks.push(block);
        }
    }
    blocks
}

#[derive(Default)]
pub struct JengaGame {
    built: bool,
    selected: Option<String>,
}

impl JengaGame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }
}

impl GameController for JengaGame {
    fn name(&self) -> &'static str {
        "jenga"
    }

    fn start(&mut self) -> Vec<SceneCommand> {
        vec![SceneCommand::SpawnNode(NodeSpawn::new(
            FLOOR_NODE,
            "plane:2x2",
            Vector3::new(0.0, 0.0, TOWER_Z),
        ))]
    }

    fn on_tap(&mut self) -> Vec<SceneCommand> {
        if self.built {
            return Vec::new();
        }
        self.built = true;
        jenga_tower().into_iter().map(SceneCommand::SpawnNode).collect()
    }

    fn on_node_selected(&mut self, node: &str) -> Vec<SceneCommand> {
        if !self.built || node == FLOOR_NODE {
            return Vec::new();
        }

        let mut commands = Vec::new();
        if let Some(previous) = self.selected.take() {
            commands.push(SceneCommand::Highlight {
                node: previous,
                highlighted: false,
            });
        }
        commands.push(SceneCommand::Highlight {
            node: node.to_string(),
            highlighted: true,
        });
        self.selected = Some(node.to_string());
        commands
    }

    fn on_button(&mut self, button: ControlButton) -> Vec<SceneCommand> {
        match &self.selected {
            Some(node) => vec![SceneCommand::impulse(node, button.push())],
            None => Vec::new(),
        }
    }
}
