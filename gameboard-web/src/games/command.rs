//! Scene commands
//!
//! Everything a game wants done to the host's scene graph. Delays are in
//! seconds and scheduled by the host.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::physics::{Impulse, PhysicsTag};

/// A node to add to the scene
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSpawn {
    pub node: String,
    /// Scene file or primitive the host builds the node from
    pub asset: String,
    pub position: Vector3<f32>,
    pub rotation_y: f32,
    pub tag: Option<PhysicsTag>,
    pub delay: f32,
}

impl NodeSpawn {
    pub fn new(node: impl Into<String>, asset: impl Into<String>, position: Vector3<f32>) -> Self {
        Self {
            node: node.into(),
            asset: asset.into(),
            position,
            rotation_y: 0.0,
            tag: None,
            delay: 0.0,
        }
    }

    pub fn tagged(mut self, tag: PhysicsTag) -> Self {
        self.tag = Some(tag);
        self
    }

    pub fn rotated_y(mut self, radians: f32) -> Self {
        self.rotation_y = radians;
        self
    }

    pub fn delayed(mut self, seconds: f32) -> Self {
        self.delay = seconds;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneCommand {
    ApplyImpulse { node: String, impulse: Impulse },
    ClearForces { node: String },
    RemoveNode { node: String, delay: f32 },
    SpawnNode(NodeSpawn),
    SetHidden { node: String, hidden: bool },
    SetText { node: String, text: String },
    SetRotationZ { node: String, radians: f32, delay: f32 },
    Highlight { node: String, highlighted: bool },
    Restart { delay: f32 },
    PlaySound { sound: String },
}

impl SceneCommand {
    pub fn impulse(node: &str, impulse: Impulse) -> Self {
        SceneCommand::ApplyImpulse {
            node: node.to_string(),
            impulse,
        }
    }

    pub fn clear_forces(node: &str) -> Self {
        SceneCommand::ClearForces {
            node: node.to_string(),
        }
    }

    pub fn remove(node: &str, delay: f32) -> Self {
        SceneCommand::RemoveNode {
            node: node.to_string(),
            delay,
        }
    }

    pub fn text(node: &str, text: impl Into<String>) -> Self {
        SceneCommand::SetText {
            node: node.to_string(),
            text: text.into(),
        }
    }

    pub fn hidden(node: &str, hidden: bool) -> Self {
        SceneCommand::SetHidden {
            node: node.to_string(),
            hidden,
        }
    }

    /// Node name this command targets, if any
    pub fn node(&self) -> Option<&str> {
        match self {
            SceneCommand::ApplyImpulse { node, .. }
            | SceneCommand::ClearForces { node }
            | SceneCommand::RemoveNode { node, .. }
            | SceneCommand::SetHidden { node, .. }
            | SceneCommand::SetText { node, .. }
            | SceneCommand::SetRotationZ { node, .. }
            | SceneCommand::Highlight { node, .. } => Some(node.as_str()),
            SceneCommand::SpawnNode(spawn) => Some(spawn.node.as_str()),
            SceneCommand::Restart { .. } | SceneCommand::PlaySound { .. } => None,
        }
    }
}
