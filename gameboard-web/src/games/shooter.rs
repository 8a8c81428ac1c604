//! Shooting gallery: pinch thumb and middle finger to fire at the eggs

use nalgebra::Vector3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::command::{NodeSpawn, SceneCommand};
use super::GameController;
use crate::gesture::{Finger, GestureClassifier, HandPose};
use crate::physics::{Contact, ContactCategory, Impulse, PhysicsTag};

pub const TARGET_COUNT: u32 = 10;
const BULLET_FORCE: f32 = 40.0;
const SHOTS_LABEL: &str = "shootsLabel";

pub struct ShooterGame {
    classifier: GestureClassifier,
    rng: StdRng,
    /// Camera position and forward direction from the last AR frame
    camera: Option<(Vector3<f32>, Vector3<f32>)>,
    hits: u32,
    bullets_fired: u32,
    targets_spawned: u32,
}

impl ShooterGame {
    pub fn new(classifier: GestureClassifier, seed: u64) -> Self {
        Self {
            classifier,
            rng: StdRng::seed_from_u64(seed),
            camera: None,
            hits: 0,
            bullets_fired: 0,
            targets_spawned: 0,
        }
    }

    pub fn hits(&self) -> u32 {
        self.hits
    }

    fn spawn_targets(&mut self) -> Vec<SceneCommand> {
        let tag = PhysicsTag::new(ContactCategory::Target, &[ContactCategory::Bullet]);
        (0..TARGET_COUNT)
            .map(|_| {
                self.targets_spawned += 1;
                let position = Vector3::new(
                    self.rng.gen_range(-40.0..=40.0),
                    self.rng.gen_range(-5.0..=5.0),
                    self.rng.gen_range(-40.0..=-30.0),
                );
                let name = format!("egg{}", self.targets_spawned);
                SceneCommand::SpawnNode(NodeSpawn::new(name, "egg.scn", position).tagged(tag))
            })
            .collect()
    }

    fn shots_text(&self) -> SceneCommand {
        SceneCommand::text(SHOTS_LABEL, format!("Shoots: {}", self.hits))
    }
}

impl GameController for ShooterGame {
    fn name(&self) -> &'static str {
        "shooter"
    }

    fn start(&mut self) -> Vec<SceneCommand> {
        let mut commands = self.spawn_targets();
        commands.push(self.shots_text());
        commands
    }

    fn on_camera(&mut self, position: Vector3<f32>, forward: Vector3<f32>) -> Vec<SceneCommand> {
        self.camera = Some((position, forward));
        Vec::new()
    }

    /// Fires on every frame the pinch is held
    fn on_hand_pose(&mut self, pose: Option<&HandPose>) -> Vec<SceneCommand> {
        let Some(pose) = pose else {
            return Vec::new();
        };
        if !self.classifier.detect_pinch(pose, Finger::Middle) {
            return Vec::new();
        }
        let Some((position, forward)) = self.camera else {
            log::debug!("pinch before first camera frame, not firing");
            return Vec::new();
        };

        self.bullets_fired += 1;
        let name = format!("bullet{}", self.bullets_fired);
        let tag = PhysicsTag::new(ContactCategory::Bullet, &[ContactCategory::Target]);
        vec![
            SceneCommand::SpawnNode(NodeSpawn::new(name.clone(), "sphere", position + forward).tagged(tag)),
            SceneCommand::impulse(&name, Impulse::along(forward, BULLET_FORCE)),
        ]
    }

    fn on_contact(&mut self, contact: &Contact) -> Vec<SceneCommand> {
        let Some((bullet, target)) = contact.between(ContactCategory::Bullet, ContactCategory::Target)
        else {
            return Vec::new();
        };

        self.hits += 1;
        let mut commands = vec![
            SceneCommand::remove(&target.node, 0.0),
            SceneCommand::remove(&bullet.node, 0.0),
        ];

        if self.hits == TARGET_COUNT {
            log::info!("all targets hit, respawning");
            self.hits = 0;
            commands.extend(self.spawn_targets());
        }
        commands.push(self.shots_text());
        commands
    }
}
