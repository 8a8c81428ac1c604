//! Emoji mirror: pull faces to collect every emoji in the tray

use super::command::SceneCommand;
use super::GameController;
use crate::pose::{classify_expression, BlendShapes, Expression};

const EMOJI_LABEL: &str = "emojiLabel";
const EMOJI_TRAY: &str = "emojiStack";

pub struct EmojiGame {
    /// Expressions not matched yet, in tray order
    remaining: Vec<Expression>,
}

impl EmojiGame {
    pub fn new() -> Self {
        Self {
            remaining: Expression::MATCHABLE.to_vec(),
        }
    }

    pub fn remaining(&self) -> &[Expression] {
        &self.remaining
    }

    fn tray_text(&self) -> String {
        self.remaining
            .iter()
            .map(Expression::emoji)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for EmojiGame {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController for EmojiGame {
    fn name(&self) -> &'static str {
        "emoji"
    }

    fn start(&mut self) -> Vec<SceneCommand> {
        self.remaining = Expression::MATCHABLE.to_vec();
        vec![
            SceneCommand::text(EMOJI_LABEL, ""),
            SceneCommand::text(EMOJI_TRAY, self.tray_text()),
        ]
    }

    /// A matched expression leaves the tray, repeats of it change nothing
    fn on_blend_shapes(&mut self, shapes: &BlendShapes) -> Vec<SceneCommand> {
        let expression = classify_expression(shapes);
        let Some(index) = self.remaining.iter().position(|&e| e == expression) else {
            return Vec::new();
        };

        self.remaining.remove(index);
        log::info!("matched {:?}, {} left", expression, self.remaining.len());
        vec![
            SceneCommand::text(EMOJI_TRAY, self.tray_text()),
            SceneCommand::text(EMOJI_LABEL, expression.emoji()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_removes_emoji_once() {
        let mut game = EmojiGame::new();
        let smile = BlendShapes::new().with("mouthSmileLeft", 0.6);

        let commands = game.on_blend_shapes(&smile);
        assert_eq!(commands[1], SceneCommand::text(EMOJI_LABEL, "😊"));
        assert_eq!(game.remaining().len(), 5);
        assert!(!game.remaining().contains(&Expression::Smile));

        assert!(game.on_blend_shapes(&smile).is_empty());
        assert_eq!(game.remaining().len(), 5);
    }

    #[test]
    fn test_neutral_face_changes_nothing() {
        let mut game = EmojiGame::new();
        assert!(game.on_blend_shapes(&BlendShapes::new()).is_empty());
        assert_eq!(game.remaining().len(), 6);
    }

    #[test]
    fn test_start_resets_tray() {
        let mut game = EmojiGame::new();
        game.on_blend_shapes(&BlendShapes::new().with("jawOpen", 0.9));
        let commands = game.start();
        assert_eq!(commands[1], SceneCommand::text(EMOJI_TRAY, "😊 😲 😢 😘 🤔 😉"));
        assert_eq!(game.remaining().len(), 6);
    }
}
