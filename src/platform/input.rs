//! Keyboard input handling
//!
//! Key events become paddle intents and a one-shot start request. Nothing here
//! touches the paddle directly; the intent is applied by `sim::tick`.

use crate::sim::{PaddleIntent, TickInput};

/// What a key press asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Steer(PaddleIntent),
    Start,
}

/// Map a `KeyboardEvent.key` value to a command
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    match key {
        "ArrowLeft" | "a" | "A" => Some(KeyCommand::Steer(PaddleIntent::Left)),
        "ArrowRight" | "d" | "D" => Some(KeyCommand::Steer(PaddleIntent::Right)),
        " " | "Enter" => Some(KeyCommand::Start),
        _ => None,
    }
}

/// Tracks held direction keys and pending start presses
#[derive(Debug, Clone, Default)]
pub struct KeyboardState {
    intent: PaddleIntent,
    start_pending: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle key down. The newest direction pressed wins.
    pub fn key_down(&mut self, key: &str) -> Option<KeyCommand> {
        let command = command_for_key(key)?;
        match command {
            KeyCommand::Steer(intent) => self.intent = intent,
            KeyCommand::Start => self.start_pending = true,
        }
        Some(command)
    }

    /// Handle key up. Releasing a direction only stops the paddle if that
    /// direction is the current one, so a late key-up cannot cancel a newer
    /// key-down.
    pub fn key_up(&mut self, key: &str) {
        if let Some(KeyCommand::Steer(released)) = command_for_key(key)
            && released == self.intent
        {
            self.intent = PaddleIntent::Stop;
        }
    }

    pub fn intent(&self) -> PaddleIntent {
        self.intent
    }

    /// Build the input for the next update, consuming any start press
    pub fn take_input(&mut self) -> TickInput {
        TickInput {
            paddle: self.intent,
            start: std::mem::take(&mut self.start_pending),
        }
    }

    /// Drop held keys (window lost focus)
    pub fn clear(&mut self) {
        self.intent = PaddleIntent::Stop;
        self.start_pending = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut kb = KeyboardState::new();
        assert_eq!(
            kb.key_down("ArrowLeft"),
            Some(KeyCommand::Steer(PaddleIntent::Left))
        );
        assert_eq!(kb.intent(), PaddleIntent::Left);
        kb.key_up("ArrowLeft");
        assert_eq!(kb.intent(), PaddleIntent::Stop);
    }

    #[test]
    fn test_stale_release_ignored() {
        let mut kb = KeyboardState::new();
        kb.key_down("ArrowLeft");
        kb.key_down("ArrowRight");
        // Left released after Right was pressed: keep moving right
        kb.key_up("ArrowLeft");
        assert_eq!(kb.intent(), PaddleIntent::Right);
        kb.key_up("ArrowRight");
        assert_eq!(kb.intent(), PaddleIntent::Stop);
    }

    #[test]
    fn test_start_is_one_shot() {
        let mut kb = KeyboardState::new();
        assert_eq!(kb.key_down(" "), Some(KeyCommand::Start));
        assert!(kb.take_input().start);
        assert!(!kb.take_input().start);
    }

    #[test]
    fn test_unmapped_keys() {
        let mut kb = KeyboardState::new();
        assert_eq!(kb.key_down("q"), None);
        kb.key_up("Shift");
        assert_eq!(kb.take_input(), TickInput::default());
    }

    #[test]
    fn test_clear() {
        let mut kb = KeyboardState::new();
        kb.key_down("d");
        kb.key_down("Enter");
        kb.clear();
        assert_eq!(kb.take_input(), TickInput::default());
    }
}
